//! Pushes the current dictionary into tagged page nodes.

use crate::lookup;
use eq_types::LanguageCode;
use tracing::debug;

/// A page node that opts into translation through a dictionary key.
pub trait Localizable {
    fn text_key(&self) -> Option<String>;
    fn placeholder_key(&self) -> Option<String>;
    fn set_text(&mut self, text: &str);
    fn set_placeholder(&mut self, text: &str);
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ApplyReport {
    pub texts: usize,
    pub placeholders: usize,
    pub missing: usize,
}

/// Translate every node carrying a key. Nodes whose key is unknown keep
/// their current content.
pub fn apply_strings<'a, N, I>(lang: LanguageCode, nodes: I) -> ApplyReport
where
    N: Localizable + 'a,
    I: IntoIterator<Item = &'a mut N>,
{
    let mut report = ApplyReport::default();
    for node in nodes {
        if let Some(key) = node.text_key() {
            match lookup(lang, &key) {
                Some(text) => {
                    node.set_text(text);
                    report.texts += 1;
                }
                None => report.missing += 1,
            }
        }
        if let Some(key) = node.placeholder_key() {
            match lookup(lang, &key) {
                Some(text) => {
                    node.set_placeholder(text);
                    report.placeholders += 1;
                }
                None => report.missing += 1,
            }
        }
    }
    debug!(
        "applied {} strings, {} placeholders ({} missing) for {}",
        report.texts, report.placeholders, report.missing, lang
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct FakeNode {
        key: Option<&'static str>,
        placeholder_key: Option<&'static str>,
        text: String,
        placeholder: String,
    }

    impl Localizable for FakeNode {
        fn text_key(&self) -> Option<String> {
            self.key.map(str::to_owned)
        }

        fn placeholder_key(&self) -> Option<String> {
            self.placeholder_key.map(str::to_owned)
        }

        fn set_text(&mut self, text: &str) {
            self.text = text.to_owned();
        }

        fn set_placeholder(&mut self, text: &str) {
            self.placeholder = text.to_owned();
        }
    }

    fn page() -> Vec<FakeNode> {
        vec![
            FakeNode {
                key: Some("wizard.title"),
                text: "original".into(),
                ..Default::default()
            },
            FakeNode {
                key: Some("not.translated"),
                text: "keep me".into(),
                ..Default::default()
            },
            FakeNode {
                placeholder_key: Some("wizard.q3.placeholder"),
                ..Default::default()
            },
            FakeNode {
                text: "untagged".into(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn translates_tagged_nodes_only() {
        let mut nodes = page();
        let report = apply_strings(LanguageCode::En, nodes.iter_mut());

        assert_eq!(nodes[0].text, "Build the ideal studio");
        assert_eq!(nodes[1].text, "keep me");
        assert_eq!(nodes[2].placeholder, "e.g. 1 Reformer, 1 Chair");
        assert_eq!(nodes[3].text, "untagged");
        assert_eq!(
            report,
            ApplyReport {
                texts: 1,
                placeholders: 1,
                missing: 1
            }
        );
    }

    #[test]
    fn applying_twice_matches_applying_once() {
        let mut once = page();
        apply_strings(LanguageCode::De, once.iter_mut());

        let mut twice = page();
        apply_strings(LanguageCode::De, twice.iter_mut());
        apply_strings(LanguageCode::De, twice.iter_mut());

        assert_eq!(once, twice);
    }

    #[test]
    fn switching_back_restores_default_text() {
        let mut nodes = page();
        apply_strings(LanguageCode::Es, nodes.iter_mut());
        apply_strings(LanguageCode::PtBr, nodes.iter_mut());
        assert_eq!(nodes[0].text, "Monte o studio ideal");
    }
}
