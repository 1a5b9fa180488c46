//! Page translation and the language switcher.

use crate::dom;
use crate::state;
use eq_i18n::{Localizable, apply_strings};
use eq_types::LanguageCode;
use tracing::info;
use web_sys::Element;

const TEXT_ATTR: &str = "data-i18n";
const PLACEHOLDER_ATTR: &str = "data-i18n-placeholder";
const LANG_ATTR: &str = "data-lang";

/// A page element tagged with `data-i18n` and/or `data-i18n-placeholder`.
struct DomNode(Element);

impl Localizable for DomNode {
    fn text_key(&self) -> Option<String> {
        self.0.get_attribute(TEXT_ATTR)
    }

    fn placeholder_key(&self) -> Option<String> {
        self.0.get_attribute(PLACEHOLDER_ATTR)
    }

    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_placeholder(&mut self, text: &str) {
        let _ = self.0.set_attribute("placeholder", text);
    }
}

/// Translate the page, mark the matching switcher button and update
/// `<html lang>`.
pub fn apply_page(lang: LanguageCode, lang_buttons: &[Element]) {
    let mut nodes: Vec<DomNode> = dom::query_all(&format!("[{TEXT_ATTR}], [{PLACEHOLDER_ATTR}]"))
        .into_iter()
        .map(DomNode)
        .collect();
    let report = apply_strings(lang, nodes.iter_mut());
    state::set_language(lang);

    for button in lang_buttons {
        let tag = button.get_attribute(LANG_ATTR).unwrap_or_default();
        dom::toggle_class(button, "active", LanguageCode::from_tag(&tag) == Some(lang));
    }
    if let Some(root) = dom::document().document_element() {
        let _ = root.set_attribute("lang", lang.as_tag());
    }
    info!(
        "language {} applied ({} texts, {} placeholders)",
        lang, report.texts, report.placeholders
    );
}

/// Handle a click on a `[data-lang]` button.
pub fn switch_to(tag: &str, lang_buttons: &[Element]) {
    let lang = LanguageCode::from_tag_or_default(tag);
    state::language_preference().set(lang);
    apply_page(lang, lang_buttons);
    state::with_carousel(|c| c.set_language(lang));
}
