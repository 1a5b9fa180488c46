use serde::{Deserialize, Serialize};
use std::fmt;

pub const SLIDE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LanguageCode {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en")]
    En,
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "de")]
    De,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 4] = [
        LanguageCode::PtBr,
        LanguageCode::En,
        LanguageCode::Es,
        LanguageCode::De,
    ];

    /// Parse a language tag. Matching is case-insensitive and a bare primary
    /// subtag is accepted (`pt` resolves to `pt-BR`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase().replace('_', "-");
        let primary = tag.split('-').next().unwrap_or_default();
        match primary {
            "pt" => Some(Self::PtBr),
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            "de" => Some(Self::De),
            _ => None,
        }
    }

    /// Parse a tag, falling back to the default language.
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_default()
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::En => "en",
            Self::Es => "es",
            Self::De => "de",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cta {
    pub label: &'static str,
    pub href: &'static str,
}

impl Cta {
    pub fn target(&self) -> LinkTarget {
        LinkTarget::for_href(self.href)
    }
}

/// One hero frame's text content. `description` may carry inline markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideContent {
    pub number: &'static str,
    pub tag: &'static str,
    pub title: [&'static str; 2],
    pub description: &'static str,
    pub primary: Cta,
    pub secondary: Cta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Blank,
    SameContext,
}

impl LinkTarget {
    pub fn for_href(href: &str) -> Self {
        if href.starts_with("http") {
            Self::Blank
        } else {
            Self::SameContext
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Blank => "_blank",
            Self::SameContext => "_self",
        }
    }

    pub fn rel(self) -> Option<&'static str> {
        match self {
            Self::Blank => Some("noopener"),
            Self::SameContext => None,
        }
    }
}

/// Storage key for the persisted display language.
pub const DEFAULT_LANGUAGE_KEY: &str = "equipilates.lang";

/// Page-level settings, read from the inline `#site-config` JSON block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub messaging_host: String,
    pub messaging_recipient: String,
    pub contact_email: String,
    pub email_subject: String,
    pub storage_key: String,
    pub autoplay_interval_ms: u32,
    pub swipe_threshold_px: f64,
    pub debug_marker: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            messaging_host: "wa.me".to_owned(),
            messaging_recipient: "5511999999999".to_owned(),
            contact_email: "contato@equipilates.com.br".to_owned(),
            email_subject: "Orçamento de equipamentos - EquiPilates".to_owned(),
            storage_key: DEFAULT_LANGUAGE_KEY.to_owned(),
            autoplay_interval_ms: 5_000,
            swipe_threshold_px: 50.0,
            debug_marker: "debug".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON block; anything unparsable yields the defaults.
    pub fn from_json_or_default(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        serde_json::from_str(raw).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tags_parse_loosely() {
        assert_eq!(LanguageCode::from_tag("pt-BR"), Some(LanguageCode::PtBr));
        assert_eq!(LanguageCode::from_tag("PT"), Some(LanguageCode::PtBr));
        assert_eq!(LanguageCode::from_tag("en-US"), Some(LanguageCode::En));
        assert_eq!(LanguageCode::from_tag("de_DE"), Some(LanguageCode::De));
        assert_eq!(LanguageCode::from_tag("fr"), None);
        assert_eq!(LanguageCode::from_tag_or_default("xx"), LanguageCode::PtBr);
    }

    #[test]
    fn tags_are_stable() {
        for lang in LanguageCode::ALL {
            assert_eq!(LanguageCode::from_tag(lang.as_tag()), Some(lang));
        }
    }

    #[test]
    fn link_targets_follow_href_scheme() {
        assert_eq!(LinkTarget::for_href("https://wa.me/1"), LinkTarget::Blank);
        assert_eq!(LinkTarget::for_href("#contact"), LinkTarget::SameContext);
        assert_eq!(LinkTarget::Blank.rel(), Some("noopener"));
        assert_eq!(LinkTarget::SameContext.as_attr(), "_self");
    }

    #[test]
    fn config_fills_missing_fields() {
        let cfg = SiteConfig::from_json_or_default(r#"{"messaging_recipient":"5521000000000"}"#);
        assert_eq!(cfg.messaging_recipient, "5521000000000");
        assert_eq!(cfg.autoplay_interval_ms, 5_000);
        assert_eq!(cfg.storage_key, DEFAULT_LANGUAGE_KEY);
    }

    #[test]
    fn malformed_config_falls_back() {
        assert_eq!(SiteConfig::from_json_or_default("{not json"), SiteConfig::default());
        assert_eq!(SiteConfig::from_json_or_default(""), SiteConfig::default());
    }
}
