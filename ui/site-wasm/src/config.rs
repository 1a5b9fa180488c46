//! Page configuration from the inline `#site-config` JSON block.

use crate::dom;
use eq_types::SiteConfig;

const CONFIG_ID: &str = "site-config";

/// Read the config block. A missing or malformed block yields the defaults.
pub fn load() -> SiteConfig {
    dom::by_id(CONFIG_ID)
        .and_then(|el| el.text_content())
        .map(|raw| SiteConfig::from_json_or_default(&raw))
        .unwrap_or_default()
}
