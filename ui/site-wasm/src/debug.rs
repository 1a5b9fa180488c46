//! Console banner and the `?debug` section overlay.

use crate::dom;
use eq_types::SiteConfig;
use gloo_console::log;

const LABEL_STYLE: &str = "position: absolute; top: 10px; right: 10px; background: red; \
                           color: white; padding: 10px; font-size: 12px; z-index: 10000;";

/// Whether the page URL asks for the debug overlay.
pub fn requested(cfg: &SiteConfig) -> bool {
    !cfg.debug_marker.is_empty()
        && dom::window()
            .location()
            .search()
            .is_ok_and(|q| q.contains(&cfg.debug_marker))
}

pub fn banner() {
    log!(
        "%c EQUIPILATES ",
        "font-size: 50px; font-weight: bold; background: linear-gradient(135deg, #00F5FF, #FF00FF); padding: 20px; color: white;"
    );
    log!("%c🚀 Website desenvolvido com tecnologia de ponta", "font-size: 16px; color: #00F5FF;");
    log!("%c💜 Scroll experience by EquiPilates", "font-size: 14px; color: #FF00FF;");
}

/// Outline the page and number every `<section>`.
pub fn show_overlay() {
    let _ = dom::body().style().set_property("outline", "2px solid red");
    log!("Debug mode enabled");

    for (index, section) in dom::query_all("section").iter().enumerate() {
        let Some(label) = dom::create_element("div") else {
            continue;
        };
        dom::set_text(&label, &format!("Section {}", index + 1));
        let _ = label.set_attribute("style", LABEL_STYLE);
        dom::set_style(section, "position", "relative");
        let _ = section.append_child(&label);
    }
}
