//! EquiPilates site behavior, compiled to WebAssembly.
//!
//! Binds the platform-independent `eq-*` crates to the page: hero carousel,
//! language switching, the recommendation wizard and the scroll/pointer
//! effects. Each concern lives in its own module.

pub mod config;
pub mod debug;
pub mod dom;
pub mod effects;
pub mod events;
pub mod hero;
pub mod i18n;
pub mod nav;
pub mod state;
pub mod wizard;

use eq_types::LanguageCode;
use tracing::info;
use tracing_wasm::WASMLayerConfigBuilder;
use wasm_bindgen::prelude::*;

/// WASM entry point, called when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let cfg = config::load();
    let debug_mode = debug::requested(&cfg);
    let level = if debug_mode {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new().set_max_level(level).build(),
    );
    state::set_config(cfg);

    init(debug_mode)
}

fn init(debug_mode: bool) -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    let lang = state::language_preference().get();
    i18n::apply_page(lang, &els.lang_buttons);

    hero::init(&els.hero, lang);
    if lang != LanguageCode::default() {
        // The markup ships the first slide in the default language.
        state::with_carousel(|c| c.set_language(lang));
    }

    if let Some(nav_els) = &els.nav {
        nav::init(nav_els);
    }
    nav::init_smooth_anchors();
    effects::init();
    events::bind_events(&els);

    debug::banner();
    if debug_mode {
        debug::show_overlay();
    }
    info!("site ready ({})", lang);
    Ok(())
}
