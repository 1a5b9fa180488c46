//! Global page state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! The carousel accessor uses `try_borrow_mut` and skips the event when the
//! controller is already borrowed further up the stack.

use crate::hero::HeroCarousel;
use anyhow::{Result, anyhow};
use eq_motion::NavAutoHide;
use eq_prefs::{LanguagePreference, PreferenceStore};
use eq_types::{LanguageCode, SiteConfig};
use gloo_storage::{LocalStorage, Storage, errors::StorageError};
use std::cell::{Cell, RefCell};
use tracing::debug;

thread_local! {
    static CONFIG: RefCell<SiteConfig> = RefCell::new(SiteConfig::default());
    static CAROUSEL: RefCell<Option<HeroCarousel>> = const { RefCell::new(None) };
    static NAV: RefCell<NavAutoHide> = RefCell::new(NavAutoHide::default());
    static LANGUAGE: Cell<LanguageCode> = Cell::new(LanguageCode::default());
}

/// Language currently shown on the page.
pub fn language() -> LanguageCode {
    LANGUAGE.with(Cell::get)
}

pub fn set_language(lang: LanguageCode) {
    LANGUAGE.with(|l| l.set(lang));
}

pub fn config() -> SiteConfig {
    CONFIG.with(|c| c.borrow().clone())
}

pub fn set_config(cfg: SiteConfig) {
    CONFIG.with(|c| *c.borrow_mut() = cfg);
}

pub fn install_carousel(carousel: HeroCarousel) {
    CAROUSEL.with(|c| *c.borrow_mut() = Some(carousel));
}

/// Run `f` against the carousel, if it is installed and not already in use.
pub fn with_carousel<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut HeroCarousel) -> R,
{
    CAROUSEL.with(|c| match c.try_borrow_mut() {
        Ok(mut guard) => guard.as_mut().map(f),
        Err(_) => {
            debug!("carousel busy, event skipped");
            None
        }
    })
}

/// Feed a scroll position to the nav auto-hide memory.
pub fn nav_should_hide(scroll_y: f64) -> bool {
    NAV.with(|n| n.borrow_mut().update(scroll_y))
}

// ── Persistence ──

/// `PreferenceStore` over `window.localStorage`. Values are stored as JSON
/// strings the way `gloo-storage` writes them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPreferenceStore;

impl LocalPreferenceStore {
    fn available() -> bool {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .is_some()
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        if !Self::available() {
            return Err(anyhow!("local storage unavailable"));
        }
        match LocalStorage::get::<String>(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(anyhow!("reading {key}: {e}")),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        if !Self::available() {
            return Err(anyhow!("local storage unavailable"));
        }
        LocalStorage::set(key, value).map_err(|e| anyhow!("writing {key}: {e}"))
    }
}

pub fn language_preference() -> LanguagePreference<LocalPreferenceStore> {
    LanguagePreference::new(LocalPreferenceStore, config().storage_key)
}
