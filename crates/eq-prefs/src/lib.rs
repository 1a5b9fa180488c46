use anyhow::{Result, anyhow};
use eq_types::{DEFAULT_LANGUAGE_KEY, LanguageCode};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::{debug, warn};

pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// Store used when the browser refuses access to persistent storage.
#[derive(Default)]
pub struct NoopPreferenceStore;

impl PreferenceStore for NoopPreferenceStore {
    fn load(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn save(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let guard = self
            .values
            .read()
            .map_err(|_| anyhow!("preference map poisoned"))?;
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut guard = self
            .values
            .write()
            .map_err(|_| anyhow!("preference map poisoned"))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}

/// The persisted display language. Never fails: any storage problem reads
/// as the default language and writes are dropped.
pub struct LanguagePreference<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> LanguagePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn with_default_key(store: S) -> Self {
        Self::new(store, DEFAULT_LANGUAGE_KEY)
    }

    pub fn get(&self) -> LanguageCode {
        match self.store.load(&self.key) {
            Ok(Some(raw)) => LanguageCode::from_tag(&raw).unwrap_or_else(|| {
                debug!("ignoring unknown stored language {:?}", raw);
                LanguageCode::default()
            }),
            Ok(None) => LanguageCode::default(),
            Err(err) => {
                debug!("language preference unavailable: {}", err);
                LanguageCode::default()
            }
        }
    }

    pub fn set(&self, lang: LanguageCode) {
        if let Err(err) = self.store.save(&self.key, lang.as_tag()) {
            warn!("failed to persist language {}: {}", lang, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eq_types::SiteConfig;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>> {
            Err(anyhow!("storage disabled"))
        }

        fn save(&self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow!("storage disabled"))
        }
    }

    #[test]
    fn absent_value_reads_as_default() {
        let pref = LanguagePreference::with_default_key(InMemoryPreferenceStore::default());
        assert_eq!(pref.get(), LanguageCode::PtBr);
    }

    #[test]
    fn set_then_get_persists_tag() {
        let store = InMemoryPreferenceStore::default();
        let pref = LanguagePreference::new(&store, "lang");
        pref.set(LanguageCode::De);
        assert_eq!(pref.get(), LanguageCode::De);
        assert_eq!(store.load("lang").unwrap().as_deref(), Some("de"));
    }

    #[test]
    fn garbage_value_reads_as_default() {
        let store = InMemoryPreferenceStore::default();
        store.save(DEFAULT_LANGUAGE_KEY, "klingon").unwrap();
        let pref = LanguagePreference::with_default_key(&store);
        assert_eq!(pref.get(), LanguageCode::PtBr);
    }

    #[test]
    fn broken_store_degrades_silently() {
        let pref = LanguagePreference::with_default_key(BrokenStore);
        pref.set(LanguageCode::Es);
        assert_eq!(pref.get(), LanguageCode::PtBr);
    }

    #[test]
    fn default_key_matches_site_config() {
        let store = InMemoryPreferenceStore::default();
        LanguagePreference::with_default_key(&store).set(LanguageCode::Es);
        let from_config = LanguagePreference::new(&store, SiteConfig::default().storage_key);
        assert_eq!(from_config.get(), LanguageCode::Es);
    }

    #[test]
    fn noop_store_never_remembers() {
        let pref = LanguagePreference::with_default_key(NoopPreferenceStore);
        pref.set(LanguageCode::En);
        assert_eq!(pref.get(), LanguageCode::PtBr);
    }
}
