//! Localization table for the site.
//!
//! `strings_for` / `slides_for` are total: any language without data resolves
//! to the default language. `lookup` falls back key-by-key and returns `None`
//! only when the default dictionary lacks the key too.

pub mod apply;
mod slides;
mod strings;

pub use apply::{ApplyReport, Localizable, apply_strings};

use eq_types::{LanguageCode, SLIDE_COUNT, SlideContent};
use std::collections::HashMap;
use std::sync::LazyLock;

pub type StringDictionary = HashMap<&'static str, &'static str>;

static DICTIONARIES: LazyLock<[StringDictionary; 4]> =
    LazyLock::new(|| LanguageCode::ALL.map(|lang| table_for(lang).iter().copied().collect()));

fn slot(lang: LanguageCode) -> usize {
    match lang {
        LanguageCode::PtBr => 0,
        LanguageCode::En => 1,
        LanguageCode::Es => 2,
        LanguageCode::De => 3,
    }
}

fn table_for(lang: LanguageCode) -> &'static [(&'static str, &'static str)] {
    match lang {
        LanguageCode::PtBr => strings::PT_BR,
        LanguageCode::En => strings::EN,
        LanguageCode::Es => strings::ES,
        LanguageCode::De => strings::DE,
    }
}

pub fn strings_for(lang: LanguageCode) -> &'static StringDictionary {
    &DICTIONARIES[slot(lang)]
}

pub fn strings_for_tag(tag: &str) -> &'static StringDictionary {
    strings_for(LanguageCode::from_tag_or_default(tag))
}

pub fn slides_for(lang: LanguageCode) -> &'static [SlideContent; SLIDE_COUNT] {
    match lang {
        LanguageCode::PtBr => &slides::PT_BR,
        LanguageCode::En => &slides::EN,
        LanguageCode::Es => &slides::ES,
        LanguageCode::De => &slides::DE,
    }
}

pub fn slides_for_tag(tag: &str) -> &'static [SlideContent; SLIDE_COUNT] {
    slides_for(LanguageCode::from_tag_or_default(tag))
}

pub fn lookup(lang: LanguageCode, key: &str) -> Option<&'static str> {
    strings_for(lang)
        .get(key)
        .or_else(|| strings_for(LanguageCode::default()).get(key))
        .copied()
}
