//! Localization context.
//!
//! Catalogs are embedded at build time and parsed once. Non-English catalogs fall back
//! to English, and a key missing everywhere is displayed as-is.

use contracts::shared::i18n::{Catalog, Locale, Lookup};
use leptos::prelude::*;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

const SETTINGS_NS: &str = "settings";

fn embedded_sources(locale: Locale) -> &'static str {
    match locale {
        Locale::En => include_str!("../../locales/en/settings.json"),
        Locale::Fr => include_str!("../../locales/fr/settings.json"),
        Locale::Nl => include_str!("../../locales/nl/settings.json"),
        Locale::De => include_str!("../../locales/de/settings.json"),
    }
}

fn load_catalog(locale: Locale) -> Catalog {
    Catalog::new()
        .with_namespace(SETTINGS_NS, embedded_sources(locale))
        .unwrap_or_else(|err| {
            log::error!("locale '{}': invalid settings catalog: {}", locale.as_str(), err);
            Catalog::new()
        })
}

static CATALOGS: Lazy<HashMap<Locale, Catalog>> = Lazy::new(|| {
    Locale::all()
        .into_iter()
        .map(|locale| {
            let catalog = match locale {
                Locale::En => load_catalog(locale),
                _ => load_catalog(locale).with_fallback(load_catalog(Locale::En)),
            };
            (locale, catalog)
        })
        .collect()
});

static REPORTED_MISSES: Lazy<Mutex<HashSet<String>>> = Lazy::new(Default::default);

/// Translates `key` in `namespace` for `locale`. Misses are logged once per key.
pub fn translate(locale: Locale, namespace: &str, key: &str) -> String {
    let lookup = CATALOGS
        .get(&locale)
        .map(|catalog| catalog.lookup(namespace, key))
        .unwrap_or_else(|| Lookup::Missing(key.to_string()));

    if lookup.is_missing() {
        let id = format!("{}:{}:{}", locale.as_str(), namespace, key);
        if let Ok(mut reported) = REPORTED_MISSES.lock() {
            if reported.insert(id) {
                log::warn!(
                    "missing translation '{}:{}' for locale '{}'",
                    namespace,
                    key,
                    locale.as_str()
                );
            }
        }
    }
    lookup.into_string()
}

/// Browser language from `navigator.language`.
pub fn browser_locale() -> Locale {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .map(|tag| Locale::from_tag(&tag))
        .unwrap_or_default()
}

#[derive(Clone, Copy)]
pub struct I18nContext {
    pub locale: RwSignal<Locale>,
}

impl I18nContext {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale: RwSignal::new(locale),
        }
    }

    /// Reactive when called inside a tracking scope (reads `locale`).
    pub fn t(&self, namespace: &str, key: &str) -> String {
        translate(self.locale.get(), namespace, key)
    }

    /// Shorthand for the `settings` namespace.
    pub fn ts(&self, key: &str) -> String {
        self.t(SETTINGS_NS, key)
    }
}

pub fn provide_i18n(locale: Locale) -> I18nContext {
    let ctx = I18nContext::new(locale);
    provide_context(ctx);
    ctx
}

pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>()
        .expect("I18nContext not provided in context (call provide_i18n in app root)")
}
