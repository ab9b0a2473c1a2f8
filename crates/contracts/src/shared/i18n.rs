//! Каталоги переводов.
//!
//! Каталог - JSON-дерево на namespace, ключи - пути через точку (`tabs.account`).
//! Отсутствующий ключ не ошибка: `translate` возвращает сам ключ.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Поддерживаемые языки интерфейса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    Nl,
    De,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Nl => "nl",
            Locale::De => "de",
        }
    }

    /// Название языка на нём самом (для селектора)
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::Nl => "Nederlands",
            Locale::De => "Deutsch",
        }
    }

    pub fn all() -> [Locale; 4] {
        [Locale::En, Locale::Fr, Locale::Nl, Locale::De]
    }

    /// Разбор BCP 47 тега по основному subtag (`fr-FR` → `Fr`). Неизвестный → `En`.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|l| l.as_str() == primary)
            .unwrap_or_default()
    }
}

/// Результат поиска, чтобы вызывающий мог сообщить о промахе
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(String),
    /// TranslationMiss: вместо перевода показывается ключ
    Missing(String),
}

impl Lookup {
    pub fn into_string(self) -> String {
        match self {
            Lookup::Found(s) | Lookup::Missing(s) => s,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Lookup::Missing(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    namespaces: HashMap<String, Value>,
    fallback: Option<Box<Catalog>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет namespace из JSON
    pub fn with_namespace(mut self, namespace: &str, json: &str) -> Result<Self, serde_json::Error> {
        let tree: Value = serde_json::from_str(json)?;
        self.namespaces.insert(namespace.to_string(), tree);
        Ok(self)
    }

    /// Каталог, к которому обращаются при отсутствии ключа
    pub fn with_fallback(mut self, fallback: Catalog) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub fn lookup(&self, namespace: &str, key: &str) -> Lookup {
        let found = self
            .namespaces
            .get(namespace)
            .and_then(|tree| key.split('.').try_fold(tree, |node, part| node.get(part)))
            .and_then(Value::as_str);

        match found {
            Some(text) => Lookup::Found(text.to_string()),
            None => match &self.fallback {
                Some(fallback) => fallback.lookup(namespace, key),
                None => Lookup::Missing(key.to_string()),
            },
        }
    }

    pub fn translate(&self, namespace: &str, key: &str) -> String {
        self.lookup(namespace, key).into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: &str = r#"{
        "dialog": { "heading": "Settings" },
        "tabs": { "account": "Profile", "audio": "Audio" }
    }"#;
    const FR: &str = r#"{
        "dialog": { "heading": "Paramètres" },
        "tabs": { "account": "Profil" }
    }"#;

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("fr-FR"), Locale::Fr);
        assert_eq!(Locale::from_tag("nl"), Locale::Nl);
        assert_eq!(Locale::from_tag("DE_at"), Locale::De);
        assert_eq!(Locale::from_tag("ja-JP"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn test_translate_dotted_key() {
        let catalog = Catalog::new().with_namespace("settings", EN).unwrap();
        assert_eq!(catalog.translate("settings", "dialog.heading"), "Settings");
        assert_eq!(catalog.translate("settings", "tabs.account"), "Profile");
    }

    #[test]
    fn test_missing_key_returns_raw_key() {
        let catalog = Catalog::new().with_namespace("settings", EN).unwrap();
        let lookup = catalog.lookup("settings", "tabs.video");
        assert!(lookup.is_missing());
        assert_eq!(lookup.into_string(), "tabs.video");
        assert_eq!(catalog.translate("rooms", "join"), "join");
        // Поддерево - не строка.
        assert_eq!(catalog.translate("settings", "tabs"), "tabs");
    }

    #[test]
    fn test_fallback_catalog() {
        let en = Catalog::new().with_namespace("settings", EN).unwrap();
        let fr = Catalog::new()
            .with_namespace("settings", FR)
            .unwrap()
            .with_fallback(en);
        assert_eq!(fr.translate("settings", "tabs.account"), "Profil");
        assert_eq!(fr.translate("settings", "tabs.audio"), "Audio");
        assert_eq!(fr.translate("settings", "tabs.general"), "tabs.general");
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(Catalog::new().with_namespace("settings", "{ nope").is_err());
    }
}
