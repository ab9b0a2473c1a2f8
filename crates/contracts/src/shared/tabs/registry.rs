//! Реестр табов - единственный источник правды о составе и порядке табов.

use crate::shared::errors::ConfigurationError;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Непрозрачный ключ таба
pub trait TabId: Copy + Eq + Hash + Debug + 'static {
    fn as_str(&self) -> &'static str;
}

/// Описание одного таба: ключ, иконка и ключ локализации заголовка.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDescriptor<K: TabId> {
    pub key: K,
    pub icon: &'static str,
    pub label_key: &'static str,
}

impl<K: TabId> TabDescriptor<K> {
    pub const fn new(key: K, icon: &'static str, label_key: &'static str) -> Self {
        Self {
            key,
            icon,
            label_key,
        }
    }
}

/// Проверяет, что ключи табов не повторяются.
pub fn validate<K: TabId>(descriptors: &[TabDescriptor<K>]) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::with_capacity(descriptors.len());
    for descriptor in descriptors {
        if !seen.insert(descriptor.key) {
            return Err(ConfigurationError::DuplicateTabKey(
                descriptor.key.as_str().to_string(),
            ));
        }
    }
    Ok(())
}

/// Упорядоченный список табов. Порядок добавления = порядок отображения.
///
/// Создаётся только через [`TabRegistry::new`], поэтому ключи всегда уникальны
/// и есть хотя бы один таб.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRegistry<K: TabId> {
    tabs: Vec<TabDescriptor<K>>,
}

impl<K: TabId> TabRegistry<K> {
    pub fn new(tabs: Vec<TabDescriptor<K>>) -> Result<Self, ConfigurationError> {
        if tabs.is_empty() {
            return Err(ConfigurationError::EmptyRegistry);
        }
        validate(&tabs)?;
        Ok(Self { tabs })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabDescriptor<K>> {
        self.tabs.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.tabs.iter().map(|t| t.key)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Первый таб. Пустой реестр отклоняется при создании, поэтому всегда есть.
    pub fn first(&self) -> K {
        self.tabs[0].key
    }

    pub fn contains(&self, key: K) -> bool {
        self.tabs.iter().any(|t| t.key == key)
    }

    pub fn get(&self, key: K) -> Option<&TabDescriptor<K>> {
        self.tabs.iter().find(|t| t.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::settings_tab::SettingsTab;

    #[test]
    fn test_validate_unique_keys() {
        let tabs = vec![
            TabDescriptor::new(SettingsTab::Account, "account", "tabs.account"),
            TabDescriptor::new(SettingsTab::Audio, "speaker", "tabs.audio"),
        ];
        assert_eq!(validate(&tabs), Ok(()));
        assert!(TabRegistry::new(tabs).is_ok());
    }

    #[test]
    fn test_validate_duplicate_key() {
        let tabs = vec![
            TabDescriptor::new(SettingsTab::Account, "account", "tabs.account"),
            TabDescriptor::new(SettingsTab::Video, "video", "tabs.video"),
            TabDescriptor::new(SettingsTab::Account, "settings", "tabs.general"),
        ];
        assert_eq!(
            validate(&tabs),
            Err(ConfigurationError::DuplicateTabKey("account".to_string()))
        );
        assert_eq!(
            TabRegistry::new(tabs),
            Err(ConfigurationError::DuplicateTabKey("account".to_string()))
        );
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert_eq!(
            TabRegistry::<SettingsTab>::new(vec![]),
            Err(ConfigurationError::EmptyRegistry)
        );
    }

    #[test]
    fn test_registry_preserves_order() {
        let registry = SettingsTab::registry();
        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(keys, SettingsTab::all().to_vec());
        assert_eq!(registry.first(), SettingsTab::Account);
        assert_eq!(
            registry.get(SettingsTab::Video).map(|t| t.label_key),
            Some("tabs.video")
        );
    }
}
