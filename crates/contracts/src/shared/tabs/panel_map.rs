//! Адаптер панелей: ключ таба → панель.

use super::registry::{TabId, TabRegistry};
use crate::shared::errors::ConfigurationError;
use std::collections::HashMap;

/// Поиск панели произвольного типа `P` по ключу таба.
#[derive(Clone)]
pub struct PanelMap<K: TabId, P> {
    panels: HashMap<K, P>,
}

impl<K: TabId, P> PanelMap<K, P> {
    pub fn new(entries: impl IntoIterator<Item = (K, P)>) -> Self {
        Self {
            panels: entries.into_iter().collect(),
        }
    }

    pub fn resolve(&self, key: &K) -> Result<&P, ConfigurationError> {
        self.panels
            .get(key)
            .ok_or_else(|| ConfigurationError::MissingPanel(key.as_str().to_string()))
    }

    /// Ошибка на первом ключе реестра (в порядке отображения) без панели.
    pub fn ensure_covers(&self, registry: &TabRegistry<K>) -> Result<(), ConfigurationError> {
        registry.keys().try_for_each(|key| self.resolve(&key).map(|_| ()))
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
