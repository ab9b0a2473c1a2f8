//! Состояние активного таба.

use super::registry::{TabId, TabRegistry};

/// Смена активного таба: какая панель снимается и какая монтируется.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<K: TabId> {
    pub unmounted: K,
    pub mounted: K,
}

/// Текущий активный таб. Пустого состояния после создания нет.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelection<K: TabId> {
    active: K,
}

impl<K: TabId> TabSelection<K> {
    /// Ключ по умолчанию, если он зарегистрирован, иначе первый таб реестра.
    pub fn initial(registry: &TabRegistry<K>, default_key: Option<K>) -> Self {
        let active = default_key
            .filter(|key| registry.contains(*key))
            .unwrap_or_else(|| registry.first());
        Self { active }
    }

    pub fn active(&self) -> K {
        self.active
    }

    /// Активирует `key`. Возвращает `None`, если ничего не изменилось: таб уже активен
    /// или не зарегистрирован.
    pub fn select(&mut self, registry: &TabRegistry<K>, key: K) -> Option<Transition<K>> {
        if key == self.active || !registry.contains(key) {
            return None;
        }
        let unmounted = std::mem::replace(&mut self.active, key);
        Some(Transition {
            unmounted,
            mounted: key,
        })
    }
}
