//! Общая модель диалога настроек: реестр табов, активный таб, политика раскладки,
//! классификация viewport, каталоги переводов и конфигурация.
//!
//! Без доступа к DOM, тестируется нативно.

pub mod enums;
pub mod shared;
