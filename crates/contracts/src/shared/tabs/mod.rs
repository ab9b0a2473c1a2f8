//! Модель адаптивного контейнера табов
//!
//! Содержит:
//! - `registry` - описание табов и их порядок
//! - `selection` - активный таб и переходы между табами
//! - `panel_map` - маппинг tab.key → панель

pub mod panel_map;
pub mod registry;
pub mod selection;

pub use panel_map::PanelMap;
pub use registry::{validate, TabDescriptor, TabId, TabRegistry};
pub use selection::{TabSelection, Transition};
