//! Классификация viewport и наблюдатель брейкпоинтов.
//!
//! Два порога независимы, поэтому зон три:
//!
//! ```text
//!   0 ........ 768 ........ 800 ........ ∞
//!   |  Mobile   |   Medium   |    Wide    |
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Пороги ширины в CSS-пикселях
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub wide_min_width_px: u32,
    pub mobile_min_width_px: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            wide_min_width_px: 800,
            mobile_min_width_px: 768,
        }
    }
}

impl Breakpoints {
    /// Media query для широкого экрана
    pub fn wide_query(&self) -> String {
        format!("(min-width: {}px)", self.wide_min_width_px)
    }

    /// Media query для НЕ мобильного экрана (mobile - её отрицание)
    pub fn mobile_query(&self) -> String {
        format!("(min-width: {}px)", self.mobile_min_width_px)
    }

    pub fn classify(&self, width_px: u32) -> ViewportClass {
        ViewportClass::from_matches(
            width_px >= self.mobile_min_width_px,
            width_px >= self.wide_min_width_px,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportZone {
    Mobile,
    Medium,
    Wide,
}

/// Производное состояние viewport. Флаги не взаимоисключающие: оба могут быть false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportClass {
    pub is_mobile: bool,
    pub is_wide: bool,
}

impl ViewportClass {
    /// Классификация по сырым результатам media query
    pub fn from_matches(mobile_query_matches: bool, wide_query_matches: bool) -> Self {
        Self {
            is_mobile: !mobile_query_matches,
            is_wide: wide_query_matches,
        }
    }

    pub fn zone(&self) -> ViewportZone {
        match (self.is_mobile, self.is_wide) {
            (_, true) => ViewportZone::Wide,
            (true, false) => ViewportZone::Mobile,
            (false, false) => ViewportZone::Medium,
        }
    }
}

/// RAII-регистрация слушателя. Drop отписывает ровно один раз.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Регистрация, которой нечего освобождать
    pub fn noop() -> Self {
        Self { unsubscribe: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// Платформенный слушатель одного media query по ширине
pub trait MediaQuerySource {
    fn matches(&self) -> bool;

    /// Регистрирует `on_change`: он получает новое `matches` при каждом пересечении порога.
    fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Subscription;
}

/// Держит подписку на один media query, пока жив наблюдающий компонент.
#[derive(Debug)]
pub struct BreakpointObserver {
    initial: bool,
    degraded: bool,
    _subscription: Subscription,
}

impl BreakpointObserver {
    /// Без источника (нет viewport) отдаёт `fallback` и не меняется.
    pub fn observe<S: MediaQuerySource>(
        source: Option<&S>,
        fallback: bool,
        on_change: impl Fn(bool) + 'static,
    ) -> Self {
        match source {
            Some(source) => Self {
                initial: source.matches(),
                degraded: false,
                _subscription: source.subscribe(Box::new(on_change)),
            },
            None => Self {
                initial: fallback,
                degraded: true,
                _subscription: Subscription::noop(),
            },
        }
    }

    pub fn initial(&self) -> bool {
        self.initial
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::layout::compute_layout;
    use crate::shared::tabs::TabSelection;
    use crate::enums::settings_tab::SettingsTab;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Фейковый `matchMedia` для одного порога
    struct FakeQuery {
        min_width: u32,
        width: Rc<Cell<u32>>,
        listeners: Rc<RefCell<Vec<Box<dyn Fn(bool)>>>>,
        unsubscribed: Rc<Cell<u32>>,
    }

    impl FakeQuery {
        fn new(min_width: u32, width: u32) -> Self {
            Self {
                min_width,
                width: Rc::new(Cell::new(width)),
                listeners: Rc::default(),
                unsubscribed: Rc::default(),
            }
        }

        fn resize(&self, new_width: u32) {
            let before = self.matches();
            self.width.set(new_width);
            let after = self.matches();
            if before != after {
                for listener in self.listeners.borrow().iter() {
                    listener(after);
                }
            }
        }
    }

    impl MediaQuerySource for FakeQuery {
        fn matches(&self) -> bool {
            self.width.get() >= self.min_width
        }

        fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Subscription {
            self.listeners.borrow_mut().push(on_change);
            let listeners = self.listeners.clone();
            let unsubscribed = self.unsubscribed.clone();
            Subscription::new(move || {
                listeners.borrow_mut().clear();
                unsubscribed.set(unsubscribed.get() + 1);
            })
        }
    }

    #[test]
    fn test_classify_zones() {
        let bp = Breakpoints::default();
        assert_eq!(bp.classify(500).zone(), ViewportZone::Mobile);
        assert_eq!(bp.classify(767).zone(), ViewportZone::Mobile);
        assert_eq!(bp.classify(768).zone(), ViewportZone::Medium);
        assert_eq!(bp.classify(799).zone(), ViewportZone::Medium);
        assert_eq!(bp.classify(800).zone(), ViewportZone::Wide);
        assert_eq!(
            bp.classify(780),
            ViewportClass {
                is_mobile: false,
                is_wide: false
            }
        );
    }

    #[test]
    fn test_queries() {
        let bp = Breakpoints::default();
        assert_eq!(bp.wide_query(), "(min-width: 800px)");
        assert_eq!(bp.mobile_query(), "(min-width: 768px)");
    }

    #[test]
    fn test_drop_unsubscribes_exactly_once() {
        let query = FakeQuery::new(800, 1024);
        let observer = BreakpointObserver::observe(Some(&query), false, |_| {});
        assert!(observer.initial());
        assert_eq!(query.unsubscribed.get(), 0);

        drop(observer);
        assert_eq!(query.unsubscribed.get(), 1);
        assert!(query.listeners.borrow().is_empty());
    }

    #[test]
    fn test_no_callbacks_after_drop() {
        let query = FakeQuery::new(800, 1024);
        let calls = Rc::new(Cell::new(0));
        let observer = {
            let calls = calls.clone();
            BreakpointObserver::observe(Some(&query), false, move |_| calls.set(calls.get() + 1))
        };
        query.resize(600);
        assert_eq!(calls.get(), 1);

        drop(observer);
        query.resize(1024);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_missing_capability_uses_fallback() {
        let observer = BreakpointObserver::observe::<FakeQuery>(None, true, |_| {});
        assert!(observer.initial());
        assert!(observer.is_degraded());
    }

    #[test]
    fn test_resize_updates_layout_without_touching_active_tab() {
        let bp = Breakpoints::default();
        let wide = FakeQuery::new(bp.wide_min_width_px, 900);
        let not_mobile = FakeQuery::new(bp.mobile_min_width_px, 900);

        let wide_state = Rc::new(Cell::new(false));
        let not_mobile_state = Rc::new(Cell::new(false));
        let wide_observer = {
            let state = wide_state.clone();
            BreakpointObserver::observe(Some(&wide), false, move |m| state.set(m))
        };
        let mobile_observer = {
            let state = not_mobile_state.clone();
            BreakpointObserver::observe(Some(&not_mobile), true, move |m| state.set(m))
        };
        wide_state.set(wide_observer.initial());
        not_mobile_state.set(mobile_observer.initial());

        let registry = SettingsTab::registry();
        let selection = TabSelection::initial(&registry, Some(SettingsTab::Audio));

        let class = || ViewportClass::from_matches(not_mobile_state.get(), wide_state.get());
        assert_eq!(class().zone(), ViewportZone::Wide);
        let before = compute_layout(class().is_mobile, class().is_wide);
        assert_eq!(before.sidebar.flex, "0 0 16rem");

        // Средняя зона: ни wide, ни mobile.
        wide.resize(780);
        not_mobile.resize(780);
        assert_eq!(
            class(),
            ViewportClass {
                is_mobile: false,
                is_wide: false
            }
        );
        let medium = compute_layout(class().is_mobile, class().is_wide);
        assert_eq!(medium.sidebar.flex, "0 0 4rem");
        assert_eq!(medium.sidebar.padding_top, "64px");

        // 700px ниже мобильного порога.
        wide.resize(700);
        not_mobile.resize(700);
        assert_eq!(class().zone(), ViewportZone::Mobile);
        let narrow = compute_layout(class().is_mobile, class().is_wide);
        assert_eq!(narrow.sidebar.flex, "0 0 4rem");

        assert_eq!(selection.active(), SettingsTab::Audio);
    }
}
