//! Responsive tab container
//!
//! Vertical tab strip + one active panel. Labels and heading are shown only on wide
//! viewports; on narrow ones the strip collapses to icons.

use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::media_query::use_media_query;
use contracts::shared::config::Orientation;
use contracts::shared::layout::{compute_layout, tablist_css, LayoutDirectives};
use contracts::shared::tabs::{PanelMap, TabId, TabRegistry, TabSelection};
use contracts::shared::viewport::{Breakpoints, ViewportClass};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::{Button, ButtonAppearance};

/// Renders a panel. Called each time its tab becomes active.
pub type PanelFn = Arc<dyn Fn() -> AnyView + Send + Sync>;

/// Layout directives for the current viewport, updated on breakpoint crossings.
///
/// Without viewport support both queries fall back to `true` (wide desktop).
pub fn use_layout(breakpoints: Breakpoints) -> Memo<LayoutDirectives> {
    let wide = use_media_query(&breakpoints.wide_query(), true);
    let not_mobile = use_media_query(&breakpoints.mobile_query(), true);

    Memo::new(move |_| {
        let class = ViewportClass::from_matches(not_mobile.get(), wide.get());
        compute_layout(class.is_mobile, class.is_wide)
    })
}

/// Builds the panel for `key` only; other panels are never constructed.
pub fn render_panel<K: TabId>(panels: &PanelMap<K, PanelFn>, key: K) -> AnyView {
    match panels.resolve(&key) {
        Ok(panel) => panel(),
        Err(err) => {
            log::error!("{}", err);
            ().into_any()
        }
    }
}

#[component]
pub fn TabbedContainer<K>(
    /// Tabs in display order
    registry: Arc<TabRegistry<K>>,
    /// Panel per tab key; must cover the registry
    panels: Arc<PanelMap<K, PanelFn>>,
    /// Initially active tab (falls back to the first tab)
    #[prop(default = None)]
    default_selected_key: Option<K>,
    #[prop(optional)] orientation: Orientation,
    #[prop(optional)] breakpoints: Breakpoints,
    /// Namespace of the tab label keys
    #[prop(default = "settings")]
    namespace: &'static str,
    /// Sidebar heading, shown on wide viewports
    #[prop(optional, into)]
    heading: Option<Signal<String>>,
) -> impl IntoView
where
    K: TabId + Send + Sync,
{
    let i18n = use_i18n();
    let layout = use_layout(breakpoints);

    if let Some(key) = default_selected_key.filter(|key| !registry.contains(*key)) {
        log::warn!(
            "default tab '{}' is not registered, using '{}'",
            key.as_str(),
            registry.first().as_str()
        );
    }
    let selection = RwSignal::new(TabSelection::initial(&registry, default_selected_key));
    let active_key = Memo::new(move |_| selection.with(|s| s.active()));

    let tab_buttons = registry
        .iter()
        .copied()
        .map(|tab| {
            let registry = registry.clone();
            let is_active = move || active_key.get() == tab.key;
            let label = move || i18n.t(namespace, tab.label_key);

            let activate = move |_| {
                let mut next = selection.get_untracked();
                if let Some(transition) = next.select(&registry, tab.key) {
                    log::debug!(
                        "tab '{}' -> '{}'",
                        transition.unmounted.as_str(),
                        transition.mounted.as_str()
                    );
                    selection.set(next);
                }
            };

            view! {
                <Button
                    appearance=move || {
                        if is_active() { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                    }
                    on_click=activate
                    attr:role="tab"
                    attr:id=format!("tab-{}", tab.key.as_str())
                    attr:aria-selected=move || is_active().to_string()
                    attr:aria-controls=format!("tabpanel-{}", tab.key.as_str())
                    attr:aria-label=label
                    attr:title=label
                    attr:class="settings-tab"
                    attr:style="justify-content: flex-start; gap: 0.75rem;"
                >
                    {icon(tab.icon)}
                    {move || {
                        layout
                            .get()
                            .show_labels
                            .then(|| view! { <span class="settings-tab__label">{label()}</span> })
                    }}
                </Button>
            }
        })
        .collect_view();

    let active_panel = move || {
        let key = active_key.get();
        let content = render_panel(&panels, key);
        view! {
            <div
                role="tabpanel"
                id=format!("tabpanel-{}", key.as_str())
                aria-labelledby=format!("tab-{}", key.as_str())
                class="settings-tabpanel"
            >
                {content}
            </div>
        }
    };

    let orientation_class = match orientation {
        Orientation::Vertical => "settings-tabs settings-tabs--vertical",
        Orientation::Horizontal => "settings-tabs settings-tabs--horizontal",
    };

    view! {
        <div
            class=orientation_class
            data-orientation=orientation.as_str()
            style=move || layout.get().frame.to_css(orientation)
        >
            <div class="settings-tabs__sidebar" style=move || layout.get().sidebar.to_css(orientation)>
                {move || {
                    let heading = heading?;
                    layout.get().show_heading.then(|| view! {
                        <h1 class="settings-tabs__heading">{move || heading.get()}</h1>
                    })
                }}
                <div
                    role="tablist"
                    aria-orientation=orientation.as_str()
                    style=tablist_css(orientation)
                >
                    {tab_buttons}
                </div>
            </div>
            <div class="settings-tabs__panel" style=move || layout.get().panel.to_css()>
                {active_panel}
            </div>
        </div>
    }
}
