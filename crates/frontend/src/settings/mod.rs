//! Settings dialog feature
//!
//! - `dialog` - modal wrapper, open-state bridging, composition errors
//! - `tabbed_container` - responsive tab strip + active panel
//! - `panels` - one panel per `SettingsTab`

pub mod dialog;
pub mod panels;
pub mod tabbed_container;

pub use dialog::SettingsDialog;

use contracts::enums::settings_tab::SettingsTab;
use contracts::shared::errors::ConfigurationError;
use contracts::shared::tabs::{PanelMap, TabRegistry};
use leptos::prelude::*;
use panels::{AccountPanel, AudioPanel, GeneralPanel, NotificationsPanel, VideoPanel};
use std::sync::Arc;
use tabbed_container::PanelFn;

/// Validated registry + panels of the settings dialog.
#[derive(Clone)]
pub struct SettingsComposition {
    pub registry: Arc<TabRegistry<SettingsTab>>,
    pub panels: Arc<PanelMap<SettingsTab, PanelFn>>,
}

impl SettingsComposition {
    /// Fails before the first render if any tab has no panel.
    pub fn new(on_open_change: Callback<bool>) -> Result<Self, ConfigurationError> {
        Self::from_parts(SettingsTab::registry(), settings_panels(on_open_change))
    }

    pub fn from_parts(
        registry: TabRegistry<SettingsTab>,
        panels: PanelMap<SettingsTab, PanelFn>,
    ) -> Result<Self, ConfigurationError> {
        panels.ensure_covers(&registry)?;
        Ok(Self {
            registry: Arc::new(registry),
            panels: Arc::new(panels),
        })
    }
}

fn panel<F, V>(render: F) -> PanelFn
where
    F: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    Arc::new(move || render().into_any())
}

fn settings_panels(on_open_change: Callback<bool>) -> PanelMap<SettingsTab, PanelFn> {
    PanelMap::new([
        (
            SettingsTab::Account,
            panel(move || view! { <AccountPanel on_open_change=on_open_change /> }),
        ),
        (SettingsTab::Audio, panel(|| view! { <AudioPanel /> })),
        (SettingsTab::Video, panel(|| view! { <VideoPanel /> })),
        (SettingsTab::General, panel(|| view! { <GeneralPanel /> })),
        (
            SettingsTab::Notifications,
            panel(|| view! { <NotificationsPanel /> }),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::tabs::TabDescriptor;

    fn empty_panel() -> PanelFn {
        Arc::new(|| ().into_any())
    }

    #[test]
    fn test_composition_requires_every_panel() {
        let panels = PanelMap::new([
            (SettingsTab::Account, empty_panel()),
            (SettingsTab::Audio, empty_panel()),
        ]);
        let err = SettingsComposition::from_parts(SettingsTab::registry(), panels)
            .err()
            .unwrap();
        assert_eq!(err, ConfigurationError::MissingPanel("video".to_string()));
    }

    #[test]
    fn test_composition_with_subset_registry() {
        let registry = TabRegistry::new(vec![
            TabDescriptor::new(SettingsTab::General, "settings", "tabs.general"),
            TabDescriptor::new(SettingsTab::Audio, "speaker", "tabs.audio"),
        ])
        .unwrap();
        let panels = PanelMap::new([
            (SettingsTab::Audio, empty_panel()),
            (SettingsTab::General, empty_panel()),
        ]);
        let composition = SettingsComposition::from_parts(registry, panels).unwrap();
        assert_eq!(composition.registry.first(), SettingsTab::General);
    }
}
