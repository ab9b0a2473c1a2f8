use super::tabbed_container::TabbedContainer;
use super::SettingsComposition;
use crate::shared::i18n::use_i18n;
use contracts::enums::settings_tab::SettingsTab;
use contracts::shared::config::{DialogConfig, Orientation};
use leptos::prelude::*;
use thaw::*;

/// Keeps thaw's `Dialog` open signal in step with a caller-controlled `is_open`.
#[derive(Clone, Copy)]
pub struct OpenStateBridge {
    open: RwSignal<bool>,
    is_open: Signal<bool>,
    on_open_change: Callback<bool>,
}

impl OpenStateBridge {
    pub fn new(is_open: Signal<bool>, on_open_change: Callback<bool>) -> Self {
        Self {
            open: RwSignal::new(is_open.get_untracked()),
            is_open,
            on_open_change,
        }
    }

    pub fn open(&self) -> RwSignal<bool> {
        self.open
    }

    /// Caller → dialog.
    pub fn pull(&self) {
        self.open.set(self.is_open.get());
    }

    /// Dialog → caller. A change the caller did not apply is rolled back, so the
    /// dialog never drifts from `is_open`.
    pub fn push(&self) {
        let requested = self.open.get();
        if requested == self.is_open.get_untracked() {
            return;
        }
        self.on_open_change.run(requested);
        let decided = self.is_open.get_untracked();
        if decided != requested {
            log::debug!("open change to {} not applied by caller", requested);
            self.open.set(decided);
        }
    }
}

/// Settings modal with Account, Audio, Video, General and Notifications tabs.
///
/// `is_open`/`on_open_change` are handed to the dialog primitive as-is: closing from
/// inside (Escape, overlay, Account panel) is reported through `on_open_change` and
/// the caller decides. A change the caller does not apply is rolled back.
#[component]
pub fn SettingsDialog(
    #[prop(into)] is_open: Signal<bool>,
    on_open_change: Callback<bool>,
    /// Initially active tab. Overrides the configured default.
    #[prop(optional)]
    default_selected_tab: Option<SettingsTab>,
    #[prop(optional)] orientation: Option<Orientation>,
) -> impl IntoView {
    let config = use_context::<DialogConfig>().unwrap_or_default();
    let i18n = use_i18n();

    let bridge = OpenStateBridge::new(is_open, on_open_change);
    let open = bridge.open();
    Effect::new(move |_| bridge.pull());
    Effect::new(move |_| bridge.push());

    let default_selected_key = default_selected_tab.or(config.default_tab);
    let orientation = orientation.unwrap_or(config.orientation);
    let breakpoints = config.breakpoints;

    match SettingsComposition::new(on_open_change) {
        Ok(composition) => view! {
            <Dialog open=open>
                <DialogSurface>
                    <DialogBody>
                        <DialogContent>
                            // Mounted only while open, so viewport listeners live with the dialog.
                            <Show when=move || open.get()>
                                <TabbedContainer
                                    registry=composition.registry.clone()
                                    panels=composition.panels.clone()
                                    default_selected_key=default_selected_key
                                    orientation=orientation
                                    breakpoints=breakpoints
                                    heading=Signal::derive(move || i18n.ts("dialog.heading"))
                                />
                            </Show>
                        </DialogContent>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        }
        .into_any(),
        Err(err) => {
            log::error!("settings dialog not composed: {}", err);
            let detail = format!(" ({})", err);
            view! {
                <Show when=move || open.get()>
                    <div class="settings-dialog__error" role="alert">
                        {move || i18n.ts("dialog.configError")}
                        {detail.clone()}
                    </div>
                </Show>
            }
            .into_any()
        }
    }
}
