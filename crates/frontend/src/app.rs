use crate::layout::Shell;
use crate::settings::SettingsDialog;
use crate::shared::config::load_dialog_config;
use crate::shared::i18n::{browser_locale, provide_i18n};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_dialog_config();
    provide_i18n(config.locale.unwrap_or_else(browser_locale));
    provide_context(config);

    let settings_open = RwSignal::new(false);
    let on_open_change = Callback::new(move |open: bool| settings_open.set(open));

    view! {
        <ConfigProvider>
            <Shell on_open_settings=Callback::new(move |_| settings_open.set(true))>
                <SettingsDialog is_open=settings_open on_open_change=on_open_change />
            </Shell>
        </ConfigProvider>
    }
}
