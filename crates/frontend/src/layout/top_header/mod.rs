//! TopHeader component - application top bar with the settings entry point.

use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader(
    /// Called when the settings button is pressed
    on_open_settings: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{move || i18n.ts("header.title")}</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    title=move || i18n.ts("header.openSettings")
                    aria-label=move || i18n.ts("header.openSettings")
                    on:click=move |_| on_open_settings.run(())
                >
                    {icon("settings")}
                </button>
            </div>
        </div>
    }
}
