use crate::shared::i18n::use_i18n;
use leptos::prelude::*;

#[component]
pub fn AudioPanel() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="settings-panel">
            <h2 class="settings-panel__heading">{move || i18n.ts("audio.heading")}</h2>
            <p class="settings-panel__text">{move || i18n.ts("audio.description")}</p>
        </div>
    }
}
