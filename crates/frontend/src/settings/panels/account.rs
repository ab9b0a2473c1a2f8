use crate::shared::i18n::use_i18n;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn AccountPanel(
    /// Dialog open-state callback, used to close the dialog from the panel
    on_open_change: Callback<bool>,
) -> impl IntoView {
    let i18n = use_i18n();
    let display_name = RwSignal::new(String::new());

    let close = move |_| {
        // Defer to next tick: the dialog (and this button) is removed by the close.
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_open_change.run(false);
        });
    };

    view! {
        <div class="settings-panel">
            <h2 class="settings-panel__heading">{move || i18n.ts("account.heading")}</h2>
            <Flex vertical=true gap=FlexGap::Large>
                <label class="settings-panel__label">{move || i18n.ts("account.nameLabel")}</label>
                <span class="settings-panel__hint">{move || i18n.ts("account.nameHint")}</span>
                <Input value=display_name />
                <div>
                    <Button appearance=ButtonAppearance::Secondary on_click=close>
                        {move || i18n.ts("account.close")}
                    </Button>
                </div>
            </Flex>
        </div>
    }
}
