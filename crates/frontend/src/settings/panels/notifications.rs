use crate::shared::i18n::use_i18n;
use leptos::prelude::*;
use thaw::*;

/// Sound notification toggles. Kept for the lifetime of the panel only.
#[component]
pub fn NotificationsPanel() -> impl IntoView {
    let i18n = use_i18n();
    let participant_joined = RwSignal::new(true);
    let hand_raised = RwSignal::new(true);
    let message_received = RwSignal::new(false);

    let toggles = [
        ("notifications.participantJoined", participant_joined),
        ("notifications.handRaised", hand_raised),
        ("notifications.messageReceived", message_received),
    ];

    view! {
        <div class="settings-panel">
            <h2 class="settings-panel__heading">{move || i18n.ts("notifications.heading")}</h2>
            <Flex vertical=true gap=FlexGap::Small>
                {toggles
                    .into_iter()
                    .map(|(key, checked)| view! {
                        <Flex align=FlexAlign::Center gap=FlexGap::Small>
                            <Switch checked=checked />
                            <span>{move || i18n.ts(key)}</span>
                        </Flex>
                    })
                    .collect_view()}
            </Flex>
        </div>
    }
}
