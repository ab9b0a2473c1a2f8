use crate::shared::i18n::use_i18n;
use contracts::shared::i18n::Locale;
use leptos::prelude::*;
use thaw::*;

/// Language selection. Writes the app-wide locale, so every label re-renders.
#[component]
pub fn GeneralPanel() -> impl IntoView {
    let i18n = use_i18n();
    let select_value = RwSignal::new(i18n.locale.get_untracked().as_str().to_string());

    Effect::new(move |prev: Option<String>| {
        let value = select_value.get();
        if prev.as_ref() != Some(&value) {
            let locale = Locale::from_tag(&value);
            if i18n.locale.get_untracked() != locale {
                log::debug!("locale -> '{}'", locale.as_str());
                i18n.locale.set(locale);
            }
        }
        value
    });

    view! {
        <div class="settings-panel">
            <h2 class="settings-panel__heading">{move || i18n.ts("general.heading")}</h2>
            <Flex vertical=true gap=FlexGap::Small>
                <label class="settings-panel__label">{move || i18n.ts("general.languageLabel")}</label>
                <Select value=select_value>
                    {Locale::all()
                        .into_iter()
                        .map(|locale| view! {
                            <option value=locale.as_str()>{locale.native_name()}</option>
                        })
                        .collect_view()}
                </Select>
            </Flex>
        </div>
    }
}
