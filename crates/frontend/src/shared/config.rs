//! Dialog configuration, persisted in localStorage.

use contracts::shared::config::DialogConfig;
use web_sys::window;

const CONFIG_STORAGE_KEY: &str = "settings-dialog-config";

/// Load config from localStorage. Missing or invalid config yields the defaults.
pub fn load_dialog_config() -> DialogConfig {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    match stored {
        Some(json) => parse_dialog_config(&json),
        None => DialogConfig::default(),
    }
}

fn parse_dialog_config(json: &str) -> DialogConfig {
    if let Some(tab) = DialogConfig::ignored_default_tab(json) {
        log::warn!("unknown default_tab '{}' in '{}', using first tab", tab, CONFIG_STORAGE_KEY);
    }
    DialogConfig::from_json(json).unwrap_or_else(|err| {
        log::warn!("ignoring stored '{}': {}", CONFIG_STORAGE_KEY, err);
        DialogConfig::default()
    })
}
