use crate::shared::tabs::{TabDescriptor, TabId, TabRegistry};
use serde::{Deserialize, Serialize};

/// Разделы диалога настроек
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    Account,
    Audio,
    Video,
    General,
    Notifications,
}

impl SettingsTab {
    /// Ключ таба (используется в id, ключах локализации и конфиге)
    pub fn key(&self) -> &'static str {
        match self {
            SettingsTab::Account => "account",
            SettingsTab::Audio => "audio",
            SettingsTab::Video => "video",
            SettingsTab::General => "general",
            SettingsTab::Notifications => "notifications",
        }
    }

    /// Имя иконки в `shared::icons`
    pub fn icon(&self) -> &'static str {
        match self {
            SettingsTab::Account => "account",
            SettingsTab::Audio => "speaker",
            SettingsTab::Video => "video",
            SettingsTab::General => "settings",
            SettingsTab::Notifications => "notification",
        }
    }

    /// Ключ заголовка в namespace `settings`
    pub fn label_key(&self) -> &'static str {
        match self {
            SettingsTab::Account => "tabs.account",
            SettingsTab::Audio => "tabs.audio",
            SettingsTab::Video => "tabs.video",
            SettingsTab::General => "tabs.general",
            SettingsTab::Notifications => "tabs.notifications",
        }
    }

    /// Все разделы в порядке отображения
    pub fn all() -> [SettingsTab; 5] {
        [
            SettingsTab::Account,
            SettingsTab::Audio,
            SettingsTab::Video,
            SettingsTab::General,
            SettingsTab::Notifications,
        ]
    }

    /// Парсинг из строки
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.key() == key)
    }

    pub fn descriptor(&self) -> TabDescriptor<SettingsTab> {
        TabDescriptor::new(*self, self.icon(), self.label_key())
    }

    /// Реестр табов диалога в порядке отображения
    pub fn registry() -> TabRegistry<SettingsTab> {
        TabRegistry::new(Self::all().iter().map(Self::descriptor).collect())
            .expect("settings tabs are statically unique")
    }
}

impl TabId for SettingsTab {
    fn as_str(&self) -> &'static str {
        self.key()
    }
}
