//! Settings panels, one per tab.

mod account;
mod audio;
mod general;
mod notifications;
mod video;

pub use account::AccountPanel;
pub use audio::AudioPanel;
pub use general::GeneralPanel;
pub use notifications::NotificationsPanel;
pub use video::VideoPanel;
