pub mod config;
pub mod errors;
pub mod i18n;
pub mod layout;
pub mod tabs;
pub mod viewport;
