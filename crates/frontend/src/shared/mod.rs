pub mod config;
pub mod i18n;
pub mod icons;
pub mod media_query;
