pub mod settings_tab;
