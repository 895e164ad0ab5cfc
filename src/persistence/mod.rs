//! Persistence module - Settings storage on disk

mod settings_store;

pub use settings_store::SettingsStore;
