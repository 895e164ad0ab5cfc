//! User interface module - egui-based instance list

mod app;
mod components;
mod dialogs;
mod panels;
mod theme;

pub use app::MarinaApp;
