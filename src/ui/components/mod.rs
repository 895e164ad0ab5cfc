//! Reusable UI components

mod instance_row;
mod status_badge;

pub use instance_row::InstanceRowView;
