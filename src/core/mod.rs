//! Core module - Instance model, API client and the controller behind the list

mod api;
mod envelope;
mod error;
mod instance;
mod manager;
pub mod prompt;
pub mod render;
pub mod settings;

pub use api::ApiClient;
pub use error::ClientError;
pub use instance::{
    CreateInstanceRequest, Instance, InstanceAction, PowerAction, STATUS_RUNNING,
};
pub use manager::{InstanceManager, Pane, Waker};
pub use render::{InstanceRow, ListView, RowClick};
pub use settings::Settings;
