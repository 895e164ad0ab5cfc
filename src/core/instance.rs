//! Instance model - What the API server reports about each instance

use serde::{Deserialize, Serialize};

/// Status label the server uses for an instance that is up
pub const STATUS_RUNNING: &str = "Running";

/// A server-managed instance as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Unique, user-chosen identifier
    pub name: String,
    /// Free-form status label ("Running", "Stopped", ...)
    pub status: String,
    /// Instance kind ("container", "virtual-machine"), when the server reports it
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Instance {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            kind: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == STATUS_RUNNING
    }
}

/// Actions a row can offer for an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstanceAction {
    Start,
    Stop,
    Delete,
}

impl InstanceAction {
    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Stop => "STOP",
            Self::Delete => "DELETE",
        }
    }

    /// The power action this maps to, if any
    pub fn power(&self) -> Option<PowerAction> {
        match self {
            Self::Start => Some(PowerAction::Start),
            Self::Stop => Some(PowerAction::Stop),
            Self::Delete => None,
        }
    }
}

/// Start/stop request sent in the `data` field of a PUT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerAction {
    Start,
    Stop,
}

impl PowerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }

    /// Progress verb shown while the request is in flight
    pub fn progressive(&self) -> &'static str {
        match self {
            Self::Start => "Starting",
            Self::Stop => "Stopping",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Start => "started",
            Self::Stop => "stopped",
        }
    }
}

impl std::fmt::Display for PowerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/instances`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInstanceRequest {
    pub name: String,
    pub image: String,
}

impl CreateInstanceRequest {
    /// Build a request from user input; `None` when either field is blank
    pub fn from_input(name: &str, image: &str) -> Option<Self> {
        let name = name.trim();
        let image = image.trim();
        if name.is_empty() || image.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            image: image.to_string(),
        })
    }
}

/// Body of `PUT /api/instances`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlRequest<'a> {
    pub name: &'a str,
    pub data: PowerAction,
}

/// Body of `DELETE /api/instances`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteRequest<'a> {
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_entry_with_type_field() {
        let instance: Instance =
            serde_json::from_str(r#"{"name":"web1","status":"Running","type":"container"}"#)
                .unwrap();
        assert_eq!(instance.name, "web1");
        assert_eq!(instance.kind.as_deref(), Some("container"));
        assert!(instance.is_running());
    }

    #[test]
    fn list_entry_without_type_field() {
        let instance: Instance =
            serde_json::from_str(r#"{"name":"db1","status":"Stopped"}"#).unwrap();
        assert_eq!(instance.kind, None);
        assert!(!instance.is_running());
    }

    #[test]
    fn running_match_is_exact() {
        assert!(!Instance::new("a", "running").is_running());
        assert!(!Instance::new("a", "Running ").is_running());
    }

    #[test]
    fn control_body_uses_lowercase_action() {
        let body = serde_json::to_value(ControlRequest {
            name: "web1",
            data: PowerAction::Stop,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"name": "web1", "data": "stop"}));
    }

    #[test]
    fn create_request_rejects_blank_fields() {
        assert!(CreateInstanceRequest::from_input("", "ubuntu:22.04").is_none());
        assert!(CreateInstanceRequest::from_input("db1", "   ").is_none());
        assert_eq!(
            CreateInstanceRequest::from_input(" db1 ", "ubuntu:22.04"),
            Some(CreateInstanceRequest {
                name: "db1".into(),
                image: "ubuntu:22.04".into()
            })
        );
    }
}
