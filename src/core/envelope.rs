//! The `{success, data, error}` wrapper every endpoint answers with

use serde::Deserialize;

use super::error::{ClientError, ClientResult};

/// Fallback text when a failed envelope carries no `error`
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, Deserialize)]
pub struct ApiResult<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiResult<T> {
    /// Discriminate on `success`; the payload may still be absent on success.
    /// A present `error` is passed through verbatim, even when empty.
    pub fn into_result(self) -> ClientResult<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ClientError::Application(
                self.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Instance;

    #[test]
    fn success_with_data() {
        let env: ApiResult<Vec<Instance>> = serde_json::from_str(
            r#"{"success":true,"data":[{"name":"web1","status":"Running"}]}"#,
        )
        .unwrap();
        let data = env.into_result().unwrap().unwrap();
        assert_eq!(data, vec![Instance::new("web1", "Running")]);
    }

    #[test]
    fn success_with_null_data() {
        let env: ApiResult<Vec<Instance>> =
            serde_json::from_str(r#"{"success":true,"data":null}"#).unwrap();
        assert_eq!(env.into_result().unwrap(), None);
    }

    #[test]
    fn failure_carries_server_text() {
        let env: ApiResult<String> =
            serde_json::from_str(r#"{"success":false,"error":"LXD not connected"}"#).unwrap();
        assert_eq!(
            env.into_result().unwrap_err(),
            ClientError::Application("LXD not connected".into())
        );
    }

    #[test]
    fn failure_without_text() {
        let env: ApiResult<String> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(
            env.into_result().unwrap_err().to_string(),
            "Error: Unknown error"
        );
    }

    #[test]
    fn failure_with_empty_text_is_kept() {
        let env: ApiResult<String> =
            serde_json::from_str(r#"{"success":false,"error":""}"#).unwrap();
        assert_eq!(env.into_result().unwrap_err().to_string(), "Error: ");
    }

    #[test]
    fn failure_with_null_text() {
        let env: ApiResult<String> =
            serde_json::from_str(r#"{"success":false,"error":null}"#).unwrap();
        assert_eq!(
            env.into_result().unwrap_err(),
            ClientError::Application(UNKNOWN_ERROR.into())
        );
    }
}
