//! Response envelope shared by every endpoint.

use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// The `{success, data?, error?}` envelope.
///
/// Success responses carry `data` and no `error`; failures carry
/// `error` and no `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload in a success envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Builds a failure envelope.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Acknowledgement payload for deletions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deleted {
    /// Id of the removed entity.
    pub id: String,
}

/// Turns a handler result into a status code and envelope.
///
/// This is the seam a transport adapter plugs into: handlers return
/// `ApiResult<T>`, routes return `(status, body)`.
pub fn respond<T>(result: ApiResult<T>) -> (u16, ApiResponse<T>) {
    match result {
        Ok(data) => (200, ApiResponse::ok(data)),
        Err(error) => (error.status_code(), ApiResponse::err(error.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use talentdb_core::CoreError;

    #[test]
    fn success_envelope_shape() {
        let (status, body) = respond(Ok("payload"));
        assert_eq!(status, 200);
        assert!(body.success);
        assert_eq!(body.data, Some("payload"));
        assert!(body.error.is_none());

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "payload");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn failure_envelope_shape() {
        let result: ApiResult<()> = Err(CoreError::not_found("vacancy", "v1").into());
        let (status, body) = respond(result);
        assert_eq!(status, 404);
        assert!(!body.success);
        assert!(body.data.is_none());
        assert_eq!(body.error.as_deref(), Some("vacancy not found: v1"));
    }

    #[test]
    fn validation_maps_to_400() {
        let result: ApiResult<()> = Err(ApiError::validation("Title and department are required"));
        let (status, body) = respond(result);
        assert_eq!(status, 400);
        assert_eq!(
            body.error.as_deref(),
            Some("Title and department are required")
        );
    }
}
