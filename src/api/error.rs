use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::providers::minetur::MineturError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Map an upstream failure to a response. The service holds no state, so
/// a failed fetch surfaces as 502 and leaves nothing to recover.
pub fn upstream_error(err: MineturError) -> ApiError {
    tracing::error!(error = %err, "Upstream minetur request failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_carries_message() {
        let (status, Json(body)) = bad_request("missing parameter");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "missing parameter");
    }

    #[test]
    fn upstream_error_maps_to_bad_gateway() {
        let (status, Json(body)) = upstream_error(MineturError::Parse("bad json".into()));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.error.contains("bad json"));
    }
}
