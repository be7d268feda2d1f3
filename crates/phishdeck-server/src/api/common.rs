// Common DTOs and the upstream error mapping

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use phishdeck_gophish::GophishError;

/// Standard error response for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Result type for proxy handlers: upstream JSON through, mapped error back.
pub type ProxyResult = Result<Json<Value>, (StatusCode, Json<ErrorResponse>)>;

pub fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

/// Map a classified upstream error to a response.
///
/// Unclassified upstream bodies come back verbatim in the 500 envelope;
/// this backend is an internal admin tool and the raw detail is more useful
/// than a scrubbed message.
pub fn upstream_error(err: GophishError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        GophishError::NotFound(resource) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(format!("The {resource} does not exist"))),
        ),
        GophishError::Conflict(message) => {
            (StatusCode::CONFLICT, Json(ErrorResponse::new(message)))
        }
        GophishError::Transport(e) => {
            tracing::error!("Upstream request failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new("Upstream request failed")),
            )
        }
        GophishError::Api { status, body } => {
            tracing::error!(status, "Unclassified upstream error");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::new(body)))
        }
        GophishError::Decode(e) => {
            tracing::error!("Upstream response decode error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Invalid upstream response")),
            )
        }
        GophishError::Config(e) => {
            tracing::error!("Upstream client misconfigured: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Upstream client misconfigured")),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let (status, body) = upstream_error(GophishError::NotFound("campaign"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "The campaign does not exist");
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let (status, _) = upstream_error(GophishError::Conflict("Username already taken".into()));
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_unclassified_keeps_raw_body() {
        let (status, body) = upstream_error(GophishError::Api {
            status: 418,
            body: "weird upstream state".into(),
        });
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "weird upstream state");
    }
}
