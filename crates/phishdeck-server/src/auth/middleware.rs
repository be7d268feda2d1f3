// Session guard
// Decision: Header-based bearer auth only; per-request filter with no
// shared mutable state and no retries — a failed check ends the request

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::config::AuthConfig;
use super::jwt::JwtService;
use crate::storage::Database;

/// Authentication error
#[derive(Debug, Clone, Serialize)]
pub struct AuthError {
    pub error: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl AuthError {
    pub fn unauthorized(message: &str) -> Self {
        Self {
            error: message.to_string(),
            status: StatusCode::UNAUTHORIZED,
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self {
            error: message.to_string(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn conflict(message: &str) -> Self {
        Self {
            error: message.to_string(),
            status: StatusCode::CONFLICT,
        }
    }

    pub fn internal(message: &str) -> Self {
        Self {
            error: message.to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Authenticated user context extracted from the request
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// Local user ID resolved from the session token
    pub id: i64,
}

/// Auth state shared across routes
#[derive(Clone)]
pub struct AuthState {
    pub config: AuthConfig,
    pub jwt_service: Arc<JwtService>,
    pub db: Arc<Database>,
}

impl AuthState {
    pub fn new(config: AuthConfig, db: Arc<Database>) -> Self {
        let jwt_service = Arc::new(JwtService::new(&config.jwt));
        Self {
            config,
            jwt_service,
            db,
        }
    }
}

/// Helper trait for extracting AuthState from application state
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

impl FromRef<AuthState> for AuthState {
    fn from_ref(input: &AuthState) -> Self {
        input.clone()
    }
}

/// Extractor for the authenticated user — returns 401 if the request does
/// not carry a valid `Authorization: Bearer <token>` header.
#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AuthError::unauthorized("Missing Authorization header"))?;

        let value = header
            .to_str()
            .map_err(|_| AuthError::unauthorized("Invalid Authorization header"))?;

        let token = parse_bearer(value)
            .ok_or_else(|| AuthError::unauthorized("Invalid Authorization header format"))?;

        let user_id = auth_state.jwt_service.validate(token).map_err(|e| {
            tracing::debug!("Session token validation failed: {}", e);
            AuthError::unauthorized("Invalid or expired token")
        })?;

        Ok(AuthUser { id: user_id })
    }
}

/// Accept exactly `Bearer <token>` — one scheme word, one token, nothing
/// else.
fn parse_bearer(value: &str) -> Option<&str> {
    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::config::JwtConfig;
    use axum::{body::Body, http::Request, routing::get, Router};
    use sqlx::PgPool;
    use tower::ServiceExt;

    // Lazy pool: never connects because the guard rejects before any
    // handler touches the database.
    fn test_state() -> AuthState {
        let pool = PgPool::connect_lazy("postgres://localhost/phishdeck_test").unwrap();
        let config = AuthConfig {
            jwt: JwtConfig {
                secret: "router-test-secret".to_string(),
                token_lifetime: std::time::Duration::from_secs(3600),
            },
        };
        AuthState::new(config, Arc::new(Database::new(pool)))
    }

    async fn whoami(user: AuthUser) -> String {
        user.id.to_string()
    }

    fn test_router(state: AuthState) -> Router {
        Router::new().route("/whoami", get(whoami)).with_state(state)
    }

    fn request(auth_header: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(value) = auth_header {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_guard_rejects_missing_header() {
        let app = test_router(test_state());
        let response = app.oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_guard_rejects_malformed_header() {
        let state = test_state();
        for value in ["Basic abc", "Bearer", "Bearer a b"] {
            let app = test_router(state.clone());
            let response = app.oneshot(request(Some(value))).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{value:?}");
        }
    }

    #[tokio::test]
    async fn test_guard_rejects_tampered_token() {
        let state = test_state();
        let mut token = state.jwt_service.issue(9).unwrap();
        token.push('x');
        let app = test_router(state);
        let response = app
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_guard_passes_valid_token_through() {
        let state = test_state();
        let token = state.jwt_service.issue(42).unwrap();
        let app = test_router(state);
        let response = app
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"42");
    }

    #[test]
    fn test_parse_bearer_valid() {
        assert_eq!(parse_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn test_parse_bearer_wrong_scheme() {
        assert_eq!(parse_bearer("Basic abc"), None);
        assert_eq!(parse_bearer("bearer abc"), None);
    }

    #[test]
    fn test_parse_bearer_missing_token() {
        assert_eq!(parse_bearer("Bearer"), None);
        assert_eq!(parse_bearer("Bearer "), None);
    }

    #[test]
    fn test_parse_bearer_extra_parts() {
        assert_eq!(parse_bearer("Bearer abc def"), None);
    }

    #[test]
    fn test_auth_error_statuses() {
        assert_eq!(
            AuthError::unauthorized("x").status,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::bad_request("x").status, StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::conflict("x").status, StatusCode::CONFLICT);
    }
}
