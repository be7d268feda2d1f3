// Registration and login endpoints
// Decision: A missing user and a wrong password produce the identical 401 —
// the response never reveals which check failed

use std::sync::OnceLock;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::middleware::{AuthError, AuthState};
use crate::storage::models::{CreateUser, UserRow};
use crate::storage::password::{hash_password, verify_password};
use crate::storage::is_unique_violation;

const MIN_PASSWORD_LEN: usize = 6;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

/// Register request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Public fields of a registered user
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Create auth routes
pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .with_state(state)
}

fn validate_register(req: &RegisterRequest) -> Result<(), &'static str> {
    if req.name.trim().is_empty() {
        return Err("Name is required");
    }
    if !email_regex().is_match(&req.email) {
        return Err("A valid email address is required");
    }
    if req.password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

/// POST /auth/register - Register a new user
pub async fn register(
    State(state): State<AuthState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AuthError> {
    validate_register(&req).map_err(AuthError::bad_request)?;

    let password_hash = hash_password(&req.password).map_err(|e| {
        tracing::error!("Password hashing error: {}", e);
        AuthError::internal("Registration failed")
    })?;

    let user = state
        .db
        .create_user(CreateUser {
            name: req.name.trim().to_string(),
            email: req.email.clone(),
            password_hash,
        })
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::conflict("Email already registered")
            } else {
                tracing::error!("User creation error: {}", e);
                AuthError::internal("Registration failed")
            }
        })?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }),
    ))
}

/// Check a looked-up user (possibly absent) against the submitted password.
/// An unknown email and a wrong password take the same exit: one 401 with
/// one message, so the response carries no hint of which check failed.
fn authenticate(user: Option<UserRow>, password: &str) -> Result<UserRow, AuthError> {
    let Some(user) = user else {
        return Err(AuthError::unauthorized("Invalid email or password"));
    };

    let valid = verify_password(password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {}", e);
        AuthError::internal("Login failed")
    })?;

    if !valid {
        return Err(AuthError::unauthorized("Invalid email or password"));
    }

    Ok(user)
}

/// POST /auth/login - Login with email and password
pub async fn login(
    State(state): State<AuthState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AuthError> {
    let user = state
        .db
        .get_user_by_email(&req.email)
        .await
        .map_err(|e| {
            tracing::error!("Database error during login: {}", e);
            AuthError::internal("Login failed")
        })
        .and_then(|user| authenticate(user, &req.password))?;

    let token = state.jwt_service.issue(user.id).map_err(|e| {
        tracing::error!("Token issuance error: {}", e);
        AuthError::internal("Login failed")
    })?;

    Ok(Json(TokenResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt_service.token_lifetime_secs(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_registration_input() {
        assert!(validate_register(&request("A", "a@x.com", "secret1")).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(validate_register(&request("  ", "a@x.com", "secret1")).is_err());
    }

    #[test]
    fn test_malformed_email_rejected() {
        for email in ["", "plain", "no@tld", "two@@x.com", "spaces in@x.com"] {
            assert!(
                validate_register(&request("A", email, "secret1")).is_err(),
                "accepted {email:?}"
            );
        }
    }

    #[test]
    fn test_short_password_rejected() {
        assert!(validate_register(&request("A", "a@x.com", "12345")).is_err());
        assert!(validate_register(&request("A", "a@x.com", "123456")).is_ok());
    }

    fn stored_user(password: &str) -> UserRow {
        let now = chrono::Utc::now();
        UserRow {
            id: 1,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password_hash: hash_password(password).unwrap(),
            role: "user".to_string(),
            api_key: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_unknown_email_and_wrong_password_look_identical() {
        let no_such_user = authenticate(None, "whatever").unwrap_err();
        let wrong_password =
            authenticate(Some(stored_user("correct-horse")), "wrong-horse").unwrap_err();

        assert_eq!(no_such_user.status, wrong_password.status);
        assert_eq!(no_such_user.error, wrong_password.error);
        assert_eq!(no_such_user.status, axum::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_correct_password_authenticates() {
        let user = authenticate(Some(stored_user("correct-horse")), "correct-horse").unwrap();
        assert_eq!(user.id, 1);
    }
}
