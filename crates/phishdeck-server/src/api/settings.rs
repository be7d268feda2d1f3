// Settings proxy routes

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

use super::common::{upstream_error, ErrorResponse};
use super::ProxyState;
use crate::auth::AuthUser;

pub fn routes(state: ProxyState) -> Router {
    Router::new()
        .route("/settings/reset_api_key", post(reset_api_key))
        .with_state(state)
}

/// POST /settings/reset_api_key - rotate the upstream admin API key.
///
/// The process keeps using the old key until restarted with the new one.
async fn reset_api_key(
    State(state): State<ProxyState>,
    _auth: AuthUser,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    let api_key = state
        .gophish
        .reset_api_key()
        .await
        .map_err(upstream_error)?;

    Ok(Json(json!({ "api_key": api_key })))
}
