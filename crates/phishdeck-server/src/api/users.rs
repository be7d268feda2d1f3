// Upstream account proxy routes
//
// These manage GoPhish's own admin accounts, not the locally registered
// users this backend authenticates.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use super::common::{upstream_error, ProxyResult};
use super::ProxyState;
use crate::auth::AuthUser;

pub fn routes(state: ProxyState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).put(update_user))
        .with_state(state)
}

async fn list_users(State(state): State<ProxyState>, _auth: AuthUser) -> ProxyResult {
    state
        .gophish
        .list_users()
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn get_user(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ProxyResult {
    state
        .gophish
        .get_user(id)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn create_user(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Json(data): Json<Value>,
) -> ProxyResult {
    state
        .gophish
        .create_user(&data)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn update_user(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    Json(data): Json<Value>,
) -> ProxyResult {
    state
        .gophish
        .update_user(id, &data)
        .await
        .map(Json)
        .map_err(upstream_error)
}
