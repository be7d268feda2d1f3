// Sending profile proxy routes

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
        .route("/profiles", get(list_profiles).post(create_profile))
        .route("/profiles/:id", get(get_profile).put(update_profile))
        .with_state(state)
}

async fn list_profiles(State(state): State<ProxyState>, _auth: AuthUser) -> ProxyResult {
    state
        .gophish
        .list_profiles()
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn get_profile(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ProxyResult {
    state
        .gophish
        .get_profile(id)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn create_profile(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Json(data): Json<Value>,
) -> ProxyResult {
    state
        .gophish
        .create_profile(&data)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn update_profile(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    Json(data): Json<Value>,
) -> ProxyResult {
    state
        .gophish
        .update_profile(id, data)
        .await
        .map(Json)
        .map_err(upstream_error)
}
