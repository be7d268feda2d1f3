// Campaign proxy routes

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
        .route("/campaigns", get(list_campaigns).post(create_campaign))
        .route("/campaigns/:id", get(get_campaign).delete(delete_campaign))
        .route("/campaigns/:id/results", get(campaign_results))
        .route("/campaigns/:id/summary", get(campaign_summary))
        .route("/campaigns/:id/complete", get(complete_campaign))
        .with_state(state)
}

async fn list_campaigns(State(state): State<ProxyState>, _auth: AuthUser) -> ProxyResult {
    state
        .gophish
        .list_campaigns()
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn get_campaign(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ProxyResult {
    state
        .gophish
        .get_campaign(id)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn create_campaign(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Json(data): Json<Value>,
) -> ProxyResult {
    state
        .gophish
        .create_campaign(&data)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn delete_campaign(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ProxyResult {
    state
        .gophish
        .delete_campaign(id)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn campaign_results(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ProxyResult {
    state
        .gophish
        .campaign_results(id)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn campaign_summary(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ProxyResult {
    state
        .gophish
        .campaign_summary(id)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn complete_campaign(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ProxyResult {
    state
        .gophish
        .complete_campaign(id)
        .await
        .map(Json)
        .map_err(upstream_error)
}
