// Landing page proxy routes

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use super::common::{upstream_error, ProxyResult};
use super::ProxyState;
use crate::auth::AuthUser;

pub fn routes(state: ProxyState) -> Router {
    Router::new()
        .route("/landing-pages", get(list_pages).post(create_page))
        .route("/landing-pages/import/site", post(import_site))
        .route(
            "/landing-pages/:id",
            get(get_page).put(update_page).delete(delete_page),
        )
        .with_state(state)
}

async fn list_pages(State(state): State<ProxyState>, _auth: AuthUser) -> ProxyResult {
    state
        .gophish
        .list_pages()
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn get_page(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ProxyResult {
    state
        .gophish
        .get_page(id)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn create_page(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Json(data): Json<Value>,
) -> ProxyResult {
    state
        .gophish
        .create_page(&data)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn update_page(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    Json(data): Json<Value>,
) -> ProxyResult {
    state
        .gophish
        .update_page(id, data)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn delete_page(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ProxyResult {
    state
        .gophish
        .delete_page(id)
        .await
        .map(Json)
        .map_err(upstream_error)
}

/// POST /landing-pages/import/site - have the upstream fetch a live site
/// and return it as landing-page HTML. Body: `{url, include_resources}`.
async fn import_site(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Json(data): Json<Value>,
) -> ProxyResult {
    state
        .gophish
        .import_site(&data)
        .await
        .map(Json)
        .map_err(upstream_error)
}
