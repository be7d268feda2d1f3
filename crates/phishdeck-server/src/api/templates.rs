// Email template proxy routes

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use super::common::{upstream_error, ProxyResult};
use super::ProxyState;
use crate::auth::AuthUser;

pub fn routes(state: ProxyState) -> Router {
    Router::new()
        .route("/templates", get(list_templates).post(create_template))
        .route("/templates/import/email", post(import_email))
        .route(
            "/templates/:id",
            get(get_template).put(update_template).delete(delete_template),
        )
        .with_state(state)
}

async fn list_templates(State(state): State<ProxyState>, _auth: AuthUser) -> ProxyResult {
    state
        .gophish
        .list_templates()
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn get_template(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ProxyResult {
    state
        .gophish
        .get_template(id)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn create_template(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Json(data): Json<Value>,
) -> ProxyResult {
    state
        .gophish
        .create_template(&data)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn update_template(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    Json(data): Json<Value>,
) -> ProxyResult {
    state
        .gophish
        .update_template(id, data)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn delete_template(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ProxyResult {
    state
        .gophish
        .delete_template(id)
        .await
        .map(Json)
        .map_err(upstream_error)
}

/// Import request: a raw RFC 2822 email to parse upstream
#[derive(Debug, Deserialize)]
struct ImportEmailRequest {
    content: String,
    #[serde(default)]
    convert_links: bool,
}

/// POST /templates/import/email - parse a raw email into template parts
async fn import_email(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Json(req): Json<ImportEmailRequest>,
) -> ProxyResult {
    state
        .gophish
        .import_email(&req.content, req.convert_links)
        .await
        .map(Json)
        .map_err(upstream_error)
}
