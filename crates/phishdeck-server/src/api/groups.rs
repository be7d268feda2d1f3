// Target group proxy routes

use axum::{
    extract::{Multipart, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use super::common::{bad_request, upstream_error, ProxyResult};
use super::ProxyState;
use crate::auth::AuthUser;

pub fn routes(state: ProxyState) -> Router {
    Router::new()
        .route("/groups", get(list_groups).post(create_group))
        .route("/groups/summary", get(groups_summary))
        .route("/groups/import", post(import_group))
        .route(
            "/groups/:id",
            get(get_group).put(update_group).delete(delete_group),
        )
        .route("/groups/:id/summary", get(group_summary))
        .with_state(state)
}

async fn list_groups(State(state): State<ProxyState>, _auth: AuthUser) -> ProxyResult {
    state
        .gophish
        .list_groups()
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn get_group(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ProxyResult {
    state
        .gophish
        .get_group(id)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn groups_summary(State(state): State<ProxyState>, _auth: AuthUser) -> ProxyResult {
    state
        .gophish
        .groups_summary()
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn group_summary(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ProxyResult {
    state
        .gophish
        .group_summary(id)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn create_group(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Json(data): Json<Value>,
) -> ProxyResult {
    state
        .gophish
        .create_group(&data)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn update_group(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    Json(data): Json<Value>,
) -> ProxyResult {
    state
        .gophish
        .update_group(id, data)
        .await
        .map(Json)
        .map_err(upstream_error)
}

async fn delete_group(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ProxyResult {
    state
        .gophish
        .delete_group(id)
        .await
        .map(Json)
        .map_err(upstream_error)
}

/// POST /groups/import - forward a CSV of targets to the upstream parser
async fn import_group(
    State(state): State<ProxyState>,
    _auth: AuthUser,
    mut multipart: Multipart,
) -> ProxyResult {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field
                .file_name()
                .unwrap_or("targets.csv")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| bad_request(format!("Failed to read file: {e}")))?;
            return state
                .gophish
                .import_group_csv(file_name, data.to_vec())
                .await
                .map(Json)
                .map_err(upstream_error);
        }
    }
    Err(bad_request("Missing file field"))
}
