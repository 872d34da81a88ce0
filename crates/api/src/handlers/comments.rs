//! Handlers for dashboard comments.
//!
//! Comments are tenant-scoped and addressed under their dashboard. A comment
//! whose `dashboardUuid` differs from the path is treated as absent.

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use hmis_core::pagination::{paginate, Paginated};
use hmis_store::models::comment::{Comment, CreateComment, UpdateComment};
use hmis_store::record::to_patch;

use super::{ensure_deleted, not_found, update_failed};
use crate::error::AppResult;
use crate::middleware::json::ValidJson;
use crate::middleware::tenant::TenantId;
use crate::query::ListParams;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Wire name of the parent-scope field.
const DASHBOARD_FIELD: &str = "dashboardUuid";

/// Fetch a comment and check it belongs to `dashboard_uuid`.
async fn find_scoped(state: &AppState, dashboard_uuid: &str, uuid: &str) -> AppResult<Comment> {
    state
        .store
        .comments
        .find(uuid)
        .await
        .filter(|comment| comment.dashboard_uuid == dashboard_uuid)
        .ok_or_else(|| not_found::<Comment>(uuid))
}

/// GET /api/v1/comments/dashboards/{dashboard_uuid}
pub async fn list(
    _tenant: TenantId,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(dashboard_uuid): Path<String>,
    ListParams(query): ListParams,
) -> AppResult<Json<Paginated<Comment>>> {
    let query = query.with_filter(DASHBOARD_FIELD, dashboard_uuid);
    let page = state.store.comments.find_paginated(&query).await?;
    Ok(Json(paginate(uri.path(), &query, page)))
}

/// POST /api/v1/comments/dashboards/{dashboard_uuid}
pub async fn create(
    tenant: TenantId,
    State(state): State<AppState>,
    Path(dashboard_uuid): Path<String>,
    ValidJson(input): ValidJson<CreateComment>,
) -> AppResult<(StatusCode, Json<DataResponse<Comment>>)> {
    let comment = state
        .store
        .comments
        .create(Comment::new(&dashboard_uuid, input))
        .await?;

    tracing::info!(%tenant, %dashboard_uuid, uuid = %comment.uuid, "Comment created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// GET /api/v1/comments/dashboards/{dashboard_uuid}/{uuid}
pub async fn get_by_id(
    _tenant: TenantId,
    State(state): State<AppState>,
    Path((dashboard_uuid, uuid)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<Comment>>> {
    let comment = find_scoped(&state, &dashboard_uuid, &uuid).await?;
    Ok(Json(DataResponse { data: comment }))
}

/// PATCH /api/v1/comments/dashboards/{dashboard_uuid}/{uuid}
pub async fn update(
    tenant: TenantId,
    State(state): State<AppState>,
    Path((dashboard_uuid, uuid)): Path<(String, String)>,
    ValidJson(input): ValidJson<UpdateComment>,
) -> AppResult<Json<DataResponse<Comment>>> {
    find_scoped(&state, &dashboard_uuid, &uuid).await?;

    let comment = state
        .store
        .comments
        .update(&uuid, to_patch(&input)?)
        .await?
        .ok_or_else(|| update_failed::<Comment>(&uuid))?;

    tracing::info!(%tenant, %dashboard_uuid, %uuid, "Comment updated");

    Ok(Json(DataResponse { data: comment }))
}

/// DELETE /api/v1/comments/dashboards/{dashboard_uuid}/{uuid}
pub async fn delete(
    tenant: TenantId,
    State(state): State<AppState>,
    Path((dashboard_uuid, uuid)): Path<(String, String)>,
) -> AppResult<Json<MessageResponse>> {
    find_scoped(&state, &dashboard_uuid, &uuid).await?;

    let outcome = state.store.comments.delete(&[uuid.clone()]).await;
    ensure_deleted::<Comment>(outcome, &uuid)?;

    tracing::info!(%tenant, %dashboard_uuid, %uuid, "Comment deleted");

    Ok(Json(MessageResponse::new("Comment deleted successfully")))
}
