//! Handlers for the `/spaces` resource (tenant-scoped).

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use hmis_core::pagination::{paginate, Paginated};
use hmis_store::models::space::{CreateSpace, Space, UpdateSpace};
use hmis_store::record::to_patch;

use super::{ensure_deleted, not_found, update_failed};
use crate::error::AppResult;
use crate::middleware::json::ValidJson;
use crate::middleware::tenant::TenantId;
use crate::query::ListParams;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/v1/spaces
pub async fn list(
    _tenant: TenantId,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ListParams(query): ListParams,
) -> AppResult<Json<Paginated<Space>>> {
    let page = state.store.spaces.find_paginated(&query).await?;
    Ok(Json(paginate(uri.path(), &query, page)))
}

/// POST /api/v1/spaces
pub async fn create(
    tenant: TenantId,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateSpace>,
) -> AppResult<(StatusCode, Json<DataResponse<Space>>)> {
    let space = state.store.spaces.create(Space::new(input)).await?;

    tracing::info!(%tenant, uuid = %space.uuid, name = %space.name, "Space created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: space })))
}

/// GET /api/v1/spaces/{uuid}
pub async fn get_by_id(
    _tenant: TenantId,
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> AppResult<Json<DataResponse<Space>>> {
    let space = state
        .store
        .spaces
        .find(&uuid)
        .await
        .ok_or_else(|| not_found::<Space>(&uuid))?;
    Ok(Json(DataResponse { data: space }))
}

/// PATCH /api/v1/spaces/{uuid}
pub async fn update(
    tenant: TenantId,
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    ValidJson(input): ValidJson<UpdateSpace>,
) -> AppResult<Json<DataResponse<Space>>> {
    if state.store.spaces.find(&uuid).await.is_none() {
        return Err(not_found::<Space>(&uuid));
    }

    let space = state
        .store
        .spaces
        .update(&uuid, to_patch(&input)?)
        .await?
        .ok_or_else(|| update_failed::<Space>(&uuid))?;

    tracing::info!(%tenant, %uuid, "Space updated");

    Ok(Json(DataResponse { data: space }))
}

/// DELETE /api/v1/spaces/{uuid}
pub async fn delete(
    tenant: TenantId,
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if state.store.spaces.find(&uuid).await.is_none() {
        return Err(not_found::<Space>(&uuid));
    }

    let outcome = state.store.spaces.delete(&[uuid.clone()]).await;
    ensure_deleted::<Space>(outcome, &uuid)?;

    tracing::info!(%tenant, %uuid, "Space deleted");

    Ok(Json(MessageResponse::new("Space deleted successfully")))
}
