//! Handlers for organisation profiles.

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use hmis_core::pagination::{paginate, Paginated};
use hmis_store::models::organisation::{
    CreateOrganisationProfile, OrganisationProfile, UpdateOrganisationProfile,
};
use hmis_store::record::to_patch;

use super::{ensure_deleted, not_found, update_failed};
use crate::error::AppResult;
use crate::middleware::json::ValidJson;
use crate::query::ListParams;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/v1/organisations/profiles
pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ListParams(query): ListParams,
) -> AppResult<Json<Paginated<OrganisationProfile>>> {
    let page = state.store.organisation_profiles.find_paginated(&query).await?;
    Ok(Json(paginate(uri.path(), &query, page)))
}

/// POST /api/v1/organisations/profiles
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateOrganisationProfile>,
) -> AppResult<(StatusCode, Json<DataResponse<OrganisationProfile>>)> {
    let profile = state
        .store
        .organisation_profiles
        .create(OrganisationProfile::new(input))
        .await?;

    tracing::info!(id = %profile.id, code = %profile.code, "Organisation profile created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: profile })))
}

/// GET /api/v1/organisations/profiles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<OrganisationProfile>>> {
    let profile = state
        .store
        .organisation_profiles
        .find(&id)
        .await
        .ok_or_else(|| not_found::<OrganisationProfile>(&id))?;
    Ok(Json(DataResponse { data: profile }))
}

/// PATCH /api/v1/organisations/profiles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(input): ValidJson<UpdateOrganisationProfile>,
) -> AppResult<Json<DataResponse<OrganisationProfile>>> {
    if state.store.organisation_profiles.find(&id).await.is_none() {
        return Err(not_found::<OrganisationProfile>(&id));
    }

    let profile = state
        .store
        .organisation_profiles
        .update(&id, to_patch(&input)?)
        .await?
        .ok_or_else(|| update_failed::<OrganisationProfile>(&id))?;

    tracing::info!(%id, "Organisation profile updated");

    Ok(Json(DataResponse { data: profile }))
}

/// DELETE /api/v1/organisations/profiles/{id}
///
/// Locations of the organisation are left in place.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if state.store.organisation_profiles.find(&id).await.is_none() {
        return Err(not_found::<OrganisationProfile>(&id));
    }

    let outcome = state.store.organisation_profiles.delete(&[id.clone()]).await;
    ensure_deleted::<OrganisationProfile>(outcome, &id)?;

    tracing::info!(%id, "Organisation profile deleted");

    Ok(Json(MessageResponse::new(
        "Organisation profile deleted successfully",
    )))
}
