//! Handlers for organisation locations and randomized boundary checks.
//!
//! Locations are addressed under their organisation. An unknown organisation
//! is a 404 for every operation, and a location whose `organisationId`
//! differs from the path is treated as absent.

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use hmis_core::boundary::{check_boundary, BoundaryCheck};
use hmis_core::pagination::{paginate, Paginated};
use hmis_store::models::organisation::{
    BoundaryCheckRequest, CreateOrganisationLocation, OrganisationLocation, OrganisationProfile,
    UpdateOrganisationLocation,
};
use hmis_store::record::to_patch;

use super::{ensure_deleted, not_found, update_failed};
use crate::error::AppResult;
use crate::middleware::json::ValidJson;
use crate::query::ListParams;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Wire name of the parent-scope field.
const ORGANISATION_FIELD: &str = "organisationId";

async fn ensure_organisation(state: &AppState, organisation_id: &str) -> AppResult<()> {
    state
        .store
        .organisation_profiles
        .find(organisation_id)
        .await
        .map(|_| ())
        .ok_or_else(|| not_found::<OrganisationProfile>(organisation_id))
}

async fn find_scoped(
    state: &AppState,
    organisation_id: &str,
    id: &str,
) -> AppResult<OrganisationLocation> {
    state
        .store
        .organisation_locations
        .find(id)
        .await
        .filter(|location| location.organisation_id == organisation_id)
        .ok_or_else(|| not_found::<OrganisationLocation>(id))
}

/// GET /api/v1/organisations/{organisation_id}/locations
pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(organisation_id): Path<String>,
    ListParams(query): ListParams,
) -> AppResult<Json<Paginated<OrganisationLocation>>> {
    ensure_organisation(&state, &organisation_id).await?;

    let query = query.with_filter(ORGANISATION_FIELD, organisation_id);
    let page = state
        .store
        .organisation_locations
        .find_paginated(&query)
        .await?;
    Ok(Json(paginate(uri.path(), &query, page)))
}

/// POST /api/v1/organisations/{organisation_id}/locations
pub async fn create(
    State(state): State<AppState>,
    Path(organisation_id): Path<String>,
    ValidJson(input): ValidJson<CreateOrganisationLocation>,
) -> AppResult<(StatusCode, Json<DataResponse<OrganisationLocation>>)> {
    ensure_organisation(&state, &organisation_id).await?;

    let location = state
        .store
        .organisation_locations
        .create(OrganisationLocation::new(&organisation_id, input))
        .await?;

    tracing::info!(%organisation_id, id = %location.id, "Organisation location created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: location })))
}

/// GET /api/v1/organisations/{organisation_id}/locations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((organisation_id, id)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<OrganisationLocation>>> {
    let location = find_scoped(&state, &organisation_id, &id).await?;
    Ok(Json(DataResponse { data: location }))
}

/// PATCH /api/v1/organisations/{organisation_id}/locations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((organisation_id, id)): Path<(String, String)>,
    ValidJson(input): ValidJson<UpdateOrganisationLocation>,
) -> AppResult<Json<DataResponse<OrganisationLocation>>> {
    find_scoped(&state, &organisation_id, &id).await?;

    let location = state
        .store
        .organisation_locations
        .update(&id, to_patch(&input)?)
        .await?
        .ok_or_else(|| update_failed::<OrganisationLocation>(&id))?;

    tracing::info!(%organisation_id, %id, "Organisation location updated");

    Ok(Json(DataResponse { data: location }))
}

/// DELETE /api/v1/organisations/{organisation_id}/locations/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((organisation_id, id)): Path<(String, String)>,
) -> AppResult<Json<MessageResponse>> {
    find_scoped(&state, &organisation_id, &id).await?;

    let outcome = state
        .store
        .organisation_locations
        .delete(&[id.clone()])
        .await;
    ensure_deleted::<OrganisationLocation>(outcome, &id)?;

    tracing::info!(%organisation_id, %id, "Organisation location deleted");

    Ok(Json(MessageResponse::new("Location deleted successfully")))
}

/// POST /api/v1/organisations/{organisation_id}/boundary-check
///
/// Randomized answer; reproducible when `MOCK_RANDOM_SEED` is set.
pub async fn boundary_check(
    State(state): State<AppState>,
    Path(organisation_id): Path<String>,
    ValidJson(input): ValidJson<BoundaryCheckRequest>,
) -> AppResult<Json<DataResponse<BoundaryCheck>>> {
    ensure_organisation(&state, &organisation_id).await?;

    let check = {
        let mut rng = state.rng.lock().await;
        check_boundary(&mut *rng, &organisation_id, input.latitude, input.longitude)
    };

    tracing::debug!(
        %organisation_id,
        within_boundary = check.within_boundary,
        "Boundary check"
    );

    Ok(Json(DataResponse { data: check }))
}
