//! Route definitions for organisation profiles and locations.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{locations, organisations};
use crate::state::AppState;

/// Routes mounted at `/organisations`.
///
/// ```text
/// GET    /profiles                               -> organisations::list
/// POST   /profiles                               -> organisations::create
/// GET    /profiles/{id}                          -> organisations::get_by_id
/// PATCH  /profiles/{id}                          -> organisations::update
/// DELETE /profiles/{id}                          -> organisations::delete
///
/// GET    /{organisation_id}/locations            -> locations::list
/// POST   /{organisation_id}/locations            -> locations::create
/// GET    /{organisation_id}/locations/{id}       -> locations::get_by_id
/// PATCH  /{organisation_id}/locations/{id}       -> locations::update
/// DELETE /{organisation_id}/locations/{id}       -> locations::delete
/// POST   /{organisation_id}/boundary-check       -> locations::boundary_check
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/profiles",
            get(organisations::list).post(organisations::create),
        )
        .route(
            "/profiles/{id}",
            get(organisations::get_by_id)
                .patch(organisations::update)
                .delete(organisations::delete),
        )
        .route(
            "/{organisation_id}/locations",
            get(locations::list).post(locations::create),
        )
        .route(
            "/{organisation_id}/locations/{id}",
            get(locations::get_by_id)
                .patch(locations::update)
                .delete(locations::delete),
        )
        .route(
            "/{organisation_id}/boundary-check",
            post(locations::boundary_check),
        )
}
