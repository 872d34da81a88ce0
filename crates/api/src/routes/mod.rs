pub mod comments;
pub mod health;
pub mod organisations;
pub mod spaces;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /comments/dashboards/{dashboard_uuid}              list, create (tenant)
/// /comments/dashboards/{dashboard_uuid}/{uuid}       get, update, delete (tenant)
///
/// /spaces                                            list, create (tenant)
/// /spaces/{uuid}                                     get, update, delete (tenant)
///
/// /organisations/profiles                            list, create
/// /organisations/profiles/{id}                       get, update, delete
/// /organisations/{organisation_id}/locations         list, create
/// /organisations/{organisation_id}/locations/{id}    get, update, delete
/// /organisations/{organisation_id}/boundary-check    randomized boundary check (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Dashboard comments.
        .nest("/comments", comments::router())
        // Spaces.
        .nest("/spaces", spaces::router())
        // Organisation profiles and their locations.
        .nest("/organisations", organisations::router())
}
