//! Route definitions for dashboard comments.

use axum::routing::get;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// ```text
/// GET    /dashboards/{dashboard_uuid}            -> list
/// POST   /dashboards/{dashboard_uuid}            -> create
/// GET    /dashboards/{dashboard_uuid}/{uuid}     -> get_by_id
/// PATCH  /dashboards/{dashboard_uuid}/{uuid}     -> update
/// DELETE /dashboards/{dashboard_uuid}/{uuid}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/dashboards/{dashboard_uuid}",
            get(comments::list).post(comments::create),
        )
        .route(
            "/dashboards/{dashboard_uuid}/{uuid}",
            get(comments::get_by_id)
                .patch(comments::update)
                .delete(comments::delete),
        )
}
