use axum::routing::get;
use axum::Router;

use crate::handlers::spaces;
use crate::state::AppState;

/// Routes mounted at `/spaces`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{uuid}    -> get_by_id
/// PATCH  /{uuid}    -> update
/// DELETE /{uuid}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(spaces::list).post(spaces::create))
        .route(
            "/{uuid}",
            get(spaces::get_by_id)
                .patch(spaces::update)
                .delete(spaces::delete),
        )
}
