//! Route definitions for the `/monsterfamilies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::family;
use crate::state::AppState;

/// Routes mounted at `/monsterfamilies`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{familyId}      -> get_by_id
/// PUT    /{familyId}      -> update
/// DELETE /{familyId}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(family::list).post(family::create))
        .route(
            "/{familyId}",
            get(family::get_by_id)
                .put(family::update)
                .delete(family::delete),
        )
}
