//! Route definitions for the `/monsters` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::monster;
use crate::state::AppState;

/// Routes mounted at `/monsters`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{monsterId}     -> get_by_id
/// PUT    /{monsterId}     -> update
/// DELETE /{monsterId}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(monster::list).post(monster::create))
        .route(
            "/{monsterId}",
            get(monster::get_by_id)
                .put(monster::update)
                .delete(monster::delete),
        )
}
