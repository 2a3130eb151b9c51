pub mod family;
pub mod health;
pub mod monster;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /monsterfamilies                   list, create
/// /monsterfamilies/{familyId}        get, update, delete
///
/// /monsters                          list, create
/// /monsters/{monsterId}              get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/monsterfamilies", family::router())
        .nest("/monsters", monster::router())
}
