use std::sync::Arc;

use bestiary_db::store::BestiaryStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend. `PgStore` in production.
    pub store: Arc<dyn BestiaryStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BestiaryStore>) -> Self {
        Self { store }
    }
}
