/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and cloned per request; the pool is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool backing the annotation store.
    pub pool: boxreview_db::DbPool,
}
