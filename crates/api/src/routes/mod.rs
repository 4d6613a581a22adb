pub mod annotations;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /                        redirect to /annotations
/// /health                  store readiness
/// /annotations             list, create
/// /annotations/altered     altered review queue
/// /annotations/flagged     flagged review queue
/// /annotations/flag/{id}   flag as wrong (PUT)
/// /annotations/{id}        get, update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health::readiness))
        .nest("/annotations", annotations::router())
}

/// GET / -- the collection is the only resource, so send clients there.
async fn index() -> Redirect {
    Redirect::to("/annotations")
}
