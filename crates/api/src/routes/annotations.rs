//! Route definitions for the annotation store, mounted at `/annotations`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::annotations;
use crate::state::AppState;

/// Annotation routes.
///
/// ```text
/// GET    /            -> list_annotations
/// POST   /            -> create_annotation
/// GET    /altered     -> list_altered_annotations
/// GET    /flagged     -> list_flagged_annotations
/// PUT    /flag/{id}   -> flag_annotation
/// GET    /{id}        -> get_annotation
/// PUT    /{id}        -> update_annotation
/// DELETE /{id}        -> delete_annotation
/// ```
///
/// The static `/altered` and `/flagged` segments take priority over `/{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(annotations::list_annotations).post(annotations::create_annotation),
        )
        .route("/altered", get(annotations::list_altered_annotations))
        .route("/flagged", get(annotations::list_flagged_annotations))
        .route("/flag/{id}", put(annotations::flag_annotation))
        .route(
            "/{id}",
            get(annotations::get_annotation)
                .put(annotations::update_annotation)
                .delete(annotations::delete_annotation),
        )
}
