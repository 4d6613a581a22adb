//! Handlers for the annotation store.
//!
//! Creation and update validate through `boxreview_core::annotation` before
//! touching the database. Missing records, and ID segments that are not
//! integers, map to 404.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use boxreview_core::annotation::{AnnotationDraft, AnnotationPatch, ReviewFlags};
use boxreview_core::error::CoreError;
use boxreview_core::types::DbId;
use boxreview_db::repositories::AnnotationRepo;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Annotation",
        id,
    })
}

/// POST /annotations
///
/// Create an annotation. Both review flags start out `false`.
pub async fn create_annotation(
    State(state): State<AppState>,
    payload: Result<Json<AnnotationDraft>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(draft) = payload?;
    let input = draft.validate()?;

    let annotation = AnnotationRepo::create(&state.pool, &input, ReviewFlags::default()).await?;

    tracing::info!(
        annotation_id = annotation.id,
        class_label = %annotation.class_label,
        confidence = annotation.confidence,
        "Annotation created",
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Annotation created successfully.",
            id: annotation.id,
        }),
    ))
}

/// GET /annotations
///
/// List every annotation.
pub async fn list_annotations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let annotations = AnnotationRepo::list(&state.pool).await?;

    Ok(Json(annotations))
}

/// GET /annotations/:id
pub async fn get_annotation(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(annotation_id) = path?;
    let annotation = AnnotationRepo::find_by_id(&state.pool, annotation_id)
        .await?
        .ok_or_else(|| not_found(annotation_id))?;

    Ok(Json(annotation))
}

/// GET /annotations/altered
///
/// List altered annotations, each with its `flagged` state.
pub async fn list_altered_annotations(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let annotations = AnnotationRepo::list_altered(&state.pool).await?;

    Ok(Json(annotations))
}

/// GET /annotations/flagged
///
/// List annotations flagged as wrong, each with its `altered` state.
pub async fn list_flagged_annotations(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let annotations = AnnotationRepo::list_flagged(&state.pool).await?;

    Ok(Json(annotations))
}

/// PUT /annotations/:id
///
/// Merge a new class label and/or confidence into an annotation. Omitted
/// fields keep their stored value.
pub async fn update_annotation(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<AnnotationPatch>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(annotation_id) = path?;

    // An absent record is reported before any problem with the body.
    AnnotationRepo::find_by_id(&state.pool, annotation_id)
        .await?
        .ok_or_else(|| not_found(annotation_id))?;

    let Json(patch) = payload?;
    patch.validate()?;

    let annotation = AnnotationRepo::update(&state.pool, annotation_id, &patch)
        .await?
        .ok_or_else(|| not_found(annotation_id))?;

    tracing::info!(
        annotation_id,
        class_label = %annotation.class_label,
        confidence = annotation.confidence,
        "Annotation updated",
    );

    Ok(Json(MessageResponse {
        message: "Annotation updated successfully.",
    }))
}

/// PUT /annotations/flag/:id
///
/// Mark an annotation as wrong. Flagging twice is not an error.
pub async fn flag_annotation(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(annotation_id) = path?;
    AnnotationRepo::flag(&state.pool, annotation_id)
        .await?
        .ok_or_else(|| not_found(annotation_id))?;

    tracing::info!(annotation_id, "Annotation flagged");

    Ok(Json(MessageResponse {
        message: "Annotation flagged as wrong.",
    }))
}

/// DELETE /annotations/:id
pub async fn delete_annotation(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(annotation_id) = path?;
    let deleted = AnnotationRepo::delete(&state.pool, annotation_id).await?;

    if !deleted {
        return Err(not_found(annotation_id));
    }

    tracing::info!(annotation_id, "Annotation deleted");

    Ok(Json(MessageResponse {
        message: "Annotation deleted successfully.",
    }))
}
