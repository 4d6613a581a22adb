//! Annotation row model and review-queue views.

use boxreview_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `annotations` table.
///
/// The review flags are loaded but left out of the serialized record; only
/// the filtered views below expose them.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Annotation {
    pub id: DbId,
    pub class_label: String,
    pub confidence: f64,
    pub center_x: i32,
    pub center_y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(skip_serializing)]
    pub altered: bool,
    #[serde(skip_serializing)]
    pub flagged: bool,
}

/// An altered annotation, carrying its `flagged` state for the reviewer.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AlteredAnnotation {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub annotation: Annotation,
    pub flagged: bool,
}

/// A flagged annotation, carrying its `altered` state for the reviewer.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FlaggedAnnotation {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub annotation: Annotation,
    pub altered: bool,
}
