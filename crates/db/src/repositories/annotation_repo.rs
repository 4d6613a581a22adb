//! Repository for the `annotations` table.
//!
//! Every method is a single statement, so each call is atomic on its own.
//! Inputs arrive already validated by `boxreview_core::annotation`; the
//! table's CHECK constraint backs up the confidence range.

use boxreview_core::annotation::{AnnotationPatch, NewAnnotation, ReviewFlags};
use boxreview_core::types::DbId;
use sqlx::PgPool;

use crate::models::annotation::{AlteredAnnotation, Annotation, FlaggedAnnotation};

/// Column list for annotations queries.
const COLUMNS: &str = "id, class_label, confidence, center_x, center_y, width, height, \
    altered, flagged";

/// Provides CRUD and review-queue queries for annotations.
pub struct AnnotationRepo;

impl AnnotationRepo {
    /// Insert a validated annotation with the given review flags, returning
    /// the stored row.
    pub async fn create(
        pool: &PgPool,
        input: &NewAnnotation,
        flags: ReviewFlags,
    ) -> Result<Annotation, sqlx::Error> {
        let query = format!(
            "INSERT INTO annotations
                (class_label, confidence, center_x, center_y, width, height, altered, flagged)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Annotation>(&query)
            .bind(&input.class_label)
            .bind(input.confidence)
            .bind(input.center_x)
            .bind(input.center_y)
            .bind(input.width)
            .bind(input.height)
            .bind(flags.altered)
            .bind(flags.flagged)
            .fetch_one(pool)
            .await
    }

    /// List every annotation, ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Annotation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM annotations ORDER BY id ASC");
        sqlx::query_as::<_, Annotation>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find an annotation by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Annotation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM annotations WHERE id = $1");
        sqlx::query_as::<_, Annotation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List annotations a reviewer has altered.
    pub async fn list_altered(pool: &PgPool) -> Result<Vec<AlteredAnnotation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM annotations WHERE altered ORDER BY id ASC");
        sqlx::query_as::<_, AlteredAnnotation>(&query)
            .fetch_all(pool)
            .await
    }

    /// List annotations a reviewer has flagged as wrong.
    pub async fn list_flagged(pool: &PgPool) -> Result<Vec<FlaggedAnnotation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM annotations WHERE flagged ORDER BY id ASC");
        sqlx::query_as::<_, FlaggedAnnotation>(&query)
            .fetch_all(pool)
            .await
    }

    /// Merge the present patch fields into an annotation. Returns the
    /// updated row, or `None` if not found.
    ///
    /// Geometry, review flags and the ID are never touched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &AnnotationPatch,
    ) -> Result<Option<Annotation>, sqlx::Error> {
        if input.is_empty() {
            tracing::debug!(annotation_id = id, "Empty annotation patch");
        }
        let query = format!(
            "UPDATE annotations SET
                class_label = COALESCE($1, class_label),
                confidence = COALESCE($2, confidence)
             WHERE id = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Annotation>(&query)
            .bind(&input.class_label)
            .bind(input.confidence)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Mark an annotation as wrong. Idempotent. Returns the updated row, or
    /// `None` if not found.
    pub async fn flag(pool: &PgPool, id: DbId) -> Result<Option<Annotation>, sqlx::Error> {
        let query = format!(
            "UPDATE annotations SET flagged = true
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Annotation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an annotation by its ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM annotations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
