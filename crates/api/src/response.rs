//! Shared response body types for API handlers.

use boxreview_core::types::DbId;
use serde::Serialize;

/// `{ "message": ... }` body returned by mutating endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Body returned by `POST /annotations`: the message plus the new record's ID.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: DbId,
}
