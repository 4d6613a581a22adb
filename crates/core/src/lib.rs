//! Domain layer for the bounding-box review service.
//!
//! Pure logic only: identifier types, the shared error enum, and the
//! validation rules every annotation write goes through. Nothing here
//! touches the database or HTTP.

pub mod annotation;
pub mod error;
pub mod types;
