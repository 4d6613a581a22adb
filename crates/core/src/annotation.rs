//! Bounding-box annotation validation.
//!
//! Every write path (create and update) funnels through the helpers here so
//! that a stored annotation always has a label of bounded length and a
//! confidence inside `[0, 1]`.

use serde::Deserialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Lowest accepted detection confidence (inclusive).
pub const CONFIDENCE_MIN: f64 = 0.0;

/// Highest accepted detection confidence (inclusive).
pub const CONFIDENCE_MAX: f64 = 1.0;

/// Maximum length of a class label, in characters. Matches the column width.
pub const MAX_CLASS_LABEL_LEN: usize = 80;

/// Fields a creation payload must carry, in the order they are checked.
pub const REQUIRED_FIELDS: &[&str] = &[
    "class_label",
    "confidence",
    "center_x",
    "center_y",
    "width",
    "height",
];

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

/// Validate that a confidence score is a finite number within
/// [`CONFIDENCE_MIN`] and [`CONFIDENCE_MAX`] inclusive.
pub fn validate_confidence(value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || !(CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&value) {
        return Err(CoreError::OutOfRange {
            field: "confidence",
            value,
        });
    }
    Ok(())
}

/// Validate that a class label fits in [`MAX_CLASS_LABEL_LEN`] characters.
pub fn validate_class_label(label: &str) -> Result<(), CoreError> {
    let len = label.chars().count();
    if len > MAX_CLASS_LABEL_LEN {
        return Err(CoreError::Validation(format!(
            "class_label must be at most {MAX_CLASS_LABEL_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// Raw creation payload as sent by a client.
///
/// Every field is optional so that a missing field can be reported by name
/// instead of failing deserialization. JSON `null` is treated as missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnotationDraft {
    pub class_label: Option<String>,
    pub confidence: Option<f64>,
    pub center_x: Option<i32>,
    pub center_y: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// A fully validated annotation, ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnnotation {
    pub class_label: String,
    pub confidence: f64,
    pub center_x: i32,
    pub center_y: i32,
    pub width: i32,
    pub height: i32,
}

impl AnnotationDraft {
    /// Check required fields in [`REQUIRED_FIELDS`] order, then value rules.
    ///
    /// The first missing field wins; range and length checks only run once
    /// every field is present.
    pub fn validate(self) -> Result<NewAnnotation, CoreError> {
        let class_label = self.class_label.ok_or(CoreError::MissingField("class_label"))?;
        let confidence = self.confidence.ok_or(CoreError::MissingField("confidence"))?;
        let center_x = self.center_x.ok_or(CoreError::MissingField("center_x"))?;
        let center_y = self.center_y.ok_or(CoreError::MissingField("center_y"))?;
        let width = self.width.ok_or(CoreError::MissingField("width"))?;
        let height = self.height.ok_or(CoreError::MissingField("height"))?;

        validate_confidence(confidence)?;
        validate_class_label(&class_label)?;

        Ok(NewAnnotation {
            class_label,
            confidence,
            center_x,
            center_y,
            width,
            height,
        })
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Partial update of the mutable fields. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnotationPatch {
    pub class_label: Option<String>,
    pub confidence: Option<f64>,
}

impl AnnotationPatch {
    /// Apply the creation-time value rules to whichever fields are present.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(confidence) = self.confidence {
            validate_confidence(confidence)?;
        }
        if let Some(label) = &self.class_label {
            validate_class_label(label)?;
        }
        Ok(())
    }

    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.class_label.is_none() && self.confidence.is_none()
    }
}

// ---------------------------------------------------------------------------
// Review workflow
// ---------------------------------------------------------------------------

/// The two independent review flags stored with every annotation.
///
/// The public create path always uses the default (both `false`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewFlags {
    /// A reviewer changed the detected class or confidence.
    pub altered: bool,
    /// A reviewer marked the detection as wrong.
    pub flagged: bool,
}
