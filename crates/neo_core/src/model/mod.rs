//! Record model for near-Earth objects and their close approaches.
//!
//! # Responsibility
//! - Define the two record shapes handed to the catalog by ingestion code.
//! - Provide display and validation helpers shared by callers.
//!
//! # Invariants
//! - Link fields (`NeoId`, `ApproachId` handles) are written only by
//!   `NeoCatalog` construction.
//! - Records never own each other; links are plain index handles.

pub mod approach;
pub mod calendar;
pub mod neo;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for record fields supplied by ingestion collaborators.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValidationError {
    /// Primary designation is empty or whitespace only.
    EmptyDesignation,
    /// Numeric measurement is NaN, infinite or negative.
    InvalidMeasurement { field: &'static str, value: f64 },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDesignation => write!(f, "designation cannot be empty"),
            Self::InvalidMeasurement { field, value } => {
                write!(f, "{field} must be finite and non-negative, got {value}")
            }
        }
    }
}

impl Error for RecordValidationError {}

pub(crate) fn validate_designation(designation: &str) -> Result<(), RecordValidationError> {
    if designation.trim().is_empty() {
        return Err(RecordValidationError::EmptyDesignation);
    }
    Ok(())
}

pub(crate) fn validate_measurement(
    field: &'static str,
    value: f64,
) -> Result<(), RecordValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(RecordValidationError::InvalidMeasurement { field, value });
    }
    Ok(())
}
