//! Error type for parsing at the engine boundary.
//!
//! The checks themselves never fail: missing references are skipped and
//! problems are reported through their return values. Only conversions of
//! raw input (clock strings, packed coordinates, JSON) produce errors.

use thiserror::Error;

/// Errors raised while converting external input.
#[derive(Debug, Error)]
pub enum PlanningError {
    /// A clock string is not in `HH:mm` form or out of range.
    #[error("invalid clock time '{0}', expected HH:mm")]
    InvalidTime(String),

    /// A packed exam coordinate cannot be decoded.
    #[error("invalid exam coordinate {0}")]
    InvalidCoordinate(u32),

    /// Snapshot or configuration JSON could not be read.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
