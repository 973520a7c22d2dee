// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for the crate.
//!
//! Almost everything in `marstime` is a total function over `f64`: degenerate
//! geometry (e.g. azimuth at a pole) surfaces as NaN or infinity rather than
//! an error. The checked conditions are an out-of-range latitude and
//! malformed lookup-table data.

use thiserror::Error;

/// Errors raised by `marstime`.
#[derive(Debug, Error)]
pub enum MarsTimeError {
    /// A geographic argument lies outside its domain.
    #[error("{name} out of bounds: {value}")]
    InvalidArgument {
        /// Argument name, capitalised for display (e.g. `"Latitude"`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A lookup table has no entries.
    #[error("lookup table is empty")]
    EmptyTable,

    /// A lookup table key is not strictly greater than its predecessor.
    #[error("lookup table is not sorted ascending at entry {index}")]
    UnsortedTable { index: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid table data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for `marstime` operations.
pub type Result<T> = std::result::Result<T, MarsTimeError>;

impl MarsTimeError {
    pub(crate) fn latitude(value: f64) -> Self {
        MarsTimeError::InvalidArgument {
            name: "Latitude",
            value,
        }
    }
}
