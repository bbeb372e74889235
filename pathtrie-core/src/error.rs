//! Error types for pathtrie.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`PathError`] - Errors from registering, modifying or deleting paths
//! - [`RouterBuildError`] - Errors while assembling a router from a builder

use thiserror::Error;

/// Errors returned by mutating router operations.
///
/// A mutation that fails leaves the router exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path was empty or did not start with `/`.
    #[error("invalid path {0:?}: must be non-empty and start with '/'")]
    InvalidPath(String),

    /// A `**` segment appeared somewhere other than the final position.
    #[error("invalid wildcard placement in {0:?}: '**' must be the last segment")]
    InvalidWildcardPlacement(String),

    /// The path would put a wildcard and a different sibling under the same parent.
    #[error("conflicting children in {path:?} at segment {segment:?}")]
    ConflictingChildren {
        /// Canonical form of the rejected path.
        path: String,
        /// The segment that collided with an existing sibling.
        segment: String,
    },

    /// The path is not registered.
    #[error("path not registered: {0}")]
    NotFound(String),
}

/// Errors that can occur while building a router.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterBuildError {
    /// The same canonical path was inserted twice and duplicates are rejected.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// A route was rejected by the path rules.
    #[error(transparent)]
    Path(#[from] PathError),
}
