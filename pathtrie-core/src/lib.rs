//! # pathtrie-core
//!
//! Core contracts for the pathtrie hierarchical path router.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! dispatchers and method tables that only need to *consume* a router, not
//! the full `pathtrie-std` implementation.
//!
//! # Contents
//!
//! - [`normalize`] and [`NormalizedPath`]: the single definition of what a
//!   path key is (trimmed, lower-cased, rooted, empty segments dropped).
//! - [`Wildcard`]: the `*` (one segment) and `**` (one or more trailing
//!   segments) pattern tokens.
//! - [`Router`] / [`RouterBuilder`]: the lookup and assembly traits.
//!
//! # Error Types
//!
//! - [`PathError`] - Rejected registrations, modifications and deletions
//! - [`RouterBuildError`] - Builder failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod path;
mod router;

// Re-exports
pub use error::{PathError, RouterBuildError};
pub use path::{MULTI_WILDCARD, NormalizedPath, SINGLE_WILDCARD, Wildcard, normalize};
pub use router::{RouteResult, Router, RouterBuilder};
