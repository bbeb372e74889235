//! # pathtrie - Concurrent Hierarchical Path Router
//!
//! `pathtrie` maps slash-delimited patterns to values and resolves request
//! paths against them with a fixed, predictable precedence. It is meant to
//! sit under an HTTP dispatcher or an RPC method table: register routes at
//! setup, call [`PathRouter::resolve`] on every request.
//!
//! ## Quick Start
//!
//! ```rust
//! use pathtrie::{PathRouter, RouteResult};
//!
//! let router = PathRouter::new();
//! router.insert("/orders/*/items", "order-items").unwrap();
//! router.insert("/files/**", "file-server").unwrap();
//!
//! assert_eq!(router.resolve("/ORDERS/17/items/"), RouteResult::Matched("order-items"));
//! assert_eq!(router.resolve("/files/a/b/c.txt"), RouteResult::Matched("file-server"));
//! assert!(!router.resolve("/orders/17").is_matched());
//! ```
//!
//! ## Matching Rules
//!
//! - Paths are trimmed, lower-cased and stripped of empty segments.
//! - `*` matches one segment; `**` matches one or more trailing segments and
//!   may only end a pattern.
//! - Per level the resolver takes the exact segment, else a `**` child, else
//!   a `*` child. There is no backtracking and no scoring.
//! - Wildcard and concrete children never share a parent.
//!
//! ## Features
//!
//! - `tracing` (default): emit `tracing` events for mutations and lookups.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use pathtrie_core::{
    // Errors
    PathError,
    // Lookup contracts
    RouteResult,
    Router,
    RouterBuildError,
    RouterBuilder,
    // Normalization
    MULTI_WILDCARD,
    NormalizedPath,
    SINGLE_WILDCARD,
    Wildcard,
    normalize,
};

pub use pathtrie_std::routing::{PathRouter, PathRouterBuilder, RouterStats};

/// Prelude module - common imports for pathtrie.
///
/// # Usage
///
/// ```rust
/// use pathtrie::prelude::*;
///
/// let router: PathRouter<u8> = PathRouter::new();
/// assert_eq!(router.resolve("/"), RouteResult::NotFound);
/// ```
pub mod prelude {
    pub use crate::{
        PathError, PathRouter, PathRouterBuilder, RouteResult, Router, RouterBuilder,
    };
}
