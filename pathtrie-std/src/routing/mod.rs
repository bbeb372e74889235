//! # Routing Implementations
//!
//! This module provides the standard path router:
//!
//! - [`PathRouter`]: concurrent trie of directory nodes plus an exact-match
//!   cache, supporting `*` and `**` wildcards.
//! - [`PathRouterBuilder`]: assembles a router from a route table, with
//!   optional duplicate rejection.
//!
//! # Choosing an Entry Point
//!
//! | Type | Use Case |
//! |------|----------|
//! | `PathRouter` | Routes added and removed while serving |
//! | `PathRouterBuilder` | Route table fixed at startup, validated up front |

mod builder;
mod node;
mod path_router;
mod table;

pub use builder::PathRouterBuilder;
pub use path_router::{PathRouter, RouterStats};
