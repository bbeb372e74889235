//! # pathtrie-std
//!
//! Standard implementations for the pathtrie path router.
//!
//! This crate provides:
//! - **Path routing**: [`PathRouter`](routing::PathRouter), a thread-safe
//!   trie with `*` / `**` wildcards and an exact-match fast path
//! - **Configuration**: [`PathRouterBuilder`](routing::PathRouterBuilder)
//! - **Observability**: `tracing` events for every mutation, behind the
//!   `tracing` feature

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core contracts
pub use pathtrie_core;

pub mod routing;
