//! Concurrent path router with `*` and `**` wildcards.
//!
//! # Overview
//!
//! [`PathRouter`] maps slash-delimited patterns to values. Registered paths
//! live twice: in a flat map of canonical strings (the exact-match fast path)
//! and in a trie of directory nodes used when the fast path misses. One
//! reader/writer lock guards both, held for the whole of each operation, so a
//! lookup sees either all or none of a concurrent mutation.
//!
//! Paths are case-insensitive and empty segments are ignored, so `/A//b/`
//! and `/a/b` are the same key.
//!
//! # Wildcards
//!
//! - `*` matches exactly one segment.
//! - `**` matches one or more trailing segments and must end the pattern.
//!
//! A node's children are either all concrete or a single wildcard; patterns
//! that would mix them are rejected with [`PathError::ConflictingChildren`].
//!
//! # Example
//!
//! ```rust
//! use pathtrie_std::routing::PathRouter;
//! use pathtrie_core::RouteResult;
//!
//! let router = PathRouter::new();
//! router.insert("/users/*/profile", "profile").unwrap();
//! router.insert("/static/**", "assets").unwrap();
//!
//! assert_eq!(router.resolve("/Users/42/profile/"), RouteResult::Matched("profile"));
//! assert_eq!(router.resolve("/static/css/site.css"), RouteResult::Matched("assets"));
//! assert_eq!(router.resolve("/users/42"), RouteResult::NotFound);
//! ```

use super::table::{Inserted, PathTable};
use parking_lot::RwLock;
use pathtrie_core::{PathError, RouteResult, Router, normalize};
use std::collections::BTreeSet;

/// A point-in-time summary of a router's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouterStats {
    /// Registered canonical paths.
    pub paths: usize,
    /// Trie nodes, not counting the root.
    pub nodes: usize,
    /// Deepest chain of nodes below the root.
    pub max_depth: usize,
}

/// A thread-safe hierarchical path router.
///
/// Values are cloned out on lookup; wrap expensive values in an `Arc`.
/// Share the router itself across threads with an `Arc<PathRouter<V>>`.
#[derive(Debug)]
pub struct PathRouter<V> {
    table: RwLock<PathTable<V>>,
}

impl<V> Default for PathRouter<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PathRouter<V> {
    /// Create a new empty router.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty router with room for `paths` registrations in the
    /// fast-path cache.
    pub fn with_capacity(paths: usize) -> Self {
        Self::from_table(PathTable::with_capacity(paths))
    }

    pub(crate) fn from_table(table: PathTable<V>) -> Self {
        Self {
            table: RwLock::new(table),
        }
    }

    /// Get the number of registered paths.
    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    /// Check if the router is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every key in the fast-path cache: each registered canonical path and,
    /// except for `/`, its trailing-slash variant.
    pub fn list_paths(&self) -> BTreeSet<String> {
        self.table.read().raw_keys()
    }

    /// Summarize the trie.
    pub fn stats(&self) -> RouterStats {
        let table = self.table.read();
        RouterStats {
            paths: table.len(),
            nodes: table.node_count(),
            max_depth: table.max_depth(),
        }
    }

    /// Unregister `path` and return the value it carried.
    ///
    /// Trie nodes no other registration passes through are reclaimed.
    ///
    /// # Errors
    ///
    /// [`PathError::InvalidPath`] for malformed input,
    /// [`PathError::NotFound`] if `path` is not registered.
    pub fn delete(&self, path: &str) -> Result<V, PathError> {
        let path = normalize(path)?;
        let result = self.table.write().remove(&path);

        #[cfg(feature = "tracing")]
        match &result {
            Ok(_) => tracing::debug!(path = %path, "deleted path"),
            Err(error) => tracing::debug!(path = %path, %error, "delete rejected"),
        }

        result
    }
}

impl<V: Clone> PathRouter<V> {
    /// Register `path` with `value`.
    ///
    /// Inserting a path that is already registered (after normalization) is
    /// a no-op: the first value wins and no error is returned.
    ///
    /// # Errors
    ///
    /// - [`PathError::InvalidPath`]: empty or not starting with `/`
    /// - [`PathError::InvalidWildcardPlacement`]: `**` before the last segment
    /// - [`PathError::ConflictingChildren`]: a wildcard would sit next to a
    ///   different sibling
    ///
    /// On error the router is unchanged.
    pub fn insert(&self, path: &str, value: V) -> Result<(), PathError> {
        let path = normalize(path).inspect_err(|_error| {
            #[cfg(feature = "tracing")]
            tracing::debug!(path, error = %_error, "insert rejected");
        })?;
        let result = self.table.write().insert(&path, value);

        #[cfg(feature = "tracing")]
        match &result {
            Ok(Inserted::Registered) => tracing::debug!(path = %path, "registered path"),
            Ok(Inserted::AlreadyPresent) => {
                tracing::debug!(path = %path, "path already registered, keeping first value")
            }
            Err(error) => tracing::debug!(path = %path, %error, "insert rejected"),
        }

        result.map(|_: Inserted| ())
    }

    /// Resolve a concrete request path.
    ///
    /// Tries the exact-match cache, then walks the trie preferring, at each
    /// level, an exact segment, then a `**` child (matching the rest of the
    /// path), then a `*` child. Input that is not a rooted path never
    /// matches.
    pub fn resolve(&self, path: &str) -> RouteResult<V> {
        let Ok(path) = normalize(path) else {
            return RouteResult::NotFound;
        };
        let value = self.table.read().resolve(&path).cloned();

        #[cfg(feature = "tracing")]
        tracing::trace!(path = %path, matched = value.is_some(), "resolved path");

        value.into()
    }

    /// Replace the value of an already registered pattern.
    ///
    /// Returns the previous value. The trie's shape is not touched.
    ///
    /// # Errors
    ///
    /// [`PathError::InvalidPath`] for malformed input,
    /// [`PathError::NotFound`] if `path` is not registered.
    pub fn modify_value(&self, path: &str, value: V) -> Result<V, PathError> {
        let path = normalize(path)?;
        let result = self.table.write().modify(&path, value);

        #[cfg(feature = "tracing")]
        match &result {
            Ok(_) => tracing::debug!(path = %path, "modified path value"),
            Err(error) => tracing::debug!(path = %path, %error, "modify rejected"),
        }

        result
    }
}

// ============================================================================
// Router Trait Implementation
// ============================================================================

impl<V> Router<str, V> for PathRouter<V>
where
    V: Clone + Send + Sync,
{
    fn route(&self, key: &str) -> RouteResult<V> {
        self.resolve(key)
    }
}

impl<V> Router<String, V> for PathRouter<V>
where
    V: Clone + Send + Sync,
{
    fn route(&self, key: &String) -> RouteResult<V> {
        self.resolve(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_router_is_empty() {
        let router: PathRouter<i32> = PathRouter::new();
        assert!(router.is_empty());
        assert_eq!(router.stats(), RouterStats::default());
        assert!(router.list_paths().is_empty());
    }

    #[test]
    fn test_insert_and_resolve_both_slash_forms() {
        let router = PathRouter::new();
        router.insert("/a/b", 1).unwrap();

        assert_eq!(router.resolve("/a/b"), RouteResult::Matched(1));
        assert_eq!(router.resolve("/a/b/"), RouteResult::Matched(1));
        assert_eq!(router.resolve("/a"), RouteResult::NotFound);
    }

    #[test]
    fn test_first_registration_wins() {
        let router = PathRouter::new();
        router.insert("/a", "first").unwrap();
        router.insert("/A/", "second").unwrap();

        assert_eq!(router.resolve("/a"), RouteResult::Matched("first"));
        assert_eq!(router.len(), 1);
    }

    #[test]
    fn test_insert_rejects_bad_input() {
        let router: PathRouter<i32> = PathRouter::new();

        assert_eq!(
            router.insert("", 1),
            Err(PathError::InvalidPath(String::new()))
        );
        assert_eq!(
            router.insert("a/b", 1),
            Err(PathError::InvalidPath("a/b".to_string()))
        );
        assert_eq!(
            router.insert("/a/**/b", 1),
            Err(PathError::InvalidWildcardPlacement("/a/**/b".to_string()))
        );
        assert!(router.is_empty());
    }

    #[test]
    fn test_resolve_unrooted_is_not_found() {
        let router = PathRouter::new();
        router.insert("/a", 1).unwrap();

        assert_eq!(router.resolve("a"), RouteResult::NotFound);
        assert_eq!(router.resolve(""), RouteResult::NotFound);
    }

    #[test]
    fn test_modify_and_delete_return_previous_values() {
        let router = PathRouter::new();
        router.insert("/a", 1).unwrap();

        assert_eq!(router.modify_value("/a/", 2), Ok(1));
        assert_eq!(router.delete("/A"), Ok(2));
        assert_eq!(router.delete("/a"), Err(PathError::NotFound("/a".to_string())));
        assert_eq!(
            router.modify_value("/a", 3),
            Err(PathError::NotFound("/a".to_string()))
        );
    }

    #[test]
    fn test_stats_track_reclamation() {
        let router = PathRouter::new();
        router.insert("/a/b/c", 1).unwrap();
        router.insert("/a/x", 2).unwrap();
        assert_eq!(
            router.stats(),
            RouterStats {
                paths: 2,
                nodes: 4,
                max_depth: 3
            }
        );

        router.delete("/a/b/c").unwrap();
        assert_eq!(
            router.stats(),
            RouterStats {
                paths: 1,
                nodes: 2,
                max_depth: 2
            }
        );
    }

    #[test]
    fn test_resolved_value_outlives_the_read_lock() {
        use std::sync::Arc;

        let router = PathRouter::new();
        let handler = Arc::new("users");
        router.insert("/users/*", Arc::clone(&handler)).unwrap();

        let resolved = router.resolve("/users/7").matched().unwrap();
        // The read guard is gone, so a writer gets through while we hold the clone.
        assert_eq!(router.delete("/users/*"), Ok(Arc::clone(&handler)));
        assert_eq!(*resolved, "users");
        assert_eq!(Arc::strong_count(&handler), 2);
    }

    #[test]
    fn test_router_trait() {
        let router = PathRouter::new();
        router.insert("/key", 42).unwrap();

        let key = "/key".to_string();
        assert_eq!(
            Router::<String, i32>::route(&router, &key),
            RouteResult::Matched(42)
        );
        assert!(Router::<str, i32>::contains(&router, "/KEY"));
        assert!(!Router::<str, i32>::contains(&router, "/other"));
    }
}
