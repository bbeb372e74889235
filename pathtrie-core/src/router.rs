//! Routing abstraction layer.
//!
//! This module provides the lookup contract shared by every router in the
//! workspace, so a dispatcher can hold a `Box<dyn Router<str, V>>` without
//! caring how the table is stored.
//!
//! Routers that sit behind a lock cannot hand out references into their
//! storage, so [`RouteResult`] carries the matched value by value.

use crate::error::RouterBuildError;

/// Result of a routing lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult<V> {
    /// Route matched, contains the value.
    Matched(V),
    /// No matching route found.
    NotFound,
}

impl<V> RouteResult<V> {
    /// Returns true if the route was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched(_))
    }

    /// Returns the matched value, if any.
    pub fn matched(self) -> Option<V> {
        match self {
            RouteResult::Matched(v) => Some(v),
            RouteResult::NotFound => None,
        }
    }
}

impl<V> From<Option<V>> for RouteResult<V> {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => RouteResult::Matched(v),
            None => RouteResult::NotFound,
        }
    }
}

/// A router that maps keys to values.
pub trait Router<K: ?Sized, V>: Send + Sync {
    /// Look up a value by key.
    fn route(&self, key: &K) -> RouteResult<V>;

    /// Check if a key resolves to a value.
    fn contains(&self, key: &K) -> bool {
        self.route(key).is_matched()
    }
}

/// Builder for constructing routers.
///
/// Lets a route table be assembled and validated line by line before the
/// finished router is shared with request handlers.
pub trait RouterBuilder<V>: Default + Send {
    /// The router type this builder produces.
    type Router;

    /// Insert a pattern and its value.
    fn insert(&mut self, key: &str, value: V) -> Result<(), RouterBuildError>;

    /// Build the router, consuming the builder.
    fn build(self) -> Result<Self::Router, RouterBuildError>;
}
