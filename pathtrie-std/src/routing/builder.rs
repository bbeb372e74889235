//! Builder for [`PathRouter`].

use super::{PathRouter, table::PathTable};
use pathtrie_core::{RouterBuildError, RouterBuilder, normalize};

/// Assembles a [`PathRouter`] from a route table, validating each line as
/// it is inserted.
///
/// # Example
///
/// ```rust
/// use pathtrie_std::routing::PathRouterBuilder;
/// use pathtrie_core::{RouteResult, RouterBuilder};
///
/// let mut builder = PathRouterBuilder::default().reject_duplicates();
/// builder.insert("/health", 1).unwrap();
/// builder.insert("/api/**", 2).unwrap();
/// assert!(builder.insert("/HEALTH/", 3).is_err());
///
/// let router = builder.build().unwrap();
/// assert_eq!(router.resolve("/api/v1/users"), RouteResult::Matched(2));
/// ```
#[derive(Debug)]
pub struct PathRouterBuilder<V> {
    table: PathTable<V>,
    reject_duplicates: bool,
}

impl<V> Default for PathRouterBuilder<V> {
    fn default() -> Self {
        Self {
            table: PathTable::default(),
            reject_duplicates: false,
        }
    }
}

impl<V> PathRouterBuilder<V> {
    /// Treat a second registration of the same canonical path as an error
    /// instead of silently keeping the first value.
    pub fn reject_duplicates(mut self) -> Self {
        self.reject_duplicates = true;
        self
    }

    /// Reserve room for `paths` more registrations.
    pub fn with_capacity(mut self, paths: usize) -> Self {
        self.table.reserve(paths);
        self
    }
}

impl<V> RouterBuilder<V> for PathRouterBuilder<V>
where
    V: Clone + Send,
{
    type Router = PathRouter<V>;

    fn insert(&mut self, key: &str, value: V) -> Result<(), RouterBuildError> {
        let path = normalize(key)?;
        if self.reject_duplicates && self.table.contains_path(&path) {
            return Err(RouterBuildError::DuplicateKey(path.to_string()));
        }
        self.table.insert(&path, value)?;
        Ok(())
    }

    fn build(self) -> Result<Self::Router, RouterBuildError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(paths = self.table.len(), "built path router");

        Ok(PathRouter::from_table(self.table))
    }
}
