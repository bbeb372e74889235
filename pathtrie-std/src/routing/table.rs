//! The raw-path cache and trie, mutated together as one unit.
//!
//! Nothing here locks; [`PathRouter`](super::PathRouter) wraps a
//! [`PathTable`] in a single reader/writer lock so every operation below sees
//! and leaves a consistent pair.

use super::node::{DirNode, NodeIds};
use pathtrie_core::{NormalizedPath, PathError, Wildcard};
use std::collections::{BTreeSet, HashMap};

/// Outcome of [`PathTable::insert`] for a valid path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Inserted {
    /// The path was new and is now registered.
    Registered,
    /// The path was already registered; the first value is kept.
    AlreadyPresent,
}

#[derive(Debug)]
pub(crate) struct PathTable<V> {
    /// Exact-match fast path. Holds every registered path and its
    /// trailing-slash variant.
    raw_paths: HashMap<String, V>,
    root: DirNode<V>,
    ids: NodeIds,
    len: usize,
}

impl<V> Default for PathTable<V> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<V> PathTable<V> {
    pub(crate) fn with_capacity(paths: usize) -> Self {
        let mut ids = NodeIds::default();
        let root = DirNode::root(&mut ids);
        Self {
            raw_paths: HashMap::with_capacity(paths * 2),
            root,
            ids,
            len: 0,
        }
    }

    pub(crate) fn reserve(&mut self, paths: usize) {
        self.raw_paths.reserve(paths * 2);
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn contains_path(&self, path: &NormalizedPath) -> bool {
        self.raw_paths.contains_key(path.as_str())
    }

    pub(crate) fn raw_keys(&self) -> BTreeSet<String> {
        self.raw_paths.keys().cloned().collect()
    }

    pub(crate) fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    pub(crate) fn max_depth(&self) -> usize {
        self.root.height()
    }

    /// Check that `path` can be threaded through the trie without putting a
    /// wildcard next to a different sibling. Mutates nothing.
    fn check_conflicts(&self, path: &NormalizedPath) -> Result<(), PathError> {
        let mut node = &self.root;
        for segment in path.segments() {
            if !node.accepts(segment) {
                return Err(PathError::ConflictingChildren {
                    path: path.as_str().to_string(),
                    segment: segment.clone(),
                });
            }
            match node.children.get(segment) {
                Some(child) => node = child,
                // Everything from here on is created fresh and cannot collide.
                None => break,
            }
        }
        Ok(())
    }

    /// Look up a path: raw cache first, then the trie.
    ///
    /// Per level the trie walk tries the exact child, then a `**` child
    /// (which swallows the rest of the path), then a `*` child. There is no
    /// backtracking.
    pub(crate) fn resolve(&self, path: &NormalizedPath) -> Option<&V> {
        if let Some(value) = self.raw_paths.get(path.as_str()) {
            return Some(value);
        }

        let mut node = &self.root;
        for segment in path.segments() {
            if let Some(child) = node.children.get(segment) {
                node = child;
                continue;
            }
            match node.wildcard() {
                Some((Wildcard::Multi, rest)) => return rest.value.as_ref(),
                Some((Wildcard::Single, child)) => node = child,
                None => return None,
            }
        }
        node.value.as_ref()
    }
}

impl<V: Clone> PathTable<V> {
    /// Register `path`. A failed insert leaves the table untouched.
    pub(crate) fn insert(&mut self, path: &NormalizedPath, value: V) -> Result<Inserted, PathError> {
        path.check_wildcard_placement()?;
        if self.contains_path(path) {
            return Ok(Inserted::AlreadyPresent);
        }
        self.check_conflicts(path)?;

        let mut node = &mut self.root;
        for segment in path.segments() {
            node = node.child_or_insert(segment, &mut self.ids);
            node.ref_count += 1;
        }
        node.value = Some(value.clone());

        if let Some(variant) = path.slash_variant() {
            self.raw_paths.insert(variant, value.clone());
        }
        self.raw_paths.insert(path.as_str().to_string(), value);
        self.len += 1;
        Ok(Inserted::Registered)
    }

    /// Replace the value of a registered path. The trie shape is untouched.
    pub(crate) fn modify(&mut self, path: &NormalizedPath, value: V) -> Result<V, PathError> {
        let slot = self
            .raw_paths
            .get_mut(path.as_str())
            .ok_or_else(|| PathError::NotFound(path.as_str().to_string()))?;
        let previous = std::mem::replace(slot, value.clone());

        if let Some(variant) = path.slash_variant() {
            self.raw_paths.insert(variant, value.clone());
        }
        if let Some(node) = self.root.descendant_mut(path.segments()) {
            node.value = Some(value);
        }
        Ok(previous)
    }
}

impl<V> PathTable<V> {
    /// Unregister `path`, reclaiming every node no other path passes through.
    ///
    /// Walking down from the root, the first child whose count is 1 belongs
    /// to this path alone; detaching it drops its whole subtree. Shared nodes
    /// above it just lose one reference.
    pub(crate) fn remove(&mut self, path: &NormalizedPath) -> Result<V, PathError> {
        let value = self
            .raw_paths
            .remove(path.as_str())
            .ok_or_else(|| PathError::NotFound(path.as_str().to_string()))?;
        if let Some(variant) = path.slash_variant() {
            self.raw_paths.remove(&variant);
        }
        self.len -= 1;

        let mut node = &mut self.root;
        for segment in path.segments() {
            let Some(count) = node.children.get(segment).map(|child| child.ref_count) else {
                return Ok(value);
            };
            if count == 1 {
                let _detached = node.detach_child(segment);
                #[cfg(feature = "tracing")]
                if let Some(detached) = &_detached {
                    tracing::trace!(
                        path = %path,
                        segment = %segment,
                        reclaimed = detached.descendant_count() + 1,
                        "detached private subtree"
                    );
                }
                return Ok(value);
            }
            let Some(child) = node.children.get_mut(segment) else {
                return Ok(value);
            };
            child.ref_count -= 1;
            node = child;
        }

        // The path ended on a node other paths still pass through.
        node.value = None;
        Ok(value)
    }
}
