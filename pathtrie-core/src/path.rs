//! Path normalization.
//!
//! Every path entering a router goes through [`normalize`]: surrounding
//! whitespace is trimmed, the text is lower-cased, a leading `/` is required
//! and empty segments are discarded, so `//A//b/` and `/a/b` are the same key.
//!
//! ```rust
//! use pathtrie_core::normalize;
//!
//! let path = normalize("  //Users//42/ ").unwrap();
//! assert_eq!(path.segments(), ["users", "42"]);
//! assert_eq!(path.as_str(), "/users/42");
//! assert_eq!(path.slash_variant().as_deref(), Some("/users/42/"));
//! ```

use crate::error::PathError;
use std::fmt;

/// Token matching exactly one segment.
pub const SINGLE_WILDCARD: &str = "*";

/// Token matching one or more trailing segments.
pub const MULTI_WILDCARD: &str = "**";

/// The two wildcard kinds a pattern segment can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wildcard {
    /// `*`
    Single,
    /// `**`
    Multi,
}

impl Wildcard {
    /// Classify a segment, returning `None` for concrete text.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            SINGLE_WILDCARD => Some(Wildcard::Single),
            MULTI_WILDCARD => Some(Wildcard::Multi),
            _ => None,
        }
    }

    /// The segment text for this wildcard.
    pub const fn token(self) -> &'static str {
        match self {
            Wildcard::Single => SINGLE_WILDCARD,
            Wildcard::Multi => MULTI_WILDCARD,
        }
    }
}

/// A path split into lower-cased, non-empty segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    segments: Vec<String>,
    canonical: String,
}

impl NormalizedPath {
    /// The segments in order. Empty for the root.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Canonical text: `"/" + segments.join("/")`.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Whether this is `/`.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The trailing-slash form registered next to the canonical one.
    ///
    /// `None` for the root, which has only one spelling.
    pub fn slash_variant(&self) -> Option<String> {
        if self.is_root() {
            None
        } else {
            Some(format!("{}/", self.canonical))
        }
    }

    /// Reject patterns where `**` is not the final segment.
    pub fn check_wildcard_placement(&self) -> Result<(), PathError> {
        let last = self.segments.len().saturating_sub(1);
        let misplaced = self
            .segments
            .iter()
            .enumerate()
            .any(|(i, segment)| segment == MULTI_WILDCARD && i != last);

        if misplaced {
            Err(PathError::InvalidWildcardPlacement(self.canonical.clone()))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl AsRef<str> for NormalizedPath {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

/// Normalize `path` into its segments and canonical form.
///
/// Fails with [`PathError::InvalidPath`] when the trimmed input is empty or
/// does not start with `/`.
pub fn normalize(path: &str) -> Result<NormalizedPath, PathError> {
    let trimmed = path.trim();
    if !trimmed.starts_with('/') {
        return Err(PathError::InvalidPath(path.to_string()));
    }

    let lowered = trimmed.to_lowercase();
    let segments: Vec<String> = lowered
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect();
    let canonical = format!("/{}", segments.join("/"));

    Ok(NormalizedPath {
        segments,
        canonical,
    })
}
