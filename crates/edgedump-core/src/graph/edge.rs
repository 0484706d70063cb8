//! Weighted directed edges.
//!
//! An edge is nothing more than its `(from, to, weight)` triple. Two edges with
//! the same triple are indistinguishable, and a graph may hold both.

use std::fmt;

use serde::Serialize;

/// A directed, weighted edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Source vertex index (zero-based).
    pub from: i16,
    /// Destination vertex index (zero-based).
    pub to: i16,
    /// Signed edge weight. Any 16-bit value is allowed.
    pub weight: i16,
}

impl Edge {
    pub fn new(from: i16, to: i16, weight: i16) -> Self {
        Self { from, to, weight }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.from, self.to, self.weight)
    }
}
