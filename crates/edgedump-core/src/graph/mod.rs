//! The graph snapshot container.
//!
//! A [`Graph`] owns a vertex count and the edges read for it, in the order
//! they were added. Edges are validated against the vertex count as they are
//! inserted, so a `Graph` value always satisfies
//! `0 <= from < num_vertices` and `0 <= to < num_vertices` for every edge.

pub mod edge;

use serde::Serialize;
use thiserror::Error;

use self::edge::Edge;
use crate::error::ErrorClass;

/// Errors that can occur while building a graph snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("negative vertex count: {0}")]
    NegativeVertexCount(i16),

    #[error("invalid vertex indices: from={from}, to={to} (vertex count {num_vertices})")]
    VertexOutOfRange {
        from: i16,
        to: i16,
        num_vertices: i16,
    },
}

impl GraphError {
    /// Every graph construction failure is a validation failure.
    pub fn class(&self) -> ErrorClass {
        ErrorClass::Validation
    }
}

/// A vertex count plus an ordered edge list.
///
/// Parallel and repeated edges are kept as-is; insertion order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Graph {
    num_vertices: i16,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph with `num_vertices` vertices.
    pub fn new(num_vertices: i16) -> Result<Self, GraphError> {
        if num_vertices < 0 {
            return Err(GraphError::NegativeVertexCount(num_vertices));
        }
        Ok(Self {
            num_vertices,
            edges: Vec::new(),
        })
    }

    pub fn num_vertices(&self) -> i16 {
        self.num_vertices
    }

    /// Whether `index` names a vertex of this graph.
    pub fn contains_vertex(&self, index: i16) -> bool {
        (0..self.num_vertices).contains(&index)
    }

    /// Append an edge after checking both endpoints.
    ///
    /// On failure the graph is left unchanged.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        if !self.contains_vertex(edge.from) || !self.contains_vertex(edge.to) {
            return Err(GraphError::VertexOutOfRange {
                from: edge.from,
                to: edge.to,
                num_vertices: self.num_vertices,
            });
        }
        self.edges.push(edge);
        Ok(())
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
