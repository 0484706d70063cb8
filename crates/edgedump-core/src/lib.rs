//! Core data model for edgedump.
//!
//! A graph snapshot is a vertex count plus an ordered list of weighted,
//! directed edges. Every edge endpoint must be a valid zero-based vertex
//! index; the [`Graph`] container enforces this on insertion.

pub mod error;
pub mod graph;

pub use error::ErrorClass;
pub use graph::edge::Edge;
pub use graph::{Graph, GraphError};
