//! Report rendering for decoded edge lists.
//!
//! The text report is a header line followed by one `(from, to, weight)` line
//! per edge, in the order the edges were decoded. A JSON report carrying the
//! vertex count and the same edges is available for tooling.

pub mod error;
pub mod report;

pub use error::EmitError;
pub use report::{emit, emit_report, write_edges, write_report, ReportFormat, HEADER};
