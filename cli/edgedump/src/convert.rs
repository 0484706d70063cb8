//! Decode the input dump and write the report.

use anyhow::{Context, Result};
use tracing::info;

use edgedump_bin::DecodeError;
use edgedump_core::{ErrorClass, GraphError};
use edgedump_text::EmitError;

use crate::config::Config;

/// Decode `config.input`, then write the report to `config.output`.
///
/// The output file is only touched after the whole input decoded cleanly.
pub fn run(config: &Config) -> Result<()> {
    let graph = edgedump_bin::read_graph(&config.input).context("failed to read graph")?;

    println!(
        "Graph read: {} vertices, {} edges.",
        graph.num_vertices(),
        graph.edge_count()
    );
    info!(
        input = %config.input.display(),
        vertices = graph.num_vertices(),
        edges = graph.edge_count(),
        "decoded input"
    );

    edgedump_text::write_report(&config.output, &graph, config.format)
        .context("failed to write edges")?;

    println!("Edges written to {}.", config.output.display());
    info!(output = %config.output.display(), format = ?config.format, "wrote report");
    Ok(())
}

/// Find the taxonomy class of the first library error in the chain.
pub fn error_class(err: &anyhow::Error) -> ErrorClass {
    err.chain()
        .find_map(|cause| {
            if let Some(e) = cause.downcast_ref::<DecodeError>() {
                Some(e.class())
            } else if let Some(e) = cause.downcast_ref::<EmitError>() {
                Some(e.class())
            } else {
                cause.downcast_ref::<GraphError>().map(GraphError::class)
            }
        })
        .unwrap_or(ErrorClass::Io)
}
