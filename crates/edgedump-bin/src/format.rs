//! Binary edge list decoding.
//!
//! The decoder reads the vertex count, then whole records until the input is
//! exhausted exactly at a record boundary. Anything else (a short header, a
//! record cut off in any field, an edge naming a vertex outside the graph)
//! abandons the decode; no partial graph is ever returned.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt};
use thiserror::Error;
use tracing::{debug, trace};

use edgedump_core::{Edge, ErrorClass, Graph, GraphError};

/// Size of the vertex count header.
pub const HEADER_SIZE: u64 = 2;

/// Size of one `(from, to, weight)` record.
pub const RECORD_SIZE: u64 = 6;

/// Byte length of a well-formed file holding `edge_count` records.
pub fn expected_len(edge_count: u64) -> u64 {
    HEADER_SIZE + RECORD_SIZE * edge_count
}

/// Errors that can occur while decoding a binary edge list.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read failed")]
    Io(#[from] io::Error),

    #[error("truncated header: cannot read the vertex count")]
    TruncatedHeader,

    #[error("truncated record {index} at byte offset {offset}: cannot read '{field}'")]
    TruncatedRecord {
        index: u64,
        offset: u64,
        field: &'static str,
    },

    #[error(transparent)]
    VertexCount(#[from] GraphError),

    #[error("record {index}")]
    InvalidEdge {
        index: u64,
        #[source]
        source: GraphError,
    },
}

impl DecodeError {
    pub fn class(&self) -> ErrorClass {
        match self {
            DecodeError::Open { .. } | DecodeError::Io(_) => ErrorClass::Io,
            DecodeError::TruncatedHeader | DecodeError::TruncatedRecord { .. } => {
                ErrorClass::Format
            }
            DecodeError::VertexCount(e) | DecodeError::InvalidEdge { source: e, .. } => e.class(),
        }
    }
}

/// Open `path` and decode it.
///
/// The file handle lives only for the duration of this call.
pub fn read_graph(path: &Path) -> Result<Graph, DecodeError> {
    debug!(path = %path.display(), "opening input");
    let file = File::open(path).map_err(|source| DecodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    decode(file)
}

/// Decode a graph from an in-memory buffer.
pub fn decode_bytes(data: &[u8]) -> Result<Graph, DecodeError> {
    decode(data)
}

/// Decode a graph from any byte stream.
pub fn decode<R: Read>(reader: R) -> Result<Graph, DecodeError> {
    let mut reader = BufReader::new(reader);

    let num_vertices = match reader.read_i16::<LittleEndian>() {
        Ok(n) => n,
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            return Err(DecodeError::TruncatedHeader)
        }
        Err(e) => return Err(e.into()),
    };
    debug!(num_vertices, "read header");

    let mut graph = Graph::new(num_vertices)?;
    let mut index = 0u64;

    // A record may only start when at least one byte remains; an empty buffer
    // here is the clean end of input.
    while !reader.fill_buf()?.is_empty() {
        let edge = read_record(&mut reader, index)?;
        trace!(
            index,
            from = edge.from,
            to = edge.to,
            weight = edge.weight,
            "read record"
        );
        graph
            .add_edge(edge)
            .map_err(|source| DecodeError::InvalidEdge { index, source })?;
        index += 1;
    }

    debug!(
        num_vertices,
        edges = graph.edge_count(),
        bytes = expected_len(index),
        "decoded graph"
    );
    Ok(graph)
}

fn read_record<R: Read>(reader: &mut R, index: u64) -> Result<Edge, DecodeError> {
    let from = read_field(reader, index, "from")?;
    let to = read_field(reader, index, "to")?;
    let weight = read_field(reader, index, "weight")?;
    Ok(Edge::new(from, to, weight))
}

fn read_field<R: Read>(
    reader: &mut R,
    index: u64,
    field: &'static str,
) -> Result<i16, DecodeError> {
    reader.read_i16::<LittleEndian>().map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            DecodeError::TruncatedRecord {
                index,
                offset: expected_len(index),
                field,
            }
        } else {
            DecodeError::Io(e)
        }
    })
}
