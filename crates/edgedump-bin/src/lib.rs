//! Decoder for the binary edge list format.
//!
//! ## File Layout
//!
//! All fields are little-endian `i16`, with no magic number, version tag or
//! padding.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ num_vertices: i16            │  2 bytes
//! ├──────────────────────────────┤
//! │ from: i16                    │
//! │ to: i16                      │  6 bytes per record,
//! │ weight: i16                  │  repeated until EOF
//! ├──────────────────────────────┤
//! │ ...                          │
//! └──────────────────────────────┘
//! ```
//!
//! A well-formed file is exactly `2 + 6 * edge_count` bytes long.

mod format;

pub use format::{
    decode, decode_bytes, expected_len, read_graph, DecodeError, HEADER_SIZE, RECORD_SIZE,
};
