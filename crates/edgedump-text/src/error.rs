//! Errors from report emission.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use edgedump_core::ErrorClass;

/// Convenience alias for results within the text crate.
pub type Result<T> = std::result::Result<T, EmitError>;

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("cannot create {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write failed")]
    Write(#[from] io::Error),

    #[error("serialization failed")]
    Serialization(#[from] serde_json::Error),
}

impl EmitError {
    pub fn class(&self) -> ErrorClass {
        ErrorClass::Io
    }
}
