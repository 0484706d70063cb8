//! Error classification shared by the decoder, the emitter and the CLI.

use std::fmt;

/// The broad category of a failure.
///
/// Library error types report their class so the front end can choose an
/// exit status without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Opening, creating, reading or writing a file failed.
    Io,
    /// The input ended before a complete header or record was read.
    Format,
    /// The input was well-formed but violates the graph invariants.
    Validation,
}

impl ErrorClass {
    /// Process exit status for this class. `2` is left for argument errors.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorClass::Io => 1,
            ErrorClass::Format => 3,
            ErrorClass::Validation => 4,
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorClass::Io => "I/O",
            ErrorClass::Format => "format",
            ErrorClass::Validation => "validation",
        };
        f.write_str(name)
    }
}
