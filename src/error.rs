//! Error types for the VM core and the CLI shell around it.

use std::path::PathBuf;

use thiserror::Error;

/// Faults that can occur while executing an already-loaded program.
///
/// These are the "failed execution" cases the UM specification declares
/// fatal: the dispatch loop never recovers from them, it only propagates
/// them up to the entry point.
#[derive(Debug, Error)]
pub enum VmError {
    /// A bitfield value did not fit in the requested width.
    #[error("value {value:#x} does not fit in {width} bits")]
    BitOverflow { width: u32, value: u64 },

    /// `DIV` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The high 4 bits of an instruction named an opcode outside 0..=13.
    #[error("unknown opcode {0}")]
    UnknownOpcode(u32),

    /// A host I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures that can occur before a single instruction has executed.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("usage: um <program-file>")]
    Usage,

    #[error("could not open program file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
