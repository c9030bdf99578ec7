//! Reads a UM program file into the word vector that becomes segment 0.
//! Program files are big-endian 32-bit words regardless of host endianness.

use std::fs;
use std::path::Path;

use crate::error::CliError;

/// Read `path` and pack its bytes into big-endian 32-bit words. A trailing
/// chunk shorter than 4 bytes is dropped; the file format does not expect
/// one and the spec leaves this case unspecified.
pub fn load_program(path: &Path) -> Result<Vec<u32>, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_be_bytes(chunk.try_into().expect("chunks_exact(4) yields 4 bytes")))
        .collect())
}
