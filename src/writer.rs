use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::IoError;

/// Appends a generated block to the end of `path`. Existing content is never
/// touched; the target must already exist.
pub fn append_block(path: &Path, block: &str) -> Result<(), IoError> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| IoError::write_error(path, e))?;
    file.write_all(block.as_bytes())
        .map_err(|e| IoError::write_error(path, e))
}
