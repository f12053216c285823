//! Small file helpers

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// True if `path` exists and is a regular file that can be opened.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.is_file() && fs::File::open(path).is_ok()
}

/// Read a delimited text file into rows of fields.
///
/// Each line is split on `delimiter` as-is: no quoting or escaping rules
/// apply. A trailing newline does not produce an empty final row. An
/// empty delimiter is rejected before the file is read.
pub fn read_csv(path: impl AsRef<Path>, delimiter: &str) -> Result<Vec<Vec<String>>> {
    if delimiter.is_empty() {
        return Err(Error::EmptyDelimiter);
    }
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read_csv");

    Ok(content
        .lines()
        .map(|line| line.split(delimiter).map(str::to_string).collect())
        .collect())
}
