//! Document Loader
//!
//! Reads and parses one JSON document from a tool directory, with a size cap
//! so a runaway file can't stall the linter.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Max document size (1MB)
const MAX_FILE_SIZE: u64 = 1_000_000;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("file too large (max 1MB)")]
    TooLarge,
}

/// Read `path` and parse it as `T`
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let metadata = fs::metadata(path)?;
    if metadata.len() > MAX_FILE_SIZE {
        return Err(LoadError::TooLarge);
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geata_schema::Manifest;
    use std::io::Write;

    #[test]
    fn test_load_json_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"{ not json").unwrap();

        let result: Result<Manifest, LoadError> = load_json(&path);
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_load_json_missing_file_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Manifest, LoadError> = load_json(&dir.path().join("manifest.json"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
