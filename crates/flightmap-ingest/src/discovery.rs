//! Schedule file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Recursively lists all JSON files under a directory.
///
/// Returns paths sorted so that runs over the same tree are reproducible.
pub fn discover_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let entries = std::fs::read_dir(&current).map_err(|e| IngestError::DirectoryRead {
            path: current.clone(),
            source: e,
        })?;

        for entry_result in entries {
            let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
                path: current.clone(),
                source: e,
            })?;

            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }

            // Check for .json extension (case-insensitive)
            let is_json = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

            if is_json {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}
