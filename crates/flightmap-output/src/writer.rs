//! Table writing.
//!
//! Each table is staged in a hidden sibling file and renamed over the final
//! path once flushed. A failed write never leaves a truncated table under
//! the published name.

use std::fs;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::{debug, info};

use flightmap_model::{AirlineConstant, ExactMapping, NumSuffixRule, RuleModel, SuffixDeltaRule};

use crate::error::{OutputError, Result};
use crate::table::ModelTable;

/// Paths of the four written model tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    pub confirmed_mappings: PathBuf,
    pub num_suffix_rules: PathBuf,
    pub suffix_delta_rules: PathBuf,
    pub airline_constants: PathBuf,
}

impl ModelPaths {
    pub fn all(&self) -> [&Path; 4] {
        [
            self.confirmed_mappings.as_path(),
            self.num_suffix_rules.as_path(),
            self.suffix_delta_rules.as_path(),
            self.airline_constants.as_path(),
        ]
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write one table into `dir`, header first, returning the final path.
///
/// The header is written even when `rows` is empty.
///
/// # Errors
///
/// Fails when the directory cannot be created or the file cannot be
/// written or renamed into place.
pub fn write_table<T: ModelTable>(dir: &Path, rows: &[T]) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(T::FILE_NAME);
    let staging = dir.join(format!(".{}.tmp", T::FILE_NAME));

    if let Err(error) = write_rows(&staging, rows) {
        let _ = fs::remove_file(&staging);
        return Err(error);
    }
    fs::rename(&staging, &path).map_err(|source| {
        let _ = fs::remove_file(&staging);
        OutputError::Persist {
            from: staging.clone(),
            to: path.clone(),
            source,
        }
    })?;

    debug!(path = %path.display(), rows = rows.len(), "table written");
    Ok(path)
}

fn write_rows<T: ModelTable>(path: &Path, rows: &[T]) -> Result<()> {
    let csv_error = |source: csv::Error| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_error)?;
    writer.write_record(T::COLUMNS).map_err(csv_error)?;
    for row in rows {
        writer.write_record(row.fields()).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write all four model tables into `dir`, creating it when needed.
///
/// # Errors
///
/// Stops at the first table that cannot be written. Tables written before
/// the failure remain in place.
pub fn write_model(dir: &Path, model: &RuleModel) -> Result<ModelPaths> {
    let paths = ModelPaths {
        confirmed_mappings: write_table::<ExactMapping>(dir, &model.confirmed_mappings)?,
        num_suffix_rules: write_table::<NumSuffixRule>(dir, &model.num_suffix_rules)?,
        suffix_delta_rules: write_table::<SuffixDeltaRule>(dir, &model.suffix_delta_rules)?,
        airline_constants: write_table::<AirlineConstant>(dir, &model.airline_constants)?,
    };
    info!(output_dir = %dir.display(), "model tables written");
    Ok(paths)
}
