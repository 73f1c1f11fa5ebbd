//! Row de-duplication by normalized key.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::info;

use crate::error::{IngestError, Result};
use crate::loader::{REQUIRED_COLUMNS, normalize_header};
use crate::schedule::{FlightMapping, ScheduleRow};

/// Normalize a key field: trim, collapse internal whitespace, uppercase.
pub fn normalize_key_field(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Tracks normalized keys seen so far. The first occurrence of a key wins.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: BTreeSet<Vec<String>>,
    kept: usize,
    removed: usize,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the key has not been seen before.
    pub fn insert<'a, I>(&mut self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let key: Vec<String> = fields.into_iter().map(normalize_key_field).collect();
        let fresh = self.seen.insert(key);
        if fresh {
            self.kept += 1;
        } else {
            self.removed += 1;
        }
        fresh
    }

    pub fn stats(&self) -> DedupeStats {
        DedupeStats {
            kept: self.kept,
            removed: self.removed,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupeStats {
    pub kept: usize,
    pub removed: usize,
}

/// Drop schedule rows that repeat on all four normalized fields.
pub fn dedupe_schedule_rows(rows: Vec<ScheduleRow>) -> (Vec<ScheduleRow>, DedupeStats) {
    let mut dedupe = Deduplicator::new();
    let unique = rows
        .into_iter()
        .filter(|row| dedupe.insert(row.fields()))
        .collect();
    (unique, dedupe.stats())
}

/// Keep one mapping per callsign, the last one seen, ordered by callsign.
///
/// Callsigns are compared after key normalization.
pub fn latest_by_callsign(flights: Vec<FlightMapping>) -> (Vec<FlightMapping>, DedupeStats) {
    let total = flights.len();
    let mut latest: BTreeMap<String, FlightMapping> = BTreeMap::new();
    for flight in flights {
        latest.insert(normalize_key_field(&flight.callsign), flight);
    }
    let stats = DedupeStats {
        kept: latest.len(),
        removed: total - latest.len(),
    };
    (latest.into_values().collect(), stats)
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IngestError::Write {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
    }
    Ok(())
}

/// Write schedule rows as a model-builder input table.
///
/// The header is written even when there are no rows.
pub fn write_schedule_rows(path: &Path, rows: &[ScheduleRow]) -> Result<()> {
    write_records(path, &REQUIRED_COLUMNS, rows.iter().map(ScheduleRow::fields))
}

/// Write the callsign mapping export, header first.
pub fn write_flight_mappings(path: &Path, flights: &[FlightMapping]) -> Result<()> {
    write_records(
        path,
        &FlightMapping::COLUMNS,
        flights.iter().map(FlightMapping::fields),
    )
}

fn write_records<'a, const N: usize, I>(path: &Path, header: &[&str; N], records: I) -> Result<()>
where
    I: IntoIterator<Item = [&'a str; N]>,
{
    create_parent(path)?;
    let write_error = |source: csv::Error| IngestError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(write_error)?;
    writer.write_record(header).map_err(write_error)?;
    for record in records {
        writer.write_record(record).map_err(write_error)?;
    }
    writer.flush().map_err(|e| write_error(e.into()))?;
    Ok(())
}

/// De-duplicate an arbitrary CSV file on the named key columns.
///
/// With no key columns every column participates in the key. Column names
/// are matched after trimming.
///
/// # Errors
///
/// Fails on unreadable input, unwritable output, or an unknown key column.
pub fn dedupe_csv(input: &Path, output: &Path, key_columns: &[String]) -> Result<DedupeStats> {
    let read_error = |source: csv::Error| IngestError::Csv {
        path: input.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(input)
        .map_err(read_error)?;
    let headers = reader.headers().map_err(read_error)?.clone();
    let names: Vec<String> = headers.iter().map(normalize_header).collect();

    let key_indices: Vec<usize> = if key_columns.is_empty() {
        (0..names.len()).collect()
    } else {
        key_columns
            .iter()
            .map(|column| {
                let wanted = normalize_header(column);
                names
                    .iter()
                    .position(|name| *name == wanted)
                    .ok_or_else(|| IngestError::UnknownKeyColumn {
                        column: wanted,
                        path: input.to_path_buf(),
                    })
            })
            .collect::<Result<_>>()?
    };

    create_parent(output)?;
    let write_error = |source: csv::Error| IngestError::Write {
        path: output.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(output)
        .map_err(write_error)?;
    writer.write_record(&headers).map_err(write_error)?;

    let mut dedupe = Deduplicator::new();
    for result in reader.records() {
        let record = result.map_err(read_error)?;
        let key = key_indices.iter().map(|&idx| record.get(idx).unwrap_or(""));
        if dedupe.insert(key) {
            writer.write_record(&record).map_err(write_error)?;
        }
    }
    writer.flush().map_err(|e| write_error(e.into()))?;

    let stats = dedupe.stats();
    info!(
        input = %input.display(),
        output = %output.display(),
        kept = stats.kept,
        removed = stats.removed,
        "csv de-duplicated"
    );
    Ok(stats)
}
