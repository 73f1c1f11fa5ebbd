//! Schedule table loading.
//!
//! Validates the header once, then classifies every data row as admitted
//! or skipped. Parse failures never abort the load; they are tallied and
//! returned alongside the records.

use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, trace, warn};

use flightmap_model::FlightRecord;

use crate::error::{IngestError, Result};
use crate::parse::{normalize_identifier, parse_callsign, parse_designator};

pub const NUMBER_COLUMN: &str = "number";
pub const CALLSIGN_COLUMN: &str = "callsign";
pub const AIRLINE_IATA_COLUMN: &str = "airline_iata";
pub const AIRLINE_ICAO_COLUMN: &str = "airline_icao";

/// Columns every schedule table must carry, in canonical output order.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    NUMBER_COLUMN,
    CALLSIGN_COLUMN,
    AIRLINE_IATA_COLUMN,
    AIRLINE_ICAO_COLUMN,
];

/// Why a row was left out of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkipReason {
    InvalidCallsign,
    InvalidDesignator,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCallsign => f.write_str("invalid callsign"),
            Self::InvalidDesignator => f.write_str("invalid flight designator"),
        }
    }
}

/// Raw field values of one schedule row, before parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawRow<'a> {
    pub number: &'a str,
    pub callsign: &'a str,
    pub airline_iata: &'a str,
    pub airline_icao: &'a str,
}

/// Result of classifying a single row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Admitted(FlightRecord),
    Skipped { line: u64, reason: SkipReason },
}

/// Parse one row into a record, or report the first component that failed.
pub fn classify_row(row: &RawRow<'_>, line: u64) -> RowOutcome {
    let callsign = normalize_identifier(row.callsign);
    let Some(parsed) = parse_callsign(&callsign) else {
        return RowOutcome::Skipped {
            line,
            reason: SkipReason::InvalidCallsign,
        };
    };
    let Some(designator) = parse_designator(row.number, row.airline_iata) else {
        return RowOutcome::Skipped {
            line,
            reason: SkipReason::InvalidDesignator,
        };
    };
    RowOutcome::Admitted(FlightRecord::new(&callsign, parsed, designator))
}

/// Per-reason counts of skipped rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipTally {
    pub invalid_callsign: usize,
    pub invalid_designator: usize,
}

impl SkipTally {
    pub fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::InvalidCallsign => self.invalid_callsign += 1,
            SkipReason::InvalidDesignator => self.invalid_designator += 1,
        }
    }

    pub fn count(&self, reason: SkipReason) -> usize {
        match reason {
            SkipReason::InvalidCallsign => self.invalid_callsign,
            SkipReason::InvalidDesignator => self.invalid_designator,
        }
    }

    pub fn total(&self) -> usize {
        self.invalid_callsign + self.invalid_designator
    }
}

/// Records admitted from a schedule table plus load bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    pub records: Vec<FlightRecord>,
    pub rows_read: usize,
    pub skipped: SkipTally,
    /// Admitted rows whose `airline_icao` column disagrees with the callsign.
    pub icao_mismatches: usize,
    /// Admitted rows whose `airline_iata` column disagrees with the designator.
    pub iata_mismatches: usize,
}

impl LoadedRecords {
    fn admit(&mut self, row: &RawRow<'_>, record: FlightRecord) {
        let icao = normalize_identifier(row.airline_icao);
        if !icao.is_empty() && icao != record.airline_icao {
            self.icao_mismatches += 1;
        }
        let iata = normalize_identifier(row.airline_iata);
        if !iata.is_empty() && iata != record.airline_iata {
            self.iata_mismatches += 1;
        }
        self.records.push(record);
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    number: usize,
    callsign: usize,
    airline_iata: usize,
    airline_icao: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, path: &Path) -> Result<Self> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let position = |column: &str| names.iter().position(|name| name == column);

        let missing: BTreeSet<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| position(**column).is_none())
            .map(|column| (*column).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(IngestError::MissingColumns {
                path: path.to_path_buf(),
                columns: missing.into_iter().collect(),
            });
        }

        let index = |column: &str| position(column).unwrap_or_default();
        Ok(Self {
            number: index(NUMBER_COLUMN),
            callsign: index(CALLSIGN_COLUMN),
            airline_iata: index(AIRLINE_IATA_COLUMN),
            airline_icao: index(AIRLINE_ICAO_COLUMN),
        })
    }

    fn row<'a>(&self, record: &'a StringRecord) -> RawRow<'a> {
        let field = |idx: usize| record.get(idx).unwrap_or("");
        RawRow {
            number: field(self.number),
            callsign: field(self.callsign),
            airline_iata: field(self.airline_iata),
            airline_icao: field(self.airline_icao),
        }
    }
}

pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Load flight records from a schedule CSV file.
///
/// # Errors
///
/// Fails when the file cannot be opened, is not valid CSV, or lacks any of
/// [`REQUIRED_COLUMNS`].
pub fn load_records(path: &Path) -> Result<LoadedRecords> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_records_from_reader(file, path)
}

/// Load flight records from any CSV source. `source` is used for error messages.
pub fn load_records_from_reader<R: Read>(reader: R, source: &Path) -> Result<LoadedRecords> {
    let csv_error = |err: csv::Error| IngestError::Csv {
        path: source.to_path_buf(),
        source: err,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let columns = ColumnIndex::resolve(reader.headers().map_err(csv_error)?, source)?;

    let mut loaded = LoadedRecords::default();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        loaded.rows_read += 1;
        let line = record.position().map_or(0, csv::Position::line);
        let row = columns.row(&record);
        match classify_row(&row, line) {
            RowOutcome::Admitted(flight) => loaded.admit(&row, flight),
            RowOutcome::Skipped { line, reason } => {
                trace!(line, %reason, "skipping row");
                loaded.skipped.record(reason);
            }
        }
    }

    let skipped = loaded.skipped.total();
    if skipped > 0 {
        warn!(
            skipped,
            invalid_callsign = loaded.skipped.invalid_callsign,
            invalid_designator = loaded.skipped.invalid_designator,
            "skipped rows due to parse/validation issues"
        );
    }
    debug!(
        source = %source.display(),
        rows_read = loaded.rows_read,
        admitted = loaded.records.len(),
        "schedule table loaded"
    );
    Ok(loaded)
}
