//! Flattening of per-airport schedule documents into flight mappings.
//!
//! A schedule document holds optional `departures` and `arrivals` lists.
//! Each movement carries the flight number, the radio callsign, an
//! `airline` object and, optionally, the airport at the other end:
//!
//! ```json
//! {
//!   "departures": [
//!     {
//!       "number": "LS 239",
//!       "callSign": "EXS3CM",
//!       "airline": { "name": "Jet2", "iata": "LS", "icao": "EXS" },
//!       "movement": { "airport": { "iata": "ALC", "icao": "LEAL", "name": "Alicante" } }
//!     }
//!   ]
//! }
//! ```
//!
//! Codes are compacted (all whitespace removed); names are only trimmed.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScheduleDocument {
    departures: Option<Vec<Movement>>,
    arrivals: Option<Vec<Movement>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Movement {
    number: Option<String>,
    #[serde(rename = "callSign")]
    call_sign: Option<String>,
    airline: Option<Organisation>,
    movement: Option<MovementDetail>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MovementDetail {
    airport: Option<Organisation>,
}

/// Airline or airport: both carry IATA and ICAO codes plus a display name.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Organisation {
    iata: Option<String>,
    icao: Option<String>,
    name: Option<String>,
}

/// Which list of the schedule document a movement came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Departures,
    Arrivals,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Departures => "Departures",
            Direction::Arrivals => "Arrivals",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One flattened schedule entry, in the column order the model builder reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub number: String,
    pub callsign: String,
    pub airline_iata: String,
    pub airline_icao: String,
}

impl ScheduleRow {
    pub fn fields(&self) -> [&str; 4] {
        [
            self.number.as_str(),
            self.callsign.as_str(),
            self.airline_iata.as_str(),
            self.airline_icao.as_str(),
        ]
    }
}

/// A complete movement with its airline, airport and provenance.
///
/// This is the row shape of the callsign mapping export; [`ScheduleRow`]
/// is its model-input projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightMapping {
    pub callsign: String,
    pub flight_iata: String,
    pub airline_iata: String,
    pub airline_icao: String,
    pub airline_name: String,
    pub airport_iata: String,
    pub airport_icao: String,
    pub airport_name: String,
    pub direction: Direction,
    /// Schedule file name, without its directory.
    pub filename: String,
}

impl FlightMapping {
    /// Header row of the mapping export.
    pub const COLUMNS: [&'static str; 10] = [
        "callsign",
        "flight_iata",
        "airline_iata",
        "airline_icao",
        "airline_name",
        "airport_iata",
        "airport_icao",
        "airport_name",
        "direction",
        "filename",
    ];

    pub fn fields(&self) -> [&str; 10] {
        [
            self.callsign.as_str(),
            self.flight_iata.as_str(),
            self.airline_iata.as_str(),
            self.airline_icao.as_str(),
            self.airline_name.as_str(),
            self.airport_iata.as_str(),
            self.airport_icao.as_str(),
            self.airport_name.as_str(),
            self.direction.as_str(),
            self.filename.as_str(),
        ]
    }

    pub fn schedule_row(&self) -> ScheduleRow {
        ScheduleRow {
            number: self.flight_iata.clone(),
            callsign: self.callsign.clone(),
            airline_iata: self.airline_iata.clone(),
            airline_icao: self.airline_icao.clone(),
        }
    }
}

/// Movements extracted from one schedule document.
#[derive(Debug, Clone, Default)]
pub struct FlattenedSchedule {
    pub flights: Vec<FlightMapping>,
    /// Movements missing a number, callsign or airline code.
    pub dropped: usize,
}

impl FlattenedSchedule {
    pub fn rows(&self) -> Vec<ScheduleRow> {
        self.flights.iter().map(FlightMapping::schedule_row).collect()
    }
}

/// Totals across a set of schedule documents.
#[derive(Debug, Clone, Default)]
pub struct FlattenReport {
    pub flights: Vec<FlightMapping>,
    pub files_found: usize,
    pub files_processed: usize,
    pub dropped: usize,
}

impl FlattenReport {
    pub fn rows(&self) -> Vec<ScheduleRow> {
        self.flights.iter().map(FlightMapping::schedule_row).collect()
    }
}

fn compact(value: Option<&str>) -> String {
    value
        .unwrap_or_default()
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect()
}

fn trimmed(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_string()
}

impl Movement {
    fn into_flight(self, direction: Direction, filename: &str) -> Option<FlightMapping> {
        let airline = self.airline.unwrap_or_default();
        let airport = self
            .movement
            .and_then(|detail| detail.airport)
            .unwrap_or_default();
        let flight = FlightMapping {
            callsign: compact(self.call_sign.as_deref()),
            flight_iata: compact(self.number.as_deref()),
            airline_iata: compact(airline.iata.as_deref()),
            airline_icao: compact(airline.icao.as_deref()),
            airline_name: trimmed(airline.name.as_deref()),
            airport_iata: compact(airport.iata.as_deref()),
            airport_icao: compact(airport.icao.as_deref()),
            airport_name: trimmed(airport.name.as_deref()),
            direction,
            filename: filename.to_string(),
        };
        let required = [
            &flight.callsign,
            &flight.flight_iata,
            &flight.airline_iata,
            &flight.airline_icao,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return None;
        }
        Some(flight)
    }
}

/// Flatten a single schedule document.
///
/// # Errors
///
/// Fails when the file cannot be opened or is not a schedule document.
pub fn flatten_schedule(path: &Path) -> Result<FlattenedSchedule> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let document: ScheduleDocument =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut flattened = FlattenedSchedule::default();
    let movements = document
        .departures
        .unwrap_or_default()
        .into_iter()
        .map(|movement| (Direction::Departures, movement))
        .chain(
            document
                .arrivals
                .unwrap_or_default()
                .into_iter()
                .map(|movement| (Direction::Arrivals, movement)),
        );
    for (direction, movement) in movements {
        match movement.into_flight(direction, &filename) {
            Some(flight) => flattened.flights.push(flight),
            None => flattened.dropped += 1,
        }
    }
    Ok(flattened)
}

/// Flatten every document in `files`, skipping unreadable ones with a warning.
pub fn flatten_schedules(files: &[PathBuf]) -> FlattenReport {
    let mut report = FlattenReport {
        files_found: files.len(),
        ..FlattenReport::default()
    };
    for path in files {
        match flatten_schedule(path) {
            Ok(flattened) => {
                debug!(
                    path = %path.display(),
                    flights = flattened.flights.len(),
                    dropped = flattened.dropped,
                    "schedule flattened"
                );
                report.files_processed += 1;
                report.dropped += flattened.dropped;
                report.flights.extend(flattened.flights);
            }
            Err(error) => warn!(%error, "skipping schedule file"),
        }
    }
    info!(
        files_found = report.files_found,
        files_processed = report.files_processed,
        flights = report.flights.len(),
        "schedules flattened"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organisation(iata: &str, icao: &str, name: &str) -> Option<Organisation> {
        Some(Organisation {
            iata: Some(iata.to_string()),
            icao: Some(icao.to_string()),
            name: Some(name.to_string()),
        })
    }

    #[test]
    fn movement_strips_whitespace_from_codes_only() {
        let movement = Movement {
            number: Some("LS 239".to_string()),
            call_sign: Some(" EXS3CM ".to_string()),
            airline: organisation("LS", "EXS", " Jet2 Holidays "),
            movement: Some(MovementDetail {
                airport: organisation("ALC", "LEAL", "Alicante"),
            }),
        };
        let flight = movement
            .into_flight(Direction::Arrivals, "alc.json")
            .expect("complete movement");
        assert_eq!(flight.flight_iata, "LS239");
        assert_eq!(flight.callsign, "EXS3CM");
        assert_eq!(flight.airline_name, "Jet2 Holidays");
        assert_eq!(flight.airport_icao, "LEAL");
        assert_eq!(flight.fields()[8], "Arrivals");
        assert_eq!(flight.schedule_row().fields(), ["LS239", "EXS3CM", "LS", "EXS"]);
    }

    #[test]
    fn missing_airport_leaves_blank_fields() {
        let movement = Movement {
            number: Some("LS239".to_string()),
            call_sign: Some("EXS3CM".to_string()),
            airline: organisation("LS", "EXS", "Jet2"),
            movement: None,
        };
        let flight = movement
            .into_flight(Direction::Departures, "alc.json")
            .expect("airport is optional");
        assert_eq!(flight.airport_iata, "");
        assert_eq!(flight.airport_name, "");
    }

    #[test]
    fn movement_without_airline_is_dropped() {
        let movement = Movement {
            number: Some("LS239".to_string()),
            call_sign: Some("EXS3CM".to_string()),
            airline: None,
            movement: None,
        };
        assert!(movement.into_flight(Direction::Departures, "alc.json").is_none());
    }
}
