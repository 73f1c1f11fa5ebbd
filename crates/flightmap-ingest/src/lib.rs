pub mod dedupe;
pub mod discovery;
pub mod error;
pub mod loader;
pub mod parse;
pub mod schedule;

pub use dedupe::{
    DedupeStats, Deduplicator, dedupe_csv, dedupe_schedule_rows, latest_by_callsign,
    normalize_key_field, write_flight_mappings, write_schedule_rows,
};
pub use discovery::discover_json_files;
pub use error::{IngestError, Result};
pub use loader::{
    LoadedRecords, REQUIRED_COLUMNS, RawRow, RowOutcome, SkipReason, SkipTally, classify_row,
    load_records, load_records_from_reader,
};
pub use parse::{normalize_identifier, parse_callsign, parse_designator};
pub use schedule::{
    Direction, FlattenReport, FlattenedSchedule, FlightMapping, ScheduleRow, flatten_schedule,
    flatten_schedules,
};
