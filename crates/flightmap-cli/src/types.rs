use std::path::PathBuf;

use flightmap_induce::InductionStats;
use flightmap_ingest::SkipTally;
use flightmap_model::InductionOptions;
use flightmap_output::ModelPaths;

/// Outcome of one model build.
#[derive(Debug)]
pub struct BuildResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub options: InductionOptions,
    pub rows_read: usize,
    pub admitted: usize,
    pub skipped: SkipTally,
    pub icao_mismatches: usize,
    pub iata_mismatches: usize,
    pub stats: InductionStats,
    pub paths: ModelPaths,
}

/// Outcome of flattening a folder of schedule documents.
#[derive(Debug)]
pub struct FlattenResult {
    pub output: PathBuf,
    pub files_found: usize,
    pub files_processed: usize,
    pub dropped: usize,
    pub rows_written: usize,
    pub duplicates_removed: usize,
}

/// Outcome of exporting callsign mappings from a folder of schedule documents.
#[derive(Debug)]
pub struct MappingsResult {
    pub output: PathBuf,
    pub files_found: usize,
    pub files_processed: usize,
    pub dropped: usize,
    pub flights_read: usize,
    pub mappings_written: usize,
    pub duplicates_removed: usize,
}
