//! Build, flatten, mapping export and de-duplicate runs.
//!
//! A build is strictly sequential: load the schedule table, induce rules,
//! write the four tables. Each stage consumes the previous stage's value.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use flightmap_induce::induce;
use flightmap_ingest::{
    DedupeStats, FlattenReport, dedupe_csv, dedupe_schedule_rows, discover_json_files,
    flatten_schedules, latest_by_callsign, load_records, write_flight_mappings,
    write_schedule_rows,
};
use flightmap_model::InductionOptions;
use flightmap_output::write_model;

use crate::types::{BuildResult, FlattenResult, MappingsResult};

/// Learn a model from `input` and write it to `output_dir`.
pub fn build_model(
    input: &Path,
    output_dir: &Path,
    options: &InductionOptions,
) -> Result<BuildResult> {
    let build_span = info_span!("build", input = %input.display());
    let _build_guard = build_span.enter();
    info!(
        ns_min_support = options.ns_min_support,
        ns_min_purity = options.ns_min_purity,
        sd_min_support = options.sd_min_support,
        sd_min_purity = options.sd_min_purity,
        delta_min_purity = options.delta_min_purity,
        "induction options"
    );

    // =========================================================================
    // Stage 1: Load - parse rows, skip and count unparseable ones
    // =========================================================================
    let load_start = Instant::now();
    let loaded = info_span!("load")
        .in_scope(|| load_records(input))
        .with_context(|| format!("load schedule table {}", input.display()))?;
    info!(
        rows_read = loaded.rows_read,
        admitted = loaded.records.len(),
        skipped = loaded.skipped.total(),
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );
    if loaded.records.is_empty() {
        warn!("no rows admitted; writing empty model tables");
    }

    // =========================================================================
    // Stage 2: Induce - group by airline and learn the four rule tiers
    // =========================================================================
    let induce_start = Instant::now();
    let induction = info_span!("induce").in_scope(|| induce(&loaded.records, options));
    info!(
        groups = induction.stats.groups,
        duration_ms = induce_start.elapsed().as_millis(),
        "induce complete"
    );

    // =========================================================================
    // Stage 3: Write - one CSV per rule tier
    // =========================================================================
    let write_start = Instant::now();
    let paths = info_span!("write", output_dir = %output_dir.display())
        .in_scope(|| write_model(output_dir, &induction.model))
        .with_context(|| format!("write model tables to {}", output_dir.display()))?;
    info!(
        duration_ms = write_start.elapsed().as_millis(),
        "write complete"
    );

    Ok(BuildResult {
        input: input.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        options: *options,
        rows_read: loaded.rows_read,
        admitted: loaded.records.len(),
        skipped: loaded.skipped,
        icao_mismatches: loaded.icao_mismatches,
        iata_mismatches: loaded.iata_mismatches,
        stats: induction.stats,
        paths,
    })
}

fn flatten_folder_documents(folder: &Path) -> Result<FlattenReport> {
    let files = discover_json_files(folder)
        .with_context(|| format!("discover schedule files in {}", folder.display()))?;
    if files.is_empty() {
        warn!(folder = %folder.display(), "no JSON files found");
    }
    info!(file_count = files.len(), "schedule files found");
    Ok(flatten_schedules(&files))
}

/// Flatten every schedule document under `folder` into one de-duplicated
/// model input table at `output`.
pub fn flatten_folder(folder: &Path, output: &Path) -> Result<FlattenResult> {
    let report = flatten_folder_documents(folder)?;
    let (rows, stats) = dedupe_schedule_rows(report.rows());
    write_schedule_rows(output, &rows)
        .with_context(|| format!("write flattened schedules to {}", output.display()))?;
    info!(
        rows = rows.len(),
        removed = stats.removed,
        output = %output.display(),
        "flattened schedules written"
    );

    Ok(FlattenResult {
        output: output.to_path_buf(),
        files_found: report.files_found,
        files_processed: report.files_processed,
        dropped: report.dropped,
        rows_written: rows.len(),
        duplicates_removed: stats.removed,
    })
}

/// Export one callsign mapping per callsign (the last one seen) from every
/// schedule document under `folder`, sorted by callsign.
pub fn export_mappings(folder: &Path, output: &Path) -> Result<MappingsResult> {
    let report = flatten_folder_documents(folder)?;
    let flights_read = report.flights.len();
    let (mappings, stats) = latest_by_callsign(report.flights);
    write_flight_mappings(output, &mappings)
        .with_context(|| format!("write flight mappings to {}", output.display()))?;
    info!(
        mappings = mappings.len(),
        removed = stats.removed,
        output = %output.display(),
        "flight mappings written"
    );

    Ok(MappingsResult {
        output: output.to_path_buf(),
        files_found: report.files_found,
        files_processed: report.files_processed,
        dropped: report.dropped,
        flights_read,
        mappings_written: mappings.len(),
        duplicates_removed: stats.removed,
    })
}

/// De-duplicate `input` into `output` on the given key columns (all when empty).
pub fn dedupe_file(input: &Path, output: &Path, key_columns: &[String]) -> Result<DedupeStats> {
    dedupe_csv(input, output, key_columns)
        .with_context(|| format!("de-duplicate {}", input.display()))
}
