use anyhow::Result;
use tracing::info;

use flightmap_cli::config::{ThresholdOverrides, resolve_options};
use flightmap_cli::pipeline::{build_model, dedupe_file, export_mappings, flatten_folder};
use flightmap_cli::types::{BuildResult, FlattenResult, MappingsResult};
use flightmap_ingest::DedupeStats;

use crate::cli::{BuildArgs, DedupeArgs, FlattenArgs, MappingsArgs};

pub fn run_build(args: &BuildArgs) -> Result<BuildResult> {
    let overrides = ThresholdOverrides::from(args.thresholds);
    let options = resolve_options(args.config.as_deref(), &overrides)?;
    build_model(&args.input, &args.output_dir, &options)
}

pub fn run_flatten(args: &FlattenArgs) -> Result<FlattenResult> {
    flatten_folder(&args.folder, &args.output)
}

pub fn run_mappings(args: &MappingsArgs) -> Result<MappingsResult> {
    export_mappings(&args.folder, &args.output)
}

pub fn run_dedupe(args: &DedupeArgs) -> Result<DedupeStats> {
    let stats = dedupe_file(&args.input, &args.output, &args.key)?;
    info!(kept = stats.kept, removed = stats.removed, "dedupe complete");
    Ok(stats)
}
