use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use flightmap_cli::types::{BuildResult, FlattenResult, MappingsResult};
use flightmap_ingest::DedupeStats;

pub fn print_build_summary(result: &BuildResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());

    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(metric_row("Load", "Rows read", result.rows_read));
    table.add_row(metric_row("Load", "Rows admitted", result.admitted));
    table.add_row(vec![
        stage_cell("Load"),
        Cell::new("Skipped: invalid callsign"),
        count_cell(result.skipped.invalid_callsign, Color::Yellow),
    ]);
    table.add_row(vec![
        stage_cell("Load"),
        Cell::new("Skipped: invalid designator"),
        count_cell(result.skipped.invalid_designator, Color::Yellow),
    ]);
    table.add_row(vec![
        stage_cell("Load"),
        Cell::new("ICAO column disagrees with callsign"),
        count_cell(result.icao_mismatches, Color::DarkYellow),
    ]);
    table.add_row(vec![
        stage_cell("Load"),
        Cell::new("IATA column disagrees with designator"),
        count_cell(result.iata_mismatches, Color::DarkYellow),
    ]);
    table.add_row(metric_row("Induce", "Airline groups", stats.groups));
    table.add_row(metric_row(
        "Induce",
        &format!("(num, suffix) rules of {} candidates", stats.parametric_candidates),
        stats.parametric_accepted,
    ));
    table.add_row(metric_row(
        "Induce",
        &format!("Suffix delta rules of {} candidates", stats.delta_candidates),
        stats.delta_accepted,
    ));
    table.add_row(metric_row(
        "Induce",
        "Airlines with constant delta",
        stats.constant_deltas_accepted,
    ));
    table.add_row(metric_row(
        "Induce",
        "Airlines with constant prefix",
        stats.constant_prefixes,
    ));
    println!("{table}");

    let mut files = Table::new();
    files.set_header(vec![header_cell("Table"), header_cell("Rows"), header_cell("Path")]);
    apply_summary_table_style(&mut files);
    align_column(&mut files, 1, CellAlignment::Right);
    let paths = &result.paths;
    for (path, rows) in [
        (&paths.confirmed_mappings, stats.records),
        (&paths.num_suffix_rules, stats.parametric_accepted),
        (&paths.suffix_delta_rules, stats.delta_accepted),
        (&paths.airline_constants, stats.groups),
    ] {
        files.add_row(vec![table_cell(path), Cell::new(rows), dim_cell(path.display())]);
    }
    println!("{files}");
}

pub fn print_flatten_summary(result: &FlattenResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Schedule files found"), Cell::new(result.files_found)]);
    table.add_row(vec![
        Cell::new("Schedule files processed"),
        Cell::new(result.files_processed),
    ]);
    table.add_row(vec![
        Cell::new("Incomplete movements dropped"),
        count_cell(result.dropped, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate rows removed"),
        count_cell(result.duplicates_removed, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unique rows written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.rows_written).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("Output: {}", result.output.display());
}

pub fn print_mappings_summary(result: &MappingsResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Schedule files found"), Cell::new(result.files_found)]);
    table.add_row(vec![
        Cell::new("Schedule files processed"),
        Cell::new(result.files_processed),
    ]);
    table.add_row(vec![
        Cell::new("Incomplete movements dropped"),
        count_cell(result.dropped, Color::Yellow),
    ]);
    table.add_row(vec![Cell::new("Flights read"), Cell::new(result.flights_read)]);
    table.add_row(vec![
        Cell::new("Repeated callsigns replaced"),
        count_cell(result.duplicates_removed, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Callsign mappings written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.mappings_written).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("Output: {}", result.output.display());
}

pub fn print_dedupe_summary(stats: &DedupeStats, output: &Path) {
    println!(
        "Wrote {} unique rows to {} ({} duplicates removed)",
        stats.kept,
        output.display(),
        stats.removed
    );
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn metric_row(stage: &str, metric: &str, count: usize) -> Vec<Cell> {
    vec![stage_cell(stage), Cell::new(metric), Cell::new(count)]
}

fn stage_cell(stage: &str) -> Cell {
    Cell::new(stage)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn table_cell(path: &Path) -> Cell {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("unknown");
    Cell::new(name).fg(Color::Blue)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
