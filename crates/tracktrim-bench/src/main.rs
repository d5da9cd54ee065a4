//! tracktrim-bench: CLI tool for simplification parameter experimentation.
//!
//! Runs the simplifier on a GeoJSON LineString file with configurable
//! parameters, printing the geometry analysis, the simplification
//! metrics, and an optional per-budget preview table. Useful for:
//!
//! - Tuning corner/curve detection thresholds against real routes
//! - Finding the smallest budget a route survives intact
//! - Understanding why a given budget is rejected or warned about
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin tracktrim-bench -- [OPTIONS] <GEOMETRY_PATH>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracktrim::{Geometry, PreviewOutcome, SimplifyConfig};

/// Simplification parameter experimentation and diagnostics for tracktrim.
///
/// Reads a GeoJSON LineString geometry from a file, analyzes it, runs
/// one simplification at the requested budget, and optionally previews
/// a list of alternative budgets.
#[derive(Parser)]
#[command(name = "tracktrim-bench", version)]
struct Cli {
    /// Path to a GeoJSON LineString geometry file.
    geometry_path: PathBuf,

    /// Coordinate budget for the main simplification run.
    #[arg(long, default_value_t = 100)]
    max_coordinates: usize,

    /// Disable corner preservation.
    #[arg(long)]
    no_corners: bool,

    /// Disable curve preservation.
    #[arg(long)]
    no_curves: bool,

    /// Corner detection threshold in degrees.
    #[arg(long, default_value_t = SimplifyConfig::DEFAULT_CORNER_ANGLE_DEG)]
    corner_angle: f64,

    /// Curve detection window size in points.
    #[arg(long, default_value_t = SimplifyConfig::DEFAULT_CURVE_WINDOW)]
    curve_window: usize,

    /// Curve detection cumulative threshold in degrees.
    #[arg(long, default_value_t = SimplifyConfig::DEFAULT_CURVE_THRESHOLD_DEG)]
    curve_threshold: f64,

    /// Additional budgets to preview, comma-separated.
    #[arg(long, value_delimiter = ',')]
    preview: Vec<usize>,

    /// Output results as JSON instead of a human-readable report.
    #[arg(long)]
    json: bool,
}

/// Build a [`SimplifyConfig`] from CLI arguments.
const fn config_from_cli(cli: &Cli) -> SimplifyConfig {
    SimplifyConfig {
        preserve_corners: !cli.no_corners,
        preserve_curves: !cli.no_curves,
        corner_angle_deg: cli.corner_angle,
        curve_window: cli.curve_window,
        curve_threshold_deg: cli.curve_threshold,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = config_from_cli(&cli);

    let text = match std::fs::read_to_string(&cli.geometry_path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.geometry_path.display());
            return ExitCode::FAILURE;
        }
    };

    let geometry = match Geometry::from_json(&text) {
        Ok(geometry) => geometry,
        Err(e) => {
            eprintln!("Error decoding {}: {e}", cli.geometry_path.display());
            return ExitCode::FAILURE;
        }
    };

    let report = match tracktrim::analyze(&geometry) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error analyzing geometry: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match tracktrim::simplify(&geometry, cli.max_coordinates, &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error simplifying at budget {}: {e}", cli.max_coordinates);
            return ExitCode::FAILURE;
        }
    };

    let outcomes = if cli.preview.is_empty() {
        None
    } else {
        Some(tracktrim::preview(&geometry, &cli.preview))
    };

    if cli.json {
        let bundle = serde_json::json!({
            "analysis": report,
            "simplification": result,
            "preview": outcomes,
        });
        match serde_json::to_string_pretty(&bundle) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing results: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("Geometry: {}", cli.geometry_path.display());
    println!("  coordinates:      {}", report.coordinate_count);
    println!("  length:           {:.1} m", report.total_length_m);
    println!("  corners detected: {}", report.corner_count);
    println!("  curves detected:  {}", report.curve_count);
    println!("  minimum required: {}", report.minimum_required);
    println!("  complexity score: {:.3}", report.complexity_score);
    println!();

    println!("Simplification at budget {}:", cli.max_coordinates);
    println!(
        "  kept {} of {} coordinates ({:.1}% reduction)",
        result.simplified_count, result.original_count, result.reduction_ratio,
    );
    println!("  length preserved: {:.1}%", result.length_preserved);
    println!("  sufficient:       {}", result.was_sufficient);
    for warning in &result.warnings {
        println!("  warning: {warning}");
    }

    if let Some(outcomes) = outcomes {
        println!();
        println!("Preview:");
        for (budget, outcome) in &outcomes {
            match outcome {
                PreviewOutcome::Summary {
                    simplified_count,
                    reduction_ratio,
                    length_preserved,
                    was_sufficient,
                    warning_count,
                } => {
                    println!(
                        "  {budget:>6}: kept {simplified_count} \
                         ({reduction_ratio:.1}% reduction, \
                         {length_preserved:.1}% length, \
                         sufficient: {was_sufficient}, \
                         {warning_count} warning(s))",
                    );
                }
                PreviewOutcome::Failed { kind, message } => {
                    println!("  {budget:>6}: {kind}: {message}");
                }
            }
        }
    }

    ExitCode::SUCCESS
}
