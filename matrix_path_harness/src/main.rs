use anyhow::{bail, Result};
use clap::Parser;
use matrix_path_harness::report::{render_grid, run_fixture};
use matrix_path_harness::{find_fixtures, load_fixture};
use matrix_pathfinding::{CacheMode, PathFinderConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "matrix-path")]
#[command(about = "Runs path-query fixtures and compares the found paths", long_about = None)]
struct Cli {
    /// Folder holding the .json fixtures
    #[arg(default_value = "tests")]
    folder: PathBuf,

    /// Log every node the search expands
    #[arg(short, long)]
    debug: bool,

    /// Print each found path over its grid
    #[arg(short, long)]
    print_result: bool,

    /// Consult every cached path instead of only the first one
    #[arg(long)]
    scan_cache: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = PathFinderConfig {
        trace_search: cli.debug,
        cache_mode: if cli.scan_cache {
            CacheMode::Scan
        } else {
            CacheMode::Compatible
        },
    };

    let fixtures = find_fixtures(&cli.folder)?;
    println!(
        "Found {} test files in {} folder",
        fixtures.len(),
        cli.folder.display()
    );

    let mut total = 0;
    let mut failed = 0;
    for path in &fixtures {
        let (queries, mismatches) = run_file(path, config, cli.print_result)?;
        total += queries;
        failed += mismatches;
    }

    println!("\n{} of {} queries matched", total - failed, total);
    if failed > 0 {
        bail!("{failed} queries did not match their expected path");
    }
    Ok(())
}

/// Runs one fixture file and returns the number of queries and of mismatches.
fn run_file(path: &Path, config: PathFinderConfig, print_result: bool) -> Result<(usize, usize)> {
    println!("\n------------------------------------------------------------------\n");
    println!(
        "Matrix {}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    let fixture = load_fixture(path)?;
    println!(
        "Dimensions {}x{}",
        fixture.dimensions.rows, fixture.dimensions.cols
    );

    let grid = fixture.grid();
    let reports = run_fixture(&fixture, config);
    let mut mismatches = 0;
    for report in &reports {
        println!(
            "\nFinding path for {:?} -> {:?}",
            report.query.start, report.query.end
        );
        println!("{}", report.found());
        if print_result {
            if let Ok(path) = &report.result {
                if !path.is_empty() {
                    println!("{}", render_grid(&grid, path));
                }
            }
        }
        if report.matches() {
            println!("Success: Found path is same as expected.");
        } else {
            mismatches += 1;
            println!("Error: Path is not same as expected.");
        }
        println!("Time taken for finding path: {:?}", report.elapsed);
    }
    Ok((reports.len(), mismatches))
}
