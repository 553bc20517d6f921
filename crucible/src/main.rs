//! Crucible: cheapest run-constrained walk across a digit grid.
//!
//! Reads a matrix of decimal digits (one row per line) and reports the
//! minimum cost of walking from the top-left to the bottom-right cell when
//! every straight run has to stay within the configured limits. Without
//! explicit limits both standard puzzles are solved: `1..=3` and `4..=10`.
//!
//! Set `RUST_LOG=trace` to watch every frontier event.

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use crucible_core::CostGrid;
use crucible_paths::{
    CrucibleSearch, LogObserver, RunLimits, SearchConfig, SearchError, Solution, search_all,
};

#[derive(Debug, Parser)]
#[command(version, about = "Cheapest run-constrained path across a digit grid")]
struct Options {
    /// Digit grid to read.
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Shortest straight run allowed before turning or stopping.
    #[arg(long, requires = "max_run")]
    min_run: Option<u32>,

    /// Longest straight run allowed.
    #[arg(long, requires = "min_run")]
    max_run: Option<u32>,

    /// Expand turns into corridors too short to complete the minimum run.
    #[arg(long)]
    no_lookahead: bool,

    /// Draw the chosen path over the grid after each result.
    #[arg(long)]
    path: bool,

    /// Solve every configuration at once, one thread each.
    #[arg(long)]
    parallel: bool,
}

impl Options {
    fn configs(&self) -> Result<Vec<(String, SearchConfig)>, SearchError> {
        let limits = match (self.min_run, self.max_run) {
            (Some(min), Some(max)) => {
                vec![(format!("Limits {min}..={max}"), RunLimits::new(min, max)?)]
            }
            _ => vec![
                ("Part 1".to_string(), RunLimits::CRUCIBLE),
                ("Part 2".to_string(), RunLimits::ULTRA),
            ],
        };
        Ok(limits
            .into_iter()
            .map(|(label, l)| {
                let config = SearchConfig::new(l)
                    .with_lookahead(!self.no_lookahead)
                    .with_path(self.path);
                (label, config)
            })
            .collect())
    }
}

/// Print one result. Returns whether a path was found.
fn report(
    label: &str,
    grid: &CostGrid,
    result: Result<Solution, SearchError>,
    secs: f64,
) -> bool {
    match result {
        Ok(sol) => {
            println!("{label}: {} in {secs:.6} sec", sol.cost);
            log::info!(
                "{label}: expanded {} states, skipped {} stale entries, frontier peaked at {}",
                sol.stats.expanded,
                sol.stats.stale,
                sol.stats.frontier_high_water
            );
            if let Some(path) = sol.path {
                println!("{}\n", path.overlay(grid));
            }
            true
        }
        Err(e) => {
            eprintln!("{label}: {e} in {secs:.6} sec");
            false
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opts = Options::parse();

    let text = std::fs::read_to_string(&opts.input)
        .map_err(|e| format!("reading {}: {e}", opts.input.display()))?;
    let grid = CostGrid::from_digits(&text)?;
    log::debug!(
        "loaded {}x{} grid from {}",
        grid.width(),
        grid.height(),
        opts.input.display()
    );

    let configs = opts.configs()?;
    let mut failed = 0;

    if opts.parallel {
        let only: Vec<SearchConfig> = configs.iter().map(|(_, c)| *c).collect();
        let start = Instant::now();
        let results = search_all(&grid, &only);
        let secs = start.elapsed().as_secs_f64();
        for ((label, _), result) in configs.iter().zip(results) {
            if !report(label, &grid, result, secs) {
                failed += 1;
            }
        }
    } else {
        for (label, config) in &configs {
            let start = Instant::now();
            let result = CrucibleSearch::new(*config).run(&grid, &mut LogObserver);
            if !report(label, &grid, result, start.elapsed().as_secs_f64()) {
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} of {} searches found no path", configs.len()).into());
    }
    Ok(())
}
