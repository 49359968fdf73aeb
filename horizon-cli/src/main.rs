//! Horizon CLI — run portfolio projections from scenario files.
//!
//! Commands:
//! - `project` — run a Monte Carlo projection from a TOML scenario plus a
//!   directory of per-ticker CSV price histories
//! - `history status` — report coverage of the CSV history directory

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use horizon_core::{
    run_projection, ContributionPlan, Holding, MemoryProvider, PricePoint, Projection,
    ProjectionConfig,
};

#[derive(Parser)]
#[command(
    name = "horizon",
    about = "Horizon CLI — multi-asset Monte Carlo portfolio projection"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a projection from a TOML scenario file.
    Project {
        /// Path to the scenario TOML (holdings, contributions, config).
        #[arg(long)]
        scenario: PathBuf,

        /// Directory of per-ticker CSV files (`<TICKER>.csv`, `date,close`).
        #[arg(long, default_value = "history")]
        history_dir: PathBuf,

        /// Override the scenario's simulation count.
        #[arg(long)]
        simulations: Option<usize>,

        /// Override the scenario's RNG seed.
        #[arg(long)]
        seed: Option<u64>,

        /// Write the full projection as JSON to this path.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// History directory management.
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Report per-ticker coverage of the CSV history directory.
    Status {
        #[arg(long, default_value = "history")]
        history_dir: PathBuf,
    },
}

/// Scenario file layout.
///
/// ```toml
/// [projection]
/// horizon_years = 10
/// n_simulations = 5000
/// seed = 42            # optional
///
/// [[holdings]]
/// ticker = "VWCE"
/// quantity = 12.0
/// price = 105.4
///
/// [[contributions]]
/// ticker = "VWCE"
/// amount = 200.0
/// frequency = "monthly"
/// ```
#[derive(Debug, Deserialize)]
struct Scenario {
    projection: ProjectionConfig,
    #[serde(default)]
    holdings: Vec<Holding>,
    #[serde(default)]
    contributions: Vec<ContributionPlan>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Project {
            scenario,
            history_dir,
            simulations,
            seed,
            output,
        } => run_project(&scenario, &history_dir, simulations, seed, output.as_deref()),
        Commands::History { action } => match action {
            HistoryAction::Status { history_dir } => run_history_status(&history_dir),
        },
    }
}

fn run_project(
    scenario_path: &Path,
    history_dir: &Path,
    simulations: Option<usize>,
    seed: Option<u64>,
    output: Option<&Path>,
) -> Result<()> {
    let raw = std::fs::read_to_string(scenario_path)
        .with_context(|| format!("reading scenario {}", scenario_path.display()))?;
    let scenario: Scenario = toml::from_str(&raw)
        .with_context(|| format!("parsing scenario {}", scenario_path.display()))?;

    let mut config = scenario.projection.clone();
    if let Some(n) = simulations {
        config.n_simulations = n;
    }
    if let Some(s) = seed {
        config.seed = Some(s);
    }

    let tickers = ticker_universe(&scenario);
    if tickers.is_empty() {
        bail!("scenario has no holdings and no contributions");
    }
    let provider = load_history(history_dir, &tickers)?;

    let projection = run_projection(
        &provider,
        &scenario.holdings,
        &scenario.contributions,
        &config,
    )?;

    print_summary(&projection, &config);

    if let Some(path) = output {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(file, &projection)?;
        println!("Projection saved to: {}", path.display());
    }

    Ok(())
}

/// Tickers the scenario references, sorted and unique.
fn ticker_universe(scenario: &Scenario) -> Vec<String> {
    let mut tickers = BTreeSet::new();
    for h in &scenario.holdings {
        tickers.insert(h.ticker.clone());
    }
    for c in &scenario.contributions {
        tickers.insert(c.ticker.clone());
    }
    tickers.into_iter().collect()
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: NaiveDate,
    close: f64,
}

/// Load `<TICKER>.csv` for every referenced ticker into a MemoryProvider.
fn load_history(dir: &Path, tickers: &[String]) -> Result<MemoryProvider> {
    let mut provider = MemoryProvider::new();
    for ticker in tickers {
        let path = dir.join(format!("{ticker}.csv"));
        if !path.exists() {
            bail!(
                "no history file for '{ticker}' — expected {}",
                path.display()
            );
        }
        let mut reader = csv::Reader::from_path(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        let mut points = Vec::new();
        for row in reader.deserialize::<CsvRow>() {
            let row = row.with_context(|| format!("parsing {}", path.display()))?;
            points.push(PricePoint::new(row.date, row.close));
        }
        provider.insert(ticker.clone(), points);
    }
    Ok(provider)
}

fn run_history_status(dir: &Path) -> Result<()> {
    if !dir.exists() {
        println!("History directory does not exist: {}", dir.display());
        return Ok(());
    }

    let mut rows: Vec<(String, usize, String)> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        let ticker = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let mut reader = csv::Reader::from_path(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        let mut count = 0usize;
        let mut first: Option<NaiveDate> = None;
        let mut last: Option<NaiveDate> = None;
        for row in reader.deserialize::<CsvRow>() {
            let row = row.with_context(|| format!("parsing {}", path.display()))?;
            count += 1;
            first = Some(first.map_or(row.date, |f| f.min(row.date)));
            last = Some(last.map_or(row.date, |l| l.max(row.date)));
        }

        let range = match (first, last) {
            (Some(f), Some(l)) => format!("{f} to {l}"),
            _ => "(empty)".to_string(),
        };
        rows.push((ticker, count, range));
    }

    if rows.is_empty() {
        println!("No CSV files in {}", dir.display());
        return Ok(());
    }

    rows.sort_by(|a, b| a.0.cmp(&b.0));
    println!("{:<10} {:>8}  {}", "Ticker", "Rows", "Date Range");
    println!("{}", "-".repeat(50));
    for (ticker, count, range) in &rows {
        println!("{ticker:<10} {count:>8}  {range}");
    }

    Ok(())
}

fn print_summary(projection: &Projection, config: &ProjectionConfig) {
    println!();
    println!("=== Projection ===");
    println!(
        "Horizon:         {} years ({} paths)",
        config.horizon_years, config.n_simulations
    );
    println!(
        "Period:          {} to {}",
        projection.dates.first().map(String::as_str).unwrap_or("?"),
        projection.dates.last().map(String::as_str).unwrap_or("?"),
    );
    println!("Calibration:     {} years of history", projection.history_years);
    println!("Assets:          {}", projection.asset_trends.len());
    println!();
    println!("--- Outcome distribution ---");
    println!("Pessimistic p10: {:>14.2}", projection.final_values.p10);
    println!("Expected    p50: {:>14.2}", projection.final_values.p50);
    println!("Optimistic  p90: {:>14.2}", projection.final_values.p90);
    println!("Invested:        {:>14.2}", projection.total_invested);
    println!("ROI (median):    {:>13.1}%", projection.roi_percent);
    println!();

    // Milestones: roughly one reported row per year.
    println!("{:<9} {:>14} {:>14} {:>14}", "Month", "p10", "p50", "p90");
    let step = (projection.dates.len() / config.horizon_years.min(12)).max(1);
    let mut i = 0;
    while i < projection.dates.len() {
        println!(
            "{:<9} {:>14.2} {:>14.2} {:>14.2}",
            projection.dates[i], projection.p10[i], projection.p50[i], projection.p90[i]
        );
        i += step;
    }
    let last = projection.dates.len() - 1;
    if (last % step) != 0 {
        println!(
            "{:<9} {:>14.2} {:>14.2} {:>14.2}",
            projection.dates[last], projection.p10[last], projection.p50[last], projection.p90[last]
        );
    }
    println!();
}
