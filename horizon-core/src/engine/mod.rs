//! Projection pipeline — resolution, calibration, simulation, reduction.
//!
//! One strictly sequential pass, no feedback loops:
//!
//! 1. Resolve holdings + plans into the ticker universe
//! 2. Load daily history per ticker through the provider seam
//! 3. Resample to monthly and align onto the common window
//! 4. Estimate mean log-returns and sample covariance
//! 5. Factorize the covariance (one regularization retry)
//! 6. Step all paths to the horizon
//! 7. Reduce to percentile bands and the reported projection

pub mod aggregate;
pub mod resolver;
pub mod simulator;

pub use aggregate::aggregate;
pub use resolver::{resolve, ResolvedPortfolio};
pub use simulator::{simulate_paths, PathEnsemble};

use crate::data::{align_monthly, monthly_closes, HistoryProvider, Month};
use crate::domain::{ContributionPlan, Holding, Projection, ProjectionConfig};
use crate::error::ProjectionError;
use crate::stats;
use std::collections::BTreeMap;

/// How far back history is requested from the provider.
const HISTORY_CAP_YEARS: i64 = 25;

/// Minimum aligned window needed to calibrate the return model.
const MIN_CALIBRATION_MONTHS: usize = 12;

/// Run one projection: holdings and plans in, percentile bands out.
///
/// Side-effect-free apart from reads through `provider`; no state
/// survives the call, so concurrent invocations are independent. Every
/// error is terminal — the engine never returns a partial result,
/// because the joint covariance requires all assets to be calibrated
/// together.
pub fn run_projection(
    provider: &dyn HistoryProvider,
    holdings: &[Holding],
    plans: &[ContributionPlan],
    config: &ProjectionConfig,
) -> Result<Projection, ProjectionError> {
    config.validate()?;
    let resolved = resolver::resolve(holdings, plans)?;

    let today = chrono::Local::now().date_naive();
    let since = today - chrono::Duration::days(HISTORY_CAP_YEARS * 365);

    // Step 2+3: load and resample every ticker; zero data points for any
    // ticker aborts the run with that ticker named.
    let mut series = BTreeMap::new();
    for ticker in &resolved.tickers {
        let daily = provider.daily_closes(ticker, since)?;
        if daily.is_empty() {
            return Err(ProjectionError::MissingHistory {
                ticker: ticker.clone(),
            });
        }
        series.insert(ticker.clone(), monthly_closes(&daily));
    }

    let panel = align_monthly(&series);
    debug_assert_eq!(panel.tickers, resolved.tickers);
    if panel.n_months() < MIN_CALIBRATION_MONTHS {
        return Err(ProjectionError::InsufficientHistory {
            months: panel.n_months(),
        });
    }

    // Steps 4–7.
    let model = stats::estimate(&stats::log_returns(&panel));
    let factor = stats::factorize(&model.cov)?;
    let ensemble = simulator::simulate_paths(&resolved, &model, &factor, config);

    Ok(aggregate::aggregate(
        &ensemble,
        &resolved,
        config,
        Month::from_date(today),
        panel.n_months(),
    ))
}
