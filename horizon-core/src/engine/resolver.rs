//! Asset resolution: holdings + contribution plans → one ticker universe.

use crate::domain::{ContributionPlan, Holding};
use crate::error::ProjectionError;
use std::collections::BTreeMap;

/// The resolved simulation universe.
///
/// `tickers` is sorted and unique; `initial_values` is parallel to it.
/// `plans` keeps only positive-amount plans — zero or negative amounts
/// are dropped here and never reach the simulator.
#[derive(Debug, Clone)]
pub struct ResolvedPortfolio {
    pub tickers: Vec<String>,
    pub initial_values: Vec<f64>,
    pub plans: Vec<ContributionPlan>,
}

impl ResolvedPortfolio {
    pub fn n_assets(&self) -> usize {
        self.tickers.len()
    }

    /// Sum of initially held value across the universe.
    pub fn initial_total(&self) -> f64 {
        self.initial_values.iter().sum()
    }

    pub fn asset_index(&self, ticker: &str) -> Option<usize> {
        self.tickers.iter().position(|t| t == ticker)
    }
}

/// Reconcile holdings and plans into the simulation universe.
///
/// Holdings with positive market value seed the initial values (repeated
/// tickers accumulate); every plan ticker joins the universe, starting at
/// zero when not held. An empty universe is a terminal error.
pub fn resolve(
    holdings: &[Holding],
    plans: &[ContributionPlan],
) -> Result<ResolvedPortfolio, ProjectionError> {
    let mut values: BTreeMap<String, f64> = BTreeMap::new();

    for holding in holdings {
        let value = holding.market_value();
        if value > 0.0 {
            *values.entry(holding.ticker.clone()).or_insert(0.0) += value;
        }
    }

    let active_plans: Vec<ContributionPlan> = plans
        .iter()
        .filter(|p| p.amount > 0.0)
        .cloned()
        .collect();
    for plan in &active_plans {
        values.entry(plan.ticker.clone()).or_insert(0.0);
    }

    if values.is_empty() {
        return Err(ProjectionError::EmptyPortfolio);
    }

    let (tickers, initial_values) = values.into_iter().unzip();
    Ok(ResolvedPortfolio {
        tickers,
        initial_values,
        plans: active_plans,
    })
}
