//! Correlated lockstep path simulation.
//!
//! State machine per run: INITIALIZED → STEPPING (× total_steps) → COMPLETE.
//! Each monthly step, for every path:
//! 1. Draw one independent standard-normal shock per asset
//! 2. Correlate: `R = mean + L·z` (reproduces the estimated covariance)
//! 3. Grow: multiply each asset value by `exp(R)` (log-normal month)
//! 4. Contribute: plans whose period divides the step add their amount
//!
//! "Grow, then contribute" is the modeling convention: a period's cash
//! injection does not participate in that period's market move. The
//! ordering materially affects long-horizon outcomes, so it must not
//! change silently.
//!
//! All paths advance in lockstep over one flat `n_simulations × n_assets`
//! buffer; aggregate statistics do not depend on path order.

use crate::domain::ProjectionConfig;
use crate::stats::{CholeskyFactor, ReturnModel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use super::resolver::ResolvedPortfolio;

/// Raw simulated path data.
#[derive(Debug)]
pub struct PathEnsemble {
    /// `totals[t][s]` — portfolio total of path `s` after step `t`.
    /// `total_steps + 1` rows; row 0 is the initial state.
    pub totals: Vec<Vec<f64>>,
    /// `asset_means[t][a]` — mean value of asset `a` across paths at
    /// step `t`.
    pub asset_means: Vec<Vec<f64>>,
}

/// Step every simulated path from the initial holdings to the horizon.
///
/// The config must already be validated; the factor's dimension must
/// match the resolved universe.
pub fn simulate_paths(
    resolved: &ResolvedPortfolio,
    model: &ReturnModel,
    factor: &CholeskyFactor,
    config: &ProjectionConfig,
) -> PathEnsemble {
    let n_assets = resolved.n_assets();
    let n_sims = config.n_simulations;
    let total_steps = config.total_steps();
    debug_assert_eq!(factor.dim(), n_assets);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // (asset index, amount, period in months) per active plan.
    let contributions: Vec<(usize, f64, usize)> = resolved
        .plans
        .iter()
        .filter_map(|plan| {
            resolved
                .asset_index(&plan.ticker)
                .map(|a| (a, plan.amount, plan.frequency.period_months()))
        })
        .collect();

    // INITIALIZED: every path starts at the resolved initial values.
    let mut values = Vec::with_capacity(n_sims * n_assets);
    for _ in 0..n_sims {
        values.extend_from_slice(&resolved.initial_values);
    }

    let mut totals = Vec::with_capacity(total_steps + 1);
    let mut asset_means = Vec::with_capacity(total_steps + 1);
    record(&values, n_sims, n_assets, &mut totals, &mut asset_means);

    // STEPPING
    let mut z = vec![0.0; n_assets];
    let mut r = vec![0.0; n_assets];
    for t in 1..=total_steps {
        for path in values.chunks_exact_mut(n_assets) {
            for shock in z.iter_mut() {
                *shock = rng.sample(StandardNormal);
            }
            factor.correlate(&model.mean, &z, &mut r);
            for (value, growth) in path.iter_mut().zip(r.iter()) {
                *value *= growth.exp();
            }
        }

        // Contributions land after the period's market growth.
        for &(asset, amount, period) in &contributions {
            if t % period == 0 {
                for path in values.chunks_exact_mut(n_assets) {
                    path[asset] += amount;
                }
            }
        }

        record(&values, n_sims, n_assets, &mut totals, &mut asset_means);
    }

    // COMPLETE
    PathEnsemble {
        totals,
        asset_means,
    }
}

fn record(
    values: &[f64],
    n_sims: usize,
    n_assets: usize,
    totals: &mut Vec<Vec<f64>>,
    asset_means: &mut Vec<Vec<f64>>,
) {
    let mut row_totals = Vec::with_capacity(n_sims);
    let mut row_means = vec![0.0; n_assets];
    for path in values.chunks_exact(n_assets) {
        row_totals.push(path.iter().sum());
        for (mean, &value) in row_means.iter_mut().zip(path) {
            *mean += value;
        }
    }
    for mean in &mut row_means {
        *mean /= n_sims as f64;
    }
    totals.push(row_totals);
    asset_means.push(row_means);
}
