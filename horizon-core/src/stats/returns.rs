//! Log-return estimation from an aligned monthly panel.
//!
//! Calibration is fully deterministic: identical input produces
//! bit-identical mean vectors and covariance matrices. Randomness enters
//! the engine only at path generation.

use crate::data::MonthlyPanel;

/// Estimated monthly return model: per-asset mean log-return and the
/// sample covariance across assets.
#[derive(Debug, Clone)]
pub struct ReturnModel {
    pub mean: Vec<f64>,
    /// `cov[i][j]` — sample covariance of assets i and j (n−1 denominator).
    pub cov: Vec<Vec<f64>>,
}

/// Monthly log-returns, `ln(p_t / p_{t-1})`, per asset.
///
/// Output has one row per month transition (`n_months − 1`) and one
/// column per asset.
pub fn log_returns(panel: &MonthlyPanel) -> Vec<Vec<f64>> {
    let n_assets = panel.n_assets();
    let mut rows = Vec::with_capacity(panel.n_months().saturating_sub(1));
    for t in 1..panel.n_months() {
        let mut row = Vec::with_capacity(n_assets);
        for a in 0..n_assets {
            row.push((panel.closes[t][a] / panel.closes[t - 1][a]).ln());
        }
        rows.push(row);
    }
    rows
}

/// Column mean and sample covariance of a return matrix.
pub fn estimate(returns: &[Vec<f64>]) -> ReturnModel {
    let m = returns.len();
    let n = returns.first().map_or(0, Vec::len);

    let mut mean = vec![0.0; n];
    for row in returns {
        for (a, &r) in row.iter().enumerate() {
            mean[a] += r;
        }
    }
    for mu in &mut mean {
        *mu /= m as f64;
    }

    // Sample covariance; with a guaranteed ≥12-month window there are at
    // least 11 return rows, so the n−1 denominator is always positive.
    let denom = m.saturating_sub(1).max(1) as f64;
    let mut cov = vec![vec![0.0; n]; n];
    for row in returns {
        for i in 0..n {
            let di = row[i] - mean[i];
            for j in i..n {
                cov[i][j] += di * (row[j] - mean[j]);
            }
        }
    }
    for i in 0..n {
        for j in i..n {
            cov[i][j] /= denom;
            cov[j][i] = cov[i][j];
        }
    }

    ReturnModel { mean, cov }
}
