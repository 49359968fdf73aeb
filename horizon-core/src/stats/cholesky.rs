//! Cholesky factorization with a single regularization retry.
//!
//! `L · Lᵀ = Σ` turns independent standard-normal draws into draws with
//! the estimated covariance structure. When Σ is not positive-definite
//! (constant prices, near-duplicate tickers, too-short windows), `ε·I`
//! is added to the diagonal and factorization is retried exactly once.
//! The retry is a pragmatic numerical patch, not a statistical
//! correction; still-singular input fails loudly.

use crate::error::ProjectionError;

/// Diagonal bump applied on the single regularization retry.
const REGULARIZATION_EPSILON: f64 = 1e-6;

/// Lower-triangular Cholesky factor of the covariance matrix.
#[derive(Debug, Clone)]
pub struct CholeskyFactor {
    /// `lower[i][j]` for `j ≤ i`; entries above the diagonal are zero.
    pub lower: Vec<Vec<f64>>,
    /// True when the `ε·I` retry was needed to factorize.
    pub regularized: bool,
}

impl CholeskyFactor {
    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    /// `mean + L · z` — correlate one vector of independent draws.
    pub fn correlate(&self, mean: &[f64], z: &[f64], out: &mut [f64]) {
        for i in 0..self.lower.len() {
            let mut acc = mean[i];
            for j in 0..=i {
                acc += self.lower[i][j] * z[j];
            }
            out[i] = acc;
        }
    }
}

/// Factorize a covariance matrix, retrying once with a regularized
/// diagonal before giving up.
pub fn factorize(cov: &[Vec<f64>]) -> Result<CholeskyFactor, ProjectionError> {
    if let Some(lower) = cholesky_lower(cov) {
        return Ok(CholeskyFactor {
            lower,
            regularized: false,
        });
    }

    let mut bumped = cov.to_vec();
    for (i, row) in bumped.iter_mut().enumerate() {
        row[i] += REGULARIZATION_EPSILON;
    }
    match cholesky_lower(&bumped) {
        Some(lower) => Ok(CholeskyFactor {
            lower,
            regularized: true,
        }),
        None => Err(ProjectionError::SingularCovariance),
    }
}

/// Standard Cholesky–Banachiewicz; `None` when the matrix is not
/// positive-definite.
fn cholesky_lower(m: &[Vec<f64>]) -> Option<Vec<Vec<f64>>> {
    let n = m.len();
    let mut lower = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in 0..=i {
            let mut sum = m[i][j];
            for k in 0..j {
                sum -= lower[i][k] * lower[j][k];
            }
            if i == j {
                if sum <= 0.0 {
                    return None;
                }
                lower[i][j] = sum.sqrt();
            } else {
                lower[i][j] = sum / lower[j][j];
            }
        }
    }
    Some(lower)
}
