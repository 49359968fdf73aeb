//! Projection run configuration.

use crate::error::ProjectionError;
use serde::{Deserialize, Serialize};

/// Configuration for a single projection run.
///
/// `horizon_years` and `n_simulations` are fixed for the whole run;
/// there is no mid-run reconfiguration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Projection horizon in whole years (≥ 1).
    pub horizon_years: usize,
    /// Number of simulated paths (≥ 1).
    pub n_simulations: usize,
    /// Optional RNG seed. `None` seeds from entropy; `Some` makes the
    /// simulated paths bit-reproducible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ProjectionConfig {
    pub fn new(horizon_years: usize, n_simulations: usize) -> Self {
        Self {
            horizon_years,
            n_simulations,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of monthly steps in the horizon.
    pub fn total_steps(&self) -> usize {
        self.horizon_years * 12
    }

    /// Reject degenerate configurations before any computation begins.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.horizon_years == 0 {
            return Err(ProjectionError::InvalidConfig(
                "horizon_years must be at least 1".into(),
            ));
        }
        if self.n_simulations == 0 {
            return Err(ProjectionError::InvalidConfig(
                "n_simulations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
