//! Projection result types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Percentile bands at full monthly resolution, one entry per step
/// (`total_steps + 1` values including the starting month).
///
/// The reported `Projection` series are downsampled for presentation;
/// this keeps the raw-resolution arrays available to callers that want
/// them (charting at native resolution, custom reductions).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PercentileBands {
    pub p10: Vec<f64>,
    pub p50: Vec<f64>,
    pub p90: Vec<f64>,
}

/// Percentile values at the final simulated month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FinalValues {
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

/// Outcome of a projection run.
///
/// `dates`, `p10`, `p50` and `p90` have equal length (~50 points,
/// downsampled from the full monthly series); `asset_trends` holds the
/// mean per-asset value path sampled at the same indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    /// "YYYY-MM" labels, starting from the current calendar month.
    pub dates: Vec<String>,
    pub p10: Vec<f64>,
    pub p50: Vec<f64>,
    pub p90: Vec<f64>,
    /// Mean value path per ticker. Assets whose final mean value is
    /// numerically zero are omitted.
    pub asset_trends: BTreeMap<String, Vec<f64>>,
    pub final_values: FinalValues,
    /// Initial held value plus all contribution events within the horizon.
    pub total_invested: f64,
    /// `(final p50 − invested) / invested × 100`; zero when nothing invested.
    pub roi_percent: f64,
    /// Depth of the aligned calibration window, in years (one decimal).
    pub history_years: f64,
    /// Full-resolution bands (not part of the serialized report).
    #[serde(skip)]
    pub full_resolution: PercentileBands,
}
