//! Reduction of raw path data into the reported projection.
//!
//! Percentiles are taken across the simulation axis at every monthly
//! step; the time axis is then downsampled to roughly 50 points purely
//! for presentation (the full-resolution bands stay on the result).

use crate::data::Month;
use crate::domain::{FinalValues, PercentileBands, Projection, ProjectionConfig};
use std::collections::BTreeMap;

use super::resolver::ResolvedPortfolio;
use super::simulator::PathEnsemble;

/// Target number of reported time points.
const REPORT_POINTS: usize = 50;

/// Assets whose final mean value sits below this are omitted from the
/// trend report (plan tickers that were never actually funded).
const DEAD_TREND_THRESHOLD: f64 = 1e-9;

/// Reduce the simulated ensemble into the caller-facing projection.
///
/// `start` is the calendar month of step 0; `history_months` is the
/// depth of the aligned calibration window.
pub fn aggregate(
    ensemble: &PathEnsemble,
    resolved: &ResolvedPortfolio,
    config: &ProjectionConfig,
    start: Month,
    history_months: usize,
) -> Projection {
    let total_steps = config.total_steps();

    // Full-resolution percentile bands across the simulation axis.
    let mut full = PercentileBands::default();
    let mut scratch = Vec::new();
    for row in &ensemble.totals {
        scratch.clone_from(row);
        scratch.sort_by(f64::total_cmp);
        full.p10.push(percentile_sorted(&scratch, 10.0));
        full.p50.push(percentile_sorted(&scratch, 50.0));
        full.p90.push(percentile_sorted(&scratch, 90.0));
    }

    let indices = report_indices(total_steps);
    let dates: Vec<String> = indices.iter().map(|&i| start.plus(i).label()).collect();
    let sample = |series: &[f64]| -> Vec<f64> { indices.iter().map(|&i| series[i]).collect() };

    let final_values = FinalValues {
        p10: full.p10[total_steps],
        p50: full.p50[total_steps],
        p90: full.p90[total_steps],
    };

    let mut asset_trends = BTreeMap::new();
    for (a, ticker) in resolved.tickers.iter().enumerate() {
        if ensemble.asset_means[total_steps][a].abs() < DEAD_TREND_THRESHOLD {
            continue;
        }
        let trend: Vec<f64> = indices
            .iter()
            .map(|&i| ensemble.asset_means[i][a])
            .collect();
        asset_trends.insert(ticker.clone(), trend);
    }

    let contributed: f64 = resolved
        .plans
        .iter()
        .map(|plan| plan.amount * plan.events_within(total_steps) as f64)
        .sum();
    let total_invested = resolved.initial_total() + contributed;

    let roi_percent = if total_invested == 0.0 {
        0.0
    } else {
        (final_values.p50 - total_invested) / total_invested * 100.0
    };

    Projection {
        dates,
        p10: sample(&full.p10),
        p50: sample(&full.p50),
        p90: sample(&full.p90),
        asset_trends,
        final_values,
        total_invested,
        roi_percent,
        history_years: (history_months as f64 / 12.0 * 10.0).round() / 10.0,
        full_resolution: full,
    }
}

/// Indices sampled from the monthly series: every `step`-th point plus
/// the final index.
fn report_indices(total_steps: usize) -> Vec<usize> {
    let step = (total_steps / REPORT_POINTS).max(1);
    let mut indices: Vec<usize> = (0..=total_steps).step_by(step).collect();
    if *indices.last().unwrap() != total_steps {
        indices.push(total_steps);
    }
    indices
}

/// Percentile of a sorted slice using linear interpolation.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;
    sorted[lo] * (1.0 - frac) + sorted[hi] * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContributionPlan, Frequency};

    fn flat_ensemble(total_steps: usize, n_sims: usize, n_assets: usize) -> PathEnsemble {
        PathEnsemble {
            totals: vec![vec![100.0; n_sims]; total_steps + 1],
            asset_means: vec![vec![100.0 / n_assets as f64; n_assets]; total_steps + 1],
        }
    }

    fn resolved_single(plans: Vec<ContributionPlan>) -> ResolvedPortfolio {
        ResolvedPortfolio {
            tickers: vec!["A".to_string()],
            initial_values: vec![100.0],
            plans,
        }
    }

    #[test]
    fn percentile_midpoint_interpolates() {
        let sorted = [0.0, 10.0];
        assert_eq!(percentile_sorted(&sorted, 50.0), 5.0);
        assert_eq!(percentile_sorted(&sorted, 10.0), 1.0);
        assert_eq!(percentile_sorted(&sorted, 90.0), 9.0);
    }

    #[test]
    fn percentile_handles_tiny_slices() {
        assert_eq!(percentile_sorted(&[], 50.0), 0.0);
        assert_eq!(percentile_sorted(&[7.0], 10.0), 7.0);
    }

    #[test]
    fn short_horizons_keep_every_month() {
        // 24 steps < 50 points: step = 1, all indices reported.
        let indices = report_indices(24);
        assert_eq!(indices.len(), 25);
        assert_eq!(indices[0], 0);
        assert_eq!(*indices.last().unwrap(), 24);
    }

    #[test]
    fn long_horizons_downsample_but_keep_the_end() {
        let indices = report_indices(360); // 30 years: step = 7
        assert_eq!(indices.len(), 53);
        assert_eq!(*indices.last().unwrap(), 360);
        assert_eq!(indices[1] - indices[0], 7);
    }

    #[test]
    fn series_lengths_agree_with_dates() {
        let config = ProjectionConfig::new(10, 4);
        let ensemble = flat_ensemble(config.total_steps(), 4, 1);
        let projection = aggregate(
            &ensemble,
            &resolved_single(vec![]),
            &config,
            Month::new(2026, 8),
            48,
        );
        assert_eq!(projection.dates.len(), projection.p10.len());
        assert_eq!(projection.dates.len(), projection.p50.len());
        assert_eq!(projection.dates.len(), projection.p90.len());
        assert_eq!(projection.dates[0], "2026-08");
        assert_eq!(projection.dates.last().unwrap(), "2036-08");
    }

    #[test]
    fn invested_capital_counts_contribution_events() {
        let config = ProjectionConfig::new(10, 4);
        let plan = ContributionPlan::new("A", 100.0, Frequency::Monthly);
        let ensemble = flat_ensemble(config.total_steps(), 4, 1);
        let projection = aggregate(
            &ensemble,
            &resolved_single(vec![plan]),
            &config,
            Month::new(2026, 1),
            120,
        );
        // 100 initial + 100 × 120 events
        assert_eq!(projection.total_invested, 12_100.0);
    }

    #[test]
    fn roi_is_zero_when_nothing_invested() {
        let config = ProjectionConfig::new(1, 2);
        let resolved = ResolvedPortfolio {
            tickers: vec!["A".to_string()],
            initial_values: vec![0.0],
            plans: vec![],
        };
        let ensemble = PathEnsemble {
            totals: vec![vec![0.0; 2]; 13],
            asset_means: vec![vec![0.0]; 13],
        };
        let projection = aggregate(&ensemble, &resolved, &config, Month::new(2026, 1), 24);
        assert_eq!(projection.total_invested, 0.0);
        assert_eq!(projection.roi_percent, 0.0);
    }

    #[test]
    fn dead_assets_are_dropped_from_trends() {
        let config = ProjectionConfig::new(1, 2);
        let resolved = ResolvedPortfolio {
            tickers: vec!["ALIVE".to_string(), "DEAD".to_string()],
            initial_values: vec![100.0, 0.0],
            plans: vec![],
        };
        let mut ensemble = flat_ensemble(config.total_steps(), 2, 2);
        for row in &mut ensemble.asset_means {
            row[1] = 0.0;
        }
        let projection = aggregate(&ensemble, &resolved, &config, Month::new(2026, 1), 24);
        assert!(projection.asset_trends.contains_key("ALIVE"));
        assert!(!projection.asset_trends.contains_key("DEAD"));
    }

    #[test]
    fn history_years_rounds_to_one_decimal() {
        let config = ProjectionConfig::new(1, 2);
        let ensemble = flat_ensemble(config.total_steps(), 2, 1);
        let projection = aggregate(
            &ensemble,
            &resolved_single(vec![]),
            &config,
            Month::new(2026, 1),
            17,
        );
        assert_eq!(projection.history_years, 1.4);
    }

    #[test]
    fn full_resolution_bands_cover_every_step() {
        let config = ProjectionConfig::new(10, 4);
        let ensemble = flat_ensemble(config.total_steps(), 4, 1);
        let projection = aggregate(
            &ensemble,
            &resolved_single(vec![]),
            &config,
            Month::new(2026, 1),
            60,
        );
        assert_eq!(projection.full_resolution.p50.len(), 121);
        assert!(projection.dates.len() < 121);
    }
}
