//! Monthly resampling and cross-ticker alignment.
//!
//! Daily series become monthly series by taking the last available close
//! of each calendar month, forward-filling months with no observations.
//! Multiple tickers are then aligned onto the intersection of their month
//! axes: the joint covariance needs a complete cross-section, so any
//! month where any ticker lacks data is dropped for everyone.

use super::provider::PricePoint;
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

/// A calendar month, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month `n` steps after this one.
    pub fn plus(self, n: usize) -> Self {
        let zero_based = self.year as i64 * 12 + (self.month as i64 - 1) + n as i64;
        Self {
            year: (zero_based.div_euclid(12)) as i32,
            month: (zero_based.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn next(self) -> Self {
        self.plus(1)
    }

    /// "YYYY-MM" label.
    pub fn label(self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Dense monthly close matrix on a common month axis.
///
/// `closes[i][j]` is the close of `tickers[j]` in `months[i]`.
#[derive(Debug, Clone)]
pub struct MonthlyPanel {
    pub months: Vec<Month>,
    pub tickers: Vec<String>,
    pub closes: Vec<Vec<f64>>,
}

impl MonthlyPanel {
    pub fn n_months(&self) -> usize {
        self.months.len()
    }

    pub fn n_assets(&self) -> usize {
        self.tickers.len()
    }
}

/// Resample a daily series to monthly granularity.
///
/// Takes the last close of each observed calendar month, then forward-fills
/// every gap month between the first and last observation. The result is a
/// contiguous month range.
pub fn monthly_closes(points: &[PricePoint]) -> Vec<(Month, f64)> {
    let mut by_month: BTreeMap<Month, f64> = BTreeMap::new();
    for p in points {
        // Ascending input: later points overwrite earlier ones in-month.
        by_month.insert(Month::from_date(p.date), p.close);
    }

    let (first, last) = match (by_month.keys().next(), by_month.keys().next_back()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return Vec::new(),
    };

    let mut out = Vec::new();
    let mut current = first;
    let mut carried = f64::NAN;
    while current <= last {
        if let Some(&close) = by_month.get(&current) {
            carried = close;
        }
        out.push((current, carried));
        current = current.next();
    }
    out
}

/// Align monthly series onto the intersection of their month axes.
///
/// Ticker order in the panel follows the map's (sorted) key order, so the
/// output is deterministic for a given input.
pub fn align_monthly(series: &BTreeMap<String, Vec<(Month, f64)>>) -> MonthlyPanel {
    let tickers: Vec<String> = series.keys().cloned().collect();

    let mut common: Option<BTreeSet<Month>> = None;
    for points in series.values() {
        let months: BTreeSet<Month> = points.iter().map(|&(m, _)| m).collect();
        common = Some(match common {
            Some(acc) => acc.intersection(&months).copied().collect(),
            None => months,
        });
    }
    let months: Vec<Month> = common.unwrap_or_default().into_iter().collect();

    let mut closes = vec![vec![0.0; tickers.len()]; months.len()];
    for (j, ticker) in tickers.iter().enumerate() {
        let lookup: BTreeMap<Month, f64> = series[ticker].iter().copied().collect();
        for (i, month) in months.iter().enumerate() {
            closes[i][j] = lookup[month];
        }
    }

    MonthlyPanel {
        months,
        tickers,
        closes,
    }
}
