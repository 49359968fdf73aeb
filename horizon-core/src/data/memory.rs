//! In-memory history provider.
//!
//! Used by the CLI (after CSV ingestion) and throughout the test suite.
//! Series are sorted on insert so callers can load CSV rows in any order.

use super::provider::{HistoryError, HistoryProvider, PricePoint};
use chrono::NaiveDate;
use std::collections::HashMap;

/// A [`HistoryProvider`] backed by a ticker → series map.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    series: HashMap<String, Vec<PricePoint>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the series for a ticker, sorting it ascending.
    pub fn insert(&mut self, ticker: impl Into<String>, mut points: Vec<PricePoint>) {
        points.sort_by_key(|p| p.date);
        self.series.insert(ticker.into(), points);
    }

    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(|k| k.as_str())
    }
}

impl HistoryProvider for MemoryProvider {
    fn name(&self) -> &str {
        "memory"
    }

    fn daily_closes(
        &self,
        ticker: &str,
        since: NaiveDate,
    ) -> Result<Vec<PricePoint>, HistoryError> {
        let points = self
            .series
            .get(ticker)
            .map(|s| s.iter().filter(|p| p.date >= since).copied().collect())
            .unwrap_or_default();
        Ok(points)
    }
}
