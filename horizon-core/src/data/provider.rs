//! History provider trait and structured error types.
//!
//! The HistoryProvider trait abstracts over price-history sources (the
//! surrounding application's market-data service, CSV import, in-memory
//! fixtures) so the engine never performs network I/O, caching, or
//! persistence itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single daily closing-price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Failure modes of a history provider.
///
/// A ticker that exists but has no data is NOT an error at this seam —
/// providers return an empty series and the engine turns that into
/// `MissingHistory` with the offending ticker attached.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history fetch failed for '{ticker}': {message}")]
    Fetch { ticker: String, message: String },

    #[error("malformed history for '{ticker}': {message}")]
    Malformed { ticker: String, message: String },
}

/// Trait for price-history sources.
///
/// Implementations return daily closes in ascending date order. The
/// engine requests a bounded window (25 years) and never mutates or
/// caches what it receives.
pub trait HistoryProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Daily closes for `ticker` from `since` onward, ascending.
    /// May be empty.
    fn daily_closes(&self, ticker: &str, since: NaiveDate)
        -> Result<Vec<PricePoint>, HistoryError>;
}
