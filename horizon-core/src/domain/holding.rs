//! A position currently held in the portfolio.

use serde::{Deserialize, Serialize};

/// A held position, as supplied by the caller at projection time.
///
/// The engine does not persist holdings; each run receives a fresh list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub ticker: String,
    pub quantity: f64,
    /// Last known unit price.
    pub price: f64,
    /// Explicit value override. When set, it replaces `quantity × price`
    /// (used for positions whose valuation is maintained elsewhere).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulated_value: Option<f64>,
}

impl Holding {
    pub fn new(ticker: impl Into<String>, quantity: f64, price: f64) -> Self {
        Self {
            ticker: ticker.into(),
            quantity,
            price,
            simulated_value: None,
        }
    }

    pub fn with_value(ticker: impl Into<String>, value: f64) -> Self {
        Self {
            ticker: ticker.into(),
            quantity: 0.0,
            price: 0.0,
            simulated_value: Some(value),
        }
    }

    /// Current value of the position: the override if present, else
    /// `quantity × price`.
    pub fn market_value(&self) -> f64 {
        self.simulated_value
            .unwrap_or(self.quantity * self.price)
    }
}
