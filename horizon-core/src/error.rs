//! Engine error taxonomy.
//!
//! Every variant is terminal: the whole projection aborts, because the
//! joint probability structure requires all assets to be present and
//! calibrated together. The only internal retry anywhere in the engine
//! is the single covariance regularization attempt in [`crate::stats`].

use crate::data::HistoryError;
use thiserror::Error;

/// Terminal failure modes of a projection run.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// No holdings with positive value and no contribution plans.
    #[error("portfolio is empty: no holdings and no contribution plans")]
    EmptyPortfolio,

    /// A required ticker returned zero historical data points.
    #[error("no price history available for '{ticker}'")]
    MissingHistory { ticker: String },

    /// The aligned common window is too short to calibrate on.
    #[error("aligned history covers only {months} months (need at least 12)")]
    InsufficientHistory { months: usize },

    /// Covariance stayed non-positive-definite after regularization.
    #[error("covariance matrix is not positive-definite: collinear or insufficient historical data")]
    SingularCovariance,

    /// Non-positive horizon or simulation count.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The history provider itself failed (network, parse, ...).
    #[error(transparent)]
    History(#[from] HistoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_history_names_the_ticker() {
        let err = ProjectionError::MissingHistory {
            ticker: "OBSCURE".into(),
        };
        assert!(err.to_string().contains("OBSCURE"));
    }

    #[test]
    fn insufficient_history_reports_month_count() {
        let err = ProjectionError::InsufficientHistory { months: 7 };
        assert!(err.to_string().contains('7'));
    }
}
