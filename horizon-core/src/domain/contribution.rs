//! Recurring contribution plans (PACs).

use serde::{Deserialize, Serialize};

/// Cadence of a recurring contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Monthly,
    Quarterly,
    Annual,
}

impl Frequency {
    /// Length of one contribution period in simulation steps (months).
    pub fn period_months(self) -> usize {
        match self {
            Frequency::Monthly => 1,
            Frequency::Quarterly => 3,
            Frequency::Annual => 12,
        }
    }
}

/// A fixed-amount recurring investment into a specific ticker.
///
/// Several plans may target the same ticker, and a plan ticker does not
/// have to be an existing holding (its position starts at zero).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionPlan {
    pub ticker: String,
    pub amount: f64,
    pub frequency: Frequency,
}

impl ContributionPlan {
    pub fn new(ticker: impl Into<String>, amount: f64, frequency: Frequency) -> Self {
        Self {
            ticker: ticker.into(),
            amount,
            frequency,
        }
    }

    /// Number of contribution events that occur within `total_steps` months.
    ///
    /// Contributions land on period boundaries (step `t` with
    /// `t % period == 0`, `t` in `1..=total_steps`).
    pub fn events_within(&self, total_steps: usize) -> usize {
        total_steps / self.frequency.period_months()
    }
}
