//! Domain types for portfolio projection

pub mod config;
pub mod contribution;
pub mod holding;
pub mod result;

pub use config::ProjectionConfig;
pub use contribution::{ContributionPlan, Frequency};
pub use holding::Holding;
pub use result::{FinalValues, PercentileBands, Projection};

/// Ticker type alias
pub type Ticker = String;
