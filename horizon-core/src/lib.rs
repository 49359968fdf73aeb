//! Horizon Core — multi-asset Monte Carlo portfolio projection engine.
//!
//! Given current holdings and planned recurring contributions, the engine
//! estimates a distribution of future portfolio values by simulating
//! thousands of correlated monthly price paths calibrated on historical
//! returns, and reports percentile bands (p10/p50/p90) over the horizon:
//! - Asset resolution (holdings + contribution plans → one ticker universe)
//! - Monthly resampling and cross-ticker alignment of daily price history
//! - Log-return mean vector and sample covariance estimation
//! - Cholesky factorization with a single regularization retry
//! - Lockstep correlated path simulation (grow, then contribute)
//! - Percentile aggregation, invested-capital and ROI reporting
//!
//! The engine performs no I/O of its own: price history arrives through
//! the [`data::HistoryProvider`] seam, and everything downstream is a
//! single synchronous, side-effect-free computation.

pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod stats;

pub use data::{HistoryProvider, MemoryProvider, PricePoint};
pub use domain::{ContributionPlan, FinalValues, Frequency, Holding, Projection, ProjectionConfig};
pub use engine::run_projection;
pub use error::ProjectionError;
