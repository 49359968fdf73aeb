//! Calibration statistics: log-returns, covariance, Cholesky factorization.

pub mod cholesky;
pub mod returns;

pub use cholesky::{factorize, CholeskyFactor};
pub use returns::{estimate, log_returns, ReturnModel};
