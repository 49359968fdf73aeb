//! Price history: provider seam, in-memory provider, monthly resampling.

pub mod memory;
pub mod provider;
pub mod resample;

pub use memory::MemoryProvider;
pub use provider::{HistoryError, HistoryProvider, PricePoint};
pub use resample::{align_monthly, monthly_closes, Month, MonthlyPanel};
