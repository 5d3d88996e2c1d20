//! Projection engine for retirement savings
//!
//! The projection is linear: a constant monthly surplus (income minus
//! expenses) accumulates with no interest or investment return.

mod engine;
mod result;
mod sweep;

pub use engine::{compute_projection, normalize_income, project, required_monthly_savings};
pub use result::{ProjectionResult, SeriesPoint};
pub use sweep::sweep_retirement_ages;

/// Months in a projection year
pub const MONTHS_PER_YEAR: u32 = 12;
