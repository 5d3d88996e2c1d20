//! Retirement Planner - savings projection engine for retirement goals
//!
//! This library provides:
//! - Income normalization across monthly, quarterly and annual sources
//! - Linear savings projection and the monthly saving needed to reach a goal
//! - Retirement age sweeps
//! - Summary table, chart series and currency formatting for presentation

pub mod error;
pub mod income;
pub mod plan;
pub mod projection;
pub mod report;
pub mod service;

// Re-export commonly used types
pub use error::{PlanError, Result};
pub use income::{Frequency, IncomeEntry, IncomeSource};
pub use plan::{PlanInputs, RetirementPlan};
pub use projection::{compute_projection, normalize_income, project, ProjectionResult};
pub use report::{CurrencyFormatter, Language, Report, ReportConfig};
