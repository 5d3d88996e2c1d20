//! Projection output structures

use serde::{Deserialize, Serialize};

/// Everything derived from one set of plan inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Current age the projection starts from
    pub current_age: u32,
    /// Target retirement age
    pub retirement_age: u32,

    pub total_monthly_income: f64,
    pub monthly_expenses: f64,
    /// Income minus expenses; negative means a monthly shortfall
    pub net_monthly: f64,

    pub years_left: u32,
    pub months_left: u32,

    /// Savings reached by retirement at the current net monthly rate
    pub expected_savings: f64,
    pub retirement_goal: f64,
    /// Additional monthly saving, beyond `net_monthly`, needed to hit the goal
    pub required_monthly_savings: f64,

    /// Cumulative savings at the end of months 1..=months_left
    pub cumulative_series: Vec<f64>,
}

/// One point on the cumulative savings chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub month: u32,
    pub cumulative_savings: f64,
}

impl ProjectionResult {
    /// Cumulative series paired with 1-based month indices
    pub fn series_points(&self) -> impl Iterator<Item = SeriesPoint> + '_ {
        self.cumulative_series
            .iter()
            .enumerate()
            .map(|(idx, &cumulative_savings)| SeriesPoint {
                month: idx as u32 + 1,
                cumulative_savings,
            })
    }

    /// Gap between the goal and the linear projection (negative when ahead)
    pub fn shortfall(&self) -> f64 {
        self.retirement_goal - self.expected_savings
    }

    /// Whether the linear projection already reaches the goal
    pub fn on_track(&self) -> bool {
        self.required_monthly_savings <= 0.0
    }
}
