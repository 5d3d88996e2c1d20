//! Core projection arithmetic
//!
//! All functions here are pure: they take validated inputs from the plan
//! boundary and never fail.

use super::{ProjectionResult, MONTHS_PER_YEAR};
use crate::income::IncomeEntry;
use crate::plan::{PlanInputs, RetirementPlan};

/// Sum income entries as monthly equivalents
///
/// Quarterly amounts count a third, annual amounts a twelfth, and entries
/// with `Frequency::None` are left out.
pub fn normalize_income(entries: &[IncomeEntry]) -> f64 {
    entries.iter().map(IncomeEntry::monthly_equivalent).sum()
}

/// Extra monthly saving needed to close the gap between projection and goal
///
/// Returns 0 when there are no months left to save in.
pub fn required_monthly_savings(retirement_goal: f64, expected_savings: f64, months_left: u32) -> f64 {
    if months_left == 0 {
        return 0.0;
    }
    (retirement_goal - expected_savings) / months_left as f64
}

/// Project savings from a monthly income total, monthly expenses and a plan
pub fn compute_projection(
    total_monthly_income: f64,
    monthly_expenses: f64,
    plan: &RetirementPlan,
) -> ProjectionResult {
    let years_left = plan.years_left();
    let months_left = years_left * MONTHS_PER_YEAR;

    // No clamping: a negative net is a shortfall
    let net_monthly = total_monthly_income - monthly_expenses;
    let expected_savings = net_monthly * months_left as f64;
    let required = required_monthly_savings(plan.retirement_goal(), expected_savings, months_left);

    let cumulative_series: Vec<f64> = (1..=months_left)
        .map(|month| net_monthly * month as f64)
        .collect();

    log::debug!(
        "Projected {} months: net {:.2}/month, expected {:.2}, required {:.2}/month",
        months_left,
        net_monthly,
        expected_savings,
        required
    );

    ProjectionResult {
        current_age: plan.current_age(),
        retirement_age: plan.retirement_age(),
        total_monthly_income,
        monthly_expenses,
        net_monthly,
        years_left,
        months_left,
        expected_savings,
        retirement_goal: plan.retirement_goal(),
        required_monthly_savings: required,
        cumulative_series,
    }
}

/// Normalize income and project using the plan's own expenses
pub fn project(inputs: &PlanInputs) -> ProjectionResult {
    let plan = inputs.plan();
    let total_monthly_income = normalize_income(inputs.income());
    compute_projection(total_monthly_income, plan.monthly_expenses(), plan)
}
