//! Retirement age sensitivity: project the same household at several ages

use super::{compute_projection, normalize_income, ProjectionResult};
use crate::plan::{PlanInputs, MAX_AGE};
use rayon::prelude::*;
use std::ops::RangeInclusive;

/// Project `inputs` once per candidate retirement age
///
/// Candidates at or below the current age, or above [`MAX_AGE`], are
/// skipped. Results come back ordered by retirement age.
pub fn sweep_retirement_ages(inputs: &PlanInputs, ages: RangeInclusive<u32>) -> Vec<ProjectionResult> {
    let plan = inputs.plan();
    let total_monthly_income = normalize_income(inputs.income());

    let ages = *ages.start()..=(*ages.end()).min(MAX_AGE);
    let results: Vec<ProjectionResult> = ages
        .into_par_iter()
        .filter_map(|age| plan.with_retirement_age(age).ok())
        .map(|candidate| {
            compute_projection(total_monthly_income, candidate.monthly_expenses(), &candidate)
        })
        .collect();

    log::info!(
        "Swept {} retirement ages from current age {}",
        results.len(),
        plan.current_age()
    );
    results
}
