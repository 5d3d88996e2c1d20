//! Retirement plan inputs and the validating input boundary
//!
//! Everything the engine consumes passes through here first:
//! - amounts must be non-negative and finite
//! - retirement age must be strictly greater than current age
//! - neither age may exceed [`MAX_AGE`]
//! - each income source may appear at most once

pub mod loader;

pub use loader::{load_inputs, load_inputs_from_reader};

use crate::error::{check_amount, PlanError, Result};
use crate::income::IncomeEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Oldest age accepted for either current or retirement age
pub const MAX_AGE: u32 = 150;

/// Ages, expenses and savings goal for one household
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlan")]
pub struct RetirementPlan {
    current_age: u32,
    retirement_age: u32,
    monthly_expenses: f64,
    retirement_goal: f64,
}

#[derive(Deserialize)]
struct RawPlan {
    current_age: u32,
    retirement_age: u32,
    #[serde(default)]
    monthly_expenses: f64,
    #[serde(default)]
    retirement_goal: f64,
}

impl TryFrom<RawPlan> for RetirementPlan {
    type Error = PlanError;

    fn try_from(raw: RawPlan) -> Result<Self> {
        RetirementPlan::new(
            raw.current_age,
            raw.retirement_age,
            raw.monthly_expenses,
            raw.retirement_goal,
        )
    }
}

impl RetirementPlan {
    pub fn new(
        current_age: u32,
        retirement_age: u32,
        monthly_expenses: f64,
        retirement_goal: f64,
    ) -> Result<Self> {
        if retirement_age > MAX_AGE {
            return Err(PlanError::AgeOutOfRange { age: retirement_age, max: MAX_AGE });
        }
        if retirement_age <= current_age {
            return Err(PlanError::InvalidAges { current_age, retirement_age });
        }
        let monthly_expenses = check_amount("monthly_expenses", monthly_expenses)?;
        let retirement_goal = check_amount("retirement_goal", retirement_goal)?;

        Ok(Self {
            current_age,
            retirement_age,
            monthly_expenses,
            retirement_goal,
        })
    }

    pub fn current_age(&self) -> u32 {
        self.current_age
    }

    pub fn retirement_age(&self) -> u32 {
        self.retirement_age
    }

    pub fn monthly_expenses(&self) -> f64 {
        self.monthly_expenses
    }

    pub fn retirement_goal(&self) -> f64 {
        self.retirement_goal
    }

    /// Years until retirement, always at least 1
    pub fn years_left(&self) -> u32 {
        self.retirement_age - self.current_age
    }

    /// Same plan with a different retirement age
    pub fn with_retirement_age(&self, retirement_age: u32) -> Result<Self> {
        Self::new(
            self.current_age,
            retirement_age,
            self.monthly_expenses,
            self.retirement_goal,
        )
    }
}

/// Complete, immutable input for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlanInputs")]
pub struct PlanInputs {
    income: Vec<IncomeEntry>,
    #[serde(flatten)]
    plan: RetirementPlan,
}

#[derive(Deserialize)]
struct RawPlanInputs {
    #[serde(default)]
    income: Vec<IncomeEntry>,
    #[serde(flatten)]
    plan: RetirementPlan,
}

impl TryFrom<RawPlanInputs> for PlanInputs {
    type Error = PlanError;

    fn try_from(raw: RawPlanInputs) -> Result<Self> {
        PlanInputs::new(raw.income, raw.plan)
    }
}

impl PlanInputs {
    /// Combine income entries with a plan, rejecting repeated sources
    pub fn new(income: Vec<IncomeEntry>, plan: RetirementPlan) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &income {
            if !seen.insert(entry.source()) {
                return Err(PlanError::DuplicateSource(entry.source().to_string()));
            }
        }
        Ok(Self { income, plan })
    }

    pub fn income(&self) -> &[IncomeEntry] {
        &self.income
    }

    pub fn plan(&self) -> &RetirementPlan {
        &self.plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::income::{Frequency, IncomeSource};

    #[test]
    fn test_plan_validation() {
        let plan = RetirementPlan::new(30, 60, 6000.0, 2_000_000.0).unwrap();
        assert_eq!(plan.years_left(), 30);

        assert!(matches!(
            RetirementPlan::new(60, 60, 0.0, 0.0),
            Err(PlanError::InvalidAges { current_age: 60, retirement_age: 60 })
        ));
        assert!(matches!(
            RetirementPlan::new(61, 60, 0.0, 0.0),
            Err(PlanError::InvalidAges { .. })
        ));
        assert!(matches!(
            RetirementPlan::new(30, 60, -1.0, 0.0),
            Err(PlanError::InvalidAmount { .. })
        ));
        assert!(RetirementPlan::new(30, 60, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_ages_above_maximum_rejected() {
        assert!(RetirementPlan::new(0, MAX_AGE, 0.0, 0.0).is_ok());
        assert!(matches!(
            RetirementPlan::new(0, MAX_AGE + 1, 0.0, 0.0),
            Err(PlanError::AgeOutOfRange { age: 151, max: MAX_AGE })
        ));
        assert!(matches!(
            RetirementPlan::new(0, 400_000_000, 0.0, 0.0),
            Err(PlanError::AgeOutOfRange { .. })
        ));
        // current age is bounded through the ordering check
        assert!(RetirementPlan::new(200, 100, 0.0, 0.0).is_err());

        let plan = RetirementPlan::new(30, 60, 0.0, 0.0).unwrap();
        assert!(plan.with_retirement_age(u32::MAX).is_err());
    }

    #[test]
    fn test_zero_current_age_allowed() {
        let plan = RetirementPlan::new(0, 1, 0.0, 0.0).unwrap();
        assert_eq!(plan.years_left(), 1);
    }

    #[test]
    fn test_with_retirement_age() {
        let plan = RetirementPlan::new(30, 60, 6000.0, 1000.0).unwrap();
        let later = plan.with_retirement_age(65).unwrap();
        assert_eq!(later.retirement_age(), 65);
        assert_eq!(later.monthly_expenses(), 6000.0);
        assert!(plan.with_retirement_age(30).is_err());
    }

    #[test]
    fn test_duplicate_sources_rejected() {
        let plan = RetirementPlan::new(30, 60, 0.0, 0.0).unwrap();
        let income = vec![
            IncomeEntry::new(IncomeSource::Salary, Frequency::Monthly, 100.0).unwrap(),
            IncomeEntry::new(IncomeSource::Salary, Frequency::Annual, 100.0).unwrap(),
        ];
        assert!(matches!(
            PlanInputs::new(income, plan),
            Err(PlanError::DuplicateSource(ref s)) if s == "salary"
        ));
    }

    #[test]
    fn test_inputs_deserialization() {
        let inputs: PlanInputs = serde_json::from_str(
            r#"{
                "income": [
                    {"source": "salary", "frequency": "monthly", "amount": 10000},
                    {"source": "investment", "frequency": "none", "amount": 500}
                ],
                "current_age": 30,
                "retirement_age": 60,
                "monthly_expenses": 6000,
                "retirement_goal": 2000000
            }"#,
        )
        .unwrap();

        assert_eq!(inputs.income().len(), 2);
        assert_eq!(inputs.plan().retirement_age(), 60);
        assert_eq!(inputs.plan().retirement_goal(), 2_000_000.0);
    }

    #[test]
    fn test_inputs_deserialization_rejects_bad_ages() {
        let result = serde_json::from_str::<PlanInputs>(
            r#"{"current_age": 65, "retirement_age": 60}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_inputs_round_trip_through_json() {
        let plan = RetirementPlan::new(45, 67, 3500.0, 750_000.0).unwrap();
        let income = vec![IncomeEntry::new(IncomeSource::Freelance, Frequency::Quarterly, 9000.0).unwrap()];
        let inputs = PlanInputs::new(income, plan).unwrap();

        let json = serde_json::to_string(&inputs).unwrap();
        let back: PlanInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inputs);
    }
}
