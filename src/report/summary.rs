//! Summary table rows

use super::config::Language;
use super::currency::CurrencyFormatter;
use crate::projection::ProjectionResult;
use serde::{Deserialize, Serialize};

/// Rows of the summary table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryField {
    TotalMonthlyIncome,
    MonthlyExpenses,
    CurrentAge,
    RetirementAge,
    YearsRemaining,
    RequiredMonthlySavings,
}

impl SummaryField {
    pub const ALL: [SummaryField; 6] = [
        SummaryField::TotalMonthlyIncome,
        SummaryField::MonthlyExpenses,
        SummaryField::CurrentAge,
        SummaryField::RetirementAge,
        SummaryField::YearsRemaining,
        SummaryField::RequiredMonthlySavings,
    ];

    pub fn label(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::Arabic, SummaryField::TotalMonthlyIncome) => "إجمالي الدخل الشهري",
            (Language::Arabic, SummaryField::MonthlyExpenses) => "النفقات الشهرية",
            (Language::Arabic, SummaryField::CurrentAge) => "العمر الحالي",
            (Language::Arabic, SummaryField::RetirementAge) => "عمر التقاعد",
            (Language::Arabic, SummaryField::YearsRemaining) => "سنوات التقاعد المتبقية",
            (Language::Arabic, SummaryField::RequiredMonthlySavings) => "الادخار الشهري المطلوب",
            (Language::English, SummaryField::TotalMonthlyIncome) => "Total monthly income",
            (Language::English, SummaryField::MonthlyExpenses) => "Monthly expenses",
            (Language::English, SummaryField::CurrentAge) => "Current age",
            (Language::English, SummaryField::RetirementAge) => "Retirement age",
            (Language::English, SummaryField::YearsRemaining) => "Years until retirement",
            (Language::English, SummaryField::RequiredMonthlySavings) => "Required monthly savings",
        }
    }
}

/// One (label, formatted value) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

fn format_years(years: u32, language: Language) -> String {
    match language {
        Language::Arabic => format!("{} سنة", years),
        Language::English if years == 1 => "1 year".to_string(),
        Language::English => format!("{} years", years),
    }
}

/// Build the summary table for a projection
pub fn summary_rows(
    result: &ProjectionResult,
    formatter: &CurrencyFormatter,
    language: Language,
) -> Vec<SummaryRow> {
    SummaryField::ALL
        .iter()
        .map(|field| {
            let value = match field {
                SummaryField::TotalMonthlyIncome => formatter.format(result.total_monthly_income),
                SummaryField::MonthlyExpenses => formatter.format(result.monthly_expenses),
                SummaryField::CurrentAge => format_years(result.current_age, language),
                SummaryField::RetirementAge => format_years(result.retirement_age, language),
                SummaryField::YearsRemaining => format_years(result.years_left, language),
                SummaryField::RequiredMonthlySavings => {
                    formatter.format(result.required_monthly_savings)
                }
            };
            SummaryRow {
                label: field.label(language).to_string(),
                value,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::RetirementPlan;
    use crate::projection::compute_projection;

    fn reference_result() -> ProjectionResult {
        let plan = RetirementPlan::new(30, 60, 6_000.0, 2_000_000.0).unwrap();
        compute_projection(10_000.0, 6_000.0, &plan)
    }

    #[test]
    fn test_arabic_summary_with_fallback_currency() {
        let rows = summary_rows(
            &reference_result(),
            &CurrencyFormatter::fallback_only(),
            Language::Arabic,
        );

        let pairs: Vec<(&str, &str)> = rows
            .iter()
            .map(|row| (row.label.as_str(), row.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("إجمالي الدخل الشهري", "ر.س 10,000.00"),
                ("النفقات الشهرية", "ر.س 6,000.00"),
                ("العمر الحالي", "30 سنة"),
                ("عمر التقاعد", "60 سنة"),
                ("سنوات التقاعد المتبقية", "30 سنة"),
                ("الادخار الشهري المطلوب", "ر.س 1,555.56"),
            ]
        );
    }

    #[test]
    fn test_english_labels() {
        let plan = RetirementPlan::new(60, 61, 0.0, 0.0).unwrap();
        let result = compute_projection(0.0, 0.0, &plan);
        let rows = summary_rows(&result, &CurrencyFormatter::from_locales(&["en_SA"]), Language::English);

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].label, "Total monthly income");
        assert_eq!(rows[0].value, "SAR 0.00");
        assert_eq!(rows[4].value, "1 year");
        assert_eq!(rows[5].label, "Required monthly savings");
    }
}
