//! Income source and frequency data structures

use crate::error::{check_amount, PlanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of income sources collected by the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum IncomeSource {
    Salary,
    AdditionalIncome,
    Freelance,
    Investment,
}

impl IncomeSource {
    /// All sources, in form order
    pub const ALL: [IncomeSource; 4] = [
        IncomeSource::Salary,
        IncomeSource::AdditionalIncome,
        IncomeSource::Freelance,
        IncomeSource::Investment,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IncomeSource::Salary => "salary",
            IncomeSource::AdditionalIncome => "additional_income",
            IncomeSource::Freelance => "freelance",
            IncomeSource::Investment => "investment",
        }
    }

    /// Label shown on the Arabic form
    pub fn arabic_label(&self) -> &'static str {
        match self {
            IncomeSource::Salary => "راتب شهري",
            IncomeSource::AdditionalIncome => "دخل إضافي",
            IncomeSource::Freelance => "عمل حر",
            IncomeSource::Investment => "استثمار",
        }
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IncomeSource {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "salary" | "monthly_salary" => return Ok(IncomeSource::Salary),
            "additional_income" | "additional" => return Ok(IncomeSource::AdditionalIncome),
            "freelance" => return Ok(IncomeSource::Freelance),
            "investment" => return Ok(IncomeSource::Investment),
            _ => {}
        }
        IncomeSource::ALL
            .into_iter()
            .find(|source| source.arabic_label() == trimmed)
            .ok_or_else(|| PlanError::UnknownSource(s.to_string()))
    }
}

impl TryFrom<String> for IncomeSource {
    type Error = PlanError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// How often an income amount is received
///
/// `None` marks a source the user does not have; it contributes nothing
/// to the monthly total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Frequency {
    None,
    Monthly,
    Quarterly,
    Annual,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::None,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Annual,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Frequency::None => "none",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Annual => "annual",
        }
    }

    pub fn arabic_label(&self) -> &'static str {
        match self {
            Frequency::None => "لا شيء",
            Frequency::Monthly => "شهري",
            Frequency::Quarterly => "ربع سنوي",
            Frequency::Annual => "سنوي",
        }
    }

    /// Number of months covered by one payment, `None` when excluded
    pub fn months_per_payment(&self) -> Option<u32> {
        match self {
            Frequency::None => None,
            Frequency::Monthly => Some(1),
            Frequency::Quarterly => Some(3),
            Frequency::Annual => Some(12),
        }
    }

    /// Convert a periodic amount to its monthly equivalent
    pub fn to_monthly(&self, amount: f64) -> f64 {
        match self.months_per_payment() {
            Some(1) => amount,
            Some(months) => amount / months as f64,
            None => 0.0,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Frequency {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "none" => return Ok(Frequency::None),
            "monthly" => return Ok(Frequency::Monthly),
            "quarterly" => return Ok(Frequency::Quarterly),
            "annual" | "yearly" => return Ok(Frequency::Annual),
            _ => {}
        }
        Frequency::ALL
            .into_iter()
            .find(|freq| freq.arabic_label() == trimmed)
            .ok_or_else(|| PlanError::UnknownFrequency(s.to_string()))
    }
}

impl TryFrom<String> for Frequency {
    type Error = PlanError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// A single income line from the form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawIncomeEntry")]
pub struct IncomeEntry {
    source: IncomeSource,
    frequency: Frequency,
    amount: f64,
}

#[derive(Deserialize)]
struct RawIncomeEntry {
    source: IncomeSource,
    frequency: Frequency,
    #[serde(default)]
    amount: f64,
}

impl TryFrom<RawIncomeEntry> for IncomeEntry {
    type Error = PlanError;

    fn try_from(raw: RawIncomeEntry) -> Result<Self> {
        IncomeEntry::new(raw.source, raw.frequency, raw.amount)
    }
}

impl IncomeEntry {
    /// Build an entry, rejecting negative or non-finite amounts
    pub fn new(source: IncomeSource, frequency: Frequency, amount: f64) -> Result<Self> {
        let amount = check_amount(source.name(), amount)?;
        Ok(Self { source, frequency, amount })
    }

    pub fn source(&self) -> IncomeSource {
        self.source
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn monthly_equivalent(&self) -> f64 {
        self.frequency.to_monthly(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_parsing() {
        assert_eq!("monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!("Quarterly".parse::<Frequency>().unwrap(), Frequency::Quarterly);
        assert_eq!("yearly".parse::<Frequency>().unwrap(), Frequency::Annual);
        assert_eq!("ربع سنوي".parse::<Frequency>().unwrap(), Frequency::Quarterly);
        assert_eq!("لا شيء".parse::<Frequency>().unwrap(), Frequency::None);

        // Unrecognized strings are an error, never a silent exclusion
        let err = "weekly".parse::<Frequency>().unwrap_err();
        assert!(matches!(err, PlanError::UnknownFrequency(ref s) if s == "weekly"));
    }

    #[test]
    fn test_source_parsing() {
        assert_eq!("salary".parse::<IncomeSource>().unwrap(), IncomeSource::Salary);
        assert_eq!("عمل حر".parse::<IncomeSource>().unwrap(), IncomeSource::Freelance);
        assert_eq!("additional".parse::<IncomeSource>().unwrap(), IncomeSource::AdditionalIncome);
        assert!(matches!(
            "lottery".parse::<IncomeSource>(),
            Err(PlanError::UnknownSource(_))
        ));
    }

    #[test]
    fn test_monthly_conversion() {
        assert_eq!(Frequency::Monthly.to_monthly(900.0), 900.0);
        assert_eq!(Frequency::Quarterly.to_monthly(900.0), 300.0);
        assert_eq!(Frequency::Annual.to_monthly(1200.0), 100.0);
        assert_eq!(Frequency::None.to_monthly(5000.0), 0.0);
    }

    #[test]
    fn test_entry_rejects_negative_amount() {
        let err = IncomeEntry::new(IncomeSource::Investment, Frequency::Annual, -1.0).unwrap_err();
        assert!(matches!(err, PlanError::InvalidAmount { ref field, .. } if field == "investment"));
    }

    #[test]
    fn test_entry_deserialization() {
        let entry: IncomeEntry = serde_json::from_str(
            r#"{"source": "راتب شهري", "frequency": "شهري", "amount": 10000}"#,
        )
        .unwrap();
        assert_eq!(entry.source(), IncomeSource::Salary);
        assert_eq!(entry.frequency(), Frequency::Monthly);
        assert_eq!(entry.monthly_equivalent(), 10000.0);

        let bad = serde_json::from_str::<IncomeEntry>(
            r#"{"source": "salary", "frequency": "fortnightly", "amount": 10}"#,
        );
        assert!(bad.is_err());

        let negative = serde_json::from_str::<IncomeEntry>(
            r#"{"source": "salary", "frequency": "monthly", "amount": -10}"#,
        );
        assert!(negative.is_err());
    }

    #[test]
    fn test_entry_serializes_english_names() {
        let entry = IncomeEntry::new(IncomeSource::AdditionalIncome, Frequency::Quarterly, 300.0).unwrap();
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["source"], "additional_income");
        assert_eq!(json["frequency"], "quarterly");
        assert_eq!(json["amount"], 300.0);
    }
}
