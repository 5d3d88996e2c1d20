//! Presentation settings

use super::currency::DEFAULT_LOCALES;
use crate::error::{PlanError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language for table labels, units and chart captions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "ar")]
    Arabic,
    #[serde(alias = "en")]
    English,
}

impl FromStr for Language {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" | "arabic" => Ok(Language::Arabic),
            "en" | "english" => Ok(Language::English),
            other => Err(PlanError::MalformedInput {
                message: format!("unknown language {:?}", other),
            }),
        }
    }
}

/// How a projection is presented
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub language: Language,

    /// Locale tags tried in order for currency formatting
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,

    /// First calendar month of the projection; chart points get dates when set
    #[serde(default)]
    pub start_month: Option<NaiveDate>,
}

fn default_locales() -> Vec<String> {
    DEFAULT_LOCALES.iter().map(|s| s.to_string()).collect()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            locales: default_locales(),
            start_month: None,
        }
    }
}

/// Parse `YYYY-MM` (or a full `YYYY-MM-DD`) into the first day of that month
pub fn parse_start_month(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d"))
        .map_err(|e| PlanError::MalformedInput {
            message: format!("invalid start month {:?}: {}", s, e),
        })?;
    Ok(first_of_month(date))
}

pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
