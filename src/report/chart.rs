//! Chart data for the cumulative savings line and the goal reference line

use super::config::{first_of_month, Language};
use crate::error::Result;
use crate::projection::ProjectionResult;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One plotted month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub month: u32,
    /// First day of the calendar month, when the chart has a start month
    pub calendar_month: Option<NaiveDate>,
    pub cumulative_savings: f64,
}

/// Captions for the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLabels {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    pub savings: String,
    pub goal: String,
}

impl ChartLabels {
    pub fn for_language(language: Language) -> Self {
        let (title, x_axis, y_axis, savings, goal) = match language {
            Language::Arabic => (
                "خطة الادخار حتى التقاعد",
                "الشهر",
                "الادخار (ر.س)",
                "الادخار",
                "الهدف",
            ),
            Language::English => (
                "Savings plan until retirement",
                "Month",
                "Savings (SAR)",
                "Savings",
                "Goal",
            ),
        };
        Self {
            title: title.to_string(),
            x_axis: x_axis.to_string(),
            y_axis: y_axis.to_string(),
            savings: savings.to_string(),
            goal: goal.to_string(),
        }
    }
}

/// Series plus goal line, ready for a plotting collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: ChartLabels,
    /// Horizontal reference line
    pub goal: f64,
    pub points: Vec<ChartPoint>,
}

#[derive(Serialize)]
struct ChartCsvRow {
    month: u32,
    calendar_month: Option<NaiveDate>,
    cumulative_savings: f64,
    goal: f64,
}

impl ChartData {
    pub fn from_result(result: &ProjectionResult, language: Language, start_month: Option<NaiveDate>) -> Self {
        let start = start_month.map(first_of_month);
        let points = result
            .series_points()
            .map(|point| ChartPoint {
                month: point.month,
                calendar_month: start.and_then(|s| s.checked_add_months(Months::new(point.month - 1))),
                cumulative_savings: point.cumulative_savings,
            })
            .collect();

        Self {
            labels: ChartLabels::for_language(language),
            goal: result.retirement_goal,
            points,
        }
    }

    /// Write one CSV row per month, with the goal repeated on each row
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for point in &self.points {
            wtr.serialize(ChartCsvRow {
                month: point.month,
                calendar_month: point.calendar_month,
                cumulative_savings: point.cumulative_savings,
                goal: self.goal,
            })?;
        }
        wtr.flush()?;
        Ok(())
    }
}
