//! Presentation outputs: summary table, chart data and currency formatting

mod config;
pub mod currency;
mod chart;
mod summary;

pub use config::{parse_start_month, Language, ReportConfig};
pub use currency::{environment_locales, fallback_format, CurrencyFormatter, FormatError};
pub use chart::{ChartData, ChartLabels, ChartPoint};
pub use summary::{summary_rows, SummaryField, SummaryRow};

use crate::projection::ProjectionResult;
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to render one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: Vec<SummaryRow>,
    pub chart: ChartData,
    pub result: ProjectionResult,
}

impl Report {
    pub fn build(result: ProjectionResult, config: &ReportConfig) -> Self {
        let formatter = CurrencyFormatter::from_locales(config.locales.as_slice());
        let summary = summary_rows(&result, &formatter, config.language);
        let chart = ChartData::from_result(&result, config.language, config.start_month);
        Self { summary, chart, result }
    }

    /// Plain-text table, one `label: value` line per row
    pub fn render_text(&self) -> String {
        let width = self
            .summary
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for row in &self.summary {
            let pad = width - row.label.chars().count();
            out.push_str(&row.label);
            out.push_str(&" ".repeat(pad));
            out.push_str(" : ");
            out.push_str(&row.value);
            out.push('\n');
        }
        out
    }
}
