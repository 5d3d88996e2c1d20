//! Retirement savings calculator
//!
//! Prints the summary table for a plan, optionally writing the cumulative
//! savings series as CSV and sweeping alternative retirement ages.

use anyhow::{bail, Context, Result};
use clap::Parser;
use retirement_planner::{
    income::{load_income, Frequency, IncomeEntry, IncomeSource},
    plan::{load_inputs, PlanInputs, RetirementPlan, MAX_AGE},
    projection::{project, sweep_retirement_ages},
    report::{
        environment_locales, parse_start_month, CurrencyFormatter, Language, Report, ReportConfig,
    },
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plan_retirement", about = "Project retirement savings against a goal")]
struct Cli {
    /// JSON file with income, ages, expenses and goal
    #[arg(long, conflicts_with_all = [
        "income_csv", "salary", "additional", "freelance", "investment",
        "expenses", "current_age", "retirement_age", "goal",
    ])]
    input: Option<PathBuf>,

    /// CSV file with source,frequency,amount rows
    #[arg(long)]
    income_csv: Option<PathBuf>,

    /// Monthly salary as FREQUENCY:AMOUNT, e.g. monthly:10000
    #[arg(long, value_parser = parse_income_spec)]
    salary: Option<(Frequency, f64)>,

    /// Additional income as FREQUENCY:AMOUNT
    #[arg(long, value_parser = parse_income_spec)]
    additional: Option<(Frequency, f64)>,

    /// Freelance income as FREQUENCY:AMOUNT
    #[arg(long, value_parser = parse_income_spec)]
    freelance: Option<(Frequency, f64)>,

    /// Investment income as FREQUENCY:AMOUNT
    #[arg(long, value_parser = parse_income_spec)]
    investment: Option<(Frequency, f64)>,

    /// Total monthly expenses
    #[arg(long, default_value_t = 0.0)]
    expenses: f64,

    #[arg(long, required_unless_present = "input")]
    current_age: Option<u32>,

    #[arg(long, required_unless_present = "input")]
    retirement_age: Option<u32>,

    /// Savings goal at retirement
    #[arg(long, default_value_t = 0.0)]
    goal: f64,

    /// Label language: ar or en
    #[arg(long, default_value = "ar")]
    lang: Language,

    /// Currency locale to try (repeatable); defaults to Saudi locales then $LANG
    #[arg(long = "locale")]
    locales: Vec<String>,

    /// First calendar month of the projection, YYYY-MM
    #[arg(long)]
    start_month: Option<String>,

    /// Write the cumulative savings series to this CSV file
    #[arg(long)]
    chart_csv: Option<PathBuf>,

    /// Also project every retirement age up to this one
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_AGE as i64))]
    sweep_to: Option<u32>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

fn parse_income_spec(s: &str) -> std::result::Result<(Frequency, f64), String> {
    let (freq, amount) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FREQUENCY:AMOUNT, got {:?}", s))?;
    let frequency: Frequency = freq.parse().map_err(|e| format!("{}", e))?;
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|e| format!("invalid amount {:?}: {}", amount, e))?;
    Ok((frequency, amount))
}

fn build_inputs(cli: &Cli) -> Result<PlanInputs> {
    if let Some(path) = &cli.input {
        return load_inputs(path).with_context(|| format!("Failed to load {}", path.display()));
    }

    let mut income = match &cli.income_csv {
        Some(path) => load_income(path).with_context(|| format!("Failed to load {}", path.display()))?,
        None => Vec::new(),
    };

    let flags = [
        (IncomeSource::Salary, cli.salary),
        (IncomeSource::AdditionalIncome, cli.additional),
        (IncomeSource::Freelance, cli.freelance),
        (IncomeSource::Investment, cli.investment),
    ];
    for (source, spec) in flags {
        if let Some((frequency, amount)) = spec {
            income.push(IncomeEntry::new(source, frequency, amount)?);
        }
    }

    let (Some(current_age), Some(retirement_age)) = (cli.current_age, cli.retirement_age) else {
        bail!("--current-age and --retirement-age are required without --input");
    };
    let plan = RetirementPlan::new(current_age, retirement_age, cli.expenses, cli.goal)?;
    Ok(PlanInputs::new(income, plan)?)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let inputs = build_inputs(&cli)?;
    let locales = if cli.locales.is_empty() {
        environment_locales()
    } else {
        cli.locales.clone()
    };
    let start_month = cli
        .start_month
        .as_deref()
        .map(parse_start_month)
        .transpose()?;
    let config = ReportConfig {
        language: cli.lang,
        locales,
        start_month,
    };

    let result = project(&inputs);
    let report = Report::build(result, &config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    if let Some(path) = &cli.chart_csv {
        let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        report.chart.write_csv(BufWriter::new(file))?;
        log::info!("Chart series written to {}", path.display());
    }

    if let Some(max_age) = cli.sweep_to {
        let formatter = CurrencyFormatter::from_locales(config.locales.as_slice());
        let first_age = inputs.plan().current_age() + 1;
        let results = sweep_retirement_ages(&inputs, first_age..=max_age);

        println!();
        println!("{:>6} | {:>6} | {:>24} | {:>24}", "Age", "Months", "Expected savings", "Required monthly");
        for row in &results {
            println!(
                "{:>6} | {:>6} | {:>24} | {:>24}",
                row.retirement_age,
                row.months_left,
                formatter.format(row.expected_savings),
                formatter.format(row.required_monthly_savings),
            );
        }
    }

    Ok(())
}
