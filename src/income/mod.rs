//! Income sources, frequencies and CSV loading

mod data;
pub mod loader;

pub use data::{Frequency, IncomeEntry, IncomeSource};
pub use loader::{load_income, load_income_from_reader};
