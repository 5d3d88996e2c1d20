//! Load income entries from CSV
//!
//! Expected columns: `source,frequency,amount`. Sources and frequencies
//! accept either their English names or the Arabic form labels.

use super::IncomeEntry;
use crate::error::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load income entries from a CSV file
pub fn load_income<P: AsRef<Path>>(path: P) -> Result<Vec<IncomeEntry>> {
    let path = path.as_ref();
    log::debug!("Loading income entries from {}", path.display());
    let file = File::open(path)?;
    load_income_from_reader(file)
}

/// Load income entries from any reader producing CSV
pub fn load_income_from_reader<R: Read>(reader: R) -> Result<Vec<IncomeEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for row in rdr.deserialize() {
        let entry: IncomeEntry = row?;
        entries.push(entry);
    }

    log::debug!("Loaded {} income entries", entries.len());
    Ok(entries)
}
