//! Load plan inputs from JSON

use super::PlanInputs;
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load and validate plan inputs from a JSON file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<PlanInputs> {
    let path = path.as_ref();
    log::debug!("Loading plan inputs from {}", path.display());
    let file = File::open(path)?;
    load_inputs_from_reader(BufReader::new(file))
}

/// Load and validate plan inputs from any JSON reader
pub fn load_inputs_from_reader<R: Read>(reader: R) -> Result<PlanInputs> {
    let inputs: PlanInputs = serde_json::from_reader(reader)?;
    Ok(inputs)
}
