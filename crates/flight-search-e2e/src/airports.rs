// Airport reference data lookup
//
// Resolves a 3-letter airport code to its display name from the JSON file
// shipped under data/. The file is re-read on every call: the dataset is
// tiny, lookups happen a handful of times per scenario, and always-fresh
// reads keep the module free of cache state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// One entry in the reference dataset, keyed by 3-letter airport code.
#[derive(Debug, Clone, Deserialize)]
pub struct AirportRecord {
    pub airport_name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Default location of the reference dataset, relative to the crate root.
fn default_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Resolves an airport code to its display name.
///
/// Codes are matched exactly as keyed in the dataset (uppercase); callers
/// normalize case before lookup if needed. An absent code fails with
/// [`Error::AirportNotFound`].
pub fn airport_name(code: &str) -> Result<String> {
    airport_name_in(&default_data_dir(), code)
}

/// Same as [`airport_name`], reading the dataset from an explicit directory.
pub fn airport_name_in(data_dir: &Path, code: &str) -> Result<String> {
    let path = data_dir.join("airports.json");
    let raw = std::fs::read_to_string(&path).map_err(|source| Error::AirportDataUnreadable {
        path: path.clone(),
        source,
    })?;
    let airports: HashMap<String, AirportRecord> =
        serde_json::from_str(&raw).map_err(|source| Error::AirportDataMalformed {
            path: path.clone(),
            source,
        })?;

    airports
        .get(code)
        .map(|record| record.airport_name.clone())
        .ok_or_else(|| Error::AirportNotFound(code.to_string()))
}
