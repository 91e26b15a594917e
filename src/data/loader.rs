//! CSV Loader Module
//! Reads comma-delimited files into typed records, skipping the header row.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::QueryError;

/// Loads CSV files into typed record lists.
///
/// Field mapping is positional: the header row is skipped and its names
/// are never consulted, so column order must match the record schema.
pub struct CsvLoader;

impl CsvLoader {
    /// Load every non-header row of `path` as a `T`, in file order.
    pub fn load_records<T>(path: impl AsRef<Path>) -> Result<Vec<T>, QueryError>
    where
        T: DeserializeOwned,
    {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            // Deserialize without a header record so mapping stays positional.
            records.push(row.deserialize(None)?);
        }

        debug!(path = %path.display(), rows = records.len(), "loaded records");
        Ok(records)
    }
}
