//! CSV Loader
//!
//! Reads the launch table once at startup. The first malformed row aborts
//! the load; there is no partial dataset.

use std::io::Read;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::types::{LaunchRecord, REQUIRED_COLUMNS};
use super::Dataset;

impl Dataset {
    /// Load the dataset from a CSV file on disk
    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(file)?;

        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            "Loaded launch dataset"
        );

        Ok(dataset)
    }

    /// Load the dataset from any CSV source (useful for testing)
    pub fn from_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }

        let mut records = Vec::new();
        for (idx, result) in reader.deserialize::<LaunchRecord>().enumerate() {
            let record = result.map_err(|source| DatasetError::Row {
                line: source
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(idx as u64 + 2),
                source,
            })?;
            records.push(record);
        }

        Ok(Self::from_records(records))
    }

    /// Load the dataset from an in-memory CSV string
    pub fn from_csv_str(csv_data: &str) -> DatasetResult<Self> {
        Self::from_reader(csv_data.as_bytes())
    }
}
