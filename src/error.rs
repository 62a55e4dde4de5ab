use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV parsing failed: {0}")]
    Parse(#[from] csv::Error),

    #[error("Line {line} has {found} fields but the header only names {expected}")]
    ExtraFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Fields are inferred from the first record, so there has to be one.
    #[error("CSV has a header but no data rows, cannot infer fields")]
    EmptyDataset,

    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}
