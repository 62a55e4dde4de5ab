use crate::{
    dataset::{Dataset, Record},
    error::ConvertError,
};

use std::{collections::HashSet, io::Read, path::Path};

use tracing::{debug, warn};

/// Default dialect, except that short rows are let through so their missing
/// cells can become `null`.
pub fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.flexible(true);
    builder
}

/// Read the whole CSV file at `path` into memory.
pub fn read_path(path: &Path) -> Result<Dataset, ConvertError> {
    debug!("Reading {}", path.display());

    let reader = builder()
        .from_path(path)
        .map_err(|source| ConvertError::Open {
            path: path.to_owned(),
            source,
        })?;

    read(reader)
}

pub fn read<R: Read>(mut reader: csv::Reader<R>) -> Result<Dataset, ConvertError> {
    let headers = reader.headers()?.clone();

    let mut seen = HashSet::new();
    for name in headers.iter() {
        if !seen.insert(name) {
            warn!("Column '{name}' appears more than once, its last value wins");
        }
    }

    let records = reader
        .into_records()
        .map(|result| to_record(&headers, &result?))
        .collect::<Result<Vec<Record>, ConvertError>>()?;

    let dataset = Dataset::new(records)?;

    debug!(
        "Read {} records with {} fields",
        dataset.len(),
        dataset.first().len()
    );

    Ok(dataset)
}

fn to_record(headers: &csv::StringRecord, row: &csv::StringRecord) -> Result<Record, ConvertError> {
    if row.len() > headers.len() {
        return Err(ConvertError::ExtraFields {
            line: row.position().map_or(0, |position| position.line()),
            expected: headers.len(),
            found: row.len(),
        });
    }

    let mut record = Record::default();
    for (index, name) in headers.iter().enumerate() {
        record.insert(name, row.get(index).map(String::from));
    }

    Ok(record)
}
