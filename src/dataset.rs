use crate::error::ConvertError;

use serde::{ser::SerializeMap, Serialize, Serializer};

/// One data row, keyed by header name in header order.
///
/// A `None` value is a cell the row did not have; it serializes as `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record(Vec<(String, Option<String>)>);

impl Record {
    /// Sets `key` to `value`. A key seen before keeps its position and takes the new value.
    pub fn insert(&mut self, key: &str, value: Option<String>) {
        match self.0.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key.to_owned(), value)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Every record of an input file, in file order. Never empty.
#[derive(Debug)]
pub struct Dataset {
    first: Record,
    rest: Vec<Record>,
}

impl Dataset {
    pub fn new(records: impl IntoIterator<Item = Record>) -> Result<Self, ConvertError> {
        let mut records = records.into_iter();
        let first = records.next().ok_or(ConvertError::EmptyDataset)?;

        Ok(Self {
            first,
            rest: records.collect(),
        })
    }

    /// The record field names are inferred from.
    pub fn first(&self) -> &Record {
        &self.first
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
