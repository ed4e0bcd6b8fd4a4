//! In-memory catalog of parsed records.

use crate::csv::CsvRecordParser;
use crate::ids::ProductId;
use crate::record::Record;

/// Ordered collection of the records of the current session.
///
/// Order is feed order. Duplicate ids are allowed; lookups return the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already parsed records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse raw feed text into a catalog.
    pub fn parse(raw: &str, parser: &CsvRecordParser) -> Self {
        Self::from_records(parser.parse(raw))
    }

    /// Find the first record with the given id.
    pub fn get(&self, id: ProductId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All records in feed order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
