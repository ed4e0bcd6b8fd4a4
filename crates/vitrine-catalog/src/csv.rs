//! Lenient CSV feed parser.
//!
//! The first line is the header row; every following line is a data row.
//! Fields are comma separated and may be wrapped in double quotes so that a
//! comma inside them is kept as content. A quote character only toggles the
//! quoted state: `""` is two toggles, never a literal quote. Line breaks
//! always end a row, quoted or not.
//!
//! Parsing never fails. Rows whose id cell is missing, non-numeric or not
//! positive are dropped; every other malformed cell falls back to a default.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::fields::CatalogFieldMap;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::numeric::{lenient_price, parse_int_prefix};
use crate::record::Record;

/// Converts raw feed text into an ordered list of [`Record`]s.
#[derive(Debug, Clone, Default)]
pub struct CsvRecordParser {
    fields: CatalogFieldMap,
    currency: Currency,
}

impl CsvRecordParser {
    /// Create a parser for the given header mapping, pricing in BRL.
    pub fn new(fields: CatalogFieldMap) -> Self {
        Self {
            fields,
            currency: Currency::default(),
        }
    }

    /// Set the currency prices are read in.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// The header mapping in use.
    pub fn fields(&self) -> &CatalogFieldMap {
        &self.fields
    }

    /// Parse raw feed text.
    ///
    /// Surviving rows keep their source order. Duplicate ids are not merged.
    /// Empty input, or input with only a header line, yields an empty list.
    pub fn parse(&self, raw: &str) -> Vec<Record> {
        let mut lines = raw.trim().lines();
        let headers = match lines.next() {
            Some(line) => split_headers(line),
            None => return Vec::new(),
        };

        let mut records = Vec::new();
        let mut dropped = 0usize;

        for (index, line) in lines.enumerate() {
            let values = split_fields(line);
            match self.project(&headers, &values) {
                Some(record) => records.push(record),
                None => {
                    dropped += 1;
                    // +2: one for the header, one for 1-based numbering
                    debug!(row = index + 2, line, "dropping feed row without a valid id");
                }
            }
        }

        info!(kept = records.len(), dropped, "parsed catalog feed");
        records
    }

    /// Build a record from one row, or `None` when its id is not positive.
    fn project(&self, headers: &[String], values: &[String]) -> Option<Record> {
        // Later duplicate headers overwrite earlier ones.
        let row: HashMap<&str, &str> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let value = values.get(i).map(String::as_str).unwrap_or("");
                (header.as_str(), value)
            })
            .collect();

        let raw_id = parse_int_prefix(cell(&row, &self.fields.id)).unwrap_or(0);
        let id = ProductId::from_signed(raw_id)?;

        Some(Record {
            id,
            name: or_placeholder(cell(&row, &self.fields.name), &self.fields.name_placeholder),
            description: or_placeholder(
                cell(&row, &self.fields.description),
                &self.fields.description_placeholder,
            ),
            unit_price: Money::from_decimal(lenient_price(cell(&row, &self.fields.price)), self.currency),
            image_ref: cell(&row, &self.fields.image).to_string(),
        })
    }
}

/// Parse raw feed text with the given header mapping, pricing in BRL.
pub fn parse_catalog(raw: &str, fields: &CatalogFieldMap) -> Vec<Record> {
    CsvRecordParser::new(fields.clone()).parse(raw)
}

/// Split the header line.
///
/// Header names are plain identifiers, so the header line is split on every
/// comma without quote tracking.
pub fn split_headers(line: &str) -> Vec<String> {
    line.split(',')
        .map(|h| strip_enclosing_quotes(h.trim()).to_string())
        .collect()
}

/// Split one data line into trimmed field values.
///
/// Commas inside a quoted span are content. Quote characters themselves are
/// not copied into the value.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                values.push(finish_field(&current));
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    values.push(finish_field(&current));

    values
}

fn finish_field(raw: &str) -> String {
    strip_enclosing_quotes(raw.trim()).to_string()
}

/// Remove one leading and one trailing double quote, each if present.
pub fn strip_enclosing_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

fn cell<'a>(row: &HashMap<&str, &'a str>, header: &str) -> &'a str {
    row.get(header).copied().unwrap_or("")
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
