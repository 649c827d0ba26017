//! Loader — reads the `;`-delimited registry file once into a [`Table`].
//!
//! The header row is trimmed and projected onto [`Field::ALL`]; every other
//! column is dropped. Identifier-like columns are kept as trimmed strings so
//! leading zeros are never lost. Blank values become `None`.
//!
//! [`Loader::load`] never fails: any problem is logged and an empty table is
//! returned so the service can still start.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};

use crate::error::{LoadError, Result};
use crate::types::{Field, Record, Table};

/// Field separator used by the registry export.
pub const DELIMITER: u8 = b';';

/// Raw column holding the registration date. Parsed but not part of the
/// retained field set.
pub const REGISTRATION_DATE_HEADER: &str = "Data_Registro_ANS";

/// Day-first formats accepted for the registration date, tried in order.
const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"];

/// Placeholder cells that mean "no value" in spreadsheet exports.
pub const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Loads the registry file at a fixed path.
#[derive(Debug, Clone)]
pub struct Loader {
    path: PathBuf,
}

impl Loader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the table, logging and swallowing any failure.
    pub fn load(&self) -> Table {
        match self.try_load() {
            Ok(table) => table,
            Err(err) => {
                tracing::error!(path = %self.path.display(), error = %err, "failed to load registry");
                Table::empty()
            }
        }
    }

    /// Load the table, reporting the first failure.
    pub fn try_load(&self) -> Result<Table> {
        let file = File::open(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::FileNotFound {
                    path: self.path.clone(),
                }
            } else {
                LoadError::FileRead {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;

        let table = load_from_reader(file)?;
        tracing::info!(
            path = %self.path.display(),
            records = table.len(),
            "registry loaded"
        );
        Ok(table)
    }
}

/// Column positions of the retained fields within one header row.
#[derive(Debug)]
struct ColumnMap {
    fields: Vec<(Field, usize)>,
    registration_date: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let position = |wanted: &str| names.iter().position(|name| name == wanted);

        let mut fields = Vec::with_capacity(Field::ALL.len());
        let mut missing = Vec::new();
        for field in Field::ALL {
            match position(field.header()) {
                Some(idx) => fields.push((field, idx)),
                None => missing.push(field.header().to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(LoadError::MissingColumns { columns: missing });
        }

        Ok(Self {
            fields,
            registration_date: position(REGISTRATION_DATE_HEADER),
        })
    }

    fn project(&self, row: &StringRecord) -> Record {
        let mut record = Record::default();
        for &(field, idx) in &self.fields {
            record.set(field, row.get(idx).and_then(|raw| normalize_value(field, raw)));
        }
        record.registration_date = self
            .registration_date
            .and_then(|idx| row.get(idx))
            .and_then(parse_registration_date);
        record
    }
}

/// Load a table from any reader producing `;`-delimited UTF-8 text.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        tracing::warn!("registry source is empty");
        return Ok(Table::empty());
    }

    let columns = ColumnMap::resolve(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        records.push(columns.project(&row?));
    }

    // Second pass over the identifier columns, independent of how the
    // parser typed them.
    for record in &mut records {
        normalize_identifiers(record);
    }

    let table = Table::new(records);
    log_summary(&table);
    Ok(table)
}

/// Trim a header name and strip a leading byte-order mark.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Turn a raw cell into the stored value for `field`.
///
/// Identifier fields are trimmed; other fields are kept verbatim. Blank
/// cells and [`NA_TOKENS`] placeholders of either kind become `None`.
pub fn normalize_value(field: Field, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || NA_TOKENS.contains(&trimmed) {
        return None;
    }
    if field.is_identifier() {
        Some(trimmed.to_string())
    } else {
        Some(raw.to_string())
    }
}

/// Re-apply identifier normalisation to an already projected record.
pub fn normalize_identifiers(record: &mut Record) {
    for field in Field::ALL.into_iter().filter(|f| f.is_identifier()) {
        let value = record
            .get(field)
            .and_then(|v| normalize_value(field, v));
        record.set(field, value);
    }
}

/// Parse a registration date day-first (`DD/MM/YYYY` or `DD-MM-YYYY`).
/// ISO `YYYY-MM-DD` is accepted as well.
pub fn parse_registration_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok());
    if parsed.is_none() {
        tracing::debug!(value = raw, "unparseable registration date");
    }
    parsed
}

fn log_summary(table: &Table) {
    let columns: Vec<String> = Field::ALL.iter().map(ToString::to_string).collect();
    tracing::info!(records = table.len(), columns = ?columns, "registry normalised");
    if let Some(sample) = table.records().first() {
        match serde_json::to_string(sample) {
            Ok(json) => tracing::debug!(sample = %json, "sample record"),
            Err(err) => tracing::debug!(error = %err, "could not render sample record"),
        }
    }
}
