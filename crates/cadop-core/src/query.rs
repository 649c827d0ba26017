//! Query layer — substring search and exact registry lookup over a [`Table`].
//!
//! The service owns the table for the life of the process and only ever
//! reads it, so a single instance can be shared across request handlers
//! behind an `Arc` with no locking.

use serde::Serialize;

use crate::error::QueryError;
use crate::types::{Record, Table};

/// Shortest accepted search term, in characters, after trimming.
pub const MIN_TERM_CHARS: usize = 2;

/// Upper bound on the number of records a search returns.
pub const MAX_RESULTS: usize = 100;

/// Successful search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<'a> {
    /// The normalised (trimmed, lower-cased) term.
    pub term: String,
    /// Number of records in `results`.
    pub count: usize,
    pub results: Vec<&'a Record>,
}

/// Read-only query service over a loaded table.
#[derive(Debug, Clone, Default)]
pub struct QueryService {
    table: Table,
}

impl QueryService {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Case-insensitive substring search across every retained field.
    ///
    /// Returns at most [`MAX_RESULTS`] records, in table order.
    pub fn search(&self, raw_term: &str) -> Result<SearchResult<'_>, QueryError> {
        let term = normalize_term(raw_term);

        if term.chars().count() < MIN_TERM_CHARS {
            return Err(QueryError::TermTooShort {
                term,
                min: MIN_TERM_CHARS,
            });
        }
        if self.table.is_empty() {
            return Err(QueryError::DataUnavailable { term });
        }

        let results: Vec<&Record> = self
            .table
            .iter()
            .filter(|record| record_matches(record, &term))
            .take(MAX_RESULTS)
            .collect();

        tracing::info!(term = %term, count = results.len(), "search");
        Ok(SearchResult {
            count: results.len(),
            term,
            results,
        })
    }

    /// Exact match on `registry_id`. The first record in table order wins.
    pub fn lookup(&self, raw_id: &str) -> Result<&Record, QueryError> {
        let registry_id = raw_id.trim();
        let found = self
            .table
            .iter()
            .find(|record| record.registry_id.as_deref() == Some(registry_id));

        tracing::debug!(registry_id, found = found.is_some(), "lookup");
        found.ok_or_else(|| QueryError::NotFound {
            registry_id: registry_id.to_string(),
        })
    }
}

/// Trim and lower-case a raw search term.
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True when any field of `record` contains the already lower-cased `term`.
pub fn record_matches(record: &Record, term: &str) -> bool {
    record
        .search_fields()
        .any(|value| !value.is_empty() && value.to_lowercase().contains(term))
}
