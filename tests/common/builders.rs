//! Test builders — ergonomic constructors for `Record`, `Table`, and services.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use cadop::{Field, QueryService, Record, Table};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Record`] test fixtures.
///
/// ```rust
/// let record = RecordBuilder::new("00123")
///     .field(Field::LegalName, "ACME SAUDE")
///     .field(Field::City, "Recife")
///     .build();
/// ```
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new(registry_id: impl Into<String>) -> Self {
        let mut record = Record::default();
        record.set(Field::RegistryId, Some(registry_id.into()));
        Self { record }
    }

    pub fn field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.record.set(field, Some(value.into()));
        self
    }

    pub fn legal_name(self, value: impl Into<String>) -> Self {
        self.field(Field::LegalName, value)
    }

    pub fn build(self) -> Record {
        self.record
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a record with only an id and a legal name.
pub fn operator(registry_id: &str, legal_name: &str) -> Record {
    RecordBuilder::new(registry_id).legal_name(legal_name).build()
}

/// Wrap records in a shared service, as the server holds it.
pub fn service_of(records: Vec<Record>) -> Arc<QueryService> {
    Arc::new(QueryService::new(Table::new(records)))
}

/// Build `n` operators named `OPERADORA <i>` with zero-padded ids.
pub fn build_operators(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| operator(&format!("{i:05}"), &format!("OPERADORA {i}")))
        .collect()
}
