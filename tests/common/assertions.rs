//! Domain-specific assertion macros for cadop harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which search or lookup invariant was violated.

use cadop::query::record_matches;
use cadop::{Record, Table};

/// Assert that a record carries the expected registry id.
///
/// ```rust
/// assert_registry_id!(record, "00123");
/// ```
#[macro_export]
macro_rules! assert_registry_id {
    ($record:expr, $id:expr) => {{
        let record: &cadop::Record = &$record;
        let expected: &str = $id;
        match record.registry_id.as_deref() {
            Some(actual) if actual == expected => {}
            other => panic!(
                "assert_registry_id! failed:\n  expected: {:?}\n  actual:   {:?}\n  record: {:?}",
                expected, other, record
            ),
        }
    }};
}

/// Assert that a JSON body has no NaN placeholders anywhere.
#[macro_export]
macro_rules! assert_no_nan {
    ($json:expr) => {{
        let text = $json.to_string().to_lowercase();
        assert!(
            !text.contains("\"nan\"") && !text.contains(":nan"),
            "assert_no_nan! failed: body contains a NaN placeholder:\n  {}",
            text
        );
    }};
}

/// Assert that `results` is exactly the first `results.len()` records of
/// `table` that match `term`, in table order.
pub fn assert_prefix_of_matches(table: &Table, term: &str, results: &[&Record]) {
    let expected: Vec<&Record> = table
        .iter()
        .filter(|r| record_matches(r, term))
        .take(results.len())
        .collect();
    pretty_assertions::assert_eq!(
        expected.as_slice(),
        results,
        "results are not a prefix of the matching records for {:?}",
        term
    );
}
