//! cadop — search service over the health-plan operator registry.
//!
//! Re-exports the core and server crates so integration tests and benches
//! can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! Loader ──► Table ──► QueryService ──► Router (axum)
//! ```
//!
//! The registry file is read once at startup. If that fails the service
//! still starts with an empty table and every search reports 500.

pub use cadop_core::{config, error, loader, query, types};
pub use cadop_core::{Field, LoadError, Loader, QueryError, QueryService, Record, SearchResult, Table};
pub use cadop_server::{router, serve};
