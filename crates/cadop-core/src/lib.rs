//! cadop-core — registry loading and query layers.
//!
//! This crate exposes the two layers of the service as public modules, plus
//! the shared types and error taxonomy.
//!
//! # Architecture
//!
//! ```text
//! Loader ──► Table ──► QueryService ──► HTTP (cadop-server)
//! ```
//!
//! The loader runs once at startup. The resulting [`Table`] is owned by the
//! [`QueryService`](query::QueryService) and never mutated afterwards.

pub mod config;
pub mod error;
pub mod loader;
pub mod query;
pub mod types;

pub use error::{LoadError, QueryError};
pub use loader::Loader;
pub use query::{QueryService, SearchResult};
pub use types::{Field, Record, Table};
