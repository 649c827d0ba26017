//! Route handlers for `/search` and `/details/{registry_id}`.
//!
//! The table scan runs on the blocking pool. A panic inside it surfaces as a
//! join error and is reported as a 500, never as a dropped connection.
//! Extractor rejections are answered with JSON bodies as well.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Response},
};
use cadop_core::{query::normalize_term, QueryError, QueryService};

use crate::response::{invalid_registry_id, invalid_search, json_ok, ApiError};

/// Query string as ordered key/value pairs, so repeated keys are not an error.
pub type QueryPairs = Vec<(String, String)>;

/// The first `term` in the query string. Missing `term` behaves like an
/// empty one and is rejected as too short.
pub fn first_term(pairs: QueryPairs) -> String {
    pairs
        .into_iter()
        .find_map(|(key, value)| (key == "term").then_some(value))
        .unwrap_or_default()
}

pub async fn handle_search(
    State(service): State<Arc<QueryService>>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let term = match params {
        Ok(Query(pairs)) => first_term(pairs),
        Err(rejection) => return invalid_search(&rejection.body_text()),
    };
    let echoed = normalize_term(&term);

    let outcome = tokio::task::spawn_blocking(move || {
        let result = service.search(&term)?;
        serde_json::to_vec(&result).map_err(|e| QueryError::Internal {
            details: e.to_string(),
            term: Some(result.term.clone()),
        })
    })
    .await
    .unwrap_or_else(|e| {
        Err(QueryError::Internal {
            details: e.to_string(),
            term: Some(echoed),
        })
    });

    match outcome {
        Ok(body) => json_ok(body),
        Err(err) => ApiError(err).into_response(),
    }
}

pub async fn handle_details(
    State(service): State<Arc<QueryService>>,
    registry_id: Result<Path<String>, PathRejection>,
) -> Response {
    let registry_id = match registry_id {
        Ok(Path(registry_id)) => registry_id,
        Err(rejection) => return invalid_registry_id(&rejection.body_text()),
    };

    let outcome = tokio::task::spawn_blocking(move || {
        let record = service.lookup(&registry_id)?;
        tracing::info!(registry_id = %registry_id.trim(), "details");
        serde_json::to_vec(record).map_err(|e| QueryError::Internal {
            details: e.to_string(),
            term: None,
        })
    })
    .await
    .unwrap_or_else(|e| {
        Err(QueryError::Internal {
            details: e.to_string(),
            term: None,
        })
    });

    match outcome {
        Ok(body) => json_ok(body),
        Err(err) => ApiError(err).into_response(),
    }
}
