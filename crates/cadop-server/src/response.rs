//! JSON response bodies and the mapping from [`QueryError`] to HTTP.
//!
//! Every error body is an object with an `error` message plus the context
//! the failed operation echoes back.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use cadop_core::{QueryError, Record};
use serde::Serialize;

const SEARCH_INTERNAL_MESSAGE: &str = "internal server error";
const LOOKUP_INTERNAL_MESSAGE: &str = "failed to fetch details";
const INVALID_SEARCH_MESSAGE: &str = "invalid search request";
const INVALID_REGISTRY_ID_MESSAGE: &str = "invalid registry id";

/// Error body for `/search`. Same shape for 400 and 500.
#[derive(Debug, Serialize)]
struct SearchErrorBody<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
    term: &'a str,
    count: usize,
    results: &'static [Record],
}

#[derive(Debug, Serialize)]
struct NotFoundBody<'a> {
    error: String,
    registry_id: &'a str,
}

/// `{error, details}` body shared by lookup failures that carry no id.
#[derive(Debug, Serialize)]
struct DetailsBody<'a> {
    error: &'static str,
    details: &'a str,
}

/// A [`QueryError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub QueryError);

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match &self.0 {
            QueryError::TermTooShort { term, .. } | QueryError::DataUnavailable { term } => {
                let body = SearchErrorBody {
                    error: self.0.to_string(),
                    details: None,
                    term,
                    count: 0,
                    results: &[],
                };
                (status, Json(body)).into_response()
            }
            QueryError::Internal {
                details,
                term: Some(term),
            } => {
                tracing::error!(term = %term, details = %details, "search failed");
                let body = SearchErrorBody {
                    error: SEARCH_INTERNAL_MESSAGE.to_string(),
                    details: Some(details.as_str()),
                    term,
                    count: 0,
                    results: &[],
                };
                (status, Json(body)).into_response()
            }
            QueryError::Internal {
                details,
                term: None,
            } => {
                tracing::error!(details = %details, "lookup failed");
                let body = DetailsBody {
                    error: LOOKUP_INTERNAL_MESSAGE,
                    details,
                };
                (status, Json(body)).into_response()
            }
            QueryError::NotFound { registry_id } => {
                let body = NotFoundBody {
                    error: self.0.to_string(),
                    registry_id,
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

/// 400 for a `/search` query string that could not be parsed.
pub fn invalid_search(details: &str) -> Response {
    tracing::debug!(details, "rejected search request");
    let body = SearchErrorBody {
        error: INVALID_SEARCH_MESSAGE.to_string(),
        details: Some(details),
        term: "",
        count: 0,
        results: &[],
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// 400 for a `/details` path segment that could not be decoded.
pub fn invalid_registry_id(details: &str) -> Response {
    tracing::debug!(details, "rejected details request");
    let body = DetailsBody {
        error: INVALID_REGISTRY_ID_MESSAGE,
        details,
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// 200 response around an already serialised JSON body.
///
/// Bodies are rendered inside the blocking scan so records keep their
/// declared field order.
pub fn json_ok(body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
