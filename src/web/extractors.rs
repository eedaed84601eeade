//! Request extractors and validation

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use crate::config::defaults::{MAX_QUERY_LENGTH, MIN_QUERY_LENGTH};
use crate::errors::{AppError, AppResult};

/// Name of the search query string parameter
pub const QUERY_PARAM: &str = "q";

/// First value of `name` among decoded query pairs
///
/// Repeated parameters resolve to their first occurrence.
pub fn first_param<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// A search query that passed validation
///
/// Holds the query as submitted; matching does its own normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery(pub String);

impl ValidatedQuery {
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Check a raw `q` parameter against the query bounds
///
/// Bounds count characters of the trimmed query, so multi-byte names are
/// measured the way users type them.
pub fn validate_query(raw: Option<&str>) -> AppResult<ValidatedQuery> {
    let query = match raw {
        Some(q) if !q.is_empty() => q,
        _ => return Err(AppError::validation("Query parameter is required")),
    };

    let length = query.trim().chars().count();
    if length < MIN_QUERY_LENGTH {
        return Err(AppError::validation(format!(
            "Query must be at least {} characters",
            MIN_QUERY_LENGTH
        )));
    }
    if length > MAX_QUERY_LENGTH {
        return Err(AppError::validation("Query too long"));
    }

    Ok(ValidatedQuery(query.to_string()))
}

#[async_trait]
impl<S> FromRequestParts<S> for ValidatedQuery
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // An undecodable query string is treated as carrying no `q`
        let pairs = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        validate_query(first_param(&pairs, QUERY_PARAM)).map_err(|e| e.into_response())
    }
}
