//! Student search and stats handlers

use axum::{extract::State, response::Response};
use tracing::info;

use crate::errors::AppResult;
use crate::models::StudentSummary;
use crate::services::search;
use crate::web::{
    extractors::ValidatedQuery,
    responses::{ok, SearchResponse, StatsResponse},
    AppState,
};

/// `GET /api/search?q=...`
///
/// Returns the records matching the query, projected to their public fields.
pub async fn search_students(
    State(state): State<AppState>,
    query: ValidatedQuery,
) -> AppResult<Response> {
    let query = query.into_inner();
    let snapshot = state.record_store.get_records().await?;

    let outcome = search(snapshot.records(), &query);
    let results: Vec<StudentSummary> = outcome
        .records
        .iter()
        .map(|record| StudentSummary::from(*record))
        .collect();

    info!(
        phase = outcome.phase.as_str(),
        matches = results.len(),
        "Search completed"
    );

    Ok(ok(SearchResponse::new(query, results, snapshot.len())))
}

/// `POST /api/search`
///
/// Reports the size of the table and the configured cohort label.
pub async fn student_stats(State(state): State<AppState>) -> AppResult<Response> {
    let snapshot = state.record_store.get_records().await?;

    Ok(ok(StatsResponse::new(
        snapshot.len(),
        state.config.lookup.cohort_label.clone(),
    )))
}
