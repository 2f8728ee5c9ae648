//! Cafe Handlers

use axum::extract::{Query, State};

use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List cafés for a city
///
/// `GET /cafe?city=<key>[&count=<n>][&search=<substring>]`
///
/// Responds with the comma-joined café names as plain text, or 400 with
/// "unknown city" / "incorrect count".
pub async fn list_cafes(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<String, AppError> {
    match state.cafes.find_cafes(&params) {
        Ok(list) => {
            metrics::record_lookup(list.cafes.len());
            Ok(list.render())
        }
        Err(e) => {
            metrics::record_rejection(e);
            Err(e.into())
        }
    }
}
