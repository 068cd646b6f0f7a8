//! Recognition endpoint

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::{RecognizeRequest, RecognizeResponse};
use crate::AppState;

/// POST /api/recognize
/// Matches text fragments read off a card photo against the catalog
pub async fn recognize(
    State(state): State<AppState>,
    Json(payload): Json<RecognizeRequest>,
) -> Result<Json<RecognizeResponse>> {
    let limits = state.limits;

    if payload.fragments.len() > limits.max_fragments {
        tracing::warn!(
            "Rejected recognize request with {} fragments (max {})",
            payload.fragments.len(),
            limits.max_fragments
        );
        return Err(ApiError::BadRequest(format!(
            "at most {} fragments are accepted, got {}",
            limits.max_fragments,
            payload.fragments.len()
        )));
    }

    // Length is counted in chars, not bytes
    if let Some((index, len)) = payload
        .fragments
        .iter()
        .map(|f| f.chars().count())
        .enumerate()
        .find(|(_, len)| *len > limits.max_fragment_chars)
    {
        tracing::warn!(
            "Rejected recognize request with a {}-char fragment (max {})",
            len,
            limits.max_fragment_chars
        );
        return Err(ApiError::BadRequest(format!(
            "fragment {} has {} characters, at most {} are accepted",
            index, len, limits.max_fragment_chars
        )));
    }

    let matcher = state.matcher.clone();
    let fragments = payload.fragments;
    let result = tokio::task::spawn_blocking(move || matcher.recognize(fragments.as_slice()))
        .await
        .map_err(|e| ApiError::Internal(format!("recognition task failed: {}", e)))?;

    tracing::debug!(
        "Recognized player={:?} team={:?} confidence={:.3}",
        result.player_name,
        result.team_name,
        result.confidence
    );

    Ok(Json(RecognizeResponse::from(result)))
}
