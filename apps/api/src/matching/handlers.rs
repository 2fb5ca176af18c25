//! Axum route handlers for the Matching API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::matching::ranker::rank_catalog;
use crate::models::job::RankedMatches;
use crate::state::AppState;

/// Multipart field the client uploads the résumé PDF under.
const RESUME_FIELD: &str = "resume";

/// POST /match
///
/// Accepts a multipart form with the résumé PDF in the `resume` field,
/// extracts its text and ranks every catalog posting against it. The full
/// pipeline runs per request; nothing is cached between uploads.
pub async fn handle_match(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<RankedMatches>, AppError> {
    let bytes = read_resume_field(multipart).await?;
    info!("received resume upload ({} bytes)", bytes.len());

    let resume_text = state.extractor.extract(&bytes).await?;
    let ranked = rank_catalog(&state.catalog, &resume_text)?;

    info!(
        "ranked {} postings, best match {:?} at {:.1}",
        ranked.all_matches.len(),
        ranked.best_match.title,
        ranked.best_match.score
    );

    Ok(Json(ranked))
}

/// Pulls the bytes of the `resume` field out of the form, ignoring every
/// other field. A form without it is a client error.
async fn read_resume_field(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        if field.name() == Some(RESUME_FIELD) {
            return field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(e.to_string()));
        }
    }

    Err(AppError::MissingResume)
}
