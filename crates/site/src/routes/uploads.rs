//! Serving uploaded room photos.

use axum::{
    extract::{Path, State},
    http::header,
    response::{AppendHeaders, IntoResponse},
};
use ecobid_core::PhotoId;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Serve an uploaded photo's bytes with its stored content type.
///
/// Expired and unknown ids are 404s; the photo pages hide previews that
/// fail to load.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = id
        .parse::<uuid::Uuid>()
        .map(PhotoId::from)
        .map_err(|_| AppError::NotFound(format!("photo {id}")))?;

    let photo = state
        .photos()
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("photo {id}")))?;

    Ok((
        AppendHeaders([
            (header::CONTENT_TYPE, photo.content_type),
            (header::CACHE_CONTROL, "private, max-age=3600".to_string()),
        ]),
        photo.bytes,
    ))
}
