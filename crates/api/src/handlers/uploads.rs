//! Media upload and deletion handlers.
//!
//! Uploaded files land under `MEDIA_ROOT` with a fresh UUID filename
//! (original names are untrusted) and are served back via the `/media`
//! static route.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::media::{self, MAX_UPLOAD_BYTES};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public URL path, e.g. `/media/3f2a....png`.
    pub url: String,
    pub filename: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub size_bytes: usize,
}

/// POST /api/v1/uploads
///
/// Accepts a single multipart `file` field. Extension is checked against
/// the allow-list; raster dimensions are probed best-effort.
pub async fn upload(
    State(state): State<AppState>,
    _auth: AuthUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::BadRequest("Missing filename".to_string()))?;

        let ext = media::validate_extension(&original_name)?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

        if bytes.is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Uploaded file is empty".to_string(),
            )));
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::Core(CoreError::Validation(format!(
                "File exceeds maximum size of {MAX_UPLOAD_BYTES} bytes"
            ))));
        }

        let dims = media::probe_dimensions(&ext, &bytes);

        let filename = format!("{}.{ext}", Uuid::new_v4().simple());
        let dest = state.config.media_root.join(&filename);
        tokio::fs::write(&dest, &bytes).await?;

        tracing::info!(filename = %filename, size = bytes.len(), "Media file stored");

        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                url: format!("/media/{filename}"),
                filename,
                width: dims.map(|d| d.width),
                height: dims.map(|d| d.height),
                size_bytes: bytes.len(),
            }),
        ));
    }

    Err(AppError::BadRequest(
        "Multipart body must contain a 'file' field".to_string(),
    ))
}

/// DELETE /api/v1/uploads/{filename}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(filename): Path<String>,
) -> AppResult<StatusCode> {
    // Stored names are UUID-based; anything with a path separator is an
    // attempted traversal, not a file we created.
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return Err(AppError::BadRequest("Invalid filename".to_string()));
    }

    let target = state.config.media_root.join(&filename);
    match tokio::fs::remove_file(&target).await {
        Ok(()) => {
            tracing::info!(filename = %filename, "Media file deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AppError::Core(
            CoreError::Validation(format!("No such media file: {filename}")),
        )),
        Err(e) => Err(AppError::MediaStore(e)),
    }
}
