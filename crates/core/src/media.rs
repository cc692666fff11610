//! Media upload helpers: extension allow-list and raster dimension probe.

use crate::error::CoreError;

/// File extensions accepted by the upload endpoint.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "svg"];

/// Maximum accepted upload size (8 MiB).
pub const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// Width/height of an uploaded raster image, when determinable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Extract and validate the lowercase extension from an uploaded filename.
pub fn validate_extension(filename: &str) -> Result<String, CoreError> {
    let ext = filename
        .rsplit('.')
        .next()
        .filter(|e| *e != filename)
        .map(str::to_lowercase)
        .unwrap_or_default();

    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported file type '{ext}'. Allowed: {ALLOWED_EXTENSIONS:?}"
        )))
    }
}

/// Probe raster dimensions from in-memory image bytes.
///
/// Returns `None` for SVG (vector, no intrinsic pixel size) and for bytes
/// the image crate cannot decode. Decoding failures are not fatal: the
/// file is still stored, just without dimension metadata.
pub fn probe_dimensions(ext: &str, bytes: &[u8]) -> Option<ImageDimensions> {
    if ext == "svg" {
        return None;
    }

    let reader = image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .ok()?;
    let (width, height) = reader.into_dimensions().ok()?;
    Some(ImageDimensions { width, height })
}
