//! Upload rules for image files, enforced before any media-host call.

use crate::error::CoreError;

/// Maximum accepted image size (10 MiB).
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// MIME types the gallery and upload proxy accept.
pub const ALLOWED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];

/// Validate an inbound image's content type and size against the upload
/// rules. Runs before the file leaves the server.
pub fn validate_image(content_type: &str, size_bytes: usize) -> Result<(), CoreError> {
    if !ALLOWED_IMAGE_TYPES.contains(&content_type) {
        return Err(CoreError::Validation(
            "Only JPEG, PNG, WebP, and GIF images are allowed".into(),
        ));
    }
    if size_bytes > MAX_IMAGE_BYTES {
        return Err(CoreError::Validation(
            "File size must be less than 10MB".into(),
        ));
    }
    Ok(())
}
