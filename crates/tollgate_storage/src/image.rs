//! Base64 encoding of image files.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;
use tollgate_error::{StorageError, StorageErrorKind};
use tracing::{debug, instrument};

/// Read a file and return its contents base64-encoded (standard alphabet).
///
/// Returns `Ok(None)` when no path is given.
///
/// # Errors
///
/// Returns [`StorageErrorKind::FileRead`] if the file cannot be read.
///
/// # Examples
///
/// ```
/// use tollgate_storage::encode_image;
///
/// assert_eq!(encode_image(None).unwrap(), None);
/// ```
#[instrument]
pub fn encode_image(path: Option<&Path>) -> Result<Option<String>, StorageError> {
    let Some(path) = path else {
        return Ok(None);
    };

    let bytes = std::fs::read(path).map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    debug!(size = bytes.len(), "Encoding image");
    Ok(Some(STANDARD.encode(bytes)))
}
