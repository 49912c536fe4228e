//! File and browser helpers for Tollgate.
//!
//! - [`encode_image`] base64-encodes an image file
//! - [`ArtifactScanner`] and [`latest_files`] find the newest finished
//!   recording and trace files in an output directory
//! - [`capture_screenshot`] grabs the active page of a browser session

mod artifacts;
mod image;
mod screenshot;

pub use artifacts::{ArtifactScanner, DEFAULT_EXTENSIONS, DEFAULT_SETTLE_TIME, latest_files};
pub use image::encode_image;
pub use screenshot::capture_screenshot;
