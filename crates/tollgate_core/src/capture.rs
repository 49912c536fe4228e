//! Screenshot capture parameters.

use serde::{Deserialize, Serialize};

/// Encoded image format for a screenshot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// JPEG (lossy, honours `quality`)
    #[display("jpeg")]
    Jpeg,
}

/// Pixel scale a screenshot is captured at.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ScreenshotScale {
    /// One image pixel per CSS pixel
    #[display("css")]
    Css,
}

/// What a browser page should produce when asked for a screenshot.
///
/// The default is a CSS-scaled JPEG at quality 75.
///
/// # Examples
///
/// ```
/// use tollgate_core::{ImageFormat, ScreenshotOptions, ScreenshotScale};
///
/// let opts = ScreenshotOptions::default();
/// assert_eq!(opts.format, ImageFormat::Jpeg);
/// assert_eq!(opts.quality, Some(75));
/// assert_eq!(opts.scale, ScreenshotScale::Css);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenshotOptions {
    /// Output encoding
    pub format: ImageFormat,
    /// JPEG quality 0-100
    pub quality: Option<u8>,
    /// Capture scale
    pub scale: ScreenshotScale,
}

impl Default for ScreenshotOptions {
    fn default() -> Self {
        Self {
            format: ImageFormat::Jpeg,
            quality: Some(75),
            scale: ScreenshotScale::Css,
        }
    }
}
