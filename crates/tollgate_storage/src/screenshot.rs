//! Screenshot capture from a live browser session.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::sync::Arc;
use tollgate_core::ScreenshotOptions;
use tollgate_interface::{BrowserPage, BrowserSession};
use tracing::{debug, instrument, warn};

const BLANK_PAGE: &str = "about:blank";

/// Capture the active page of `browser` as a base64-encoded JPEG.
///
/// The first browsing context is used. Within it, the first page not showing
/// `about:blank` is chosen, falling back to the first page. The image is a
/// CSS-scaled JPEG at quality 75.
///
/// Returns `None` when there is no browser, context or page, or when the
/// capture fails.
#[instrument(skip(browser), fields(has_browser = browser.is_some()))]
pub async fn capture_screenshot(browser: Option<&dyn BrowserSession>) -> Option<String> {
    let Some(browser) = browser else {
        debug!("No browser session, skipping screenshot");
        return None;
    };

    let Some(context) = browser.contexts().into_iter().next() else {
        debug!("Browser has no contexts, skipping screenshot");
        return None;
    };

    let pages = context.pages();
    let Some(page) = active_page(&pages) else {
        debug!("Browser context has no pages, skipping screenshot");
        return None;
    };

    match page.screenshot(&ScreenshotOptions::default()).await {
        Ok(bytes) => {
            debug!(url = %page.url(), size = bytes.len(), "Captured screenshot");
            Some(STANDARD.encode(bytes))
        }
        Err(e) => {
            warn!(url = %page.url(), error = %e, "Screenshot capture failed");
            None
        }
    }
}

fn active_page(pages: &[Arc<dyn BrowserPage>]) -> Option<&Arc<dyn BrowserPage>> {
    pages
        .iter()
        .find(|page| page.url() != BLANK_PAGE)
        .or_else(|| pages.first())
}
