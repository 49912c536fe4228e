//! Browser automation collaborator traits.
//!
//! The browser itself (launch, navigation, shutdown) is owned by an external
//! automation layer. Tollgate only walks the live object graph
//! session → contexts → pages and asks a page for pixels.

use async_trait::async_trait;
use std::sync::Arc;
use tollgate_core::ScreenshotOptions;
use tollgate_error::BrowserError;

/// A single tab or page.
#[async_trait]
pub trait BrowserPage: Send + Sync {
    /// Current URL of the page (`about:blank` for an empty tab).
    fn url(&self) -> String;

    /// Capture the visible viewport as encoded image bytes.
    async fn screenshot(&self, options: &ScreenshotOptions) -> Result<Vec<u8>, BrowserError>;
}

/// An isolated browsing context (profile) holding zero or more pages.
pub trait BrowsingContext: Send + Sync {
    /// Open pages, in creation order.
    fn pages(&self) -> Vec<Arc<dyn BrowserPage>>;
}

/// A connected browser.
pub trait BrowserSession: Send + Sync {
    /// Open browsing contexts, in creation order.
    fn contexts(&self) -> Vec<Arc<dyn BrowsingContext>>;
}
