//! Trait definitions for the Tollgate library.
//!
//! These traits mark the seams where Tollgate meets code it does not own:
//! chat model backends, and the browser automation layer that screenshots
//! are taken from.

mod browser;
mod driver;

pub use browser::{BrowserPage, BrowserSession, BrowsingContext};
pub use driver::ChatDriver;
