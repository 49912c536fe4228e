//! Error types for the Tollgate library.
//!
//! This crate provides the error types shared by every Tollgate crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use tollgate_error::{ProviderError, ProviderErrorKind, TollgateResult};
//!
//! fn resolve() -> TollgateResult<String> {
//!     Err(ProviderError::new(ProviderErrorKind::MissingApiKey {
//!         provider: "OpenAI".to_string(),
//!         env_var: "OPENAI_API_KEY".to_string(),
//!     }))?
//! }
//!
//! let err = resolve().unwrap_err();
//! assert!(err.to_string().contains("OPENAI_API_KEY"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod browser;
mod config;
mod error;
mod models;
mod provider;
mod rate_limit;
mod storage;

pub use browser::{BrowserError, BrowserErrorKind};
pub use config::ConfigError;
pub use error::{TollgateError, TollgateErrorKind, TollgateResult};
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use provider::{ProviderError, ProviderErrorKind};
pub use rate_limit::{RateLimitError, RateLimitErrorKind};
pub use storage::{StorageError, StorageErrorKind};
