//! Tollgate - shared request admission and chat provider resolution.
//!
//! Tollgate keeps every outbound LLM request in a process under one rolling
//! per-minute quota, and turns a provider id plus a few options into a ready
//! chat client.
//!
//! # Quick Start
//!
//! ```no_run
//! use tollgate::{ChatDriver, ChatRequest, ProviderOptions, ProviderRegistry, RateLimiter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // One limiter per process, shared by every client.
//!     let limiter = RateLimiter::from_env()?;
//!     let registry = ProviderRegistry::with_defaults().with_limiter(limiter);
//!
//!     let model = registry.resolve("anthropic", &ProviderOptions::default())?;
//!     let response = model.generate(&ChatRequest::prompt("Hello, world!")).await?;
//!     println!("{}", response.content);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `tollgate_error` - Error types
//! - `tollgate_core` - Chat messages, requests and screenshot options
//! - `tollgate_interface` - `ChatDriver` and browser collaborator traits
//! - `tollgate_rate_limit` - Rolling-window rate limiter and its configuration
//! - `tollgate_models` - Provider resolution and HTTP chat clients
//! - `tollgate_storage` - Image encoding, artifact discovery, screenshots
//!
//! This crate re-exports everything for convenience.

pub use tollgate_core::*;
pub use tollgate_error::*;
pub use tollgate_interface::*;
pub use tollgate_models::*;
pub use tollgate_rate_limit::*;
pub use tollgate_storage::*;
