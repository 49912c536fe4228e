//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the tollgate binary.

mod chat;
mod commands;
mod files;
mod limiter;
mod providers;

pub use chat::run_chat;
pub use commands::{Cli, Commands};
pub use files::{show_encoded, show_latest};
pub use limiter::show_limiter;
pub use providers::{list_providers, show_resolution};
