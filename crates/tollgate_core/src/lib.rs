//! Core data types for the Tollgate library.
//!
//! This crate provides the plain data types shared by the chat model clients,
//! the browser collaborator traits and the CLI.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capture;
mod message;
mod request;
mod role;
mod telemetry;

pub use capture::{ImageFormat, ScreenshotOptions, ScreenshotScale};
pub use message::Message;
pub use request::{ChatRequest, ChatResponse, Usage};
pub use role::Role;
pub use telemetry::init_tracing;
