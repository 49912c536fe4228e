//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tollgate - rate-limited access to chat model providers
#[derive(Parser, Debug)]
#[command(name = "tollgate")]
#[command(about = "Rate-limited access to chat model providers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List supported providers and their settings
    Providers,

    /// Resolve a provider and show the resulting client settings
    Resolve {
        /// Provider id (e.g. openai, anthropic, ollama)
        provider: String,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Send one prompt to a provider
    Chat {
        /// Provider id (e.g. openai, anthropic, ollama)
        provider: String,

        /// Prompt text
        prompt: String,

        /// System prompt
        #[arg(long)]
        system: Option<String>,

        /// Maximum tokens to generate
        #[arg(long)]
        max_tokens: Option<u32>,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Show the newest finished file per extension in a directory
    Latest {
        /// Directory to search (created if missing)
        dir: PathBuf,

        /// Extension to look for, with leading dot (repeatable)
        #[arg(long = "ext")]
        extensions: Vec<String>,
    },

    /// Print a file base64-encoded
    EncodeImage {
        /// Image file
        path: PathBuf,
    },

    /// Show the rate limiter configuration
    Limiter,
}

/// Options shared by commands that resolve a provider
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Model name (provider default when omitted)
    #[arg(long)]
    pub model: Option<String>,

    /// API key (environment when omitted)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Base URL (environment or provider default when omitted)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,
}
