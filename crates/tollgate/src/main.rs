//! Tollgate CLI binary.
//!
//! This binary provides command-line access to Tollgate's functionality:
//! - Inspect supported providers and how they resolve
//! - Send rate-limited chat requests
//! - Locate recordings and encode images

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use cli::{
        Cli, Commands, list_providers, run_chat, show_encoded, show_latest, show_limiter,
        show_resolution,
    };

    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    tollgate::init_tracing(cli.verbose)?;

    // One limiter for the whole process
    let limiter = tollgate::RateLimiter::from_env()?;

    // Execute the requested command
    match cli.command {
        Commands::Providers => list_providers()?,

        Commands::Resolve { provider, model } => show_resolution(&provider, &model)?,

        Commands::Chat {
            provider,
            prompt,
            system,
            max_tokens,
            model,
        } => {
            run_chat(
                &limiter,
                &provider,
                &prompt,
                system.as_deref(),
                max_tokens,
                &model,
            )
            .await?
        }

        Commands::Latest { dir, extensions } => show_latest(&dir, &extensions)?,

        Commands::EncodeImage { path } => show_encoded(&path)?,

        Commands::Limiter => show_limiter(&limiter)?,
    }

    Ok(())
}
