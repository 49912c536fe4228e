//! Single-prompt chat handler.

use super::commands::ModelArgs;
use tollgate::{ChatDriver, ChatRequest, Message, ProviderRegistry, RateLimiter, TollgateResult};
use tracing::instrument;

/// Send one prompt through the shared limiter and print the answer.
#[instrument(skip(limiter, prompt, system, args))]
pub async fn run_chat(
    limiter: &RateLimiter,
    provider: &str,
    prompt: &str,
    system: Option<&str>,
    max_tokens: Option<u32>,
    args: &ModelArgs,
) -> TollgateResult<()> {
    let registry = ProviderRegistry::with_defaults().with_limiter(limiter.clone());
    let model = registry.resolve(provider, &args.to_options())?;

    let mut messages = Vec::new();
    if let Some(system) = system {
        messages.push(Message::system(system));
    }
    messages.push(Message::user(prompt));

    let mut request = ChatRequest::new(messages);
    if let Some(max_tokens) = max_tokens {
        request = request.with_max_tokens(max_tokens);
    }

    let response = model.generate(&request).await?;

    if let Some(reasoning) = &response.reasoning {
        println!("Reasoning:");
        println!("{}", reasoning);
        println!("{:-<80}", "");
    }
    println!("{}", response.content);

    if let Some(usage) = response.usage {
        tracing::info!(
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            model = %model.model_name(),
            "Chat completed"
        );
    }
    Ok(())
}
