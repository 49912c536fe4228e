//! Provider listing and resolution handlers.

use super::commands::ModelArgs;
use std::str::FromStr;
use tollgate::{
    ChatModelSettings, ProcessEnv, ProviderError, ProviderErrorKind, ProviderKind,
    ProviderOptions, TollgateResult, model_names,
};

impl ModelArgs {
    /// Option bag for provider resolution.
    pub fn to_options(&self) -> ProviderOptions {
        let mut options = ProviderOptions::default();
        if let Some(model) = &self.model {
            options = options.with_model_name(model.clone());
        }
        if let Some(api_key) = &self.api_key {
            options = options.with_api_key(api_key.clone());
        }
        if let Some(base_url) = &self.base_url {
            options = options.with_base_url(base_url.clone());
        }
        if let Some(temperature) = self.temperature {
            options = options.with_temperature(temperature);
        }
        options
    }
}

/// Print every supported provider with its settings.
pub fn list_providers() -> TollgateResult<()> {
    for kind in ProviderKind::all() {
        println!("{} ({})", kind, kind.display_name());
        println!(
            "  api key:       {}",
            kind.api_key_var().unwrap_or("(not required)")
        );
        println!(
            "  endpoint:      {} [{}]",
            kind.default_base_url().unwrap_or("(required)"),
            kind.endpoint_var()
        );
        println!("  default model: {}", kind.default_model());
        println!("  known models:  {}", model_names(kind).join(", "));
        println!("{:-<80}", "");
    }
    Ok(())
}

/// Resolve a provider against the environment and print the settings.
pub fn show_resolution(provider: &str, args: &ModelArgs) -> TollgateResult<()> {
    let kind = ProviderKind::from_str(provider).map_err(|_| {
        ProviderError::new(ProviderErrorKind::UnsupportedProvider(provider.to_string()))
    })?;
    let settings = ChatModelSettings::resolve(kind, &args.to_options(), &ProcessEnv)?;

    println!("provider:    {} ({})", kind, kind.display_name());
    println!("dialect:     {}", settings.dialect());
    println!("model:       {}", settings.model());
    println!("base url:    {}", settings.base_url());
    println!(
        "api key:     {}",
        if settings.api_key().is_some() {
            "[REDACTED]"
        } else {
            "(none)"
        }
    );
    println!("temperature: {}", settings.temperature());
    println!("reasoning:   {:?}", settings.reasoning());
    if let Some(num_ctx) = settings.num_ctx() {
        println!("num_ctx:     {}", num_ctx);
    }
    if let Some(num_predict) = settings.num_predict() {
        println!("num_predict: {}", num_predict);
    }
    if let Some(api_version) = settings.api_version() {
        println!("api version: {}", api_version);
    }
    for (name, value) in settings.headers() {
        println!("header:      {}: {}", name, value);
    }
    Ok(())
}
