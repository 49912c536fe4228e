//! Provider factories and the registry that dispatches on provider id.

use crate::{ChatModel, EnvLookup, ProcessEnv, ProviderKind, ProviderOptions};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tollgate_error::{ProviderError, ProviderErrorKind};
use tollgate_interface::ChatDriver;
use tollgate_rate_limit::RateLimiter;
use tracing::{debug, info, instrument};

/// Builds chat drivers for one provider.
pub trait ProviderFactory: Send + Sync {
    /// Provider this factory builds for.
    fn kind(&self) -> ProviderKind;

    /// Build a driver from caller options and the environment.
    ///
    /// # Errors
    ///
    /// Returns a provider error when required settings are missing.
    fn build(
        &self,
        options: &ProviderOptions,
        env: &dyn EnvLookup,
        limiter: RateLimiter,
    ) -> Result<Arc<dyn ChatDriver>, ProviderError>;
}

/// Factory for the built-in HTTP client of a provider.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinFactory {
    kind: ProviderKind,
}

impl BuiltinFactory {
    /// Factory for `kind`.
    pub fn new(kind: ProviderKind) -> Self {
        Self { kind }
    }
}

impl ProviderFactory for BuiltinFactory {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn build(
        &self,
        options: &ProviderOptions,
        env: &dyn EnvLookup,
        limiter: RateLimiter,
    ) -> Result<Arc<dyn ChatDriver>, ProviderError> {
        Ok(Arc::new(ChatModel::resolve(self.kind, options, env, limiter)?))
    }
}

/// Maps provider ids to factories.
///
/// Every driver the registry builds shares the registry's [`RateLimiter`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use tollgate_models::{ProviderOptions, ProviderRegistry};
///
/// let registry = ProviderRegistry::with_defaults();
/// let env: HashMap<String, String> = HashMap::new();
///
/// let model = registry
///     .resolve_with_env("ollama", &ProviderOptions::default(), &env)
///     .unwrap();
/// assert_eq!(model.model_name(), "qwen2.5:7b");
///
/// let err = registry
///     .resolve_with_env("nope", &ProviderOptions::default(), &env)
///     .err()
///     .unwrap();
/// assert!(err.to_string().contains("Unsupported provider: nope"));
/// ```
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    factories: BTreeMap<ProviderKind, Arc<dyn ProviderFactory>>,
    limiter: RateLimiter,
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers())
            .field("limiter", &self.limiter)
            .finish()
    }
}

impl ProviderRegistry {
    /// Empty registry with an unlimited rate limiter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a built-in factory for every [`ProviderKind`].
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in ProviderKind::iter() {
            registry.register(Arc::new(BuiltinFactory::new(kind)));
        }
        registry
    }

    /// Share `limiter` with every driver built from now on.
    pub fn with_limiter(mut self, limiter: RateLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    /// Add a factory, replacing any previous one for the same provider.
    pub fn register(&mut self, factory: Arc<dyn ProviderFactory>) {
        let kind = factory.kind();
        if self.factories.insert(kind, factory).is_some() {
            info!(provider = %kind, "Replaced provider factory");
        } else {
            debug!(provider = %kind, "Registered provider factory");
        }
    }

    /// Registered providers, in id order.
    pub fn providers(&self) -> Vec<ProviderKind> {
        self.factories.keys().copied().collect()
    }

    /// Resolve `provider` against the process environment.
    ///
    /// # Errors
    ///
    /// See [`ProviderRegistry::resolve_with_env`].
    pub fn resolve(
        &self,
        provider: &str,
        options: &ProviderOptions,
    ) -> Result<Arc<dyn ChatDriver>, ProviderError> {
        self.resolve_with_env(provider, options, &ProcessEnv)
    }

    /// Resolve `provider` against an explicit environment.
    ///
    /// # Errors
    ///
    /// - [`ProviderErrorKind::UnsupportedProvider`] for an unknown or
    ///   unregistered id
    /// - whatever the factory reports (missing key, missing endpoint)
    #[instrument(skip(self, options, env))]
    pub fn resolve_with_env(
        &self,
        provider: &str,
        options: &ProviderOptions,
        env: &dyn EnvLookup,
    ) -> Result<Arc<dyn ChatDriver>, ProviderError> {
        let unsupported =
            || ProviderError::new(ProviderErrorKind::UnsupportedProvider(provider.to_string()));

        let kind = ProviderKind::from_str(provider).map_err(|_| unsupported())?;
        let factory = self.factories.get(&kind).ok_or_else(unsupported)?;

        let driver = factory.build(options, env, self.limiter.clone())?;
        info!(
            provider = driver.provider_name(),
            model = driver.model_name(),
            "Resolved chat model"
        );
        Ok(driver)
    }
}
