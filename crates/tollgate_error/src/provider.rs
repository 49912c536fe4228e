//! Provider resolution errors.

/// Provider resolution error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// No API key in the option bag or the environment
    #[display(
        "💥 {} API key not found! 🔑 Please set the `{}` environment variable or pass it explicitly",
        provider,
        env_var
    )]
    MissingApiKey {
        /// Provider display name (e.g. "OpenAI")
        provider: String,
        /// Environment variable that was consulted
        env_var: String,
    },
    /// No endpoint in the option bag or the environment, and no default exists
    #[display(
        "{} endpoint not configured: set the `{}` environment variable or pass a base URL",
        provider,
        env_var
    )]
    MissingEndpoint {
        /// Provider display name
        provider: String,
        /// Environment variable that was consulted
        env_var: String,
    },
    /// Provider identifier not registered
    #[display("Unsupported provider: {}", _0)]
    UnsupportedProvider(String),
    /// HTTP client construction failed
    #[display("Failed to build client: {}", _0)]
    ClientBuild(String),
}

/// Provider resolution error with location tracking.
///
/// # Examples
///
/// ```
/// use tollgate_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::UnsupportedProvider("foo".into()));
/// assert!(err.to_string().contains("Unsupported provider: foo"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new provider error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
