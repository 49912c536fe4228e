//! Browser collaborator errors.

/// Browser automation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BrowserErrorKind {
    /// Screenshot capture failed
    #[display("Screenshot failed: {}", _0)]
    Screenshot(String),
}

/// Browser error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Browser Error: {} at line {} in {}", kind, line, file)]
pub struct BrowserError {
    /// The kind of error that occurred
    pub kind: BrowserErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl BrowserError {
    /// Create a new browser error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BrowserErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
