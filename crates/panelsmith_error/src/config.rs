//! Configuration error types.

/// Configuration error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Job or panel name is empty
    #[display("Job name cannot be empty")]
    EmptyJobName,
    /// Job definition could not be assembled
    #[display("Invalid job definition: {}", _0)]
    InvalidJob(String),
    /// Panel book file could not be read
    #[display("Failed to read panel book {}: {}", path, message)]
    BookRead {
        /// Path that was read
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Panel book TOML is malformed
    #[display("Failed to parse panel book: {}", _0)]
    BookParse(String),
    /// Panel book lists no panels
    #[display("Panel book must contain at least one panel")]
    EmptyBook,
    /// Two panels share a name (and therefore an output file)
    #[display("Panel '{}' is defined more than once", _0)]
    DuplicatePanel(String),
    /// A requested panel is not in the book
    #[display("Unknown panel '{}'", _0)]
    UnknownPanel(String),
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use panelsmith_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::UnknownPanel("panel_9".to_string()));
/// assert!(err.to_string().contains("panel_9"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
