//! Error types for the Panelsmith workspace.
//!
//! Every concern gets its own location-tracked error struct. They all fold into
//! [`PanelsmithError`], which is what crosses crate boundaries.

mod config;
mod gemini;
mod narration;
mod storage;

pub use config::{ConfigError, ConfigErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use narration::NarrationError;
pub use storage::{StorageError, StorageErrorKind};

/// Specific error conditions, one variant per concern.
#[derive(Debug, derive_more::From)]
pub enum PanelsmithErrorKind {
    /// Invalid job definition, panel book, or command-line selection
    Config(ConfigError),
    /// Generation service failure (setup or mid-stream)
    Gemini(GeminiError),
    /// Image persistence failure
    Storage(StorageError),
    /// Operator console failure
    Narration(NarrationError),
}

impl std::fmt::Display for PanelsmithErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelsmithErrorKind::Config(e) => write!(f, "{}", e),
            PanelsmithErrorKind::Gemini(e) => write!(f, "{}", e),
            PanelsmithErrorKind::Storage(e) => write!(f, "{}", e),
            PanelsmithErrorKind::Narration(e) => write!(f, "{}", e),
        }
    }
}

/// Panelsmith error with kind discrimination.
///
/// # Examples
///
/// ```
/// use panelsmith_error::{ConfigError, ConfigErrorKind, PanelsmithError, PanelsmithErrorKind};
///
/// let err: PanelsmithError = ConfigError::new(ConfigErrorKind::EmptyBook).into();
/// assert!(matches!(err.kind(), PanelsmithErrorKind::Config(_)));
/// assert!(err.to_string().contains("at least one panel"));
/// ```
#[derive(Debug)]
pub struct PanelsmithError(Box<PanelsmithErrorKind>);

impl PanelsmithError {
    /// Create a new error from a kind.
    pub fn new(kind: PanelsmithErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PanelsmithErrorKind {
        &self.0
    }
}

impl std::fmt::Display for PanelsmithError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Panelsmith Error: {}", self.0)
    }
}

impl std::error::Error for PanelsmithError {}

// Generic From implementation for any type that converts to PanelsmithErrorKind
impl<T> From<T> for PanelsmithError
where
    T: Into<PanelsmithErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Panelsmith operations.
pub type PanelsmithResult<T> = std::result::Result<T, PanelsmithError>;
