//! Gemini service error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    MissingApiKey,
    /// Failed to create the HTTP client
    ClientCreation(String),
    /// Request could not be sent
    ApiRequest(String),
    /// Service answered with a non-success status
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason
        message: String,
    },
    /// Inline image payload was not valid base64
    Base64Decode(String),
    /// Streamed event could not be parsed
    InvalidServerMessage(String),
    /// Prompt rejected by the service before generation
    PromptBlocked(String),
    /// Body stream failed mid-response
    StreamInterrupted(String),
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::MissingApiKey => {
                write!(f, "GEMINI_API_KEY environment variable not set")
            }
            GeminiErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create Gemini client: {}", msg)
            }
            GeminiErrorKind::ApiRequest(msg) => write!(f, "Gemini API request failed: {}", msg),
            GeminiErrorKind::HttpError {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            GeminiErrorKind::Base64Decode(msg) => write!(f, "Base64 decode error: {}", msg),
            GeminiErrorKind::InvalidServerMessage(msg) => {
                write!(f, "Invalid server message: {}", msg)
            }
            GeminiErrorKind::PromptBlocked(reason) => {
                write!(f, "Prompt blocked by service: {}", reason)
            }
            GeminiErrorKind::StreamInterrupted(msg) => {
                write!(f, "Stream interrupted: {}", msg)
            }
        }
    }
}

impl GeminiErrorKind {
    /// True for failures raised after the stream was opened.
    pub fn is_mid_stream(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::Base64Decode(_)
                | GeminiErrorKind::InvalidServerMessage(_)
                | GeminiErrorKind::PromptBlocked(_)
                | GeminiErrorKind::StreamInterrupted(_)
        )
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use panelsmith_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 400,
///     message: "aspect ratio not supported".to_string(),
/// });
/// assert!(format!("{}", err).contains("HTTP 400"));
/// assert!(!err.kind.is_mid_stream());
/// ```
#[derive(Debug, Clone)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GeminiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gemini Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GeminiError {}
