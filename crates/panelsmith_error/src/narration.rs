//! Narration (operator console) error types.

/// Failure to write a narration record.
#[derive(Debug, Clone)]
pub struct NarrationError {
    /// Underlying write error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl NarrationError {
    /// Create a new NarrationError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use panelsmith_error::NarrationError;
    ///
    /// let err = NarrationError::new("Broken pipe");
    /// assert!(err.to_string().starts_with("Narration Error: Broken pipe"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for NarrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Narration Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for NarrationError {}
