//! Image persistence error types.

/// Kinds of persistence errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Output location is not writable
    #[display("Permission denied: {}", _0)]
    PermissionDenied(String),
    /// Write or directory creation failed
    #[display("I/O error: {}", _0)]
    Io(String),
    /// Job name cannot be used as a file stem
    #[display("Invalid output path: {}", _0)]
    InvalidPath(String),
}

impl StorageErrorKind {
    /// Classify an I/O error raised while writing `path`.
    pub fn from_io(path: &std::path::Path, err: &std::io::Error) -> Self {
        let detail = format!("{}: {}", path.display(), err);
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied(detail),
            _ => StorageErrorKind::Io(detail),
        }
    }
}

/// Persistence error with location tracking.
///
/// # Examples
///
/// ```
/// use panelsmith_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::InvalidPath("a/b".to_string()));
/// assert!(format!("{}", err).contains("Invalid output path"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
