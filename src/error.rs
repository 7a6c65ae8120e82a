//! Error types for domshot
//!
//! This module provides the error type hierarchy using `thiserror`.
//! Every failure aborts the export run; nothing is retried.

use thiserror::Error;

/// The main error type for domshot operations
#[derive(Error, Debug)]
pub enum Error {
    /// Browser-related errors
    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    /// Navigation errors
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Capture errors (screenshot, markup, geometry)
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    /// Export errors (identifiers, missing vector content)
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ChromiumOxide errors
    #[error("CDP error: {0}")]
    Cdp(String),

    /// The run was interrupted by a signal
    #[error("Interrupted")]
    Interrupted,
}

/// Browser lifecycle errors
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Failed to launch browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Browser configuration error
    #[error("Invalid browser configuration: {0}")]
    ConfigError(String),

    /// Failed to create new page/tab
    #[error("Failed to create page: {0}")]
    PageCreationFailed(String),
}

/// Navigation errors
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Local document does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Navigation timeout
    #[error("Navigation timed out after {0}ms")]
    Timeout(u64),

    /// Page load failed
    #[error("Page load failed: {0}")]
    LoadFailed(String),
}

/// Capture errors
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Screenshot failed
    #[error("Screenshot capture failed: {0}")]
    ScreenshotFailed(String),

    /// Bounding box could not be computed
    #[error("Bounding box unavailable for {id}: {reason}")]
    BoundingBoxFailed {
        /// Element identifier
        id: String,
        /// Underlying failure
        reason: String,
    },

    /// Markup serialization failed
    #[error("Markup capture failed: {0}")]
    MarkupFailed(String),

    /// Element could not be detached
    #[error("Failed to remove element {id}: {reason}")]
    RemoveFailed {
        /// Element identifier
        id: String,
        /// Underlying failure
        reason: String,
    },
}

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    /// Marked element carries no id
    #[error("Marked element has no id attribute")]
    MissingId,

    /// Id cannot be used as a file name
    #[error("Element id cannot be used as a file name: {0}")]
    UnsafeId(String),

    /// Two marked elements share an id
    #[error("Duplicate element id: {0}")]
    DuplicateId(String),

    /// Diagram element has no svg descendant
    #[error("Element {0} has no svg descendant")]
    MissingVectorChild(String),

    /// Querying marked elements failed
    #[error("Element query failed for {selector}: {reason}")]
    ElementQuery {
        /// Selector used
        selector: String,
        /// Underlying failure
        reason: String,
    },
}

/// Result type alias for domshot operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a CDP error from a string
    pub fn cdp<S: Into<String>>(msg: S) -> Self {
        Error::Cdp(msg.into())
    }
}

/// Convert chromiumoxide errors
impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}
