//! Error taxonomy for the conversion pipeline.

use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting Markdown to an image.
///
/// All variants carry human-readable messages; no step is retried, the first
/// failure aborts the conversion and propagates here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The style id is not one of the four registered styles.
    #[error("unknown style `{0}` (expected one of: github, notion, dark, minimal)")]
    UnknownStyle(String),

    /// An option failed validation before CSS generation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The input file is missing or not readable as UTF-8.
    #[error("cannot read input `{path}`: {message}")]
    InvalidInput { path: PathBuf, message: String },

    /// No Chromium executable at the configured or discovered location.
    #[error("Chrome executable not found: {0}")]
    ExecutableNotFound(String),

    /// Failed to launch headless Chromium.
    #[error("Chrome launch failed: {0}")]
    BrowserLaunch(String),

    /// Failed to open a page or load the assembled document into it.
    #[error("page load failed: {0}")]
    PageLoad(String),

    /// Failed to size the viewport or measure the rendered content height.
    #[error("content measurement failed: {0}")]
    Measure(String),

    /// The screenshot capture itself failed.
    #[error("screenshot capture failed: {0}")]
    Screenshot(String),

    /// Filesystem failure writing the output image or creating its directory.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
