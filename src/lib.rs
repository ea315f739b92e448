//! `mdshot` — render Markdown to styled PNG/JPEG images.
//!
//! Markdown is converted to HTML, wrapped in one of four built-in visual
//! styles (github, notion, dark, minimal), laid out by headless Chromium, and
//! screenshotted. Auto-height output is measured in a two-pass render; fixed
//! heights (explicit or via a platform size preset) crop overflowing content.
//!
//! # Quick start
//!
//! ```no_run
//! use mdshot::{BrowserOptions, BrowserSession, ImageOptions};
//!
//! # async fn run() -> mdshot::Result<()> {
//! let session = BrowserSession::launch(&BrowserOptions::default()).await?;
//! let result = mdshot::to_image("# Hello\n\nWorld.", &ImageOptions::default(), &session).await?;
//! std::fs::write("hello.png", &result.buffer)?;
//! session.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! The session is launched once by the caller and shared across conversions;
//! each conversion renders in its own page.

pub mod browser;
pub mod css;
pub mod error;
pub mod presets;
pub mod render;
pub mod styles;
pub mod types;

pub use browser::{BrowserOptions, BrowserSession};
pub use css::build_css;
pub use error::{Error, Result};
pub use presets::{SizePreset, list_size_presets, size_preset};
pub use render::{file_to_image, to_image};
pub use styles::{StyleColors, StyleSheet};
pub use types::{ImageOptions, ImageResult, OutputFormat, StyleName};
