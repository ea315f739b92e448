//! Option and result types for a single conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default logical width in CSS pixels when neither a preset nor an explicit
/// width is given.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default device scale factor (2 = retina-density output).
pub const DEFAULT_SCALE: f64 = 2.0;
/// Default JPEG quality.
pub const DEFAULT_QUALITY: u8 = 90;

/// The four registered visual styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleName {
    /// GitHub-flavoured light theme.
    #[default]
    Github,
    /// Notion-like editorial theme.
    Notion,
    /// GitHub dark theme.
    Dark,
    /// Plain minimal theme.
    Minimal,
}

impl StyleName {
    /// All styles, in registry order.
    pub const ALL: [StyleName; 4] = [
        StyleName::Github,
        StyleName::Notion,
        StyleName::Dark,
        StyleName::Minimal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleName::Github => "github",
            StyleName::Notion => "notion",
            StyleName::Dark => "dark",
            StyleName::Minimal => "minimal",
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_lowercase().as_str() {
            "github" => Ok(StyleName::Github),
            "notion" => Ok(StyleName::Notion),
            "dark" => Ok(StyleName::Dark),
            "minimal" => Ok(StyleName::Minimal),
            other => Err(Error::UnknownStyle(other.to_string())),
        }
    }
}

/// Output image encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless; `quality` is ignored.
    #[default]
    Png,
    /// Lossy; honors `quality` (1-100).
    Jpeg,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            other => Err(Error::InvalidConfig(format!(
                "unknown output format `{other}` (expected png or jpeg)"
            ))),
        }
    }
}

/// Options controlling one conversion.
///
/// Everything except `style` is optional; unset fields resolve through the
/// style's own defaults, then global fallbacks. Precedence for dimensions is
/// preset > explicit > default (800 px wide, auto height).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageOptions {
    /// Visual theme.
    pub style: StyleName,
    /// Logical width in CSS pixels.
    pub width: Option<u32>,
    /// Fixed logical height in CSS pixels; unset means auto (content height).
    pub height: Option<u32>,
    /// Named size preset; when it names a known preset its dimensions win
    /// over `width`/`height`.
    pub size: Option<String>,
    /// Device scale factor (output pixels per CSS pixel).
    pub scale: Option<f64>,
    /// Output encoding.
    pub format: OutputFormat,
    /// JPEG quality, 1-100. Ignored for PNG.
    pub quality: Option<u8>,

    // Typography, all in CSS pixels except the unitless line height.
    pub h1_size: Option<f64>,
    pub h2_size: Option<f64>,
    pub h3_size: Option<f64>,
    pub body_size: Option<f64>,
    pub line_height: Option<f64>,

    // Theme colors, CSS color strings.
    pub background: Option<String>,
    pub heading_color: Option<String>,
    pub text_color: Option<String>,
    pub link_color: Option<String>,
    pub code_background: Option<String>,

    // Layout, pixel units except the border color.
    pub padding: Option<f64>,
    pub border_width: Option<f64>,
    pub border_color: Option<String>,
    pub border_radius: Option<f64>,

    /// Raw CSS appended after everything else; always wins. Trusted input,
    /// emitted verbatim.
    pub custom_css: Option<String>,
}

impl ImageOptions {
    /// Validate colors and numeric fields before any CSS is generated.
    ///
    /// Colors must be hex (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`), a
    /// functional `rgb()`/`rgba()`/`hsl()`/`hsla()` value, or a named color.
    /// Numeric fields must be finite and non-negative (typography strictly
    /// positive). An out-of-range JPEG quality is rejected, not clamped.
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(q) = self.quality
            && self.format == OutputFormat::Jpeg
            && !(1..=100).contains(&q)
        {
            return Err(Error::InvalidConfig(format!(
                "jpeg quality must be between 1 and 100, got {q}"
            )));
        }
        if let Some(s) = self.scale
            && !(s.is_finite() && s > 0.0)
        {
            return Err(Error::InvalidConfig(format!(
                "scale must be a positive number, got {s}"
            )));
        }
        for (name, value) in [
            ("h1-size", self.h1_size),
            ("h2-size", self.h2_size),
            ("h3-size", self.h3_size),
            ("body-size", self.body_size),
            ("line-height", self.line_height),
        ] {
            if let Some(v) = value
                && !(v.is_finite() && v > 0.0)
            {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be a positive number, got {v}"
                )));
            }
        }
        for (name, value) in [
            ("padding", self.padding),
            ("border-width", self.border_width),
            ("border-radius", self.border_radius),
        ] {
            if let Some(v) = value
                && !(v.is_finite() && v >= 0.0)
            {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {v}"
                )));
            }
        }
        for (name, value) in [
            ("bg", self.background.as_deref()),
            ("header-color", self.heading_color.as_deref()),
            ("body-color", self.text_color.as_deref()),
            ("link-color", self.link_color.as_deref()),
            ("code-bg", self.code_background.as_deref()),
            ("border-color", self.border_color.as_deref()),
        ] {
            if let Some(c) = value
                && !is_valid_color(c)
            {
                return Err(Error::InvalidConfig(format!(
                    "{name} is not a valid CSS color: `{c}`"
                )));
            }
        }
        Ok(())
    }
}

/// Check a color value against a strict grammar so that malformed input is
/// rejected instead of being interpolated into broken CSS.
fn is_valid_color(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    let lower = value.to_lowercase();
    for func in ["rgb(", "rgba(", "hsl(", "hsla("] {
        if let Some(rest) = lower.strip_prefix(func) {
            return rest.ends_with(')')
                && rest[..rest.len() - 1]
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, ' ' | ',' | '.' | '%' | '/'));
        }
    }
    // Named colors: `transparent`, `rebeccapurple`, ...
    lower.chars().all(|c| c.is_ascii_alphabetic())
}

/// The product of one conversion.
///
/// `width`/`height` are output pixels: logical CSS pixels multiplied by the
/// device scale factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    /// Encoded image bytes.
    pub buffer: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
}
