//! Conversion pipeline: Markdown to encoded image bytes.
//!
//! The pipeline is a straight sequence: resolve dimensions, convert Markdown
//! to an HTML fragment, build the style sheet, assemble a standalone
//! document, load it into a fresh page, wait for the load lifecycle so
//! subresources have laid out, size the viewport, capture. Auto height needs
//! two passes: the engine cannot report content height without first laying
//! out at *some* height, so we probe, measure the body's scroll height, and
//! re-render at the measured height.

use std::path::Path;

use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page, ScreenshotParams};
use tracing::debug;

use crate::browser::BrowserSession;
use crate::css::build_css;
use crate::error::{Error, Result};
use crate::presets::size_preset;
use crate::types::{
    DEFAULT_QUALITY, DEFAULT_SCALE, DEFAULT_WIDTH, ImageOptions, ImageResult, OutputFormat,
};

/// Viewport height used for the first layout pass in auto-height mode.
const VIEWPORT_PROBE_HEIGHT: u32 = 100;
/// Extra pixel added to the measured content height to guard against
/// sub-pixel clipping at the bottom edge.
const HEIGHT_GUARD_PX: u32 = 1;

/// Effective logical dimensions for one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResolvedSize {
    width: u32,
    /// `None` renders in auto-height mode.
    height: Option<u32>,
}

/// Apply the dimension precedence: preset > explicit > default.
///
/// An unknown preset name is not an error; it falls through to the explicit
/// values and defaults.
fn resolve_size(options: &ImageOptions) -> ResolvedSize {
    if let Some(name) = options.size.as_deref()
        && let Some(preset) = size_preset(name)
    {
        return ResolvedSize {
            width: preset.width,
            height: preset.height,
        };
    }
    ResolvedSize {
        width: options.width.unwrap_or(DEFAULT_WIDTH),
        height: options.height,
    }
}

/// Convert Markdown to an HTML fragment with GFM extensions (tables,
/// strikethrough, task lists).
fn markdown_to_html(markdown: &str) -> String {
    let mut cmark_options = pulldown_cmark::Options::empty();
    cmark_options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    cmark_options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    cmark_options.insert(pulldown_cmark::Options::ENABLE_TASKLISTS);
    let parser = pulldown_cmark::Parser::new_ext(markdown, cmark_options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// Wrap an HTML fragment and style sheet into a minimal standalone document.
fn wrap_document(fragment: &str, css: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>{css}</style></head>\
<body><div class=\"markdown-body\">{fragment}</div></body></html>"
    )
}

async fn set_viewport(page: &Page, width: u32, height: u32, scale: f64) -> Result<()> {
    let params = SetDeviceMetricsOverrideParams::builder()
        .width(i64::from(width))
        .height(i64::from(height))
        .device_scale_factor(scale)
        .mobile(false)
        .build()
        .map_err(Error::Measure)?;
    page.execute(params)
        .await
        .map_err(|e| Error::Measure(e.to_string()))?;
    Ok(())
}

/// Load, size, optionally measure, and screenshot. Runs against a page the
/// caller owns and closes.
async fn capture(
    page: &Page,
    document: &str,
    size: ResolvedSize,
    options: &ImageOptions,
) -> Result<(Vec<u8>, u32)> {
    page.set_content(document)
        .await
        .map_err(|e| Error::PageLoad(e.to_string()))?;
    // Settle on the load lifecycle before sizing so externally referenced
    // images and fonts have laid out when the height is measured. Best
    // effort: a hanging resource stalls the whole conversion here.
    page.wait_for_navigation()
        .await
        .map_err(|e| Error::PageLoad(e.to_string()))?;

    let scale = options.scale.unwrap_or(DEFAULT_SCALE);
    set_viewport(
        page,
        size.width,
        size.height.unwrap_or(VIEWPORT_PROBE_HEIGHT),
        scale,
    )
    .await?;

    // Second pass for auto height: measure the laid-out content, then
    // re-render at exactly that height.
    let logical_height = match size.height {
        Some(fixed) => fixed,
        None => {
            let expression =
                format!("Math.ceil(document.body.scrollHeight + {HEIGHT_GUARD_PX})");
            let measured: f64 = page
                .evaluate(expression)
                .await
                .map_err(|e| Error::Measure(e.to_string()))?
                .into_value()
                .map_err(|e| Error::Measure(e.to_string()))?;
            let height = measured as u32;
            debug!(height, "measured content height");
            set_viewport(page, size.width, height, scale).await?;
            height
        }
    };

    // Fixed height clips to the viewport (the cropping contract for platform
    // presets); auto height captures the full page, which now equals the
    // content.
    let mut params = ScreenshotParams::builder().full_page(size.height.is_none());
    params = match options.format {
        OutputFormat::Png => params.format(CaptureScreenshotFormat::Png),
        OutputFormat::Jpeg => params
            .format(CaptureScreenshotFormat::Jpeg)
            .quality(i64::from(options.quality.unwrap_or(DEFAULT_QUALITY))),
    };
    let buffer = page
        .screenshot(params.build())
        .await
        .map_err(|e| Error::Screenshot(e.to_string()))?;

    Ok((buffer, logical_height))
}

/// Convert Markdown text to encoded image bytes.
///
/// Dimensions in the returned [`ImageResult`] are output pixels: the logical
/// CSS dimensions multiplied by the device scale factor.
pub async fn to_image(
    markdown: &str,
    options: &ImageOptions,
    session: &BrowserSession,
) -> Result<ImageResult> {
    options.validate()?;
    let size = resolve_size(options);
    let fragment = markdown_to_html(markdown);
    let css = build_css(options);
    let document = wrap_document(&fragment, &css);
    debug!(
        width = size.width,
        height = ?size.height,
        style = %options.style,
        "rendering document"
    );

    let page = session.new_page().await?;
    let outcome = capture(&page, &document, size, options).await;
    // The page must go away whether or not the capture succeeded.
    let _ = page.close().await;
    let (buffer, logical_height) = outcome?;

    let scale = options.scale.unwrap_or(DEFAULT_SCALE);
    Ok(ImageResult {
        buffer,
        width: (f64::from(size.width) * scale).round() as u32,
        height: (f64::from(logical_height) * scale).round() as u32,
        format: options.format,
    })
}

/// Convert a Markdown file to an image file.
///
/// Reads `input` as UTF-8, writes the encoded image to `output`, creating
/// parent directories as needed.
pub async fn file_to_image(
    input: &Path,
    output: &Path,
    options: &ImageOptions,
    session: &BrowserSession,
) -> Result<ImageResult> {
    let markdown = tokio::fs::read_to_string(input)
        .await
        .map_err(|e| Error::InvalidInput {
            path: input.to_path_buf(),
            message: e.to_string(),
        })?;
    let result = to_image(&markdown, options, session).await?;
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(output, &result.buffer).await?;
    Ok(result)
}
