//! mdshot CLI — convert Markdown to a styled image.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mdshot::{
    BrowserOptions, BrowserSession, ImageOptions, ImageResult, OutputFormat, StyleName,
    list_size_presets,
};

/// Convert Markdown to a styled PNG/JPEG image via headless Chromium.
#[derive(Parser, Debug)]
#[command(name = "mdshot", version, about)]
struct Cli {
    /// Input markdown file path or literal markdown text.
    ///
    /// Treated as a file when the path exists or ends in `.md`; use --file or
    /// --text to disambiguate explicitly.
    #[arg(required_unless_present = "list_sizes")]
    input: Option<String>,

    /// Output image path.
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Style template: github, notion, dark, minimal.
    #[arg(short, long, default_value = "github")]
    style: String,

    /// Named size preset (see --list-sizes); overrides --width/--height.
    #[arg(long)]
    size: Option<String>,

    /// Image width in CSS pixels (default 800).
    #[arg(short, long)]
    width: Option<u32>,

    /// Fixed image height in CSS pixels; omit for auto height.
    #[arg(long)]
    height: Option<u32>,

    /// Device scale factor for high-DPI output (default 2).
    #[arg(long)]
    scale: Option<f64>,

    /// Output format: png or jpeg.
    #[arg(short, long, default_value = "png")]
    format: String,

    /// JPEG quality, 1-100 (default 90).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: Option<u8>,

    /// Heading sizes in pixels.
    #[arg(long)]
    h1_size: Option<f64>,
    #[arg(long)]
    h2_size: Option<f64>,
    #[arg(long)]
    h3_size: Option<f64>,
    /// Body text size in pixels.
    #[arg(long)]
    body_size: Option<f64>,
    /// Unitless line height multiplier.
    #[arg(long)]
    line_height: Option<f64>,

    /// Background color (CSS color).
    #[arg(long)]
    bg: Option<String>,
    /// Heading text color.
    #[arg(long)]
    header_color: Option<String>,
    /// Body text color.
    #[arg(long)]
    body_color: Option<String>,
    /// Link color.
    #[arg(long)]
    link_color: Option<String>,
    /// Code block background color.
    #[arg(long)]
    code_bg: Option<String>,

    /// Body padding in pixels.
    #[arg(long)]
    padding: Option<f64>,
    /// Body border width in pixels.
    #[arg(long)]
    border_width: Option<f64>,
    /// Body border color.
    #[arg(long)]
    border_color: Option<String>,
    /// Body border radius in pixels.
    #[arg(long)]
    border_radius: Option<f64>,

    /// Raw CSS appended after the generated style sheet (always wins).
    #[arg(long)]
    custom_css: Option<String>,

    /// Always treat the input as a file path.
    #[arg(long, conflicts_with = "text")]
    file: bool,
    /// Always treat the input as literal markdown text.
    #[arg(long)]
    text: bool,

    /// Use the system-installed Chrome/Chromium instead of auto-detection.
    #[arg(long)]
    use_system_browser: bool,
    /// Path to the Chrome/Chromium executable.
    #[arg(long)]
    chrome_path: Option<PathBuf>,

    /// List the available size presets and exit.
    #[arg(long)]
    list_sizes: bool,
}

impl Cli {
    fn image_options(&self) -> mdshot::Result<ImageOptions> {
        // Policy: an unknown style warns and falls back instead of failing.
        let style = self.style.parse::<StyleName>().unwrap_or_else(|_| {
            eprintln!(
                "warning: unknown style `{}`, falling back to github",
                self.style
            );
            StyleName::default()
        });
        Ok(ImageOptions {
            style,
            width: self.width,
            height: self.height,
            size: self.size.clone(),
            scale: self.scale,
            format: self.format.parse::<OutputFormat>()?,
            quality: self.quality,
            h1_size: self.h1_size,
            h2_size: self.h2_size,
            h3_size: self.h3_size,
            body_size: self.body_size,
            line_height: self.line_height,
            background: self.bg.clone(),
            heading_color: self.header_color.clone(),
            text_color: self.body_color.clone(),
            link_color: self.link_color.clone(),
            code_background: self.code_bg.clone(),
            padding: self.padding,
            border_width: self.border_width,
            border_color: self.border_color.clone(),
            border_radius: self.border_radius,
            custom_css: self.custom_css.clone(),
        })
    }

    /// File-vs-text disambiguation: the flags are the contract, the
    /// exists-or-`.md` check is only the convenience default.
    fn input_is_file(&self, input: &str) -> bool {
        if self.text {
            false
        } else if self.file {
            true
        } else {
            Path::new(input).exists() || input.ends_with(".md")
        }
    }
}

async fn convert(cli: &Cli, session: &BrowserSession) -> mdshot::Result<ImageResult> {
    let input = cli.input.as_deref().expect("clap requires input here");
    let options = cli.image_options()?;

    if cli.input_is_file(input) {
        println!("Converting file {input} with style \"{}\"...", options.style);
        mdshot::file_to_image(Path::new(input), &cli.output, &options, session).await
    } else {
        println!("Converting markdown text with style \"{}\"...", options.style);
        let result = mdshot::to_image(input, &options, session).await?;
        if let Some(parent) = cli.output.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&cli.output, &result.buffer).await?;
        Ok(result)
    }
}

async fn run(cli: Cli) -> mdshot::Result<()> {
    let browser_options = BrowserOptions {
        use_system_browser: cli.use_system_browser,
        executable: cli.chrome_path.clone(),
    };
    let session = BrowserSession::launch(&browser_options).await?;
    // The session must come down on the failure path too.
    let outcome = convert(&cli, &session).await;
    session.close().await;
    let result = outcome?;

    println!("✓ Output saved to: {}", cli.output.display());
    println!("  Size: {}x{}px", result.width, result.height);
    Ok(())
}

fn print_size_presets() {
    println!("Available size presets:");
    for preset in list_size_presets() {
        let height = preset
            .height
            .map_or_else(|| "auto".to_string(), |h| h.to_string());
        println!(
            "  {:<18} {:>4}x{:<5} {}",
            preset.name, preset.width, height, preset.description
        );
    }
}

/// Usage errors exit 1; help and version are success paths.
fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(parse_exit_code(&err));
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if cli.list_sizes {
        print_size_presets();
        return;
    }

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_full_flag_surface() {
        let cli = Cli::parse_from([
            "mdshot",
            "README.md",
            "-o",
            "out/readme.jpeg",
            "-s",
            "dark",
            "--size",
            "twitter",
            "-w",
            "640",
            "--height",
            "480",
            "--scale",
            "1",
            "-f",
            "jpeg",
            "-q",
            "80",
            "--h1-size",
            "40",
            "--bg",
            "#000000",
            "--padding",
            "16",
            "--custom-css",
            "body{color:red}",
            "--use-system-browser",
        ]);
        assert_eq!(cli.input.as_deref(), Some("README.md"));
        let opts = cli.image_options().unwrap();
        assert_eq!(opts.style, StyleName::Dark);
        assert_eq!(opts.format, OutputFormat::Jpeg);
        assert_eq!(opts.quality, Some(80));
        assert_eq!(opts.size.as_deref(), Some("twitter"));
        assert_eq!(opts.background.as_deref(), Some("#000000"));
        opts.validate().unwrap();
    }

    #[test]
    fn unknown_style_falls_back_to_github() {
        let cli = Cli::parse_from(["mdshot", "x", "-s", "solarized"]);
        assert_eq!(cli.image_options().unwrap().style, StyleName::Github);
    }

    #[test]
    fn unknown_format_is_an_error() {
        let cli = Cli::parse_from(["mdshot", "x", "-f", "webp"]);
        assert!(cli.image_options().is_err());
    }

    #[test]
    fn quality_outside_range_is_a_usage_error() {
        assert!(Cli::try_parse_from(["mdshot", "x", "-q", "0"]).is_err());
        assert!(Cli::try_parse_from(["mdshot", "x", "-q", "101"]).is_err());
    }

    #[test]
    fn input_required_unless_listing_sizes() {
        assert!(Cli::try_parse_from(["mdshot"]).is_err());
        assert!(Cli::try_parse_from(["mdshot", "--list-sizes"]).is_ok());
    }

    #[test]
    fn missing_input_exits_one_but_help_exits_zero() {
        let usage = Cli::try_parse_from(["mdshot"]).unwrap_err();
        assert_eq!(parse_exit_code(&usage), 1);

        let bad_flag = Cli::try_parse_from(["mdshot", "x", "--no-such-flag"]).unwrap_err();
        assert_eq!(parse_exit_code(&bad_flag), 1);

        let help = Cli::try_parse_from(["mdshot", "--help"]).unwrap_err();
        assert_eq!(parse_exit_code(&help), 0);

        let version = Cli::try_parse_from(["mdshot", "--version"]).unwrap_err();
        assert_eq!(parse_exit_code(&version), 0);
    }

    #[test]
    fn explicit_flags_override_the_heuristic() {
        let cli = Cli::parse_from(["mdshot", "notes.md", "--text"]);
        assert!(!cli.input_is_file("notes.md"));

        let cli = Cli::parse_from(["mdshot", "plain markdown", "--file"]);
        assert!(cli.input_is_file("plain markdown"));
    }

    #[test]
    fn heuristic_treats_md_suffix_as_file() {
        let cli = Cli::parse_from(["mdshot", "missing-but-markdown.md"]);
        assert!(cli.input_is_file("missing-but-markdown.md"));
        assert!(!cli.input_is_file("# just some markdown"));
    }

    #[test]
    fn file_and_text_flags_conflict() {
        assert!(Cli::try_parse_from(["mdshot", "x", "--file", "--text"]).is_err());
    }
}
