//! CSS builder: a pure function from [`ImageOptions`] to a style sheet.
//!
//! Resolution order for every visual attribute is explicit option, then the
//! style's own default, then a global fallback. The same options always
//! produce byte-identical CSS.

use crate::types::ImageOptions;

/// Build the complete style sheet for one conversion.
///
/// Emission order is a contract: theme custom properties, reset, body sizing,
/// heading sizes, generic element rules, the style's structural fragment, and
/// finally any caller-supplied CSS verbatim so it can override everything
/// above it. Callers are expected to have run [`ImageOptions::validate`]
/// first; color and numeric values are interpolated as-is.
pub fn build_css(options: &ImageOptions) -> String {
    let sheet = options.style.sheet();

    let background = options.background.as_deref().unwrap_or(sheet.colors.background);
    let heading = options.heading_color.as_deref().unwrap_or(sheet.colors.heading);
    let text = options.text_color.as_deref().unwrap_or(sheet.colors.text);
    let link = options.link_color.as_deref().unwrap_or(sheet.colors.link);
    let code_bg = options
        .code_background
        .as_deref()
        .unwrap_or(sheet.colors.code_background);
    let border = sheet.colors.border;
    let quote = sheet.colors.quote;

    let body_size = options.body_size.unwrap_or(sheet.body_size);
    let h1 = options.h1_size.unwrap_or(sheet.h1_size);
    let h2 = options.h2_size.unwrap_or(sheet.h2_size);
    let h3 = options.h3_size.unwrap_or(sheet.h3_size);
    let line_height = options.line_height.unwrap_or(sheet.line_height);
    let padding = options.padding.unwrap_or(sheet.padding);

    let mut css = format!(
        ":root{{--bg:{background};--heading:{heading};--text:{text};--link:{link};\
--code-bg:{code_bg};--border:{border};--quote:{quote}}}\
*,*::before,*::after{{box-sizing:border-box;margin:0;padding:0}}\
html,body{{margin:0;padding:0}}\
body{{font-family:{body_font};font-size:{body_size}px;line-height:{line_height};\
color:var(--text);background:var(--bg);padding:{padding}px",
        body_font = sheet.body_font,
    );
    let border_width = options.border_width.unwrap_or(0.0);
    if border_width > 0.0 {
        let border_color = options.border_color.as_deref().unwrap_or(border);
        css.push_str(&format!(";border:{border_width}px solid {border_color}"));
    }
    let border_radius = options.border_radius.unwrap_or(0.0);
    if border_radius > 0.0 {
        css.push_str(&format!(";border-radius:{border_radius}px"));
    }
    css.push('}');

    // h4 and below inherit the h3 size.
    css.push_str(&format!(
        "h1,h2,h3,h4,h5,h6{{font-weight:600;color:var(--heading)}}\
h1{{font-size:{h1}px}}h2{{font-size:{h2}px}}h3,h4,h5,h6{{font-size:{h3}px}}"
    ));

    css.push_str(&format!(
        "p{{margin:0 0 16px 0}}\
a{{color:var(--link)}}\
code{{padding:.2em .4em;font-size:85%;background:var(--code-bg);font-family:{code_font}}}\
pre{{padding:16px;overflow:auto;background:var(--code-bg)}}\
pre code{{background:transparent;padding:0}}\
blockquote{{padding:0 1em;color:var(--quote);border-left:.25em solid var(--border);margin:0 0 16px 0}}\
ul,ol{{padding-left:2em;margin-bottom:16px}}\
table{{border-collapse:collapse;margin-bottom:16px}}\
th,td{{padding:6px 13px;border:1px solid var(--border)}}\
th{{font-weight:600}}\
img{{max-width:100%}}\
hr{{border:0;border-top:1px solid var(--border);margin:24px 0}}",
        code_font = sheet.code_font,
    ));

    css.push_str(sheet.fragment);

    if let Some(custom) = options.custom_css.as_deref() {
        css.push_str(custom);
    }

    css
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::StyleName;

    fn with_style(style: StyleName) -> ImageOptions {
        ImageOptions {
            style,
            ..ImageOptions::default()
        }
    }

    #[test]
    fn identical_options_yield_identical_css() {
        for style in StyleName::ALL {
            let opts = with_style(style);
            assert_eq!(build_css(&opts), build_css(&opts));
        }
    }

    #[test]
    fn styles_keep_their_own_defaults() {
        let github = build_css(&with_style(StyleName::Github));
        let minimal = build_css(&with_style(StyleName::Minimal));
        let dark = build_css(&with_style(StyleName::Dark));

        assert!(github.contains("--link:#0969da"));
        assert!(!github.contains("#0066cc"));

        assert!(minimal.contains("--link:#0066cc"));
        assert!(!minimal.contains("#0969da"));

        assert!(dark.contains("--bg:#0d1117"));
        assert!(dark.contains("--heading:#f0f6fc"));
        assert!(!github.contains("#0d1117"));
    }

    #[test]
    fn explicit_colors_override_style_defaults() {
        let opts = ImageOptions {
            background: Some("#fafafa".to_string()),
            link_color: Some("rgb(200, 0, 0)".to_string()),
            ..ImageOptions::default()
        };
        let css = build_css(&opts);
        assert!(css.contains("--bg:#fafafa"));
        assert!(css.contains("--link:rgb(200, 0, 0)"));
        assert!(!css.contains("--bg:#ffffff"));
    }

    #[test]
    fn typography_overrides_are_applied() {
        let opts = ImageOptions {
            h1_size: Some(48.0),
            body_size: Some(18.0),
            line_height: Some(1.9),
            ..ImageOptions::default()
        };
        let css = build_css(&opts);
        assert!(css.contains("h1{font-size:48px}"));
        assert!(css.contains("font-size:18px"));
        assert!(css.contains("line-height:1.9"));
    }

    #[test]
    fn h4_and_below_share_h3_size() {
        let opts = ImageOptions {
            h3_size: Some(21.0),
            ..ImageOptions::default()
        };
        assert!(build_css(&opts).contains("h3,h4,h5,h6{font-size:21px}"));
    }

    /// The `body { ... }` sizing rule, without its closing brace.
    fn body_rule(css: &str) -> &str {
        let start = css.find("body{font-family").expect("body rule present");
        let len = css[start..].find('}').expect("body rule closed");
        &css[start..start + len]
    }

    #[test]
    fn no_body_border_without_border_options() {
        let css = build_css(&ImageOptions::default());
        assert!(!body_rule(&css).contains("border"), "body rule: {}", body_rule(&css));
    }

    #[test]
    fn border_options_emit_body_border() {
        let opts = ImageOptions {
            border_width: Some(2.0),
            border_color: Some("#ff0000".to_string()),
            border_radius: Some(12.0),
            ..ImageOptions::default()
        };
        let body = body_rule(&build_css(&opts)).to_string();
        assert!(body.contains("border:2px solid #ff0000"));
        assert!(body.contains("border-radius:12px"));
    }

    #[test]
    fn border_color_defaults_to_style_border() {
        let opts = ImageOptions {
            border_width: Some(1.0),
            ..ImageOptions::default()
        };
        assert!(build_css(&opts).contains("border:1px solid #d0d7de"));
    }

    #[test]
    fn custom_css_is_appended_last() {
        let opts = ImageOptions {
            custom_css: Some("body{background:pink}".to_string()),
            ..ImageOptions::default()
        };
        let css = build_css(&opts);
        assert!(css.ends_with("body{background:pink}"));
    }

    #[test]
    fn style_fragment_precedes_custom_css() {
        let opts = ImageOptions {
            style: StyleName::Notion,
            custom_css: Some("/*last*/".to_string()),
            ..ImageOptions::default()
        };
        let css = build_css(&opts);
        let fragment_pos = css.find("text-decoration:underline").unwrap();
        let custom_pos = css.find("/*last*/").unwrap();
        assert!(fragment_pos < custom_pos);
    }

    #[test]
    fn padding_override_replaces_style_padding() {
        let opts = ImageOptions {
            padding: Some(0.0),
            ..ImageOptions::default()
        };
        let css = build_css(&opts);
        assert!(css.contains("padding:0px"));
        assert!(!css.contains("padding:32px"));
    }
}
