//! Style registry: the four built-in visual themes.
//!
//! Each style is a fixed [`StyleSheet`]: a default color set, font stacks,
//! typography metrics, and a structural CSS fragment (heading borders, link
//! underlines, radii) emitted after the generic rules so it can tighten them.
//! The registry is compile-time data and never mutated.

use crate::types::StyleName;

/// Default theme colors for one style. All values are CSS color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleColors {
    pub background: &'static str,
    pub heading: &'static str,
    pub text: &'static str,
    pub link: &'static str,
    pub code_background: &'static str,
    /// Rule/heading/table border color. Not caller-configurable.
    pub border: &'static str,
    /// Blockquote text color. Not caller-configurable.
    pub quote: &'static str,
}

/// Everything the CSS builder needs to know about one style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSheet {
    pub colors: StyleColors,
    pub body_font: &'static str,
    pub code_font: &'static str,
    /// Default body padding in CSS pixels.
    pub padding: f64,
    /// Default unitless line height.
    pub line_height: f64,
    pub h1_size: f64,
    pub h2_size: f64,
    pub h3_size: f64,
    pub body_size: f64,
    /// Structural rules appended after the generic rules.
    pub fragment: &'static str,
}

const SYSTEM_SANS: &str =
    "-apple-system,BlinkMacSystemFont,'Segoe UI',Helvetica,Arial,sans-serif";
const SYSTEM_MONO: &str = "ui-monospace,SFMono-Regular,Menlo,monospace";

const GITHUB: StyleSheet = StyleSheet {
    colors: StyleColors {
        background: "#ffffff",
        heading: "#24292f",
        text: "#24292f",
        link: "#0969da",
        code_background: "#f6f8fa",
        border: "#d0d7de",
        quote: "#57606a",
    },
    body_font: SYSTEM_SANS,
    code_font: SYSTEM_MONO,
    padding: 32.0,
    line_height: 1.6,
    h1_size: 32.0,
    h2_size: 24.0,
    h3_size: 20.0,
    body_size: 16.0,
    fragment: "h1,h2,h3,h4,h5,h6{margin-top:24px;margin-bottom:16px}\
h1,h2{border-bottom:1px solid var(--border);padding-bottom:.3em}\
code,pre{border-radius:6px}\
th{background:var(--code-bg)}",
};

const NOTION: StyleSheet = StyleSheet {
    colors: StyleColors {
        background: "#ffffff",
        heading: "#37352f",
        text: "#37352f",
        link: "#37352f",
        code_background: "rgba(135,131,120,0.15)",
        border: "#e9e9e7",
        quote: "#787774",
    },
    body_font: "ui-sans-serif,-apple-system,BlinkMacSystemFont,'Segoe UI',Helvetica,Arial,sans-serif",
    code_font: "SFMono-Regular,Menlo,monospace",
    padding: 40.0,
    line_height: 1.7,
    h1_size: 40.0,
    h2_size: 29.0,
    h3_size: 23.0,
    body_size: 16.0,
    fragment: "h1,h2,h3,h4,h5,h6{margin-top:28px;margin-bottom:4px}\
p{margin-bottom:12px}\
a{text-decoration:underline}\
code,pre{border-radius:3px}\
blockquote{padding:0 0 0 14px;border-left:3px solid var(--text);margin:0 0 12px 0}\
ul,ol{padding-left:24px;margin-bottom:12px}\
th,td{border:0;border-bottom:1px solid var(--border);padding:8px 12px}",
};

const DARK: StyleSheet = StyleSheet {
    colors: StyleColors {
        background: "#0d1117",
        heading: "#f0f6fc",
        text: "#c9d1d9",
        link: "#58a6ff",
        code_background: "#161b22",
        border: "#30363d",
        quote: "#8b949e",
    },
    body_font: SYSTEM_SANS,
    code_font: SYSTEM_MONO,
    padding: 32.0,
    line_height: 1.6,
    h1_size: 32.0,
    h2_size: 24.0,
    h3_size: 20.0,
    body_size: 16.0,
    fragment: "h1,h2,h3,h4,h5,h6{margin-top:24px;margin-bottom:16px}\
h1,h2{border-bottom:1px solid var(--border);padding-bottom:.3em}\
code,pre{border-radius:6px}\
th{background:var(--code-bg)}",
};

const MINIMAL: StyleSheet = StyleSheet {
    colors: StyleColors {
        background: "#ffffff",
        heading: "#333333",
        text: "#333333",
        link: "#0066cc",
        code_background: "#f5f5f5",
        border: "#e0e0e0",
        quote: "#666666",
    },
    body_font: "-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif",
    code_font: "SFMono-Regular,Menlo,monospace",
    padding: 24.0,
    line_height: 1.7,
    h1_size: 29.0,
    h2_size: 22.0,
    h3_size: 19.0,
    body_size: 16.0,
    fragment: "h1,h2,h3,h4,h5,h6{margin-top:24px;margin-bottom:12px}\
p{margin-bottom:12px}\
code{padding:2px 6px;font-size:90%}\
code,pre{border-radius:3px}\
pre{padding:12px}\
blockquote{padding:0 0 0 12px;border-left:3px solid var(--border);margin:12px 0}\
ul,ol{padding-left:20px}\
th,td{border:0;border-bottom:1px solid var(--border);padding:8px 12px}",
};

impl StyleName {
    /// The style's registered sheet.
    pub fn sheet(self) -> &'static StyleSheet {
        match self {
            StyleName::Github => &GITHUB,
            StyleName::Notion => &NOTION,
            StyleName::Dark => &DARK,
            StyleName::Minimal => &MINIMAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_has_a_sheet() {
        for style in StyleName::ALL {
            let sheet = style.sheet();
            assert!(sheet.padding > 0.0);
            assert!(sheet.line_height > 1.0);
            assert!(sheet.h1_size > sheet.h2_size);
            assert!(sheet.h2_size > sheet.h3_size);
            assert!(sheet.h3_size > sheet.body_size);
            assert!(!sheet.fragment.is_empty());
        }
    }

    #[test]
    fn dark_style_uses_dark_palette() {
        let sheet = StyleName::Dark.sheet();
        assert_eq!(sheet.colors.background, "#0d1117");
        assert_eq!(sheet.colors.heading, "#f0f6fc");
        assert_ne!(sheet.colors.heading, sheet.colors.text);
    }

    #[test]
    fn light_styles_have_distinct_links() {
        assert_ne!(
            StyleName::Github.sheet().colors.link,
            StyleName::Minimal.sheet().colors.link
        );
    }

    #[test]
    fn notion_underlines_links() {
        assert!(StyleName::Notion.sheet().fragment.contains("text-decoration:underline"));
        assert!(!StyleName::Github.sheet().fragment.contains("text-decoration:underline"));
    }
}
