//! Size preset registry: named target dimensions for publishing platforms.

use serde::Serialize;

/// A named width/height pair matching a platform's expected image dimensions.
///
/// A preset without a height renders in auto-height mode (the image is as tall
/// as the content); a preset with one renders fixed-height, cropping overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizePreset {
    pub name: &'static str,
    /// Logical width in CSS pixels.
    pub width: u32,
    /// Logical height in CSS pixels; `None` means auto.
    pub height: Option<u32>,
    pub description: &'static str,
}

/// All registered presets, in listing order.
const SIZE_PRESETS: &[SizePreset] = &[
    SizePreset {
        name: "wechat-moment",
        width: 1080,
        height: None,
        description: "WeChat Moments card (1080 wide, auto height)",
    },
    SizePreset {
        name: "xiaohongshu",
        width: 1080,
        height: Some(1440),
        description: "Xiaohongshu 3:4 note cover (1080x1440)",
    },
    SizePreset {
        name: "instagram-square",
        width: 1080,
        height: Some(1080),
        description: "Instagram square post (1080x1080)",
    },
    SizePreset {
        name: "twitter",
        width: 1200,
        height: Some(675),
        description: "Twitter/X 16:9 summary card (1200x675)",
    },
];

/// Look up a preset by name. Absence is not an error; callers fall back to
/// explicit or default dimensions.
pub fn size_preset(name: &str) -> Option<&'static SizePreset> {
    SIZE_PRESETS.iter().find(|p| p.name == name)
}

/// Every registered preset, in a stable order for display.
pub fn list_size_presets() -> &'static [SizePreset] {
    SIZE_PRESETS
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn documented_presets_are_registered() {
        let wechat = size_preset("wechat-moment").unwrap();
        assert_eq!((wechat.width, wechat.height), (1080, None));

        let xhs = size_preset("xiaohongshu").unwrap();
        assert_eq!((xhs.width, xhs.height), (1080, Some(1440)));

        let ig = size_preset("instagram-square").unwrap();
        assert_eq!((ig.width, ig.height), (1080, Some(1080)));

        let tw = size_preset("twitter").unwrap();
        assert_eq!((tw.width, tw.height), (1200, Some(675)));
    }

    #[test]
    fn unknown_preset_is_none() {
        assert!(size_preset("billboard").is_none());
        assert!(size_preset("").is_none());
    }

    #[test]
    fn listing_is_stable_and_unique() {
        let listed = list_size_presets();
        assert_eq!(listed, list_size_presets());

        let mut names: Vec<&str> = listed.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), listed.len(), "preset names must be unique");
    }

    #[test]
    fn every_listed_preset_resolves_by_name() {
        for preset in list_size_presets() {
            assert_eq!(size_preset(preset.name), Some(preset));
        }
    }
}
