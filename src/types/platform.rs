//! Platform dimension table.
//!
//! Dimensions are keyed by `"<platform>_<asset>"`, e.g. `youtube_thumbnail`.
//! Lookups that miss the table fall back to the asset kind's default size.

use std::collections::BTreeMap;
use std::fmt;

/// The kind of asset a generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Thumbnail,
    Banner,
    Post,
    Carousel,
}

impl AssetKind {
    /// Key suffix used in the platform table.
    pub fn key(self) -> &'static str {
        match self {
            AssetKind::Thumbnail => "thumbnail",
            AssetKind::Banner => "banner",
            AssetKind::Post => "post",
            AssetKind::Carousel => "carousel",
        }
    }

    /// Size used when a platform has no entry for this asset kind.
    pub fn default_size(self) -> (u32, u32) {
        match self {
            AssetKind::Thumbnail => (1280, 720),
            AssetKind::Banner => (2560, 1440),
            AssetKind::Post | AssetKind::Carousel => (1080, 1080),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Immutable lookup of `"<platform>_<asset>"` to `(width, height)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformDimensions {
    entries: BTreeMap<String, (u32, u32)>,
}

impl PlatformDimensions {
    /// The built-in table of platform sizes.
    pub fn builtin() -> Self {
        let entries = [
            ("youtube_thumbnail", (1280, 720)),
            ("youtube_banner", (2560, 1440)),
            ("instagram_post", (1080, 1080)),
            ("instagram_story", (1080, 1920)),
            ("instagram_carousel", (1080, 1080)),
            ("linkedin_post", (1200, 627)),
            ("linkedin_banner", (1584, 396)),
            ("twitter_post", (1200, 675)),
            ("twitter_header", (1500, 500)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self { entries }
    }

    /// Build a table from explicit entries, without the built-ins.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, (u32, u32))>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Return a copy with `overrides` added on top of the current entries.
    pub fn merged(&self, overrides: &BTreeMap<String, (u32, u32)>) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(overrides.iter().map(|(k, v)| (k.clone(), *v)));
        Self { entries }
    }

    /// Look up a raw key.
    pub fn get(&self, key: &str) -> Option<(u32, u32)> {
        self.entries.get(key).copied()
    }

    /// Resolve the size for a platform and asset kind, with fallback.
    pub fn resolve(&self, platform: &str, kind: AssetKind) -> (u32, u32) {
        self.get(&format!("{}_{}", platform, kind.key()))
            .unwrap_or_else(|| kind.default_size())
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, (u32, u32))> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PlatformDimensions {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_key() {
        let dims = PlatformDimensions::builtin();
        assert_eq!(dims.resolve("youtube", AssetKind::Thumbnail), (1280, 720));
        assert_eq!(dims.resolve("linkedin", AssetKind::Banner), (1584, 396));
        assert_eq!(dims.resolve("twitter", AssetKind::Post), (1200, 675));
    }

    #[test]
    fn test_resolve_falls_back_to_kind_default() {
        let dims = PlatformDimensions::builtin();
        assert_eq!(dims.resolve("instagram", AssetKind::Thumbnail), (1280, 720));
        assert_eq!(dims.resolve("twitter", AssetKind::Banner), (2560, 1440));
        assert_eq!(dims.resolve("linkedin", AssetKind::Carousel), (1080, 1080));
    }

    #[test]
    fn test_merged_overrides() {
        let mut overrides = BTreeMap::new();
        overrides.insert("youtube_thumbnail".to_string(), (640, 360));
        overrides.insert("tiktok_post".to_string(), (1080, 1920));

        let dims = PlatformDimensions::builtin().merged(&overrides);
        assert_eq!(dims.resolve("youtube", AssetKind::Thumbnail), (640, 360));
        assert_eq!(dims.resolve("tiktok", AssetKind::Post), (1080, 1920));
        assert_eq!(dims.len(), 10);
    }

    #[test]
    fn test_empty_table_uses_defaults() {
        let dims = PlatformDimensions::from_entries(Vec::new());
        assert!(dims.is_empty());
        assert_eq!(dims.resolve("youtube", AssetKind::Thumbnail), (1280, 720));
    }
}
