use serde::{Deserialize, Serialize};
use std::fmt;

/// Which item the `autoplay` query parameter opens on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AutoplayTarget {
    #[default]
    First,
    Last,
}

impl AutoplayTarget {
    /// `last` selects the last item; every other value falls back to the first.
    pub fn parse(value: &str) -> Self {
        match value {
            "last" => AutoplayTarget::Last,
            _ => AutoplayTarget::First,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AutoplayTarget::First => "first",
            AutoplayTarget::Last => "last",
        }
    }
}

impl fmt::Display for AutoplayTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `crossorigin` mode for inline media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CrossOrigin {
    #[default]
    Anonymous,
    UseCredentials,
}

impl CrossOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            CrossOrigin::Anonymous => "anonymous",
            CrossOrigin::UseCredentials => "use-credentials",
        }
    }
}

impl fmt::Display for CrossOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Query parameter read once on load, then stripped from the address.
    pub autoplay_param: String,
    /// Attribute that marks an element as a gallery member (`="true"`).
    pub member_attribute: String,
    pub overlay_id: String,
    pub lazy_loading: bool,
    pub cross_origin: CrossOrigin,
    pub unsupported_message: String,
    pub download_label: String,
    /// Downgrade members whose declared type contradicts their MIME type.
    pub verify_types: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            autoplay_param: "autoplay".to_string(),
            member_attribute: "data-media".to_string(),
            overlay_id: "media-modal".to_string(),
            lazy_loading: true,
            cross_origin: CrossOrigin::default(),
            unsupported_message: "File type not supported".to_string(),
            download_label: "Download".to_string(),
            verify_types: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_target_parsing() {
        assert_eq!(AutoplayTarget::parse("last"), AutoplayTarget::Last);
        assert_eq!(AutoplayTarget::parse("first"), AutoplayTarget::First);
        assert_eq!(AutoplayTarget::parse("middle"), AutoplayTarget::First);
        assert_eq!(AutoplayTarget::parse(""), AutoplayTarget::First);
        assert_eq!(AutoplayTarget::Last.to_string(), "last");
    }

    #[test]
    fn defaults_match_the_admin_markup() {
        let config = GalleryConfig::default();
        assert_eq!(config.autoplay_param, "autoplay");
        assert_eq!(config.member_attribute, "data-media");
        assert_eq!(config.overlay_id, "media-modal");
        assert_eq!(config.cross_origin.to_string(), "anonymous");
        assert!(!config.verify_types);
    }
}
