//! Category tags and their colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named, colored category label attachable to sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: TagColor,
}

impl Tag {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: TagColor) -> Self {
        Tag {
            id: id.into(),
            name: name.into(),
            color,
        }
    }
}

/// Tags used when nothing has been stored yet.
pub fn default_tags() -> Vec<Tag> {
    vec![
        Tag::new("1", "外景拍摄", TagColor::Green),
        Tag::new("2", "棚内拍摄", TagColor::Blue),
        Tag::new("3", "新生儿", TagColor::Pink),
        Tag::new("4", "婚礼跟拍", TagColor::Purple),
        Tag::new("5", "宠物摄影", TagColor::Orange),
    ]
}

/// Symbolic color of a tag.
///
/// Serialized as the lowercase color name. Records written with the old
/// style-class strings (`"bg-green-100 text-green-700"`) are still accepted;
/// unknown names degrade to [`TagColor::NEUTRAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TagColor {
    Green,
    Blue,
    Pink,
    Purple,
    Orange,
    Emerald,
    Sky,
    Rose,
    Violet,
    Gray,
}

/// Display attributes for a tag color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorStyle {
    pub label: &'static str,
    /// Dot color as RGB
    pub dot: (u8, u8, u8),
}

impl TagColor {
    /// Colors offered when creating a new tag, in display order.
    pub const PALETTE: [TagColor; 6] = [
        TagColor::Emerald,
        TagColor::Sky,
        TagColor::Rose,
        TagColor::Violet,
        TagColor::Orange,
        TagColor::Gray,
    ];

    /// Color shown for sessions whose tag cannot be resolved.
    pub const NEUTRAL: TagColor = TagColor::Gray;

    pub const ALL: [TagColor; 10] = [
        TagColor::Green,
        TagColor::Blue,
        TagColor::Pink,
        TagColor::Purple,
        TagColor::Orange,
        TagColor::Emerald,
        TagColor::Sky,
        TagColor::Rose,
        TagColor::Violet,
        TagColor::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TagColor::Green => "green",
            TagColor::Blue => "blue",
            TagColor::Pink => "pink",
            TagColor::Purple => "purple",
            TagColor::Orange => "orange",
            TagColor::Emerald => "emerald",
            TagColor::Sky => "sky",
            TagColor::Rose => "rose",
            TagColor::Violet => "violet",
            TagColor::Gray => "gray",
        }
    }

    pub fn style(self) -> ColorStyle {
        let (label, dot) = match self {
            TagColor::Green => ("草地绿", (0x4a, 0xde, 0x80)),
            TagColor::Blue => ("海盐蓝", (0x60, 0xa5, 0xfa)),
            TagColor::Pink => ("樱花粉", (0xf4, 0x72, 0xb6)),
            TagColor::Purple => ("葡萄紫", (0xc0, 0x84, 0xfc)),
            TagColor::Orange => ("橘猫黄", (0xfb, 0x92, 0x3c)),
            TagColor::Emerald => ("薄荷绿", (0x34, 0xd3, 0x99)),
            TagColor::Sky => ("天空蓝", (0x38, 0xbd, 0xf8)),
            TagColor::Rose => ("蜜桃粉", (0xfb, 0x71, 0x85)),
            TagColor::Violet => ("香芋紫", (0xa7, 0x8b, 0xfa)),
            TagColor::Gray => ("石墨灰", (0x9c, 0xa3, 0xaf)),
        };
        ColorStyle { label, dot }
    }

    fn from_name(name: &str) -> Option<TagColor> {
        TagColor::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Parse either a color name or a legacy `"bg-<color>-100 text-<color>-700"` class string.
    fn parse_lenient(s: &str) -> Option<TagColor> {
        let s = s.trim();
        match s.strip_prefix("bg-") {
            Some(rest) => rest.split('-').next().and_then(TagColor::from_name),
            None => TagColor::from_name(s),
        }
    }
}

impl Default for TagColor {
    fn default() -> Self {
        TagColor::PALETTE[0]
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TagColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagColor::parse_lenient(s).ok_or_else(|| {
            let names: Vec<_> = TagColor::ALL.iter().map(|c| c.name()).collect();
            format!("Unknown color '{}'. Expected one of: {}", s, names.join(", "))
        })
    }
}

impl From<String> for TagColor {
    fn from(s: String) -> Self {
        TagColor::parse_lenient(&s).unwrap_or_else(|| {
            log::warn!("unknown tag color '{}', using {}", s, TagColor::NEUTRAL);
            TagColor::NEUTRAL
        })
    }
}

impl From<TagColor> for String {
    fn from(color: TagColor) -> Self {
        color.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tags_cover_five_categories() {
        let tags = default_tags();
        let ids: Vec<_> = tags.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(tags[2].name, "新生儿");
        assert_eq!(tags[2].color, TagColor::Pink);
    }

    #[test]
    fn color_serializes_as_name() {
        let tag = Tag::new("a", "Studio", TagColor::Sky);
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, r#"{"id":"a","name":"Studio","color":"sky"}"#);
    }

    #[test]
    fn legacy_class_string_is_accepted() {
        let tag: Tag =
            serde_json::from_str(r#"{"id":"1","name":"外景拍摄","color":"bg-green-100 text-green-700"}"#)
                .unwrap();
        assert_eq!(tag.color, TagColor::Green);
    }

    #[test]
    fn unknown_color_degrades_to_neutral() {
        let tag: Tag = serde_json::from_str(r#"{"id":"1","name":"x","color":"bg-teal-100"}"#).unwrap();
        assert_eq!(tag.color, TagColor::NEUTRAL);
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        assert_eq!("Violet".parse::<TagColor>(), Ok(TagColor::Violet));
        assert!("magenta".parse::<TagColor>().is_err());
    }

    #[test]
    fn palette_starts_with_default_color() {
        assert_eq!(TagColor::default(), TagColor::Emerald);
        assert_eq!(TagColor::Emerald.style().label, "薄荷绿");
    }
}
