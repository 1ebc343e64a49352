//! Navigation section content
//!
//! Every field is optional on input. Absent fields fall back to the defaults
//! documented on each type, and unrecognized enum strings deserialize to an
//! explicit `Unknown` value that the renderer maps to a neutral treatment.

use super::ContentSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Highlight color used when `activeColor` is absent
pub const DEFAULT_ACTIVE_COLOR: &str = "#e11d48";

/// Label given to links created from the edit-mode "add" affordance
pub const NEW_LINK_LABEL: &str = "New link";

/// One entry of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkItem {
    /// Visible text
    pub label: String,
    /// Anchor id of the section this link scrolls to
    pub target_id: String,
}

impl LinkItem {
    /// Create a link
    pub fn new(label: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target_id: target_id.into(),
        }
    }
}

/// Where the bar sits relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavPosition {
    /// In document flow at the top of the page
    #[default]
    Top,
    /// Sticks to the viewport top while scrolling
    Sticky,
    /// Pinned to the viewport edges
    Fixed,
    /// Pill centered near the bottom of the viewport
    Floating,
    /// Any value this version does not know
    #[serde(other)]
    Unknown,
}

/// Visual treatment of the bar surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavVariant {
    /// Flat translucent bar
    #[default]
    Classic,
    /// Elevated bar with a drop shadow
    Material,
    /// Blurred translucent glass with a bottom border
    LiquidGlass,
    /// Any value this version does not know
    #[serde(other)]
    Unknown,
}

/// Horizontal justification of the link row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavAlignment {
    Left,
    Right,
    /// Also catches unrecognized values
    #[default]
    #[serde(other)]
    Center,
}

/// How the link matching the active scroll section is marked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveHighlight {
    /// Decorative bar under the label
    #[default]
    Underline,
    /// Filled pill behind the label
    Background,
    /// No visual change
    None,
    /// Any value this version does not know
    #[serde(other)]
    Unknown,
}

/// Content of a `nav` section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavContent {
    /// Ordered links
    pub links: Vec<LinkItem>,
    /// Placement; `navStyle` is the older name of this field
    #[serde(alias = "navStyle")]
    pub nav_position: NavPosition,
    pub nav_variant: NavVariant,
    pub alignment: NavAlignment,
    /// Upgrades a `top` placement to `sticky`
    pub is_sticky: bool,
    /// Drops the bar background entirely
    pub is_transparent: bool,
    /// Surface opacity in percent; only material and liquid-glass read it
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_percent"
    )]
    pub opacity: Option<u8>,
    /// Backdrop blur in pixels; only liquid-glass reads it
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_pixels"
    )]
    pub blur_amount: Option<u32>,
    pub active_highlight: ActiveHighlight,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_color: Option<String>,
    /// Lets the link row scroll horizontally instead of wrapping
    pub is_scrollable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl NavContent {
    /// Opacity clamped to a percentage, if set
    pub fn opacity_percent(&self) -> Option<u8> {
        self.opacity.map(|value| value.min(100))
    }

    /// Highlight color, falling back to [`DEFAULT_ACTIVE_COLOR`]
    pub fn active_color(&self) -> &str {
        self.active_color
            .as_deref()
            .filter(|color| !color.trim().is_empty())
            .unwrap_or(DEFAULT_ACTIVE_COLOR)
    }

    /// Build the next content value with a partial update merged in
    ///
    /// # Parameters
    /// * `update` - Partial content produced by an edit callback
    ///
    /// # Returns
    /// * `NavContent` - A new value; `self` is left untouched
    pub fn merged(&self, update: NavUpdate) -> NavContent {
        let mut next = self.clone();
        if let Some(links) = update.links {
            next.links = links;
        }
        next
    }
}

impl ContentSchema for NavContent {
    const FIELDS: &'static [&'static str] = &[
        "links",
        "navPosition",
        "navVariant",
        "alignment",
        "isSticky",
        "isTransparent",
        "opacity",
        "blurAmount",
        "activeHighlight",
        "activeColor",
        "isScrollable",
        "backgroundColor",
        "textColor",
    ];
}

/// Any number, rounded; negative or non-finite values count as absent
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(f64::round))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn deserialize_percent<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.map(|v| v.min(100.0) as u8))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn deserialize_pixels<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.map(|v| v.min(f64::from(u32::MAX)) as u32))
}

/// Partial nav content emitted by edit callbacks
///
/// The owner of the section merges it into the full content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavUpdate {
    /// Replacement link sequence
    pub links: Option<Vec<LinkItem>>,
}
