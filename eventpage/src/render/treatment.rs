//! Dispatch tables from declarative nav fields to visual treatments
//!
//! Each table is a total `match` over its enum, so a new variant fails to
//! compile until it is given a treatment.

use crate::section_model::{ActiveHighlight, NavAlignment, NavContent, NavPosition, NavVariant};

/// Blur used by liquid-glass when `blurAmount` is absent
pub const DEFAULT_BLUR_PX: u32 = 12;

pub const LIGHT_BACKGROUND: &str = "#ffffff";
pub const LIGHT_TEXT: &str = "#1f2937";
pub const DARK_BACKGROUND: &str = "#111827";
pub const DARK_TEXT: &str = "#f9fafb";

/// Layout treatment for a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionTreatment {
    pub class: Option<&'static str>,
    pub style: &'static [(&'static str, &'static str)],
}

/// Surface treatment for a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantTreatment {
    pub class: &'static str,
    /// Background alpha in percent when the content sets none
    pub default_opacity: u8,
    /// Whether the content's `opacity` overrides the default
    pub reads_opacity: bool,
    pub shadow: Option<&'static str>,
    /// Whether the surface blurs what is behind it (sized by `blurAmount`)
    pub backdrop_blur: bool,
    pub bottom_border: Option<&'static str>,
}

/// Marking applied to a link that points at the section in view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightTreatment {
    Underline,
    Pill,
}

/// Resolved bar colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: String,
    pub text: String,
}

/// Placement after `isSticky` is taken into account
///
/// Explicit `fixed` and `floating` placements win over `isSticky`.
pub fn effective_position(content: &NavContent) -> NavPosition {
    match (content.nav_position, content.is_sticky) {
        (NavPosition::Top | NavPosition::Unknown, true) => NavPosition::Sticky,
        (position, _) => position,
    }
}

pub fn position_treatment(position: NavPosition) -> PositionTreatment {
    match position {
        NavPosition::Sticky => PositionTreatment {
            class: Some("nav-sticky"),
            style: &[("position", "sticky"), ("top", "0"), ("z-index", "50")],
        },
        NavPosition::Fixed => PositionTreatment {
            class: Some("nav-fixed"),
            style: &[
                ("left", "0"),
                ("position", "fixed"),
                ("right", "0"),
                ("top", "0"),
                ("z-index", "50"),
            ],
        },
        NavPosition::Floating => PositionTreatment {
            class: Some("nav-floating"),
            style: &[
                ("border-radius", "9999px"),
                ("bottom", "24px"),
                ("left", "50%"),
                ("max-width", "calc(100vw - 32px)"),
                ("position", "fixed"),
                ("transform", "translateX(-50%)"),
                ("width", "max-content"),
                ("z-index", "50"),
            ],
        },
        NavPosition::Top | NavPosition::Unknown => PositionTreatment {
            class: None,
            style: &[],
        },
    }
}

const CLASSIC: VariantTreatment = VariantTreatment {
    class: "nav-classic",
    default_opacity: 95,
    reads_opacity: false,
    shadow: None,
    backdrop_blur: false,
    bottom_border: None,
};

pub fn variant_treatment(variant: NavVariant) -> VariantTreatment {
    match variant {
        NavVariant::Classic | NavVariant::Unknown => CLASSIC,
        NavVariant::Material => VariantTreatment {
            class: "nav-material",
            default_opacity: 100,
            reads_opacity: true,
            shadow: Some("0 4px 12px rgba(0, 0, 0, 0.15)"),
            backdrop_blur: false,
            bottom_border: None,
        },
        NavVariant::LiquidGlass => VariantTreatment {
            class: "nav-liquid-glass",
            default_opacity: 70,
            reads_opacity: true,
            shadow: None,
            backdrop_blur: true,
            bottom_border: Some("1px solid rgba(255, 255, 255, 0.3)"),
        },
    }
}

/// `justify-content` value for the link row
pub fn justify_content(alignment: NavAlignment) -> &'static str {
    match alignment {
        NavAlignment::Left => "flex-start",
        NavAlignment::Center => "center",
        NavAlignment::Right => "flex-end",
    }
}

pub fn highlight_treatment(highlight: ActiveHighlight) -> Option<HighlightTreatment> {
    match highlight {
        ActiveHighlight::Underline => Some(HighlightTreatment::Underline),
        ActiveHighlight::Background => Some(HighlightTreatment::Pill),
        ActiveHighlight::None | ActiveHighlight::Unknown => None,
    }
}

/// Bar colors for the current theme
///
/// Dark mode ignores the content's colors. Otherwise non-empty explicit
/// colors win over the light defaults.
pub fn resolve_palette(
    is_dark: bool,
    background_color: Option<&str>,
    text_color: Option<&str>,
) -> Palette {
    if is_dark {
        return Palette {
            background: DARK_BACKGROUND.to_string(),
            text: DARK_TEXT.to_string(),
        };
    }

    let pick = |explicit: Option<&str>, fallback: &str| {
        explicit
            .map(str::trim)
            .filter(|color| !color.is_empty())
            .unwrap_or(fallback)
            .to_string()
    };

    Palette {
        background: pick(background_color, LIGHT_BACKGROUND),
        text: pick(text_color, LIGHT_TEXT),
    }
}

/// Apply an alpha percentage to a hex color
///
/// `#rgb` and `#rrggbb` become `rgba(...)`. Anything else (named colors,
/// `rgb()` expressions) is returned as is.
pub fn with_alpha(color: &str, percent: u8) -> String {
    match parse_hex(color) {
        Some((r, g, b)) => format!("rgba({}, {}, {}, {})", r, g, b, format_alpha(percent)),
        None => color.to_string(),
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let expand = |i: usize| channel(&hex[i..=i].repeat(2));
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

fn format_alpha(percent: u8) -> String {
    match percent.min(100) {
        100 => "1".to_string(),
        0 => "0".to_string(),
        p => format!("0.{:02}", p).trim_end_matches('0').to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_position_has_treatment() {
        let positioned = [NavPosition::Sticky, NavPosition::Fixed, NavPosition::Floating];
        for position in positioned {
            assert!(position_treatment(position).class.is_some());
        }
        assert_eq!(position_treatment(NavPosition::Unknown).style.len(), 0);
        assert_eq!(position_treatment(NavPosition::Top).class, None);
    }

    #[test]
    fn test_is_sticky_upgrades_top_only() {
        let mut content = NavContent {
            is_sticky: true,
            ..NavContent::default()
        };
        assert_eq!(effective_position(&content), NavPosition::Sticky);

        content.nav_position = NavPosition::Floating;
        assert_eq!(effective_position(&content), NavPosition::Floating);

        content.is_sticky = false;
        content.nav_position = NavPosition::Top;
        assert_eq!(effective_position(&content), NavPosition::Top);
    }

    #[test]
    fn test_unknown_variant_falls_back_to_classic() {
        assert_eq!(variant_treatment(NavVariant::Unknown), CLASSIC);
    }

    #[test]
    fn test_variants_are_disjoint() {
        let material = variant_treatment(NavVariant::Material);
        let glass = variant_treatment(NavVariant::LiquidGlass);
        assert!(material.shadow.is_some() && !material.backdrop_blur);
        assert!(glass.backdrop_blur && glass.shadow.is_none());
        assert!(CLASSIC.shadow.is_none() && !CLASSIC.backdrop_blur);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(justify_content(NavAlignment::default()), "center");
        assert_eq!(justify_content(NavAlignment::Right), "flex-end");
    }

    #[test]
    fn test_dark_palette_overrides_explicit_colors() {
        let palette = resolve_palette(true, Some("#ff0000"), Some("#00ff00"));
        assert_eq!(palette.background, DARK_BACKGROUND);
        assert_eq!(palette.text, DARK_TEXT);
    }

    #[test]
    fn test_explicit_colors_win_in_light_mode() {
        let palette = resolve_palette(false, Some("#ff0000"), Some(" "));
        assert_eq!(palette.background, "#ff0000");
        assert_eq!(palette.text, LIGHT_TEXT);
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#ffffff", 80), "rgba(255, 255, 255, 0.8)");
        assert_eq!(with_alpha("#fff", 100), "rgba(255, 255, 255, 1)");
        assert_eq!(with_alpha("#102030", 5), "rgba(16, 32, 48, 0.05)");
        assert_eq!(with_alpha("white", 50), "white");
        assert_eq!(with_alpha("#ggg", 50), "#ggg");
    }
}
