//! Section model
//!
//! A page is an ordered list of [`SectionDefinition`]s. Each one carries a
//! stable id and a [`SectionContent`] payload whose variant is fixed by the
//! section kind, so a `nav` section can only ever hold [`NavContent`].
//!
//! On disk a section looks like:
//!
//! ```toml
//! [[sections]]
//! id = "nav"
//! type = "nav"
//!
//! [sections.content]
//! navVariant = "liquid-glass"
//! ```

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

// Submodules
mod blocks;
mod error;
mod nav;
mod section_type;

// Re-export public types
pub use blocks::{
    AgendaContent, AgendaItem, CountdownContent, CustomContent, GiftItem, GiftsContent,
    GuestbookContent, HeroContent, RsvpContent,
};
pub use error::SectionModelError;
pub use nav::{
    ActiveHighlight, LinkItem, NavAlignment, NavContent, NavPosition, NavUpdate, NavVariant,
    DEFAULT_ACTIVE_COLOR, NEW_LINK_LABEL,
};
pub use section_type::SectionType;

/// Field names a content schema reads, in camelCase wire form
pub trait ContentSchema {
    const FIELDS: &'static [&'static str];
}

/// Typed payload of a section, one variant per [`SectionType`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionContent {
    Nav(NavContent),
    Hero(HeroContent),
    Agenda(AgendaContent),
    Rsvp(RsvpContent),
    Guestbook(GuestbookContent),
    Countdown(CountdownContent),
    Gifts(GiftsContent),
    Custom(CustomContent),
}

impl SectionContent {
    /// Kind this payload belongs to
    pub fn section_type(&self) -> SectionType {
        match self {
            SectionContent::Nav(_) => SectionType::Nav,
            SectionContent::Hero(_) => SectionType::Hero,
            SectionContent::Agenda(_) => SectionType::Agenda,
            SectionContent::Rsvp(_) => SectionType::Rsvp,
            SectionContent::Guestbook(_) => SectionType::Guestbook,
            SectionContent::Countdown(_) => SectionType::Countdown,
            SectionContent::Gifts(_) => SectionType::Gifts,
            SectionContent::Custom(_) => SectionType::Custom,
        }
    }

    /// Empty payload for a kind (every field at its default)
    pub fn empty(kind: SectionType) -> Self {
        match kind {
            SectionType::Nav => SectionContent::Nav(NavContent::default()),
            SectionType::Hero => SectionContent::Hero(HeroContent::default()),
            SectionType::Agenda => SectionContent::Agenda(AgendaContent::default()),
            SectionType::Rsvp => SectionContent::Rsvp(RsvpContent::default()),
            SectionType::Guestbook => SectionContent::Guestbook(GuestbookContent::default()),
            SectionType::Countdown => SectionContent::Countdown(CountdownContent::default()),
            SectionType::Gifts => SectionContent::Gifts(GiftsContent::default()),
            SectionType::Custom => SectionContent::Custom(CustomContent::default()),
        }
    }

    /// Fields the schema of `kind` reads
    pub fn fields(kind: SectionType) -> &'static [&'static str] {
        match kind {
            SectionType::Nav => NavContent::FIELDS,
            SectionType::Hero => HeroContent::FIELDS,
            SectionType::Agenda => AgendaContent::FIELDS,
            SectionType::Rsvp => RsvpContent::FIELDS,
            SectionType::Guestbook => GuestbookContent::FIELDS,
            SectionType::Countdown => CountdownContent::FIELDS,
            SectionType::Gifts => GiftsContent::FIELDS,
            SectionType::Custom => CustomContent::FIELDS,
        }
    }

    /// Heading text, for kinds that have one
    pub fn title(&self) -> Option<&str> {
        match self {
            SectionContent::Nav(_) => None,
            SectionContent::Hero(c) => Some(&c.title),
            SectionContent::Agenda(c) => Some(&c.title),
            SectionContent::Rsvp(c) => Some(&c.title),
            SectionContent::Guestbook(c) => Some(&c.title),
            SectionContent::Countdown(c) => Some(&c.title),
            SectionContent::Gifts(c) => Some(&c.title),
            SectionContent::Custom(c) => Some(&c.title),
        }
    }

    /// Nav payload, if this is a nav section
    pub fn as_nav(&self) -> Option<&NavContent> {
        match self {
            SectionContent::Nav(nav) => Some(nav),
            _ => None,
        }
    }

    /// Decode the raw `content` table of a section of the given kind
    ///
    /// A missing table yields the empty payload.
    fn decode(kind: SectionType, value: Option<toml::Value>) -> Result<Self, toml::de::Error> {
        let Some(value) = value else {
            return Ok(Self::empty(kind));
        };

        Ok(match kind {
            SectionType::Nav => SectionContent::Nav(value.try_into()?),
            SectionType::Hero => SectionContent::Hero(value.try_into()?),
            SectionType::Agenda => SectionContent::Agenda(value.try_into()?),
            SectionType::Rsvp => SectionContent::Rsvp(value.try_into()?),
            SectionType::Guestbook => SectionContent::Guestbook(value.try_into()?),
            SectionType::Countdown => SectionContent::Countdown(value.try_into()?),
            SectionType::Gifts => SectionContent::Gifts(value.try_into()?),
            SectionType::Custom => SectionContent::Custom(value.try_into()?),
        })
    }
}

/// One section of a page
///
/// The id never changes once assigned. Edits produce a new value through
/// [`SectionDefinition::with_content`] that keeps the id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSection")]
pub struct SectionDefinition {
    id: String,
    content: SectionContent,
    styles: BTreeMap<String, String>,
}

impl SectionDefinition {
    /// Create a section
    pub fn new(id: impl Into<String>, content: SectionContent) -> Self {
        Self {
            id: id.into(),
            content,
            styles: BTreeMap::new(),
        }
    }

    /// Attach free-form inline style overrides
    pub fn with_styles(mut self, styles: BTreeMap<String, String>) -> Self {
        self.styles = styles;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn section_type(&self) -> SectionType {
        self.content.section_type()
    }

    pub fn content(&self) -> &SectionContent {
        &self.content
    }

    pub fn styles(&self) -> &BTreeMap<String, String> {
        &self.styles
    }

    /// Same section with a different id (used when seeding from the catalog)
    pub(crate) fn reassigned(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: self.content.clone(),
            styles: self.styles.clone(),
        }
    }

    /// Build the next value of this section with new content
    ///
    /// # Parameters
    /// * `content` - Replacement payload; must be of the same kind
    ///
    /// # Returns
    /// * `Ok(SectionDefinition)` - New value with the same id and styles
    /// * `Err(SectionModelError::KindMismatch)` - The payload is of another kind
    pub fn with_content(&self, content: SectionContent) -> Result<Self, SectionModelError> {
        if content.section_type() != self.section_type() {
            return Err(SectionModelError::KindMismatch {
                id: self.id.clone(),
                expected: self.section_type(),
                found: content.section_type(),
            });
        }

        Ok(Self {
            id: self.id.clone(),
            content,
            styles: self.styles.clone(),
        })
    }
}

/// Wire shape of a section before its content is decoded by kind
#[derive(Deserialize)]
struct RawSection {
    id: String,
    #[serde(rename = "type")]
    kind: SectionType,
    #[serde(default)]
    content: Option<toml::Value>,
    #[serde(default)]
    styles: BTreeMap<String, String>,
}

impl TryFrom<RawSection> for SectionDefinition {
    type Error = SectionModelError;

    fn try_from(raw: RawSection) -> Result<Self, Self::Error> {
        let content = SectionContent::decode(raw.kind, raw.content).map_err(|source| {
            SectionModelError::InvalidContent {
                id: raw.id.clone(),
                kind: raw.kind,
                source,
            }
        })?;

        Ok(Self {
            id: raw.id,
            content,
            styles: raw.styles,
        })
    }
}

/// Borrowed wire shape used for serialization
#[derive(Serialize)]
struct RawSectionRef<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    kind: SectionType,
    content: &'a SectionContent,
    #[serde(skip_serializing_if = "no_styles")]
    styles: &'a BTreeMap<String, String>,
}

fn no_styles(styles: &&BTreeMap<String, String>) -> bool {
    styles.is_empty()
}

impl Serialize for SectionDefinition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawSectionRef {
            id: &self.id,
            kind: self.section_type(),
            content: &self.content,
            styles: &self.styles,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Sections {
        sections: Vec<SectionDefinition>,
    }

    #[test]
    fn test_content_shape_follows_type() {
        let parsed: Sections = toml::from_str(
            r##"
[[sections]]
id = "nav"
type = "nav"

[sections.content]
navVariant = "material"

[[sections.content.links]]
label = "Agenda"
targetId = "agenda"

[[sections]]
id = "agenda"
type = "agenda"

[sections.content]
title = "Programa"
"##,
        )
        .unwrap();

        assert_eq!(parsed.sections[0].section_type(), SectionType::Nav);
        let nav = parsed.sections[0].content().as_nav().unwrap();
        assert_eq!(nav.nav_variant, NavVariant::Material);
        assert_eq!(nav.links, vec![LinkItem::new("Agenda", "agenda")]);

        assert_eq!(parsed.sections[1].section_type(), SectionType::Agenda);
        assert_eq!(parsed.sections[1].content().title(), Some("Programa"));
    }

    #[test]
    fn test_missing_content_is_empty_payload() {
        let parsed: Sections = toml::from_str(
            r#"
[[sections]]
id = "menu"
type = "nav"
"#,
        )
        .unwrap();
        assert_eq!(
            parsed.sections[0].content(),
            &SectionContent::Nav(NavContent::default())
        );
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<Sections, _> = toml::from_str(
            r#"
[[sections]]
id = "x"
type = "carousel"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_mistyped_content_is_rejected() {
        let result: Result<Sections, _> = toml::from_str(
            r#"
[[sections]]
id = "menu"
type = "nav"

[sections.content]
links = "not a list"
"#,
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("menu"), "{}", message);
    }

    #[test]
    fn test_roundtrip_keeps_type_and_styles() {
        let mut styles = BTreeMap::new();
        styles.insert("margin-top".to_string(), "8px".to_string());
        let section = SectionDefinition::new(
            "menu",
            SectionContent::Nav(NavContent {
                links: vec![LinkItem::new("Início", "top")],
                ..NavContent::default()
            }),
        )
        .with_styles(styles);

        let written = toml::to_string(&Sections {
            sections: vec![section.clone()],
        })
        .unwrap();
        assert!(written.contains("type = \"nav\""));

        let parsed: Sections = toml::from_str(&written).unwrap();
        assert_eq!(parsed.sections[0], section);
    }

    #[test]
    fn test_with_content_keeps_id_and_kind() {
        let section = SectionDefinition::new("menu", SectionContent::empty(SectionType::Nav));
        let next = section
            .with_content(SectionContent::Nav(NavContent {
                is_sticky: true,
                ..NavContent::default()
            }))
            .unwrap();
        assert_eq!(next.id(), "menu");
        assert!(next.content().as_nav().unwrap().is_sticky);

        let err = section
            .with_content(SectionContent::empty(SectionType::Hero))
            .unwrap_err();
        assert!(matches!(err, SectionModelError::KindMismatch { .. }));
    }
}
