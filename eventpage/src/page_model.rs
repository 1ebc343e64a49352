//! Page document: the owner of the ordered section list
//!
//! Renderers only ever see one section at a time and report edits as partial
//! updates. This model applies those updates, seeds new sections from the
//! catalog and removes sections, always replacing a section with a new value
//! that keeps its id.

use crate::catalog::SectionCatalog;
use crate::page_config::{PageConfig, PageSettings};
use crate::section_model::{
    NavUpdate, SectionContent, SectionDefinition, SectionModelError, SectionType,
};
use thiserror::Error;

/// Errors raised by page operations
#[derive(Error, Debug)]
pub enum PageError {
    #[error("No section with id '{id}'")]
    UnknownSection { id: String },

    #[error("A section with id '{id}' already exists")]
    DuplicateSection { id: String },

    #[error("Section '{id}' is a '{kind}' section, not a nav section")]
    NotNav { id: String, kind: SectionType },

    #[error(transparent)]
    Model(#[from] SectionModelError),
}

/// Sections of a freshly initialized page, with ids matching the default nav links
const STARTER_SECTIONS: [(SectionType, &str); 8] = [
    (SectionType::Nav, "nav"),
    (SectionType::Hero, "top"),
    (SectionType::Countdown, "countdown"),
    (SectionType::Agenda, "agenda"),
    (SectionType::Custom, "location"),
    (SectionType::Rsvp, "rsvp"),
    (SectionType::Gifts, "gifts"),
    (SectionType::Guestbook, "guestbook"),
];

/// An event page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDocument {
    pub settings: PageSettings,
    sections: Vec<SectionDefinition>,
}

impl PageDocument {
    /// Create a page with no sections
    pub fn new(settings: PageSettings) -> Self {
        Self {
            settings,
            sections: Vec::new(),
        }
    }

    /// Create a page holding one catalog default of every section kind
    pub fn starter(settings: PageSettings, catalog: &SectionCatalog) -> Self {
        Self {
            settings,
            sections: STARTER_SECTIONS
                .iter()
                .map(|(kind, id)| catalog.seed(*kind, *id))
                .collect(),
        }
    }

    pub fn from_config(config: PageConfig) -> Self {
        Self {
            settings: config.page,
            sections: config.sections,
        }
    }

    pub fn to_config(&self) -> PageConfig {
        PageConfig {
            page: self.settings.clone(),
            sections: self.sections.clone(),
        }
    }

    pub fn sections(&self) -> &[SectionDefinition] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&SectionDefinition> {
        self.sections.iter().find(|section| section.id() == id)
    }

    /// Ids of every section, in page order; these are the anchors links can target
    pub fn anchor_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(SectionDefinition::id)
    }

    /// Append a section seeded from the catalog default for `kind`
    ///
    /// # Parameters
    /// * `catalog` - Catalog to seed from
    /// * `kind` - Kind of section to add
    ///
    /// # Returns
    /// * `&SectionDefinition` - The new section, with an id unique within the page
    pub fn add_section(&mut self, catalog: &SectionCatalog, kind: SectionType) -> &SectionDefinition {
        let id = self.next_id(kind);
        log::debug!("Adding '{}' section '{}'", kind, id);
        self.sections.push(catalog.seed(kind, id));
        &self.sections[self.sections.len() - 1]
    }

    /// Append an existing section
    ///
    /// # Returns
    /// * `Ok(())` - The section was appended
    /// * `Err(PageError::DuplicateSection)` - Another section already has its id
    pub fn push_section(&mut self, section: SectionDefinition) -> Result<(), PageError> {
        if self.section(section.id()).is_some() {
            return Err(PageError::DuplicateSection {
                id: section.id().to_string(),
            });
        }
        self.sections.push(section);
        Ok(())
    }

    /// Remove a section
    ///
    /// # Returns
    /// * `Ok(SectionDefinition)` - The removed section
    /// * `Err(PageError::UnknownSection)` - No section has this id
    pub fn remove_section(&mut self, id: &str) -> Result<SectionDefinition, PageError> {
        let index = self.position(id)?;
        Ok(self.sections.remove(index))
    }

    /// Merge a partial nav update into the identified nav section
    ///
    /// The section is replaced by a new value with the same id.
    pub fn apply_nav_update(&mut self, id: &str, update: NavUpdate) -> Result<(), PageError> {
        let index = self.position(id)?;
        let current = &self.sections[index];
        let nav = current.content().as_nav().ok_or_else(|| PageError::NotNav {
            id: id.to_string(),
            kind: current.section_type(),
        })?;

        let next = current.with_content(SectionContent::Nav(nav.merged(update)))?;
        self.sections[index] = next;
        Ok(())
    }

    fn position(&self, id: &str) -> Result<usize, PageError> {
        self.sections
            .iter()
            .position(|section| section.id() == id)
            .ok_or_else(|| PageError::UnknownSection { id: id.to_string() })
    }

    /// First free id of the form `<kind>` or `<kind>-<n>`
    fn next_id(&self, kind: SectionType) -> String {
        let taken = |candidate: &str| self.sections.iter().any(|s| s.id() == candidate);

        if !taken(kind.as_str()) {
            return kind.to_string();
        }
        (2..)
            .map(|n| format!("{}-{}", kind, n))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| kind.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SECTION_EXAMPLES;
    use crate::section_model::LinkItem;

    fn page() -> PageDocument {
        PageDocument::new(PageSettings {
            title: "Casamento".to_string(),
            description: None,
            dark: false,
        })
    }

    #[test]
    fn test_add_section_seeds_from_catalog() {
        let mut doc = page();
        let added = doc.add_section(&SECTION_EXAMPLES, SectionType::Nav).clone();
        assert_eq!(added.id(), "nav");
        assert_eq!(
            added.content(),
            SECTION_EXAMPLES.default_for(SectionType::Nav).content()
        );

        let second = doc.add_section(&SECTION_EXAMPLES, SectionType::Nav);
        assert_eq!(second.id(), "nav-2");
        assert_eq!(doc.sections().len(), 2);
    }

    #[test]
    fn test_apply_nav_update_keeps_id() {
        let mut doc = page();
        doc.add_section(&SECTION_EXAMPLES, SectionType::Nav);
        doc.apply_nav_update(
            "nav",
            NavUpdate {
                links: Some(vec![LinkItem::new("Só", "top")]),
            },
        )
        .unwrap();

        let nav = doc.section("nav").unwrap();
        assert_eq!(nav.id(), "nav");
        let content = nav.content().as_nav().unwrap();
        assert_eq!(content.links, vec![LinkItem::new("Só", "top")]);
        let default = SECTION_EXAMPLES.default_for(SectionType::Nav);
        assert_eq!(
            content.nav_variant,
            default.content().as_nav().unwrap().nav_variant
        );
    }

    #[test]
    fn test_apply_nav_update_errors() {
        let mut doc = page();
        doc.add_section(&SECTION_EXAMPLES, SectionType::Hero);

        assert!(matches!(
            doc.apply_nav_update("hero", NavUpdate::default()),
            Err(PageError::NotNav { .. })
        ));
        assert!(matches!(
            doc.apply_nav_update("missing", NavUpdate::default()),
            Err(PageError::UnknownSection { .. })
        ));
    }

    #[test]
    fn test_remove_section() {
        let mut doc = page();
        doc.add_section(&SECTION_EXAMPLES, SectionType::Hero);
        doc.add_section(&SECTION_EXAMPLES, SectionType::Gifts);

        let removed = doc.remove_section("hero").unwrap();
        assert_eq!(removed.section_type(), SectionType::Hero);
        assert_eq!(doc.anchor_ids().collect::<Vec<_>>(), vec!["gifts"]);
        assert!(doc.remove_section("hero").is_err());
    }

    #[test]
    fn test_starter_covers_every_kind() {
        let doc = PageDocument::starter(page().settings, &SECTION_EXAMPLES);
        for kind in SectionType::ALL {
            assert!(doc.sections().iter().any(|s| s.section_type() == kind));
        }

        let nav = doc.section("nav").unwrap().content().as_nav().unwrap();
        for link in &nav.links {
            assert!(doc.section(&link.target_id).is_some(), "{}", link.target_id);
        }
    }

    #[test]
    fn test_push_section_rejects_duplicate_id() {
        let mut doc = page();
        doc.push_section(SECTION_EXAMPLES.seed(SectionType::Hero, "top"))
            .unwrap();
        assert!(matches!(
            doc.push_section(SECTION_EXAMPLES.seed(SectionType::Custom, "top")),
            Err(PageError::DuplicateSection { .. })
        ));
        assert_eq!(doc.sections().len(), 1);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut doc = page();
        doc.add_section(&SECTION_EXAMPLES, SectionType::Countdown);
        assert_eq!(PageDocument::from_config(doc.to_config()), doc);
    }
}
