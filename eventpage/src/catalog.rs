//! Embedded section example catalog
//!
//! One TOML file per section kind is compiled into the binary. Each file
//! holds `[[examples]]` entries in the same shape a page uses for its
//! sections; the first entry of a kind is the default used to seed a newly
//! added section. The catalog is parsed once and shared for the process
//! lifetime.

use crate::section_model::{SectionDefinition, SectionType};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Errors raised while loading or querying the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("No such section type '{name}'")]
    NoSuchSectionType { name: String },

    #[error("Catalog for '{kind}' failed to parse: {source}")]
    ParseError {
        kind: SectionType,
        #[source]
        source: toml::de::Error,
    },

    #[error("Catalog for '{kind}' has no examples")]
    Empty { kind: SectionType },

    #[error("Catalog for '{kind}' contains example '{id}' of type '{found}'")]
    KindMismatch {
        kind: SectionType,
        id: String,
        found: SectionType,
    },
}

/// Embedded catalog source for one section kind
#[derive(Debug, Clone, Copy)]
pub struct CatalogSource {
    pub kind: SectionType,
    /// Raw TOML content
    pub content: &'static str,
}

/// All embedded catalog sources, one per kind
pub const CATALOG_SOURCES: [CatalogSource; 8] = [
    CatalogSource {
        kind: SectionType::Nav,
        content: include_str!("catalog/nav.toml"),
    },
    CatalogSource {
        kind: SectionType::Hero,
        content: include_str!("catalog/hero.toml"),
    },
    CatalogSource {
        kind: SectionType::Agenda,
        content: include_str!("catalog/agenda.toml"),
    },
    CatalogSource {
        kind: SectionType::Rsvp,
        content: include_str!("catalog/rsvp.toml"),
    },
    CatalogSource {
        kind: SectionType::Guestbook,
        content: include_str!("catalog/guestbook.toml"),
    },
    CatalogSource {
        kind: SectionType::Countdown,
        content: include_str!("catalog/countdown.toml"),
    },
    CatalogSource {
        kind: SectionType::Gifts,
        content: include_str!("catalog/gifts.toml"),
    },
    CatalogSource {
        kind: SectionType::Custom,
        content: include_str!("catalog/custom.toml"),
    },
];

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    examples: Vec<SectionDefinition>,
}

/// Example sections, keyed by kind
#[derive(Debug)]
pub struct SectionCatalog {
    entries: BTreeMap<SectionType, Vec<SectionDefinition>>,
}

/// The process-wide catalog
///
/// Panics on first use if the embedded TOML is broken; that is a build
/// defect, and the test suite loads every file.
pub static SECTION_EXAMPLES: LazyLock<SectionCatalog> = LazyLock::new(|| {
    SectionCatalog::load(&CATALOG_SOURCES)
        .unwrap_or_else(|e| panic!("embedded section catalog is invalid: {e}"))
});

impl SectionCatalog {
    /// Parse and check catalog sources
    ///
    /// # Parameters
    /// * `sources` - One source per section kind
    ///
    /// # Returns
    /// * `Ok(SectionCatalog)` - Every source parsed, is non-empty, and only holds its own kind
    /// * `Err(CatalogError)` - A source is malformed, empty, or holds another kind
    pub fn load(sources: &[CatalogSource]) -> Result<Self, CatalogError> {
        let mut entries = BTreeMap::new();

        for source in sources {
            let file: CatalogFile =
                toml::from_str(source.content).map_err(|e| CatalogError::ParseError {
                    kind: source.kind,
                    source: e,
                })?;

            if file.examples.is_empty() {
                return Err(CatalogError::Empty { kind: source.kind });
            }

            if let Some(stray) = file
                .examples
                .iter()
                .find(|example| example.section_type() != source.kind)
            {
                return Err(CatalogError::KindMismatch {
                    kind: source.kind,
                    id: stray.id().to_string(),
                    found: stray.section_type(),
                });
            }

            log::debug!(
                "Loaded {} catalog example(s) for '{}'",
                file.examples.len(),
                source.kind
            );
            entries.insert(source.kind, file.examples);
        }

        Ok(Self { entries })
    }

    /// Kinds present in this catalog, in kind order
    pub fn kinds(&self) -> impl Iterator<Item = SectionType> + '_ {
        self.entries.keys().copied()
    }

    /// Examples for a kind
    ///
    /// Panics when the kind has no entry: a kind was added to the type
    /// system without a catalog file.
    pub fn examples(&self, kind: SectionType) -> &[SectionDefinition] {
        match self.entries.get(&kind) {
            Some(examples) => examples,
            None => panic!("no such section type in catalog: '{kind}'"),
        }
    }

    /// Canonical default for a kind (its first example)
    pub fn default_for(&self, kind: SectionType) -> &SectionDefinition {
        &self.examples(kind)[0]
    }

    /// Examples for a kind given by name
    ///
    /// # Parameters
    /// * `name` - Section kind name (e.g., "nav")
    ///
    /// # Returns
    /// * `Ok(&[SectionDefinition])` - Examples for the kind
    /// * `Err(CatalogError::NoSuchSectionType)` - The name is not a known kind
    pub fn examples_by_name(&self, name: &str) -> Result<&[SectionDefinition], CatalogError> {
        let kind = name
            .parse::<SectionType>()
            .map_err(|_| CatalogError::NoSuchSectionType {
                name: name.to_string(),
            })?;

        self.entries
            .get(&kind)
            .map(Vec::as_slice)
            .ok_or_else(|| CatalogError::NoSuchSectionType {
                name: name.to_string(),
            })
    }

    /// New section seeded from the default example of a kind
    ///
    /// # Parameters
    /// * `kind` - Section kind to seed
    /// * `id` - Id for the new section
    ///
    /// # Returns
    /// * `SectionDefinition` - A copy of the default example carrying `id`
    pub fn seed(&self, kind: SectionType, id: impl Into<String>) -> SectionDefinition {
        self.default_for(kind).reassigned(id)
    }
}
