//! Error types for the section model

use crate::section_model::SectionType;
use thiserror::Error;

/// Errors raised while decoding or updating section definitions
#[derive(Error, Debug)]
pub enum SectionModelError {
    /// A section type name that is not part of the closed set of kinds
    #[error("No such section type '{name}'")]
    UnknownSectionType {
        /// The name that failed to resolve
        name: String,
    },

    /// The `content` table of a section does not match the schema of its kind
    #[error("Content of section '{id}' does not match the '{kind}' schema: {source}")]
    InvalidContent {
        /// Section id
        id: String,
        /// Declared section kind
        kind: SectionType,
        /// Underlying decode error
        #[source]
        source: toml::de::Error,
    },

    /// Content replacement attempted to change the kind of a section
    #[error("Section '{id}' is a '{expected}' section and cannot hold '{found}' content")]
    KindMismatch {
        /// Section id
        id: String,
        /// Kind of the existing section
        expected: SectionType,
        /// Kind of the offered content
        found: SectionType,
    },
}
