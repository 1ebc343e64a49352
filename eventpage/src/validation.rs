//! Page validation
//!
//! Checks the things rendering deliberately tolerates: links pointing at
//! sections that do not exist, duplicate ids, ids that cannot be anchors.

use crate::page_model::PageDocument;
use itertools::Itertools;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

static ANCHOR_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("anchor id pattern is valid"));

/// Problems that make a page incorrect
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two sections share an id
    #[error("Duplicate section id '{id}'")]
    DuplicateSectionId { id: String },
    /// A section id cannot be used as a page anchor
    #[error(
        "Section id '{id}' is not a valid anchor (letters, digits, '-' and '_', starting with a letter)"
    )]
    InvalidAnchorId { id: String },
    /// A nav link targets an id no section has
    #[error("Link '{label}' in section '{section_id}' targets '{target_id}', which is not a section id")]
    DanglingLinkTarget {
        section_id: String,
        label: String,
        target_id: String,
    },
}

/// Problems that render fine but are probably mistakes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Several links in one nav share a target; they highlight together
    DuplicateLinkTarget { section_id: String, target_id: String },
    /// A link has no target and navigates nowhere
    EmptyLinkTarget { section_id: String, index: usize },
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::DuplicateLinkTarget {
                section_id,
                target_id,
            } => write!(
                f,
                "Several links in section '{}' target '{}'",
                section_id, target_id
            ),
            ValidationWarning::EmptyLinkTarget { section_id, index } => write!(
                f,
                "Link #{} in section '{}' has no target",
                index + 1,
                section_id
            ),
        }
    }
}

/// Outcome of validating a page
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a page
pub fn validate_page(doc: &PageDocument) -> ValidationReport {
    let mut report = ValidationReport::default();

    for id in doc.anchor_ids().duplicates() {
        report
            .errors
            .push(ValidationError::DuplicateSectionId { id: id.to_string() });
    }

    for id in doc.anchor_ids().filter(|id| !ANCHOR_ID.is_match(id)) {
        report
            .errors
            .push(ValidationError::InvalidAnchorId { id: id.to_string() });
    }

    let anchors: HashSet<&str> = doc.anchor_ids().collect();

    for section in doc.sections() {
        let Some(nav) = section.content().as_nav() else {
            continue;
        };

        for (index, link) in nav.links.iter().enumerate() {
            if link.target_id.is_empty() {
                report.warnings.push(ValidationWarning::EmptyLinkTarget {
                    section_id: section.id().to_string(),
                    index,
                });
            } else if !anchors.contains(link.target_id.as_str()) {
                report.errors.push(ValidationError::DanglingLinkTarget {
                    section_id: section.id().to_string(),
                    label: link.label.clone(),
                    target_id: link.target_id.clone(),
                });
            }
        }

        for target_id in nav
            .links
            .iter()
            .map(|link| link.target_id.as_str())
            .filter(|target| !target.is_empty())
            .duplicates()
        {
            report.warnings.push(ValidationWarning::DuplicateLinkTarget {
                section_id: section.id().to_string(),
                target_id: target_id.to_string(),
            });
        }
    }

    for warning in &report.warnings {
        log::warn!("{}", warning);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_config::PageConfig;

    fn page(toml_content: &str) -> PageDocument {
        PageDocument::from_config(toml::from_str::<PageConfig>(toml_content).unwrap())
    }

    #[test]
    fn test_valid_page() {
        let doc = page(
            r#"
[page]
title = "Festa"

[[sections]]
id = "menu"
type = "nav"

[[sections.content.links]]
label = "Agenda"
targetId = "agenda"

[[sections]]
id = "agenda"
type = "agenda"
"#,
        );
        let report = validate_page(&doc);
        assert!(report.is_ok(), "{:?}", report.errors);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_error_messages() {
        let error = ValidationError::DanglingLinkTarget {
            section_id: "menu".to_string(),
            label: "Local".to_string(),
            target_id: "location".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Link 'Local' in section 'menu' targets 'location', which is not a section id"
        );
        let boxed: Box<dyn std::error::Error> = Box::new(error);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn test_dangling_target_and_duplicates() {
        let doc = page(
            r#"
[page]
title = "Festa"

[[sections]]
id = "menu"
type = "nav"

[[sections.content.links]]
label = "Local"
targetId = "location"

[[sections.content.links]]
label = "Ali"
targetId = "location"

[[sections.content.links]]
label = "Nada"

[[sections]]
id = "menu"
type = "custom"

[[sections]]
id = "2nd"
type = "custom"
"#,
        );
        let report = validate_page(&doc);

        assert!(report
            .errors
            .contains(&ValidationError::DuplicateSectionId { id: "menu".to_string() }));
        assert!(report
            .errors
            .contains(&ValidationError::InvalidAnchorId { id: "2nd".to_string() }));
        assert_eq!(
            report
                .errors
                .iter()
                .filter(|e| matches!(e, ValidationError::DanglingLinkTarget { .. }))
                .count(),
            2
        );
        assert!(report.warnings.contains(&ValidationWarning::DuplicateLinkTarget {
            section_id: "menu".to_string(),
            target_id: "location".to_string(),
        }));
        assert!(report.warnings.contains(&ValidationWarning::EmptyLinkTarget {
            section_id: "menu".to_string(),
            index: 2,
        }));
    }
}
