//! Section renderers
//!
//! Rendering is pure: the same section and mode always produce the same
//! view tree, and nothing outside the returned tree is touched.

use crate::section_model::{SectionContent, SectionDefinition};
use crate::view::ViewNode;

mod block;
pub mod nav;
pub mod treatment;

/// Render flags supplied by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderMode<'a> {
    /// Published page (links navigate) rather than the editor canvas
    pub read_only: bool,
    /// Apply the fixed dark palette
    pub is_dark: bool,
    /// Id of the section currently in view, as reported by the host
    pub active_scroll_section_id: Option<&'a str>,
}

impl RenderMode<'_> {
    /// Mode for the published page
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Mode for the editor canvas
    pub fn edit() -> Self {
        Self::default()
    }
}

/// Render one section
pub fn render_section(section: &SectionDefinition, mode: &RenderMode<'_>) -> ViewNode {
    match section.content() {
        SectionContent::Nav(content) => nav::render(section.id(), content, section.styles(), mode),
        _ => block::render(section, mode),
    }
}

/// Render sections in order
pub fn render_sections(sections: &[SectionDefinition], mode: &RenderMode<'_>) -> Vec<ViewNode> {
    sections
        .iter()
        .map(|section| render_section(section, mode))
        .collect()
}
