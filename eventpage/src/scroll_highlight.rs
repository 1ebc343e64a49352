//! Scroll-driven active link reconciliation
//!
//! The host page observes scrolling and reports which section is in view.
//! Whether a link is highlighted depends only on that id and the link's
//! target, so highlighting can be decided without a document or scroll events.

use crate::section_model::LinkItem;

/// Whether `link` points at the section currently in view
///
/// A link with an empty target never matches.
pub fn is_active(link: &LinkItem, active_scroll_section_id: Option<&str>) -> bool {
    match active_scroll_section_id {
        Some(active) => !link.target_id.is_empty() && link.target_id == active,
        None => false,
    }
}

/// Indices of every link pointing at the section in view
pub fn active_indices(links: &[LinkItem], active_scroll_section_id: Option<&str>) -> Vec<usize> {
    links
        .iter()
        .enumerate()
        .filter(|(_, link)| is_active(link, active_scroll_section_id))
        .map(|(index, _)| index)
        .collect()
}
