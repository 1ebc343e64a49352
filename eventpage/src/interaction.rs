//! Carrying out the actions attached to rendered nav elements
//!
//! Edits never touch the link sequence they were rendered from: each one
//! builds a new sequence and hands it to `on_update` as a partial update.
//! The section owner merges it and renders again.

use crate::section_model::{LinkItem, NavContent, NavUpdate, NEW_LINK_LABEL};
use crate::view::Action;

/// Capability to bring a page anchor into view
///
/// Fire-and-forget; a missing anchor is a silent no-op.
pub trait ScrollTo {
    fn scroll_to_element(&self, id: &str);
}

/// Scroll capability for environments without a live page
#[derive(Debug, Default, Clone, Copy)]
pub struct NoScroll;

impl ScrollTo for NoScroll {
    fn scroll_to_element(&self, id: &str) {
        log::debug!("No page to scroll; ignoring anchor '{}'", id);
    }
}

/// What happened to an interactive element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Clicked or otherwise activated
    Activated,
    /// An inline edit committed this value
    Committed(String),
}

/// Host callbacks for nav interactions
pub struct NavCallbacks<'a> {
    on_update: Box<dyn FnMut(NavUpdate) + 'a>,
    on_navigate: Option<Box<dyn FnMut(&str) + 'a>>,
    scroll: &'a dyn ScrollTo,
}

impl<'a> NavCallbacks<'a> {
    /// Callbacks with no navigation handler; navigation falls back to `scroll`
    pub fn new(on_update: impl FnMut(NavUpdate) + 'a, scroll: &'a dyn ScrollTo) -> Self {
        Self {
            on_update: Box::new(on_update),
            on_navigate: None,
            scroll,
        }
    }

    /// Route navigation to `on_navigate` instead of scrolling
    pub fn with_navigate(mut self, on_navigate: impl FnMut(&str) + 'a) -> Self {
        self.on_navigate = Some(Box::new(on_navigate));
        self
    }
}

/// Carry out `action` for `event` against the content the view was rendered from
///
/// Events that do not apply to the action (a commit on a navigate link, for
/// instance) and indices that no longer exist are ignored.
pub fn dispatch(
    content: &NavContent,
    action: &Action,
    event: Event,
    callbacks: &mut NavCallbacks<'_>,
) {
    match (action, event) {
        (Action::Navigate { target_id }, Event::Activated) => navigate(target_id, callbacks),
        (Action::DeleteLink { index }, Event::Activated) => {
            commit_links(without_link(&content.links, *index), *index, callbacks)
        }
        (Action::AddLink, Event::Activated) => {
            let links = with_appended(&content.links, LinkItem::new(NEW_LINK_LABEL, ""));
            (callbacks.on_update)(NavUpdate { links: Some(links) });
        }
        (Action::EditLinkLabel { index }, Event::Committed(label)) => {
            commit_links(with_label(&content.links, *index, label), *index, callbacks)
        }
        (action, event) => {
            log::debug!("Ignoring {:?} for {:?}", event, action);
        }
    }
}

fn navigate(target_id: &str, callbacks: &mut NavCallbacks<'_>) {
    if target_id.is_empty() {
        log::debug!("Link has no target; nothing to navigate to");
        return;
    }

    match callbacks.on_navigate.as_mut() {
        Some(on_navigate) => on_navigate(target_id),
        None => callbacks.scroll.scroll_to_element(target_id),
    }
}

fn commit_links(links: Option<Vec<LinkItem>>, index: usize, callbacks: &mut NavCallbacks<'_>) {
    match links {
        Some(links) => (callbacks.on_update)(NavUpdate { links: Some(links) }),
        None => log::debug!("Link index {} is stale; no update", index),
    }
}

/// New sequence without the link at `index`, or `None` if out of range
pub fn without_link(links: &[LinkItem], index: usize) -> Option<Vec<LinkItem>> {
    (index < links.len()).then(|| {
        links
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, link)| link.clone())
            .collect()
    })
}

/// New sequence with the label at `index` replaced, or `None` if out of range
pub fn with_label(links: &[LinkItem], index: usize, label: String) -> Option<Vec<LinkItem>> {
    let target = links.get(index)?;
    let mut next = links.to_vec();
    next[index] = LinkItem {
        label,
        target_id: target.target_id.clone(),
    };
    Some(next)
}

/// New sequence with `link` appended
pub fn with_appended(links: &[LinkItem], link: LinkItem) -> Vec<LinkItem> {
    links.iter().cloned().chain(std::iter::once(link)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingScroll {
        requests: RefCell<Vec<String>>,
    }

    impl ScrollTo for RecordingScroll {
        fn scroll_to_element(&self, id: &str) {
            self.requests.borrow_mut().push(id.to_string());
        }
    }

    fn abc() -> NavContent {
        NavContent {
            links: vec![
                LinkItem::new("A", "a"),
                LinkItem::new("B", "b"),
                LinkItem::new("C", "c"),
            ],
            ..NavContent::default()
        }
    }

    fn run(content: &NavContent, action: Action, event: Event) -> Vec<NavUpdate> {
        let mut updates = Vec::new();
        {
            let mut callbacks = NavCallbacks::new(|update| updates.push(update), &NoScroll);
            dispatch(content, &action, event, &mut callbacks);
        }
        updates
    }

    #[test]
    fn test_delete_middle_link() {
        let content = abc();
        let before = content.links.clone();
        let updates = run(&content, Action::DeleteLink { index: 1 }, Event::Activated);

        assert_eq!(updates.len(), 1);
        assert_eq!(
            updates[0].links,
            Some(vec![LinkItem::new("A", "a"), LinkItem::new("C", "c")])
        );
        assert_eq!(content.links, before);
    }

    #[test]
    fn test_edit_label() {
        let content = abc();
        let updates = run(
            &content,
            Action::EditLinkLabel { index: 2 },
            Event::Committed("Presentes".to_string()),
        );

        let links = updates[0].links.as_ref().unwrap();
        assert_eq!(links.len(), 3);
        assert_eq!(links[2], LinkItem::new("Presentes", "c"));
        assert_eq!(links[..2], content.links[..2]);
        assert_eq!(content.links[2].label, "C");
    }

    #[test]
    fn test_add_link() {
        let content = abc();
        let updates = run(&content, Action::AddLink, Event::Activated);
        let links = updates[0].links.as_ref().unwrap();
        assert_eq!(links.len(), 4);
        assert_eq!(links[3], LinkItem::new(NEW_LINK_LABEL, ""));
        assert_eq!(content.links.len(), 3);
    }

    #[test]
    fn test_stale_index_is_ignored() {
        let updates = run(&abc(), Action::DeleteLink { index: 3 }, Event::Activated);
        assert!(updates.is_empty());

        let updates = run(
            &abc(),
            Action::EditLinkLabel { index: 9 },
            Event::Committed("x".to_string()),
        );
        assert!(updates.is_empty());
    }

    #[test]
    fn test_mismatched_event_is_ignored() {
        let updates = run(&abc(), Action::EditLinkLabel { index: 0 }, Event::Activated);
        assert!(updates.is_empty());
    }

    #[test]
    fn test_navigate_prefers_handler() {
        let scroll = RecordingScroll::default();
        let mut visited = Vec::new();
        {
            let mut callbacks = NavCallbacks::new(|_| {}, &scroll)
                .with_navigate(|target| visited.push(target.to_string()));
            let action = Action::Navigate {
                target_id: "agenda".to_string(),
            };
            dispatch(&abc(), &action, Event::Activated, &mut callbacks);
        }
        assert_eq!(visited, vec!["agenda".to_string()]);
        assert!(scroll.requests.borrow().is_empty());
    }

    #[test]
    fn test_navigate_falls_back_to_scroll() {
        let scroll = RecordingScroll::default();
        let mut callbacks = NavCallbacks::new(|_| {}, &scroll);
        let action = Action::Navigate {
            target_id: "gifts".to_string(),
        };
        dispatch(&abc(), &action, Event::Activated, &mut callbacks);
        assert_eq!(*scroll.requests.borrow(), vec!["gifts".to_string()]);
    }

    #[test]
    fn test_empty_target_is_noop() {
        let scroll = RecordingScroll::default();
        let mut callbacks = NavCallbacks::new(|_| {}, &scroll);
        let action = Action::Navigate {
            target_id: String::new(),
        };
        dispatch(&abc(), &action, Event::Activated, &mut callbacks);
        assert!(scroll.requests.borrow().is_empty());
    }
}
