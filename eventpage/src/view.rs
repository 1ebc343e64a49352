//! View tree produced by the renderers
//!
//! Nodes are plain data: interactive elements carry an [`Action`] describing
//! what activating (or committing an inline edit on) them does, and
//! [`crate::interaction::dispatch`] carries the action out. Attribute and
//! style maps are ordered so identical input always yields an identical tree.

use std::collections::BTreeMap;

/// What an interactive element does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Bring the section with this anchor id into view
    Navigate { target_id: String },
    /// Replace the label of the link at `index` with the committed text
    EditLinkLabel { index: usize },
    /// Remove the link at `index`
    DeleteLink { index: usize },
    /// Append a new empty link
    AddLink,
}

impl Action {
    /// Name used for the `data-action` attribute
    pub fn name(&self) -> &'static str {
        match self {
            Action::Navigate { .. } => "navigate",
            Action::EditLinkLabel { .. } => "edit-link-label",
            Action::DeleteLink { .. } => "delete-link",
            Action::AddLink => "add-link",
        }
    }
}

/// A node of the view tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Element(Element),
    Text(String),
}

impl ViewNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            ViewNode::Element(element) => Some(element),
            ViewNode::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            ViewNode::Element(element) => element.text_content(),
            ViewNode::Text(text) => text.clone(),
        }
    }
}

impl From<Element> for ViewNode {
    fn from(element: Element) -> Self {
        ViewNode::Element(element)
    }
}

/// An element with classes, attributes, inline style and optional actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    /// Fired when the element is clicked or otherwise activated
    pub on_activate: Option<Action>,
    /// Fired when an inline edit on the element commits a new value
    pub on_commit: Option<Action>,
    pub children: Vec<ViewNode>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            style: BTreeMap::new(),
            on_activate: None,
            on_commit: None,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.insert(name.to_string(), value.into());
        self
    }

    pub fn style(mut self, property: &str, value: impl Into<String>) -> Self {
        self.style.insert(property.to_string(), value.into());
        self
    }

    pub fn on_activate(mut self, action: Action) -> Self {
        self.on_activate = Some(action);
        self
    }

    pub fn on_commit(mut self, action: Action) -> Self {
        self.on_commit = Some(action);
        self
    }

    pub fn child(mut self, node: impl Into<ViewNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(ViewNode::Text(text.into()));
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        self.children.iter().map(ViewNode::text_content).collect()
    }

    /// This element and every descendant element, in document order
    pub fn descendants(&self) -> Vec<&Element> {
        let mut result = vec![self];
        for child in &self.children {
            if let ViewNode::Element(element) = child {
                result.extend(element.descendants());
            }
        }
        result
    }

    /// Every element in this subtree carrying `class`, in document order
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|element| element.has_class(class))
            .collect()
    }
}
