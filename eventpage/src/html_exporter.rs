//! HTML exporter for pages
//!
//! This module writes a page to a single standalone HTML file with:
//! - Every section rendered in page order
//! - Classes and inline treatments from the view tree
//! - Actions exposed as `data-action` attributes for the editor runtime
//! - An embedded base stylesheet

use crate::page_model::PageDocument;
use crate::render::{render_sections, RenderMode};
use crate::view::{Action, Element, ViewNode};
use itertools::Itertools;
use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during HTML export
#[derive(Error, Debug)]
pub enum HtmlExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Elements that never have children or a closing tag
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta"];

/// Export a page to an HTML file
///
/// # Parameters
/// * `doc` - The page to export
/// * `mode` - Render flags applied to every section
/// * `output_path` - Path where the HTML file will be written
///
/// # Returns
/// * `Ok(())` - Successfully exported to HTML
/// * `Err(HtmlExportError)` - Error during export
pub fn to_html(
    doc: &PageDocument,
    mode: &RenderMode<'_>,
    output_path: &Path,
) -> Result<(), HtmlExportError> {
    let output = page_to_html(doc, mode);

    // Write to file - create parent directories if they don't exist
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(output_path)?;
    file.write_all(output.as_bytes())?;

    log::info!(
        "Wrote {} sections to {}",
        doc.sections().len(),
        output_path.display()
    );

    Ok(())
}

/// Render a page to a complete HTML document string
pub fn page_to_html(doc: &PageDocument, mode: &RenderMode<'_>) -> String {
    let mut output = String::new();

    write_html_header(&mut output, doc);

    let body_class = if mode.is_dark { "page page-dark" } else { "page" };
    let edit_attr = if mode.read_only { "" } else { " data-editing=\"true\"" };
    output.push_str(&format!(
        "<body class=\"{}\"{}>\n",
        body_class, edit_attr
    ));

    for node in render_sections(doc.sections(), mode) {
        write_node(&mut output, &node);
        output.push('\n');
    }

    output.push_str("</body>\n");
    output.push_str("</html>\n");
    output
}

/// Write HTML header with CSS styling
fn write_html_header(output: &mut String, doc: &PageDocument) {
    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html lang=\"en\">\n");
    output.push_str("<head>\n");
    output.push_str("<meta charset=\"UTF-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    if let Some(ref description) = doc.settings.description {
        output.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape_html(description)
        ));
    }
    output.push_str(&format!(
        "<title>{}</title>\n",
        escape_html(&doc.settings.title)
    ));
    output.push_str("<style>\n");
    output.push_str(CSS_STYLES);
    output.push_str("</style>\n");
    output.push_str("</head>\n");
}

/// Serialize a view node
pub fn node_to_html(node: &ViewNode) -> String {
    let mut output = String::new();
    write_node(&mut output, node);
    output
}

fn write_node(output: &mut String, node: &ViewNode) {
    match node {
        ViewNode::Text(text) => output.push_str(&escape_html(text)),
        ViewNode::Element(element) => write_element(output, element),
    }
}

fn write_element(output: &mut String, element: &Element) {
    output.push('<');
    output.push_str(element.tag);

    if !element.classes.is_empty() {
        output.push_str(&format!(
            " class=\"{}\"",
            escape_html(&element.classes.iter().join(" "))
        ));
    }

    for (name, value) in &element.attrs {
        output.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
    }

    if !element.style.is_empty() {
        let style = element
            .style
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .join("; ");
        output.push_str(&format!(" style=\"{}\"", escape_html(&style)));
    }

    if let Some(ref action) = element.on_activate {
        write_action(output, action);
    }
    if let Some(ref action) = element.on_commit {
        output.push_str(" contenteditable=\"true\"");
        write_action(output, action);
    }

    output.push('>');

    if VOID_TAGS.contains(&element.tag) {
        return;
    }

    for child in &element.children {
        write_node(output, child);
    }

    output.push_str(&format!("</{}>", element.tag));
}

fn write_action(output: &mut String, action: &Action) {
    output.push_str(&format!(" data-action=\"{}\"", action.name()));
    match action {
        Action::Navigate { target_id } => {
            output.push_str(&format!(" data-target=\"{}\"", escape_html(target_id)));
        }
        Action::EditLinkLabel { index } | Action::DeleteLink { index } => {
            output.push_str(&format!(" data-index=\"{}\"", index));
        }
        Action::AddLink => {}
    }
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Base stylesheet; per-section treatments are inline
const CSS_STYLES: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Helvetica Neue',
                 sans-serif;
    line-height: 1.6;
    color: #1f2937;
    background-color: #fdfcfb;
}

body.page-dark {
    color: #f9fafb;
    background-color: #0b0f19;
}

.nav {
    padding: 12px 24px;
}

.nav-links {
    list-style: none;
    gap: 12px;
    flex-wrap: wrap;
}

.nav-scrollable {
    flex-wrap: nowrap;
}

.nav-link {
    position: relative;
    color: inherit;
    text-decoration: none;
    padding: 4px 12px;
    display: inline-block;
}

.nav-link-underline {
    position: absolute;
    left: 12px;
    right: 12px;
    bottom: 0;
    height: 2px;
    border-radius: 1px;
}

.nav-link-pill {
    color: #ffffff;
}

.nav-separator {
    opacity: 0.5;
    user-select: none;
}

.nav-link-delete,
.nav-link-add {
    border: none;
    background: none;
    color: inherit;
    cursor: pointer;
    opacity: 0.6;
    padding: 0 4px;
}

.inline-text {
    outline: 1px dashed transparent;
}

body[data-editing] .inline-text:hover {
    outline-color: currentColor;
}

.section {
    max-width: 900px;
    margin: 0 auto;
    padding: 64px 24px;
    scroll-margin-top: 72px;
}

.section-title {
    font-size: 2em;
    font-weight: 600;
    margin-bottom: 16px;
    text-align: center;
}

.section-hero {
    text-align: center;
    padding: 120px 24px;
}

.section-hero .section-title {
    font-size: 3em;
}

.hero-subtitle {
    font-size: 1.3em;
}

.agenda-items,
.gift-items {
    list-style: none;
}

.agenda-item {
    display: flex;
    gap: 16px;
    padding: 12px 0;
    border-bottom: 1px solid #e5e7eb;
}

.agenda-time {
    font-weight: 700;
    min-width: 64px;
}

.agenda-description {
    color: #6b7280;
}

.gift-item a {
    color: #e11d48;
}

@media screen and (max-width: 768px) {
    .section {
        padding: 40px 16px;
    }

    .section-hero .section-title {
        font-size: 2.2em;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SECTION_EXAMPLES;
    use crate::page_config::PageSettings;
    use crate::section_model::SectionType;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<div>"), "&lt;div&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_element_to_html() {
        let node: ViewNode = Element::new("a")
            .class("nav-link")
            .class("nav-link-active")
            .attr("href", "#top")
            .style("color", "red")
            .on_activate(Action::Navigate {
                target_id: "top".to_string(),
            })
            .text("Início & mais")
            .into();

        assert_eq!(
            node_to_html(&node),
            "<a class=\"nav-link nav-link-active\" href=\"#top\" style=\"color: red\" \
             data-action=\"navigate\" data-target=\"top\">Início &amp; mais</a>"
        );
    }

    #[test]
    fn test_inline_edit_attributes() {
        let node: ViewNode = Element::new("span")
            .on_commit(Action::EditLinkLabel { index: 3 })
            .text("Agenda")
            .into();
        assert_eq!(
            node_to_html(&node),
            "<span contenteditable=\"true\" data-action=\"edit-link-label\" data-index=\"3\">Agenda</span>"
        );
    }

    #[test]
    fn test_page_to_html() {
        let mut doc = PageDocument::new(PageSettings {
            title: "Ana & Pedro".to_string(),
            description: Some("O nosso casamento".to_string()),
            dark: false,
        });
        doc.add_section(&SECTION_EXAMPLES, SectionType::Nav);
        doc.add_section(&SECTION_EXAMPLES, SectionType::Hero);

        let html = page_to_html(&doc, &RenderMode::read_only());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ana &amp; Pedro</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"O nosso casamento\">"));
        assert!(html.contains("<nav "));
        assert!(html.contains("<section "));
        assert!(html.contains("<body class=\"page\">"));
        assert!(html.find("<nav ").unwrap() < html.find("<section ").unwrap());
    }

    #[test]
    fn test_to_html_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/index.html");
        let mut doc = PageDocument::new(PageSettings {
            title: "Festa".to_string(),
            description: None,
            dark: true,
        });
        doc.add_section(&SECTION_EXAMPLES, SectionType::Custom);

        let mode = RenderMode {
            is_dark: true,
            ..RenderMode::edit()
        };
        to_html(&doc, &mode, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("<body class=\"page page-dark\" data-editing=\"true\">"));
    }
}
