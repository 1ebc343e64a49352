//! Navigation section renderer

use super::treatment::{
    effective_position, highlight_treatment, justify_content, position_treatment,
    resolve_palette, variant_treatment, with_alpha, HighlightTreatment, DEFAULT_BLUR_PX,
};
use super::RenderMode;
use crate::scroll_highlight::is_active;
use crate::section_model::{LinkItem, NavContent};
use crate::view::{Action, Element, ViewNode};
use std::collections::BTreeMap;

/// Glyph placed between adjacent links
pub const SEPARATOR_GLYPH: &str = "•";

/// Render a nav section
///
/// # Parameters
/// * `section_id` - Anchor id of the section
/// * `content` - Nav payload
/// * `styles` - Free-form style overrides of the section, applied last
/// * `mode` - Render flags
///
/// # Returns
/// * `ViewNode` - A `nav` element holding the link row
pub fn render(
    section_id: &str,
    content: &NavContent,
    styles: &BTreeMap<String, String>,
    mode: &RenderMode<'_>,
) -> ViewNode {
    let position = effective_position(content);
    let placement = position_treatment(position);
    let variant = variant_treatment(content.nav_variant);
    let palette = resolve_palette(
        mode.is_dark,
        content.background_color.as_deref(),
        content.text_color.as_deref(),
    );

    log::trace!(
        "Rendering nav '{}' ({:?}, {:?}, {} links)",
        section_id,
        position,
        content.nav_variant,
        content.links.len()
    );

    let mut nav = Element::new("nav")
        .attr("id", section_id)
        .attr("data-section-type", "nav")
        .class("nav")
        .class(variant.class);

    if let Some(class) = placement.class {
        nav = nav.class(class);
    }
    for (property, value) in placement.style {
        nav = nav.style(property, *value);
    }
    if mode.is_dark {
        nav = nav.class("nav-dark");
    }
    if content.links.is_empty() {
        nav = nav.class("nav-empty");
    }

    let background = if content.is_transparent {
        "transparent".to_string()
    } else {
        let alpha = match (variant.reads_opacity, content.opacity_percent()) {
            (true, Some(percent)) => percent,
            _ => variant.default_opacity,
        };
        with_alpha(&palette.background, alpha)
    };
    nav = nav
        .style("background-color", background)
        .style("color", palette.text.as_str());

    if let Some(shadow) = variant.shadow {
        nav = nav.style("box-shadow", shadow).attr("data-elevation", "2");
    }
    if variant.backdrop_blur {
        let blur = format!("blur({}px)", content.blur_amount.unwrap_or(DEFAULT_BLUR_PX));
        nav = nav
            .style("-webkit-backdrop-filter", blur.as_str())
            .style("backdrop-filter", blur);
    }
    if let Some(border) = variant.bottom_border {
        nav = nav.style("border-bottom", border);
    }

    for (property, value) in styles {
        nav = nav.style(property, value.as_str());
    }

    nav.child(link_row(content, mode)).into()
}

fn link_row(content: &NavContent, mode: &RenderMode<'_>) -> Element {
    let mut row = Element::new("ul")
        .class("nav-links")
        .style("align-items", "center")
        .style("display", "flex")
        .style("justify-content", justify_content(content.alignment));

    if content.is_scrollable {
        row = row
            .class("nav-scrollable")
            .style("overflow-x", "auto")
            .style("white-space", "nowrap");
    }

    let highlight = highlight_treatment(content.active_highlight);

    for (index, link) in content.links.iter().enumerate() {
        if index > 0 {
            row = row.child(separator());
        }
        let treatment = highlight.filter(|_| is_active(link, mode.active_scroll_section_id));
        row = row.child(link_item(index, link, mode.read_only, treatment, content.active_color()));
    }

    if !mode.read_only {
        row = row.child(
            Element::new("li").class("nav-item").class("nav-add").child(
                Element::new("button")
                    .class("nav-link-add")
                    .attr("type", "button")
                    .attr("aria-label", "Add link")
                    .on_activate(Action::AddLink)
                    .text("+"),
            ),
        );
    }

    row
}

fn separator() -> Element {
    Element::new("li")
        .class("nav-separator")
        .attr("aria-hidden", "true")
        .text(SEPARATOR_GLYPH)
}

/// One link; the index is captured here, per item, for this render only
fn link_item(
    index: usize,
    link: &LinkItem,
    read_only: bool,
    highlight: Option<HighlightTreatment>,
    active_color: &str,
) -> Element {
    let control = if read_only && link.target_id.is_empty() {
        // no target: rendered but inert
        Element::new("a")
            .class("nav-link")
            .attr("role", "button")
            .attr("aria-disabled", "true")
            .text(link.label.as_str())
    } else if read_only {
        Element::new("a")
            .class("nav-link")
            .attr("href", format!("#{}", link.target_id))
            .attr("role", "button")
            .on_activate(Action::Navigate {
                target_id: link.target_id.clone(),
            })
            .text(link.label.as_str())
    } else {
        Element::new("span").class("nav-link").child(
            Element::new("span")
                .class("inline-text")
                .attr("data-inline-edit", "label")
                .on_commit(Action::EditLinkLabel { index })
                .text(link.label.as_str()),
        )
    };

    let control = match highlight {
        Some(treatment) => apply_highlight(control, treatment, active_color),
        None => control,
    };

    let mut item = Element::new("li").class("nav-item").child(control);
    if !read_only {
        item = item.child(
            Element::new("button")
                .class("nav-link-delete")
                .attr("type", "button")
                .attr("aria-label", "Remove link")
                .on_activate(Action::DeleteLink { index })
                .text("×"),
        );
    }
    item
}

fn apply_highlight(control: Element, treatment: HighlightTreatment, active_color: &str) -> Element {
    let control = control
        .class("nav-link-active")
        .attr("aria-current", "location");

    match treatment {
        HighlightTreatment::Underline => control.child(
            Element::new("span")
                .class("nav-link-underline")
                .attr("aria-hidden", "true")
                .style("background-color", active_color),
        ),
        HighlightTreatment::Pill => control
            .class("nav-link-pill")
            .style("background-color", active_color)
            .style("border-radius", "9999px"),
    }
}
