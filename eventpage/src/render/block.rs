//! Static renderer for the non-navigation section kinds
//!
//! These kinds only need to show up on an exported page: an anchor
//! container, a heading, and the payload's text.

use super::RenderMode;
use crate::section_model::{SectionContent, SectionDefinition};
use crate::view::{Element, ViewNode};

pub fn render(section: &SectionDefinition, mode: &RenderMode<'_>) -> ViewNode {
    let kind = section.section_type();
    let mut container = Element::new("section")
        .attr("id", section.id())
        .attr("data-section-type", kind.as_str())
        .class("section")
        .class(format!("section-{}", kind));

    if mode.is_dark {
        container = container.class("section-dark");
    }
    for (property, value) in section.styles() {
        container = container.style(property, value.as_str());
    }

    if let Some(title) = section.content().title().filter(|t| !t.is_empty()) {
        container = container.child(Element::new("h2").class("section-title").text(title));
    }

    body(section.content())
        .into_iter()
        .fold(container, |container, element| container.child(element))
        .into()
}

fn paragraph(class: &str, text: &str) -> Option<Element> {
    (!text.is_empty()).then(|| Element::new("p").class(class.to_string()).text(text))
}

fn body(content: &SectionContent) -> Vec<Element> {
    match content {
        SectionContent::Nav(_) => Vec::new(),
        SectionContent::Hero(hero) => [
            paragraph("hero-subtitle", &hero.subtitle),
            paragraph("hero-date", &hero.date),
        ]
        .into_iter()
        .flatten()
        .collect(),
        SectionContent::Agenda(agenda) => {
            let list = agenda.items.iter().fold(
                Element::new("ul").class("agenda-items"),
                |list, item| {
                    let mut row = Element::new("li")
                        .class("agenda-item")
                        .child(Element::new("span").class("agenda-time").text(item.time.as_str()))
                        .child(Element::new("span").class("agenda-title").text(item.title.as_str()));
                    if !item.description.is_empty() {
                        row = row.child(
                            Element::new("span")
                                .class("agenda-description")
                                .text(item.description.as_str()),
                        );
                    }
                    list.child(row)
                },
            );
            vec![list]
        }
        SectionContent::Rsvp(rsvp) => [
            paragraph("rsvp-description", &rsvp.description),
            paragraph("rsvp-deadline", &rsvp.deadline),
        ]
        .into_iter()
        .flatten()
        .collect(),
        SectionContent::Guestbook(guestbook) => {
            paragraph("guestbook-placeholder", &guestbook.placeholder)
                .into_iter()
                .collect()
        }
        SectionContent::Countdown(countdown) => vec![Element::new("time")
            .class("countdown-target")
            .attr("datetime", countdown.target_date.as_str())
            .attr("data-show-seconds", countdown.show_seconds.to_string())],
        SectionContent::Gifts(gifts) => {
            let list = gifts.items.iter().fold(
                Element::new("ul").class("gift-items"),
                |list, gift| {
                    list.child(
                        Element::new("li").class("gift-item").child(
                            Element::new("a")
                                .attr("href", gift.url.as_str())
                                .attr("rel", "noopener")
                                .text(gift.name.as_str()),
                        ),
                    )
                },
            );
            paragraph("gifts-description", &gifts.description)
                .into_iter()
                .chain(std::iter::once(list))
                .collect()
        }
        SectionContent::Custom(custom) => paragraph("custom-body", &custom.body).into_iter().collect(),
    }
}
