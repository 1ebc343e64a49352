//! eventpage - composable event landing pages
//!
//! A page is an ordered list of typed sections (nav, hero, agenda, ...).
//! Sections are seeded from an embedded example catalog, rendered to a
//! data-only view tree, edited through actions attached to that tree, and
//! exported to standalone HTML.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::enum_variant_names)]

pub mod catalog;
pub mod html_exporter;
pub mod interaction;
pub mod page_config;
pub mod page_model;
pub mod render;
pub mod scroll_highlight;
pub mod section_model;
pub mod validation;
pub mod view;
