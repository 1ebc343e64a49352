//! Content schemas of the non-navigation section kinds

use super::ContentSchema;
use serde::{Deserialize, Serialize};

/// Opening banner of the page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    /// Event date as displayed
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

impl ContentSchema for HeroContent {
    const FIELDS: &'static [&'static str] = &["title", "subtitle", "date", "backgroundImage"];
}

/// Timetable of the event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgendaContent {
    pub title: String,
    pub items: Vec<AgendaItem>,
}

/// One row of the agenda
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgendaItem {
    pub time: String,
    pub title: String,
    pub description: String,
}

impl ContentSchema for AgendaContent {
    const FIELDS: &'static [&'static str] = &["title", "items"];
}

/// Attendance confirmation form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RsvpContent {
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub allow_plus_one: bool,
}

impl ContentSchema for RsvpContent {
    const FIELDS: &'static [&'static str] = &["title", "description", "deadline", "allowPlusOne"];
}

/// Message wall for guests
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestbookContent {
    pub title: String,
    pub placeholder: String,
    pub require_approval: bool,
}

impl ContentSchema for GuestbookContent {
    const FIELDS: &'static [&'static str] = &["title", "placeholder", "requireApproval"];
}

/// Countdown to the event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountdownContent {
    pub title: String,
    /// ISO 8601 date-time the countdown runs to
    pub target_date: String,
    pub show_seconds: bool,
}

impl ContentSchema for CountdownContent {
    const FIELDS: &'static [&'static str] = &["title", "targetDate", "showSeconds"];
}

/// Gift registry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GiftsContent {
    pub title: String,
    pub description: String,
    pub items: Vec<GiftItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GiftItem {
    pub name: String,
    pub url: String,
}

impl ContentSchema for GiftsContent {
    const FIELDS: &'static [&'static str] = &["title", "description", "items"];
}

/// Free-form text block
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomContent {
    pub title: String,
    pub body: String,
}

impl ContentSchema for CustomContent {
    const FIELDS: &'static [&'static str] = &["title", "body"];
}
