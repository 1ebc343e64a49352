//! Closed set of section kinds

use crate::section_model::SectionModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a page section; selects the content schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionType {
    Nav,
    Hero,
    Agenda,
    Rsvp,
    Guestbook,
    Countdown,
    Gifts,
    Custom,
}

impl SectionType {
    /// Every section kind, in catalog order
    pub const ALL: [SectionType; 8] = [
        SectionType::Nav,
        SectionType::Hero,
        SectionType::Agenda,
        SectionType::Rsvp,
        SectionType::Guestbook,
        SectionType::Countdown,
        SectionType::Gifts,
        SectionType::Custom,
    ];

    /// Wire name of the kind (matches the `type` field of a section)
    pub fn as_str(self) -> &'static str {
        match self {
            SectionType::Nav => "nav",
            SectionType::Hero => "hero",
            SectionType::Agenda => "agenda",
            SectionType::Rsvp => "rsvp",
            SectionType::Guestbook => "guestbook",
            SectionType::Countdown => "countdown",
            SectionType::Gifts => "gifts",
            SectionType::Custom => "custom",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionType {
    type Err = SectionModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        SectionType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| SectionModelError::UnknownSectionType {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for kind in SectionType::ALL {
            assert_eq!(kind.as_str().parse::<SectionType>().unwrap(), kind);
        }
        assert_eq!("NAV".parse::<SectionType>().unwrap(), SectionType::Nav);
    }

    #[test]
    fn test_unknown_name() {
        let err = "carousel".parse::<SectionType>().unwrap_err();
        assert!(matches!(err, SectionModelError::UnknownSectionType { ref name } if name == "carousel"));
        assert_eq!(err.to_string(), "No such section type 'carousel'");
    }
}
