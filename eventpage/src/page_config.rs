//! Page file (`page.toml`) reading and writing

use crate::section_model::SectionDefinition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default page file name
pub const PAGE_FILE_NAME: &str = "page.toml";

/// Page-wide settings from the `[page]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSettings {
    /// Page title (used for the HTML `<title>`)
    pub title: String,

    /// Optional short description (used for the HTML meta description)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Render with the dark palette by default
    #[serde(default)]
    pub dark: bool,
}

/// Contents of a page file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub page: PageSettings,

    /// Ordered sections
    #[serde(default)]
    pub sections: Vec<SectionDefinition>,
}

impl PageConfig {
    /// Load a page file
    ///
    /// # Parameters
    /// * `path` - Path to the page TOML file
    ///
    /// # Returns
    /// * `Ok(PageConfig)` - Successfully loaded page
    /// * `Err(PageConfigError)` - Error reading or parsing the file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PageConfigError> {
        let content = fs::read_to_string(&path).map_err(PageConfigError::IoError)?;

        let config: PageConfig =
            toml::from_str(&content).map_err(PageConfigError::ParseError)?;

        log::debug!(
            "Loaded page '{}' with {} sections from {}",
            config.page.title,
            config.sections.len(),
            path.as_ref().display()
        );

        Ok(config)
    }

    /// Save to a page file
    ///
    /// # Parameters
    /// * `path` - Path where the page TOML file will be written
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved page
    /// * `Err(PageConfigError)` - Error serializing or writing the file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PageConfigError> {
        let content = toml::to_string_pretty(self).map_err(PageConfigError::SerializeError)?;

        fs::write(&path, content).map_err(PageConfigError::IoError)?;

        Ok(())
    }
}

/// Errors that can occur when loading or saving a page file
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum PageConfigError {
    /// IO error when reading or writing file
    IoError(std::io::Error),

    /// Error parsing TOML
    ParseError(toml::de::Error),

    /// Error serializing to TOML
    SerializeError(toml::ser::Error),
}

impl std::fmt::Display for PageConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageConfigError::IoError(e) => write!(f, "IO error: {}", e),
            PageConfigError::ParseError(e) => write!(f, "TOML parse error: {}", e),
            PageConfigError::SerializeError(e) => write!(f, "TOML serialize error: {}", e),
        }
    }
}

impl std::error::Error for PageConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PageConfigError::IoError(e) => Some(e),
            PageConfigError::ParseError(e) => Some(e),
            PageConfigError::SerializeError(e) => Some(e),
        }
    }
}
