//! Configuration for publist
//!
//! Covers where PDFs are served from, section headings, the output format and
//! an optional default author for the single-author view.

use std::path::Path;

use publist_domain::{PublicationType, DEFAULT_PDF_ROOT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::AuthorQuery;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublistConfig {
    /// URL root the PDFs are served from
    pub pdf_root: String,
    /// Section headings per publication kind
    pub sections: SectionTitles,
    /// Output settings
    pub output: OutputConfig,
    /// Author shown by the single-author view when none is given
    pub author: Option<AuthorQuery>,
}

impl Default for PublistConfig {
    fn default() -> Self {
        Self {
            pdf_root: DEFAULT_PDF_ROOT.to_string(),
            sections: SectionTitles::default(),
            output: OutputConfig::default(),
            author: None,
        }
    }
}

/// Headings of the per-kind sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionTitles {
    pub journals: String,
    pub conferences: String,
    pub theses: String,
}

impl Default for SectionTitles {
    fn default() -> Self {
        Self {
            journals: PublicationType::Journal.section_title().to_string(),
            conferences: PublicationType::Conference.section_title().to_string(),
            theses: PublicationType::Thesis.section_title().to_string(),
        }
    }
}

impl SectionTitles {
    pub fn title(&self, kind: PublicationType) -> &str {
        match kind {
            PublicationType::Journal => &self.journals,
            PublicationType::Conference => &self.conferences,
            PublicationType::Thesis => &self.theses,
        }
    }
}

/// Output format of the writers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl PublistConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a `.json` or `.toml` file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content)?,
            _ => Self::from_toml(&content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pdf_root.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "pdf_root must not be empty".to_string(),
            ));
        }

        for kind in PublicationType::ALL {
            if self.sections.title(kind).trim().is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "section title for {} must not be empty",
                    kind
                )));
            }
        }

        if let Some(author) = &self.author {
            if author.lastname.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "author.lastname must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to write TOML: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
