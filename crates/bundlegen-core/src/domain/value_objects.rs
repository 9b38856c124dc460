//! Domain value objects: ConfigFormat, Flavor, ImportKind.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file defines the types, their string representations, and their
//! `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ConfigFormat ─────────────────────────────────────────────────────────────

/// Format used for the generated bundle's configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    /// Routes are discovered from controller annotations; services in YAML.
    Annotation,
    Yaml,
    Xml,
    Php,
}

impl ConfigFormat {
    pub const ALL: [ConfigFormat; 4] = [Self::Annotation, Self::Yaml, Self::Xml, Self::Php];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annotation => "annotation",
            Self::Yaml => "yaml",
            Self::Xml => "xml",
            Self::Php => "php",
        }
    }

    /// File extension used for config files of this format.
    ///
    /// Annotation bundles still keep their services in YAML.
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::Annotation | Self::Yaml => "yaml",
            Self::Xml => "xml",
            Self::Php => "php",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annotation" => Ok(Self::Annotation),
            "yaml" | "yml" => Ok(Self::Yaml),
            "xml" => Ok(Self::Xml),
            "php" => Ok(Self::Php),
            _ => Err(DomainError::InvalidFormat { format: s.into() }),
        }
    }
}

// ── Flavor ───────────────────────────────────────────────────────────────────

/// Host framework conventions the generator follows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Pimcore bundle: annotation routing file, admin startup script,
    /// registration through bundle search paths.
    #[default]
    Pimcore,
    /// Plain Symfony bundle: registered in the kernel, routing and services
    /// imported into the application configuration.
    Symfony,
}

impl Flavor {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pimcore => "pimcore",
            Self::Symfony => "symfony",
        }
    }

    /// Format used when the user does not pick one.
    pub const fn default_format(self, shared: bool) -> ConfigFormat {
        match (self, shared) {
            (Self::Symfony, true) => ConfigFormat::Xml,
            _ => ConfigFormat::Annotation,
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pimcore" => Ok(Self::Pimcore),
            "symfony" => Ok(Self::Symfony),
            _ => Err(DomainError::InvalidFlavor { flavor: s.into() }),
        }
    }
}

// ── ImportKind ───────────────────────────────────────────────────────────────

/// How a routing import block loads the bundle's routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    /// Discover routes from the bundle's controller annotations.
    AnnotationDiscovery,
    /// Load an explicit routing resource file with the given format.
    ExplicitResource { format: ConfigFormat },
}

impl ImportKind {
    /// The import kind matching a bundle's configuration format.
    pub const fn for_format(format: ConfigFormat) -> Self {
        match format {
            ConfigFormat::Annotation => Self::AnnotationDiscovery,
            other => Self::ExplicitResource { format: other },
        }
    }
}

impl From<ConfigFormat> for ImportKind {
    fn from(format: ConfigFormat) -> Self {
        Self::for_format(format)
    }
}
