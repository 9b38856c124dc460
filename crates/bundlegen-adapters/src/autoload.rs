//! Composer autoload inspection.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use bundlegen_core::{
    application::{ApplicationError, ports::AutoloadRegistry},
    error::BundlegenResult,
};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Reads the PSR-4 prefixes from a project's `composer.json`.
#[derive(Debug, Clone)]
pub struct ComposerAutoload {
    manifest: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct ComposerManifest {
    #[serde(default)]
    autoload: AutoloadSection,
    #[serde(default, rename = "autoload-dev")]
    autoload_dev: AutoloadSection,
}

#[derive(Debug, Default, Deserialize)]
struct AutoloadSection {
    /// Values are a path or a list of paths; only the prefixes matter here.
    #[serde(default, rename = "psr-4")]
    psr4: HashMap<String, serde_json::Value>,
}

impl ComposerAutoload {
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
        }
    }

    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    fn load(&self) -> BundlegenResult<Option<ComposerManifest>> {
        if !self.manifest.is_file() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&self.manifest).map_err(|e| {
            ApplicationError::AutoloadInspection {
                reason: format!("{}: {e}", self.manifest.display()),
            }
        })?;

        let manifest = serde_json::from_str(&raw).map_err(|e| {
            ApplicationError::AutoloadInspection {
                reason: format!("{}: {e}", self.manifest.display()),
            }
        })?;

        Ok(Some(manifest))
    }
}

impl AutoloadRegistry for ComposerAutoload {
    #[instrument(skip(self), fields(manifest = %self.manifest.display()))]
    fn is_registered(&self, namespace: &str) -> BundlegenResult<bool> {
        let Some(manifest) = self.load()? else {
            debug!("No composer manifest found");
            return Ok(false);
        };

        let registered = manifest
            .autoload
            .psr4
            .keys()
            .chain(manifest.autoload_dev.psr4.keys())
            .any(|prefix| covers(prefix, namespace));

        debug!(registered, "Checked PSR-4 prefixes");
        Ok(registered)
    }
}

/// `true` if the PSR-4 `prefix` (e.g. `Acme\\`) maps `namespace`.
/// The empty prefix is a fallback that maps everything.
fn covers(prefix: &str, namespace: &str) -> bool {
    let prefix = prefix.trim_end_matches('\\');
    if prefix.is_empty() {
        return true;
    }

    namespace == prefix
        || namespace
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('\\'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn registry(json: &str) -> (tempfile::TempDir, ComposerAutoload) {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("composer.json");
        std::fs::write(&manifest, json).unwrap();
        (dir, ComposerAutoload::new(manifest))
    }

    #[test]
    fn prefix_matching_respects_segments() {
        assert!(covers("Acme\\", "Acme\\BlogBundle"));
        assert!(covers("Acme\\BlogBundle\\", "Acme\\BlogBundle"));
        assert!(!covers("Acme\\", "AcmeCorp\\BlogBundle"));
        assert!(covers("", "Anything\\Bundle"));
    }

    #[test]
    fn reads_psr4_prefixes() {
        let (_dir, registry) = registry(
            r#"{
                "autoload": { "psr-4": { "App\\": "src/", "Acme\\": ["bundles/Acme/"] } },
                "autoload-dev": { "psr-4": { "Tests\\": "tests/" } }
            }"#,
        );

        assert!(registry.is_registered("Acme\\BlogBundle").unwrap());
        assert!(registry.is_registered("Tests\\Unit").unwrap());
        assert!(!registry.is_registered("Other\\ShopBundle").unwrap());
    }

    #[test]
    fn missing_manifest_means_unregistered() {
        let dir = tempdir().unwrap();
        let registry = ComposerAutoload::new(dir.path().join("composer.json"));
        assert!(!registry.is_registered("Acme\\BlogBundle").unwrap());
    }

    #[test]
    fn invalid_json_is_an_inspection_error() {
        let (_dir, registry) = registry("{ not json");
        let err = registry.is_registered("Acme\\BlogBundle").unwrap_err();
        assert!(err.to_string().contains("Could not inspect autoloader configuration"));
    }
}
