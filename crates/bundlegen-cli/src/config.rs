//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `BUNDLEGEN__SECTION__KEY`
//! 3. Config file (`--config`, else [`AppConfig::config_path`])
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use bundlegen_core::domain::Flavor;

/// Prefix of the environment variables read into the configuration.
pub const ENV_PREFIX: &str = "BUNDLEGEN";

/// File name used when no platform config directory is available.
pub const LOCAL_CONFIG_FILE: &str = ".bundlegen.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `bundlegen generate`.
    pub defaults: Defaults,
    /// Layout of the host application.
    pub project: ProjectConfig,
    pub templates: TemplateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Directory bundles are generated in, relative to the project root.
    pub dir: PathBuf,
    /// `None` picks the flavor's default format.
    pub format: Option<String>,
    pub shared: bool,
    pub flavor: Flavor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// `None` means the current directory.
    pub root: Option<PathBuf>,
    pub kernel_file: PathBuf,
    /// Application routing file new Symfony bundles are imported into.
    pub routing_file: Option<PathBuf>,
    pub composer_file: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directories searched for skeleton overrides, in order.
    pub skeleton_dirs: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("bundles"),
            format: None,
            shared: false,
            flavor: Flavor::default(),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: None,
            kernel_file: PathBuf::from("src/Kernel.php"),
            routing_file: Some(PathBuf::from("config/routes.yaml")),
            composer_file: PathBuf::from("composer.json"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration on top of the built-in defaults.
    ///
    /// A file passed explicitly via `--config` must exist; the default
    /// location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Self::builder(&path, required)?
            .build()
            .and_then(Config::try_deserialize::<Self>)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    fn builder(
        path: &Path,
        required: bool,
    ) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialise built-in defaults")?;

        Ok(Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("templates.skeleton_dirs"),
            ))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.bundlegen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "bundlegen", "bundlegen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Project root: explicit override, configured root, or the current
    /// directory.
    pub fn project_root(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.project.root.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_target_pimcore_bundles_dir() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.flavor, Flavor::Pimcore);
        assert_eq!(cfg.defaults.dir, PathBuf::from("bundles"));
        assert!(cfg.defaults.format.is_none());
        assert!(!cfg.defaults.shared);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bundlegen.toml");
        std::fs::write(
            &path,
            "[defaults]\nflavor = \"symfony\"\nshared = true\n\n[project]\nkernel_file = \"app/AppKernel.php\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(cfg.defaults.flavor, Flavor::Symfony);
        assert!(cfg.defaults.shared);
        assert_eq!(cfg.project.kernel_file, PathBuf::from("app/AppKernel.php"));
        // Untouched keys keep their defaults.
        assert_eq!(cfg.project.composer_file, PathBuf::from("composer.json"));
        assert_eq!(cfg.defaults.dir, PathBuf::from("bundles"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn invalid_flavor_in_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bundlegen.toml");
        std::fs::write(&path, "[defaults]\nflavor = \"laravel\"\n").unwrap();

        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn project_root_precedence() {
        let mut cfg = AppConfig::default();
        assert_eq!(cfg.project_root(None), PathBuf::from("."));

        cfg.project.root = Some(PathBuf::from("/srv/app"));
        assert_eq!(cfg.project_root(None), PathBuf::from("/srv/app"));
        assert_eq!(
            cfg.project_root(Some(Path::new("/tmp/other"))),
            PathBuf::from("/tmp/other")
        );
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
