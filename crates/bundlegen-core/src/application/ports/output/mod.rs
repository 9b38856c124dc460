//! Driven (output) ports - implemented by infrastructure.
//!
//! The `bundlegen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::RenderContext;
use crate::error::BundlegenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `bundlegen_adapters::filesystem::LocalFilesystem` (production)
/// - `bundlegen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> BundlegenResult<()>;

    /// Replace the contents of a file.
    ///
    /// Implementations must not leave a partially written file behind: the
    /// old contents or the new contents are observable, nothing in between.
    fn write_file(&self, path: &Path, content: &str) -> BundlegenResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> BundlegenResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// `true` if the directory has no entries.
    fn is_dir_empty(&self, path: &Path) -> BundlegenResult<bool>;

    /// Best-effort check that files can be created inside `path`.
    fn is_writable(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> BundlegenResult<()>;
}

/// Port for skeleton template rendering.
///
/// Implemented by:
/// - `bundlegen_adapters::renderer::SimpleRenderer` (built-in skeletons,
///   optional on-disk overrides)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render the template `template_id` (e.g. `bundle/Bundle.php`).
    fn render(&self, template_id: &str, context: &RenderContext) -> BundlegenResult<String>;
}

/// Port for inspecting the host project's class autoloader.
///
/// Implemented by:
/// - `bundlegen_adapters::autoload::ComposerAutoload` (PSR-4 map in composer.json)
#[cfg_attr(test, mockall::automock)]
pub trait AutoloadRegistry: Send + Sync {
    /// `true` if classes under `namespace` can already be autoloaded.
    fn is_registered(&self, namespace: &str) -> BundlegenResult<bool>;
}
