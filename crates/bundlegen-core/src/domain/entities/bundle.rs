//! The bundle being generated.

use std::path::{Path, PathBuf};

use crate::domain::{
    ConfigFormat, Flavor,
    naming::{NamingConvention, underscore},
};

/// A bundle about to be generated.
///
/// Holds the validated user input and derives every name and path the
/// generator and the follow-up instructions need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    namespace: String,
    name: String,
    target_root: PathBuf,
    format: ConfigFormat,
    shared: bool,
    tests_directory: PathBuf,
    naming: NamingConvention,
}

impl Bundle {
    /// Create a bundle. Inputs are expected to be validated already
    /// (see [`crate::domain::Validators`]).
    ///
    /// `target_root` is the directory bundles live in (e.g. `bundles/`); the
    /// namespace is appended to it to form [`Self::target_directory`].
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        target_root: impl Into<PathBuf>,
        format: ConfigFormat,
        shared: bool,
    ) -> Self {
        let namespace = namespace.into();
        let target_root = target_root.into();
        let tests_directory = join_namespace(&target_root, &namespace).join("tests");

        Self {
            namespace,
            name: name.into(),
            target_root,
            format,
            shared,
            tests_directory,
            naming: NamingConvention::default(),
        }
    }

    /// Override where the functional tests are generated.
    pub fn with_tests_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tests_directory = dir.into();
        self
    }

    /// Use a non-default bundle marker convention.
    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    /// Apply the tests-directory convention of a flavor.
    ///
    /// Pimcore bundles keep tests in `<target>/Tests`. Non-shared Symfony
    /// bundles put them under the project's `tests/<Name>`.
    pub fn with_flavor_layout(self, flavor: Flavor, project_root: &Path) -> Self {
        match flavor {
            Flavor::Pimcore => {
                let dir = self.target_directory().join("Tests");
                self.with_tests_directory(dir)
            }
            Flavor::Symfony if !self.shared => {
                let dir = project_root.join("tests").join(&self.name);
                self.with_tests_directory(dir)
            }
            Flavor::Symfony => self,
        }
    }

    /// Default bundle name for a namespace: `Acme\Blog\Bundle\ShopBundle`
    /// suggests `AcmeBlogShopBundle`.
    pub fn suggested_name(namespace: &str) -> String {
        namespace.replace("\\Bundle\\", "").replace('\\', "")
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    pub fn is_shared(&self) -> bool {
        self.shared
    }

    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    pub fn tests_directory(&self) -> &Path {
        &self.tests_directory
    }

    /// Directory the bundle is generated into: target root + namespace path.
    pub fn target_directory(&self) -> PathBuf {
        join_namespace(&self.target_root, &self.namespace)
    }

    /// Target directory relative to the project root, `/`-separated.
    ///
    /// Falls back to the full path when the target lies outside the project.
    pub fn relative_target_directory(&self, project_root: &Path) -> String {
        let target = self.target_directory();
        let relative = target.strip_prefix(project_root).unwrap_or(&target);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
            .trim_start_matches('/')
            .to_string()
    }

    /// Name without the `Bundle` marker.
    pub fn basename(&self) -> &str {
        self.naming.strip_suffix(&self.name)
    }

    /// Dependency injection extension alias, e.g. `acme_blog`.
    pub fn extension_alias(&self) -> String {
        underscore(self.basename())
    }

    /// Only shared bundles get a DependencyInjection directory.
    pub fn should_generate_dependency_injection(&self) -> bool {
        self.shared
    }

    /// `services.yaml` for yaml/annotation, `services.<format>` otherwise.
    pub fn services_configuration_filename(&self) -> String {
        format!("services.{}", self.format.file_extension())
    }

    /// `routing.<format>`, or `None` for annotation bundles.
    pub fn routing_configuration_filename(&self) -> Option<String> {
        match self.format {
            ConfigFormat::Annotation => None,
            other => Some(format!("routing.{}", other.file_extension())),
        }
    }

    /// Fully qualified class name of the bundle class.
    pub fn bundle_class_name(&self) -> String {
        format!("{}\\{}", self.namespace, self.name)
    }
}

fn join_namespace(root: &Path, namespace: &str) -> PathBuf {
    let relative = namespace.replace('\\', "/");
    root.join(relative.trim_matches('/'))
}
