//! Bundle Generator - renders a skeleton bundle to disk.
//!
//! Workflow:
//! 1. Check the target directory (absent, or an empty writable directory)
//! 2. Plan the files for the bundle's format, sharing mode and flavor
//! 3. Render each template and write it
//! 4. On failure, remove the target directory if this run created it

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, TemplateRenderer},
        services::RoutingManipulator,
    },
    domain::{
        Bundle, ConfigFormat, DEFAULT_PREFIX, DEFAULT_RESOURCE_PATH, DomainError, Flavor,
        ImportKind, RenderContext,
    },
    error::BundlegenResult,
};

/// One file the generator will render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub template_id: String,
    pub output: PathBuf,
}

impl PlannedFile {
    fn new(template_id: impl Into<String>, output: PathBuf) -> Self {
        Self {
            template_id: template_id.into(),
            output,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub target_directory: PathBuf,
    pub files: Vec<PathBuf>,
    /// Routing file the bundle was imported into, if any.
    pub routing_file: Option<PathBuf>,
}

/// Generates bundle skeletons.
pub struct BundleGenerator {
    filesystem: Arc<dyn Filesystem>,
    renderer: Arc<dyn TemplateRenderer>,
    routing: RoutingManipulator,
}

impl BundleGenerator {
    pub fn new(filesystem: Arc<dyn Filesystem>, renderer: Arc<dyn TemplateRenderer>) -> Self {
        let routing = RoutingManipulator::new(Arc::clone(&filesystem));
        Self {
            filesystem,
            renderer,
            routing,
        }
    }

    /// Reject a target that exists as a file, is not empty, or cannot be
    /// written to. A missing target is fine.
    pub fn validate_target(&self, dir: &Path) -> BundlegenResult<()> {
        if !self.filesystem.exists(dir) {
            return Ok(());
        }

        if !self.filesystem.is_dir(dir) {
            return Err(DomainError::TargetIsFile { path: dir.into() }.into());
        }
        if !self.filesystem.is_dir_empty(dir)? {
            return Err(DomainError::TargetNotEmpty { path: dir.into() }.into());
        }
        if !self.filesystem.is_writable(dir) {
            return Err(DomainError::TargetNotWritable { path: dir.into() }.into());
        }

        Ok(())
    }

    /// Files `generate` would write, in write order.
    pub fn plan(&self, bundle: &Bundle, flavor: Flavor) -> Vec<PlannedFile> {
        let dir = bundle.target_directory();
        let mut files = vec![PlannedFile::new(
            "bundle/Bundle.php",
            dir.join("src").join(format!("{}.php", bundle.name())),
        )];

        if bundle.should_generate_dependency_injection() {
            let di = dir.join("src").join("DependencyInjection");
            files.push(PlannedFile::new(
                "bundle/Extension.php",
                di.join(format!("{}Extension.php", bundle.basename())),
            ));
            files.push(PlannedFile::new(
                "bundle/Configuration.php",
                di.join("Configuration.php"),
            ));
        }

        let controller = match bundle.format() {
            ConfigFormat::Annotation => "bundle/DefaultController.annotation.php",
            _ => "bundle/DefaultController.php",
        };
        files.push(PlannedFile::new(
            controller,
            dir.join("src").join("Controller").join("DefaultController.php"),
        ));
        files.push(PlannedFile::new(
            "bundle/DefaultControllerTest.php",
            bundle
                .tests_directory()
                .join("Controller")
                .join("DefaultControllerTest.php"),
        ));

        let services = bundle.services_configuration_filename();
        files.push(PlannedFile::new(
            format!("bundle/{services}"),
            dir.join("config").join(&services),
        ));

        if let Some(routing) = bundle.routing_configuration_filename() {
            files.push(PlannedFile::new(
                format!("bundle/{routing}"),
                dir.join("config").join("pimcore").join(&routing),
            ));
        }

        if flavor == Flavor::Pimcore {
            files.push(PlannedFile::new(
                "js/pimcore/startup.js",
                dir.join("public").join("js").join("pimcore").join("startup.js"),
            ));
        }

        files
    }

    /// Routing file an annotation bundle imports itself into, if any.
    pub fn annotation_routing_file(&self, bundle: &Bundle, flavor: Flavor) -> Option<PathBuf> {
        (flavor == Flavor::Pimcore && bundle.format() == ConfigFormat::Annotation).then(|| {
            bundle
                .target_directory()
                .join("config")
                .join("pimcore")
                .join("routing.yaml")
        })
    }

    /// Generate the bundle.
    ///
    /// # Errors
    ///
    /// - `DomainError::TargetIsFile` / `TargetNotEmpty` / `TargetNotWritable`
    ///   before anything is written
    /// - `ApplicationError::TemplateNotFound` / `RenderingFailed` /
    ///   `FilesystemError` while writing; a target created by this call is
    ///   removed again
    #[instrument(
        skip_all,
        fields(
            bundle = %bundle.name(),
            flavor = %flavor,
            format = %bundle.format(),
            target = %bundle.target_directory().display()
        )
    )]
    pub fn generate(&self, bundle: &Bundle, flavor: Flavor) -> BundlegenResult<GenerationReport> {
        let target = bundle.target_directory();
        self.validate_target(&target)?;

        let created_target = !self.filesystem.exists(&target);

        match self.write_all(bundle, flavor, &target) {
            Ok(report) => {
                info!(files = report.files.len(), "Bundle generated");
                Ok(report)
            }
            Err(e) => {
                warn!(error = %e, "Generation failed");
                if created_target {
                    self.rollback(&target);
                }
                Err(e)
            }
        }
    }

    fn write_all(
        &self,
        bundle: &Bundle,
        flavor: Flavor,
        target: &Path,
    ) -> BundlegenResult<GenerationReport> {
        self.filesystem.create_dir_all(target)?;

        let context = RenderContext::for_bundle(bundle);
        let mut written = Vec::new();

        for file in self.plan(bundle, flavor) {
            let content = self.renderer.render(&file.template_id, &context)?;

            if let Some(parent) = file.output.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&file.output, &content)?;

            debug!(template = %file.template_id, path = %file.output.display(), "Wrote file");
            written.push(file.output);
        }

        let routing_file = match self.annotation_routing_file(bundle, flavor) {
            Some(path) => {
                self.routing.add_import(
                    &path,
                    bundle.name(),
                    ImportKind::AnnotationDiscovery,
                    DEFAULT_PREFIX,
                    DEFAULT_RESOURCE_PATH,
                )?;
                written.push(path.clone());
                Some(path)
            }
            None => None,
        };

        Ok(GenerationReport {
            target_directory: target.to_path_buf(),
            files: written,
            routing_file,
        })
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!(path = %root.display(), "Rollback successful");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockFilesystem, MockTemplateRenderer},
    };
    use crate::error::BundlegenError;
    use std::sync::Mutex;

    fn bundle(format: ConfigFormat, shared: bool) -> Bundle {
        Bundle::new(
            "Acme\\BlogBundle",
            "AcmeBlogBundle",
            "/app/bundles",
            format,
            shared,
        )
    }

    fn echo_renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|id, _| Ok(format!("// {id}\n")));
        renderer
    }

    fn template_ids(plan: &[PlannedFile]) -> Vec<&str> {
        plan.iter().map(|f| f.template_id.as_str()).collect()
    }

    fn generator(fs: MockFilesystem, renderer: MockTemplateRenderer) -> BundleGenerator {
        BundleGenerator::new(Arc::new(fs), Arc::new(renderer))
    }

    #[test]
    fn plan_for_pimcore_annotation() {
        let b = bundle(ConfigFormat::Annotation, false)
            .with_flavor_layout(Flavor::Pimcore, Path::new("/app"));
        let generator = generator(MockFilesystem::new(), MockTemplateRenderer::new());
        let plan = generator.plan(&b, Flavor::Pimcore);

        assert_eq!(
            template_ids(&plan),
            vec![
                "bundle/Bundle.php",
                "bundle/DefaultController.annotation.php",
                "bundle/DefaultControllerTest.php",
                "bundle/services.yaml",
                "js/pimcore/startup.js",
            ]
        );
        assert_eq!(
            plan[2].output,
            PathBuf::from("/app/bundles/Acme/BlogBundle/Tests/Controller/DefaultControllerTest.php")
        );
        assert_eq!(
            generator.annotation_routing_file(&b, Flavor::Pimcore),
            Some(PathBuf::from("/app/bundles/Acme/BlogBundle/config/pimcore/routing.yaml"))
        );
    }

    #[test]
    fn plan_for_shared_symfony_xml() {
        let b = bundle(ConfigFormat::Xml, true);
        let generator = generator(MockFilesystem::new(), MockTemplateRenderer::new());
        let plan = generator.plan(&b, Flavor::Symfony);

        assert_eq!(
            template_ids(&plan),
            vec![
                "bundle/Bundle.php",
                "bundle/Extension.php",
                "bundle/Configuration.php",
                "bundle/DefaultController.php",
                "bundle/DefaultControllerTest.php",
                "bundle/services.xml",
                "bundle/routing.xml",
            ]
        );
        assert_eq!(
            plan[1].output,
            PathBuf::from("/app/bundles/Acme/BlogBundle/src/DependencyInjection/AcmeBlogExtension.php")
        );
        assert_eq!(
            plan[6].output,
            PathBuf::from("/app/bundles/Acme/BlogBundle/config/pimcore/routing.xml")
        );
        assert_eq!(generator.annotation_routing_file(&b, Flavor::Symfony), None);
    }

    #[test]
    fn target_that_is_a_file_is_rejected() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(false);
        fs.expect_write_file().never();

        let err = generator(fs, MockTemplateRenderer::new())
            .generate(&bundle(ConfigFormat::Yaml, true), Flavor::Symfony)
            .unwrap_err();

        assert!(matches!(
            err,
            BundlegenError::Domain(DomainError::TargetIsFile { .. })
        ));
        assert!(err.to_string().contains("exists but is a file"));
    }

    #[test]
    fn non_empty_target_is_rejected() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(true);
        fs.expect_is_dir_empty().returning(|_| Ok(false));

        let err = generator(fs, MockTemplateRenderer::new())
            .generate(&bundle(ConfigFormat::Yaml, true), Flavor::Symfony)
            .unwrap_err();

        assert!(err.to_string().contains("is not empty"));
    }

    #[test]
    fn read_only_target_is_rejected() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(true);
        fs.expect_is_dir_empty().returning(|_| Ok(true));
        fs.expect_is_writable().return_const(false);

        let err = generator(fs, MockTemplateRenderer::new())
            .generate(&bundle(ConfigFormat::Yaml, true), Flavor::Symfony)
            .unwrap_err();

        assert!(err.to_string().contains("is not writable"));
    }

    #[test]
    fn writes_every_planned_file() {
        let written = Arc::new(Mutex::new(Vec::<(PathBuf, String)>::new()));
        let sink = Arc::clone(&written);

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |path, content| {
            sink.lock().unwrap().push((path.to_path_buf(), content.to_string()));
            Ok(())
        });

        let b = bundle(ConfigFormat::Xml, true);
        let report = generator(fs, echo_renderer())
            .generate(&b, Flavor::Symfony)
            .unwrap();

        let written = written.lock().unwrap();
        assert_eq!(report.files.len(), 7);
        assert_eq!(written.len(), 7);
        assert_eq!(report.routing_file, None);
        assert_eq!(
            written[0],
            (
                PathBuf::from("/app/bundles/Acme/BlogBundle/src/AcmeBlogBundle.php"),
                "// bundle/Bundle.php\n".to_string()
            )
        );
    }

    #[test]
    fn pimcore_annotation_imports_itself() {
        let routing_path = PathBuf::from("/app/bundles/Acme/BlogBundle/config/pimcore/routing.yaml");
        let written = Arc::new(Mutex::new(Vec::<(PathBuf, String)>::new()));
        let sink = Arc::clone(&written);

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |path, content| {
            sink.lock().unwrap().push((path.to_path_buf(), content.to_string()));
            Ok(())
        });

        let b = bundle(ConfigFormat::Annotation, false)
            .with_flavor_layout(Flavor::Pimcore, Path::new("/app"));
        let report = generator(fs, echo_renderer())
            .generate(&b, Flavor::Pimcore)
            .unwrap();

        assert_eq!(report.routing_file.as_ref(), Some(&routing_path));

        let written = written.lock().unwrap();
        let (path, content) = written.last().unwrap();
        assert_eq!(path, &routing_path);
        assert_eq!(
            content,
            "acme_blog:\n    resource: \"@AcmeBlogBundle/src/Controller/\"\n    type:     annotation\n    prefix:   /\n\n"
        );
    }

    #[test]
    fn failure_rolls_back_created_target() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        fs.expect_remove_dir_all()
            .withf(|p| p == Path::new("/app/bundles/Acme/BlogBundle"))
            .times(1)
            .returning(|_| Ok(()));

        let err = generator(fs, echo_renderer())
            .generate(&bundle(ConfigFormat::Yaml, true), Flavor::Symfony)
            .unwrap_err();

        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn failure_keeps_preexisting_target() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(true);
        fs.expect_is_dir_empty().returning(|_| Ok(true));
        fs.expect_is_writable().return_const(true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_remove_dir_all().never();

        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|id, _| {
            Err(ApplicationError::TemplateNotFound { id: id.to_string() }.into())
        });

        let err = generator(fs, renderer)
            .generate(&bundle(ConfigFormat::Yaml, true), Flavor::Symfony)
            .unwrap_err();

        assert!(matches!(
            err,
            BundlegenError::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }
}
