//! Follow-up steps after a bundle was generated.
//!
//! The generator only writes the bundle itself. Wiring it into the host
//! application (autoloader, kernel, routing, services, search paths) is
//! either done here when possible, or described as a manual [`NextStep`].

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ports::AutoloadRegistry, services::RoutingManipulator},
    domain::{Bundle, Flavor, ImportKind},
};

/// A step the user has to carry out by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextStep {
    pub title: String,
    pub lines: Vec<String>,
}

impl NextStep {
    fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }
}

/// Where the host application keeps the files the planner refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerSettings {
    pub project_root: PathBuf,
    pub kernel_file: PathBuf,
    /// Main routing file. Without one, routing is always a manual step.
    pub routing_file: Option<PathBuf>,
}

/// Works out which wiring steps remain after generation.
pub struct InstructionPlanner {
    autoload: Arc<dyn AutoloadRegistry>,
    routing: RoutingManipulator,
    settings: PlannerSettings,
}

impl InstructionPlanner {
    pub fn new(
        autoload: Arc<dyn AutoloadRegistry>,
        routing: RoutingManipulator,
        settings: PlannerSettings,
    ) -> Self {
        Self {
            autoload,
            routing,
            settings,
        }
    }

    /// Run the automatic steps and return the manual ones, in order.
    ///
    /// An empty list means nothing is left to do.
    #[instrument(skip_all, fields(bundle = %bundle.name(), flavor = %flavor))]
    pub fn plan(&self, bundle: &Bundle, flavor: Flavor) -> Vec<NextStep> {
        let mut steps = Vec::new();

        if let Some(step) = self.autoloader_step(bundle) {
            steps.push(step);
        }

        match flavor {
            Flavor::Symfony => {
                steps.push(self.kernel_step(bundle));
                if let Some(step) = self.routing_step(bundle) {
                    steps.push(step);
                }
                if !bundle.should_generate_dependency_injection() {
                    steps.push(services_step(bundle));
                }
            }
            Flavor::Pimcore => steps.push(self.search_path_step(bundle)),
        }

        info!(manual_steps = steps.len(), "Planned follow-up steps");
        steps
    }

    fn autoloader_step(&self, bundle: &Bundle) -> Option<NextStep> {
        match self.autoload.is_registered(bundle.namespace()) {
            Ok(true) => {
                debug!("Namespace already autoloaded");
                return None;
            }
            Ok(false) => {}
            Err(e) => warn!(error = %e, "Could not inspect autoloader, assuming unregistered"),
        }

        let escaped = bundle.namespace().replace('\\', "\\\\");
        Some(NextStep::new(
            "Autoloader",
            vec![
                "Edit the composer.json file and register the bundle".into(),
                "namespace in the \"autoload:psr-4\" section and run composer dump-autoload:"
                    .into(),
                format!(
                    "    \"{escaped}\\\\\": \"{}\"",
                    bundle.relative_target_directory(&self.settings.project_root)
                ),
            ],
        ))
    }

    fn kernel_step(&self, bundle: &Bundle) -> NextStep {
        NextStep::new(
            "Kernel",
            vec![
                format!("Edit {}", self.settings.kernel_file.display()),
                "and add the following bundle in the Kernel::registerBundlesToCollection() method:"
                    .into(),
                String::new(),
                format!(
                    "    $collection->addBundle({}::class);",
                    bundle.bundle_class_name()
                ),
            ],
        )
    }

    /// Import into the main routing file when configured; describe the block
    /// otherwise or when that fails.
    fn routing_step(&self, bundle: &Bundle) -> Option<NextStep> {
        let import = self
            .routing
            .import(bundle.name(), ImportKind::for_format(bundle.format()));

        if let Some(file) = &self.settings.routing_file {
            match self.routing.apply(file, &import) {
                Ok(()) => {
                    info!(file = %file.display(), "Imported bundle routing");
                    return None;
                }
                Err(e) if e.is_duplicate_import() => {
                    debug!(file = %file.display(), "Bundle routing already imported");
                    return None;
                }
                Err(e) => warn!(error = %e, "Automatic routing import failed"),
            }
        }

        let mut lines = vec![
            "Import the bundle's routing resource in the app's main routing file:".into(),
            String::new(),
        ];
        lines.extend(
            import
                .render_block()
                .lines()
                .filter(|l| !l.is_empty())
                .map(|l| format!("    {l}")),
        );

        Some(NextStep::new("Routing", lines))
    }

    fn search_path_step(&self, bundle: &Bundle) -> NextStep {
        let relative = bundle.relative_target_directory(&self.settings.project_root);
        NextStep::new(
            "Bundle search paths",
            vec![
                "Edit the application configuration and make sure".into(),
                format!("you have added {relative} to the Pimcore bundle search paths:"),
                "    pimcore:".into(),
                "        bundles:".into(),
                "            search_paths:".into(),
                format!("                - {relative}"),
            ],
        )
    }
}

fn services_step(bundle: &Bundle) -> NextStep {
    let services = bundle.services_configuration_filename();
    NextStep::new(
        "Configuration",
        vec![
            format!("Import the bundle's \"{services}\" resource in the app's main configuration file:"),
            String::new(),
            format!(
                "    - {{ resource: \"@{}/Resources/config/{services}\" }}",
                bundle.name()
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockAutoloadRegistry, MockFilesystem},
    };
    use crate::domain::{ConfigFormat, NamingConvention};
    use std::path::Path;

    fn bundle(format: ConfigFormat, shared: bool) -> Bundle {
        Bundle::new(
            "Acme\\BlogBundle",
            "AcmeBlogBundle",
            "/app/bundles",
            format,
            shared,
        )
    }

    fn autoload(registered: bool) -> Arc<MockAutoloadRegistry> {
        let mut registry = MockAutoloadRegistry::new();
        registry
            .expect_is_registered()
            .returning(move |_| Ok(registered));
        Arc::new(registry)
    }

    fn settings(routing_file: Option<&str>) -> PlannerSettings {
        PlannerSettings {
            project_root: PathBuf::from("/app"),
            kernel_file: PathBuf::from("src/Kernel.php"),
            routing_file: routing_file.map(PathBuf::from),
        }
    }

    fn planner(
        autoload: Arc<MockAutoloadRegistry>,
        fs: MockFilesystem,
        settings: PlannerSettings,
    ) -> InstructionPlanner {
        InstructionPlanner::new(autoload, RoutingManipulator::new(Arc::new(fs)), settings)
    }

    fn titles(steps: &[NextStep]) -> Vec<&str> {
        steps.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn pimcore_with_registered_namespace_only_needs_search_path() {
        let steps = planner(autoload(true), MockFilesystem::new(), settings(None))
            .plan(&bundle(ConfigFormat::Annotation, false), Flavor::Pimcore);

        assert_eq!(titles(&steps), vec!["Bundle search paths"]);
        assert!(steps[0].lines.contains(&"                - bundles/Acme/BlogBundle".to_string()));
    }

    #[test]
    fn unregistered_namespace_gets_psr4_line() {
        let steps = planner(autoload(false), MockFilesystem::new(), settings(None))
            .plan(&bundle(ConfigFormat::Annotation, false), Flavor::Pimcore);

        assert_eq!(titles(&steps), vec!["Autoloader", "Bundle search paths"]);
        assert_eq!(
            steps[0].lines[2],
            r#"    "Acme\\BlogBundle\\": "bundles/Acme/BlogBundle""#
        );
    }

    #[test]
    fn autoload_inspection_failure_is_treated_as_unregistered() {
        let mut registry = MockAutoloadRegistry::new();
        registry.expect_is_registered().returning(|_| {
            Err(ApplicationError::AutoloadInspection {
                reason: "bad json".into(),
            }
            .into())
        });

        let steps = planner(Arc::new(registry), MockFilesystem::new(), settings(None))
            .plan(&bundle(ConfigFormat::Annotation, false), Flavor::Pimcore);

        assert_eq!(steps[0].title, "Autoloader");
    }

    #[test]
    fn symfony_without_routing_file_describes_block() {
        let steps = planner(autoload(true), MockFilesystem::new(), settings(None))
            .plan(&bundle(ConfigFormat::Annotation, false), Flavor::Symfony);

        assert_eq!(titles(&steps), vec!["Kernel", "Routing", "Configuration"]);
        assert_eq!(
            steps[0].lines[3],
            "    $collection->addBundle(Acme\\BlogBundle\\AcmeBlogBundle::class);"
        );
        assert_eq!(
            &steps[1].lines[2..],
            &[
                "    acme_blog:".to_string(),
                "        resource: \"@AcmeBlogBundle/src/Controller/\"".to_string(),
                "        type:     annotation".to_string(),
                "        prefix:   /".to_string(),
            ]
        );
        assert_eq!(
            steps[2].lines[2],
            "    - { resource: \"@AcmeBlogBundle/Resources/config/services.yaml\" }"
        );
    }

    #[test]
    fn manual_routing_block_uses_manipulator_naming() {
        let routing = RoutingManipulator::new(Arc::new(MockFilesystem::new()))
            .with_naming(NamingConvention::with_suffix_len("BlogBundle".len()));
        let steps = InstructionPlanner::new(autoload(true), routing, settings(None))
            .plan(&bundle(ConfigFormat::Annotation, false), Flavor::Symfony);

        assert_eq!(steps[1].title, "Routing");
        assert_eq!(steps[1].lines[2], "    acme:");
    }

    #[test]
    fn shared_symfony_bundle_skips_services_import() {
        let steps = planner(autoload(true), MockFilesystem::new(), settings(None))
            .plan(&bundle(ConfigFormat::Xml, true), Flavor::Symfony);

        assert_eq!(titles(&steps), vec!["Kernel", "Routing"]);
        assert!(steps[1].lines.iter().any(|l| l.contains("routing.xml")));
    }

    #[test]
    fn successful_routing_import_removes_step() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string().returning(|_| Ok(String::new()));
        fs.expect_write_file()
            .withf(|p, content| {
                p == Path::new("config/routes.yaml") && content.starts_with("acme_blog:\n")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let steps = planner(autoload(true), fs, settings(Some("config/routes.yaml")))
            .plan(&bundle(ConfigFormat::Annotation, true), Flavor::Symfony);

        assert_eq!(titles(&steps), vec!["Kernel"]);
    }

    #[test]
    fn already_imported_routing_is_not_repeated() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("blog:\n    resource: \"@AcmeBlogBundle/src/Controller/\"\n".into()));
        fs.expect_write_file().never();

        let steps = planner(autoload(true), fs, settings(Some("config/routes.yaml")))
            .plan(&bundle(ConfigFormat::Annotation, true), Flavor::Symfony);

        assert_eq!(titles(&steps), vec!["Kernel"]);
    }

    #[test]
    fn failed_routing_import_falls_back_to_manual_step() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into())
        });

        let steps = planner(autoload(true), fs, settings(Some("config/routes.yaml")))
            .plan(&bundle(ConfigFormat::Annotation, true), Flavor::Symfony);

        assert_eq!(titles(&steps), vec!["Kernel", "Routing"]);
    }
}
