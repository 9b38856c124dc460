//! Implementation of the `bundlegen generate` command.
//!
//! Responsibility: collect the bundle parameters (flags, config, prompts),
//! call the core generator and instruction planner, and display results.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, instrument};

use bundlegen_adapters::{ComposerAutoload, LocalFilesystem, SimpleRenderer};
use bundlegen_core::{
    application::{
        BundleGenerator, GenerationReport, InstructionPlanner, NextStep, PlannerSettings,
        RoutingManipulator, ports::Filesystem,
    },
    domain::{Bundle, Flavor, Validators},
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Project-local skeleton overrides, checked after the configured ones.
const PROJECT_SKELETON_DIR: &str = "Resources/GeneratorBundle/skeleton";

/// Bundle parameters before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRequest {
    pub namespace: Option<String>,
    pub name: Option<String>,
    pub dir: PathBuf,
    pub format: Option<String>,
    pub shared: bool,
}

impl BundleRequest {
    /// Flags win over configured defaults.
    pub fn from_sources(args: &GenerateArgs, config: &AppConfig) -> Self {
        Self {
            namespace: args.namespace.clone(),
            name: args.bundle_name.clone(),
            dir: args.dir.clone().unwrap_or_else(|| config.defaults.dir.clone()),
            format: args.format.clone().or_else(|| config.defaults.format.clone()),
            shared: args.shared || config.defaults.shared,
        }
    }

    /// Validate the request and build the bundle for `flavor`.
    ///
    /// A relative `dir` is resolved against `project_root`.
    pub fn into_bundle(self, flavor: Flavor, project_root: &Path) -> CliResult<Bundle> {
        let namespace = self
            .namespace
            .ok_or(CliError::MissingOption { option: "namespace" })?;
        let namespace = Validators::validate_bundle_namespace(&namespace, self.shared)?;

        let name = self
            .name
            .unwrap_or_else(|| Bundle::suggested_name(&namespace));
        let name = Validators::validate_bundle_name(&name)?;

        let format = match self.format {
            Some(format) => Validators::validate_format(&format)?,
            None => flavor.default_format(self.shared),
        };

        let target_root = resolve(project_root, &self.dir);

        Ok(
            Bundle::new(namespace, name, target_root, format, self.shared)
                .with_flavor_layout(flavor, project_root),
        )
    }
}

/// Execute the `bundlegen generate` command.
///
/// 1. Merge flags and config into a [`BundleRequest`]
/// 2. Complete it interactively when allowed
/// 3. Validate into a [`Bundle`]
/// 4. Early-exit if `--dry-run`
/// 5. Generate, then plan and print the follow-up steps
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let flavor = args.flavor.map(Flavor::from).unwrap_or(config.defaults.flavor);
    let project_root = config.project_root(args.project_dir.as_deref());
    let mut request = BundleRequest::from_sources(&args, &config);

    let interactive = !args.no_interaction && !global.quiet && std::io::stdin().is_terminal();
    if interactive {
        request = ask(request, flavor, &output)?;
    }

    let bundle = request.into_bundle(flavor, &project_root)?;
    debug!(
        namespace = bundle.namespace(),
        name = bundle.name(),
        format = %bundle.format(),
        shared = bundle.is_shared(),
        %flavor,
        "Bundle resolved"
    );

    let filesystem: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());
    let renderer = Arc::new(SimpleRenderer::from_env(skeleton_dirs(&config, &project_root)));
    let generator = BundleGenerator::new(Arc::clone(&filesystem), renderer);

    if args.dry_run {
        return print_plan(&generator, &bundle, flavor, &project_root, &output);
    }

    if !output.is_json() {
        output.header("Bundle generation")?;
        output.print(&format!(
            "> Generating a sample bundle skeleton into {}",
            bundle.relative_target_directory(&project_root)
        ))?;
    }

    let report = generator.generate(&bundle, flavor)?;
    info!(files = report.files.len(), "Bundle generated");

    let planner = InstructionPlanner::new(
        Arc::new(ComposerAutoload::new(resolve(
            &project_root,
            &config.project.composer_file,
        ))),
        RoutingManipulator::new(filesystem),
        PlannerSettings {
            project_root: project_root.clone(),
            kernel_file: resolve(&project_root, &config.project.kernel_file),
            routing_file: config
                .project
                .routing_file
                .as_deref()
                .map(|file| resolve(&project_root, file)),
        },
    );
    let steps = planner.plan(&bundle, flavor);

    if output.is_json() {
        output.json(&report_json(&report, &steps))?;
        return Ok(());
    }

    print_summary(&report, &steps, &output)
}

#[cfg(feature = "interactive")]
fn ask(request: BundleRequest, flavor: Flavor, output: &OutputManager) -> CliResult<BundleRequest> {
    crate::prompts::ask(request, flavor, output)
}

/// Without prompts a complete request is still fine; only a missing
/// namespace needs the feature.
#[cfg(not(feature = "interactive"))]
fn ask(request: BundleRequest, _flavor: Flavor, _output: &OutputManager) -> CliResult<BundleRequest> {
    if request.namespace.is_none() {
        return Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        });
    }
    Ok(request)
}

fn skeleton_dirs(config: &AppConfig, project_root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = config
        .templates
        .skeleton_dirs
        .iter()
        .map(|dir| resolve(project_root, dir))
        .collect();

    let project_dir = project_root.join(PROJECT_SKELETON_DIR);
    if project_dir.is_dir() {
        dirs.push(project_dir);
    }
    dirs
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn print_plan(
    generator: &BundleGenerator,
    bundle: &Bundle,
    flavor: Flavor,
    project_root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let plan = generator.plan(bundle, flavor);
    let routing = generator.annotation_routing_file(bundle, flavor);

    if output.is_json() {
        output.json(&json!({
            "dry_run": true,
            "target_directory": bundle.target_directory(),
            "files": plan.iter().map(|f| &f.output).collect::<Vec<_>>(),
            "routing_file": routing,
        }))?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would generate {} ({flavor}, {}) into {}",
        bundle.name(),
        bundle.format(),
        bundle.relative_target_directory(project_root),
    ))?;
    for file in &plan {
        output.print(&format!("  {}  ({})", file.output.display(), file.template_id))?;
    }
    if let Some(routing) = routing {
        output.print(&format!("  {}  (routing import)", routing.display()))?;
    }
    Ok(())
}

fn print_summary(report: &GenerationReport, steps: &[NextStep], output: &OutputManager) -> CliResult<()> {
    if let Some(routing) = &report.routing_file {
        output.info(&format!("Routes imported into {}", routing.display()))?;
    }
    output.print("")?;

    if steps.is_empty() {
        output.success("Everything is OK! Now get to work :).")?;
        return Ok(());
    }

    output.warning("The command was not able to configure everything automatically.")?;
    output.print("You'll need to make the following changes manually.")?;
    output.print("")?;
    for (index, step) in steps.iter().enumerate() {
        output.step(index + 1, step)?;
    }
    Ok(())
}

fn report_json(report: &GenerationReport, steps: &[NextStep]) -> serde_json::Value {
    json!({
        "target_directory": report.target_directory,
        "files": report.files,
        "routing_file": report.routing_file,
        "next_steps": steps
            .iter()
            .map(|step| json!({ "title": step.title, "lines": step.lines }))
            .collect::<Vec<_>>(),
    })
}
