//! `bundlegen routing`: direct access to the routing import manipulator.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, instrument};

use bundlegen_adapters::LocalFilesystem;
use bundlegen_core::{
    application::RoutingManipulator,
    domain::{ImportKind, Validators},
};

use crate::{
    cli::{RoutingAddArgs, RoutingCommands},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(cmd: RoutingCommands, output: OutputManager) -> CliResult<()> {
    match cmd {
        RoutingCommands::Add(args) => add(args, &output),
    }
}

#[instrument(skip_all, fields(bundle = %args.bundle, file = %args.file.display()))]
fn add(args: RoutingAddArgs, output: &OutputManager) -> CliResult<()> {
    let kind = ImportKind::for_format(Validators::validate_format(&args.format)?);

    RoutingManipulator::new(Arc::new(LocalFilesystem::new())).add_import(
        &args.file,
        &args.bundle,
        kind,
        &args.prefix,
        &args.path,
    )?;
    info!("Routing import added");

    if output.is_json() {
        output.json(&json!({
            "file": args.file,
            "bundle": args.bundle,
            "prefix": args.prefix,
        }))?;
    } else {
        output.success(&format!(
            "Imported @{} into {}",
            args.bundle,
            args.file.display()
        ))?;
    }
    Ok(())
}
