//! Interactive questions for `bundlegen generate`.
//!
//! Every flag the user passed becomes the default answer of its question.

use std::path::PathBuf;

use dialoguer::{Confirm, Input, Select};

use bundlegen_core::domain::{Bundle, ConfigFormat, Flavor, Validators};

use crate::{
    commands::generate::BundleRequest,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Ask for everything `request` does not settle, using its values as
/// defaults. Returns the completed request.
pub fn ask(request: BundleRequest, flavor: Flavor, output: &OutputManager) -> CliResult<BundleRequest> {
    output.header("Welcome to the bundle generator!")?;
    output.print("")?;

    let shared = Confirm::new()
        .with_prompt("Are you planning on sharing this bundle across multiple applications?")
        .default(request.shared)
        .interact()
        .map_err(prompt_failed)?;

    let (namespace, mut name) = ask_namespace(&request, shared, output)?;
    if name.is_none() {
        name = Some(ask_bundle_name(&request, &namespace, output)?);
    }

    output.print("")?;
    output.print("We recommend adding bundles to a bundles/ directory. Unless you're")?;
    output.print("doing something custom, hit enter to keep this default!")?;
    let dir: String = Input::new()
        .with_prompt("Target directory")
        .default(request.dir.display().to_string())
        .interact_text()
        .map_err(prompt_failed)?;

    let format = ask_format(&request, flavor, shared)?;

    let completed = BundleRequest {
        namespace: Some(namespace),
        name,
        dir: PathBuf::from(dir),
        format: Some(format.as_str().to_string()),
        shared,
    };

    output.print("")?;
    let confirmed = Confirm::new()
        .with_prompt("Do you confirm generation?")
        .default(true)
        .interact()
        .map_err(prompt_failed)?;

    if !confirmed {
        return Err(CliError::Cancelled);
    }
    Ok(completed)
}

/// Shared bundles need a vendor namespace. For application bundles a bare
/// name such as `BlogBundle` is accepted and doubles as the bundle name.
fn ask_namespace(
    request: &BundleRequest,
    shared: bool,
    output: &OutputManager,
) -> CliResult<(String, Option<String>)> {
    output.print("")?;
    let prompt = if shared {
        output.print("Each bundle is hosted under a namespace (like Acme/BlogBundle).")?;
        output.print("The namespace should begin with a \"vendor\" name and end with the")?;
        output.print("bundle name itself, which must have Bundle as a suffix.")?;
        "Bundle namespace"
    } else {
        output.print("Give your bundle a descriptive name, like BlogBundle.")?;
        "Bundle name"
    };

    let mut input = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(move |answer: &String| -> Result<(), String> {
            Validators::validate_bundle_namespace(answer, shared)
                .map(|_| ())
                .map_err(|e| e.to_string())
        });
    if let Some(namespace) = &request.namespace {
        input = input.default(namespace.clone());
    }

    let answer = input.interact_text().map_err(prompt_failed)?;
    let namespace = Validators::validate_bundle_namespace(&answer, shared)?;

    let name = (!shared && !namespace.contains('\\')).then(|| namespace.clone());
    Ok((namespace, name))
}

fn ask_bundle_name(
    request: &BundleRequest,
    namespace: &str,
    output: &OutputManager,
) -> CliResult<String> {
    let suggested = request
        .name
        .clone()
        .unwrap_or_else(|| Bundle::suggested_name(namespace));

    output.print("")?;
    output.print("In your code, a bundle is often referenced by its name. A good")?;
    output.print("practice is to start with the vendor name.")?;
    output.print(&format!("Based on the namespace, we suggest {suggested}."))?;

    let answer: String = Input::new()
        .with_prompt("Bundle name")
        .default(suggested)
        .validate_with(|answer: &String| -> Result<(), String> {
            Validators::validate_bundle_name(answer)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(prompt_failed)?;

    Ok(Validators::validate_bundle_name(&answer)?)
}

fn ask_format(request: &BundleRequest, flavor: Flavor, shared: bool) -> CliResult<ConfigFormat> {
    let current = match &request.format {
        Some(format) => Validators::validate_format(format)?,
        None => flavor.default_format(shared),
    };
    let items: Vec<&str> = ConfigFormat::ALL.iter().map(ConfigFormat::as_str).collect();
    let default = ConfigFormat::ALL
        .iter()
        .position(|f| *f == current)
        .unwrap_or_default();

    let index = Select::new()
        .with_prompt("Configuration format")
        .items(&items)
        .default(default)
        .interact()
        .map_err(prompt_failed)?;

    Ok(ConfigFormat::ALL[index])
}

fn prompt_failed(err: dialoguer::Error) -> CliError {
    CliError::IoError {
        message: format!("Failed to read answer: {err}"),
        source: std::io::Error::other(err.to_string()),
    }
}
