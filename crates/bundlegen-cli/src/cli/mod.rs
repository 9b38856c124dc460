//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use bundlegen_core::domain::Flavor;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "bundlegen",
    bin_name = "bundlegen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Bundle scaffolding for Symfony and Pimcore applications",
    long_about = "bundlegen generates the skeleton of a bundle and wires its \
                  routes into the application routing configuration.",
    after_help = "EXAMPLES:\n\
        \x20 bundlegen generate --namespace 'Acme\\BlogBundle' -n\n\
        \x20 bundlegen generate --namespace Acme/ShopBundle --flavor symfony --shared --format xml\n\
        \x20 bundlegen routing add AcmeBlogBundle --file config/routes.yaml --prefix /blog\n\
        \x20 bundlegen completions bash > /usr/share/bash-completion/completions/bundlegen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new bundle.
    #[command(
        visible_alias = "g",
        about = "Generate a bundle skeleton",
        after_help = "EXAMPLES:\n\
            \x20 bundlegen generate                                   # interactive\n\
            \x20 bundlegen generate --namespace 'Acme\\BlogBundle' -n\n\
            \x20 bundlegen generate --namespace Acme/BlogBundle --format yaml --dry-run"
    )]
    Generate(GenerateArgs),

    /// Work with the application routing configuration.
    #[command(
        about = "Routing configuration helpers",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 bundlegen routing add AcmeBlogBundle --file config/routes.yaml\n\
            \x20 bundlegen routing add AcmeBlogBundle --file config/routes.yaml --format yaml --prefix /blog"
    )]
    Routing(RoutingCommands),

    /// Initialise a bundlegen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 bundlegen init           # platform config directory\n\
            \x20 bundlegen init --local   # .bundlegen.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 bundlegen completions bash > ~/.local/share/bash-completion/completions/bundlegen\n\
            \x20 bundlegen completions zsh  > ~/.zfunc/_bundlegen\n\
            \x20 bundlegen completions fish > ~/.config/fish/completions/bundlegen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the bundlegen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 bundlegen config get defaults.flavor\n\
            \x20 bundlegen config list\n\
            \x20 bundlegen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `bundlegen generate`.
///
/// Every value is optional here; missing ones come from the configuration
/// or, in interactive mode, from a prompt.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Bundle namespace, `\` or `/` delimited.
    #[arg(
        long = "namespace",
        value_name = "NAMESPACE",
        help = "Namespace of the bundle (e.g. Acme\\BlogBundle)"
    )]
    pub namespace: Option<String>,

    #[arg(
        long = "dir",
        value_name = "DIR",
        help = "Directory bundles are generated in, relative to the project"
    )]
    pub dir: Option<PathBuf>,

    #[arg(
        long = "bundle-name",
        value_name = "NAME",
        help = "Bundle class name (defaults to the namespace without separators)"
    )]
    pub bundle_name: Option<String>,

    #[arg(
        long = "format",
        value_name = "FORMAT",
        help = "Configuration format: annotation, yaml, xml or php"
    )]
    pub format: Option<String>,

    /// Shared bundles get a DependencyInjection extension.
    #[arg(long = "shared", help = "Generate a bundle meant to be shared between projects")]
    pub shared: bool,

    #[arg(long = "flavor", value_enum, help = "Framework conventions to follow")]
    pub flavor: Option<FlavorArg>,

    #[arg(
        long = "project-dir",
        value_name = "DIR",
        help = "Project root (default: configuration or current directory)"
    )]
    pub project_dir: Option<PathBuf>,

    #[arg(
        short = 'n',
        long = "no-interaction",
        help = "Do not ask any interactive question"
    )]
    pub no_interaction: bool,

    #[arg(long = "dry-run", help = "Show the files that would be written")]
    pub dry_run: bool,
}

/// Host framework flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FlavorArg {
    Pimcore,
    Symfony,
}

impl From<FlavorArg> for Flavor {
    fn from(arg: FlavorArg) -> Self {
        match arg {
            FlavorArg::Pimcore => Flavor::Pimcore,
            FlavorArg::Symfony => Flavor::Symfony,
        }
    }
}

// ── routing ───────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum RoutingCommands {
    /// Prepend an import of a bundle's routes to a routing file.
    Add(RoutingAddArgs),
}

/// Arguments for `bundlegen routing add`.
#[derive(Debug, Args)]
pub struct RoutingAddArgs {
    /// Bundle identifier, e.g. `AcmeBlogBundle`.
    #[arg(value_name = "BUNDLE")]
    pub bundle: String,

    #[arg(long = "file", value_name = "FILE", help = "Routing file to modify")]
    pub file: PathBuf,

    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "annotation",
        help = "annotation imports the controllers; other formats import a routing file"
    )]
    pub format: String,

    #[arg(long = "prefix", default_value = "/", help = "URL prefix for the imported routes")]
    pub prefix: String,

    #[arg(
        long = "path",
        default_value = "routing",
        help = "Base name of the bundle's routing file"
    )]
    pub path: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `bundlegen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.bundlegen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `bundlegen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `bundlegen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.flavor`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
