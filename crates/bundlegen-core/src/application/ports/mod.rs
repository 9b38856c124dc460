//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world. Adapters
//! in `bundlegen-adapters` implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateRenderer`: Skeleton template lookup and rendering
//!   - `AutoloadRegistry`: Host project autoloader inspection
//!
//! - **Driving (Input) Ports**: Called by the CLI, implemented by services

pub mod output;

pub use output::{AutoloadRegistry, Filesystem, TemplateRenderer};

#[cfg(test)]
pub use output::{MockAutoloadRegistry, MockFilesystem, MockTemplateRenderer};
