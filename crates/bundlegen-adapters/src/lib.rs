//! Infrastructure adapters for bundlegen.
//!
//! This crate implements the ports defined in `bundlegen_core::application::ports`.
//! It contains all I/O: the local filesystem, skeleton template lookup, and
//! the composer autoload inspection.

pub mod autoload;
pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use autoload::ComposerAutoload;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
