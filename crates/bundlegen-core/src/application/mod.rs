//! Application layer for bundlegen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RoutingManipulator, BundleGenerator,
//!   InstructionPlanner)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Naming and rendering rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    BundleGenerator, GenerationReport, InstructionPlanner, NextStep, PlannerSettings,
    RoutingManipulator,
};

pub use ports::{AutoloadRegistry, Filesystem, TemplateRenderer};

pub use error::ApplicationError;
