//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use cases: importing routing, generating a bundle, and
//! planning the remaining wiring steps.

pub mod bundle_generator;
pub mod instructions;
pub mod routing_manipulator;

pub use bundle_generator::{BundleGenerator, GenerationReport, PlannedFile};
pub use instructions::{InstructionPlanner, NextStep, PlannerSettings};
pub use routing_manipulator::RoutingManipulator;
