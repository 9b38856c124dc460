//! Bundlegen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the bundlegen
//! bundle scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          bundlegen-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (BundleGenerator, RoutingManipulator,  │
//! │          InstructionPlanner)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Renderer, AutoloadRegistry)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    bundlegen-adapters (Infrastructure)  │
//! │ (LocalFilesystem, SimpleRenderer, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Bundle, RoutingImport, Validators)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bundlegen_core::{
//!     application::RoutingManipulator,
//!     domain::ImportKind,
//! };
//!
//! // `filesystem` is any `Arc<dyn Filesystem>` adapter.
//! let routing = RoutingManipulator::new(filesystem);
//! routing
//!     .add_import("config/routes.yaml", "AcmeBlogBundle", ImportKind::AnnotationDiscovery, "/", "routing")
//!     .unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BundleGenerator, GenerationReport, InstructionPlanner, NextStep, RoutingManipulator,
        ports::{AutoloadRegistry, Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        Bundle, ConfigFormat, Flavor, ImportKind, NamingConvention, RenderContext, RoutingImport,
        Validators,
    };
    pub use crate::error::{BundlegenError, BundlegenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
