//! Core domain layer for bundlegen.
//!
//! Pure logic only: bundle naming, validation, routing import blocks and the
//! template render context. All I/O goes through the application ports.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem or process calls
//! - **Immutable values**: Entities are Clone + PartialEq and built once
//! - **Rich domain model**: Derivations live on the entities, not in services

pub mod entities;
pub mod error;
pub mod naming;
pub mod value_objects;

mod validation;

pub use entities::{
    Bundle, DEFAULT_PREFIX, DEFAULT_RESOURCE_PATH, RenderContext, RoutingImport, derive_key,
    derive_key_with,
};
pub use error::{DomainError, ErrorCategory};
pub use naming::{BUNDLE_SUFFIX, NamingConvention, route_name_prefix, underscore};
pub use validation::Validators;
pub use value_objects::{ConfigFormat, Flavor, ImportKind};
