//! Routing import blocks.
//!
//! An import block is a named entry in the application's YAML routing file
//! that loads routes from a bundle:
//!
//! ```yaml
//! acme_blog_blog:
//!     resource: "@AcmeBlogBundle/src/Controller/"
//!     type:     annotation
//!     prefix:   /blog/{id}
//! ```
//!
//! The routing file itself is never parsed. Blocks are rendered as text and
//! prepended, and an existing import is detected by searching for
//! `@<identifier>` in the raw contents.

use crate::domain::{
    ImportKind,
    naming::{NamingConvention, route_name_prefix},
};

/// Default route prefix.
pub const DEFAULT_PREFIX: &str = "/";

/// Default base name of an explicit routing resource file.
pub const DEFAULT_RESOURCE_PATH: &str = "routing";

/// A routing import about to be added to a routing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingImport {
    identifier: String,
    kind: ImportKind,
    prefix: String,
    resource_path: String,
    naming: NamingConvention,
}

impl RoutingImport {
    pub fn new(identifier: impl Into<String>, kind: ImportKind) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            prefix: DEFAULT_PREFIX.into(),
            resource_path: DEFAULT_RESOURCE_PATH.into(),
            naming: NamingConvention::default(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_resource_path(mut self, path: impl Into<String>) -> Self {
        self.resource_path = path.into();
        self
    }

    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn kind(&self) -> ImportKind {
        self.kind
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The `@<identifier>` reference whose presence marks a duplicate.
    pub fn reference(&self) -> String {
        format!("@{}", self.identifier)
    }

    /// Mapping key of the block, e.g. `acme_blog` or `acme_blog_blog`.
    pub fn key(&self) -> String {
        derive_key_with(&self.naming, &self.identifier, &self.prefix)
    }

    /// `true` if `contents` already reference this identifier anywhere.
    pub fn is_present_in(&self, contents: &str) -> bool {
        contents.contains(&self.reference())
    }

    /// Render the block, including its trailing blank line.
    pub fn render_block(&self) -> String {
        let mut block = format!("{}:\n", self.key());

        match self.kind {
            ImportKind::AnnotationDiscovery => {
                block.push_str(&format!(
                    "    resource: \"@{}/src/Controller/\"\n    type:     annotation\n",
                    self.identifier
                ));
            }
            ImportKind::ExplicitResource { format } => {
                block.push_str(&format!(
                    "    resource: \"@{}/Resources/config/{}.{}\"\n",
                    self.identifier,
                    self.resource_path,
                    format.file_extension()
                ));
            }
        }

        block.push_str(&format!("    prefix:   {}\n", self.prefix));
        block.push('\n');
        block
    }
}

/// Block key for `identifier` mounted at `prefix` under the default naming
/// convention.
pub fn derive_key(identifier: &str, prefix: &str) -> String {
    derive_key_with(&NamingConvention::default(), identifier, prefix)
}

/// Block key under an explicit naming convention.
pub fn derive_key_with(naming: &NamingConvention, identifier: &str, prefix: &str) -> String {
    let base = naming.snake_base(identifier);
    let route_prefix = route_name_prefix(prefix);

    if route_prefix.is_empty() {
        base
    } else {
        format!("{base}_{route_prefix}")
    }
}
