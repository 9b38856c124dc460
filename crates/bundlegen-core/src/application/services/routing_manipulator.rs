//! Routing Manipulator - adds bundle imports to a routing file.
//!
//! The routing file is treated as opaque text. A new import block is
//! prepended to whatever the file already holds, so the newest import always
//! comes first. The operation is idempotent per identifier: once
//! `@<identifier>` appears anywhere in the file, further imports of the same
//! bundle are rejected and the file is left untouched.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{DomainError, ImportKind, NamingConvention, RoutingImport, Validators},
    error::BundlegenResult,
};

/// Adds import blocks to YAML routing files.
pub struct RoutingManipulator {
    filesystem: Arc<dyn Filesystem>,
    naming: NamingConvention,
}

impl RoutingManipulator {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            naming: NamingConvention::default(),
        }
    }

    /// Use a non-default bundle marker when deriving block keys.
    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    /// Import block for `identifier` keyed by this manipulator's naming.
    pub fn import(&self, identifier: &str, kind: ImportKind) -> RoutingImport {
        RoutingImport::new(identifier, kind).with_naming(self.naming)
    }

    /// Import `identifier` into `file`.
    ///
    /// A missing file is treated as empty and its parent directories are
    /// created.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidIdentifier` for a blank identifier (no I/O
    ///   happens)
    /// - `DomainError::DuplicateImport` if `@<identifier>` already appears in
    ///   the file
    /// - `ApplicationError::FilesystemError` if reading or writing fails
    pub fn add_import(
        &self,
        file: impl AsRef<Path>,
        identifier: &str,
        kind: ImportKind,
        prefix: &str,
        resource_path: &str,
    ) -> BundlegenResult<()> {
        Validators::validate_identifier(identifier)?;

        let import = self
            .import(identifier, kind)
            .with_prefix(prefix)
            .with_resource_path(resource_path);

        self.apply(file.as_ref(), &import)
    }

    /// Prepend an already built import block to `file`.
    #[instrument(
        skip_all,
        fields(
            file = %file.display(),
            identifier = %import.identifier(),
            prefix = %import.prefix()
        )
    )]
    pub fn apply(&self, file: &Path, import: &RoutingImport) -> BundlegenResult<()> {
        Validators::validate_identifier(import.identifier())?;

        let current = self.read_current(file)?;

        if import.is_present_in(&current) {
            debug!("Import reference already present, leaving file untouched");
            return Err(DomainError::DuplicateImport {
                identifier: import.identifier().to_string(),
            }
            .into());
        }

        let mut contents = import.render_block();
        contents.push_str(&current);

        self.filesystem.write_file(file, &contents)?;

        info!(key = %import.key(), "Routing import added");
        Ok(())
    }

    /// Current contents of `file`, or `""` after preparing its parent
    /// directory when the file does not exist yet.
    fn read_current(&self, file: &Path) -> BundlegenResult<String> {
        if self.filesystem.exists(file) {
            return self.filesystem.read_to_string(file);
        }

        if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !self.filesystem.is_dir(parent) {
                debug!(dir = %parent.display(), "Creating routing directory");
                self.filesystem.create_dir_all(parent)?;
            }
        }

        Ok(String::new())
    }
}
