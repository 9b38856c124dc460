//! Local filesystem adapter using std::fs.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use bundlegen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{BundlegenError, BundlegenResult},
};
use tempfile::NamedTempFile;
use tracing::debug;

/// Production filesystem implementation using `std::fs`.
///
/// `write_file` replaces files atomically: content goes to a temp file in
/// the same directory, which is then renamed over the target.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> BundlegenResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> BundlegenResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

        let mut temp =
            new_temp_file(dir).map_err(|e| map_io_error(path, e, "create temp file"))?;
        // The rename carries the temp file's mode over to the target.
        if let Some(permissions) = existing {
            temp.as_file()
                .set_permissions(permissions)
                .map_err(|e| map_io_error(path, e, "keep permissions"))?;
        }
        temp.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| map_io_error(path, e, "flush file"))?;
        temp.persist(path)
            .map_err(|e| map_io_error(path, e.error, "replace file"))?;

        debug!(path = %path.display(), bytes = content.len(), "File written");
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> BundlegenResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_dir_empty(&self, path: &Path) -> BundlegenResult<bool> {
        let mut entries = fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;
        Ok(entries.next().is_none())
    }

    fn is_writable(&self, path: &Path) -> bool {
        // Create a real file; mode bits miss read-only mounts.
        NamedTempFile::new_in(path).is_ok()
    }

    fn remove_dir_all(&self, path: &Path) -> BundlegenResult<()> {
        fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

/// Temp file whose mode matches what `fs::write` would give a new file.
#[cfg(unix)]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> BundlegenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_replaces_existing_contents() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("routing.yaml");
        let fs = LocalFilesystem::new();

        fs.write_file(&file, "first\n").unwrap();
        fs.write_file(&file, "second\n").unwrap();

        assert_eq!(fs.read_to_string(&file).unwrap(), "second\n");
        // Only the target remains; temp files were renamed away.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn rewrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let file = dir.path().join("routing.yaml");
        let fs = LocalFilesystem::new();

        for expected in [0o644, 0o640] {
            std::fs::write(&file, "home: {}\n").unwrap();
            std::fs::set_permissions(&file, std::fs::Permissions::from_mode(expected)).unwrap();

            fs.write_file(&file, "acme_blog: {}\n").unwrap();
            assert_eq!(mode(&file), expected);
        }
    }

    #[cfg(unix)]
    #[test]
    fn new_file_gets_umask_mode() {
        let dir = tempdir().unwrap();
        let reference = dir.path().join("reference.php");
        let written = dir.path().join("AcmeBlogBundle.php");

        std::fs::write(&reference, "<?php\n").unwrap();
        LocalFilesystem::new().write_file(&written, "<?php\n").unwrap();

        assert_eq!(mode(&written), mode(&reference));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("missing").join("routing.yaml");

        let err = LocalFilesystem::new().write_file(&file, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to create temp file"));
    }

    #[test]
    fn directory_checks() {
        let dir = tempdir().unwrap();
        let fs = LocalFilesystem::new();

        assert!(fs.is_dir(dir.path()));
        assert!(fs.is_dir_empty(dir.path()).unwrap());
        assert!(fs.is_writable(dir.path()));

        fs.write_file(&dir.path().join("a.txt"), "a").unwrap();
        assert!(!fs.is_dir_empty(dir.path()).unwrap());
        assert!(!fs.is_dir(&dir.path().join("a.txt")));
    }

    #[test]
    fn read_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nope.yaml");

        let err = LocalFilesystem::new().read_to_string(&file).unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
    }
}
