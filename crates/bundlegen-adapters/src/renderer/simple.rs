//! Simple variable substitution renderer.

use std::borrow::Cow;
use std::path::PathBuf;

use bundlegen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::BundlegenResult,
};
use tracing::{debug, instrument};

use crate::builtin_templates::{self, SKELETON_DIR_ENV};

/// Renders skeleton templates by plain `{{VARIABLE}}` substitution.
///
/// Lookup order for a template id:
///
/// 1. `<dir>/<id>` for each configured skeleton directory, in order
/// 2. the built-in template with that id
#[derive(Debug, Clone, Default)]
pub struct SimpleRenderer {
    skeleton_dirs: Vec<PathBuf>,
}

impl SimpleRenderer {
    /// Renderer using only the built-in templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer that checks `dirs` for overrides first.
    pub fn with_skeleton_dirs(dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            skeleton_dirs: dirs.into_iter().collect(),
        }
    }

    /// Like [`Self::with_skeleton_dirs`], with `$BUNDLEGEN_SKELETON_DIR`
    /// taking precedence when set.
    pub fn from_env(dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut skeleton_dirs = Vec::new();
        if let Ok(env_dir) = std::env::var(SKELETON_DIR_ENV) {
            let p = PathBuf::from(env_dir);
            debug!(path = %p.display(), "skeleton dir from ${}", SKELETON_DIR_ENV);
            skeleton_dirs.push(p);
        }
        skeleton_dirs.extend(dirs);
        Self { skeleton_dirs }
    }

    pub fn skeleton_dirs(&self) -> &[PathBuf] {
        &self.skeleton_dirs
    }

    fn source(&self, template_id: &str) -> BundlegenResult<Cow<'static, str>> {
        for dir in &self.skeleton_dirs {
            let candidate = dir.join(template_id);
            if !candidate.is_file() {
                continue;
            }

            debug!(path = %candidate.display(), "using skeleton override");
            let content = std::fs::read_to_string(&candidate).map_err(|e| {
                ApplicationError::FilesystemError {
                    path: candidate.clone(),
                    reason: format!("Failed to read template: {e}"),
                }
            })?;
            return Ok(Cow::Owned(content));
        }

        builtin_templates::get(template_id)
            .map(Cow::Borrowed)
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    id: template_id.to_string(),
                }
                .into()
            })
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip(self, context))]
    fn render(&self, template_id: &str, context: &RenderContext) -> BundlegenResult<String> {
        let source = self.source(template_id)?;
        Ok(context.render(&source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bundlegen_core::domain::{Bundle, ConfigFormat};
    use tempfile::tempdir;

    fn context() -> RenderContext {
        let bundle = Bundle::new(
            "Acme\\BlogBundle",
            "AcmeBlogBundle",
            "bundles",
            ConfigFormat::Yaml,
            true,
        );
        RenderContext::for_bundle(&bundle)
    }

    #[test]
    fn renders_builtin_template() {
        let out = SimpleRenderer::new()
            .render("bundle/Bundle.php", &context())
            .unwrap();

        assert!(out.contains("namespace Acme\\BlogBundle;"));
        assert!(out.contains("class AcmeBlogBundle extends Bundle"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn override_directory_wins() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("bundle")).unwrap();
        std::fs::write(dir.path().join("bundle/Bundle.php"), "custom {{BUNDLE}}").unwrap();

        let renderer = SimpleRenderer::with_skeleton_dirs([dir.path().to_path_buf()]);

        assert_eq!(
            renderer.render("bundle/Bundle.php", &context()).unwrap(),
            "custom AcmeBlogBundle"
        );
        // Templates without an override fall back to the built-ins.
        assert!(
            renderer
                .render("bundle/Configuration.php", &context())
                .unwrap()
                .contains("TreeBuilder('acme_blog')")
        );
    }

    #[test]
    fn unknown_template_is_not_found() {
        let err = SimpleRenderer::new()
            .render("bundle/nope.txt", &context())
            .unwrap_err();

        assert!(err.to_string().contains("Template not found: bundle/nope.txt"));
    }
}
