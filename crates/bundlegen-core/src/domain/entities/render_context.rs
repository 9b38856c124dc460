//! Variables available to skeleton templates.

use std::collections::HashMap;

use chrono::Datelike;

use crate::domain::Bundle;

/// Context for template rendering.
///
/// Templates use plain `{{VARIABLE}}` placeholders. There are no conditionals
/// or loops; template selection happens in the generator instead.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `NAMESPACE` | `Acme\BlogBundle` |
/// | `BUNDLE` | `AcmeBlogBundle` |
/// | `FORMAT` | `annotation` |
/// | `BUNDLE_BASENAME` | `AcmeBlog` |
/// | `EXTENSION_ALIAS` | `acme_blog` |
/// | `YEAR` | `2026` |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Derive the built-in variables from a bundle.
    pub fn for_bundle(bundle: &Bundle) -> Self {
        let mut vars = HashMap::new();

        vars.insert("NAMESPACE".to_string(), bundle.namespace().to_string());
        vars.insert("BUNDLE".to_string(), bundle.name().to_string());
        vars.insert("FORMAT".to_string(), bundle.format().to_string());
        vars.insert("BUNDLE_BASENAME".to_string(), bundle.basename().to_string());
        vars.insert("EXTENSION_ALIAS".to_string(), bundle.extension_alias());
        vars.insert(
            "YEAR".to_string(),
            chrono::Local::now().year().to_string(),
        );

        Self { variables: vars }
    }

    /// Add or override a variable.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every known `{{VARIABLE}}`. Unknown placeholders stay as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}
