//! Naming rules shared by the bundle model and routing imports.
//!
//! Bundle names carry a fixed trailing marker (`Bundle`). Several derived
//! names (basename, extension alias, routing keys) strip that marker and
//! convert the rest with the host framework's container `underscore` rule.

use std::sync::LazyLock;

use regex::Regex;

/// Conventional suffix every bundle name ends with.
pub const BUNDLE_SUFFIX: &str = "Bundle";

static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid regex"));
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.*?)\}").expect("valid regex"));
static UNDERSCORE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("valid regex"));

/// How many trailing characters identify a bundle name's marker.
///
/// The suffix length is data, not a literal sprinkled through the code, so an
/// alternate convention (e.g. `Module`, `Plugin`) can be substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingConvention {
    suffix_len: usize,
}

impl NamingConvention {
    /// Convention for a marker of `suffix_len` characters.
    pub const fn with_suffix_len(suffix_len: usize) -> Self {
        Self { suffix_len }
    }

    pub const fn suffix_len(&self) -> usize {
        self.suffix_len
    }

    /// Drop the trailing marker. Names shorter than the marker become empty.
    pub fn strip_suffix<'a>(&self, name: &'a str) -> &'a str {
        let keep = name.chars().count().saturating_sub(self.suffix_len);
        let end = name
            .char_indices()
            .nth(keep)
            .map_or(name.len(), |(idx, _)| idx);
        &name[..end]
    }

    /// `AcmeBlogBundle` -> `acme_blog`.
    pub fn snake_base(&self, name: &str) -> String {
        underscore(self.strip_suffix(name))
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::with_suffix_len(BUNDLE_SUFFIX.len())
    }
}

/// The host container's id normalisation.
///
/// `_` becomes `.`, camel-case boundaries become `_`, result is lowercase:
///
/// | Input | Output |
/// |-------|--------|
/// | "AcmeBlog" | "acme_blog" |
/// | "HTMLParser" | "html_parser" |
/// | "Foo_Bar" | "foo.bar" |
/// | "Api2Client" | "api2_client" |
pub fn underscore(id: &str) -> String {
    let dotted = id.replace('_', ".");
    let step = ACRONYM_BOUNDARY.replace_all(&dotted, "${1}_${2}");
    let step = WORD_BOUNDARY.replace_all(&step, "${1}_${2}");
    step.to_lowercase()
}

/// Normalise a route prefix into a key fragment.
///
/// `{placeholder}` segments are removed, `/` becomes `_`, runs of `_`
/// collapse, and leading/trailing `_` are trimmed. `/` yields `""`.
pub fn route_name_prefix(prefix: &str) -> String {
    let without_placeholders = PLACEHOLDER.replace_all(prefix, "");
    let underscored = without_placeholders.replace('/', "_");
    let collapsed = UNDERSCORE_RUN.replace_all(&underscored, "_");
    collapsed.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underscore_converts_camel_case() {
        assert_eq!(underscore("AcmeBlog"), "acme_blog");
        assert_eq!(underscore("FooBar"), "foo_bar");
        assert_eq!(underscore("Blog"), "blog");
    }

    #[test]
    fn underscore_keeps_acronyms_together() {
        assert_eq!(underscore("HTMLParser"), "html_parser");
        assert_eq!(underscore("AcmeAPI"), "acme_api");
    }

    #[test]
    fn underscore_turns_underscores_into_dots() {
        assert_eq!(underscore("Foo_Bar"), "foo.bar");
    }

    #[test]
    fn underscore_splits_after_digits() {
        assert_eq!(underscore("Api2Client"), "api2_client");
    }

    #[test]
    fn strip_suffix_removes_marker_length() {
        let naming = NamingConvention::default();
        assert_eq!(naming.suffix_len(), 6);
        assert_eq!(naming.strip_suffix("AcmeBlogBundle"), "AcmeBlog");
        assert_eq!(naming.strip_suffix("Bundle"), "");
        assert_eq!(naming.strip_suffix("Foo"), "");
    }

    #[test]
    fn strip_suffix_honours_alternate_convention() {
        let naming = NamingConvention::with_suffix_len("Plugin".len());
        assert_eq!(naming.strip_suffix("AcmeShopPlugin"), "AcmeShop");
        assert_eq!(naming.snake_base("AcmeShopPlugin"), "acme_shop");
    }

    #[test]
    fn route_prefix_root_is_empty() {
        assert_eq!(route_name_prefix("/"), "");
        assert_eq!(route_name_prefix(""), "");
    }

    #[test]
    fn route_prefix_drops_placeholders() {
        assert_eq!(route_name_prefix("/blog/{id}"), "blog");
        assert_eq!(route_name_prefix("/{_locale}/shop/{page}/list"), "shop_list");
        assert_eq!(route_name_prefix("{foo}_bar"), "bar");
    }

    #[test]
    fn route_prefix_collapses_separators() {
        assert_eq!(route_name_prefix("//foo//bar//"), "foo_bar");
        assert_eq!(route_name_prefix("/foo/bar/"), "foo_bar");
        assert_eq!(route_name_prefix("/foo__bar"), "foo_bar");
    }
}
