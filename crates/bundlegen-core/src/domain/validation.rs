use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{ConfigFormat, error::DomainError, naming::BUNDLE_SUFFIX};

static PHP_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z_\x{7f}-\x{ff}][a-zA-Z0-9_\x{7f}-\x{ff}]*$").expect("valid regex")
});

/// Words PHP refuses as namespace segments or class names.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class", "clone",
    "const", "continue", "declare", "default", "do", "else", "elseif", "enddeclare", "endfor",
    "endforeach", "endif", "endswitch", "endwhile", "enum", "extends", "final", "finally", "fn",
    "for", "foreach", "function", "global", "goto", "if", "implements", "include",
    "include_once", "instanceof", "insteadof", "interface", "match", "namespace", "new", "or",
    "print", "private", "protected", "public", "readonly", "require", "require_once", "return",
    "static", "switch", "throw", "trait", "try", "use", "var", "while", "xor", "yield", "die",
    "echo", "empty", "exit", "eval", "isset", "list", "unset", "__halt_compiler", "bool",
    "false", "float", "int", "iterable", "mixed", "never", "null", "object", "string", "true",
    "void",
];

/// Centralized validation of user-supplied bundle parameters.
///
/// All validation logic lives here, not scattered across entities.
pub struct Validators;

impl Validators {
    /// Validate and normalise a bundle namespace.
    ///
    /// `/` is accepted as a delimiter and translated to `\`. With
    /// `require_vendor` the namespace needs at least two segments.
    pub fn validate_bundle_namespace(
        namespace: &str,
        require_vendor: bool,
    ) -> Result<String, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidNamespace {
            namespace: namespace.into(),
            reason: reason.into(),
        };

        let normalized = namespace.trim().replace('/', "\\");
        let normalized = normalized.trim_matches('\\');

        if !normalized.ends_with(BUNDLE_SUFFIX) {
            return Err(invalid("the namespace must end with Bundle"));
        }

        for segment in normalized.split('\\') {
            if !PHP_IDENTIFIER.is_match(segment) {
                return Err(invalid("the namespace contains invalid characters"));
            }
            if is_reserved_word(segment) {
                return Err(invalid(&format!(
                    "the namespace cannot contain PHP reserved words (\"{segment}\")"
                )));
            }
        }

        if require_vendor && !normalized.contains('\\') {
            return Err(invalid(&format!(
                "the namespace must contain a vendor namespace \
                 (e.g. \"VendorName\\{normalized}\" instead of simply \"{normalized}\")"
            )));
        }

        Ok(normalized.to_string())
    }

    /// Validate a bundle (class) name.
    pub fn validate_bundle_name(name: &str) -> Result<String, DomainError> {
        let name = name.trim();
        let invalid = |reason: &str| DomainError::InvalidBundleName {
            name: name.into(),
            reason: reason.into(),
        };

        if !PHP_IDENTIFIER.is_match(name) {
            return Err(invalid("the bundle name contains invalid characters"));
        }
        if !name.ends_with(BUNDLE_SUFFIX) {
            return Err(invalid("the bundle name must end with Bundle"));
        }
        if is_reserved_word(name) {
            return Err(invalid("the bundle name cannot be a PHP reserved word"));
        }

        Ok(name.to_string())
    }

    /// Parse a configuration format.
    pub fn validate_format(format: &str) -> Result<ConfigFormat, DomainError> {
        format.parse()
    }

    /// Validate an import identifier for the routing manipulator.
    pub fn validate_identifier(identifier: &str) -> Result<(), DomainError> {
        if identifier.trim().is_empty() {
            return Err(DomainError::InvalidIdentifier {
                reason: "identifier cannot be empty".into(),
            });
        }
        Ok(())
    }
}

fn is_reserved_word(word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    RESERVED_WORDS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_accepts_slash_delimiter() {
        assert_eq!(
            Validators::validate_bundle_namespace("Acme/BlogBundle", true).unwrap(),
            "Acme\\BlogBundle"
        );
    }

    #[test]
    fn namespace_trims_surrounding_separators() {
        assert_eq!(
            Validators::validate_bundle_namespace("/Acme/Blog/BlogBundle/", true).unwrap(),
            "Acme\\Blog\\BlogBundle"
        );
    }

    #[test]
    fn namespace_must_end_with_bundle() {
        let err = Validators::validate_bundle_namespace("Acme/Blog", true).unwrap_err();
        assert!(err.to_string().contains("must end with Bundle"));
    }

    #[test]
    fn namespace_rejects_invalid_characters() {
        assert!(Validators::validate_bundle_namespace("Acme/Blog-Bundle", true).is_err());
        assert!(Validators::validate_bundle_namespace("1Acme/BlogBundle", true).is_err());
        assert!(Validators::validate_bundle_namespace("Acme//BlogBundle", true).is_err());
    }

    #[test]
    fn namespace_rejects_reserved_words() {
        let err = Validators::validate_bundle_namespace("Acme/List/BlogBundle", true).unwrap_err();
        assert!(err.to_string().contains("reserved words"));
    }

    #[test]
    fn namespace_vendor_requirement() {
        assert!(Validators::validate_bundle_namespace("BlogBundle", true).is_err());
        assert_eq!(
            Validators::validate_bundle_namespace("BlogBundle", false).unwrap(),
            "BlogBundle"
        );
    }

    #[test]
    fn bundle_name_rules() {
        assert_eq!(
            Validators::validate_bundle_name("AcmeBlogBundle").unwrap(),
            "AcmeBlogBundle"
        );
        assert!(Validators::validate_bundle_name("AcmeBlog").is_err());
        assert!(Validators::validate_bundle_name("Acme\\BlogBundle").is_err());
        assert!(Validators::validate_bundle_name("").is_err());
    }

    #[test]
    fn format_delegates_to_parser() {
        assert_eq!(
            Validators::validate_format("xml").unwrap(),
            ConfigFormat::Xml
        );
        assert!(Validators::validate_format("ini").is_err());
    }

    #[test]
    fn identifier_cannot_be_blank() {
        assert!(Validators::validate_identifier("").is_err());
        assert!(Validators::validate_identifier("   ").is_err());
        assert!(Validators::validate_identifier("AcmeBlogBundle").is_ok());
    }
}
