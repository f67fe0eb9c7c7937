//! Manifest Types
//!
//! Rust structs matching the tool manifest JSON schema. Every field is
//! optional at parse time: a submission missing a field must surface as a
//! lint error naming that field, not as a JSON parse failure.

use serde::Deserialize;

/// Categories a tool may be filed under, matching the catalog's
/// `tools/<category>/<name>/` layout.
pub const VALID_CATEGORIES: [&str; 7] = [
    "smart-home",
    "media",
    "homelab",
    "productivity",
    "utilities",
    "social",
    "other",
];

/// Tool manifest (`manifest.json`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub voice_triggers: Option<Vec<String>>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub required_credentials: Option<Vec<CredentialRequirement>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub github: Option<String>,
}

/// A credential the tool declares it needs at install time
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialRequirement {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub auth_type: Option<String>,
    #[serde(default)]
    pub credential_type: Option<String>,
}

impl Manifest {
    /// True if a string field is present and non-empty
    pub fn has(field: &Option<String>) -> bool {
        field.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Check a tool name is kebab-case: lowercase alphanumeric runs separated by
/// single hyphens, no leading/trailing hyphen (`^[a-z0-9]+(-[a-z0-9]+)*$`).
pub fn is_kebab_case(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_accepts_valid_names() {
        assert!(is_kebab_case("jellyseerr-search"));
        assert!(is_kebab_case("foo"));
        assert!(is_kebab_case("foo-bar-2"));
        assert!(is_kebab_case("2fa-codes"));
    }

    #[test]
    fn test_kebab_case_rejects_invalid_names() {
        assert!(!is_kebab_case(""));
        assert!(!is_kebab_case("Foo-Bar"));
        assert!(!is_kebab_case("foo_bar"));
        assert!(!is_kebab_case("-foo"));
        assert!(!is_kebab_case("foo-"));
        assert!(!is_kebab_case("foo--bar"));
        assert!(!is_kebab_case("foo bar"));
    }

    #[test]
    fn test_manifest_parses_with_missing_fields() {
        let manifest: Manifest = serde_json::from_str(r#"{"name": "foo-bar"}"#).unwrap();
        assert_eq!(manifest.name.as_deref(), Some("foo-bar"));
        assert!(manifest.version.is_none());
        assert!(manifest.required_credentials.is_none());
    }

    #[test]
    fn test_has_treats_empty_string_as_missing() {
        assert!(!Manifest::has(&Some(String::new())));
        assert!(!Manifest::has(&None));
        assert!(Manifest::has(&Some("1.0.0".to_string())));
    }
}
