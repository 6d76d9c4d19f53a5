//! Localization interface
//!
//! The form engine never resolves localized strings itself; it consults a
//! host-supplied [`Localizer`]. A missing resource is signaled distinctly
//! from a genuinely empty string (`None` vs `Some("")`), and label lookups
//! fall back to a title-cased property name.

use std::collections::HashMap;

// ============================================================================
// Localizer Trait
// ============================================================================

/// Host-supplied localized string lookup
pub trait Localizer {
    /// Resolve a resource key to localized text
    ///
    /// Returns `None` when the resource does not exist, which is distinct
    /// from a resource that resolves to an empty string.
    fn get_string(&self, key: &str) -> Option<String>;
}

/// Localizer that resolves nothing; every label falls back to its key
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLocalizer;

impl Localizer for NullLocalizer {
    fn get_string(&self, _key: &str) -> Option<String> {
        None
    }
}

/// In-memory localizer backed by a string table
///
/// Useful for tests and for hosts without a real localization backend.
#[derive(Debug, Clone, Default)]
pub struct MapLocalizer {
    entries: HashMap<String, String>,
}

impl MapLocalizer {
    /// Create an empty localizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry (builder style)
    pub fn with_entry(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }

    /// Add an entry
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }
}

impl Localizer for MapLocalizer {
    fn get_string(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

// ============================================================================
// Label Resolution
// ============================================================================

/// Resolve a label through the localizer, falling back to a title-cased
/// rendering of the property name when the resource is missing
pub fn resolve_label(localizer: &dyn Localizer, key: &str, fallback_name: &str) -> String {
    localizer
        .get_string(key)
        .unwrap_or_else(|| title_case(fallback_name))
}

/// Convert a snake_case property name to Title Case for display
pub fn title_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_null_localizer() {
        assert_eq!(NullLocalizer.get_string("anything"), None);
    }

    #[test]
    fn test_map_localizer() {
        let localizer = MapLocalizer::new()
            .with_entry("contact.name", "Full name")
            .with_entry("contact.empty", "");

        assert_eq!(
            localizer.get_string("contact.name"),
            Some("Full name".to_string())
        );
        // An empty resource is a real value, not a miss
        assert_eq!(localizer.get_string("contact.empty"), Some(String::new()));
        assert_eq!(localizer.get_string("contact.missing"), None);
    }

    #[test]
    fn test_resolve_label_fallback() {
        let localizer = MapLocalizer::new().with_entry("known", "Known Label");

        assert_eq!(resolve_label(&localizer, "known", "known"), "Known Label");
        assert_eq!(
            resolve_label(&localizer, "unknown_key", "created_at"),
            "Created At"
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("user_id"), "User Id");
        assert_eq!(title_case("created_at"), "Created At");
        assert_eq!(title_case("email"), "Email");
    }
}
