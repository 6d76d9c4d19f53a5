//! Value buffer
//!
//! The uncommitted edit state of one open form: a mapping from field name
//! to the value the user has typed so far, distinct from the bound model.
//! Widget change events mutate the buffer; the model only changes when the
//! buffer is flushed on submit. Re-seeding (on model swap or reset)
//! discards unflushed edits — that is how "discard on cancel" works.

use chrono::{DateTime, Utc};
use formkit_core::FieldValue;
use formkit_schema::{FieldDescriptor, PanelModel};
use std::collections::HashMap;

/// Per-session mutable mapping from field name to edited value
///
/// Invariant: seeded keys are always a subset of the model's declared field
/// names. `set` itself performs no validation (per-keystroke writes stay
/// cheap); callers route changes only for discovered fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueBuffer {
    values: HashMap<String, FieldValue>,
}

impl ValueBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite all entries with the model's current property values
    pub fn seed(&mut self, model: &dyn PanelModel, fields: &[FieldDescriptor]) {
        self.values.clear();
        for field in fields {
            self.values
                .insert(field.name.clone(), model.field_value(&field.name));
        }
    }

    /// Read a buffered value
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Write a buffered value (no validation, no type coercion)
    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.insert(name.into(), value);
    }

    /// Assign every buffered entry back onto the model
    ///
    /// Entries the model rejects (unknown name, no setter) are skipped.
    pub fn flush(&self, model: &mut dyn PanelModel) {
        for (name, value) in &self.values {
            if !model.set_field_value(name, value.clone()) {
                tracing::trace!(field = %name, "buffer entry not writable; skipped");
            }
        }
    }

    /// Check whether a field has a buffered entry
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of buffered entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // ========================================================================
    // Typed getters (best-effort, never panic)
    // ========================================================================

    /// Buffered value as display text (empty string when absent or null)
    pub fn text_value(&self, name: &str) -> String {
        self.get(name).map(FieldValue::as_text).unwrap_or_default()
    }

    /// Buffered value as an integer, if convertible
    pub fn int_value(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_int)
    }

    /// Buffered value as a float, if convertible
    pub fn float_value(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FieldValue::as_float)
    }

    /// Buffered value as a boolean, if convertible
    pub fn bool_value(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FieldValue::as_bool)
    }

    /// Buffered value as a timestamp, if convertible
    pub fn date_value(&self, name: &str) -> Option<DateTime<Utc>> {
        self.get(name).and_then(FieldValue::as_date)
    }
}

// ============================================================================
// Tests
// ============================================================================
