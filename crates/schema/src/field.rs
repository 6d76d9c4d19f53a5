//! Field descriptors
//!
//! This module contains the `FieldDescriptor` struct describing how one
//! model property is labeled, grouped, and rendered, plus the `WidgetKind`
//! vocabulary the renderer emits.

use formkit_core::FieldType;
use serde::{Deserialize, Serialize};

// ============================================================================
// FieldDescriptor
// ============================================================================

/// Metadata describing one model property in forms and grids
///
/// A model type's set of descriptors is declared once (through a
/// [`crate::SchemaBuilder`]) and is deterministic for a fixed type; the
/// `name` is immutable after discovery and always matches the model
/// property it reads from and writes to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Property name, unique within the model
    pub name: String,

    /// Declared property type, driving widget dispatch
    pub field_type: FieldType,

    /// Resource key for the label (falls back to `name`)
    pub label_key: Option<String>,

    /// Column group this field belongs to (None = ungrouped)
    pub column_group: Option<String>,

    /// Render string fields with a rich-text editor instead of a text box
    pub use_rich_text: bool,

    /// Widget override for display (read) mode
    pub display_widget: Option<String>,

    /// Widget override for edit mode
    pub edit_widget: Option<String>,

    /// Test identifier forwarded to the rendered widget
    pub data_test_id: Option<String>,

    /// The underlying property has no setter
    pub read_only: bool,

    /// Whether the field appears in grid/list views
    pub visible: bool,

    /// Whether the field is sortable in grid views
    pub sortable: bool,
}

impl FieldDescriptor {
    /// Create a new descriptor for the given property
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            label_key: None,
            column_group: None,
            use_rich_text: false,
            display_widget: None,
            edit_widget: None,
            data_test_id: None,
            read_only: false,
            visible: true,
            sortable: true,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set the label resource key
    pub fn with_label_key(mut self, key: impl Into<String>) -> Self {
        self.label_key = Some(key.into());
        self
    }

    /// Place the field in a column group
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.column_group = Some(group.into());
        self
    }

    /// Render this string field with a rich-text editor
    pub fn rich_text(mut self) -> Self {
        self.use_rich_text = true;
        self
    }

    /// Override the display-mode widget
    pub fn with_display_widget(mut self, widget: impl Into<String>) -> Self {
        self.display_widget = Some(widget.into());
        self
    }

    /// Override the edit-mode widget
    pub fn with_edit_widget(mut self, widget: impl Into<String>) -> Self {
        self.edit_widget = Some(widget.into());
        self
    }

    /// Set the test identifier
    pub fn with_data_test_id(mut self, id: impl Into<String>) -> Self {
        self.data_test_id = Some(id.into());
        self
    }

    /// Mark the underlying property as having no setter
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Hide the field from grid/list views
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Exclude the field from grid sorting
    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    // ========================================================================
    // Utility methods
    // ========================================================================

    /// Get the effective label resource key (falls back to the name)
    pub fn effective_label_key(&self) -> &str {
        self.label_key.as_deref().unwrap_or(&self.name)
    }

    /// Check whether the field belongs to a column group
    pub fn is_grouped(&self) -> bool {
        self.column_group.is_some()
    }
}

// ============================================================================
// WidgetKind
// ============================================================================

/// Opaque widget vocabulary emitted to the host view builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// Single-line text input
    TextBox,
    /// Rich text editor (WYSIWYG)
    RichTextEditor,
    /// Numeric input
    NumberInput,
    /// Checkbox / toggle
    Checkbox,
    /// Date picker
    DatePicker,
    /// Read-only text display
    Label,
    /// Layout section wrapping a column group
    Section,
    /// Host-registered custom widget, identified by name
    Custom(String),
}

impl WidgetKind {
    /// Get the default edit widget for a declared field type
    ///
    /// Returns `None` for types outside the fixed dispatch table; the
    /// renderer skips those fields (and logs a warning).
    pub fn for_field_type(field_type: &FieldType, use_rich_text: bool) -> Option<Self> {
        match field_type {
            FieldType::Text => Some(if use_rich_text {
                WidgetKind::RichTextEditor
            } else {
                WidgetKind::TextBox
            }),
            FieldType::Integer | FieldType::Float => Some(WidgetKind::NumberInput),
            FieldType::Boolean => Some(WidgetKind::Checkbox),
            FieldType::DateTime => Some(WidgetKind::DatePicker),
            FieldType::Other(_) => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_defaults() {
        let field = FieldDescriptor::new("email", FieldType::Text);
        assert_eq!(field.name, "email");
        assert_eq!(field.field_type, FieldType::Text);
        assert!(field.visible);
        assert!(field.sortable);
        assert!(!field.read_only);
        assert!(!field.use_rich_text);
        assert_eq!(field.effective_label_key(), "email");
    }

    #[test]
    fn test_descriptor_builder() {
        let field = FieldDescriptor::new("notes", FieldType::Text)
            .with_label_key("contact.notes")
            .in_group("Details")
            .rich_text()
            .with_data_test_id("contact-notes")
            .hidden();

        assert_eq!(field.effective_label_key(), "contact.notes");
        assert_eq!(field.column_group.as_deref(), Some("Details"));
        assert!(field.use_rich_text);
        assert!(field.is_grouped());
        assert!(!field.visible);
    }

    #[test]
    fn test_widget_for_field_type() {
        assert_eq!(
            WidgetKind::for_field_type(&FieldType::Text, false),
            Some(WidgetKind::TextBox)
        );
        assert_eq!(
            WidgetKind::for_field_type(&FieldType::Text, true),
            Some(WidgetKind::RichTextEditor)
        );
        assert_eq!(
            WidgetKind::for_field_type(&FieldType::Integer, false),
            Some(WidgetKind::NumberInput)
        );
        assert_eq!(
            WidgetKind::for_field_type(&FieldType::Boolean, false),
            Some(WidgetKind::Checkbox)
        );
        assert_eq!(
            WidgetKind::for_field_type(&FieldType::DateTime, false),
            Some(WidgetKind::DatePicker)
        );
        assert_eq!(
            WidgetKind::for_field_type(&FieldType::Other("Money".to_string()), false),
            None
        );
    }
}
