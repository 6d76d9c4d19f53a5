//! Error types for FormKit
//!
//! This module provides unified error handling across the form engine,
//! covering schema construction, panel host misuse, rendering failures,
//! and view action dispatch.

use thiserror::Error;

/// The main error type for FormKit
#[derive(Debug, Error)]
pub enum FormError {
    // ========================================================================
    // Schema Errors
    // ========================================================================
    /// General schema validation error
    #[error("Schema validation failed for '{model}': {message}")]
    SchemaValidation { model: String, message: String },

    /// Duplicate field name within a model schema
    #[error("Duplicate field name: '{field}' already declared on '{model}'")]
    DuplicateField { model: String, field: String },

    /// Duplicate column group within a model schema
    #[error("Duplicate column group: '{group}' already declared on '{model}'")]
    DuplicateColumnGroup { model: String, group: String },

    /// A schema was registered twice for the same model type
    #[error("Schema already registered for model type '{0}'")]
    SchemaAlreadyRegistered(String),

    // ========================================================================
    // Panel Host Errors
    // ========================================================================
    /// `open` was called while a panel is already showing
    #[error("A panel is already open; close it before opening another")]
    PanelAlreadyOpen,

    /// An operation required an open panel session
    #[error("No panel is open")]
    PanelNotOpen,

    // ========================================================================
    // Rendering Errors
    // ========================================================================
    /// A widget override referenced a factory that was never registered
    #[error("Widget '{0}' is not registered")]
    WidgetNotRegistered(String),

    /// A widget factory failed while rendering a field
    #[error("Failed to render field '{field}': {message}")]
    Render { field: String, message: String },

    // ========================================================================
    // View Action Errors
    // ========================================================================
    /// An action name did not resolve to a delegate on the model
    #[error("View action not found: {0}")]
    ActionNotFound(String),

    /// A view action delegate reported a failure
    #[error("View action '{action}' failed: {message}")]
    ActionFailed { action: String, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FormError {
    /// Create a schema validation error
    pub fn schema_validation(model: impl Into<String>, msg: impl Into<String>) -> Self {
        FormError::SchemaValidation {
            model: model.into(),
            message: msg.into(),
        }
    }

    /// Create a rendering error for a specific field
    pub fn render(field: impl Into<String>, msg: impl Into<String>) -> Self {
        FormError::Render {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create an action failure error
    pub fn action_failed(action: impl Into<String>, msg: impl Into<String>) -> Self {
        FormError::ActionFailed {
            action: action.into(),
            message: msg.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        FormError::Internal(msg.into())
    }

    /// Check if this error comes from schema construction or registration
    pub fn is_schema(&self) -> bool {
        matches!(
            self,
            FormError::SchemaValidation { .. }
                | FormError::DuplicateField { .. }
                | FormError::DuplicateColumnGroup { .. }
                | FormError::SchemaAlreadyRegistered(_)
        )
    }

    /// Check if this error indicates panel host misuse by the caller
    pub fn is_host_misuse(&self) -> bool {
        matches!(self, FormError::PanelAlreadyOpen | FormError::PanelNotOpen)
    }

    /// Check if this error is a rendering failure
    pub fn is_render(&self) -> bool {
        matches!(
            self,
            FormError::WidgetNotRegistered(_) | FormError::Render { .. }
        )
    }

    /// Check if this error comes from view action dispatch
    pub fn is_action(&self) -> bool {
        matches!(
            self,
            FormError::ActionNotFound(_) | FormError::ActionFailed { .. }
        )
    }
}

/// Result type alias using FormError
pub type FormResult<T> = Result<T, FormError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schema_validation_error() {
        let err = FormError::schema_validation("Contact", "no fields declared");
        assert!(err.is_schema());
        assert!(!err.is_render());
        assert_eq!(
            err.to_string(),
            "Schema validation failed for 'Contact': no fields declared"
        );
    }

    #[test]
    fn test_duplicate_field_error() {
        let err = FormError::DuplicateField {
            model: "Contact".to_string(),
            field: "name".to_string(),
        };
        assert!(err.is_schema());
        assert_eq!(
            err.to_string(),
            "Duplicate field name: 'name' already declared on 'Contact'"
        );
    }

    #[test]
    fn test_host_misuse_errors() {
        let err = FormError::PanelAlreadyOpen;
        assert!(err.is_host_misuse());
        assert!(!err.is_schema());
        assert_eq!(
            err.to_string(),
            "A panel is already open; close it before opening another"
        );
    }

    #[test]
    fn test_render_error() {
        let err = FormError::render("avatar", "image decode failed");
        assert!(err.is_render());
        assert_eq!(
            err.to_string(),
            "Failed to render field 'avatar': image decode failed"
        );

        let err = FormError::WidgetNotRegistered("ColorWheel".to_string());
        assert!(err.is_render());
    }

    #[test]
    fn test_action_errors() {
        let err = FormError::ActionNotFound("Promote".to_string());
        assert!(err.is_action());
        assert_eq!(err.to_string(), "View action not found: Promote");

        let err = FormError::action_failed("Promote", "backend unavailable");
        assert!(err.is_action());
        assert_eq!(
            err.to_string(),
            "View action 'Promote' failed: backend unavailable"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: FormError = json_err.into();
        assert!(matches!(err, FormError::JsonSerialization(_)));
    }
}
