//! Model-facing trait
//!
//! `PanelModel` is the seam between the engine and application data models:
//! property access by field name, view action exposure and dispatch, the
//! async Save/Cancel/Delete lifecycle delegates, and the error list where
//! failed delegates accumulate user-visible messages.

use crate::action::ViewActionDescriptor;
use async_trait::async_trait;
use formkit_core::{FieldValue, FormError, FormResult};

// ============================================================================
// PanelModel Trait
// ============================================================================

/// The contract a data model fulfills to be shown in panels, forms, and grids
///
/// The model instance stays owned by the calling page; panels read and write
/// through these methods and never take ownership of the reference.
///
/// Lifecycle delegates default to no-ops — a model that does not override
/// `on_save` simply has no save delegate configured. Delegate errors are
/// converted to error entries by the panel lifecycle controller; they are
/// never propagated past it.
#[async_trait(?Send)]
pub trait PanelModel {
    /// Read the current value of a property (Null for unknown names)
    fn field_value(&self, name: &str) -> FieldValue;

    /// Write a value onto a property
    ///
    /// Returns `false` when the property is unknown or has no setter; the
    /// caller skips it silently.
    fn set_field_value(&mut self, name: &str, value: FieldValue) -> bool;

    /// View actions currently wired on this model instance
    ///
    /// Only actions whose delegate is actually present should be returned;
    /// an unwired action simply does not appear.
    fn view_actions(&self) -> Vec<ViewActionDescriptor> {
        Vec::new()
    }

    /// Invoke a view action delegate by name
    async fn invoke_view_action(
        &mut self,
        name: &str,
        arg: Option<FieldValue>,
    ) -> FormResult<()> {
        let _ = arg;
        Err(FormError::ActionNotFound(name.to_string()))
    }

    /// Save lifecycle delegate (no-op when not configured)
    async fn on_save(&mut self) -> FormResult<()> {
        Ok(())
    }

    /// Cancel lifecycle delegate (no-op when not configured)
    async fn on_cancel(&mut self) -> FormResult<()> {
        Ok(())
    }

    /// Delete lifecycle delegate (no-op when not configured)
    async fn on_delete(&mut self) -> FormResult<()> {
        Ok(())
    }

    /// Append a user-visible error message to the model's error list
    fn push_error(&mut self, message: String);

    /// Accumulated error messages, in insertion order
    fn errors(&self) -> &[String];

    /// Clear the accumulated error messages
    fn clear_errors(&mut self);
}

// ============================================================================
// ErrorList
// ============================================================================

/// Accumulated user-visible error entries for one model instance
///
/// Models embed one of these and forward the `PanelModel` error methods to
/// it. Entries accumulate until explicitly cleared; they are surfaced by
/// the host page, never rethrown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList {
    entries: Vec<String>,
}

impl ErrorList {
    /// Create an empty error list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error message
    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
    }

    /// All entries in insertion order
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Check whether any errors are recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded errors
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
