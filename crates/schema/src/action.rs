//! View action descriptors
//!
//! A view action is a user-triggerable operation exposed by a model,
//! rendered as a button. The Save/Cancel/Delete lifecycle delegates are
//! reserved and never appear in the generic action list; they have
//! dedicated handling in the panel lifecycle controller.

use formkit_core::{FieldType, FieldValue};
use serde::{Deserialize, Serialize};

/// Action names reserved for lifecycle handling
pub const RESERVED_ACTION_NAMES: [&str; 3] = ["save", "cancel", "delete"];

/// Check whether an action name is reserved (case-insensitive)
pub fn is_reserved_action(name: &str) -> bool {
    RESERVED_ACTION_NAMES
        .iter()
        .any(|reserved| name.eq_ignore_ascii_case(reserved))
}

// ============================================================================
// ActionArity
// ============================================================================

/// Declared call shape of an action delegate
///
/// Replaces runtime parameter-count introspection: the dispatcher switches
/// on this tag, supplying `default` when an `Arg` action is invoked without
/// an explicit argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionArity {
    /// Delegate takes no argument
    NoArg,
    /// Delegate takes one argument, with a default used when none is given
    Arg { default: FieldValue },
}

// ============================================================================
// ViewActionDescriptor
// ============================================================================

/// Metadata describing one view action exposed by a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewActionDescriptor {
    /// Action name, matching the model's delegate property
    pub name: String,

    /// Resource key for the button label (falls back to `name`)
    pub label_key: Option<String>,

    /// Ordering weight; ties are broken by discovery order
    pub order: i32,

    /// When set, invoking the action opens this component as a nested
    /// dialog instead of calling the delegate
    pub custom_component: Option<String>,

    /// Declared call shape of the delegate
    pub arity: ActionArity,
}

impl ViewActionDescriptor {
    /// Create a new no-argument action descriptor
    pub fn new(name: impl Into<String>, order: i32) -> Self {
        Self {
            name: name.into(),
            label_key: None,
            order,
            custom_component: None,
            arity: ActionArity::NoArg,
        }
    }

    /// Set the label resource key
    pub fn with_label_key(mut self, key: impl Into<String>) -> Self {
        self.label_key = Some(key.into());
        self
    }

    /// Open a custom component instead of calling the delegate
    pub fn with_custom_component(mut self, component: impl Into<String>) -> Self {
        self.custom_component = Some(component.into());
        self
    }

    /// Declare the delegate as taking one argument of the given type,
    /// defaulted from that type when no argument is supplied
    pub fn expects_arg(mut self, field_type: FieldType) -> Self {
        self.arity = ActionArity::Arg {
            default: field_type.default_value(),
        };
        self
    }

    /// Declare the delegate as taking one argument with an explicit default
    pub fn expects_arg_with_default(mut self, default: FieldValue) -> Self {
        self.arity = ActionArity::Arg { default };
        self
    }

    /// Get the effective label resource key (falls back to the name)
    pub fn effective_label_key(&self) -> &str {
        self.label_key.as_deref().unwrap_or(&self.name)
    }

    /// Check whether this action opens a nested custom dialog
    pub fn opens_custom_dialog(&self) -> bool {
        self.custom_component.is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================
