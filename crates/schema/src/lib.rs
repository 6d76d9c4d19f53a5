//! # FormKit Schema
//!
//! Declarative field, column, and action metadata for FormKit models.
//!
//! ## Core Concepts
//!
//! - **FieldDescriptor**: how one model property is labeled, grouped, and
//!   rendered
//! - **ColumnGroup**: a named layout region fields are placed into
//! - **ViewActionDescriptor**: a user-triggerable operation exposed by a
//!   model, rendered as a button
//! - **ModelSchema**: the per-type descriptor list plus class metadata,
//!   built once through `SchemaBuilder`
//! - **SchemaRegistry**: the startup-populated lookup table that serves as
//!   the discovery service
//! - **PanelModel**: the trait data models implement to participate in
//!   panels, forms, and grids
//!

// Module declarations
pub mod action;
pub mod column;
pub mod field;
pub mod model;
pub mod registry;
pub mod schema;

// Re-export commonly used types at crate root
pub use action::{
    ActionArity, RESERVED_ACTION_NAMES, ViewActionDescriptor, is_reserved_action,
};
pub use column::{ColumnGroup, ROW_SPAN_UNITS};
pub use field::{FieldDescriptor, WidgetKind};
pub use model::{ErrorList, PanelModel};
pub use registry::{HasSchema, SchemaRegistry};
pub use schema::{ClassMetadata, ModelSchema, SchemaBuilder};

// Re-export core types that are commonly used with schemas
pub use formkit_core::{FieldType, FieldValue, FormError, FormResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        ActionArity,
        ClassMetadata,
        ColumnGroup,
        ErrorList,
        // Re-exported from core
        FieldType,
        FieldValue,
        FormError,
        FormResult,
        // Core types
        FieldDescriptor,
        HasSchema,
        ModelSchema,
        PanelModel,
        SchemaRegistry,
        ViewActionDescriptor,
        WidgetKind,
        is_reserved_action,
    };
}
