//! # FormKit
//!
//! Metadata-driven form, grid, and side-panel components for Rust UI hosts.
//!
//! Application developers declare field, column, and action metadata for
//! plain model types once; the generic components render fully interactive
//! forms, grids, and panel dialogs from that metadata — no per-model
//! boilerplate.
//!
//! ## Crates
//!
//! - [`formkit_core`] — field values, conversions, errors, localization
//! - [`formkit_schema`] — descriptors, model schemas, the schema registry,
//!   and the `PanelModel` trait
//! - [`formkit_panels`] — layout, value buffer, field renderer, action
//!   dispatcher, modal host, and the dynamic form/grid components
//!
//! ## Example
//!
//! ```rust
//! use formkit::prelude::*;
//!
//! let schema = ModelSchema::builder("Contact")
//!     .title("Contact Details")
//!     .column(ColumnGroup::new("General", 0))
//!     .field(FieldDescriptor::new("name", FieldType::Text).in_group("General"))
//!     .field(FieldDescriptor::new("active", FieldType::Boolean))
//!     .build()
//!     .expect("valid schema");
//!
//! let mut registry = SchemaRegistry::new();
//! struct Contact;
//! registry.register::<Contact>(schema).expect("first registration");
//!
//! assert_eq!(registry.discover_fields::<Contact>().len(), 2);
//! ```

// Re-export the component crates
pub use formkit_core as core;
pub use formkit_panels as panels;
pub use formkit_schema as schema;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use formkit_core::{
        FieldType, FieldValue, FormError, FormResult, Localizer, MapLocalizer, NullLocalizer,
    };
    pub use formkit_panels::prelude::*;
    pub use formkit_schema::{
        ActionArity, ClassMetadata, ColumnGroup, ErrorList, FieldDescriptor, HasSchema,
        ModelSchema, PanelModel, SchemaRegistry, ViewActionDescriptor, WidgetKind,
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
