//! Schema registry
//!
//! The registry is the discovery service: a `TypeId`-keyed lookup table
//! from model type to its declared [`ModelSchema`], populated once at
//! startup. Lookups are pure and stable across repeated calls. A type with
//! no registered schema degrades gracefully: it has no discoverable fields,
//! and its class metadata falls back to the Rust type name.

use crate::field::FieldDescriptor;
use crate::schema::{ClassMetadata, ModelSchema};
use formkit_core::{FormError, FormResult};
use std::any::TypeId;
use std::collections::HashMap;

/// Trait for model types that declare their own schema
pub trait HasSchema {
    /// Build the schema for this model type
    fn model_schema() -> FormResult<ModelSchema>;
}

/// Lookup table from model type to declared schema
///
/// One registry instance is owned per application scope and injected where
/// discovery is needed; it is not process-global state.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<TypeId, ModelSchema>,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema for the model type `T`
    ///
    /// Registering the same type twice is a caller bug and fails loudly.
    pub fn register<T: 'static>(&mut self, schema: ModelSchema) -> FormResult<()> {
        let type_id = TypeId::of::<T>();
        if self.schemas.contains_key(&type_id) {
            return Err(FormError::SchemaAlreadyRegistered(
                short_type_name::<T>().to_string(),
            ));
        }

        tracing::debug!(model = schema.name(), "registered model schema");
        self.schemas.insert(type_id, schema);
        Ok(())
    }

    /// Register a self-describing model type
    pub fn register_model<T: HasSchema + 'static>(&mut self) -> FormResult<()> {
        self.register::<T>(T::model_schema()?)
    }

    /// Get the registered schema for `T`, if any
    pub fn schema<T: 'static>(&self) -> Option<&ModelSchema> {
        self.schemas.get(&TypeId::of::<T>())
    }

    /// Discover the field descriptors declared for `T`
    ///
    /// A type without a registered schema has no discoverable fields.
    pub fn discover_fields<T: 'static>(&self) -> &[FieldDescriptor] {
        self.schema::<T>().map(ModelSchema::fields).unwrap_or(&[])
    }

    /// Discover class-level metadata for `T`
    ///
    /// Falls back to the (short) Rust type name for title and resource key
    /// when no schema is registered.
    pub fn class_metadata<T: 'static>(&self) -> ClassMetadata {
        self.schema::<T>()
            .map(ModelSchema::class_metadata)
            .unwrap_or_else(|| ClassMetadata::fallback_for(short_type_name::<T>()))
    }

    /// Check whether `T` has a registered schema
    pub fn contains<T: 'static>(&self) -> bool {
        self.schemas.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered schemas
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// Last path segment of a Rust type name, without generic arguments
fn short_type_name<T: 'static>() -> &'static str {
    let full = std::any::type_name::<T>();
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_core::FieldType;

    struct Contact;
    struct Invoice;

    impl HasSchema for Contact {
        fn model_schema() -> FormResult<ModelSchema> {
            ModelSchema::builder("Contact")
                .title("Contact Details")
                .field(FieldDescriptor::new("name", FieldType::Text))
                .field(FieldDescriptor::new("active", FieldType::Boolean))
                .build()
        }
    }

    #[test]
    fn test_register_and_discover() {
        let mut registry = SchemaRegistry::new();
        registry.register_model::<Contact>().unwrap();

        assert!(registry.contains::<Contact>());
        let fields = registry.discover_fields::<Contact>();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "name");

        let meta = registry.class_metadata::<Contact>();
        assert_eq!(meta.title, "Contact Details");
    }

    #[test]
    fn test_discovery_is_stable() {
        let mut registry = SchemaRegistry::new();
        registry.register_model::<Contact>().unwrap();

        let first: Vec<String> = registry
            .discover_fields::<Contact>()
            .iter()
            .map(|f| f.name.clone())
            .collect();
        let second: Vec<String> = registry
            .discover_fields::<Contact>()
            .iter()
            .map(|f| f.name.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unregistered_type_degrades_gracefully() {
        let registry = SchemaRegistry::new();

        assert!(registry.discover_fields::<Invoice>().is_empty());
        let meta = registry.class_metadata::<Invoice>();
        assert_eq!(meta.title, "Invoice");
        assert_eq!(meta.resource_key, "Invoice");
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = SchemaRegistry::new();
        registry.register_model::<Contact>().unwrap();

        let err = registry.register_model::<Contact>().unwrap_err();
        assert!(matches!(err, FormError::SchemaAlreadyRegistered(_)));
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<Contact>(), "Contact");
        assert_eq!(short_type_name::<Vec<String>>(), "Vec");
    }
}
