//! Model schemas
//!
//! A `ModelSchema` is the statically-declared descriptor list for one model
//! type: class-level metadata (title, resource binding, column order and
//! groups) plus the per-property field descriptors. Schemas are built once
//! through [`SchemaBuilder`] and are read-only afterwards.

use crate::column::ColumnGroup;
use crate::field::FieldDescriptor;
use formkit_core::{FormError, FormResult, Validatable};
use serde::{Deserialize, Serialize};

// ============================================================================
// ModelSchema
// ============================================================================

/// Declarative metadata for one model type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSchema {
    name: String,
    title: Option<String>,
    resource_key: Option<String>,
    column_order: Vec<String>,
    columns: Vec<ColumnGroup>,
    fields: Vec<FieldDescriptor>,
}

impl ModelSchema {
    /// Start building a schema for the named model type
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            schema: Self {
                name: name.into(),
                title: None,
                resource_key: None,
                column_order: Vec::new(),
                columns: Vec::new(),
                fields: Vec::new(),
            },
        }
    }

    /// Model type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display title (falls back to the model name)
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Localization resource key (falls back to the model name — the
    /// self-describing default when no resource binding is declared)
    pub fn resource_key(&self) -> &str {
        self.resource_key.as_deref().unwrap_or(&self.name)
    }

    /// Declared column ordering hint
    pub fn column_order(&self) -> &[String] {
        &self.column_order
    }

    /// Declared column groups
    pub fn columns(&self) -> &[ColumnGroup] {
        &self.columns
    }

    /// Look up a column group by name
    pub fn column_group(&self, name: &str) -> Option<&ColumnGroup> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Field descriptors in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a field descriptor by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Class-level metadata view, with fallbacks applied
    pub fn class_metadata(&self) -> ClassMetadata {
        ClassMetadata {
            title: self.title().to_string(),
            resource_key: self.resource_key().to_string(),
            column_order: self.column_order.clone(),
            columns: self.columns.clone(),
        }
    }
}

impl Validatable for ModelSchema {
    fn validate(&self) -> FormResult<()> {
        if self.name.is_empty() {
            return Err(FormError::schema_validation(
                "<unnamed>",
                "model name cannot be empty",
            ));
        }

        for (i, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(FormError::schema_validation(
                    &self.name,
                    "field name cannot be empty",
                ));
            }
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(FormError::DuplicateField {
                    model: self.name.clone(),
                    field: field.name.clone(),
                });
            }
        }

        for (i, column) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.name == column.name) {
                return Err(FormError::DuplicateColumnGroup {
                    model: self.name.clone(),
                    group: column.name.clone(),
                });
            }
        }

        Ok(())
    }
}

// ============================================================================
// ClassMetadata
// ============================================================================

/// Class-level metadata as consumed by discovery
///
/// Unlike [`ModelSchema`], every attribute here is concrete: fallbacks for
/// missing title/resource bindings have already been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetadata {
    /// Display title for the panel/grid header
    pub title: String,
    /// Localization resource key prefix
    pub resource_key: String,
    /// Column ordering hint
    pub column_order: Vec<String>,
    /// Declared column groups
    pub columns: Vec<ColumnGroup>,
}

impl ClassMetadata {
    /// Fallback metadata for a model type with no registered schema
    pub fn fallback_for(type_name: &str) -> Self {
        Self {
            title: type_name.to_string(),
            resource_key: type_name.to_string(),
            column_order: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Look up a column group by name
    pub fn column_group(&self, name: &str) -> Option<&ColumnGroup> {
        self.columns.iter().find(|c| c.name == name)
    }
}

// ============================================================================
// SchemaBuilder
// ============================================================================

/// Builder for [`ModelSchema`]
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    schema: ModelSchema,
}

impl SchemaBuilder {
    /// Set the display title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.schema.title = Some(title.into());
        self
    }

    /// Bind a localization resource key
    pub fn resource_key(mut self, key: impl Into<String>) -> Self {
        self.schema.resource_key = Some(key.into());
        self
    }

    /// Set the column ordering hint
    pub fn column_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schema.column_order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Declare a column group
    pub fn column(mut self, column: ColumnGroup) -> Self {
        self.schema.columns.push(column);
        self
    }

    /// Declare a field
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.schema.fields.push(field);
        self
    }

    /// Validate and finish the schema
    pub fn build(self) -> FormResult<ModelSchema> {
        self.schema.validate()?;
        Ok(self.schema)
    }
}

// ============================================================================
// Tests
// ============================================================================
