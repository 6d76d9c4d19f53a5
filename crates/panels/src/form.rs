//! Dynamic form component
//!
//! The generic metadata-driven form: discovered fields organized into
//! column groups, a value buffer holding uncommitted edits, and rendering
//! through the field dispatcher. Widget change events land in the buffer;
//! the bound model only changes when the form submits.

use crate::buffer::ValueBuffer;
use crate::layout::organize;
use crate::render::{
    ATTR_OFFSET, ATTR_TITLE, ATTR_WIDTH, AttrValue, FieldRenderer, ViewBuilder,
};
use formkit_core::{FieldValue, FormResult};
use formkit_schema::{ClassMetadata, FieldDescriptor, PanelModel, SchemaRegistry, WidgetKind};

// ============================================================================
// FormComponent Trait
// ============================================================================

/// The submit/reset surface a concrete form registers with the panel
/// lifecycle controller
pub trait FormComponent {
    /// Commit the form's uncommitted edits onto the model
    fn submit(&mut self, model: &mut dyn PanelModel) -> FormResult<()>;

    /// Discard uncommitted edits, restoring the model's current values
    fn reset(&mut self, model: &dyn PanelModel);
}

// ============================================================================
// DynamicForm
// ============================================================================

/// Metadata-driven form over one model instance
#[derive(Debug, Clone)]
pub struct DynamicForm {
    metadata: ClassMetadata,
    fields: Vec<FieldDescriptor>,
    buffer: ValueBuffer,
}

impl DynamicForm {
    /// Create a form over explicit metadata and fields
    pub fn new(metadata: ClassMetadata, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            metadata,
            fields,
            buffer: ValueBuffer::new(),
        }
    }

    /// Create a form for a registered model type
    pub fn for_model<T: 'static>(registry: &SchemaRegistry) -> Self {
        Self::new(
            registry.class_metadata::<T>(),
            registry.discover_fields::<T>().to_vec(),
        )
    }

    /// Seed the buffer from the model's current values
    ///
    /// Called when the bound model (or the panel's parameters) change.
    /// Any unflushed edits are discarded.
    pub fn bind(&mut self, model: &dyn PanelModel) {
        self.buffer.seed(model, &self.fields);
    }

    /// Route a widget change event into the buffer
    ///
    /// Changes for names outside the discovered field set are dropped,
    /// keeping the buffer keys a subset of the descriptor names.
    pub fn on_field_change(&mut self, name: &str, value: FieldValue) {
        if self.fields.iter().any(|f| f.name == name) {
            self.buffer.set(name, value);
        } else {
            tracing::debug!(field = %name, "change event for unknown field ignored");
        }
    }

    /// Class metadata the form was built from
    pub fn metadata(&self) -> &ClassMetadata {
        &self.metadata
    }

    /// Discovered fields in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// The uncommitted edit state
    pub fn buffer(&self) -> &ValueBuffer {
        &self.buffer
    }

    /// Mutable access to the uncommitted edit state
    pub fn buffer_mut(&mut self) -> &mut ValueBuffer {
        &mut self.buffer
    }

    /// Render the form in edit mode
    ///
    /// Ungrouped fields come first as a flat run, then each column group as
    /// a section in resolved order.
    pub fn render_edit(&self, renderer: &FieldRenderer<'_>, builder: &mut dyn ViewBuilder) {
        self.render(renderer, builder, true);
    }

    /// Render the form in display mode
    pub fn render_display(&self, renderer: &FieldRenderer<'_>, builder: &mut dyn ViewBuilder) {
        self.render(renderer, builder, false);
    }

    fn render(&self, renderer: &FieldRenderer<'_>, builder: &mut dyn ViewBuilder, edit: bool) {
        let layout = organize(&self.fields, &self.metadata.column_order);

        for field in &layout.ungrouped {
            self.render_field(renderer, builder, field, edit);
        }

        for group in &layout.groups {
            builder.open_widget(WidgetKind::Section);
            builder.set_attr(
                ATTR_TITLE,
                AttrValue::Text(renderer.resolve(&group.name, &group.name)),
            );
            if let Some(column) = self.metadata.column_group(&group.name) {
                builder.set_attr(ATTR_WIDTH, AttrValue::Number(column.width as i64));
                if column.offset > 0 {
                    builder.set_attr(ATTR_OFFSET, AttrValue::Number(column.offset as i64));
                }
            }
            for field in &group.fields {
                self.render_field(renderer, builder, field, edit);
            }
            builder.close_widget();
        }
    }

    fn render_field(
        &self,
        renderer: &FieldRenderer<'_>,
        builder: &mut dyn ViewBuilder,
        field: &FieldDescriptor,
        edit: bool,
    ) {
        let value = self
            .buffer
            .get(&field.name)
            .cloned()
            .unwrap_or(FieldValue::Null);
        if edit {
            renderer.render_edit(field, &value, builder);
        } else {
            renderer.render_display(field, &value, builder);
        }
    }
}

impl FormComponent for DynamicForm {
    fn submit(&mut self, model: &mut dyn PanelModel) -> FormResult<()> {
        self.buffer.flush(model);
        Ok(())
    }

    fn reset(&mut self, model: &dyn PanelModel) {
        self.buffer.seed(model, &self.fields);
    }
}

// ============================================================================
// Tests
// ============================================================================
