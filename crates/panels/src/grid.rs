//! Grid view
//!
//! Builds an ordered column model from a model type's discovered fields
//! (visible fields only, localized titles, widths taken from the field's
//! column group) and renders rows through display-mode dispatch. Sorting
//! and virtualization belong to the host grid widget; this module only
//! supplies the metadata it needs.

use crate::render::{
    ATTR_LABEL, ATTR_NAME, ATTR_SORTABLE, ATTR_TITLE, ATTR_WIDTH, AttrValue, FieldRenderer,
    ViewBuilder,
};
use formkit_core::Localizer;
use formkit_schema::{ClassMetadata, FieldDescriptor, PanelModel, SchemaRegistry, WidgetKind};

// ============================================================================
// GridColumn
// ============================================================================

/// One resolved grid column
#[derive(Debug, Clone, PartialEq)]
pub struct GridColumn {
    /// Field the column reads from
    pub field: String,
    /// Localized header title
    pub title: String,
    /// Whether the host grid may sort by this column
    pub sortable: bool,
    /// Relative width in span units, when the field's column group set one
    pub width: Option<u8>,
}

// ============================================================================
// GridView
// ============================================================================

/// Metadata-driven grid over instances of one model type
#[derive(Debug, Clone)]
pub struct GridView {
    metadata: ClassMetadata,
    fields: Vec<FieldDescriptor>,
    columns: Vec<GridColumn>,
}

impl GridView {
    /// Build a grid over explicit metadata and fields
    pub fn new(
        metadata: ClassMetadata,
        fields: Vec<FieldDescriptor>,
        localizer: &dyn Localizer,
    ) -> Self {
        let columns = fields
            .iter()
            .filter(|field| field.visible)
            .map(|field| GridColumn {
                field: field.name.clone(),
                title: formkit_core::resolve_label(
                    localizer,
                    field.effective_label_key(),
                    &field.name,
                ),
                sortable: field.sortable,
                width: metadata
                    .columns
                    .iter()
                    .find(|column| Some(&column.name) == field.column_group.as_ref())
                    .map(|column| column.width),
            })
            .collect();

        Self {
            metadata,
            fields,
            columns,
        }
    }

    /// Build a grid for a registered model type
    pub fn for_model<T: 'static>(registry: &SchemaRegistry, localizer: &dyn Localizer) -> Self {
        Self::new(
            registry.class_metadata::<T>(),
            registry.discover_fields::<T>().to_vec(),
            localizer,
        )
    }

    /// Grid title from the class metadata
    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    /// Resolved columns in declaration order
    pub fn columns(&self) -> &[GridColumn] {
        &self.columns
    }

    /// Emit the header row
    pub fn render_header(&self, builder: &mut dyn ViewBuilder) {
        builder.open_widget(WidgetKind::Section);
        builder.set_attr(ATTR_TITLE, AttrValue::Text(self.metadata.title.clone()));
        for column in &self.columns {
            builder.open_widget(WidgetKind::Label);
            builder.set_attr(ATTR_NAME, AttrValue::Text(column.field.clone()));
            builder.set_attr(ATTR_LABEL, AttrValue::Text(column.title.clone()));
            builder.set_attr(ATTR_SORTABLE, AttrValue::Flag(column.sortable));
            if let Some(width) = column.width {
                builder.set_attr(ATTR_WIDTH, AttrValue::Number(width as i64));
            }
            builder.close_widget();
        }
        builder.close_widget();
    }

    /// Emit one data row for a model instance
    ///
    /// Each visible field renders in display mode, honoring display widget
    /// overrides; a failing override turns into an inline error cell
    /// without affecting the rest of the row.
    pub fn render_row(
        &self,
        model: &dyn PanelModel,
        renderer: &FieldRenderer<'_>,
        builder: &mut dyn ViewBuilder,
    ) {
        builder.open_widget(WidgetKind::Section);
        for field in self.fields.iter().filter(|field| field.visible) {
            let value = model.field_value(&field.name);
            renderer.render_display(field, &value, builder);
        }
        builder.close_widget();
    }
}

// ============================================================================
// Tests
// ============================================================================
