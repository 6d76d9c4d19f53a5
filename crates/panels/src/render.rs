//! Field renderer
//!
//! Maps each field to a concrete widget and emits it as a tree of
//! "open widget / set attribute / close widget" instructions against a
//! host-supplied [`ViewBuilder`]. The engine never touches a concrete UI
//! surface; widgets are opaque, parameterized by `Name`/`Value`/`ReadOnly`
//! and wired back through [`ViewBuilder::bind_field`].
//!
//! Dispatch priority for edit mode, keyed by the declared property type:
//! explicit widget override, then string (rich text or text box), integer
//! and float (numeric input), boolean (checkbox), date (date picker).
//! Anything else renders nothing and logs a warning. A failing widget
//! factory is replaced by an inline error label; sibling fields are never
//! affected.

use formkit_core::{FieldValue, FormError, FormResult, Localizer, resolve_label};
use formkit_schema::{FieldDescriptor, WidgetKind};
use std::collections::HashMap;

// ============================================================================
// Attribute Names
// ============================================================================

/// Field name attribute
pub const ATTR_NAME: &str = "Name";
/// Current value attribute
pub const ATTR_VALUE: &str = "Value";
/// Read-only flag attribute
pub const ATTR_READ_ONLY: &str = "ReadOnly";
/// Resolved label attribute
pub const ATTR_LABEL: &str = "Label";
/// Test identifier attribute
pub const ATTR_TEST_ID: &str = "DataTestId";
/// Section title attribute
pub const ATTR_TITLE: &str = "Title";
/// Section width attribute (span units)
pub const ATTR_WIDTH: &str = "Width";
/// Section offset attribute (span units)
pub const ATTR_OFFSET: &str = "Offset";
/// Inline error message attribute
pub const ATTR_ERROR: &str = "Error";
/// Grid column sortable flag attribute
pub const ATTR_SORTABLE: &str = "Sortable";

// ============================================================================
// AttrValue
// ============================================================================

/// Attribute payload set on an open widget
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Plain text attribute
    Text(String),
    /// Field value attribute
    Value(FieldValue),
    /// Boolean flag attribute
    Flag(bool),
    /// Numeric attribute
    Number(i64),
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Flag(v)
    }
}

impl From<FieldValue> for AttrValue {
    fn from(v: FieldValue) -> Self {
        AttrValue::Value(v)
    }
}

// ============================================================================
// ViewBuilder
// ============================================================================

/// Host rendering surface consuming widget instructions
///
/// The host wires each bound field's change event back into the engine
/// (typically [`crate::DynamicForm::on_field_change`]); widget changes are
/// never written onto the model directly.
pub trait ViewBuilder {
    /// Open a widget of the given kind
    fn open_widget(&mut self, kind: WidgetKind);

    /// Set an attribute on the innermost open widget
    fn set_attr(&mut self, name: &str, value: AttrValue);

    /// Wire the innermost open widget's change event to a field
    fn bind_field(&mut self, field: &str);

    /// Close the innermost open widget
    fn close_widget(&mut self);
}

// ============================================================================
// WidgetRegistry
// ============================================================================

/// Factory rendering a custom widget override for one field
pub type WidgetFactory =
    Box<dyn Fn(&FieldDescriptor, &FieldValue, &mut dyn ViewBuilder) -> FormResult<()>>;

/// Host-registered custom widget factories, looked up by override name
#[derive(Default)]
pub struct WidgetRegistry {
    factories: HashMap<String, WidgetFactory>,
}

impl WidgetRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom widget factory
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&FieldDescriptor, &FieldValue, &mut dyn ViewBuilder) -> FormResult<()> + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Look up a factory by name
    pub fn get(&self, name: &str) -> Option<&WidgetFactory> {
        self.factories.get(name)
    }

    /// Check whether a factory is registered
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

impl std::fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetRegistry")
            .field("factories", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// FieldRenderer
// ============================================================================

/// Outcome of rendering one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A widget was emitted
    Rendered,
    /// The declared type has no widget mapping; nothing was emitted
    Skipped,
    /// The widget failed; an inline error label was emitted instead
    Failed,
}

/// Type dispatcher mapping fields to widgets
pub struct FieldRenderer<'a> {
    widgets: &'a WidgetRegistry,
    localizer: &'a dyn Localizer,
    resource_scope: Option<String>,
}

impl<'a> FieldRenderer<'a> {
    /// Create a renderer over the given widget registry and localizer
    pub fn new(widgets: &'a WidgetRegistry, localizer: &'a dyn Localizer) -> Self {
        Self {
            widgets,
            localizer,
            resource_scope: None,
        }
    }

    /// Scope label lookups under a model resource key
    pub fn with_resource_scope(mut self, scope: impl Into<String>) -> Self {
        self.resource_scope = Some(scope.into());
        self
    }

    /// Resolve a field's label through the localizer
    pub fn label_for(&self, field: &FieldDescriptor) -> String {
        self.resolve(field.effective_label_key(), &field.name)
    }

    /// Resolve a group or action label through the localizer
    pub fn resolve(&self, key: &str, fallback_name: &str) -> String {
        if let Some(scope) = &self.resource_scope {
            let scoped = format!("{}.{}", scope, key);
            if let Some(text) = self.localizer.get_string(&scoped) {
                return text;
            }
        }
        resolve_label(self.localizer, key, fallback_name)
    }

    /// Render a field in edit mode
    pub fn render_edit(
        &self,
        field: &FieldDescriptor,
        value: &FieldValue,
        builder: &mut dyn ViewBuilder,
    ) -> RenderOutcome {
        if let Some(widget) = field.edit_widget.clone() {
            return self.render_override(&widget, field, value, builder);
        }

        match WidgetKind::for_field_type(&field.field_type, field.use_rich_text) {
            Some(kind) => {
                self.emit_input(kind, field, value, builder);
                RenderOutcome::Rendered
            }
            None => {
                tracing::warn!(
                    field = %field.name,
                    declared_type = %field.field_type,
                    "no widget mapping for declared type; field skipped"
                );
                RenderOutcome::Skipped
            }
        }
    }

    /// Render a field in display mode
    ///
    /// Uses the display widget override when present; otherwise emits a
    /// read-only label carrying the value text.
    pub fn render_display(
        &self,
        field: &FieldDescriptor,
        value: &FieldValue,
        builder: &mut dyn ViewBuilder,
    ) -> RenderOutcome {
        if let Some(widget) = field.display_widget.clone() {
            return self.render_override(&widget, field, value, builder);
        }

        builder.open_widget(WidgetKind::Label);
        builder.set_attr(ATTR_NAME, AttrValue::Text(field.name.clone()));
        builder.set_attr(ATTR_LABEL, AttrValue::Text(self.label_for(field)));
        builder.set_attr(ATTR_VALUE, AttrValue::Value(value.clone()));
        if let Some(test_id) = &field.data_test_id {
            builder.set_attr(ATTR_TEST_ID, AttrValue::Text(test_id.clone()));
        }
        builder.close_widget();
        RenderOutcome::Rendered
    }

    fn render_override(
        &self,
        widget: &str,
        field: &FieldDescriptor,
        value: &FieldValue,
        builder: &mut dyn ViewBuilder,
    ) -> RenderOutcome {
        let result = match self.widgets.get(widget) {
            Some(factory) => factory(field, value, builder),
            None => Err(FormError::WidgetNotRegistered(widget.to_string())),
        };

        match result {
            Ok(()) => RenderOutcome::Rendered,
            Err(e) => {
                tracing::warn!(
                    field = %field.name,
                    widget = %widget,
                    error = %e,
                    "widget override failed; rendering inline error"
                );
                self.emit_error(field, &e.to_string(), builder);
                RenderOutcome::Failed
            }
        }
    }

    fn emit_input(
        &self,
        kind: WidgetKind,
        field: &FieldDescriptor,
        value: &FieldValue,
        builder: &mut dyn ViewBuilder,
    ) {
        builder.open_widget(kind);
        builder.set_attr(ATTR_NAME, AttrValue::Text(field.name.clone()));
        builder.set_attr(ATTR_LABEL, AttrValue::Text(self.label_for(field)));
        builder.set_attr(ATTR_VALUE, AttrValue::Value(value.clone()));
        if field.read_only {
            builder.set_attr(ATTR_READ_ONLY, AttrValue::Flag(true));
        }
        if let Some(test_id) = &field.data_test_id {
            builder.set_attr(ATTR_TEST_ID, AttrValue::Text(test_id.clone()));
        }
        if !field.read_only {
            builder.bind_field(&field.name);
        }
        builder.close_widget();
    }

    fn emit_error(&self, field: &FieldDescriptor, message: &str, builder: &mut dyn ViewBuilder) {
        builder.open_widget(WidgetKind::Label);
        builder.set_attr(ATTR_NAME, AttrValue::Text(field.name.clone()));
        builder.set_attr(ATTR_ERROR, AttrValue::Text(message.to_string()));
        builder.close_widget();
    }
}

impl std::fmt::Debug for FieldRenderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRenderer")
            .field("widgets", &self.widgets)
            .field("resource_scope", &self.resource_scope)
            .finish()
    }
}

// ============================================================================
// WidgetTree
// ============================================================================

/// One recorded widget with its attributes, binding, and children
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetNode {
    /// Widget kind
    pub kind: WidgetKind,
    /// Attributes in set order
    pub attrs: Vec<(String, AttrValue)>,
    /// Bound field name, if the widget was wired for changes
    pub binding: Option<String>,
    /// Child widgets
    pub children: Vec<WidgetNode>,
}

impl WidgetNode {
    fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            attrs: Vec::new(),
            binding: None,
            children: Vec::new(),
        }
    }

    /// Look up an attribute by name
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value)
    }

    /// Attribute as text, if present and textual
    pub fn text_attr(&self, name: &str) -> Option<&str> {
        match self.attr(name) {
            Some(AttrValue::Text(text)) => Some(text),
            _ => None,
        }
    }
}

/// Recording [`ViewBuilder`] producing an inspectable widget tree
///
/// Useful in tests and as the starting point for host adapters that map
/// widget instructions onto a concrete framework.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetTree {
    roots: Vec<WidgetNode>,
    open: Vec<WidgetNode>,
}

impl WidgetTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded root widgets (open widgets are not included until closed)
    pub fn roots(&self) -> &[WidgetNode] {
        &self.roots
    }

    /// Consume the tree and return the recorded roots
    pub fn into_roots(self) -> Vec<WidgetNode> {
        self.roots
    }

    /// Find the first root widget of the given kind
    pub fn find(&self, kind: &WidgetKind) -> Option<&WidgetNode> {
        self.roots.iter().find(|node| &node.kind == kind)
    }
}

impl ViewBuilder for WidgetTree {
    fn open_widget(&mut self, kind: WidgetKind) {
        self.open.push(WidgetNode::new(kind));
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) {
        if let Some(node) = self.open.last_mut() {
            node.attrs.push((name.to_string(), value));
        }
    }

    fn bind_field(&mut self, field: &str) {
        if let Some(node) = self.open.last_mut() {
            node.binding = Some(field.to_string());
        }
    }

    fn close_widget(&mut self) {
        let Some(node) = self.open.pop() else {
            return;
        };
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_core::{FieldType, MapLocalizer, NullLocalizer};

    fn render_one(field: &FieldDescriptor, value: FieldValue) -> (RenderOutcome, WidgetTree) {
        let widgets = WidgetRegistry::new();
        let renderer = FieldRenderer::new(&widgets, &NullLocalizer);
        let mut tree = WidgetTree::new();
        let outcome = renderer.render_edit(field, &value, &mut tree);
        (outcome, tree)
    }

    #[test]
    fn test_text_dispatch() {
        let field = FieldDescriptor::new("name", FieldType::Text);
        let (outcome, tree) = render_one(&field, FieldValue::Text("Ann".to_string()));

        assert_eq!(outcome, RenderOutcome::Rendered);
        let node = &tree.roots()[0];
        assert_eq!(node.kind, WidgetKind::TextBox);
        assert_eq!(node.text_attr(ATTR_NAME), Some("name"));
        assert_eq!(node.binding.as_deref(), Some("name"));
    }

    #[test]
    fn test_rich_text_dispatch() {
        let field = FieldDescriptor::new("notes", FieldType::Text).rich_text();
        let (_, tree) = render_one(&field, FieldValue::Null);
        assert_eq!(tree.roots()[0].kind, WidgetKind::RichTextEditor);
    }

    #[test]
    fn test_numeric_boolean_date_dispatch() {
        let (_, tree) = render_one(
            &FieldDescriptor::new("age", FieldType::Integer),
            FieldValue::Int(3),
        );
        assert_eq!(tree.roots()[0].kind, WidgetKind::NumberInput);

        let (_, tree) = render_one(
            &FieldDescriptor::new("active", FieldType::Boolean),
            FieldValue::Bool(true),
        );
        assert_eq!(tree.roots()[0].kind, WidgetKind::Checkbox);

        let (_, tree) = render_one(
            &FieldDescriptor::new("joined", FieldType::DateTime),
            FieldValue::Null,
        );
        assert_eq!(tree.roots()[0].kind, WidgetKind::DatePicker);
    }

    #[test]
    fn test_read_only_field_is_not_bound() {
        let field = FieldDescriptor::new("age", FieldType::Integer).read_only();
        let (_, tree) = render_one(&field, FieldValue::Int(1));

        let node = &tree.roots()[0];
        assert_eq!(node.attr(ATTR_READ_ONLY), Some(&AttrValue::Flag(true)));
        assert_eq!(node.binding, None);
    }

    #[test]
    fn test_unmapped_type_renders_nothing() {
        let field = FieldDescriptor::new("money", FieldType::Other("Money".to_string()));
        let (outcome, tree) = render_one(&field, FieldValue::Null);

        assert_eq!(outcome, RenderOutcome::Skipped);
        assert!(tree.roots().is_empty());
    }

    #[test]
    fn test_override_takes_priority() {
        let mut widgets = WidgetRegistry::new();
        widgets.register("Slider", |field, value, builder| {
            builder.open_widget(WidgetKind::Custom("Slider".to_string()));
            builder.set_attr(ATTR_NAME, AttrValue::Text(field.name.clone()));
            builder.set_attr(ATTR_VALUE, AttrValue::Value(value.clone()));
            builder.bind_field(&field.name);
            builder.close_widget();
            Ok(())
        });
        let renderer = FieldRenderer::new(&widgets, &NullLocalizer);

        // Declared type says numeric input; the override wins
        let field =
            FieldDescriptor::new("volume", FieldType::Integer).with_edit_widget("Slider");
        let mut tree = WidgetTree::new();
        let outcome = renderer.render_edit(&field, &FieldValue::Int(5), &mut tree);

        assert_eq!(outcome, RenderOutcome::Rendered);
        assert_eq!(
            tree.roots()[0].kind,
            WidgetKind::Custom("Slider".to_string())
        );
    }

    #[test]
    fn test_missing_override_becomes_inline_error() {
        let field = FieldDescriptor::new("volume", FieldType::Integer)
            .with_edit_widget("UnregisteredWidget");
        let (outcome, tree) = render_one(&field, FieldValue::Int(5));

        assert_eq!(outcome, RenderOutcome::Failed);
        let node = &tree.roots()[0];
        assert_eq!(node.kind, WidgetKind::Label);
        assert!(node.attr(ATTR_ERROR).is_some());
    }

    #[test]
    fn test_failing_factory_does_not_abort_siblings() {
        let mut widgets = WidgetRegistry::new();
        widgets.register("Broken", |field, _, _| {
            Err(FormError::render(&field.name, "factory exploded"))
        });
        let renderer = FieldRenderer::new(&widgets, &NullLocalizer);
        let mut tree = WidgetTree::new();

        let broken = FieldDescriptor::new("a", FieldType::Text).with_edit_widget("Broken");
        let healthy = FieldDescriptor::new("b", FieldType::Text);
        assert_eq!(
            renderer.render_edit(&broken, &FieldValue::Null, &mut tree),
            RenderOutcome::Failed
        );
        assert_eq!(
            renderer.render_edit(&healthy, &FieldValue::Null, &mut tree),
            RenderOutcome::Rendered
        );

        assert_eq!(tree.roots().len(), 2);
        assert_eq!(tree.roots()[1].kind, WidgetKind::TextBox);
    }

    #[test]
    fn test_display_mode_emits_label() {
        let widgets = WidgetRegistry::new();
        let renderer = FieldRenderer::new(&widgets, &NullLocalizer);
        let field = FieldDescriptor::new("created_at", FieldType::DateTime);
        let mut tree = WidgetTree::new();

        let outcome = renderer.render_display(&field, &FieldValue::Null, &mut tree);
        assert_eq!(outcome, RenderOutcome::Rendered);

        let node = &tree.roots()[0];
        assert_eq!(node.kind, WidgetKind::Label);
        assert_eq!(node.text_attr(ATTR_LABEL), Some("Created At"));
        assert_eq!(node.binding, None);
    }

    #[test]
    fn test_label_resolution_with_scope() {
        let localizer = MapLocalizer::new()
            .with_entry("Contact.name", "Full name")
            .with_entry("plain", "Plain label");
        let widgets = WidgetRegistry::new();
        let renderer = FieldRenderer::new(&widgets, &localizer).with_resource_scope("Contact");

        let scoped = FieldDescriptor::new("name", FieldType::Text);
        assert_eq!(renderer.label_for(&scoped), "Full name");

        // Unscoped lookup still works as a fallback
        let plain = FieldDescriptor::new("other", FieldType::Text).with_label_key("plain");
        assert_eq!(renderer.label_for(&plain), "Plain label");

        // Missing everywhere falls back to the title-cased property name
        let missing = FieldDescriptor::new("last_seen", FieldType::Text);
        assert_eq!(renderer.label_for(&missing), "Last Seen");
    }

    #[test]
    fn test_widget_tree_nesting() {
        let mut tree = WidgetTree::new();
        tree.open_widget(WidgetKind::Section);
        tree.set_attr(ATTR_TITLE, AttrValue::Text("General".to_string()));
        tree.open_widget(WidgetKind::TextBox);
        tree.close_widget();
        tree.close_widget();

        assert_eq!(tree.roots().len(), 1);
        let section = tree.find(&WidgetKind::Section).unwrap();
        assert_eq!(section.children.len(), 1);
        assert_eq!(section.children[0].kind, WidgetKind::TextBox);
    }
}
