//! # FormKit Panels
//!
//! The dynamic form, grid, and side-panel engine for FormKit.
//!
//! This crate binds declared model schemas to a host rendering surface:
//!
//! - **Layout**: `organize` resolves column groups into render order
//! - **Buffer**: `ValueBuffer` holds uncommitted edits per open form
//! - **Renderer**: `FieldRenderer` maps fields to opaque widgets emitted
//!   through the `ViewBuilder` abstraction
//! - **Actions**: `list_actions`/`dispatch` run model view actions
//! - **Host**: `ModalHost` governs the single open panel and delivers its
//!   result asynchronously
//! - **Controller**: `PanelController` runs the Save/Cancel/Delete flows
//! - **Components**: `DynamicForm` and `GridView`, the generic consumers
//!
//! The concrete UI framework stays out of scope: hosts implement
//! [`ViewBuilder`] (or adapt [`WidgetTree`]) and wire bound fields back
//! into [`DynamicForm::on_field_change`].
//!
//! The engine assumes the host's single UI/event thread: state types hold
//! `Rc` handles and plain callbacks and are deliberately `!Send`, so the
//! single-writer assumption is enforced by the compiler. Suspension happens
//! only at explicit `await` points (lifecycle delegates, the pending panel
//! ticket); no state mutation is interleaved mid-operation.

// ============================================================================
// Modules
// ============================================================================

pub mod actions;
pub mod buffer;
pub mod controller;
pub mod form;
pub mod grid;
pub mod host;
pub mod layout;
pub mod render;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use formkit_core;
pub use formkit_schema;

pub use actions::{DispatchOutcome, dispatch, list_actions};
pub use buffer::ValueBuffer;
pub use controller::PanelController;
pub use form::{DynamicForm, FormComponent};
pub use grid::{GridColumn, GridView};
pub use host::{
    CustomDialog, ModalHost, PanelOptions, PanelParams, PanelResult, PanelSession, PanelTicket,
    ParamValue,
};
pub use layout::{LayoutGroup, OrganizedLayout, organize};
pub use render::{
    ATTR_ERROR, ATTR_LABEL, ATTR_NAME, ATTR_OFFSET, ATTR_READ_ONLY, ATTR_SORTABLE, ATTR_TEST_ID,
    ATTR_TITLE, ATTR_VALUE, ATTR_WIDTH, AttrValue, FieldRenderer, RenderOutcome, ViewBuilder,
    WidgetFactory, WidgetNode, WidgetRegistry, WidgetTree,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        AttrValue, DispatchOutcome, DynamicForm, FieldRenderer, FormComponent, GridView,
        ModalHost, PanelController, PanelOptions, PanelParams, PanelTicket, ParamValue,
        RenderOutcome, ValueBuffer, ViewBuilder, WidgetRegistry, WidgetTree, dispatch,
        list_actions, organize,
    };
}
