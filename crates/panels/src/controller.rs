//! Panel lifecycle controller
//!
//! Binds the value buffer, renderer, action dispatcher, and modal host
//! together for one open panel: Save flushes the registered form and runs
//! the model's save delegate, Delete runs the delete delegate and always
//! closes, Cancel resets the form and clears edit state without closing.
//!
//! Every lifecycle delegate runs isolated: a throwing delegate appends a
//! user-visible error entry on the model and never blocks the state
//! transition that follows, and never crashes the host.

use crate::actions::{DispatchOutcome, dispatch};
use crate::form::FormComponent;
use crate::host::{CustomDialog, ModalHost};
use formkit_core::FieldValue;
use formkit_schema::{PanelModel, ViewActionDescriptor};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Coordinates one open panel's Save/Cancel/Delete flows and view actions
pub struct PanelController {
    close_on_save: bool,
    form: Option<Weak<RefCell<dyn FormComponent>>>,
    action_listener: Option<Box<dyn Fn(&str)>>,
}

impl PanelController {
    /// Create a controller
    pub fn new(close_on_save: bool) -> Self {
        Self {
            close_on_save,
            form: None,
            action_listener: None,
        }
    }

    /// Create a controller from the open session's options
    pub fn from_options(options: &crate::host::PanelOptions) -> Self {
        Self::new(options.close_on_save)
    }

    /// Register the concrete form component as the active submit/reset
    /// target
    ///
    /// The controller holds only a weak handle; the panel body owns the
    /// form. Registration happens explicitly when the form receives its
    /// parameters, not by inheritance.
    pub fn set_form_component(&mut self, form: &Rc<RefCell<dyn FormComponent>>) {
        self.form = Some(Rc::downgrade(form));
    }

    /// Drop the registered form component
    pub fn clear_form_component(&mut self) {
        self.form = None;
    }

    /// Register a listener fired with the action name after a view action
    /// delegate completes
    pub fn on_action_completed(&mut self, listener: impl Fn(&str) + 'static) {
        self.action_listener = Some(Box::new(listener));
    }

    fn form(&self) -> Option<Rc<RefCell<dyn FormComponent>>> {
        self.form.as_ref().and_then(Weak::upgrade)
    }

    /// Mark the open panel as editing or not
    pub fn set_editing(&self, host: &mut ModalHost, editing: bool) {
        let Some(session) = host.session_mut() else {
            return;
        };
        session.is_editing = editing;
        host.notify_changed();
    }

    /// Close the nested custom dialog, restoring the normal panel body
    ///
    /// This is the explicit return path shown while an action-triggered
    /// dialog suppresses the view/edit content.
    pub fn close_custom_dialog(&self, host: &mut ModalHost) {
        let Some(session) = host.session_mut() else {
            return;
        };
        session.custom_dialog = None;
        host.notify_changed();
    }

    /// Run the Save flow
    ///
    /// Submits the registered form (flushing its buffer onto the model),
    /// then runs the model's save delegate. When `close_on_save` is set the
    /// panel closes even if the delegate failed — the error entry is on the
    /// model for the host page to show after close.
    pub async fn save(&self, model: &mut dyn PanelModel, host: &mut ModalHost) {
        if let Some(form) = self.form() {
            if let Err(e) = form.borrow_mut().submit(model) {
                model.push_error(e.to_string());
            }
        }

        if let Err(e) = model.on_save().await {
            model.push_error(e.to_string());
        }

        if self.close_on_save {
            if let Some(session) = host.session_mut() {
                session.is_editing = false;
                session.custom_dialog = None;
            }
            host.close(None);
        }
    }

    /// Run the Delete flow
    ///
    /// The panel closes unconditionally, whether or not the delete delegate
    /// failed.
    pub async fn delete(&self, model: &mut dyn PanelModel, host: &mut ModalHost) {
        if let Err(e) = model.on_delete().await {
            model.push_error(e.to_string());
        }
        host.close(None);
    }

    /// Run the Cancel flow
    ///
    /// Resets the registered form (discarding buffered edits), runs the
    /// cancel delegate, and clears edit state and any pending custom-dialog
    /// content. The panel stays open.
    pub async fn cancel(&self, model: &mut dyn PanelModel, host: &mut ModalHost) {
        if let Some(form) = self.form() {
            form.borrow_mut().reset(model);
        }

        if let Err(e) = model.on_cancel().await {
            model.push_error(e.to_string());
        }

        if let Some(session) = host.session_mut() {
            session.is_editing = false;
            session.custom_dialog = None;
        }
        host.notify_changed();
    }

    /// Invoke a view action
    ///
    /// Dispatch failures become error entries on the model. An action
    /// flagged with a custom component opens it as nested dialog content on
    /// the current session instead of running the delegate.
    pub async fn invoke_action(
        &self,
        action: &ViewActionDescriptor,
        arg: Option<FieldValue>,
        model: &mut dyn PanelModel,
        host: &mut ModalHost,
    ) {
        match dispatch(action, model, arg).await {
            Ok(DispatchOutcome::Invoked { action }) => {
                if let Some(listener) = &self.action_listener {
                    listener(&action);
                }
            }
            Ok(DispatchOutcome::OpenCustomDialog { component, action }) => {
                let Some(session) = host.session_mut() else {
                    tracing::warn!(
                        action = %action,
                        "custom-dialog action invoked with no open panel"
                    );
                    return;
                };
                session.custom_dialog = Some(CustomDialog { component, action });
                host.notify_changed();
            }
            Err(e) => model.push_error(e.to_string()),
        }
    }
}

impl std::fmt::Debug for PanelController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelController")
            .field("close_on_save", &self.close_on_save)
            .field("has_form", &self.form.is_some())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
