//! Modal / side-panel host
//!
//! Single-slot asynchronous dialog controller. The state machine is
//! `Closed -> Open -> Closed`: opening while open is a caller bug and fails
//! loudly; closing resolves the pending result exactly once and is a no-op
//! afterwards. There is no queueing and no timeout — a caller that never
//! closes leaves the host permanently open, which blocks further `open`
//! calls. That is an intentional simplicity tradeoff: a stuck-open panel
//! points at the missing `close`, not at a watchdog.
//!
//! One host instance is owned per application scope and injected where
//! needed; the at-most-one-open invariant belongs to the instance, not to
//! process-wide state.

use formkit_core::{FormError, FormResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::oneshot;
use uuid::Uuid;

// ============================================================================
// Panel Parameters
// ============================================================================

/// One named parameter passed to an opening panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// Text parameter
    Text(String),
    /// Integer parameter
    Int(i64),
    /// Boolean parameter
    Flag(bool),
    /// Structured parameter
    Json(serde_json::Value),
}

/// Parameter set passed to an opening panel component
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelParams(HashMap<String, ParamValue>);

impl PanelParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter (builder style)
    pub fn with(mut self, name: impl Into<String>, value: ParamValue) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    /// Add a parameter
    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        self.0.insert(name.into(), value);
    }

    /// Look up a parameter
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// Look up a text parameter
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(ParamValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Look up an integer parameter
    pub fn int(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(ParamValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// Look up a boolean parameter
    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(ParamValue::Flag(value)) => Some(*value),
            _ => None,
        }
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Panel Options
// ============================================================================

/// Behavior options for an opening panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelOptions {
    /// Close the panel automatically after a successful Save flow
    pub close_on_save: bool,
    /// Title override (the model schema title is used when absent)
    pub title: Option<String>,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            close_on_save: true,
            title: None,
        }
    }
}

// ============================================================================
// Panel Session
// ============================================================================

/// Nested custom-dialog content shown inside the panel body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomDialog {
    /// Component to render as the dialog content
    pub component: String,
    /// The view action that requested the dialog
    pub action: String,
}

/// State of one open panel instance
///
/// Created when the host opens, cleared when it closes; at most one session
/// exists per host instance at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSession {
    /// Unique session id
    pub id: Uuid,
    /// Component the panel is showing
    pub component: String,
    /// Parameters the panel was opened with
    pub params: PanelParams,
    /// Behavior options the panel was opened with
    pub options: PanelOptions,
    /// Whether the panel is in edit mode
    pub is_editing: bool,
    /// Nested custom-dialog content, suppressing the normal body while set
    pub custom_dialog: Option<CustomDialog>,
}

impl PanelSession {
    /// Whether an action-triggered nested dialog is currently showing
    pub fn is_custom_dialog_open(&self) -> bool {
        self.custom_dialog.is_some()
    }
}

// ============================================================================
// Panel Ticket
// ============================================================================

/// Optional payload delivered to the opener when the panel closes
pub type PanelResult = serde_json::Value;

/// Pending result of an open panel
///
/// Resolves exactly once, when [`ModalHost::close`] runs. If the host is
/// dropped with the panel still open, the ticket resolves to `None`.
#[derive(Debug)]
pub struct PanelTicket {
    receiver: oneshot::Receiver<Option<PanelResult>>,
}

impl PanelTicket {
    /// Wait for the panel to close, returning its result payload
    pub async fn wait(self) -> Option<PanelResult> {
        self.receiver.await.unwrap_or(None)
    }
}

// ============================================================================
// ModalHost
// ============================================================================

/// Single-slot controller for the modal / side-panel surface
pub struct ModalHost {
    session: Option<PanelSession>,
    pending: Option<oneshot::Sender<Option<PanelResult>>>,
    listeners: Vec<Box<dyn Fn()>>,
}

impl ModalHost {
    /// Create a closed host
    pub fn new() -> Self {
        Self {
            session: None,
            pending: None,
            listeners: Vec::new(),
        }
    }

    /// Open a panel showing `component` with the given parameters
    ///
    /// Fails with [`FormError::PanelAlreadyOpen`] if a panel is showing:
    /// a missing `close` is a caller bug, not a queueing request. Returns a
    /// ticket that resolves when the panel closes.
    pub fn open(
        &mut self,
        component: impl Into<String>,
        params: PanelParams,
        options: PanelOptions,
    ) -> FormResult<PanelTicket> {
        if self.session.is_some() {
            return Err(FormError::PanelAlreadyOpen);
        }

        let session = PanelSession {
            id: Uuid::new_v4(),
            component: component.into(),
            params,
            options,
            is_editing: false,
            custom_dialog: None,
        };
        tracing::debug!(panel = %session.id, component = %session.component, "panel opened");

        let (sender, receiver) = oneshot::channel();
        self.session = Some(session);
        self.pending = Some(sender);
        self.notify_changed();

        Ok(PanelTicket { receiver })
    }

    /// Close the open panel, resolving its ticket with `result`
    ///
    /// No-op when already closed; the ticket never resolves twice.
    pub fn close(&mut self, result: Option<PanelResult>) {
        let Some(session) = self.session.take() else {
            return;
        };
        tracing::debug!(panel = %session.id, "panel closed");

        if let Some(sender) = self.pending.take() {
            // The opener may have dropped its ticket; that is fine
            let _ = sender.send(result);
        }
        self.notify_changed();
    }

    /// Whether a panel is currently showing
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The open session, if any
    pub fn session(&self) -> Option<&PanelSession> {
        self.session.as_ref()
    }

    /// Mutable access to the open session, if any
    pub fn session_mut(&mut self) -> Option<&mut PanelSession> {
        self.session.as_mut()
    }

    /// Register a state-changed listener (consumed by the host shell to
    /// trigger a re-render)
    pub fn subscribe(&mut self, listener: impl Fn() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Fire the state-changed listeners
    pub fn notify_changed(&self) {
        for listener in &self.listeners {
            listener();
        }
    }
}

impl Default for ModalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ModalHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalHost")
            .field("session", &self.session)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    #[tokio::test]
    async fn test_open_then_close_resolves_result() {
        let mut host = ModalHost::new();
        let ticket = host
            .open("ContactPanel", PanelParams::new(), PanelOptions::default())
            .unwrap();
        assert!(host.is_open());

        host.close(Some(json!({"saved": true})));
        assert!(!host.is_open());
        assert_eq!(ticket.wait().await, Some(json!({"saved": true})));
    }

    #[tokio::test]
    async fn test_open_while_open_fails() {
        let mut host = ModalHost::new();
        let _ticket = host
            .open("ContactPanel", PanelParams::new(), PanelOptions::default())
            .unwrap();

        let err = host
            .open("OtherPanel", PanelParams::new(), PanelOptions::default())
            .unwrap_err();
        assert!(matches!(err, FormError::PanelAlreadyOpen));

        // After closing, a new open succeeds
        host.close(None);
        assert!(
            host.open("OtherPanel", PanelParams::new(), PanelOptions::default())
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let mut host = ModalHost::new();
        let ticket = host
            .open("ContactPanel", PanelParams::new(), PanelOptions::default())
            .unwrap();

        host.close(Some(json!("first")));
        // Second close is a no-op, not an error
        host.close(Some(json!("second")));

        assert_eq!(ticket.wait().await, Some(json!("first")));
    }

    #[tokio::test]
    async fn test_close_when_never_opened_is_noop() {
        let mut host = ModalHost::new();
        host.close(None);
        assert!(!host.is_open());
    }

    #[tokio::test]
    async fn test_ticket_resolves_none_when_host_dropped() {
        let mut host = ModalHost::new();
        let ticket = host
            .open("ContactPanel", PanelParams::new(), PanelOptions::default())
            .unwrap();
        drop(host);

        assert_eq!(ticket.wait().await, None);
    }

    #[tokio::test]
    async fn test_listeners_fire_on_transitions() {
        let mut host = ModalHost::new();
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        host.subscribe(move || counter.set(counter.get() + 1));

        let _ticket = host
            .open("ContactPanel", PanelParams::new(), PanelOptions::default())
            .unwrap();
        host.close(None);
        // Closed-state close is a no-op and does not re-notify
        host.close(None);

        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_session_state() {
        let mut host = ModalHost::new();
        let params = PanelParams::new()
            .with("mode", ParamValue::Text("edit".to_string()))
            .with("row", ParamValue::Int(4));
        let _ticket = host
            .open("ContactPanel", params, PanelOptions::default())
            .unwrap();

        let session = host.session().unwrap();
        assert_eq!(session.component, "ContactPanel");
        assert_eq!(session.params.text("mode"), Some("edit"));
        assert_eq!(session.params.int("row"), Some(4));
        assert!(!session.is_editing);
        assert!(!session.is_custom_dialog_open());

        host.session_mut().unwrap().is_editing = true;
        assert!(host.session().unwrap().is_editing);
    }

    #[test]
    fn test_options_defaults_and_deserialization() {
        let options = PanelOptions::default();
        assert!(options.close_on_save);
        assert!(options.title.is_none());

        let parsed: PanelOptions =
            serde_json::from_str(r#"{"close_on_save": false}"#).unwrap();
        assert!(!parsed.close_on_save);
    }
}
