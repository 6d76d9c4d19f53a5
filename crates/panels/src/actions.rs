//! Action dispatcher
//!
//! Lists a model's view actions (reserved lifecycle names excluded, ordered
//! by declared order with discovery-order ties) and dispatches invocations
//! by arity tag. Actions flagged with a custom component are not invoked;
//! the dispatcher reports that a nested dialog should open instead, and the
//! panel lifecycle controller flips the session state.
//!
//! Dispatch errors are deliberately not caught here: the lifecycle
//! controller owns converting them into user-visible error entries.

use formkit_core::{FieldValue, FormResult};
use formkit_schema::{ActionArity, PanelModel, ViewActionDescriptor, is_reserved_action};

/// Result of dispatching one view action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The delegate ran to completion; carries the action name so the host
    /// page can react (refresh, toast, ...)
    Invoked { action: String },
    /// The action is flagged with a custom component; the caller should
    /// open it as nested dialog content instead of calling the delegate
    OpenCustomDialog { component: String, action: String },
}

/// List the model's invocable view actions in render order
///
/// Reserved lifecycle names (Save/Cancel/Delete) never appear here; they
/// have dedicated handling. Ordering is by declared `order`, ties broken by
/// discovery order.
pub fn list_actions(model: &dyn PanelModel) -> Vec<ViewActionDescriptor> {
    let mut actions: Vec<ViewActionDescriptor> = model
        .view_actions()
        .into_iter()
        .filter(|action| !is_reserved_action(&action.name))
        .collect();
    // Stable sort keeps discovery order for equal weights
    actions.sort_by_key(|action| action.order);
    actions
}

/// Dispatch one view action against the model
///
/// `Arg` actions invoked without an explicit argument receive the declared
/// default for their argument type.
pub async fn dispatch(
    action: &ViewActionDescriptor,
    model: &mut dyn PanelModel,
    arg: Option<FieldValue>,
) -> FormResult<DispatchOutcome> {
    if let Some(component) = &action.custom_component {
        return Ok(DispatchOutcome::OpenCustomDialog {
            component: component.clone(),
            action: action.name.clone(),
        });
    }

    match &action.arity {
        ActionArity::NoArg => {
            model.invoke_view_action(&action.name, None).await?;
        }
        ActionArity::Arg { default } => {
            let supplied = arg.unwrap_or_else(|| default.clone());
            model
                .invoke_view_action(&action.name, Some(supplied))
                .await?;
        }
    }

    Ok(DispatchOutcome::Invoked {
        action: action.name.clone(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use formkit_core::{FieldType, FormError};
    use formkit_schema::ErrorList;

    #[derive(Default)]
    struct Device {
        invoked: Vec<(String, Option<FieldValue>)>,
        fail_next: bool,
        errors: ErrorList,
    }

    #[async_trait(?Send)]
    impl PanelModel for Device {
        fn field_value(&self, _name: &str) -> FieldValue {
            FieldValue::Null
        }

        fn set_field_value(&mut self, _name: &str, _value: FieldValue) -> bool {
            false
        }

        fn view_actions(&self) -> Vec<ViewActionDescriptor> {
            vec![
                ViewActionDescriptor::new("Restart", 2),
                ViewActionDescriptor::new("save", 0),
                ViewActionDescriptor::new("Calibrate", 1).expects_arg(FieldType::Integer),
                ViewActionDescriptor::new("Diagnose", 1),
                ViewActionDescriptor::new("Firmware", 3).with_custom_component("FirmwarePicker"),
            ]
        }

        async fn invoke_view_action(
            &mut self,
            name: &str,
            arg: Option<FieldValue>,
        ) -> FormResult<()> {
            if self.fail_next {
                return Err(FormError::action_failed(name, "device offline"));
            }
            self.invoked.push((name.to_string(), arg));
            Ok(())
        }

        fn push_error(&mut self, message: String) {
            self.errors.push(message);
        }

        fn errors(&self) -> &[String] {
            self.errors.as_slice()
        }

        fn clear_errors(&mut self) {
            self.errors.clear();
        }
    }

    #[test]
    fn test_list_excludes_reserved_and_orders() {
        let model = Device::default();
        let actions = list_actions(&model);

        let names: Vec<&str> = actions.iter().map(|a| a.name.as_str()).collect();
        // "save" filtered; order weights win; ties keep discovery order
        assert_eq!(names, vec!["Calibrate", "Diagnose", "Restart", "Firmware"]);
    }

    #[tokio::test]
    async fn test_dispatch_no_arg() {
        let mut model = Device::default();
        let action = ViewActionDescriptor::new("Restart", 0);

        let outcome = dispatch(&action, &mut model, None).await.unwrap();
        assert_eq!(
            outcome,
            DispatchOutcome::Invoked {
                action: "Restart".to_string()
            }
        );
        assert_eq!(model.invoked, vec![("Restart".to_string(), None)]);
    }

    #[tokio::test]
    async fn test_dispatch_supplies_default_arg() {
        let mut model = Device::default();
        let action = ViewActionDescriptor::new("Calibrate", 0).expects_arg(FieldType::Integer);

        dispatch(&action, &mut model, None).await.unwrap();
        assert_eq!(
            model.invoked,
            vec![("Calibrate".to_string(), Some(FieldValue::Int(0)))]
        );
    }

    #[tokio::test]
    async fn test_dispatch_explicit_arg_wins() {
        let mut model = Device::default();
        let action = ViewActionDescriptor::new("Calibrate", 0).expects_arg(FieldType::Integer);

        dispatch(&action, &mut model, Some(FieldValue::Int(7)))
            .await
            .unwrap();
        assert_eq!(
            model.invoked,
            vec![("Calibrate".to_string(), Some(FieldValue::Int(7)))]
        );
    }

    #[tokio::test]
    async fn test_custom_component_skips_delegate() {
        let mut model = Device::default();
        let action =
            ViewActionDescriptor::new("Firmware", 0).with_custom_component("FirmwarePicker");

        let outcome = dispatch(&action, &mut model, None).await.unwrap();
        assert_eq!(
            outcome,
            DispatchOutcome::OpenCustomDialog {
                component: "FirmwarePicker".to_string(),
                action: "Firmware".to_string()
            }
        );
        assert!(model.invoked.is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_errors_propagate() {
        let mut model = Device {
            fail_next: true,
            ..Default::default()
        };
        let action = ViewActionDescriptor::new("Restart", 0);

        let err = dispatch(&action, &mut model, None).await.unwrap_err();
        assert!(err.is_action());
        // Nothing was recorded on the model; conversion to error entries is
        // the lifecycle controller's job
        assert!(model.errors().is_empty());
    }
}
