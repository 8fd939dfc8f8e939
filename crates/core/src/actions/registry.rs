//! Action registry and generated dispatch glue.

/// The registry macro: generates an `ActionId` enum, `lookup_action`,
/// `action_name` and `run_action`.
///
/// Usage example:
/// ```rust
/// action_registry! {
///   SessionSubscribe => crate::actions::subscribe::SessionSubscribeAction,
/// }
/// ```
#[macro_export]
macro_rules! action_registry {
	(
		$(
			$id:ident => $ty:path
		),+ $(,)?
	) => {
		#[derive(Debug, Clone, Copy, PartialEq, Eq)]
		pub enum ActionId { $($id),+ }

		pub fn lookup_action(name: &str) -> Option<ActionId> {
			$(
				if name == <$ty as $crate::actions::def::ActionDef>::NAME {
					return Some(ActionId::$id);
				}
			)+
			None
		}

		pub fn action_name(id: ActionId) -> &'static str {
			match id {
				$(
					ActionId::$id => <$ty as $crate::actions::def::ActionDef>::NAME,
				)+
			}
		}

		/// Run an action by `ActionId`, returning the transport result untouched.
		///
		/// This function is the *only* place that deserializes `Payload`.
		pub async fn run_action(
			id: ActionId,
			payload: serde_json::Value,
			protocol: &dyn $crate::actions::def::BidiEventsProtocol,
		) -> $crate::Result<serde_json::Value> {
			match id {
				$(
					ActionId::$id => {
						type Action = $ty;

						let payload: <Action as $crate::actions::def::ActionDef>::Payload =
							serde_json::from_value(payload).map_err(|e| {
								$crate::Error::InvalidArgument(format!(
									"{}: {}",
									<Action as $crate::actions::def::ActionDef>::NAME,
									e
								))
							})?;

						<Action as $crate::actions::def::ActionDef>::handle(payload, protocol).await
					}
				)+
			}
		}
	};
}

action_registry! {
	SessionSubscribe => crate::actions::subscribe::SessionSubscribeAction,
}

/// Looks `name` up and runs it.
///
/// # Errors
///
/// Returns [`Error::UnknownAction`](crate::Error::UnknownAction) if no action
/// is registered under `name`, plus whatever [`run_action`] reports.
pub async fn dispatch_action(
	name: &str,
	payload: serde_json::Value,
	protocol: &dyn crate::actions::def::BidiEventsProtocol,
) -> crate::Result<serde_json::Value> {
	let id = lookup_action(name).ok_or_else(|| crate::Error::UnknownAction(name.to_string()))?;
	tracing::debug!(action = name, "dispatching async action");
	run_action(id, payload, protocol).await
}
