//! Parameters of the `session` module commands used by async actions.

use serde::{Deserialize, Serialize};

use crate::browsing_context::BrowsingContextArgument;

/// Name of the async action forwarding `session.subscribe`.
pub const SESSION_SUBSCRIBE_ACTION: &str = "bidi.session.subscribe";

/// Payload of the `bidi.session.subscribe` action.
///
/// `contexts` may be absent or `null`, both meaning "all browsing contexts".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeParams {
	/// Event names to subscribe to (may be empty).
	pub events: Vec<String>,
	/// Browsing contexts to restrict the subscription to.
	#[serde(default)]
	pub contexts: Option<Vec<BrowsingContextArgument>>,
}

impl SubscribeParams {
	/// Creates a subscription to `events` across all browsing contexts.
	pub fn new<I, S>(events: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			events: events.into_iter().map(Into::into).collect(),
			contexts: None,
		}
	}

	/// Restricts the subscription to the given browsing contexts.
	pub fn with_contexts<I, A>(mut self, contexts: I) -> Self
	where
		I: IntoIterator<Item = A>,
		A: Into<BrowsingContextArgument>,
	{
		self.contexts = Some(contexts.into_iter().map(Into::into).collect());
		self
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn missing_contexts_defaults_to_none() {
		let params: SubscribeParams = serde_json::from_value(json!({"events": ["log.entryAdded"]})).unwrap();
		assert_eq!(params.events, vec!["log.entryAdded"]);
		assert!(params.contexts.is_none());
	}

	#[test]
	fn missing_events_is_rejected() {
		let result = serde_json::from_value::<SubscribeParams>(json!({"contexts": null}));
		assert!(result.is_err());
	}

	#[test]
	fn builder_keeps_context_order() {
		let params = SubscribeParams::new(["a"]).with_contexts(["ctx2", "ctx1"]);
		let ids: Vec<_> = params
			.contexts
			.as_deref()
			.unwrap_or_default()
			.iter()
			.map(BrowsingContextArgument::context_id)
			.collect();
		assert_eq!(ids, ["ctx2", "ctx1"]);
	}
}
