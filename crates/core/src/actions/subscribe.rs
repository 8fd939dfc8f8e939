//! `bidi.session.subscribe`: normalize browsing context arguments and forward.

use serde_json::Value;
use wdb_protocol::{BrowsingContextArgument, SESSION_SUBSCRIBE_ACTION, SubscribeParams};

use super::def::{ActionDef, BidiEventsProtocol, BoxFut};
use crate::Result;

pub struct SessionSubscribeAction;

impl SessionSubscribeAction {
	/// Reduces each context argument to its bare id, keeping input order.
	///
	/// Duplicates are forwarded as given.
	pub fn normalize_contexts(contexts: &[BrowsingContextArgument]) -> Vec<String> {
		contexts
			.iter()
			.map(|argument| argument.context_id().to_string())
			.collect()
	}
}

impl ActionDef for SessionSubscribeAction {
	const NAME: &'static str = SESSION_SUBSCRIBE_ACTION;

	type Payload = SubscribeParams;

	fn handle<'a>(payload: SubscribeParams, protocol: &'a dyn BidiEventsProtocol) -> BoxFut<'a, Result<Value>> {
		let SubscribeParams { events, contexts } = payload;
		let contexts = contexts.as_deref().map(Self::normalize_contexts);

		Box::pin(async move {
			tracing::debug!(
				action = Self::NAME,
				events = ?events,
				contexts = ?contexts,
				"forwarding session.subscribe"
			);
			protocol.subscribe(events, contexts).await
		})
	}
}
