//! Action plumbing: the transport seam and the per-action contract.

use std::future::Future;
use std::pin::Pin;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Result;

/// Boxing alias: stable async in trait without `async_trait`.
pub type BoxFut<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// BiDi transport, as seen by async actions.
///
/// Implemented outside this crate by whatever owns the WebSocket (or a test
/// double). Results are passed back to the caller unmodified.
pub trait BidiEventsProtocol: Send + Sync {
	/// Sends `session.subscribe`.
	///
	/// `contexts` is [`None`] for a global subscription, otherwise bare
	/// browsing context ids in caller order.
	fn subscribe<'a>(&'a self, events: Vec<String>, contexts: Option<Vec<String>>) -> BoxFut<'a, Result<Value>>;
}

/// Canonical action trait. Each action module becomes
/// `pub struct XxxAction; impl ActionDef for XxxAction { ... }`
pub trait ActionDef: 'static {
	/// Name the executor looks the action up by.
	const NAME: &'static str;

	/// Validated payload shape.
	type Payload: DeserializeOwned;

	/// Runs the action against the transport.
	fn handle<'a>(payload: Self::Payload, protocol: &'a dyn BidiEventsProtocol) -> BoxFut<'a, Result<Value>>;
}
