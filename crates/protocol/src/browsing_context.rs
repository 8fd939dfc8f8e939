//! Browsing context arguments.
//!
//! Commands that target browsing contexts accept either a bare context id or a
//! BiDi serialized window proxy. Both forms resolve to the same id string.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tag of a serialized window proxy (`"window"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowTag {
	Window,
}

/// Properties of a serialized window proxy.
///
/// <https://w3c.github.io/webdriver-bidi/#type-script-WindowProxyProperties>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowProxyProperties {
	/// Browsing context id of the window.
	pub context: String,
}

/// BiDi serialized window proxy.
///
/// <https://w3c.github.io/webdriver-bidi/#type-script-WindowProxyRemoteValue>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowProxyRemoteValue {
	#[serde(rename = "type")]
	pub tag: WindowTag,
	pub value: WindowProxyProperties,
}

impl WindowProxyRemoteValue {
	/// Creates a window proxy for the given browsing context.
	pub fn new(context: impl Into<String>) -> Self {
		Self {
			tag: WindowTag::Window,
			value: WindowProxyProperties {
				context: context.into(),
			},
		}
	}

	/// Reads a window proxy out of a raw payload.
	///
	/// Returns [`None`] when the payload is not tagged `"window"` or lacks a
	/// string `value.context`. Extra fields such as `handle` are ignored.
	pub fn from_json(payload: &Value) -> Option<Self> {
		Self::deserialize(payload).ok()
	}

	/// Browsing context id carried by this proxy.
	pub fn context(&self) -> &str {
		&self.value.context
	}
}

/// Browsing context argument: a context id or a serialized window proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BrowsingContextArgument {
	/// Bare browsing context id
	Id(String),
	/// Serialized window proxy
	Window(WindowProxyRemoteValue),
}

impl BrowsingContextArgument {
	/// Returns the browsing context id this argument designates.
	pub fn context_id(&self) -> &str {
		match self {
			BrowsingContextArgument::Id(id) => id,
			BrowsingContextArgument::Window(window) => window.context(),
		}
	}
}

impl From<&str> for BrowsingContextArgument {
	fn from(value: &str) -> Self {
		BrowsingContextArgument::Id(value.to_string())
	}
}

impl From<String> for BrowsingContextArgument {
	fn from(value: String) -> Self {
		BrowsingContextArgument::Id(value)
	}
}

impl From<WindowProxyRemoteValue> for BrowsingContextArgument {
	fn from(value: WindowProxyRemoteValue) -> Self {
		BrowsingContextArgument::Window(value)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn string_argument_is_its_own_id() {
		let arg: BrowsingContextArgument = serde_json::from_value(json!("ctx1")).unwrap();
		assert_eq!(arg.context_id(), "ctx1");
	}

	#[test]
	fn window_argument_yields_nested_context() {
		let arg: BrowsingContextArgument =
			serde_json::from_value(json!({"type": "window", "value": {"context": "ctx2"}})).unwrap();
		assert_eq!(arg, BrowsingContextArgument::Window(WindowProxyRemoteValue::new("ctx2")));
		assert_eq!(arg.context_id(), "ctx2");
	}

	#[test]
	fn window_without_context_is_rejected() {
		let result =
			serde_json::from_value::<BrowsingContextArgument>(json!({"type": "window", "value": {}}));
		assert!(result.is_err());
	}

	#[test]
	fn non_window_tag_is_rejected() {
		let result = serde_json::from_value::<BrowsingContextArgument>(
			json!({"type": "node", "value": {"context": "ctx"}}),
		);
		assert!(result.is_err());
	}

	#[test]
	fn from_json_ignores_extra_fields() {
		let payload = json!({"type": "window", "handle": "h1", "value": {"context": "abc"}});
		let window = WindowProxyRemoteValue::from_json(&payload).unwrap();
		assert_eq!(window.context(), "abc");
	}

	#[test]
	fn window_proxy_serializes_with_type_tag() {
		let json = serde_json::to_value(WindowProxyRemoteValue::new("abc")).unwrap();
		assert_eq!(json, json!({"type": "window", "value": {"context": "abc"}}));
	}
}
