//! Remote reference wrappers.
//!
//! Two families of references flow through the codec:
//!
//! - BiDi wrappers ([`NodeReference`], [`WindowReference`]) produced by the
//!   deserializer. They keep the original remote value untouched; projecting
//!   them to Classic is a read of that payload, never a reconstruction.
//! - [`ClassicReference`], produced by the Classic decoder once a web
//!   reference identifier has been resolved against a [`Session`].
//!
//! All of them implement [`ClassicSerializable`], which is the only path the
//! encoder uses to turn a reference into wire JSON.

use std::fmt;
use std::sync::Arc;

use downcast_rs::{DowncastSync, impl_downcast};
use serde_json::{Map, Value};
use wdb_protocol::{ReferenceKind, WindowProxyRemoteValue};

use crate::error::{Error, Result};
use crate::session::Session;

/// Objects that can be serialized to the WebDriver Classic protocol.
pub trait ClassicSerializable {
	/// Capability of the Classic reference this object projects to.
	fn classic_kind(&self) -> ReferenceKind;

	/// Opaque id placed under the identifier key.
	fn classic_id(&self) -> &str;

	/// Returns the single-entry Classic reference object.
	fn to_classic_value(&self) -> Value {
		let mut map = Map::with_capacity(1);
		map.insert(
			self.classic_kind().identifier().to_string(),
			Value::String(self.classic_id().to_string()),
		);
		Value::Object(map)
	}
}

/// Live object a session hands back for a resolved reference.
///
/// Any `Send + Sync + 'static` type qualifies; callers recover the concrete
/// type through [`ClassicReference::target`].
pub trait LiveObject: DowncastSync {}
impl_downcast!(sync LiveObject);

impl<T: Send + Sync + 'static> LiveObject for T {}

/// BiDi `node` remote value.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeReference {
	shared_id: String,
	remote_value: Value,
}

impl NodeReference {
	/// Wraps a `node` remote value.
	///
	/// # Errors
	///
	/// Returns [`Error::MissingField`] if `sharedId` is absent or not a string,
	/// and [`Error::UnsupportedValue`] if the payload is not tagged `"node"`.
	pub fn from_remote_value(remote_value: Value) -> Result<Self> {
		if remote_value.get("type").and_then(Value::as_str) != Some("node") {
			return Err(Error::unsupported(&remote_value));
		}
		let shared_id = remote_value
			.get("sharedId")
			.and_then(Value::as_str)
			.ok_or(Error::MissingField {
				tag: "node",
				field: "sharedId",
			})?
			.to_string();
		Ok(Self {
			shared_id,
			remote_value,
		})
	}

	/// Session-scoped id of the node.
	pub fn shared_id(&self) -> &str {
		&self.shared_id
	}

	/// Original remote value, exactly as received.
	pub fn remote_value(&self) -> &Value {
		&self.remote_value
	}

	pub fn into_remote_value(self) -> Value {
		self.remote_value
	}
}

impl ClassicSerializable for NodeReference {
	fn classic_kind(&self) -> ReferenceKind {
		ReferenceKind::Element
	}

	fn classic_id(&self) -> &str {
		&self.shared_id
	}
}

/// BiDi `window` remote value.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowReference {
	context: String,
	remote_value: Value,
}

impl WindowReference {
	/// Wraps a `window` remote value.
	///
	/// # Errors
	///
	/// Returns [`Error::MissingField`] if `value.context` is absent or not a
	/// string.
	pub fn from_remote_value(remote_value: Value) -> Result<Self> {
		let window = WindowProxyRemoteValue::from_json(&remote_value).ok_or(Error::MissingField {
			tag: "window",
			field: "context",
		})?;
		Ok(Self {
			context: window.value.context,
			remote_value,
		})
	}

	/// Browsing context id of the window.
	pub fn browsing_context(&self) -> &str {
		&self.context
	}

	/// Original remote value, exactly as received.
	pub fn remote_value(&self) -> &Value {
		&self.remote_value
	}

	pub fn into_remote_value(self) -> Value {
		self.remote_value
	}
}

impl ClassicSerializable for WindowReference {
	fn classic_kind(&self) -> ReferenceKind {
		ReferenceKind::Window
	}

	fn classic_id(&self) -> &str {
		&self.context
	}
}

/// Finds the Classic identifier carried by a JSON object.
///
/// Keys are checked in [`ReferenceKind::ALL`] order. Returns `Ok(None)` for a
/// plain object.
///
/// # Errors
///
/// - [`Error::AmbiguousReference`] if more than one identifier key is present
/// - [`Error::MalformedReference`] if the id is not a string
pub fn classic_identifier(payload: &Map<String, Value>) -> Result<Option<(ReferenceKind, &str)>> {
	let mut found: Option<(ReferenceKind, &Value)> = None;
	for kind in ReferenceKind::ALL {
		let Some(id) = payload.get(kind.identifier()) else {
			continue;
		};
		if let Some((first, _)) = found {
			return Err(Error::AmbiguousReference {
				first,
				second: kind,
			});
		}
		found = Some((kind, id));
	}

	found
		.map(|(kind, id)| {
			id.as_str()
				.map(|id| (kind, id))
				.ok_or(Error::MalformedReference { kind })
		})
		.transpose()
}

/// Classic web reference resolved against a session.
#[derive(Clone)]
pub struct ClassicReference {
	kind: ReferenceKind,
	id: String,
	session: Arc<dyn Session>,
	target: Arc<dyn LiveObject>,
}

impl ClassicReference {
	/// Resolves `id` against `session`.
	///
	/// # Errors
	///
	/// Returns [`Error::UnknownReference`] if the session has no live object
	/// for this kind and id.
	pub fn resolve(kind: ReferenceKind, id: impl Into<String>, session: &Arc<dyn Session>) -> Result<Self> {
		let id = id.into();
		let target = session
			.resolve_reference(kind, &id)
			.ok_or_else(|| Error::UnknownReference {
				kind,
				id: id.clone(),
			})?;
		tracing::trace!(%kind, id = %id, session = session.session_id(), "resolved classic reference");
		Ok(Self {
			kind,
			id,
			session: Arc::clone(session),
			target,
		})
	}

	/// Resolves a raw Classic payload, returning `Ok(None)` when it carries no
	/// identifier key.
	pub fn from_classic_value(payload: &Map<String, Value>, session: &Arc<dyn Session>) -> Result<Option<Self>> {
		classic_identifier(payload)?
			.map(|(kind, id)| Self::resolve(kind, id, session))
			.transpose()
	}

	pub fn kind(&self) -> ReferenceKind {
		self.kind
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	/// Session owning this reference.
	pub fn session(&self) -> &Arc<dyn Session> {
		&self.session
	}

	/// Live object the session resolved, if it has type `T`.
	pub fn target<T: LiveObject>(&self) -> Option<Arc<T>> {
		Arc::clone(&self.target).downcast_arc::<T>().ok()
	}
}

impl ClassicSerializable for ClassicReference {
	fn classic_kind(&self) -> ReferenceKind {
		self.kind
	}

	fn classic_id(&self) -> &str {
		&self.id
	}
}

impl PartialEq for ClassicReference {
	fn eq(&self, other: &Self) -> bool {
		self.kind == other.kind
			&& self.id == other.id
			&& self.session.session_id() == other.session.session_id()
	}
}

impl fmt::Debug for ClassicReference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ClassicReference")
			.field("kind", &self.kind)
			.field("id", &self.id)
			.field("session", &self.session.session_id())
			.finish()
	}
}
