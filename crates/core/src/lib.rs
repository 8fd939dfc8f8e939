//! WebDriver BiDi values with WebDriver Classic compatibility.
//!
//! Facade over the workspace crates:
//!
//! - [`protocol`]: wire shapes shared by both protocol generations
//!   (identifier keys, browsing context arguments, subscription payloads)
//! - [`runtime`]: remote value deserialization and the Classic wire codec
//! - [`actions`]: async action dispatch, currently `bidi.session.subscribe`
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wdb::{HostValue, ReferenceStore, Session, StoreSession, codec, deserialize};
//!
//! let node = deserialize(&serde_json::json!({"type": "node", "sharedId": "abc"}))?;
//! let bytes = codec::encode(&node)?; // {"element-6066-11e4-a52e-4f735466cecf":"abc"}
//!
//! let session: Arc<dyn Session> = Arc::new(StoreSession::new("s1", ReferenceStore::new()));
//! let value = codec::decode(br#"{"a":[1,2]}"#, &session)?;
//! ```

pub mod actions;

pub use wdb_protocol as protocol;
pub use wdb_protocol::{
	BrowsingContextArgument, ReferenceKind, SESSION_SUBSCRIBE_ACTION, SubscribeParams, WindowProxyRemoteValue,
};
pub use wdb_runtime as runtime;
pub use wdb_runtime::{
	ClassicReference, ClassicSerializable, CodecConfig, Error, HostValue, LiveObject, Mapping, NodeReference,
	ReferenceStore, RemoteNumber, RemoteValue, Result, Session, StoreSession, WindowReference, codec, deserialize,
	deserialize_remote, remote_value, serialize,
};
