//! WebDriver BiDi runtime - Value conversion and Classic wire codec
//!
//! This crate turns wire payloads into host values and back:
//!
//! - **Remote values**: Classifying BiDi `RemoteValue` payloads by tag
//! - **Deserializer**: Remote values to host values, keeping `node` and
//!   `window` as reference wrappers
//! - **Classic codec**: Host values to WebDriver Classic JSON and back,
//!   resolving web references against a session
//! - **Reference registry**: Live objects by Classic identifier
//!
//! # Architecture
//!
//! ```text
//! BiDi JSON ──remote_value::parse──▶ RemoteValue ──deserialize──▶ HostValue
//!                                                                   │  ▲
//!                                                    codec::encode  │  │ codec::decode
//!                                                                   ▼  │   (Session)
//!                                                             Classic JSON
//! ```
//!
//! # Decoupling via Session
//!
//! The decoder resolves identifiers through the [`Session`] trait instead of
//! a concrete browser session, so the codec never owns live objects.
//! [`StoreSession`] is a ready-made implementation backed by a
//! [`ReferenceStore`].

pub mod codec;
pub mod config;
pub mod deserialize;
pub mod error;
pub mod reference;
pub mod remote_value;
pub mod session;
pub mod value;

// Re-export key types at crate root
pub use config::{CodecConfig, DEFAULT_MAX_DEPTH};
pub use deserialize::{deserialize, deserialize_remote, deserialize_with, serialize, serialize_with};
pub use error::{Error, Result};
pub use reference::{
	ClassicReference, ClassicSerializable, LiveObject, NodeReference, WindowReference, classic_identifier,
};
pub use remote_value::{RemoteNumber, RemoteValue};
pub use session::{ReferenceStore, Session, StoreSession};
pub use value::{HostValue, Mapping};
