//! Session collaborator interface.
//!
//! The session owns the registry of live objects behind Classic identifiers.
//! The codec only looks entries up; creating and evicting them is the
//! session's business.

mod reference_store;

use std::sync::Arc;

pub use reference_store::{ReferenceStore, StoreSession};
use wdb_protocol::ReferenceKind;

use crate::reference::LiveObject;

/// WebDriver session as seen by the Classic decoder.
pub trait Session: Send + Sync {
	/// Session id, used to tell references of different sessions apart.
	fn session_id(&self) -> &str;

	/// Returns the live object behind `id`, or [`None`] if the session does
	/// not know it.
	fn resolve_reference(&self, kind: ReferenceKind, id: &str) -> Option<Arc<dyn LiveObject>>;
}
