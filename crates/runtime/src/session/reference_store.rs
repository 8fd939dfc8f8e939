//! Thread-safe registry of live objects by Classic identifier.
//!
//! Uses [`DashMap`] for lock-free concurrent access, so a session can register
//! and evict objects while decoders read from other threads.

use std::sync::Arc;

use dashmap::DashMap;
use wdb_protocol::ReferenceKind;

use super::Session;
use crate::reference::LiveObject;

type Key = (ReferenceKind, Arc<str>);

/// Live objects keyed by reference kind and id.
#[derive(Default)]
pub struct ReferenceStore {
	objects: DashMap<Key, Arc<dyn LiveObject>>,
}

impl ReferenceStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers an object, replacing any previous one under the same key.
	pub fn insert(&self, kind: ReferenceKind, id: &str, object: Arc<dyn LiveObject>) {
		self.objects.insert((kind, Arc::from(id)), object);
	}

	pub fn remove(&self, kind: ReferenceKind, id: &str) -> Option<Arc<dyn LiveObject>> {
		self.objects
			.remove(&(kind, Arc::from(id)))
			.map(|(_, object)| object)
	}

	/// Synchronous lookup.
	pub fn get(&self, kind: ReferenceKind, id: &str) -> Option<Arc<dyn LiveObject>> {
		self.objects
			.get(&(kind, Arc::from(id)))
			.map(|entry| Arc::clone(entry.value()))
	}

	pub fn contains(&self, kind: ReferenceKind, id: &str) -> bool {
		self.objects.contains_key(&(kind, Arc::from(id)))
	}

	pub fn len(&self) -> usize {
		self.objects.len()
	}

	pub fn is_empty(&self) -> bool {
		self.objects.is_empty()
	}
}

/// [`Session`] answering lookups from a [`ReferenceStore`].
pub struct StoreSession {
	id: String,
	references: ReferenceStore,
}

impl StoreSession {
	pub fn new(id: impl Into<String>, references: ReferenceStore) -> Self {
		Self {
			id: id.into(),
			references,
		}
	}

	/// Registry backing this session.
	pub fn references(&self) -> &ReferenceStore {
		&self.references
	}
}

impl Session for StoreSession {
	fn session_id(&self) -> &str {
		&self.id
	}

	fn resolve_reference(&self, kind: ReferenceKind, id: &str) -> Option<Arc<dyn LiveObject>> {
		self.references.get(kind, id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_is_scoped_by_kind() {
		let store = ReferenceStore::new();
		store.insert(ReferenceKind::Element, "id-1", Arc::new(1u32));

		assert!(store.contains(ReferenceKind::Element, "id-1"));
		assert!(!store.contains(ReferenceKind::Frame, "id-1"));
		assert!(store.get(ReferenceKind::ShadowRoot, "id-1").is_none());
	}

	#[test]
	fn insert_replaces_and_remove_evicts() {
		let store = ReferenceStore::new();
		store.insert(ReferenceKind::Window, "w", Arc::new(1u32));
		store.insert(ReferenceKind::Window, "w", Arc::new(2u32));
		assert_eq!(store.len(), 1);

		let removed = store.remove(ReferenceKind::Window, "w").unwrap();
		assert_eq!(removed.downcast_arc::<u32>().ok().as_deref(), Some(&2));
		assert!(store.is_empty());
		assert!(store.remove(ReferenceKind::Window, "w").is_none());
	}

	#[test]
	fn store_session_resolves_through_registry() {
		let session = StoreSession::new("session-1", ReferenceStore::new());
		assert!(session.resolve_reference(ReferenceKind::Frame, "f").is_none());

		session.references().insert(ReferenceKind::Frame, "f", Arc::new("frame"));
		assert!(session.resolve_reference(ReferenceKind::Frame, "f").is_some());
		assert_eq!(session.session_id(), "session-1");
	}
}
