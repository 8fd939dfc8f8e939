//! Shared test doubles.

#![allow(dead_code)]

use std::sync::{Arc, Once};

use parking_lot::Mutex;
use serde_json::{Value, json};
use wdb::actions::{BidiEventsProtocol, BoxFut};
use wdb::{Error, ReferenceKind, ReferenceStore, Result, Session, StoreSession};

/// Installs a test-writer subscriber once per binary.
pub fn init_tracing() {
	static INIT: Once = Once::new();
	INIT.call_once(|| {
		let _ = tracing_subscriber::fmt()
			.with_test_writer()
			.with_max_level(tracing::Level::TRACE)
			.try_init();
	});
}

/// One recorded `session.subscribe` call.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscribeCall {
	pub events: Vec<String>,
	pub contexts: Option<Vec<String>>,
}

/// Transport double that records calls and answers with a canned result.
pub struct RecordingProtocol {
	calls: Mutex<Vec<SubscribeCall>>,
	response: Mutex<Option<Result<Value>>>,
}

impl RecordingProtocol {
	pub fn new() -> Self {
		Self {
			calls: Mutex::new(Vec::new()),
			response: Mutex::new(None),
		}
	}

	/// Makes the next call fail with a transport error.
	pub fn fail_next(&self, message: &str) {
		*self.response.lock() = Some(Err(Error::Transport(message.to_string())));
	}

	/// Makes the next call succeed with `value`.
	pub fn respond_with(&self, value: Value) {
		*self.response.lock() = Some(Ok(value));
	}

	pub fn calls(&self) -> Vec<SubscribeCall> {
		self.calls.lock().clone()
	}
}

impl BidiEventsProtocol for RecordingProtocol {
	fn subscribe<'a>(&'a self, events: Vec<String>, contexts: Option<Vec<String>>) -> BoxFut<'a, Result<Value>> {
		Box::pin(async move {
			self.calls.lock().push(SubscribeCall { events, contexts });
			let response = self.response.lock().take();
			response.unwrap_or_else(|| Ok(json!({"subscription": "sub-1"})))
		})
	}
}

/// Live object registered in a test session.
#[derive(Debug, PartialEq)]
pub struct FakeElement(pub &'static str);

/// Session knowing one object of each reference kind.
pub fn session() -> Arc<dyn Session> {
	let store = ReferenceStore::new();
	store.insert(ReferenceKind::Element, "el-1", Arc::new(FakeElement("button")));
	store.insert(ReferenceKind::Frame, "frame-1", Arc::new(FakeElement("iframe")));
	store.insert(ReferenceKind::ShadowRoot, "shadow-1", Arc::new(FakeElement("shadow")));
	store.insert(ReferenceKind::Window, "ctx-1", Arc::new(FakeElement("window")));
	Arc::new(StoreSession::new("session-1", store))
}
