//! Classic JSON to host value.

use std::sync::Arc;

use serde_json::Value;

use crate::config::CodecConfig;
use crate::error::Result;
use crate::reference::ClassicReference;
use crate::session::Session;
use crate::value::{HostValue, Mapping, host_number};

/// Decodes Classic JSON bytes with the default config.
pub fn decode(bytes: &[u8], session: &Arc<dyn Session>) -> Result<HostValue> {
	decode_with(bytes, session, &CodecConfig::default())
}

/// Decodes Classic JSON bytes, resolving references against `session`.
///
/// # Errors
///
/// - [`Error::Parse`] if `bytes` is not valid JSON
/// - [`Error::UnknownReference`] if an identifier is not live in `session`
/// - [`Error::AmbiguousReference`] / [`Error::MalformedReference`] for
///   identifier objects that do not name exactly one string id
/// - [`Error::DepthLimit`] when nesting exceeds `config.max_depth`
///
/// [`Error::Parse`]: crate::Error::Parse
/// [`Error::UnknownReference`]: crate::Error::UnknownReference
/// [`Error::AmbiguousReference`]: crate::Error::AmbiguousReference
/// [`Error::MalformedReference`]: crate::Error::MalformedReference
/// [`Error::DepthLimit`]: crate::Error::DepthLimit
pub fn decode_with(bytes: &[u8], session: &Arc<dyn Session>, config: &CodecConfig) -> Result<HostValue> {
	let payload: Value = serde_json::from_slice(bytes)?;
	tracing::debug!(session = session.session_id(), bytes = bytes.len(), "decoding classic payload");
	let value = decode_value_with(&payload, session, config)?;
	tracing::debug!(session = session.session_id(), "decoded classic payload");
	Ok(value)
}

/// Decodes an already parsed Classic JSON tree with the default config.
pub fn decode_value(payload: &Value, session: &Arc<dyn Session>) -> Result<HostValue> {
	decode_value_with(payload, session, &CodecConfig::default())
}

/// Decodes an already parsed Classic JSON tree.
pub fn decode_value_with(payload: &Value, session: &Arc<dyn Session>, config: &CodecConfig) -> Result<HostValue> {
	decode_at(payload, session, config, 0)
}

fn decode_at(payload: &Value, session: &Arc<dyn Session>, config: &CodecConfig, depth: usize) -> Result<HostValue> {
	Ok(match payload {
		Value::Null => HostValue::Null,
		Value::Bool(b) => HostValue::Bool(*b),
		Value::Number(n) => host_number(n)?,
		Value::String(s) => HostValue::String(s.clone()),
		Value::Array(items) => {
			let depth = config.descend(depth)?;
			HostValue::Array(
				items
					.iter()
					.map(|item| decode_at(item, session, config, depth))
					.collect::<Result<Vec<_>>>()?,
			)
		}
		Value::Object(map) => {
			// Entries decode before the object is classified, so references
			// nested under an identifier object resolve too.
			let depth = config.descend(depth)?;
			let mut mapping = Mapping::with_capacity(map.len());
			for (key, value) in map {
				mapping.insert(HostValue::String(key.clone()), decode_at(value, session, config, depth)?);
			}
			match ClassicReference::from_classic_value(map, session)? {
				Some(reference) => HostValue::Reference(reference),
				None => HostValue::Object(mapping),
			}
		}
	})
}
