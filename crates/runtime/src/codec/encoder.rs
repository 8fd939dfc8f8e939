//! Host value to Classic JSON.

use std::str::FromStr;

use serde_json::{Map, Number, Value};

use crate::config::CodecConfig;
use crate::error::{Error, Result};
use crate::reference::ClassicSerializable;
use crate::value::{HostValue, Mapping};

/// Encodes a host value to Classic JSON bytes with the default config.
pub fn encode(value: &HostValue) -> Result<Vec<u8>> {
	encode_with(value, &CodecConfig::default())
}

/// Encodes a host value to Classic JSON bytes.
pub fn encode_with(value: &HostValue, config: &CodecConfig) -> Result<Vec<u8>> {
	let json = encode_value_with(value, config)?;
	serde_json::to_vec(&json).map_err(|e| Error::Unencodable(e.to_string()))
}

/// Encodes a host value to a Classic JSON tree with the default config.
pub fn encode_value(value: &HostValue) -> Result<Value> {
	encode_value_with(value, &CodecConfig::default())
}

/// Encodes a host value to a Classic JSON tree.
///
/// [`HostValue::Undefined`] is written as `null`, Classic having no separate
/// undefined. Object keys must be strings or primitives; primitives are
/// written in their JSON text form.
///
/// # Errors
///
/// - [`Error::Unencodable`] for non-finite floats, container or reference
///   keys, and distinct keys that share one JSON text form (`1` and `"1"`)
/// - [`Error::DepthLimit`] when nesting exceeds `config.max_depth`
pub fn encode_value_with(value: &HostValue, config: &CodecConfig) -> Result<Value> {
	encode_at(value, config, 0)
}

fn encode_at(value: &HostValue, config: &CodecConfig, depth: usize) -> Result<Value> {
	Ok(match value {
		HostValue::Undefined | HostValue::Null => Value::Null,
		HostValue::Bool(b) => Value::Bool(*b),
		HostValue::Int(i) => Value::Number(Number::from(*i)),
		HostValue::BigInt(big) => Value::Number(
			Number::from_str(&big.to_string()).map_err(|e| Error::Unencodable(e.to_string()))?,
		),
		HostValue::Float(f) => Value::Number(finite(*f)?),
		HostValue::String(s) => Value::String(s.clone()),
		HostValue::Array(items) => {
			let depth = config.descend(depth)?;
			Value::Array(
				items
					.iter()
					.map(|item| encode_at(item, config, depth))
					.collect::<Result<Vec<_>>>()?,
			)
		}
		HostValue::Object(mapping) => {
			let depth = config.descend(depth)?;
			match raw_node_shared_id(mapping) {
				Some(shared_id) => {
					tracing::trace!("rewriting raw BiDi node as a Classic element reference");
					let mut map = Map::with_capacity(1);
					map.insert(
						wdb_protocol::ELEMENT_IDENTIFIER.to_string(),
						encode_at(shared_id, config, depth)?,
					);
					Value::Object(map)
				}
				None => {
					let mut map = Map::with_capacity(mapping.len());
					for (key, value) in mapping.iter() {
						let name = object_key(key)?;
						if map.contains_key(&name) {
							return Err(Error::Unencodable(format!(
								"{key:?} collides with an earlier key as Classic object key \"{name}\""
							)));
						}
						map.insert(name, encode_at(value, config, depth)?);
					}
					Value::Object(map)
				}
			}
		}
		HostValue::Node(node) => node.to_classic_value(),
		HostValue::Window(window) => window.to_classic_value(),
		HostValue::Reference(reference) => reference.to_classic_value(),
	})
}

/// Returns the `sharedId` of a mapping shaped like a BiDi `node` value.
///
/// Callers may hand the encoder raw BiDi payloads that were never wrapped
/// into a [`NodeReference`](crate::reference::NodeReference); those still
/// encode as element references.
fn raw_node_shared_id(mapping: &Mapping) -> Option<&HostValue> {
	if mapping.get_str("type").and_then(HostValue::as_str) != Some("node") {
		return None;
	}
	mapping.get_str("sharedId")
}

fn finite(value: f64) -> Result<Number> {
	Number::from_f64(value).ok_or_else(|| Error::Unencodable(format!("{value} has no JSON representation")))
}

fn object_key(key: &HostValue) -> Result<String> {
	match key {
		HostValue::String(s) => Ok(s.clone()),
		HostValue::Int(i) => Ok(i.to_string()),
		HostValue::BigInt(big) => Ok(big.to_string()),
		HostValue::Float(f) => finite(*f).map(|n| n.to_string()),
		HostValue::Bool(b) => Ok(b.to_string()),
		HostValue::Null => Ok("null".to_string()),
		other => Err(Error::Unencodable(format!("{other:?} cannot be used as an object key"))),
	}
}
