//! Conversion between BiDi remote values and host values.
//!
//! [`deserialize`] keeps `node` and `window` values as reference wrappers so
//! they can later be re-encoded for Classic; every other supported tag
//! becomes a plain host value. [`serialize`] is the inverse.

use serde_json::{Number, Value};

use crate::config::CodecConfig;
use crate::error::{Error, Result};
use crate::remote_value::{self, RemoteNumber, RemoteValue};
use crate::value::{HostValue, Mapping, host_number, parse_bigint};

/// Deserializes a raw BiDi value with the default config.
pub fn deserialize(payload: &Value) -> Result<HostValue> {
	deserialize_with(payload, &CodecConfig::default())
}

/// Deserializes a raw BiDi value.
///
/// Duplicate object keys (under [`HostValue::same_value_zero`]) resolve
/// last-write-wins; see [`Mapping`].
///
/// # Errors
///
/// Everything [`remote_value::parse_with`] reports, plus
/// [`Error::MalformedBigInt`] for `bigint` digits that do not parse.
pub fn deserialize_with(payload: &Value, config: &CodecConfig) -> Result<HostValue> {
	let remote = remote_value::parse_with(payload, config)?;
	deserialize_remote(remote)
}

/// Converts an already classified remote value.
pub fn deserialize_remote(remote: RemoteValue) -> Result<HostValue> {
	Ok(match remote {
		RemoteValue::Undefined => HostValue::Undefined,
		RemoteValue::Null => HostValue::Null,
		RemoteValue::String(s) => HostValue::String(s),
		RemoteValue::Number(number) => match number {
			RemoteNumber::Finite(n) => host_number(&n)?,
			RemoteNumber::NaN => HostValue::Float(f64::NAN),
			RemoteNumber::NegativeZero => HostValue::Float(-0.0),
			RemoteNumber::Infinity => HostValue::Float(f64::INFINITY),
			RemoteNumber::NegativeInfinity => HostValue::Float(f64::NEG_INFINITY),
		},
		RemoteValue::Boolean(b) => HostValue::Bool(b),
		RemoteValue::BigInt(digits) => HostValue::BigInt(parse_bigint(&digits)?),
		RemoteValue::Array(items) => HostValue::Array(
			items
				.into_iter()
				.map(deserialize_remote)
				.collect::<Result<Vec<_>>>()?,
		),
		RemoteValue::Object(pairs) => HostValue::Object(
			pairs
				.into_iter()
				.map(|(key, value)| Ok((deserialize_remote(key)?, deserialize_remote(value)?)))
				.collect::<Result<Mapping>>()?,
		),
		RemoteValue::Node(node) => HostValue::Node(node),
		RemoteValue::Window(window) => HostValue::Window(window),
	})
}

/// Serializes a host value to its BiDi form with the default config.
pub fn serialize(value: &HostValue) -> Result<RemoteValue> {
	serialize_with(value, &CodecConfig::default())
}

/// Serializes a host value to its BiDi form.
///
/// Integers that fit in 64 bits become `number`; [`HostValue::BigInt`]
/// becomes `bigint`. Reference wrappers yield their original payload.
///
/// # Errors
///
/// - [`Error::Unserializable`] for [`HostValue::Reference`], which has no
///   BiDi form
/// - [`Error::DepthLimit`] when nesting exceeds `config.max_depth`
pub fn serialize_with(value: &HostValue, config: &CodecConfig) -> Result<RemoteValue> {
	serialize_at(value, config, 0)
}

fn serialize_at(value: &HostValue, config: &CodecConfig, depth: usize) -> Result<RemoteValue> {
	Ok(match value {
		HostValue::Undefined => RemoteValue::Undefined,
		HostValue::Null => RemoteValue::Null,
		HostValue::Bool(b) => RemoteValue::Boolean(*b),
		HostValue::Int(i) => RemoteValue::Number(RemoteNumber::Finite(Number::from(*i))),
		HostValue::BigInt(big) => RemoteValue::BigInt(big.to_string()),
		HostValue::Float(f) => RemoteValue::Number(RemoteNumber::from_f64(*f)),
		HostValue::String(s) => RemoteValue::String(s.clone()),
		HostValue::Array(items) => {
			let depth = config.descend(depth)?;
			RemoteValue::Array(
				items
					.iter()
					.map(|item| serialize_at(item, config, depth))
					.collect::<Result<Vec<_>>>()?,
			)
		}
		HostValue::Object(mapping) => {
			let depth = config.descend(depth)?;
			RemoteValue::Object(
				mapping
					.iter()
					.map(|(key, value)| Ok((serialize_at(key, config, depth)?, serialize_at(value, config, depth)?)))
					.collect::<Result<Vec<_>>>()?,
			)
		}
		HostValue::Node(node) => RemoteValue::Node(node.clone()),
		HostValue::Window(window) => RemoteValue::Window(window.clone()),
		HostValue::Reference(reference) => {
			return Err(Error::Unserializable(format!(
				"{} reference {} exists only in WebDriver Classic",
				reference.kind(),
				reference.id()
			)));
		}
	})
}
