//! BiDi remote values.
//!
//! [`RemoteValue`] is the closed set of tagged values this crate understands.
//! [`parse`] classifies raw JSON into it; anything outside the set (`date`,
//! `regexp`, `map`, `set`, future tags) is rejected instead of passed through.
//!
//! See <https://w3c.github.io/webdriver-bidi/#type-script-RemoteValue>.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value, json};

use crate::config::CodecConfig;
use crate::error::{Error, Result};
use crate::reference::{NodeReference, WindowReference};
use crate::value::is_integer_literal;

/// Payload of a `number` remote value.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteNumber {
	/// Numeric literal, kept exactly as written.
	Finite(Number),
	NaN,
	NegativeZero,
	Infinity,
	NegativeInfinity,
}

impl RemoteNumber {
	/// Maps a float to its wire form, using sentinel tokens where JSON has no
	/// literal.
	pub fn from_f64(value: f64) -> Self {
		if value.is_nan() {
			RemoteNumber::NaN
		} else if value == f64::INFINITY {
			RemoteNumber::Infinity
		} else if value == f64::NEG_INFINITY {
			RemoteNumber::NegativeInfinity
		} else if value == 0.0 && value.is_sign_negative() {
			RemoteNumber::NegativeZero
		} else {
			Number::from_f64(value).map_or(RemoteNumber::NaN, RemoteNumber::Finite)
		}
	}

	fn from_json(value: &Value) -> Option<Self> {
		match value {
			Value::Number(n) => Some(RemoteNumber::Finite(n.clone())),
			Value::String(token) => match token.as_str() {
				"NaN" => Some(RemoteNumber::NaN),
				"-0" => Some(RemoteNumber::NegativeZero),
				"Infinity" => Some(RemoteNumber::Infinity),
				"-Infinity" => Some(RemoteNumber::NegativeInfinity),
				_ => None,
			},
			_ => None,
		}
	}

	fn to_json(&self) -> Value {
		match self {
			RemoteNumber::Finite(n) => Value::Number(n.clone()),
			RemoteNumber::NaN => Value::from("NaN"),
			RemoteNumber::NegativeZero => Value::from("-0"),
			RemoteNumber::Infinity => Value::from("Infinity"),
			RemoteNumber::NegativeInfinity => Value::from("-Infinity"),
		}
	}
}

/// Tagged BiDi value.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteValue {
	Undefined,
	Null,
	String(String),
	Number(RemoteNumber),
	Boolean(bool),
	/// Decimal digits of an arbitrary-precision integer.
	BigInt(String),
	Array(Vec<RemoteValue>),
	/// Key/value pairs; keys are remote values too.
	Object(Vec<(RemoteValue, RemoteValue)>),
	Node(NodeReference),
	Window(WindowReference),
}

impl RemoteValue {
	/// Tag name used on the wire.
	pub fn tag(&self) -> &'static str {
		match self {
			RemoteValue::Undefined => "undefined",
			RemoteValue::Null => "null",
			RemoteValue::String(_) => "string",
			RemoteValue::Number(_) => "number",
			RemoteValue::Boolean(_) => "boolean",
			RemoteValue::BigInt(_) => "bigint",
			RemoteValue::Array(_) => "array",
			RemoteValue::Object(_) => "object",
			RemoteValue::Node(_) => "node",
			RemoteValue::Window(_) => "window",
		}
	}

	/// Renders the tagged JSON form.
	///
	/// String keys of objects are written bare, as remote ends do; references
	/// render as their original payload.
	pub fn to_json(&self) -> Value {
		match self {
			RemoteValue::Undefined | RemoteValue::Null => json!({ "type": self.tag() }),
			RemoteValue::String(s) => json!({ "type": "string", "value": s }),
			RemoteValue::Number(n) => json!({ "type": "number", "value": n.to_json() }),
			RemoteValue::Boolean(b) => json!({ "type": "boolean", "value": b }),
			RemoteValue::BigInt(digits) => json!({ "type": "bigint", "value": digits }),
			RemoteValue::Array(items) => {
				let items: Vec<Value> = items.iter().map(RemoteValue::to_json).collect();
				json!({ "type": "array", "value": items })
			}
			RemoteValue::Object(pairs) => {
				let pairs: Vec<Value> = pairs
					.iter()
					.map(|(key, value)| {
						let key = match key {
							RemoteValue::String(s) => Value::String(s.clone()),
							other => other.to_json(),
						};
						Value::Array(vec![key, value.to_json()])
					})
					.collect();
				json!({ "type": "object", "value": pairs })
			}
			RemoteValue::Node(node) => node.remote_value().clone(),
			RemoteValue::Window(window) => window.remote_value().clone(),
		}
	}
}

impl Serialize for RemoteValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		self.to_json().serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for RemoteValue {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let payload = Value::deserialize(deserializer)?;
		parse(&payload).map_err(D::Error::custom)
	}
}

/// Classifies raw JSON into a [`RemoteValue`] with the default config.
pub fn parse(payload: &Value) -> Result<RemoteValue> {
	parse_with(payload, &CodecConfig::default())
}

/// Classifies raw JSON into a [`RemoteValue`].
///
/// Bare JSON strings and integers are accepted anywhere a remote value is
/// expected and read as `string` / `number`.
///
/// # Errors
///
/// - [`Error::UnsupportedValue`] for a missing or unknown tag, or a payload of
///   the wrong shape
/// - [`Error::MissingField`] when a required `value`, `sharedId` or
///   `value.context` is absent
/// - [`Error::MalformedBigInt`] when a `bigint` payload is not a string or
///   integer
/// - [`Error::DepthLimit`] when nesting exceeds `config.max_depth`
pub fn parse_with(payload: &Value, config: &CodecConfig) -> Result<RemoteValue> {
	parse_at(payload, config, 0)
}

fn parse_at(payload: &Value, config: &CodecConfig, depth: usize) -> Result<RemoteValue> {
	let object = match payload {
		Value::String(s) => return Ok(RemoteValue::String(s.clone())),
		Value::Number(n) if is_integer_literal(n) => {
			return Ok(RemoteValue::Number(RemoteNumber::Finite(n.clone())));
		}
		Value::Object(object) => object,
		_ => return Err(Error::unsupported(payload)),
	};

	let tag = object
		.get("type")
		.and_then(Value::as_str)
		.ok_or_else(|| Error::unsupported(payload))?;

	match tag {
		"undefined" => Ok(RemoteValue::Undefined),
		"null" => Ok(RemoteValue::Null),
		"string" => match field(object, "string")? {
			Value::String(s) => Ok(RemoteValue::String(s.clone())),
			_ => Err(Error::unsupported(payload)),
		},
		"number" => RemoteNumber::from_json(field(object, "number")?)
			.map(RemoteValue::Number)
			.ok_or_else(|| Error::unsupported(payload)),
		"boolean" => Ok(RemoteValue::Boolean(is_truthy(field(object, "boolean")?))),
		"bigint" => match field(object, "bigint")? {
			Value::String(digits) => Ok(RemoteValue::BigInt(digits.clone())),
			Value::Number(n) if is_integer_literal(n) => Ok(RemoteValue::BigInt(n.to_string())),
			other => Err(Error::MalformedBigInt(other.to_string())),
		},
		"array" => {
			let items = field(object, "array")?
				.as_array()
				.ok_or_else(|| Error::unsupported(payload))?;
			let depth = config.descend(depth)?;
			items
				.iter()
				.map(|item| parse_at(item, config, depth))
				.collect::<Result<Vec<_>>>()
				.map(RemoteValue::Array)
		}
		"object" => {
			let pairs = field(object, "object")?
				.as_array()
				.ok_or_else(|| Error::unsupported(payload))?;
			let depth = config.descend(depth)?;
			pairs
				.iter()
				.map(|pair| match pair.as_array().map(Vec::as_slice) {
					Some([key, value]) => Ok((parse_at(key, config, depth)?, parse_at(value, config, depth)?)),
					_ => Err(Error::unsupported(pair)),
				})
				.collect::<Result<Vec<_>>>()
				.map(RemoteValue::Object)
		}
		"node" => NodeReference::from_remote_value(payload.clone()).map(RemoteValue::Node),
		"window" => WindowReference::from_remote_value(payload.clone()).map(RemoteValue::Window),
		_ => Err(Error::unsupported(payload)),
	}
}

fn field<'a>(object: &'a Map<String, Value>, tag: &'static str) -> Result<&'a Value> {
	object
		.get("value")
		.ok_or(Error::MissingField { tag, field: "value" })
}

/// Truthiness of a JSON value. Empty strings and empty containers are false.
fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		// Literals too large for `f64` are non-zero.
		Value::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(items) => !items.is_empty(),
		Value::Object(map) => !map.is_empty(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bare_string_and_integer_pass_through() {
		assert_eq!(parse(&json!("abc")).unwrap(), RemoteValue::String("abc".into()));
		assert!(matches!(
			parse(&json!(7)).unwrap(),
			RemoteValue::Number(RemoteNumber::Finite(_))
		));
	}

	#[test]
	fn bare_float_and_bool_are_unsupported() {
		assert!(matches!(parse(&json!(1.5)), Err(Error::UnsupportedValue(_))));
		assert!(matches!(parse(&json!(true)), Err(Error::UnsupportedValue(_))));
		assert!(matches!(parse(&json!(null)), Err(Error::UnsupportedValue(_))));
	}

	#[test]
	fn missing_tag_is_unsupported() {
		assert!(matches!(parse(&json!({"value": 1})), Err(Error::UnsupportedValue(_))));
	}

	#[test]
	fn unknown_tags_are_unsupported() {
		for tag in ["date", "regexp", "map", "set", "symbol"] {
			let err = parse(&json!({"type": tag, "value": "x"})).unwrap_err();
			assert!(matches!(err, Error::UnsupportedValue(_)), "{tag}: {err}");
		}
	}

	#[test]
	fn number_sentinels_are_recognized() {
		let cases = [
			("NaN", RemoteNumber::NaN),
			("-0", RemoteNumber::NegativeZero),
			("Infinity", RemoteNumber::Infinity),
			("-Infinity", RemoteNumber::NegativeInfinity),
		];
		for (token, expected) in cases {
			let parsed = parse(&json!({"type": "number", "value": token})).unwrap();
			assert_eq!(parsed, RemoteValue::Number(expected));
		}
	}

	#[test]
	fn number_with_other_string_is_unsupported() {
		let err = parse(&json!({"type": "number", "value": "12"})).unwrap_err();
		assert!(matches!(err, Error::UnsupportedValue(_)));
	}

	#[test]
	fn boolean_uses_truthiness() {
		let truthy = |v: Value| parse(&json!({"type": "boolean", "value": v})).unwrap();
		assert_eq!(truthy(json!(true)), RemoteValue::Boolean(true));
		assert_eq!(truthy(json!(0)), RemoteValue::Boolean(false));
		assert_eq!(truthy(json!("")), RemoteValue::Boolean(false));
		assert_eq!(truthy(json!("x")), RemoteValue::Boolean(true));
		assert_eq!(truthy(json!([])), RemoteValue::Boolean(false));
	}

	#[test]
	fn boolean_out_of_range_number_is_true() {
		let payload: Value = serde_json::from_str(r#"{"type": "boolean", "value": 1e400}"#).unwrap();
		assert_eq!(parse(&payload).unwrap(), RemoteValue::Boolean(true));

		let payload: Value = serde_json::from_str(r#"{"type": "boolean", "value": 0.0}"#).unwrap();
		assert_eq!(parse(&payload).unwrap(), RemoteValue::Boolean(false));
	}

	#[test]
	fn missing_value_is_reported() {
		let err = parse(&json!({"type": "array"})).unwrap_err();
		assert!(matches!(
			err,
			Error::MissingField {
				tag: "array",
				field: "value"
			}
		));
	}

	#[test]
	fn bigint_must_be_string_or_integer() {
		let err = parse(&json!({"type": "bigint", "value": [1]})).unwrap_err();
		assert!(matches!(err, Error::MalformedBigInt(_)));
	}

	#[test]
	fn object_pairs_must_have_two_entries() {
		let err = parse(&json!({"type": "object", "value": [["a"]]})).unwrap_err();
		assert!(matches!(err, Error::UnsupportedValue(_)));
	}

	#[test]
	fn depth_limit_is_enforced() {
		let mut payload = json!({"type": "null"});
		for _ in 0..5 {
			payload = json!({"type": "array", "value": [payload]});
		}
		let config = CodecConfig::default().with_max_depth(4);
		assert!(matches!(parse_with(&payload, &config), Err(Error::DepthLimit(4))));
		assert!(parse_with(&payload, &CodecConfig::default().with_max_depth(5)).is_ok());
	}

	#[test]
	fn to_json_writes_string_keys_bare() {
		let value = RemoteValue::Object(vec![
			(
				RemoteValue::String("a".into()),
				RemoteValue::Number(RemoteNumber::NaN),
			),
			(RemoteValue::Null, RemoteValue::Undefined),
		]);
		assert_eq!(
			value.to_json(),
			json!({"type": "object", "value": [
				["a", {"type": "number", "value": "NaN"}],
				[{"type": "null"}, {"type": "undefined"}]
			]})
		);
	}

	#[test]
	fn serde_round_trips_through_json() {
		let payload = json!({"type": "array", "value": [
			{"type": "string", "value": "a"},
			{"type": "node", "sharedId": "abc", "value": {"nodeType": 1}}
		]});
		let value: RemoteValue = serde_json::from_value(payload.clone()).unwrap();
		assert_eq!(serde_json::to_value(&value).unwrap(), payload);
	}
}
