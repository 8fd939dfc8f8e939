//! Host values: the deserialized form of wire values.

use std::str::FromStr;

use num_bigint::BigInt;
use serde_json::Number;

use crate::error::{Error, Result};
use crate::reference::{ClassicReference, NodeReference, WindowReference};

/// Value produced by the deserializer and the Classic decoder, and accepted
/// by the serializer and the Classic encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
	/// JavaScript `undefined`, distinct from [`HostValue::Null`].
	Undefined,
	Null,
	Bool(bool),
	/// Integer that fits in 64 bits.
	Int(i64),
	/// Arbitrary-precision integer.
	BigInt(BigInt),
	/// IEEE-754 double, including NaN, `-0.0` and both infinities.
	Float(f64),
	String(String),
	Array(Vec<HostValue>),
	Object(Mapping),
	/// BiDi node wrapper.
	Node(NodeReference),
	/// BiDi window proxy wrapper.
	Window(WindowReference),
	/// Classic reference resolved against a session.
	Reference(ClassicReference),
}

impl HostValue {
	/// Key equality used by [`Mapping`].
	///
	/// Follows SameValueZero: NaN equals NaN, `0.0` equals `-0.0`, and numbers
	/// compare by value across [`Int`](Self::Int), [`BigInt`](Self::BigInt) and
	/// [`Float`](Self::Float).
	pub fn same_value_zero(&self, other: &HostValue) -> bool {
		match (self, other) {
			(HostValue::Float(a), HostValue::Float(b)) => (a.is_nan() && b.is_nan()) || a == b,
			(HostValue::Int(a), HostValue::BigInt(b)) | (HostValue::BigInt(b), HostValue::Int(a)) => {
				BigInt::from(*a) == *b
			}
			(HostValue::Int(i), HostValue::Float(f)) | (HostValue::Float(f), HostValue::Int(i)) => {
				f.fract() == 0.0 && *i as f64 == *f && f.abs() < i64::MAX as f64 && *f as i64 == *i
			}
			_ => self == other,
		}
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, HostValue::Undefined)
	}

	pub fn is_null(&self) -> bool {
		matches!(self, HostValue::Null)
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			HostValue::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self {
			HostValue::Int(i) => Some(*i),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			HostValue::Float(f) => Some(*f),
			_ => None,
		}
	}

	pub fn as_array(&self) -> Option<&[HostValue]> {
		match self {
			HostValue::Array(items) => Some(items),
			_ => None,
		}
	}

	pub fn as_object(&self) -> Option<&Mapping> {
		match self {
			HostValue::Object(mapping) => Some(mapping),
			_ => None,
		}
	}
}

impl From<&str> for HostValue {
	fn from(value: &str) -> Self {
		HostValue::String(value.to_string())
	}
}

impl From<String> for HostValue {
	fn from(value: String) -> Self {
		HostValue::String(value)
	}
}

impl From<i64> for HostValue {
	fn from(value: i64) -> Self {
		HostValue::Int(value)
	}
}

impl From<f64> for HostValue {
	fn from(value: f64) -> Self {
		HostValue::Float(value)
	}
}

impl From<bool> for HostValue {
	fn from(value: bool) -> Self {
		HostValue::Bool(value)
	}
}

impl From<BigInt> for HostValue {
	fn from(value: BigInt) -> Self {
		HostValue::BigInt(value)
	}
}

impl From<Vec<HostValue>> for HostValue {
	fn from(value: Vec<HostValue>) -> Self {
		HostValue::Array(value)
	}
}

impl From<Mapping> for HostValue {
	fn from(value: Mapping) -> Self {
		HostValue::Object(value)
	}
}

/// Insertion-ordered mapping whose keys are host values.
///
/// Inserting a key that is already present (under
/// [`HostValue::same_value_zero`]) replaces its value in place: the later
/// entry wins and the key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
	entries: Vec<(HostValue, HostValue)>,
}

impl Mapping {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: Vec::with_capacity(capacity),
		}
	}

	/// Inserts an entry, returning the value it replaced.
	pub fn insert(&mut self, key: HostValue, value: HostValue) -> Option<HostValue> {
		match self.position(&key) {
			Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
			None => {
				self.entries.push((key, value));
				None
			}
		}
	}

	pub fn get(&self, key: &HostValue) -> Option<&HostValue> {
		self.position(key).map(|index| &self.entries[index].1)
	}

	/// Looks up a string key.
	pub fn get_str(&self, key: &str) -> Option<&HostValue> {
		self.entries
			.iter()
			.find(|(k, _)| k.as_str() == Some(key))
			.map(|(_, v)| v)
	}

	pub fn contains_key(&self, key: &HostValue) -> bool {
		self.position(key).is_some()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&HostValue, &HostValue)> {
		self.entries.iter().map(|(k, v)| (k, v))
	}

	pub fn keys(&self) -> impl Iterator<Item = &HostValue> {
		self.entries.iter().map(|(k, _)| k)
	}

	pub fn values(&self) -> impl Iterator<Item = &HostValue> {
		self.entries.iter().map(|(_, v)| v)
	}

	fn position(&self, key: &HostValue) -> Option<usize> {
		self.entries.iter().position(|(k, _)| k.same_value_zero(key))
	}
}

impl FromIterator<(HostValue, HostValue)> for Mapping {
	fn from_iter<I: IntoIterator<Item = (HostValue, HostValue)>>(iter: I) -> Self {
		let mut mapping = Mapping::new();
		for (key, value) in iter {
			mapping.insert(key, value);
		}
		mapping
	}
}

impl IntoIterator for Mapping {
	type Item = (HostValue, HostValue);
	type IntoIter = std::vec::IntoIter<(HostValue, HostValue)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

/// Converts a JSON number literal without widening integers to floats.
///
/// Integers outside the `i64` range become [`HostValue::BigInt`].
pub(crate) fn host_number(number: &Number) -> Result<HostValue> {
	if let Some(i) = number.as_i64() {
		return Ok(HostValue::Int(i));
	}
	if is_integer_literal(number) {
		return parse_bigint(&number.to_string()).map(HostValue::BigInt);
	}
	number
		.as_f64()
		.map(HostValue::Float)
		.ok_or_else(|| Error::UnsupportedValue(format!("Unexpected number: {number}")))
}

/// True for numbers written without a fraction or exponent.
pub(crate) fn is_integer_literal(number: &Number) -> bool {
	number.is_i64() || number.is_u64() || !number.to_string().contains(['.', 'e', 'E'])
}

/// Parses a decimal integer string, tolerating surrounding whitespace.
pub(crate) fn parse_bigint(digits: &str) -> Result<BigInt> {
	BigInt::from_str(digits.trim()).map_err(|_| Error::MalformedBigInt(digits.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn insert_existing_key_replaces_in_place() {
		let mut mapping = Mapping::new();
		mapping.insert("a".into(), HostValue::Int(1));
		mapping.insert("b".into(), HostValue::Int(2));
		let previous = mapping.insert("a".into(), HostValue::Int(3));

		assert_eq!(previous, Some(HostValue::Int(1)));
		let keys: Vec<_> = mapping.keys().filter_map(HostValue::as_str).collect();
		assert_eq!(keys, ["a", "b"]);
		assert_eq!(mapping.get_str("a"), Some(&HostValue::Int(3)));
	}

	#[test]
	fn non_string_keys_are_kept() {
		let mapping: Mapping = [(HostValue::Int(1), HostValue::from("one"))].into_iter().collect();
		assert_eq!(mapping.get(&HostValue::Int(1)), Some(&HostValue::from("one")));
		assert!(mapping.get_str("1").is_none());
	}

	#[test]
	fn nan_keys_collapse() {
		let mut mapping = Mapping::new();
		mapping.insert(HostValue::Float(f64::NAN), HostValue::Int(1));
		mapping.insert(HostValue::Float(f64::NAN), HostValue::Int(2));
		assert_eq!(mapping.len(), 1);
		assert_eq!(mapping.get(&HostValue::Float(f64::NAN)), Some(&HostValue::Int(2)));
	}

	#[test]
	fn signed_zero_keys_collapse() {
		let mut mapping = Mapping::new();
		mapping.insert(HostValue::Float(0.0), HostValue::Int(1));
		mapping.insert(HostValue::Float(-0.0), HostValue::Int(2));
		assert_eq!(mapping.len(), 1);
	}

	#[test]
	fn numeric_keys_compare_across_representations() {
		assert!(HostValue::Int(2).same_value_zero(&HostValue::Float(2.0)));
		assert!(HostValue::Int(2).same_value_zero(&HostValue::BigInt(BigInt::from(2))));
		assert!(!HostValue::Int(2).same_value_zero(&HostValue::Float(2.5)));
		assert!(!HostValue::Int(2).same_value_zero(&HostValue::from("2")));
	}

	#[test]
	fn host_number_keeps_integers() {
		let n: Number = serde_json::from_str("42").unwrap();
		assert_eq!(host_number(&n).unwrap(), HostValue::Int(42));

		let n: Number = serde_json::from_str("1.5").unwrap();
		assert_eq!(host_number(&n).unwrap(), HostValue::Float(1.5));
	}

	#[test]
	fn host_number_promotes_large_integers() {
		let n: Number = serde_json::from_str("123456789012345678901234567890").unwrap();
		let expected = BigInt::from_str("123456789012345678901234567890").unwrap();
		assert_eq!(host_number(&n).unwrap(), HostValue::BigInt(expected));
	}

	#[test]
	fn parse_bigint_rejects_garbage() {
		assert!(matches!(parse_bigint("12a"), Err(Error::MalformedBigInt(_))));
		assert_eq!(parse_bigint(" -7 ").unwrap(), BigInt::from(-7));
	}
}
