//! Error types for value conversion and the Classic codec.

use thiserror::Error;
use wdb_protocol::ReferenceKind;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting, encoding or decoding values.
#[derive(Debug, Error)]
pub enum Error {
	/// Wire bytes are not valid JSON.
	#[error("Parse error: {0}")]
	Parse(#[from] serde_json::Error),

	/// Well-formed payload with an unrecognized or missing tag, or a
	/// recognized tag whose payload has the wrong shape.
	#[error("Unsupported value: {0}")]
	UnsupportedValue(String),

	/// `bigint` payload that is not a decimal integer.
	#[error("Malformed bigint: {0}")]
	MalformedBigInt(String),

	/// Required sub-field absent from a tagged value.
	#[error("Missing field '{field}' in {tag} value")]
	MissingField {
		/// Tag of the value being read (e.g., "node")
		tag: &'static str,
		/// Name of the absent field (e.g., "sharedId")
		field: &'static str,
	},

	/// Identifier key present but its id is not a string.
	#[error("Malformed {kind} reference: identifier is not a string")]
	MalformedReference { kind: ReferenceKind },

	/// Payload carries more than one Classic identifier key.
	#[error("Ambiguous reference: payload carries both {first} and {second} identifiers")]
	AmbiguousReference {
		first: ReferenceKind,
		second: ReferenceKind,
	},

	/// Session has no live object for a Classic identifier.
	#[error("Unknown {kind} reference: {id}")]
	UnknownReference { kind: ReferenceKind, id: String },

	/// Invalid argument provided to an action.
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// Host value has no Classic JSON representation.
	#[error("Cannot encode value as Classic JSON: {0}")]
	Unencodable(String),

	/// Host value has no BiDi remote value representation.
	#[error("Cannot serialize value as a remote value: {0}")]
	Unserializable(String),

	/// Value nests deeper than the configured limit.
	#[error("Maximum nesting depth of {0} exceeded")]
	DepthLimit(usize),

	/// No async action registered under this name.
	#[error("Unknown async action: {0}")]
	UnknownAction(String),

	/// Failure reported by the protocol transport.
	#[error("Transport error: {0}")]
	Transport(String),
}

impl Error {
	/// Builds an [`Error::UnsupportedValue`] quoting the offending payload.
	pub fn unsupported(payload: &serde_json::Value) -> Self {
		Error::UnsupportedValue(format!("Unexpected bidi value: {payload}"))
	}

	/// Returns true if this is an invalid argument error.
	pub fn is_invalid_argument(&self) -> bool {
		matches!(self, Error::InvalidArgument(_))
	}

	/// Returns true if a Classic identifier did not resolve.
	pub fn is_unknown_reference(&self) -> bool {
		matches!(self, Error::UnknownReference { .. })
	}

	/// WebDriver error code a caller should report for this error.
	///
	/// See <https://w3c.github.io/webdriver/#errors>.
	pub fn error_code(&self) -> &'static str {
		match self {
			Error::Parse(_)
			| Error::UnsupportedValue(_)
			| Error::MalformedBigInt(_)
			| Error::MissingField { .. }
			| Error::MalformedReference { .. }
			| Error::AmbiguousReference { .. }
			| Error::InvalidArgument(_)
			| Error::DepthLimit(_) => "invalid argument",
			Error::UnknownReference { kind, .. } => match kind {
				ReferenceKind::Element => "no such element",
				ReferenceKind::Frame => "no such frame",
				ReferenceKind::ShadowRoot => "no such shadow root",
				ReferenceKind::Window => "no such window",
			},
			Error::Unencodable(_) | Error::Unserializable(_) => "unsupported operation",
			Error::UnknownAction(_) => "unknown command",
			Error::Transport(_) => "unknown error",
		}
	}
}
