//! Codec configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default nesting ceiling, matching the recursion limit `serde_json` applies
/// when parsing.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tunables shared by the deserializer and the Classic codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodecConfig {
	/// Maximum number of nested containers a single value may contain.
	pub max_depth: usize,
}

impl Default for CodecConfig {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

impl CodecConfig {
	/// Returns a copy with a different depth ceiling.
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	/// Steps one container level down from `depth`.
	pub(crate) fn descend(&self, depth: usize) -> Result<usize> {
		let next = depth + 1;
		if next > self.max_depth {
			return Err(Error::DepthLimit(self.max_depth));
		}
		Ok(next)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_config_uses_defaults() {
		let config: CodecConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, CodecConfig::default());
	}

	#[test]
	fn max_depth_reads_camel_case() {
		let config: CodecConfig = serde_json::from_str(r#"{"maxDepth": 4}"#).unwrap();
		assert_eq!(config.max_depth, 4);
	}

	#[test]
	fn descend_stops_at_ceiling() {
		let config = CodecConfig::default().with_max_depth(2);
		assert_eq!(config.descend(0).unwrap(), 1);
		assert_eq!(config.descend(1).unwrap(), 2);
		assert!(matches!(config.descend(2), Err(Error::DepthLimit(2))));
	}
}
