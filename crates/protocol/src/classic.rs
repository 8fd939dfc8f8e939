//! WebDriver Classic web reference identifiers.
//!
//! Classic serializes remote references as single-entry JSON objects keyed by
//! a fixed identifier defined by W3C WebDriver. See
//! <https://w3c.github.io/webdriver/#dfn-web-element-identifier> and the
//! sibling definitions for frames, shadow roots and windows.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier key of a web element reference.
pub const ELEMENT_IDENTIFIER: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Identifier key of a web frame reference.
pub const FRAME_IDENTIFIER: &str = "frame-075b-4da1-b6ba-e579c2d3230a";

/// Identifier key of a shadow root reference.
pub const SHADOW_ROOT_IDENTIFIER: &str = "shadow-6066-11e4-a52e-4f735466cecf";

/// Identifier key of a web window reference.
pub const WINDOW_IDENTIFIER: &str = "window-fcc6-11e5-b4f8-330a88ab9d7f";

/// Capability carried by a Classic reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceKind {
	/// Web element (`WebElement`)
	Element,
	/// Web frame (`WebFrame`)
	Frame,
	/// Shadow root (`ShadowRoot`)
	ShadowRoot,
	/// Web window (`WebWindow`)
	Window,
}

impl ReferenceKind {
	/// All kinds, in the order a payload is checked for identifier keys.
	pub const ALL: [ReferenceKind; 4] = [
		ReferenceKind::Element,
		ReferenceKind::Frame,
		ReferenceKind::ShadowRoot,
		ReferenceKind::Window,
	];

	/// Returns the identifier key used on the wire for this kind.
	pub fn identifier(self) -> &'static str {
		match self {
			ReferenceKind::Element => ELEMENT_IDENTIFIER,
			ReferenceKind::Frame => FRAME_IDENTIFIER,
			ReferenceKind::ShadowRoot => SHADOW_ROOT_IDENTIFIER,
			ReferenceKind::Window => WINDOW_IDENTIFIER,
		}
	}

	/// Looks up the kind owning an identifier key.
	pub fn from_identifier(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.identifier() == key)
	}

	/// Human-readable name (e.g., `"shadow root"`).
	pub fn as_str(self) -> &'static str {
		match self {
			ReferenceKind::Element => "element",
			ReferenceKind::Frame => "frame",
			ReferenceKind::ShadowRoot => "shadow root",
			ReferenceKind::Window => "window",
		}
	}
}

impl fmt::Display for ReferenceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
