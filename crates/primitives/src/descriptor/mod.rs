//! Definition descriptors.
//!
//! A [`Descriptor`] names exactly one definition: a component, an event, a
//! style, a library and so on. It is the key every registry lookup goes
//! through, so equality is structural over `(prefix, namespace, name)` and the
//! qualified string form is canonical.
//!
//! # Grammar
//!
//! ```text
//! descriptor := [prefix "://"] namespace sep name
//! sep        := ":"            (any prefix)
//!             | "."            (non-markup prefixes only, e.g. `js://ui.button`)
//! ```
//!
//! A missing prefix means [`DEFAULT_PREFIX`]. The canonical separator is `:`
//! for markup descriptors and `.` for every other prefix.

use std::fmt;
use std::str::FromStr;

/// Prefix assumed when a qualified name carries none.
pub const DEFAULT_PREFIX: &str = "markup";

const PREFIX_SEP: &str = "://";

/// Error produced when a string does not follow the descriptor grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
	/// The input is not a `[prefix://]namespace:name` string.
	#[error("malformed descriptor {input:?}: {reason}")]
	Malformed {
		/// The rejected input.
		input: String,
		/// What part of the grammar was violated.
		reason: &'static str,
	},
}

impl DescriptorError {
	fn malformed(input: &str, reason: &'static str) -> Self {
		Self::Malformed {
			input: input.to_string(),
			reason,
		}
	}
}

/// Immutable identifier for a definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Descriptor {
	prefix: String,
	namespace: String,
	name: String,
	// Derived from the three fields above, so the derived impls stay structural.
	qualified: String,
}

impl Descriptor {
	/// Builds a descriptor from its parts, validating each segment.
	pub fn new(prefix: &str, namespace: &str, name: &str) -> Result<Self, DescriptorError> {
		let display = format!("{prefix}{PREFIX_SEP}{namespace}:{name}");
		if !is_prefix(prefix) {
			return Err(DescriptorError::malformed(&display, "invalid prefix"));
		}
		if !is_segment(namespace) {
			return Err(DescriptorError::malformed(&display, "invalid namespace"));
		}
		if !is_segment(name) {
			return Err(DescriptorError::malformed(&display, "invalid name"));
		}
		Ok(Self::from_parts(prefix, namespace, name))
	}

	/// Parses a qualified name such as `markup://ui:button` or `ui:button`.
	pub fn parse(input: &str) -> Result<Self, DescriptorError> {
		let (prefix, rest) = match input.split_once(PREFIX_SEP) {
			Some((prefix, rest)) => {
				if !is_prefix(prefix) {
					return Err(DescriptorError::malformed(input, "invalid prefix"));
				}
				(prefix, rest)
			}
			None => (DEFAULT_PREFIX, input),
		};

		let (namespace, name) = match rest.split_once(':') {
			Some(parts) => parts,
			None if prefix != DEFAULT_PREFIX => rest
				.split_once('.')
				.ok_or_else(|| DescriptorError::malformed(input, "expected namespace:name"))?,
			None => return Err(DescriptorError::malformed(input, "expected namespace:name")),
		};

		if !is_segment(namespace) {
			return Err(DescriptorError::malformed(input, "invalid namespace"));
		}
		if !is_segment(name) {
			return Err(DescriptorError::malformed(input, "invalid name"));
		}
		Ok(Self::from_parts(prefix, namespace, name))
	}

	fn from_parts(prefix: &str, namespace: &str, name: &str) -> Self {
		let sep = if prefix == DEFAULT_PREFIX { ':' } else { '.' };
		Self {
			prefix: prefix.to_string(),
			namespace: namespace.to_string(),
			name: name.to_string(),
			qualified: format!("{prefix}{PREFIX_SEP}{namespace}{sep}{name}"),
		}
	}

	/// Returns the prefix, e.g. `markup`.
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Returns the namespace, e.g. `ui`.
	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	/// Returns the local name, e.g. `button`.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the canonical `prefix://namespace:name` form.
	pub fn qualified_name(&self) -> &str {
		&self.qualified
	}

	/// Returns `namespace:name`, the form used for type and interface checks.
	pub fn full_name(&self) -> String {
		format!("{}:{}", self.namespace, self.name)
	}
}

impl fmt::Display for Descriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.qualified)
	}
}

impl FromStr for Descriptor {
	type Err = DescriptorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl TryFrom<&str> for Descriptor {
	type Error = DescriptorError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}

fn is_prefix(s: &str) -> bool {
	let mut chars = s.chars();
	matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn is_segment(s: &str) -> bool {
	!s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
