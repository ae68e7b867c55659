//! Error types for definition construction.
//!
//! Every variant is construction-time and fatal for the definition being
//! built. A failed construction never leaves an entry behind in a cache.

use tessera_primitives::DescriptorError;

use crate::defs::DefKind;

/// Errors raised while resolving or constructing definitions.
#[derive(Debug, thiserror::Error)]
pub enum DefError {
	/// A qualified name did not follow the descriptor grammar.
	#[error(transparent)]
	MalformedDescriptor(#[from] DescriptorError),

	/// A configuration record is missing a required field or carries an
	/// invalid value.
	#[error("invalid {kind} definition: {reason}")]
	InvalidDefinition {
		/// Kind of definition being built.
		kind: DefKind,
		/// What was wrong with the record.
		reason: String,
	},

	/// The super type of a component could not be resolved.
	///
	/// Signals a corrupted definition graph rather than a recoverable lookup miss.
	#[error("super definition {super_descriptor} of {descriptor} could not be resolved")]
	UnresolvedSuperDefinition {
		/// The component being constructed.
		descriptor: String,
		/// The super type reference that failed.
		super_descriptor: String,
		/// Why resolution failed.
		#[source]
		source: Box<DefError>,
	},

	/// A referenced definition has neither a cached instance nor a
	/// registered configuration.
	#[error("unresolved {kind} dependency: {descriptor}")]
	UnresolvedDependency {
		/// Kind of the missing definition.
		kind: DefKind,
		/// Reference that could not be resolved.
		descriptor: String,
	},

	/// A definition was requested while it was already under construction on
	/// the same resolution path.
	#[error("cyclic {kind} definition: {descriptor} is already under construction")]
	CyclicDefinition {
		/// Kind of the definition.
		kind: DefKind,
		/// Descriptor that closed the cycle.
		descriptor: String,
	},

	/// A JSON definition bundle could not be parsed.
	#[error("bundle parse error: {0}")]
	Json(#[from] serde_json::Error),

	/// A TOML registry configuration could not be parsed.
	#[error("config parse error: {0}")]
	Toml(#[from] toml::de::Error),
}

impl DefError {
	pub(crate) fn invalid(kind: DefKind, reason: impl Into<String>) -> Self {
		Self::InvalidDefinition {
			kind,
			reason: reason.into(),
		}
	}

	pub(crate) fn unresolved(kind: DefKind, descriptor: impl Into<String>) -> Self {
		Self::UnresolvedDependency {
			kind,
			descriptor: descriptor.into(),
		}
	}
}

/// Result type for definition operations.
pub type Result<T> = std::result::Result<T, DefError>;
