//! Raw definition configuration.
//!
//! These records are what an external loader hands over, already in memory.
//! They mirror the wire schema field for field (camelCase keys) and carry no
//! resolved state; turning them into definitions is the registry's job.

mod schema;

use serde::Deserialize;
use tessera_primitives::Descriptor;

pub use schema::{
	ActionConfig, AttributeConfig, ComponentConfig, ControllerConfig, EventConfig, FacetConfig, HandlerConfig,
	HelperConfig, ImportConfig, LayoutConfig, LayoutItemConfig, LayoutsConfig, LibraryConfig, MethodConfig,
	ModelConfig, ProviderConfig, RegisterEventConfig, RendererConfig, StyleConfig, ValueConfig,
};

use crate::defs::DefKind;
use crate::error::{DefError, Result};

/// Implemented by every raw record that names a definition.
pub trait DefConfig {
	/// Kind of definition this record describes.
	const KIND: DefKind;

	/// Returns the declared qualified name, if any.
	fn descriptor(&self) -> Option<&str>;
}

/// Reference to a definition: either a bare qualified name or a nested
/// configuration record.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DefRef<C> {
	/// `"markup://ui:button"`; resolves against the cache or a registered config.
	Name(String),
	/// Inline configuration used when nothing is cached or registered yet.
	Config(Box<C>),
}

impl<C: DefConfig> DefRef<C> {
	/// Creates a by-name reference.
	pub fn named(name: impl Into<String>) -> Self {
		Self::Name(name.into())
	}

	/// Returns the qualified name this reference points at, if it has one.
	pub fn descriptor_str(&self) -> Option<&str> {
		match self {
			Self::Name(name) => Some(name),
			Self::Config(config) => config.descriptor(),
		}
	}

	/// Returns the inline configuration, if any.
	pub fn config(&self) -> Option<&C> {
		match self {
			Self::Name(_) => None,
			Self::Config(config) => Some(config),
		}
	}

	/// Parses the referenced descriptor, falling back to `derived` when the
	/// reference does not name one.
	pub(crate) fn resolve_descriptor(&self, derived: Option<&Descriptor>) -> Result<Descriptor> {
		match (self.descriptor_str(), derived) {
			(Some(name), _) => Ok(Descriptor::parse(name)?),
			(None, Some(derived)) => Ok(derived.clone()),
			(None, None) => Err(DefError::invalid(C::KIND, "missing descriptor")),
		}
	}
}

impl<C> From<C> for DefRef<C> {
	fn from(config: C) -> Self {
		Self::Config(Box::new(config))
	}
}

/// Returns the default framework namespace.
fn default_framework_namespace() -> String {
	"aura".to_string()
}

/// Registry-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RegistryConfig {
	/// Namespace reserved for framework events such as `valueChange` and
	/// `locationChange`.
	pub framework_namespace: String,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			framework_namespace: default_framework_namespace(),
		}
	}
}

impl RegistryConfig {
	/// Parses settings from TOML text. Missing keys take their defaults.
	pub fn from_toml(text: &str) -> Result<Self> {
		Ok(toml::from_str(text)?)
	}

	/// Qualified name of the framework event with the given local name.
	pub fn framework_event(&self, name: &str) -> String {
		format!("markup://{}:{}", self.framework_namespace, name)
	}
}

/// A set of raw configurations delivered together by a loader.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefBundle {
	pub components: Vec<ComponentConfig>,
	pub events: Vec<EventConfig>,
	pub controllers: Vec<ControllerConfig>,
	pub models: Vec<ModelConfig>,
	pub renderers: Vec<RendererConfig>,
	pub helpers: Vec<HelperConfig>,
	pub providers: Vec<ProviderConfig>,
	pub libraries: Vec<LibraryConfig>,
}

impl DefBundle {
	/// Parses a bundle from JSON text.
	pub fn from_json(text: &str) -> Result<Self> {
		Ok(serde_json::from_str(text)?)
	}
}
