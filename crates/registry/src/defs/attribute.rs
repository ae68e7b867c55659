//! Typed attribute declarations.
//!
//! Value coercion belongs to the attribute binder; this set only records what
//! was declared, in declaration order.

use indexmap::IndexMap;
use serde_json::Value;

use super::DefKind;
use crate::config::AttributeConfig;
use crate::error::{DefError, Result};

/// Attribute type whose values are nested component instances.
pub const FACET_TYPE: &str = "Aura.Component[]";

/// A single declared attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDef {
	name: String,
	type_def: String,
	required: bool,
	default: Option<Value>,
}

impl AttributeDef {
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared type name, e.g. `String` or `Aura.Component[]`.
	pub fn type_def(&self) -> &str {
		&self.type_def
	}

	pub fn is_required(&self) -> bool {
		self.required
	}

	pub fn default_value(&self) -> Option<&Value> {
		self.default.as_ref()
	}

	/// Returns true if this attribute holds child components.
	pub fn is_facet(&self) -> bool {
		self.type_def == FACET_TYPE
	}
}

/// Ordered set of attribute declarations keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeDefSet {
	defs: IndexMap<String, AttributeDef>,
}

impl AttributeDefSet {
	/// Builds the set, rejecting empty or repeated names.
	pub fn new(configs: &[AttributeConfig]) -> Result<Self> {
		let mut defs = IndexMap::with_capacity(configs.len());
		for config in configs {
			if config.name.is_empty() {
				return Err(DefError::invalid(DefKind::Attribute, "attribute without a name"));
			}
			let def = AttributeDef {
				name: config.name.clone(),
				type_def: config.type_def.clone(),
				required: config.required,
				default: config.default.clone(),
			};
			if defs.insert(config.name.clone(), def).is_some() {
				return Err(DefError::invalid(
					DefKind::Attribute,
					format!("duplicate attribute '{}'", config.name),
				));
			}
		}
		Ok(Self { defs })
	}

	pub fn get(&self, name: &str) -> Option<&AttributeDef> {
		self.defs.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.defs.contains_key(name)
	}

	/// Iterates declarations in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = &AttributeDef> {
		self.defs.values()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.defs.keys().map(String::as_str)
	}

	/// Names of the attributes typed as facets.
	pub fn facet_names(&self) -> impl Iterator<Item = &str> {
		self.iter().filter(|def| def.is_facet()).map(AttributeDef::name)
	}

	pub fn len(&self) -> usize {
		self.defs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}
}
