use tessera_primitives::Descriptor;

use crate::config::LibraryConfig;

/// A library of named includes shared between helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDef {
	descriptor: Descriptor,
	includes: Vec<String>,
}

impl LibraryDef {
	pub fn new(descriptor: Descriptor, config: &LibraryConfig) -> Self {
		Self {
			descriptor,
			includes: config.includes.clone(),
		}
	}

	pub fn descriptor(&self) -> &Descriptor {
		&self.descriptor
	}

	pub fn includes(&self) -> &[String] {
		&self.includes
	}

	pub fn has_include(&self, name: &str) -> bool {
		self.includes.iter().any(|i| i == name)
	}
}

/// Imported libraries keyed by the local property they are bound to.
pub type LibraryDefs = indexmap::IndexMap<String, std::sync::Arc<LibraryDef>>;
