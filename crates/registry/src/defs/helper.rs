use tessera_primitives::Descriptor;

use super::LibraryDefs;
use crate::config::HelperConfig;

/// Helper definition: shared functions available to a component's controller
/// and renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperDef {
	descriptor: Descriptor,
	functions: Vec<String>,
	imports: Vec<String>,
}

impl HelperDef {
	/// Builds the helper; `libraries` are the component's imports, bound into
	/// the helper under their property names.
	pub fn new(descriptor: Descriptor, config: &HelperConfig, libraries: Option<&LibraryDefs>) -> Self {
		Self {
			descriptor,
			functions: config.functions.clone(),
			imports: libraries.map(|libs| libs.keys().cloned().collect()).unwrap_or_default(),
		}
	}

	pub fn descriptor(&self) -> &Descriptor {
		&self.descriptor
	}

	/// Names of the helper's functions.
	pub fn functions(&self) -> &[String] {
		&self.functions
	}

	/// Properties under which imported libraries are visible to the helper.
	pub fn imports(&self) -> &[String] {
		&self.imports
	}
}
