use tessera_primitives::Descriptor;

use crate::config::ProviderConfig;

/// Provider definition: picks the concrete type for an abstract component.
///
/// The provide logic itself runs in the instantiation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDef {
	descriptor: Descriptor,
}

impl ProviderDef {
	pub fn new(descriptor: Descriptor, _config: &ProviderConfig) -> Self {
		Self { descriptor }
	}

	pub fn descriptor(&self) -> &Descriptor {
		&self.descriptor
	}
}
