use tessera_primitives::Descriptor;

use crate::config::ModelConfig;

/// A typed model member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueDef {
	pub name: String,
	pub type_name: String,
}

/// Model definition: the typed members backing a component's data.
#[derive(Debug, Clone)]
pub struct ModelDef {
	descriptor: Descriptor,
	members: Vec<ValueDef>,
}

impl ModelDef {
	pub fn new(descriptor: Descriptor, config: &ModelConfig) -> Self {
		let members = config
			.members
			.iter()
			.map(|m| ValueDef {
				name: m.name.clone(),
				type_name: m.type_name.clone(),
			})
			.collect();
		Self { descriptor, members }
	}

	pub fn descriptor(&self) -> &Descriptor {
		&self.descriptor
	}

	pub fn members(&self) -> &[ValueDef] {
		&self.members
	}

	pub fn member(&self, name: &str) -> Option<&ValueDef> {
		self.members.iter().find(|m| m.name == name)
	}
}
