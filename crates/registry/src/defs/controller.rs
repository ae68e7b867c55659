use indexmap::IndexMap;
use serde::Deserialize;
use tessera_primitives::Descriptor;

use super::DefKind;
use crate::config::ControllerConfig;
use crate::error::{DefError, Result};

/// Where an action executes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionType {
	#[default]
	Client,
	Server,
}

/// A controller action declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDef {
	name: String,
	action_type: ActionType,
	params: Vec<String>,
}

impl ActionDef {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn action_type(&self) -> ActionType {
		self.action_type
	}

	pub fn params(&self) -> &[String] {
		&self.params
	}
}

/// Controller definition: the named actions a component can dispatch.
#[derive(Debug, Clone)]
pub struct ControllerDef {
	descriptor: Descriptor,
	actions: IndexMap<String, ActionDef>,
}

impl ControllerDef {
	pub fn new(descriptor: Descriptor, config: &ControllerConfig) -> Result<Self> {
		let mut actions = IndexMap::with_capacity(config.action_defs.len());
		for action in &config.action_defs {
			let def = ActionDef {
				name: action.name.clone(),
				action_type: action.action_type,
				params: action.params.clone(),
			};
			if actions.insert(action.name.clone(), def).is_some() {
				return Err(DefError::invalid(
					DefKind::Controller,
					format!("{descriptor} declares action '{}' twice", action.name),
				));
			}
		}
		Ok(Self { descriptor, actions })
	}

	pub fn descriptor(&self) -> &Descriptor {
		&self.descriptor
	}

	pub fn action_def(&self, name: &str) -> Option<&ActionDef> {
		self.actions.get(name)
	}

	/// Actions in declaration order.
	pub fn action_defs(&self) -> impl Iterator<Item = &ActionDef> {
		self.actions.values()
	}
}
