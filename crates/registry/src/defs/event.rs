//! Event definitions.

use std::sync::Arc;

use serde::Deserialize;
use tessera_primitives::Descriptor;

use super::AttributeDefSet;

/// How an event propagates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
	/// Fired by a component and handled by its owners.
	#[default]
	Component,
	/// Broadcast to every application-level subscriber.
	Application,
	/// Synthesized by the framework for data-binding changes.
	Value,
}

/// A resolved event type, optionally extending a super event.
#[derive(Debug)]
pub struct EventDef {
	descriptor: Descriptor,
	event_type: EventType,
	super_def: Option<Arc<EventDef>>,
	attribute_defs: AttributeDefSet,
}

impl EventDef {
	pub fn new(
		descriptor: Descriptor,
		event_type: EventType,
		super_def: Option<Arc<EventDef>>,
		attribute_defs: AttributeDefSet,
	) -> Self {
		Self {
			descriptor,
			event_type,
			super_def,
			attribute_defs,
		}
	}

	pub fn descriptor(&self) -> &Descriptor {
		&self.descriptor
	}

	pub fn event_type(&self) -> EventType {
		self.event_type
	}

	pub fn super_def(&self) -> Option<&Arc<EventDef>> {
		self.super_def.as_ref()
	}

	pub fn attribute_defs(&self) -> &AttributeDefSet {
		&self.attribute_defs
	}

	/// Returns true if this event is `name` (`namespace:name`) or extends it.
	pub fn is_instance_of(&self, name: &str) -> bool {
		let mut current = Some(self);
		while let Some(def) = current {
			if def.descriptor.full_name() == name {
				return true;
			}
			current = def.super_def.as_deref();
		}
		false
	}
}
