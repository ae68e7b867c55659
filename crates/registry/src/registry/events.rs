//! Event definition registry.

use std::sync::Arc;

use tessera_primitives::Descriptor;
use tracing::trace;

use crate::cache::DefTable;
use crate::config::{DefRef, EventConfig};
use crate::defs::{AttributeDefSet, EventDef};
use crate::error::Result;
use crate::service::EventService;

/// Resolves and memoizes event definitions.
///
/// Thread-safe; share it as `Arc<EventRegistry>`.
#[derive(Default)]
pub struct EventRegistry {
	table: DefTable<EventConfig, EventDef>,
}

impl EventRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of constructed event definitions.
	pub fn len(&self) -> usize {
		self.table.cache().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn build(&self, descriptor: Descriptor, config: &EventConfig) -> Result<EventDef> {
		let super_def = config.super_def.as_ref().map(|def| self.event_def(def)).transpose()?;
		let attribute_defs = AttributeDefSet::new(&config.attribute_defs)?;
		Ok(EventDef::new(descriptor, config.event_type, super_def, attribute_defs))
	}
}

impl EventService for EventRegistry {
	fn register(&self, config: EventConfig) -> Result<Descriptor> {
		self.table.register(config)
	}

	fn event_def(&self, def: &DefRef<EventConfig>) -> Result<Arc<EventDef>> {
		self.table.resolve(def, None, |desc, config| self.build(desc, config))
	}

	fn find_event_def(&self, qualified_name: &str) -> Option<Arc<EventDef>> {
		match self.event_def(&DefRef::named(qualified_name)) {
			Ok(def) => Some(def),
			Err(err) => {
				trace!(event = qualified_name, error = %err, "event lookup missed");
				None
			}
		}
	}
}
