use std::sync::Arc;

use super::ComponentDef;
use crate::defs::EventDef;

/// Framework-synthesized value events, by component-local name.
const VALUE_EVENTS: [(&str, &str); 3] = [("change", "valueChange"), ("init", "valueInit"), ("destroy", "valueDestroy")];

/// Local name of the framework value event behind `name`, if any.
pub fn value_event(name: &str) -> Option<&'static str> {
	VALUE_EVENTS.iter().find(|(local, _)| *local == name).map(|(_, event)| *event)
}

impl ComponentDef {
	/// Looks up the event registered under `name`.
	///
	/// With `include_value_events`, an unregistered name falls back to the
	/// global event service: `change`, `init` and `destroy` map to the
	/// framework's value events, any other name is looked up as given.
	pub fn event_def(&self, name: &str, include_value_events: bool) -> Option<Arc<EventDef>> {
		if let Some(def) = self.register_event_defs.get(name) {
			return Some(Arc::clone(def));
		}
		if !include_value_events {
			return None;
		}
		match value_event(name) {
			Some(event) => self.events.find_event_def(&self.framework.framework_event(event)),
			None => self.events.find_event_def(name),
		}
	}

	/// Returns the local name of the registered event whose definition has
	/// the given qualified name.
	pub fn event_name_by_descriptor(&self, qualified_name: &str) -> Option<&str> {
		self.all_events
			.iter()
			.find(|name| {
				self.register_event_defs
					.get(name.as_str())
					.is_some_and(|def| def.descriptor().qualified_name() == qualified_name)
			})
			.map(String::as_str)
	}

	/// Registered event names in declaration order.
	pub fn all_events(&self) -> &[String] {
		&self.all_events
	}

	/// Qualified name of the event fired on location changes.
	pub fn location_change_event(&self) -> String {
		match &self.location_change_event_def {
			Some(def) => def.descriptor().qualified_name().to_string(),
			None => self.framework.framework_event("locationChange"),
		}
	}
}
