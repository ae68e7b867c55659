//! Collaborator services consumed during definition construction.
//!
//! [`crate::DefRegistry`] implements [`ComponentService`] and
//! [`crate::EventRegistry`] implements [`EventService`]; the traits exist so
//! the component engine can be driven by other registries (for instance a
//! session-scoped one) without change.

use std::sync::Arc;

use parking_lot::Mutex;
use tessera_primitives::Descriptor;

use crate::component::ComponentDef;
use crate::config::{
	ComponentConfig, ControllerConfig, DefRef, EventConfig, HelperConfig, LibraryConfig, ModelConfig, ProviderConfig,
	RegistryConfig, RendererConfig, StyleConfig,
};
use crate::defs::{
	ControllerDef, EventDef, HelperDef, LibraryDef, LibraryDefs, ModelDef, ProviderDef, RendererDef, StyleDef,
};
use crate::error::Result;

/// Resolves component definitions and the leaf definitions they reference.
pub trait ComponentService: Send + Sync {
	/// Registry-wide settings.
	fn config(&self) -> &RegistryConfig;

	/// Resolves a (possibly nested) component definition.
	fn component_def(&self, def: &DefRef<ComponentConfig>) -> Result<Arc<ComponentDef>>;

	fn controller_def(&self, def: &DefRef<ControllerConfig>) -> Result<Arc<ControllerDef>>;

	fn model_def(&self, def: &DefRef<ModelConfig>) -> Result<Arc<ModelDef>>;

	/// Resolves the style of `component`. Components naming the same style
	/// descriptor share one definition, and with it one injection.
	fn style_def(&self, component: &Descriptor, config: &StyleConfig) -> Result<Arc<StyleDef>>;

	/// Resolves the renderer of `component`, if it declares one.
	fn renderer_def(
		&self,
		component: &Descriptor,
		def: Option<&DefRef<RendererConfig>>,
	) -> Result<Option<Arc<RendererDef>>>;

	/// Resolves the helper of `component`, binding `libraries` into it.
	fn helper_def(
		&self,
		component: &Descriptor,
		def: Option<&DefRef<HelperConfig>>,
		libraries: Option<&LibraryDefs>,
	) -> Result<Option<Arc<HelperDef>>>;

	fn provider_def(&self, component: &Descriptor, def: &DefRef<ProviderConfig>) -> Result<Arc<ProviderDef>>;

	/// Resolves library `name`, building it from `def` when not yet known.
	fn library_def(&self, name: &str, def: Option<&DefRef<LibraryConfig>>) -> Result<Arc<LibraryDef>>;

	/// Event service used for registered events and handler event types.
	fn event_service(&self) -> Arc<dyn EventService>;

	/// Sink that receives style injections.
	fn style_sink(&self) -> Arc<dyn StyleSink>;
}

/// Resolves event definitions.
pub trait EventService: Send + Sync {
	/// Pre-registers a raw event configuration for lazy resolution.
	fn register(&self, config: EventConfig) -> Result<Descriptor>;

	/// Resolves an event reference, constructing it on first use.
	fn event_def(&self, def: &DefRef<EventConfig>) -> Result<Arc<EventDef>>;

	/// Looks up an event by qualified name, returning `None` when no such
	/// event can be resolved.
	fn find_event_def(&self, qualified_name: &str) -> Option<Arc<EventDef>>;
}

/// Receives CSS when a style definition is first applied.
pub trait StyleSink: Send + Sync {
	fn inject(&self, style: &Descriptor, css: &str);
}

/// Sink that discards every injection, for callers whose CSS is preloaded.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStyleSink;

impl StyleSink for NullStyleSink {
	fn inject(&self, _style: &Descriptor, _css: &str) {}
}

/// In-memory stylesheet collecting injections in application order.
#[derive(Debug, Default)]
pub struct StyleSheet {
	rules: Mutex<Vec<(Descriptor, String)>>,
}

impl StyleSheet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of injections received so far.
	pub fn len(&self) -> usize {
		self.rules.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.lock().is_empty()
	}

	/// Number of times `style` was injected.
	pub fn injections_of(&self, style: &Descriptor) -> usize {
		self.rules.lock().iter().filter(|(desc, _)| desc == style).count()
	}

	/// Descriptors in injection order.
	pub fn order(&self) -> Vec<Descriptor> {
		self.rules.lock().iter().map(|(desc, _)| desc.clone()).collect()
	}

	/// Concatenated CSS text, one injection per line.
	pub fn css(&self) -> String {
		let rules = self.rules.lock();
		let mut out = String::new();
		for (_, css) in rules.iter() {
			out.push_str(css);
			out.push('\n');
		}
		out
	}
}

impl StyleSink for StyleSheet {
	fn inject(&self, style: &Descriptor, css: &str) {
		self.rules.lock().push((style.clone(), css.to_string()));
	}
}
