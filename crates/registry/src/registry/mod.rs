//! Definition registry.
//!
//! Maps descriptors to resolved definitions. Raw configurations are
//! registered up front (typically from a [`DefBundle`]) and turned into
//! definitions on first request; every descriptor resolves to exactly one
//! shared instance for the registry's lifetime.

mod events;

use std::sync::Arc;

use tessera_primitives::Descriptor;
use tracing::debug;

pub use self::events::EventRegistry;
use crate::cache::DefTable;
use crate::component::ComponentDef;
use crate::config::{
	ComponentConfig, ControllerConfig, DefBundle, DefRef, HelperConfig, LibraryConfig, ModelConfig, ProviderConfig,
	RegistryConfig, RendererConfig, StyleConfig,
};
use crate::defs::{
	ControllerDef, DefKind, HelperDef, LibraryDef, LibraryDefs, ModelDef, ProviderDef, RendererDef, StyleDef,
};
use crate::error::Result;
use crate::service::{ComponentService, EventService, StyleSink};

/// Registry of component definitions and the leaf definitions they use.
///
/// Thread-safe; share it via `Arc<DefRegistry>`.
pub struct DefRegistry {
	config: RegistryConfig,
	components: DefTable<ComponentConfig, ComponentDef>,
	controllers: DefTable<ControllerConfig, ControllerDef>,
	models: DefTable<ModelConfig, ModelDef>,
	renderers: DefTable<RendererConfig, RendererDef>,
	helpers: DefTable<HelperConfig, HelperDef>,
	providers: DefTable<ProviderConfig, ProviderDef>,
	libraries: DefTable<LibraryConfig, LibraryDef>,
	style_defs: DefTable<StyleConfig, StyleDef>,
	events: Arc<dyn EventService>,
	styles: Arc<dyn StyleSink>,
}

impl DefRegistry {
	/// Creates a registry backed by the given collaborators.
	pub fn new(config: RegistryConfig, events: Arc<dyn EventService>, styles: Arc<dyn StyleSink>) -> Self {
		Self {
			config,
			components: DefTable::new(),
			controllers: DefTable::new(),
			models: DefTable::new(),
			renderers: DefTable::new(),
			helpers: DefTable::new(),
			providers: DefTable::new(),
			libraries: DefTable::new(),
			style_defs: DefTable::new(),
			events,
			styles,
		}
	}

	/// Creates a registry with default settings and its own [`EventRegistry`].
	pub fn with_style_sink(styles: Arc<dyn StyleSink>) -> Self {
		Self::new(RegistryConfig::default(), Arc::new(EventRegistry::new()), styles)
	}

	/// Registers a raw component configuration for lazy resolution.
	pub fn register_component(&self, config: ComponentConfig) -> Result<Descriptor> {
		self.components.register(config)
	}

	pub fn register_controller(&self, config: ControllerConfig) -> Result<Descriptor> {
		self.controllers.register(config)
	}

	pub fn register_model(&self, config: ModelConfig) -> Result<Descriptor> {
		self.models.register(config)
	}

	/// Registers a renderer that components can name in `rendererDef`.
	pub fn register_renderer(&self, config: RendererConfig) -> Result<Descriptor> {
		self.renderers.register(config)
	}

	pub fn register_helper(&self, config: HelperConfig) -> Result<Descriptor> {
		self.helpers.register(config)
	}

	pub fn register_provider(&self, config: ProviderConfig) -> Result<Descriptor> {
		self.providers.register(config)
	}

	pub fn register_library(&self, config: LibraryConfig) -> Result<Descriptor> {
		self.libraries.register(config)
	}

	/// Registers every configuration in `bundle`. Nothing is constructed.
	pub fn load_bundle(&self, bundle: DefBundle) -> Result<()> {
		let DefBundle {
			components,
			events,
			controllers,
			models,
			renderers,
			helpers,
			providers,
			libraries,
		} = bundle;
		let counts = (components.len(), events.len());

		for config in events {
			self.events.register(config)?;
		}
		for config in controllers {
			self.controllers.register(config)?;
		}
		for config in models {
			self.models.register(config)?;
		}
		for config in renderers {
			self.renderers.register(config)?;
		}
		for config in helpers {
			self.helpers.register(config)?;
		}
		for config in providers {
			self.providers.register(config)?;
		}
		for config in libraries {
			self.libraries.register(config)?;
		}
		for config in components {
			self.components.register(config)?;
		}

		debug!(components = counts.0, events = counts.1, "loaded definition bundle");
		Ok(())
	}

	/// Parses a JSON bundle and registers its contents.
	pub fn load_bundle_json(&self, text: &str) -> Result<()> {
		self.load_bundle(DefBundle::from_json(text)?)
	}

	/// Resolves the component definition for `desc`, constructing it from its
	/// registered configuration on first request.
	pub fn get_def(&self, desc: &Descriptor) -> Result<Arc<ComponentDef>> {
		self.components
			.resolve_descriptor(desc, None, |desc, config| ComponentDef::new(desc, config, self))
	}

	/// Like [`DefRegistry::get_def`], parsing `qualified_name` first.
	pub fn get_def_by_name(&self, qualified_name: &str) -> Result<Arc<ComponentDef>> {
		self.get_def(&Descriptor::parse(qualified_name)?)
	}

	/// Returns the component definition for `desc` only if already constructed.
	pub fn cached_def(&self, desc: &Descriptor) -> Option<Arc<ComponentDef>> {
		self.components.get(desc)
	}

	/// Returns true if `desc` is constructed or can be constructed on demand.
	pub fn is_defined(&self, desc: &Descriptor) -> bool {
		self.components.get(desc).is_some() || self.components.is_registered(desc)
	}

	/// Number of constructed component definitions.
	pub fn len(&self) -> usize {
		self.components.cache().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn events(&self) -> &Arc<dyn EventService> {
		&self.events
	}
}

/// Descriptor of a leaf named after its component, e.g. `js://ui.button`.
fn derived_descriptor(kind: DefKind, component: &Descriptor) -> Result<Descriptor> {
	Ok(Descriptor::new(kind.derived_prefix(), component.namespace(), component.name())?)
}

impl ComponentService for DefRegistry {
	fn config(&self) -> &RegistryConfig {
		&self.config
	}

	fn component_def(&self, def: &DefRef<ComponentConfig>) -> Result<Arc<ComponentDef>> {
		self.components
			.resolve(def, None, |desc, config| ComponentDef::new(desc, config, self))
	}

	fn controller_def(&self, def: &DefRef<ControllerConfig>) -> Result<Arc<ControllerDef>> {
		self.controllers.resolve(def, None, ControllerDef::new)
	}

	fn model_def(&self, def: &DefRef<ModelConfig>) -> Result<Arc<ModelDef>> {
		self.models
			.resolve(def, None, |desc, config| Ok(ModelDef::new(desc, config)))
	}

	fn style_def(&self, component: &Descriptor, config: &StyleConfig) -> Result<Arc<StyleDef>> {
		let desc = match config.descriptor.as_deref() {
			Some(name) => Descriptor::parse(name)?,
			None => derived_descriptor(DefKind::Style, component)?,
		};
		self.style_defs
			.resolve_descriptor(&desc, Some(config), |desc, config| Ok(StyleDef::new(desc, config)))
	}

	fn renderer_def(
		&self,
		component: &Descriptor,
		def: Option<&DefRef<RendererConfig>>,
	) -> Result<Option<Arc<RendererDef>>> {
		let Some(def) = def else {
			return Ok(None);
		};
		let derived = derived_descriptor(DefKind::Renderer, component)?;
		self.renderers.resolve(def, Some(&derived), RendererDef::new).map(Some)
	}

	fn helper_def(
		&self,
		component: &Descriptor,
		def: Option<&DefRef<HelperConfig>>,
		libraries: Option<&LibraryDefs>,
	) -> Result<Option<Arc<HelperDef>>> {
		let Some(def) = def else {
			return Ok(None);
		};
		let derived = derived_descriptor(DefKind::Helper, component)?;
		self.helpers
			.resolve(def, Some(&derived), |desc, config| Ok(HelperDef::new(desc, config, libraries)))
			.map(Some)
	}

	fn provider_def(&self, component: &Descriptor, def: &DefRef<ProviderConfig>) -> Result<Arc<ProviderDef>> {
		let derived = derived_descriptor(DefKind::Provider, component)?;
		self.providers
			.resolve(def, Some(&derived), |desc, config| Ok(ProviderDef::new(desc, config)))
	}

	fn library_def(&self, name: &str, def: Option<&DefRef<LibraryConfig>>) -> Result<Arc<LibraryDef>> {
		let desc = Descriptor::parse(name)?;
		let inline = def.and_then(DefRef::config);
		self.libraries
			.resolve_descriptor(&desc, inline, |desc, config| Ok(LibraryDef::new(desc, config)))
	}

	fn event_service(&self) -> Arc<dyn EventService> {
		Arc::clone(&self.events)
	}

	fn style_sink(&self) -> Arc<dyn StyleSink> {
		Arc::clone(&self.styles)
	}
}
