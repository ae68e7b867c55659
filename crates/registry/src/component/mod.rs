//! Component definitions.
//!
//! A [`ComponentDef`] is the consolidated, immutable view of one component
//! type: its own declarations plus what it inherits through its super chain.
//! It is built once per descriptor by the registry and shared by every
//! instance of the type.
//!
//! # Invariants
//!
//! - `all_style_defs` is the super's `all_style_defs` followed by the local
//!   style, if any.
//! - `rendering_details` has distance 0 for a local renderer, the super's
//!   distance plus one for an inherited one, and is `None` when no level of
//!   the chain declares a renderer.
//! - The style class name is computed once; style injection happens at most
//!   once per style definition and never when CSS is preloaded.

mod build;
mod events;
mod handlers;
mod inherit;

use std::fmt;
use std::sync::{Arc, OnceLock};

use rustc_hash::{FxHashMap, FxHashSet};
use tessera_primitives::Descriptor;

pub use self::events::value_event;
pub use self::handlers::{AppHandlerDef, HandlerDef, HandlerDefs, HandlerKind, ValueHandlerDef};
pub use self::inherit::RenderingDetails;
use crate::config::{FacetConfig, HandlerConfig, RegistryConfig};
use crate::defs::{
	AttributeDefSet, ControllerDef, EventDef, HelperDef, LayoutsDef, LibraryDefs, ModelDef, ProviderDef, RendererDef,
	StyleDef,
};
use crate::service::{EventService, StyleSink};

/// A method a component exposes to its owners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
	pub name: String,
	pub action: Option<String>,
}

/// Resolved definition of a component type.
pub struct ComponentDef {
	descriptor: Descriptor,
	super_def: Option<Arc<ComponentDef>>,
	is_abstract: bool,
	has_remote_deps: bool,

	style_def: Option<Arc<StyleDef>>,
	all_style_defs: Vec<Arc<StyleDef>>,
	css_preloaded: bool,
	style_class_name: OnceLock<String>,

	renderer_def: Option<Arc<RendererDef>>,
	rendering_details: Option<RenderingDetails>,
	controller_def: Option<Arc<ControllerDef>>,
	model_def: Option<Arc<ModelDef>>,
	helper_def: Option<Arc<HelperDef>>,
	provider_def: Option<Arc<ProviderDef>>,
	library_defs: Option<LibraryDefs>,

	method_defs: Vec<MethodDef>,
	/// `namespace:name` of each directly implemented interface.
	interfaces: FxHashSet<String>,
	facets: Vec<FacetConfig>,
	attribute_defs: AttributeDefSet,
	layouts: Option<LayoutsDef>,

	location_change_event_def: Option<Arc<EventDef>>,
	register_event_defs: FxHashMap<String, Arc<EventDef>>,
	all_events: Vec<String>,
	handlers: HandlerDefs,

	framework: RegistryConfig,
	events: Arc<dyn EventService>,
	styles: Arc<dyn StyleSink>,
}

impl ComponentDef {
	pub fn descriptor(&self) -> &Descriptor {
		&self.descriptor
	}

	/// Returns true if the component cannot be instantiated directly.
	pub fn is_abstract(&self) -> bool {
		self.is_abstract
	}

	/// The immediate super type; `None` only for the root component type.
	pub fn super_def(&self) -> Option<&Arc<ComponentDef>> {
		self.super_def.as_ref()
	}

	/// Returns true if server-side dependencies must be fetched before use.
	pub fn has_remote_dependencies(&self) -> bool {
		self.has_remote_deps
	}

	pub fn helper_def(&self) -> Option<&Arc<HelperDef>> {
		self.helper_def.as_ref()
	}

	/// Function names of the component's helper.
	pub fn helper(&self) -> Option<&[String]> {
		self.helper_def.as_deref().map(HelperDef::functions)
	}

	/// The locally declared renderer. See [`ComponentDef::rendering_details`]
	/// for the one actually used.
	pub fn renderer_def(&self) -> Option<&Arc<RendererDef>> {
		self.renderer_def.as_ref()
	}

	pub fn rendering_details(&self) -> Option<&RenderingDetails> {
		self.rendering_details.as_ref()
	}

	pub fn provider_def(&self) -> Option<&Arc<ProviderDef>> {
		self.provider_def.as_ref()
	}

	/// The locally declared style.
	pub fn style_def(&self) -> Option<&Arc<StyleDef>> {
		self.style_def.as_ref()
	}

	/// Every style of the chain, root first.
	pub fn all_style_defs(&self) -> &[Arc<StyleDef>] {
		&self.all_style_defs
	}

	pub fn is_css_preloaded(&self) -> bool {
		self.css_preloaded
	}

	/// Space-separated class names of every style in the chain, root first,
	/// each followed by a space.
	///
	/// The first call also injects each style's CSS into the style sink unless
	/// the CSS is preloaded. Later and concurrent calls return the same string
	/// without injecting again.
	pub fn style_class_name(&self) -> &str {
		self.style_class_name.get_or_init(|| {
			let mut class_name = String::new();
			for style in &self.all_style_defs {
				class_name.push_str(style.class_name());
				class_name.push(' ');
				if !self.css_preloaded {
					style.apply(&*self.styles);
				}
			}
			class_name
		})
	}

	pub fn attribute_defs(&self) -> &AttributeDefSet {
		&self.attribute_defs
	}

	/// Facet values declared on the component.
	pub fn facets(&self) -> &[FacetConfig] {
		&self.facets
	}

	pub fn controller_def(&self) -> Option<&Arc<ControllerDef>> {
		self.controller_def.as_ref()
	}

	pub fn model_def(&self) -> Option<&Arc<ModelDef>> {
		self.model_def.as_ref()
	}

	/// Imported libraries by property name; `None` without imports.
	pub fn library_defs(&self) -> Option<&LibraryDefs> {
		self.library_defs.as_ref()
	}

	pub fn method_defs(&self) -> &[MethodDef] {
		&self.method_defs
	}

	pub fn method_def(&self, name: &str) -> Option<&MethodDef> {
		self.method_defs.iter().find(|m| m.name == name)
	}

	pub fn layouts(&self) -> Option<&LayoutsDef> {
		self.layouts.as_ref()
	}

	pub fn app_handler_defs(&self) -> Option<&[AppHandlerDef]> {
		self.handlers.app()
	}

	pub fn cmp_handler_defs(&self) -> Option<&[HandlerConfig]> {
		self.handlers.component()
	}

	pub fn value_handler_defs(&self) -> Option<&[ValueHandlerDef]> {
		self.handlers.value()
	}

	pub fn handler_defs(&self) -> &HandlerDefs {
		&self.handlers
	}

	/// Returns true if the component is `name`, implements it directly, or
	/// inherits from something that is.
	///
	/// `name` is `namespace:name` or the full `markup://namespace:name`.
	pub fn is_instance_of(&self, name: &str) -> bool {
		let name = name.strip_prefix("markup://").unwrap_or(name);
		let mut current = Some(self);
		while let Some(def) = current {
			if def.is_named(name) || def.implements_directly(name) {
				return true;
			}
			current = def.super_def.as_deref();
		}
		false
	}

	/// Returns true if `name` is among this level's own interfaces.
	pub fn implements_directly(&self, name: &str) -> bool {
		self.interfaces.contains(name)
	}

	/// Directly implemented interfaces as `namespace:name`.
	pub fn interfaces(&self) -> impl Iterator<Item = &str> {
		self.interfaces.iter().map(String::as_str)
	}

	fn is_named(&self, name: &str) -> bool {
		name.split_once(':')
			.is_some_and(|(ns, n)| ns == self.descriptor.namespace() && n == self.descriptor.name())
	}
}

impl fmt::Display for ComponentDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.descriptor.qualified_name())
	}
}

impl fmt::Debug for ComponentDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentDef")
			.field("descriptor", &self.descriptor.qualified_name())
			.field("super_def", &self.super_def.as_ref().map(|s| s.descriptor.qualified_name()))
			.field("is_abstract", &self.is_abstract)
			.field("styles", &self.all_style_defs.len())
			.field("rendering_details", &self.rendering_details)
			.field("events", &self.all_events)
			.finish_non_exhaustive()
	}
}
