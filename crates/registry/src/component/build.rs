//! Component definition construction.

use std::sync::{Arc, OnceLock};

use rustc_hash::{FxHashMap, FxHashSet};
use tessera_primitives::Descriptor;

use super::handlers::HandlerDefs;
use super::inherit::{inherit_rendering, inherit_styles};
use super::{ComponentDef, MethodDef};
use crate::config::{ComponentConfig, DefRef};
use crate::defs::{AttributeDefSet, DefKind, LayoutsDef, LibraryDefs};
use crate::error::{DefError, Result};
use crate::service::ComponentService;

impl ComponentDef {
	/// Builds a definition from `config` without going through a cache.
	///
	/// Sub-definitions are still resolved through `service`. Use
	/// [`crate::DefRegistry::get_def`] to get the shared, memoized instance.
	pub fn construct(config: &ComponentConfig, service: &dyn ComponentService) -> Result<Self> {
		let descriptor = match config.descriptor.as_deref() {
			Some(name) => Descriptor::parse(name)?,
			None => return Err(DefError::invalid(DefKind::Component, "missing descriptor")),
		};
		Self::new(descriptor, config, service)
	}

	pub(crate) fn new(descriptor: Descriptor, config: &ComponentConfig, service: &dyn ComponentService) -> Result<Self> {
		let events = service.event_service();

		let super_def = config
			.super_def
			.as_ref()
			.map(|super_ref| resolve_super(&descriptor, super_ref, service))
			.transpose()?;

		let style_def = config
			.style_def
			.as_ref()
			.map(|style| service.style_def(&descriptor, style))
			.transpose()?;

		let controller_def = config.controller_def.as_ref().map(|def| service.controller_def(def)).transpose()?;
		let model_def = config.model_def.as_ref().map(|def| service.model_def(def)).transpose()?;

		let method_defs = config
			.method_defs
			.iter()
			.map(|m| MethodDef {
				name: m.name.clone(),
				action: m.action.clone(),
			})
			.collect();

		let mut interfaces = FxHashSet::default();
		for intf in &config.interfaces {
			interfaces.insert(Descriptor::parse(intf)?.full_name());
		}

		let layouts = config.layouts.as_ref().map(LayoutsDef::new).transpose()?;

		let location_change_event_def = config
			.location_change_event_def
			.as_ref()
			.map(|def| events.event_def(def))
			.transpose()?;

		let mut register_event_defs = FxHashMap::default();
		let mut all_events = Vec::with_capacity(config.register_event_defs.len());
		for reg in &config.register_event_defs {
			all_events.push(reg.attribute_name.clone());
			register_event_defs.insert(reg.attribute_name.clone(), events.event_def(&reg.event_def)?);
		}

		let handlers = HandlerDefs::build(&config.handler_defs, &*events)?;

		for sub_def in &config.sub_defs {
			service.component_def(sub_def)?;
		}

		let library_defs = if config.imports.is_empty() {
			None
		} else {
			let mut libs = LibraryDefs::with_capacity(config.imports.len());
			for import in &config.imports {
				let lib = service.library_def(&import.name, import.library_def.as_ref())?;
				libs.insert(import.property.clone(), lib);
			}
			Some(libs)
		};

		let attribute_defs = AttributeDefSet::new(&config.attribute_defs)?;

		let renderer_def = service.renderer_def(&descriptor, config.renderer_def.as_ref())?;
		let rendering_details = inherit_rendering(renderer_def.as_ref(), super_def.as_deref());
		let all_style_defs = inherit_styles(style_def.as_ref(), super_def.as_deref());

		let helper_def = service.helper_def(&descriptor, config.helper_def.as_ref(), library_defs.as_ref())?;
		let provider_def = config
			.provider_def
			.as_ref()
			.map(|def| service.provider_def(&descriptor, def))
			.transpose()?;

		Ok(Self {
			descriptor,
			super_def,
			is_abstract: config.is_abstract,
			has_remote_deps: config.has_server_deps,
			style_def,
			all_style_defs,
			css_preloaded: config.is_css_preloaded,
			style_class_name: OnceLock::new(),
			renderer_def,
			rendering_details,
			controller_def,
			model_def,
			helper_def,
			provider_def,
			library_defs,
			method_defs,
			interfaces,
			facets: config.facets.clone(),
			attribute_defs,
			layouts,
			location_change_event_def,
			register_event_defs,
			all_events,
			handlers,
			framework: service.config().clone(),
			events,
			styles: service.style_sink(),
		})
	}
}

fn resolve_super(
	descriptor: &Descriptor,
	super_ref: &DefRef<ComponentConfig>,
	service: &dyn ComponentService,
) -> Result<Arc<ComponentDef>> {
	service
		.component_def(super_ref)
		.map_err(|source| DefError::UnresolvedSuperDefinition {
			descriptor: descriptor.to_string(),
			super_descriptor: super_ref.descriptor_str().unwrap_or("<missing>").to_string(),
			source: Box::new(source),
		})
}
