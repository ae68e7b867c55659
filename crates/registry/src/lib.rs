//! Component definition registry and inheritance engine.
//!
//! Turns raw component configurations into resolved, immutable
//! [`ComponentDef`]s and memoizes exactly one definition per descriptor.
//!
//! # Layout
//!
//! - [`config`] - Raw configuration records, bundles and registry settings
//! - [`defs`] - Leaf definitions (style, controller, renderer, event, ...)
//! - [`component`] - The component definition engine: super-chain
//!   inheritance, handler classification, event lookup
//! - [`registry`] - [`DefRegistry`] and [`EventRegistry`]
//! - [`service`] - Collaborator traits the engine resolves through
//! - [`cache`] - Single-flight per-descriptor caches
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use tessera_registry::{ComponentConfig, DefRegistry, StyleConfig, StyleSheet};
//!
//! let sheet = Arc::new(StyleSheet::new());
//! let registry = DefRegistry::with_style_sink(sheet.clone());
//!
//! let mut button = ComponentConfig::new("ui:button");
//! button.style_def = Some(StyleConfig {
//! 	class_name: "btn".into(),
//! 	code: Some(".btn { color: red; }".into()),
//! 	..StyleConfig::default()
//! });
//! registry.register_component(button)?;
//!
//! let def = registry.get_def_by_name("ui:button")?;
//! assert_eq!(def.style_class_name(), "btn ");
//! assert_eq!(sheet.len(), 1);
//! # Ok::<(), tessera_registry::DefError>(())
//! ```

pub mod cache;
pub mod component;
pub mod config;
pub mod defs;
pub mod error;
pub mod registry;
pub mod service;

pub use component::{
	AppHandlerDef, ComponentDef, HandlerDef, HandlerDefs, HandlerKind, MethodDef, RenderingDetails, ValueHandlerDef,
};
pub use config::{
	ComponentConfig, DefBundle, DefConfig, DefRef, EventConfig, HandlerConfig, RegistryConfig, StyleConfig,
};
pub use defs::DefKind;
pub use error::{DefError, Result};
pub use registry::{DefRegistry, EventRegistry};
pub use service::{ComponentService, EventService, NullStyleSink, StyleSheet, StyleSink};
pub use tessera_primitives::{Descriptor, DescriptorError};
