//! Leaf definitions.
//!
//! Each leaf owns the data declared for it and nothing else. Inheritance is
//! the business of [`crate::component`]; the only chain a leaf knows about is
//! an event's super event.

pub mod attribute;
pub mod controller;
pub mod event;
pub mod helper;
pub mod layouts;
pub mod library;
pub mod model;
pub mod provider;
pub mod renderer;
pub mod style;

use std::fmt;

pub use attribute::{AttributeDef, AttributeDefSet, FACET_TYPE};
pub use controller::{ActionDef, ActionType, ControllerDef};
pub use event::{EventDef, EventType};
pub use helper::HelperDef;
pub use layouts::{LayoutDef, LayoutItemDef, LayoutsDef};
pub use library::{LibraryDef, LibraryDefs};
pub use model::{ModelDef, ValueDef};
pub use provider::ProviderDef;
pub use renderer::{RenderHooks, RendererDef};
pub use style::StyleDef;

/// The kinds of definitions the registry resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefKind {
	Component,
	Event,
	Style,
	Controller,
	Model,
	Renderer,
	Helper,
	Provider,
	Library,
	Layouts,
	Attribute,
}

impl DefKind {
	/// Returns the lowercase label used in logs and errors.
	pub const fn label(self) -> &'static str {
		match self {
			Self::Component => "component",
			Self::Event => "event",
			Self::Style => "style",
			Self::Controller => "controller",
			Self::Model => "model",
			Self::Renderer => "renderer",
			Self::Helper => "helper",
			Self::Provider => "provider",
			Self::Library => "library",
			Self::Layouts => "layouts",
			Self::Attribute => "attribute",
		}
	}

	/// Prefix of descriptors derived from a component's own name, e.g. the
	/// renderer of `markup://ui:button` is `js://ui.button`.
	pub const fn derived_prefix(self) -> &'static str {
		match self {
			Self::Style => "css",
			Self::Component | Self::Event | Self::Layouts | Self::Attribute => "markup",
			Self::Controller | Self::Model | Self::Renderer | Self::Helper | Self::Provider | Self::Library => "js",
		}
	}
}

impl fmt::Display for DefKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}
