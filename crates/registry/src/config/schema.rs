use serde::Deserialize;
use serde_json::Value;

use super::{DefConfig, DefRef};
use crate::defs::{ActionType, DefKind, EventType};

macro_rules! def_config {
	($ty:ty, $kind:expr) => {
		impl DefConfig for $ty {
			const KIND: DefKind = $kind;

			fn descriptor(&self) -> Option<&str> {
				self.descriptor.as_deref()
			}
		}
	};
}

/// Raw component configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentConfig {
	pub descriptor: Option<String>,
	pub super_def: Option<DefRef<ComponentConfig>>,
	pub style_def: Option<StyleConfig>,
	pub controller_def: Option<DefRef<ControllerConfig>>,
	pub model_def: Option<DefRef<ModelConfig>>,
	pub method_defs: Vec<MethodConfig>,
	/// Qualified names of directly implemented interfaces.
	pub interfaces: Vec<String>,
	pub facets: Vec<FacetConfig>,
	pub is_abstract: bool,
	pub layouts: Option<LayoutsConfig>,
	pub location_change_event_def: Option<DefRef<EventConfig>>,
	pub register_event_defs: Vec<RegisterEventConfig>,
	pub handler_defs: Vec<HandlerConfig>,
	/// Nested component configurations registered while this one is built.
	pub sub_defs: Vec<DefRef<ComponentConfig>>,
	pub imports: Vec<ImportConfig>,
	#[serde(rename = "isCSSPreloaded")]
	pub is_css_preloaded: bool,
	pub attribute_defs: Vec<AttributeConfig>,
	pub renderer_def: Option<DefRef<RendererConfig>>,
	pub helper_def: Option<DefRef<HelperConfig>>,
	pub provider_def: Option<DefRef<ProviderConfig>>,
	pub has_server_deps: bool,
}

impl ComponentConfig {
	/// Creates an otherwise empty configuration for `descriptor`.
	pub fn new(descriptor: impl Into<String>) -> Self {
		Self {
			descriptor: Some(descriptor.into()),
			..Self::default()
		}
	}
}

def_config!(ComponentConfig, DefKind::Component);

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
	pub descriptor: Option<String>,
	pub class_name: String,
	/// CSS text injected the first time the style is applied.
	pub code: Option<String>,
}

def_config!(StyleConfig, DefKind::Style);

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControllerConfig {
	pub descriptor: Option<String>,
	pub action_defs: Vec<ActionConfig>,
}

def_config!(ControllerConfig, DefKind::Controller);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionConfig {
	pub name: String,
	#[serde(default)]
	pub action_type: ActionType,
	#[serde(default)]
	pub params: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelConfig {
	pub descriptor: Option<String>,
	pub members: Vec<ValueConfig>,
}

def_config!(ModelConfig, DefKind::Model);

#[derive(Debug, Clone, Deserialize)]
pub struct ValueConfig {
	pub name: String,
	#[serde(rename = "type")]
	pub type_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RendererConfig {
	pub descriptor: Option<String>,
	/// Names of the lifecycle hooks the renderer overrides (`render`,
	/// `rerender`, `afterRender`, `unrender`).
	pub hooks: Vec<String>,
}

def_config!(RendererConfig, DefKind::Renderer);

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HelperConfig {
	pub descriptor: Option<String>,
	pub functions: Vec<String>,
}

def_config!(HelperConfig, DefKind::Helper);

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderConfig {
	pub descriptor: Option<String>,
}

def_config!(ProviderConfig, DefKind::Provider);

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LibraryConfig {
	pub descriptor: Option<String>,
	pub includes: Vec<String>,
}

def_config!(LibraryConfig, DefKind::Library);

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventConfig {
	pub descriptor: Option<String>,
	#[serde(rename = "type")]
	pub event_type: EventType,
	pub super_def: Option<DefRef<EventConfig>>,
	pub attribute_defs: Vec<AttributeConfig>,
}

def_config!(EventConfig, DefKind::Event);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeConfig {
	pub name: String,
	#[serde(rename = "type", default = "default_attribute_type")]
	pub type_def: String,
	#[serde(default)]
	pub required: bool,
	#[serde(default)]
	pub default: Option<Value>,
}

fn default_attribute_type() -> String {
	"Object".to_string()
}

/// Entry of `registerEventDefs`: a component-local name bound to an event type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEventConfig {
	pub attribute_name: String,
	pub event_def: DefRef<EventConfig>,
}

/// A declared handler, classified at construction time by which field is set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HandlerConfig {
	pub name: Option<String>,
	pub action: Option<String>,
	pub event_def: Option<DefRef<EventConfig>>,
	pub value: Option<String>,
	pub phase: Option<String>,
	pub include_facets: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportConfig {
	/// Local name the library is bound to.
	pub property: String,
	/// Qualified name of the library.
	pub name: String,
	#[serde(default)]
	pub library_def: Option<DefRef<LibraryConfig>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MethodConfig {
	pub name: String,
	#[serde(default)]
	pub action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FacetConfig {
	pub descriptor: String,
	#[serde(default)]
	pub value: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutsConfig {
	pub default_layout: Option<String>,
	pub catchall: Option<String>,
	pub layouts: Vec<LayoutConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
	pub name: String,
	#[serde(default)]
	pub title: Option<String>,
	#[serde(default)]
	pub items: Vec<LayoutItemConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutItemConfig {
	pub container: String,
	#[serde(default)]
	pub action: Option<String>,
}
