use indexmap::IndexMap;

use super::DefKind;
use crate::config::LayoutsConfig;
use crate::error::{DefError, Result};

/// One container slot of a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutItemDef {
	pub container: String,
	pub action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDef {
	name: String,
	title: Option<String>,
	items: Vec<LayoutItemDef>,
}

impl LayoutDef {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	pub fn items(&self) -> &[LayoutItemDef] {
		&self.items
	}
}

/// Named layouts of an application, with the default and catch-all picks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutsDef {
	default_layout: Option<String>,
	catchall: Option<String>,
	layouts: IndexMap<String, LayoutDef>,
}

impl LayoutsDef {
	/// Builds the layouts; `default_layout` and `catchall` must name a
	/// declared layout.
	pub fn new(config: &LayoutsConfig) -> Result<Self> {
		let mut layouts = IndexMap::with_capacity(config.layouts.len());
		for layout in &config.layouts {
			let def = LayoutDef {
				name: layout.name.clone(),
				title: layout.title.clone(),
				items: layout
					.items
					.iter()
					.map(|item| LayoutItemDef {
						container: item.container.clone(),
						action: item.action.clone(),
					})
					.collect(),
			};
			layouts.insert(layout.name.clone(), def);
		}

		for name in [&config.default_layout, &config.catchall].into_iter().flatten() {
			if !layouts.contains_key(name) {
				return Err(DefError::invalid(DefKind::Layouts, format!("unknown layout '{name}'")));
			}
		}

		Ok(Self {
			default_layout: config.default_layout.clone(),
			catchall: config.catchall.clone(),
			layouts,
		})
	}

	pub fn layout(&self, name: &str) -> Option<&LayoutDef> {
		self.layouts.get(name)
	}

	pub fn default_layout(&self) -> Option<&LayoutDef> {
		self.default_layout.as_deref().and_then(|name| self.layouts.get(name))
	}

	pub fn catchall(&self) -> Option<&LayoutDef> {
		self.catchall.as_deref().and_then(|name| self.layouts.get(name))
	}

	pub fn layouts(&self) -> impl Iterator<Item = &LayoutDef> {
		self.layouts.values()
	}
}
