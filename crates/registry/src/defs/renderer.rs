use bitflags::bitflags;
use tessera_primitives::Descriptor;

use super::DefKind;
use crate::config::RendererConfig;
use crate::error::{DefError, Result};

bitflags! {
	/// Render lifecycle hooks a renderer overrides.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct RenderHooks: u8 {
		const RENDER = 1 << 0;
		const RERENDER = 1 << 1;
		const AFTER_RENDER = 1 << 2;
		const UNRENDER = 1 << 3;
	}
}

impl RenderHooks {
	/// Maps a hook name as it appears in configuration.
	pub fn from_hook_name(name: &str) -> Option<Self> {
		match name {
			"render" => Some(Self::RENDER),
			"rerender" => Some(Self::RERENDER),
			"afterRender" => Some(Self::AFTER_RENDER),
			"unrender" => Some(Self::UNRENDER),
			_ => None,
		}
	}
}

/// Renderer definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererDef {
	descriptor: Descriptor,
	hooks: RenderHooks,
}

impl RendererDef {
	pub fn new(descriptor: Descriptor, config: &RendererConfig) -> Result<Self> {
		let mut hooks = RenderHooks::empty();
		for name in &config.hooks {
			let hook = RenderHooks::from_hook_name(name).ok_or_else(|| {
				DefError::invalid(DefKind::Renderer, format!("{descriptor}: unknown render hook '{name}'"))
			})?;
			hooks |= hook;
		}
		Ok(Self { descriptor, hooks })
	}

	pub fn descriptor(&self) -> &Descriptor {
		&self.descriptor
	}

	pub fn hooks(&self) -> RenderHooks {
		self.hooks
	}

	pub fn overrides(&self, hook: RenderHooks) -> bool {
		self.hooks.contains(hook)
	}
}
