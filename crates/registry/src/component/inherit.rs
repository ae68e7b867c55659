//! Renderer and style inheritance along the super chain.
//!
//! Both are computed once at construction from the super definition's
//! already-merged state, so each level costs O(1) chain hops.

use std::sync::Arc;

use super::ComponentDef;
use crate::defs::{RendererDef, StyleDef};

/// The renderer a component renders with and how far up the chain it lives.
#[derive(Debug, Clone)]
pub struct RenderingDetails {
	pub renderer_def: Arc<RendererDef>,
	/// Chain hops to the definition that declares the renderer; 0 means local.
	pub distance: u32,
}

/// Picks the local renderer, else the super's renderer one hop further away.
///
/// `None` when nothing in the chain declares a renderer, which marks the
/// definition as not instantiable on the client.
pub(crate) fn inherit_rendering(
	local: Option<&Arc<RendererDef>>,
	super_def: Option<&ComponentDef>,
) -> Option<RenderingDetails> {
	if let Some(renderer_def) = local {
		return Some(RenderingDetails {
			renderer_def: Arc::clone(renderer_def),
			distance: 0,
		});
	}
	super_def
		.and_then(ComponentDef::rendering_details)
		.map(|inherited| RenderingDetails {
			renderer_def: Arc::clone(&inherited.renderer_def),
			distance: inherited.distance + 1,
		})
}

/// Ancestor styles root-first, then the local style.
pub(crate) fn inherit_styles(local: Option<&Arc<StyleDef>>, super_def: Option<&ComponentDef>) -> Vec<Arc<StyleDef>> {
	let inherited = super_def.map(ComponentDef::all_style_defs).unwrap_or_default();
	let mut styles = Vec::with_capacity(inherited.len() + 1);
	styles.extend(inherited.iter().cloned());
	styles.extend(local.cloned());
	styles
}
