//! Style definitions.

use std::sync::OnceLock;

use tessera_primitives::Descriptor;

use crate::config::StyleConfig;
use crate::service::StyleSink;

/// A component's stylesheet and the class name it scopes its rules under.
#[derive(Debug)]
pub struct StyleDef {
	descriptor: Descriptor,
	class_name: String,
	code: Option<String>,
	applied: OnceLock<()>,
}

impl StyleDef {
	pub fn new(descriptor: Descriptor, config: &StyleConfig) -> Self {
		Self {
			descriptor,
			class_name: config.class_name.clone(),
			code: config.code.clone(),
			applied: OnceLock::new(),
		}
	}

	pub fn descriptor(&self) -> &Descriptor {
		&self.descriptor
	}

	pub fn class_name(&self) -> &str {
		&self.class_name
	}

	pub fn code(&self) -> Option<&str> {
		self.code.as_deref()
	}

	/// Injects this style's CSS into `sink`.
	///
	/// Runs at most once per definition no matter how many components share
	/// it or how many threads call concurrently.
	pub fn apply(&self, sink: &dyn StyleSink) {
		self.applied.get_or_init(|| {
			if let Some(code) = &self.code {
				tracing::debug!(style = %self.descriptor, "injecting stylesheet");
				sink.inject(&self.descriptor, code);
			}
		});
	}

	/// Returns true once [`StyleDef::apply`] has run.
	pub fn is_applied(&self) -> bool {
		self.applied.get().is_some()
	}
}
