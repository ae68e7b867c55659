//! Handler classification.
//!
//! Declared handler records are sorted once, at construction, into three
//! disjoint groups. Downstream layers only ever see the typed groups.

use std::sync::Arc;

use crate::config::{DefRef, EventConfig, HandlerConfig};
use crate::defs::EventDef;
use crate::error::Result;
use crate::service::EventService;

/// Which group a handler record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
	/// Global subscription to an application event.
	Application,
	/// Bound to a data-binding expression.
	Value,
	/// Intra-component binding, interpreted by the event layer.
	Component,
}

impl HandlerKind {
	/// Classifies a raw record.
	///
	/// `eventDef` wins over `value`, so a record declaring both is an
	/// application handler. An empty `eventDef` name or `value` counts as
	/// absent.
	pub fn of(config: &HandlerConfig) -> Self {
		if config.event_def.as_ref().is_some_and(|def| !is_blank(def)) {
			Self::Application
		} else if config.value.as_deref().is_some_and(|v| !v.is_empty()) {
			Self::Value
		} else {
			Self::Component
		}
	}
}

fn is_blank(def: &DefRef<EventConfig>) -> bool {
	matches!(def, DefRef::Name(name) if name.is_empty())
}

/// Subscription to an application event.
#[derive(Debug, Clone)]
pub struct AppHandlerDef {
	pub action: Option<String>,
	pub event_def: Arc<EventDef>,
}

/// Handler fired when a bound value changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueHandlerDef {
	pub name: Option<String>,
	pub value: String,
	pub action: Option<String>,
}

/// A classified handler.
#[derive(Debug, Clone)]
pub enum HandlerDef {
	Application(AppHandlerDef),
	Value(ValueHandlerDef),
	/// Left as declared for the event layer.
	Component(HandlerConfig),
}

impl HandlerDef {
	/// Classifies `config`, resolving the event type of application handlers.
	pub fn classify(config: &HandlerConfig, events: &dyn EventService) -> Result<Self> {
		Ok(match (HandlerKind::of(config), &config.event_def, &config.value) {
			(HandlerKind::Application, Some(event_def), _) => Self::Application(AppHandlerDef {
				action: config.action.clone(),
				event_def: events.event_def(event_def)?,
			}),
			(HandlerKind::Value, _, Some(value)) => Self::Value(ValueHandlerDef {
				name: config.name.clone(),
				value: value.clone(),
				action: config.action.clone(),
			}),
			_ => Self::Component(config.clone()),
		})
	}

	pub fn kind(&self) -> HandlerKind {
		match self {
			Self::Application(_) => HandlerKind::Application,
			Self::Value(_) => HandlerKind::Value,
			Self::Component(_) => HandlerKind::Component,
		}
	}
}

/// The three handler groups of a component. A group with no handlers is
/// `None`, never an empty vector.
#[derive(Debug, Clone, Default)]
pub struct HandlerDefs {
	app: Option<Vec<AppHandlerDef>>,
	component: Option<Vec<HandlerConfig>>,
	value: Option<Vec<ValueHandlerDef>>,
}

impl HandlerDefs {
	pub fn build(configs: &[HandlerConfig], events: &dyn EventService) -> Result<Self> {
		let mut defs = Self::default();
		for config in configs {
			defs.push(HandlerDef::classify(config, events)?);
		}
		Ok(defs)
	}

	fn push(&mut self, def: HandlerDef) {
		match def {
			HandlerDef::Application(h) => self.app.get_or_insert_with(Vec::new).push(h),
			HandlerDef::Value(h) => self.value.get_or_insert_with(Vec::new).push(h),
			HandlerDef::Component(h) => self.component.get_or_insert_with(Vec::new).push(h),
		}
	}

	pub fn app(&self) -> Option<&[AppHandlerDef]> {
		self.app.as_deref()
	}

	pub fn component(&self) -> Option<&[HandlerConfig]> {
		self.component.as_deref()
	}

	pub fn value(&self) -> Option<&[ValueHandlerDef]> {
		self.value.as_deref()
	}

	/// Total number of handlers across the three groups.
	pub fn len(&self) -> usize {
		self.app.as_ref().map_or(0, Vec::len)
			+ self.component.as_ref().map_or(0, Vec::len)
			+ self.value.as_ref().map_or(0, Vec::len)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
