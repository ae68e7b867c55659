//! Single-flight definition caches.
//!
//! # Role
//!
//! [`DefCache`] memoizes one definition per descriptor. [`DefTable`] pairs a
//! cache with the raw configurations registered for lazy resolution.
//!
//! # Invariants
//!
//! - At most one construction runs per descriptor. Concurrent resolvers of a
//!   descriptor under construction wait for it and then share its result.
//! - A failed or panicking construction leaves no entry behind; waiters wake
//!   up and retry from scratch.
//! - Requesting a descriptor that is under construction on the requesting
//!   thread, or whose builder is (transitively) waiting on the requesting
//!   thread, fails with [`DefError::CyclicDefinition`] instead of blocking.

use std::sync::Arc;
use std::thread::{self, ThreadId};

use parking_lot::{Condvar, Mutex, RwLock};
use rustc_hash::FxHashMap;
use tessera_primitives::Descriptor;
use tracing::{debug, trace, warn};

use crate::config::{DefConfig, DefRef};
use crate::defs::DefKind;
use crate::error::{DefError, Result};

enum Slot<T> {
	Building(ThreadId),
	Ready(Arc<T>),
}

struct CacheState<T> {
	slots: FxHashMap<Descriptor, Slot<T>>,
	/// Descriptor each blocked thread is waiting on.
	waiting: FxHashMap<ThreadId, Descriptor>,
}

impl<T> CacheState<T> {
	/// Follows the wait-for chain starting at `owner` and reports whether it
	/// reaches `me`.
	fn leads_back_to(&self, owner: ThreadId, me: ThreadId) -> bool {
		let mut current = owner;
		for _ in 0..=self.waiting.len() {
			let Some(desc) = self.waiting.get(&current) else {
				return false;
			};
			match self.slots.get(desc) {
				Some(Slot::Building(next)) if *next == me => return true,
				Some(Slot::Building(next)) => current = *next,
				_ => return false,
			}
		}
		false
	}
}

/// Memoizes one definition per descriptor with single-flight construction.
pub struct DefCache<T> {
	kind: DefKind,
	state: Mutex<CacheState<T>>,
	settled: Condvar,
}

impl<T> DefCache<T> {
	pub fn new(kind: DefKind) -> Self {
		Self {
			kind,
			state: Mutex::new(CacheState {
				slots: FxHashMap::default(),
				waiting: FxHashMap::default(),
			}),
			settled: Condvar::new(),
		}
	}

	pub fn kind(&self) -> DefKind {
		self.kind
	}

	/// Returns the finished definition for `desc`, if any.
	pub fn get(&self, desc: &Descriptor) -> Option<Arc<T>> {
		match self.state.lock().slots.get(desc) {
			Some(Slot::Ready(def)) => Some(Arc::clone(def)),
			_ => None,
		}
	}

	/// Number of finished definitions.
	pub fn len(&self) -> usize {
		self.state
			.lock()
			.slots
			.values()
			.filter(|slot| matches!(slot, Slot::Ready(_)))
			.count()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the cached definition for `desc`, running `init` to build it
	/// if no other resolver has.
	///
	/// `init` runs without the cache lock held, so it may resolve other
	/// descriptors through this same cache.
	pub fn get_or_try_init<F>(&self, desc: &Descriptor, init: F) -> Result<Arc<T>>
	where
		F: FnOnce() -> Result<T>,
	{
		let me = thread::current().id();
		let mut state = self.state.lock();
		loop {
			let owner = match state.slots.get(desc) {
				Some(Slot::Ready(def)) => {
					trace!(kind = %self.kind, descriptor = %desc, "definition cache hit");
					return Ok(Arc::clone(def));
				}
				Some(Slot::Building(owner)) => *owner,
				None => break,
			};

			if owner == me || state.leads_back_to(owner, me) {
				return Err(DefError::CyclicDefinition {
					kind: self.kind,
					descriptor: desc.to_string(),
				});
			}

			trace!(kind = %self.kind, descriptor = %desc, "waiting for in-flight construction");
			state.waiting.insert(me, desc.clone());
			self.settled.wait(&mut state);
			state.waiting.remove(&me);
		}

		state.slots.insert(desc.clone(), Slot::Building(me));
		drop(state);

		let mut guard = BuildGuard {
			cache: self,
			desc,
			armed: true,
		};

		match init() {
			Ok(def) => {
				let def = Arc::new(def);
				guard.armed = false;
				self.state.lock().slots.insert(desc.clone(), Slot::Ready(Arc::clone(&def)));
				self.settled.notify_all();
				debug!(kind = %self.kind, descriptor = %desc, "definition constructed");
				Ok(def)
			}
			Err(err) => {
				warn!(kind = %self.kind, descriptor = %desc, error = %err, "definition construction failed");
				Err(err)
			}
		}
	}
}

/// Clears an in-flight slot unless construction completed.
struct BuildGuard<'a, T> {
	cache: &'a DefCache<T>,
	desc: &'a Descriptor,
	armed: bool,
}

impl<T> Drop for BuildGuard<'_, T> {
	fn drop(&mut self) {
		if self.armed {
			self.cache.state.lock().slots.remove(self.desc);
			self.cache.settled.notify_all();
		}
	}
}

/// Registered raw configurations plus the cache of definitions built from
/// them.
pub struct DefTable<C, T> {
	configs: RwLock<FxHashMap<Descriptor, Arc<C>>>,
	cache: DefCache<T>,
}

impl<C: DefConfig, T> Default for DefTable<C, T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<C: DefConfig, T> DefTable<C, T> {
	pub fn new() -> Self {
		Self {
			configs: RwLock::new(FxHashMap::default()),
			cache: DefCache::new(C::KIND),
		}
	}

	/// Registers `config` under its declared descriptor.
	///
	/// Has no effect on a definition that was already built.
	pub fn register(&self, config: C) -> Result<Descriptor> {
		let desc = match config.descriptor() {
			Some(name) => Descriptor::parse(name)?,
			None => return Err(DefError::invalid(C::KIND, "missing descriptor")),
		};
		trace!(kind = %C::KIND, descriptor = %desc, "registering configuration");
		self.configs.write().insert(desc.clone(), Arc::new(config));
		Ok(desc)
	}

	pub fn is_registered(&self, desc: &Descriptor) -> bool {
		self.configs.read().contains_key(desc)
	}

	/// Returns the finished definition for `desc`, if it was built.
	pub fn get(&self, desc: &Descriptor) -> Option<Arc<T>> {
		self.cache.get(desc)
	}

	pub fn cache(&self) -> &DefCache<T> {
		&self.cache
	}

	/// Resolves `def`; `derived` names the definition when the reference
	/// itself does not.
	pub fn resolve<F>(&self, def: &DefRef<C>, derived: Option<&Descriptor>, build: F) -> Result<Arc<T>>
	where
		F: FnOnce(Descriptor, &C) -> Result<T>,
	{
		let desc = def.resolve_descriptor(derived)?;
		self.resolve_descriptor(&desc, def.config(), build)
	}

	/// Resolves `desc` from, in order: the cache, the registered
	/// configuration, the `inline` configuration.
	pub fn resolve_descriptor<F>(&self, desc: &Descriptor, inline: Option<&C>, build: F) -> Result<Arc<T>>
	where
		F: FnOnce(Descriptor, &C) -> Result<T>,
	{
		if let Some(def) = self.cache.get(desc) {
			return Ok(def);
		}

		let registered = self.configs.read().get(desc).cloned();
		let config = match (registered.as_deref(), inline) {
			(Some(config), _) | (None, Some(config)) => config,
			(None, None) => return Err(DefError::unresolved(C::KIND, desc.qualified_name())),
		};
		self.cache.get_or_try_init(desc, || build(desc.clone(), config))
	}
}

#[cfg(test)]
mod tests;
