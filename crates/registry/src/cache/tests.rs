use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use tessera_primitives::Descriptor;

use super::{DefCache, DefTable};
use crate::config::{DefRef, LibraryConfig};
use crate::defs::{DefKind, LibraryDef};
use crate::error::DefError;

fn desc(name: &str) -> Descriptor {
	Descriptor::parse(name).unwrap()
}

#[test]
fn test_builds_once_and_shares_instance() {
	let cache: DefCache<String> = DefCache::new(DefKind::Component);
	let builds = AtomicUsize::new(0);
	let key = desc("ui:button");

	let first = cache
		.get_or_try_init(&key, || {
			builds.fetch_add(1, Ordering::SeqCst);
			Ok("button".to_string())
		})
		.unwrap();
	let second = cache
		.get_or_try_init(&key, || {
			builds.fetch_add(1, Ordering::SeqCst);
			Ok("other".to_string())
		})
		.unwrap();

	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(builds.load(Ordering::SeqCst), 1);
	assert_eq!(cache.len(), 1);
}

#[test]
fn test_failed_construction_leaves_no_entry() {
	let cache: DefCache<u32> = DefCache::new(DefKind::Component);
	let key = desc("ui:broken");

	let err = cache
		.get_or_try_init(&key, || Err(DefError::invalid(DefKind::Component, "boom")))
		.unwrap_err();
	assert!(matches!(err, DefError::InvalidDefinition { .. }));
	assert!(cache.get(&key).is_none());
	assert!(cache.is_empty());

	let value = cache.get_or_try_init(&key, || Ok(7)).unwrap();
	assert_eq!(*value, 7);
}

#[test]
fn test_panicking_construction_leaves_no_entry() {
	let cache: DefCache<u32> = DefCache::new(DefKind::Component);
	let key = desc("ui:panics");

	let outcome = catch_unwind(AssertUnwindSafe(|| {
		let _ = cache.get_or_try_init(&key, || panic!("construction panicked"));
	}));
	assert!(outcome.is_err());
	assert!(cache.get(&key).is_none());
	assert_eq!(*cache.get_or_try_init(&key, || Ok(3)).unwrap(), 3);
}

#[test]
fn test_reentrant_request_is_cyclic() {
	let cache: DefCache<u32> = DefCache::new(DefKind::Component);
	let key = desc("ui:loop");

	let err = cache
		.get_or_try_init(&key, || cache.get_or_try_init(&key, || Ok(1)).map(|v| *v))
		.unwrap_err();
	assert!(matches!(err, DefError::CyclicDefinition { .. }));
	assert!(cache.is_empty());
}

#[test]
fn test_nested_resolution_of_other_descriptor() {
	let cache: DefCache<u32> = DefCache::new(DefKind::Component);
	let outer = desc("ui:outer");
	let inner = desc("ui:inner");

	let value = cache
		.get_or_try_init(&outer, || {
			let inner = cache.get_or_try_init(&inner, || Ok(20))?;
			Ok(*inner + 1)
		})
		.unwrap();
	assert_eq!(*value, 21);
	assert_eq!(*cache.get(&inner).unwrap(), 20);
}

/// Concurrent resolvers of one descriptor join the in-flight construction.
#[test]
fn test_concurrent_resolution_is_single_flight() {
	const THREADS: usize = 8;
	let cache: DefCache<usize> = DefCache::new(DefKind::Component);
	let builds = AtomicUsize::new(0);
	let barrier = Barrier::new(THREADS);
	let key = desc("ui:shared");

	let results: Vec<Arc<usize>> = thread::scope(|s| {
		let handles: Vec<_> = (0..THREADS)
			.map(|_| {
				s.spawn(|| {
					barrier.wait();
					cache
						.get_or_try_init(&key, || {
							thread::sleep(Duration::from_millis(20));
							Ok(builds.fetch_add(1, Ordering::SeqCst))
						})
						.unwrap()
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});

	assert_eq!(builds.load(Ordering::SeqCst), 1);
	for result in &results[1..] {
		assert!(Arc::ptr_eq(&results[0], result));
	}
}

/// Two builders that need each other's descriptor fail fast instead of
/// deadlocking.
#[test]
fn test_cross_thread_cycle_is_detected() {
	let cache: DefCache<u32> = DefCache::new(DefKind::Component);
	let barrier = Barrier::new(2);
	let x = desc("ui:x");
	let y = desc("ui:y");

	let (a, b) = thread::scope(|s| {
		let a = s.spawn(|| {
			cache.get_or_try_init(&x, || {
				barrier.wait();
				cache.get_or_try_init(&y, || Ok(2)).map(|v| *v + 10)
			})
		});
		let b = s.spawn(|| {
			cache.get_or_try_init(&y, || {
				barrier.wait();
				cache.get_or_try_init(&x, || Ok(1)).map(|v| *v + 20)
			})
		});
		(a.join().unwrap(), b.join().unwrap())
	});

	let cyclic = [&a, &b]
		.iter()
		.filter(|r| matches!(r, Err(DefError::CyclicDefinition { .. })))
		.count();
	assert_eq!(cyclic, 1, "exactly one builder should observe the cycle");
	assert!(a.is_ok() || b.is_ok());
}

#[test]
fn test_table_prefers_registered_config() {
	let table: DefTable<LibraryConfig, LibraryDef> = DefTable::new();
	table
		.register(LibraryConfig {
			descriptor: Some("js://ui.utils".into()),
			includes: vec!["format".into()],
		})
		.unwrap();

	let inline = DefRef::from(LibraryConfig {
		descriptor: Some("js://ui.utils".into()),
		includes: vec![],
	});
	let lib = table
		.resolve(&inline, None, |desc, config| Ok(LibraryDef::new(desc, config)))
		.unwrap();
	assert!(lib.has_include("format"));
}

#[test]
fn test_table_unknown_name_is_unresolved() {
	let table: DefTable<LibraryConfig, LibraryDef> = DefTable::new();
	let err = table
		.resolve(&DefRef::named("js://ui.missing"), None, |desc, config| {
			Ok(LibraryDef::new(desc, config))
		})
		.unwrap_err();
	assert!(matches!(
		err,
		DefError::UnresolvedDependency { kind: DefKind::Library, .. }
	));
}

#[test]
fn test_table_requires_descriptor() {
	let table: DefTable<LibraryConfig, LibraryDef> = DefTable::new();
	assert!(matches!(
		table.register(LibraryConfig::default()),
		Err(DefError::InvalidDefinition { .. })
	));
	let err = table
		.resolve(&DefRef::from(LibraryConfig::default()), None, |desc, config| {
			Ok(LibraryDef::new(desc, config))
		})
		.unwrap_err();
	assert!(matches!(err, DefError::InvalidDefinition { .. }));
}
