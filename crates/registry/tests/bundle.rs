//! End-to-end resolution of a loaded definition bundle.

use std::sync::Arc;
use std::thread;

use tessera_registry::{
	DefBundle, DefError, DefRegistry, Descriptor, EventRegistry, EventService, HandlerKind, RegistryConfig, StyleSheet,
};

const APP_BUNDLE: &str = r#"{
	"events": [
		{ "descriptor": "aura:valueChange", "type": "VALUE" },
		{ "descriptor": "aura:locationChange", "type": "APPLICATION" },
		{ "descriptor": "ui:press" },
		{ "descriptor": "ui:select", "superDef": "ui:press", "attributeDefs": [{ "name": "index", "type": "Integer" }] }
	],
	"libraries": [
		{ "descriptor": "js://ui.format", "includes": ["dates", "numbers"] }
	],
	"controllers": [
		{
			"descriptor": "js://ui.listController",
			"actionDefs": [
				{ "name": "load", "actionType": "SERVER", "params": ["page"] },
				{ "name": "select" }
			]
		}
	],
	"components": [
		{
			"descriptor": "aura:component",
			"isAbstract": true,
			"rendererDef": { "hooks": ["render", "afterRender"] },
			"attributeDefs": [{ "name": "body", "type": "Aura.Component[]" }]
		},
		{
			"descriptor": "ui:widget",
			"superDef": "aura:component",
			"isAbstract": true,
			"interfaces": ["ui:focusable"],
			"styleDef": { "className": "uiWidget", "code": ".uiWidget { display: block; }" }
		},
		{
			"descriptor": "ui:list",
			"superDef": "ui:widget",
			"controllerDef": "js://ui.listController",
			"styleDef": { "className": "uiList", "code": ".uiList { margin: 0; }" },
			"helperDef": { "functions": ["renderRow"] },
			"imports": [{ "property": "fmt", "name": "js://ui.format" }],
			"registerEventDefs": [{ "attributeName": "select", "eventDef": "ui:select" }],
			"handlerDefs": [
				{ "eventDef": "aura:locationChange", "action": "c.onNavigate" },
				{ "name": "change", "value": "{!v.items}", "action": "c.onItems" },
				{ "name": "press", "action": "c.onPress" }
			],
			"methodDefs": [{ "name": "refresh", "action": "c.load" }],
			"attributeDefs": [{ "name": "items", "type": "List", "required": true }]
		},
		{
			"descriptor": "ui:app",
			"superDef": "aura:component",
			"hasServerDeps": true,
			"subDefs": ["ui:list"],
			"layouts": {
				"defaultLayout": "home",
				"catchall": "home",
				"layouts": [
					{ "name": "home", "title": "Home", "items": [{ "container": "main", "action": "c.showHome" }] },
					{ "name": "detail", "items": [{ "container": "main" }] }
				]
			}
		}
	]
}"#;

fn load() -> (DefRegistry, Arc<StyleSheet>) {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
	let sheet = Arc::new(StyleSheet::new());
	let registry = DefRegistry::with_style_sink(sheet.clone());
	registry.load_bundle(DefBundle::from_json(APP_BUNDLE).unwrap()).unwrap();
	(registry, sheet)
}

fn desc(name: &str) -> Descriptor {
	Descriptor::parse(name).unwrap()
}

#[test]
fn test_app_resolves_with_sub_definitions() {
	let (registry, _) = load();

	let app = registry.get_def_by_name("ui:app").unwrap();
	assert!(app.has_remote_dependencies());
	assert!(registry.cached_def(&desc("ui:list")).is_some());
	assert!(registry.cached_def(&desc("ui:widget")).is_some());

	let layouts = app.layouts().unwrap();
	assert_eq!(layouts.default_layout().unwrap().title(), Some("Home"));
	assert_eq!(layouts.catchall().unwrap().name(), "home");
	assert_eq!(layouts.layout("detail").unwrap().items()[0].container, "main");
	assert_eq!(layouts.layouts().count(), 2);
	assert_eq!(app.location_change_event(), "markup://aura:locationChange");
}

#[test]
fn test_list_inherits_through_abstract_chain() {
	let (registry, sheet) = load();
	let list = registry.get_def(&desc("ui:list")).unwrap();

	assert!(list.is_instance_of("ui:widget"));
	assert!(list.is_instance_of("aura:component"));
	assert!(list.is_instance_of("ui:focusable"));
	assert!(!list.is_abstract());

	let rendering = list.rendering_details().unwrap();
	assert_eq!(rendering.distance, 2);
	assert_eq!(rendering.renderer_def.descriptor().qualified_name(), "js://aura.component");

	assert_eq!(list.style_class_name(), "uiWidget uiList ");
	assert_eq!(sheet.order(), [desc("css://ui.widget"), desc("css://ui.list")]);
	assert!(sheet.css().contains(".uiList { margin: 0; }"));

	// Attributes are declared per level, not merged.
	assert!(list.attribute_defs().contains("items"));
	assert!(!list.attribute_defs().contains("body"));
}

#[test]
fn test_list_leaves_and_handlers() {
	let (registry, _) = load();
	let list = registry.get_def(&desc("ui:list")).unwrap();

	let controller = list.controller_def().unwrap();
	let actions: Vec<_> = controller.action_defs().map(|a| a.name()).collect();
	assert_eq!(actions, ["load", "select"]);
	assert_eq!(controller.action_def("load").unwrap().params(), ["page"]);

	assert_eq!(list.helper().unwrap(), ["renderRow"]);
	assert_eq!(list.helper_def().unwrap().imports(), ["fmt"]);
	assert!(list.library_defs().unwrap()["fmt"].has_include("numbers"));
	assert_eq!(list.method_def("refresh").unwrap().action.as_deref(), Some("c.load"));

	let handlers = list.handler_defs();
	assert_eq!(handlers.len(), 3);
	let kinds = [
		list.app_handler_defs().map(|h| (HandlerKind::Application, h.len())),
		list.value_handler_defs().map(|h| (HandlerKind::Value, h.len())),
		list.cmp_handler_defs().map(|h| (HandlerKind::Component, h.len())),
	];
	assert!(kinds.iter().all(|k| matches!(k, Some((_, 1)))));

	let select = list.event_def("select", false).unwrap();
	assert!(select.is_instance_of("ui:press"));
	assert_eq!(list.event_name_by_descriptor("markup://ui:select"), Some("select"));
	assert_eq!(
		list.event_def("change", true).unwrap().descriptor().qualified_name(),
		"markup://aura:valueChange"
	);
}

#[test]
fn test_concurrent_sessions_share_definitions() {
	let (registry, sheet) = load();
	let registry = Arc::new(registry);

	let class_names: Vec<String> = thread::scope(|s| {
		let handles: Vec<_> = ["ui:app", "ui:list", "ui:list", "ui:app", "ui:list", "ui:widget"]
			.into_iter()
			.map(|name| {
				let registry = Arc::clone(&registry);
				s.spawn(move || {
					let def = registry.get_def_by_name(name).unwrap();
					def.style_class_name().to_string()
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});

	assert!(class_names.contains(&"uiWidget uiList ".to_string()));
	assert_eq!(registry.len(), 4);
	assert_eq!(sheet.injections_of(&desc("css://ui.widget")), 1);
	assert_eq!(sheet.injections_of(&desc("css://ui.list")), 1);
}

#[test]
fn test_custom_framework_namespace() {
	let events = Arc::new(EventRegistry::new());
	let config = RegistryConfig::from_toml("framework-namespace = \"lwc\"").unwrap();
	let registry = DefRegistry::new(config, events.clone(), Arc::new(StyleSheet::new()));
	registry
		.load_bundle_json(
			r#"{
				"events": [{ "descriptor": "lwc:valueDestroy", "type": "VALUE" }],
				"components": [{ "descriptor": "ui:panel" }]
			}"#,
		)
		.unwrap();

	let panel = registry.get_def_by_name("ui:panel").unwrap();
	assert!(panel.event_def("destroy", true).is_some());
	assert!(panel.event_def("change", true).is_none());
	assert_eq!(panel.location_change_event(), "markup://lwc:locationChange");
	assert!(events.find_event_def("lwc:valueDestroy").is_some());
}

#[test]
fn test_broken_reference_reports_chain() {
	let (registry, _) = load();
	registry
		.load_bundle_json(r#"{ "components": [{ "descriptor": "ui:grid", "superDef": "ui:table" }] }"#)
		.unwrap();

	let err = registry.get_def_by_name("ui:grid").unwrap_err();
	assert!(matches!(err, DefError::UnresolvedSuperDefinition { .. }));
	assert_eq!(
		err.to_string(),
		"super definition ui:table of markup://ui:grid could not be resolved"
	);
	assert!(registry.cached_def(&desc("ui:grid")).is_none());
}
