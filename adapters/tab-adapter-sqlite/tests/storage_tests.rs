//! Tab adapter storage tests
//!
//! Covers seeding, actor-scoped listing, catalog visibility, and the
//! transactional replace of a scope instance's overrides.

use std::sync::Arc;
use tempfile::TempDir;

use carenav::tab_adapter::{
	NewTabConfig, NewTabPreset, NewTabPresetItem, PresetScope, Scope, ScopeOwner, TabAdapter,
};
use carenav::types::{OrgId, PresetId, RoleId, UserId};
use carenav_tab_adapter_sqlite::TabAdapterSqlite;

async fn create_test_adapter() -> (Arc<TabAdapterSqlite>, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter = TabAdapterSqlite::new(temp_dir.path().join("tabs.db"))
		.await
		.expect("Failed to create adapter");
	(Arc::new(adapter), temp_dir)
}

fn sys_default(key: &str, order: i32) -> NewTabConfig {
	NewTabConfig {
		key: key.into(),
		label: key.into(),
		icon: None,
		content_type: None,
		settings: None,
		scope: Scope::System,
		organization_id: None,
		role_id: None,
		user_id: None,
		is_visible: true,
		is_mandatory: false,
		is_system_default: true,
		category: None,
		display_order: order,
		created_by: None,
	}
}

fn override_row(key: &str, owner: ScopeOwner, visible: bool, order: i32) -> NewTabConfig {
	let (organization_id, role_id, user_id) = match owner {
		ScopeOwner::Organization(id) => (Some(id), None, None),
		ScopeOwner::Role(id) => (None, Some(id), None),
		ScopeOwner::User(id) => (None, None, Some(id)),
	};
	NewTabConfig {
		scope: owner.scope(),
		organization_id,
		role_id,
		user_id,
		is_visible: visible,
		is_system_default: false,
		..sys_default(key, order)
	}
}

fn preset(name: &str, scope: PresetScope, org: Option<i64>, creator: Option<i64>) -> NewTabPreset {
	NewTabPreset {
		name: name.into(),
		description: None,
		scope,
		organization_id: org.map(OrgId),
		created_by: creator.map(UserId),
	}
}

fn item(tab_key: &str, visible: bool, order: i32) -> NewTabPresetItem {
	NewTabPresetItem {
		tab_key: tab_key.into(),
		custom_label: None,
		custom_icon: None,
		custom_settings: None,
		is_visible: visible,
		display_order: order,
	}
}

#[tokio::test]
async fn seeding_is_idempotent() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.create_system_default(&sys_default("dashboard", 1)).await.expect("seed");
	adapter.create_system_default(&sys_default("patients", 2)).await.expect("seed");

	// Re-seeding the same key must not duplicate or overwrite
	let mut changed = sys_default("dashboard", 9);
	changed.label = "Changed".into();
	adapter.create_system_default(&changed).await.expect("re-seed");

	let defaults = adapter.list_system_defaults().await.expect("list");
	assert_eq!(defaults.len(), 2);
	assert_eq!(&*defaults[0].key, "dashboard");
	assert_eq!(&*defaults[0].label, "dashboard");
	assert_eq!(defaults[0].display_order, 1);
	assert!(defaults.iter().all(|t| t.is_system_default));
}

#[tokio::test]
async fn unknown_preset_is_not_found() {
	let (adapter, _temp) = create_test_adapter().await;
	let result = adapter.read_preset(PresetId(12345)).await;
	assert!(matches!(result, Err(carenav::error::Error::NotFound)));
}

#[tokio::test]
async fn preset_roundtrip_with_items() {
	let (adapter, _temp) = create_test_adapter().await;

	let preset_id = adapter
		.create_preset(
			&preset("Minimal", PresetScope::Organization, Some(1), Some(5)),
			&[item("dashboard", true, 1), item("billing", false, 3)],
		)
		.await
		.expect("create preset");

	let read = adapter.read_preset(preset_id).await.expect("read preset");
	assert_eq!(&*read.name, "Minimal");
	assert_eq!(read.scope, PresetScope::Organization);
	assert_eq!(read.organization_id, Some(OrgId(1)));

	let items = adapter.list_preset_items(preset_id).await.expect("items");
	assert_eq!(items.len(), 2);
	assert_eq!(&*items[0].tab_key, "dashboard");
	assert!(items[0].is_visible);
	assert!(!items[1].is_visible);
}

#[tokio::test]
async fn catalog_lists_only_visible_presets_ordered_by_name() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.create_preset(&preset("Standard", PresetScope::System, None, None), &[]).await.expect("create");
	adapter
		.create_preset(&preset("Clinic default", PresetScope::Organization, Some(1), None), &[])
		.await
		.expect("create");
	adapter
		.create_preset(&preset("Other clinic", PresetScope::Organization, Some(2), None), &[])
		.await
		.expect("create");
	adapter
		.create_preset(&preset("My view", PresetScope::User, None, Some(5)), &[])
		.await
		.expect("create");
	adapter
		.create_preset(&preset("Not mine", PresetScope::User, None, Some(6)), &[])
		.await
		.expect("create");

	let presets = adapter.list_presets(OrgId(1), Some(UserId(5))).await.expect("list");
	let names: Vec<&str> = presets.iter().map(|p| &*p.name).collect();
	assert_eq!(names, vec!["Clinic default", "My view", "Standard"]);

	// No user identity: only system and org presets remain
	let presets = adapter.list_presets(OrgId(2), None).await.expect("list");
	let names: Vec<&str> = presets.iter().map(|p| &*p.name).collect();
	assert_eq!(names, vec!["Other clinic", "Standard"]);
}

#[tokio::test]
async fn listing_filters_to_actor_relevant_rows() {
	let (adapter, _temp) = create_test_adapter().await;
	adapter.create_system_default(&sys_default("dashboard", 1)).await.expect("seed");

	for owner in [
		ScopeOwner::Organization(OrgId(1)),
		ScopeOwner::Organization(OrgId(2)),
		ScopeOwner::Role(RoleId(3)),
		ScopeOwner::Role(RoleId(4)),
		ScopeOwner::User(UserId(5)),
		ScopeOwner::User(UserId(6)),
	] {
		adapter
			.replace_scope_overrides(owner, &[override_row("dashboard", owner, true, 1)])
			.await
			.expect("replace");
	}

	let rows = adapter
		.list_tab_configs(OrgId(1), Some(RoleId(3)), Some(UserId(5)))
		.await
		.expect("list");

	assert_eq!(rows.len(), 4);
	assert!(rows.iter().any(|r| r.scope == Scope::System));
	assert!(rows.iter().any(|r| r.organization_id == Some(OrgId(1))));
	assert!(rows.iter().any(|r| r.role_id == Some(RoleId(3))));
	assert!(rows.iter().any(|r| r.user_id == Some(UserId(5))));
	assert!(!rows.iter().any(|r| r.organization_id == Some(OrgId(2))));
	assert!(!rows.iter().any(|r| r.user_id == Some(UserId(6))));
}

#[tokio::test]
async fn replace_is_wholesale_per_scope_instance() {
	let (adapter, _temp) = create_test_adapter().await;
	let me = ScopeOwner::User(UserId(5));
	let someone_else = ScopeOwner::User(UserId(6));

	adapter
		.replace_scope_overrides(
			me,
			&[override_row("dashboard", me, true, 1), override_row("billing", me, false, 3)],
		)
		.await
		.expect("first replace");
	adapter
		.replace_scope_overrides(someone_else, &[override_row("dashboard", someone_else, true, 1)])
		.await
		.expect("other replace");

	adapter
		.replace_scope_overrides(me, &[override_row("patients", me, true, 2)])
		.await
		.expect("second replace");

	let rows = adapter.list_tab_configs(OrgId(1), None, Some(UserId(5))).await.expect("list");
	let mine: Vec<&str> =
		rows.iter().filter(|r| r.user_id == Some(UserId(5))).map(|r| &*r.key).collect();
	assert_eq!(mine, vec!["patients"]);

	// The other user's overrides are untouched
	let rows = adapter.list_tab_configs(OrgId(1), None, Some(UserId(6))).await.expect("list");
	assert!(rows.iter().any(|r| r.user_id == Some(UserId(6))));
}

#[tokio::test]
async fn failed_replace_rolls_back_completely() {
	let (adapter, _temp) = create_test_adapter().await;
	let me = ScopeOwner::User(UserId(5));

	adapter
		.replace_scope_overrides(me, &[override_row("dashboard", me, true, 1)])
		.await
		.expect("initial replace");

	// Duplicate key in the new set violates the uniqueness index on the
	// second insert; the delete and first insert must roll back with it.
	let result = adapter
		.replace_scope_overrides(
			me,
			&[override_row("patients", me, true, 2), override_row("patients", me, true, 2)],
		)
		.await;
	assert!(result.is_err());

	let rows = adapter.list_tab_configs(OrgId(1), None, Some(UserId(5))).await.expect("list");
	let mine: Vec<&str> =
		rows.iter().filter(|r| r.user_id == Some(UserId(5))).map(|r| &*r.key).collect();
	assert_eq!(mine, vec!["dashboard"]);
}

// vim: ts=4
