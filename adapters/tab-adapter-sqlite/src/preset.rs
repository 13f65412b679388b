//! Preset and preset-item storage
//!
//! Presets are authored out of band and read-only from the engine's
//! perspective; `create` exists for seeding and tests.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use carenav::prelude::*;
use carenav::tab_adapter::{NewTabPreset, NewTabPresetItem, PresetScope, TabPreset, TabPresetItem};

use crate::inspect;

fn map_preset(row: &SqliteRow) -> CnResult<TabPreset> {
	let scope: String = row.get("scope");
	let scope = scope.parse::<PresetScope>().map_err(|_| Error::DbError)?;

	Ok(TabPreset {
		preset_id: PresetId(row.get("preset_id")),
		name: row.get::<String, _>("name").into(),
		description: row.get::<Option<String>, _>("description").map(String::into_boxed_str),
		scope,
		organization_id: row.get::<Option<i64>, _>("organization_id").map(OrgId),
		created_by: row.get::<Option<i64>, _>("created_by").map(UserId),
		created_at: Timestamp(row.get("created_at")),
	})
}

fn map_item(row: &SqliteRow) -> TabPresetItem {
	let settings: Option<String> = row.get("custom_settings");
	TabPresetItem {
		preset_id: PresetId(row.get("preset_id")),
		tab_key: row.get::<String, _>("tab_key").into(),
		custom_label: row.get::<Option<String>, _>("custom_label").map(String::into_boxed_str),
		custom_icon: row.get::<Option<String>, _>("custom_icon").map(String::into_boxed_str),
		custom_settings: settings.and_then(|v| serde_json::from_str(&v).ok()),
		is_visible: row.get("is_visible"),
		display_order: row.get("display_order"),
	}
}

pub(crate) async fn read(db: &SqlitePool, preset_id: PresetId) -> CnResult<TabPreset> {
	let row = sqlx::query(
		"SELECT preset_id, name, description, scope, organization_id, created_by, created_at
		FROM tab_presets WHERE preset_id = ?1",
	)
	.bind(preset_id.0)
	.fetch_optional(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	match row {
		Some(row) => map_preset(&row),
		None => Err(Error::NotFound),
	}
}

/// Lists the presets visible to an actor, ordered by name
pub(crate) async fn list(
	db: &SqlitePool,
	org_id: OrgId,
	user_id: Option<UserId>,
) -> CnResult<Vec<TabPreset>> {
	let rows = sqlx::query(
		"SELECT preset_id, name, description, scope, organization_id, created_by, created_at
		FROM tab_presets
		WHERE scope = 'system'
			OR (scope = 'organization' AND organization_id = ?1)
			OR (scope = 'user' AND created_by = ?2)
		ORDER BY name",
	)
	.bind(org_id.0)
	.bind(user_id.map(|id| id.0))
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	rows.iter().map(map_preset).collect()
}

pub(crate) async fn items(db: &SqlitePool, preset_id: PresetId) -> CnResult<Vec<TabPresetItem>> {
	let rows = sqlx::query(
		"SELECT preset_id, tab_key, custom_label, custom_icon, custom_settings,
			is_visible, display_order
		FROM tab_preset_items WHERE preset_id = ?1 ORDER BY display_order",
	)
	.bind(preset_id.0)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	Ok(rows.iter().map(map_item).collect())
}

pub(crate) async fn create(
	db: &SqlitePool,
	preset: &NewTabPreset,
	items: &[NewTabPresetItem],
) -> CnResult<PresetId> {
	let mut tx = db.begin().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	let res = sqlx::query(
		"INSERT INTO tab_presets (name, description, scope, organization_id, created_by)
		VALUES (?1, ?2, ?3, ?4, ?5)",
	)
	.bind(&*preset.name)
	.bind(preset.description.as_deref())
	.bind(preset.scope.as_str())
	.bind(preset.organization_id.map(|id| id.0))
	.bind(preset.created_by.map(|id| id.0))
	.execute(&mut *tx)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;
	let preset_id = res.last_insert_rowid();

	for item in items {
		sqlx::query(
			"INSERT INTO tab_preset_items
				(preset_id, tab_key, custom_label, custom_icon, custom_settings,
				is_visible, display_order)
			VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
		)
		.bind(preset_id)
		.bind(&*item.tab_key)
		.bind(item.custom_label.as_deref())
		.bind(item.custom_icon.as_deref())
		.bind(item.custom_settings.as_ref().map(|v| v.to_string()))
		.bind(item.is_visible)
		.bind(item.display_order)
		.execute(&mut *tx)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	}

	tx.commit().await.inspect_err(inspect).map_err(|_| Error::DbError)?;
	Ok(PresetId(preset_id))
}

// vim: ts=4
