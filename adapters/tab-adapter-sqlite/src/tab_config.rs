//! Tab-configuration row storage
//!
//! One row is one override (or the system default) for a tab key at a
//! specific scope instance. The apply path replaces a whole scope
//! instance inside a single transaction.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use carenav::prelude::*;
use carenav::tab_adapter::{NewTabConfig, Scope, ScopeOwner, TabConfig};

use crate::inspect;

fn map_tab_config(row: &SqliteRow) -> CnResult<TabConfig> {
	let scope: String = row.get("scope");
	let scope = scope.parse::<Scope>().map_err(|_| Error::DbError)?;
	let settings: Option<String> = row.get("settings");

	Ok(TabConfig {
		key: row.get::<String, _>("key").into(),
		label: row.get::<String, _>("label").into(),
		icon: row.get::<Option<String>, _>("icon").map(String::into_boxed_str),
		content_type: row.get::<Option<String>, _>("content_type").map(String::into_boxed_str),
		settings: settings.and_then(|v| serde_json::from_str(&v).ok()),
		scope,
		organization_id: row.get::<Option<i64>, _>("organization_id").map(OrgId),
		role_id: row.get::<Option<i64>, _>("role_id").map(RoleId),
		user_id: row.get::<Option<i64>, _>("user_id").map(UserId),
		is_visible: row.get("is_visible"),
		is_mandatory: row.get("is_mandatory"),
		is_system_default: row.get("is_system_default"),
		category: row.get::<Option<String>, _>("category").map(String::into_boxed_str),
		display_order: row.get("display_order"),
		created_by: row.get::<Option<i64>, _>("created_by").map(UserId),
		created_at: Timestamp(row.get("created_at")),
		updated_at: Timestamp(row.get("updated_at")),
	})
}

const TAB_COLUMNS: &str = "key, label, icon, content_type, settings, scope, \
	organization_id, role_id, user_id, is_visible, is_mandatory, is_system_default, \
	category, display_order, created_by, created_at, updated_at";

/// Lists every row relevant to an actor: all system rows plus the rows
/// owned by the given organization/role/user identities
pub(crate) async fn list(
	db: &SqlitePool,
	org_id: OrgId,
	role_id: Option<RoleId>,
	user_id: Option<UserId>,
) -> CnResult<Vec<TabConfig>> {
	let query = format!(
		"SELECT {TAB_COLUMNS} FROM tab_configs
		WHERE scope = 'system'
			OR (scope = 'organization' AND organization_id = ?1)
			OR (scope = 'role' AND role_id = ?2)
			OR (scope = 'user' AND user_id = ?3)
		ORDER BY display_order"
	);
	let rows = sqlx::query(&query)
		.bind(org_id.0)
		.bind(role_id.map(|id| id.0))
		.bind(user_id.map(|id| id.0))
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	rows.iter().map(map_tab_config).collect()
}

pub(crate) async fn list_system_defaults(db: &SqlitePool) -> CnResult<Vec<TabConfig>> {
	let query = format!(
		"SELECT {TAB_COLUMNS} FROM tab_configs
		WHERE scope = 'system' AND is_system_default ORDER BY display_order"
	);
	let rows = sqlx::query(&query)
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	rows.iter().map(map_tab_config).collect()
}

/// Seeds a system-default row. Existing rows are kept as they are, so
/// seeding is idempotent and never overwrites operator edits.
pub(crate) async fn create_system_default(db: &SqlitePool, tab: &NewTabConfig) -> CnResult<()> {
	sqlx::query(
		"INSERT OR IGNORE INTO tab_configs
			(key, label, icon, content_type, settings, scope,
			is_visible, is_mandatory, is_system_default, category, display_order)
		VALUES (?1, ?2, ?3, ?4, ?5, 'system', ?6, ?7, true, ?8, ?9)",
	)
	.bind(&*tab.key)
	.bind(&*tab.label)
	.bind(tab.icon.as_deref())
	.bind(tab.content_type.as_deref())
	.bind(tab.settings.as_ref().map(|v| v.to_string()))
	.bind(tab.is_visible)
	.bind(tab.is_mandatory)
	.bind(tab.category.as_deref())
	.bind(tab.display_order)
	.execute(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	Ok(())
}

/// Atomically replaces the overrides of one scope instance: deletes all
/// non-default rows at `owner`, inserts `rows`, commits. Any failure
/// rolls the whole sequence back.
pub(crate) async fn replace_scope_overrides(
	db: &SqlitePool,
	owner: ScopeOwner,
	rows: &[NewTabConfig],
) -> CnResult<()> {
	let mut tx = db.begin().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	let delete = match owner {
		ScopeOwner::Organization(id) => sqlx::query(
			"DELETE FROM tab_configs
				WHERE scope = 'organization' AND organization_id = ?1 AND NOT is_system_default",
		)
		.bind(id.0),
		ScopeOwner::Role(id) => sqlx::query(
			"DELETE FROM tab_configs
				WHERE scope = 'role' AND role_id = ?1 AND NOT is_system_default",
		)
		.bind(id.0),
		ScopeOwner::User(id) => sqlx::query(
			"DELETE FROM tab_configs
				WHERE scope = 'user' AND user_id = ?1 AND NOT is_system_default",
		)
		.bind(id.0),
	};
	delete.execute(&mut *tx).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	for row in rows {
		sqlx::query(
			"INSERT INTO tab_configs
				(key, label, icon, content_type, settings, scope,
				organization_id, role_id, user_id, is_visible, is_mandatory,
				is_system_default, category, display_order, created_by)
			VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, false, ?12, ?13, ?14)",
		)
		.bind(&*row.key)
		.bind(&*row.label)
		.bind(row.icon.as_deref())
		.bind(row.content_type.as_deref())
		.bind(row.settings.as_ref().map(|v| v.to_string()))
		.bind(row.scope.as_str())
		.bind(row.organization_id.map(|id| id.0))
		.bind(row.role_id.map(|id| id.0))
		.bind(row.user_id.map(|id| id.0))
		.bind(row.is_visible)
		.bind(row.is_mandatory)
		.bind(row.category.as_deref())
		.bind(row.display_order)
		.bind(row.created_by.map(|id| id.0))
		.execute(&mut *tx)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	}

	tx.commit().await.inspect_err(inspect).map_err(|_| Error::DbError)?;
	Ok(())
}

// vim: ts=4
