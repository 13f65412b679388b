//! Database schema initialization
//!
//! Creates the tab-configuration tables and indexes. The expression-based
//! unique index enforces one override per key per scope instance (owner
//! columns are nullable, so they are coalesced for uniqueness).

use sqlx::SqlitePool;

pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Tab configurations
	//********************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS tab_configs (
		tab_id integer NOT NULL,
		key text NOT NULL,
		label text NOT NULL,
		icon text,
		content_type text,
		settings json,
		scope text NOT NULL,
		organization_id integer,
		role_id integer,
		user_id integer,
		is_visible boolean NOT NULL DEFAULT true,
		is_mandatory boolean NOT NULL DEFAULT false,
		is_system_default boolean NOT NULL DEFAULT false,
		category text,
		display_order integer NOT NULL DEFAULT 0,
		created_by integer,
		created_at datetime DEFAULT (unixepoch()),
		updated_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(tab_id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query(
		"CREATE UNIQUE INDEX IF NOT EXISTS idx_tab_configs_scope_key ON tab_configs(
			scope, key, ifnull(organization_id, 0), ifnull(role_id, 0), ifnull(user_id, 0)
		)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query(
		"CREATE INDEX IF NOT EXISTS idx_tab_configs_owner
			ON tab_configs(scope, organization_id, role_id, user_id)",
	)
	.execute(&mut *tx)
	.await?;

	// Presets
	//*********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS tab_presets (
		preset_id integer NOT NULL,
		name text NOT NULL,
		description text,
		scope text NOT NULL,
		organization_id integer,
		created_by integer,
		created_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(preset_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_tab_presets_org ON tab_presets(organization_id)")
		.execute(&mut *tx)
		.await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS tab_preset_items (
		preset_id integer NOT NULL,
		tab_key text NOT NULL,
		custom_label text,
		custom_icon text,
		custom_settings json,
		is_visible boolean NOT NULL DEFAULT true,
		display_order integer NOT NULL DEFAULT 0,
		PRIMARY KEY(preset_id, tab_key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;
	Ok(())
}

// vim: ts=4
