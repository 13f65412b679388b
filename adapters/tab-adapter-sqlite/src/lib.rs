//! SQLite implementation of the Carenav tab-configuration adapter.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use carenav::prelude::*;
use carenav::tab_adapter::{
	NewTabConfig, NewTabPreset, NewTabPresetItem, ScopeOwner, TabAdapter, TabConfig, TabPreset,
	TabPresetItem,
};

mod preset;
mod schema;
mod tab_config;

pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

#[derive(Debug)]
pub struct TabAdapterSqlite {
	db: SqlitePool,
}

impl TabAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> CnResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;

		schema::init_db(&db).await.inspect_err(inspect).or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl TabAdapter for TabAdapterSqlite {
	// Tab configurations
	//********************
	async fn list_tab_configs(
		&self,
		org_id: OrgId,
		role_id: Option<RoleId>,
		user_id: Option<UserId>,
	) -> CnResult<Vec<TabConfig>> {
		tab_config::list(&self.db, org_id, role_id, user_id).await
	}

	async fn list_system_defaults(&self) -> CnResult<Vec<TabConfig>> {
		tab_config::list_system_defaults(&self.db).await
	}

	async fn create_system_default(&self, tab: &NewTabConfig) -> CnResult<()> {
		tab_config::create_system_default(&self.db, tab).await
	}

	async fn replace_scope_overrides(
		&self,
		owner: ScopeOwner,
		rows: &[NewTabConfig],
	) -> CnResult<()> {
		tab_config::replace_scope_overrides(&self.db, owner, rows).await
	}

	// Presets
	//*********
	async fn read_preset(&self, preset_id: PresetId) -> CnResult<TabPreset> {
		preset::read(&self.db, preset_id).await
	}

	async fn list_presets(
		&self,
		org_id: OrgId,
		user_id: Option<UserId>,
	) -> CnResult<Vec<TabPreset>> {
		preset::list(&self.db, org_id, user_id).await
	}

	async fn list_preset_items(&self, preset_id: PresetId) -> CnResult<Vec<TabPresetItem>> {
		preset::items(&self.db, preset_id).await
	}

	async fn create_preset(
		&self,
		preset: &NewTabPreset,
		items: &[NewTabPresetItem],
	) -> CnResult<PresetId> {
		preset::create(&self.db, preset, items).await
	}
}

// vim: ts=4
