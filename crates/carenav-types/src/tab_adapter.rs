//! Adapter trait for tab-configuration and preset storage.
//!
//! One `TabConfig` row is one override (or the system default) for a tab
//! key at a specific scope instance. Presets are named bundles of per-tab
//! overrides that can be applied wholesale at a target scope.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::prelude::*;

// Scope //
//*******//
/// Precedence level at which a tab override can exist.
///
/// Priority order: `system(1) < organization(2) < role(3) < user(4)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
	#[serde(rename = "system")]
	System,
	#[serde(rename = "organization")]
	Organization,
	#[serde(rename = "role")]
	Role,
	#[serde(rename = "user")]
	User,
}

impl Scope {
	pub fn priority(self) -> u8 {
		match self {
			Scope::System => 1,
			Scope::Organization => 2,
			Scope::Role => 3,
			Scope::User => 4,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Scope::System => "system",
			Scope::Organization => "organization",
			Scope::Role => "role",
			Scope::User => "user",
		}
	}
}

impl std::str::FromStr for Scope {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"system" => Ok(Scope::System),
			"organization" => Ok(Scope::Organization),
			"role" => Ok(Scope::Role),
			"user" => Ok(Scope::User),
			_ => Err(Error::ValidationError(format!("invalid scope: {}", s))),
		}
	}
}

// PresetScope //
//*************//
/// Ownership scope of a preset. Presets are never role-scoped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresetScope {
	#[serde(rename = "system")]
	System,
	#[serde(rename = "organization")]
	Organization,
	#[serde(rename = "user")]
	User,
}

impl PresetScope {
	pub fn as_str(self) -> &'static str {
		match self {
			PresetScope::System => "system",
			PresetScope::Organization => "organization",
			PresetScope::User => "user",
		}
	}
}

impl std::str::FromStr for PresetScope {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"system" => Ok(PresetScope::System),
			"organization" => Ok(PresetScope::Organization),
			"user" => Ok(PresetScope::User),
			_ => Err(Error::ValidationError(format!("invalid preset scope: {}", s))),
		}
	}
}

// ScopeOwner //
//************//
/// Identifies which scope instance a set of overrides belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeOwner {
	Organization(OrgId),
	Role(RoleId),
	User(UserId),
}

impl ScopeOwner {
	pub fn scope(self) -> Scope {
		match self {
			ScopeOwner::Organization(_) => Scope::Organization,
			ScopeOwner::Role(_) => Scope::Role,
			ScopeOwner::User(_) => Scope::User,
		}
	}
}

// Rows //
//******//
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct TabConfig {
	pub key: Box<str>,
	pub label: Box<str>,
	pub icon: Option<Box<str>>,
	#[serde(rename = "contentType")]
	pub content_type: Option<Box<str>>,
	pub settings: Option<serde_json::Value>,
	pub scope: Scope,
	#[serde(rename = "organizationId")]
	pub organization_id: Option<OrgId>,
	#[serde(rename = "roleId")]
	pub role_id: Option<RoleId>,
	#[serde(rename = "userId")]
	pub user_id: Option<UserId>,
	#[serde(rename = "isVisible")]
	pub is_visible: bool,
	#[serde(rename = "isMandatory")]
	pub is_mandatory: bool,
	#[serde(rename = "isSystemDefault")]
	pub is_system_default: bool,
	pub category: Option<Box<str>>,
	#[serde(rename = "displayOrder")]
	pub display_order: i32,
	#[serde(rename = "createdBy")]
	pub created_by: Option<UserId>,
	#[serde(rename = "createdAt")]
	pub created_at: Timestamp,
	#[serde(rename = "updatedAt")]
	pub updated_at: Timestamp,
}

/// Data for a tab-configuration row to be inserted
#[derive(Clone, Debug)]
pub struct NewTabConfig {
	pub key: Box<str>,
	pub label: Box<str>,
	pub icon: Option<Box<str>>,
	pub content_type: Option<Box<str>>,
	pub settings: Option<serde_json::Value>,
	pub scope: Scope,
	pub organization_id: Option<OrgId>,
	pub role_id: Option<RoleId>,
	pub user_id: Option<UserId>,
	pub is_visible: bool,
	pub is_mandatory: bool,
	pub is_system_default: bool,
	pub category: Option<Box<str>>,
	pub display_order: i32,
	pub created_by: Option<UserId>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct TabPreset {
	#[serde(rename = "id")]
	pub preset_id: PresetId,
	pub name: Box<str>,
	pub description: Option<Box<str>>,
	pub scope: PresetScope,
	#[serde(rename = "organizationId")]
	pub organization_id: Option<OrgId>,
	#[serde(rename = "createdBy")]
	pub created_by: Option<UserId>,
	#[serde(rename = "createdAt")]
	pub created_at: Timestamp,
}

#[derive(Clone, Debug)]
pub struct NewTabPreset {
	pub name: Box<str>,
	pub description: Option<Box<str>>,
	pub scope: PresetScope,
	pub organization_id: Option<OrgId>,
	pub created_by: Option<UserId>,
}

/// One row per tab key a preset customizes. Unset custom fields inherit
/// from the system default at preview/apply time.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct TabPresetItem {
	#[serde(rename = "presetId")]
	pub preset_id: PresetId,
	#[serde(rename = "tabKey")]
	pub tab_key: Box<str>,
	#[serde(rename = "customLabel")]
	pub custom_label: Option<Box<str>>,
	#[serde(rename = "customIcon")]
	pub custom_icon: Option<Box<str>>,
	#[serde(rename = "customSettings")]
	pub custom_settings: Option<serde_json::Value>,
	#[serde(rename = "isVisible")]
	pub is_visible: bool,
	#[serde(rename = "displayOrder")]
	pub display_order: i32,
}

#[derive(Clone, Debug)]
pub struct NewTabPresetItem {
	pub tab_key: Box<str>,
	pub custom_label: Option<Box<str>>,
	pub custom_icon: Option<Box<str>>,
	pub custom_settings: Option<serde_json::Value>,
	pub is_visible: bool,
	pub display_order: i32,
}

// Adapter trait //
//***************//
#[async_trait]
pub trait TabAdapter: Debug + Send + Sync {
	/// # Tab configurations
	///
	/// Lists all rows relevant to an actor: every system row plus the
	/// organization/role/user rows owned by the given identities.
	async fn list_tab_configs(
		&self,
		org_id: OrgId,
		role_id: Option<RoleId>,
		user_id: Option<UserId>,
	) -> CnResult<Vec<TabConfig>>;

	async fn list_system_defaults(&self) -> CnResult<Vec<TabConfig>>;

	/// Seeds a system-default row. Inserts only when no default for the
	/// key exists yet, so seeding is idempotent across restarts.
	async fn create_system_default(&self, tab: &NewTabConfig) -> CnResult<()>;

	/// Atomically replaces the overrides of one scope instance: deletes
	/// all non-system-default rows at `owner`, then inserts `rows`.
	/// Rolls back completely on any failure.
	async fn replace_scope_overrides(
		&self,
		owner: ScopeOwner,
		rows: &[NewTabConfig],
	) -> CnResult<()>;

	/// # Presets
	async fn read_preset(&self, preset_id: PresetId) -> CnResult<TabPreset>;

	/// Lists presets visible to an actor: system presets, organization
	/// presets of `org_id`, and user presets created by `user_id`.
	/// Ordered by name.
	async fn list_presets(&self, org_id: OrgId, user_id: Option<UserId>)
		-> CnResult<Vec<TabPreset>>;

	async fn list_preset_items(&self, preset_id: PresetId) -> CnResult<Vec<TabPresetItem>>;

	async fn create_preset(
		&self,
		preset: &NewTabPreset,
		items: &[NewTabPresetItem],
	) -> CnResult<PresetId>;
}

// vim: ts=4
