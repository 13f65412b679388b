//! Row builders shared by the engine unit tests

use carenav_types::tab_adapter::{Scope, TabConfig, TabPresetItem};
use carenav_types::types::{OrgId, PresetId, RoleId, Timestamp, UserId};

pub fn tab(key: &str, scope: Scope, visible: bool, order: i32) -> TabConfig {
	TabConfig {
		key: key.into(),
		label: key.into(),
		icon: None,
		content_type: None,
		settings: None,
		scope,
		organization_id: None,
		role_id: None,
		user_id: None,
		is_visible: visible,
		is_mandatory: false,
		is_system_default: scope == Scope::System,
		category: None,
		display_order: order,
		created_by: None,
		created_at: Timestamp(0),
		updated_at: Timestamp(0),
	}
}

pub fn org_tab(key: &str, org_id: OrgId, visible: bool, order: i32) -> TabConfig {
	TabConfig {
		organization_id: Some(org_id),
		..tab(key, Scope::Organization, visible, order)
	}
}

pub fn role_tab(key: &str, role_id: RoleId, visible: bool, order: i32) -> TabConfig {
	TabConfig { role_id: Some(role_id), ..tab(key, Scope::Role, visible, order) }
}

pub fn user_tab(key: &str, user_id: UserId, visible: bool, order: i32) -> TabConfig {
	TabConfig { user_id: Some(user_id), ..tab(key, Scope::User, visible, order) }
}

pub fn item(tab_key: &str, visible: bool, order: i32) -> TabPresetItem {
	TabPresetItem {
		preset_id: PresetId(1),
		tab_key: tab_key.into(),
		custom_label: None,
		custom_icon: None,
		custom_settings: None,
		is_visible: visible,
		display_order: order,
	}
}

// vim: ts=4
