//! Simulated preset application.
//!
//! Builds a synthetic override set (current rows minus the target scope
//! instance, plus rows materialized from the preset), resolves it, and
//! diffs it against the current effective configuration. Performs no
//! writes; re-resolving storage after a preview yields exactly what it
//! yielded before.

use std::collections::BTreeMap;

use carenav_types::actor::{ActorCtx, ActorId};
use carenav_types::tab_adapter::{
	NewTabConfig, Scope, ScopeOwner, TabAdapter, TabConfig, TabPresetItem,
};
use carenav_types::types;

use crate::prelude::*;
use crate::types::{PresetPreview, TabDiff, TargetScope};
use crate::{diff, guard, resolver};

/// Resolves which scope instance a target scope refers to for an actor
pub(crate) fn resolve_owner(target: TargetScope, actor: &ActorCtx) -> CnResult<ScopeOwner> {
	match target {
		TargetScope::Organization => Ok(ScopeOwner::Organization(actor.org_id)),
		TargetScope::Role => actor
			.role_id
			.map(ScopeOwner::Role)
			.ok_or_else(|| Error::ValidationError("actor has no role assigned".into())),
		TargetScope::User => match actor.user {
			ActorId::Persisted(user_id) => Ok(ScopeOwner::User(user_id)),
			ActorId::Ephemeral => {
				Err(Error::ValidationError("system actor has no stored preferences".into()))
			}
		},
	}
}

/// Whether `row` belongs to the scope instance an apply would replace
pub(crate) fn owned_by(row: &TabConfig, owner: ScopeOwner) -> bool {
	match owner {
		ScopeOwner::Organization(org_id) => {
			row.scope == Scope::Organization && row.organization_id == Some(org_id)
		}
		ScopeOwner::Role(role_id) => row.scope == Scope::Role && row.role_id == Some(role_id),
		ScopeOwner::User(user_id) => row.scope == Scope::User && row.user_id == Some(user_id),
	}
}

/// Materializes preset items into override rows at `owner`.
///
/// Fields the item leaves unset fall back to the system default for the
/// same key; visibility and display order always come from the item.
/// Items whose system tab no longer exists are skipped.
pub(crate) fn materialize(
	items: &[TabPresetItem],
	system: &[TabConfig],
	owner: ScopeOwner,
	created_by: Option<UserId>,
) -> Vec<NewTabConfig> {
	let system_by_key: BTreeMap<&str, &TabConfig> =
		system.iter().map(|tab| (&*tab.key, tab)).collect();

	let (organization_id, role_id, user_id) = match owner {
		ScopeOwner::Organization(id) => (Some(id), None, None),
		ScopeOwner::Role(id) => (None, Some(id), None),
		ScopeOwner::User(id) => (None, None, Some(id)),
	};

	let mut rows = Vec::with_capacity(items.len());
	for item in items {
		let Some(sys) = system_by_key.get(&*item.tab_key) else {
			debug!(key = %item.tab_key, "Preset item without a system tab, skipping");
			continue;
		};
		rows.push(NewTabConfig {
			key: item.tab_key.clone(),
			label: item.custom_label.clone().unwrap_or_else(|| sys.label.clone()),
			icon: item.custom_icon.clone().or_else(|| sys.icon.clone()),
			content_type: sys.content_type.clone(),
			settings: item.custom_settings.clone().or_else(|| sys.settings.clone()),
			scope: owner.scope(),
			organization_id,
			role_id,
			user_id,
			is_visible: item.is_visible,
			is_mandatory: sys.is_mandatory,
			is_system_default: false,
			category: sys.category.clone(),
			display_order: item.display_order,
			created_by,
		});
	}
	rows
}

/// Converts a row-to-insert into a view row for simulation
fn into_view(row: NewTabConfig) -> TabConfig {
	let now = types::now();
	TabConfig {
		key: row.key,
		label: row.label,
		icon: row.icon,
		content_type: row.content_type,
		settings: row.settings,
		scope: row.scope,
		organization_id: row.organization_id,
		role_id: row.role_id,
		user_id: row.user_id,
		is_visible: row.is_visible,
		is_mandatory: row.is_mandatory,
		is_system_default: row.is_system_default,
		category: row.category,
		display_order: row.display_order,
		created_by: row.created_by,
		created_at: now,
		updated_at: now,
	}
}

/// Simulates applying `preset_id` at `target` for `actor` and returns the
/// current view, the simulated view, and their diff
pub async fn preview(
	tabs: &dyn TabAdapter,
	preset_id: PresetId,
	target: TargetScope,
	actor: &ActorCtx,
) -> CnResult<PresetPreview> {
	let preset = tabs.read_preset(preset_id).await?;
	if !guard::can_use(&preset, actor) {
		warn!(preset = %preset_id, "Preset access denied");
		return Err(Error::PermissionDenied);
	}

	let rows =
		tabs.list_tab_configs(actor.org_id, actor.role_id, actor.user.user_id()).await?;
	let current = resolver::resolve(rows.clone());

	// The system operator keeps no stored user preferences; a user-scope
	// apply is a session-only no-op, so the simulation changes nothing.
	if target == TargetScope::User && actor.user == ActorId::Ephemeral {
		return Ok(PresetPreview {
			preset,
			current: current.clone(),
			preview: current,
			diff: TabDiff::default(),
		});
	}

	let owner = resolve_owner(target, actor)?;
	let items = tabs.list_preset_items(preset_id).await?;

	let system: Vec<TabConfig> =
		rows.iter().filter(|row| row.is_system_default).cloned().collect();
	let mut synthetic: Vec<TabConfig> =
		rows.into_iter().filter(|row| !owned_by(row, owner)).collect();
	synthetic.extend(
		materialize(&items, &system, owner, actor.user.user_id()).into_iter().map(into_view),
	);

	let preview = resolver::resolve(synthetic);
	let diff = diff::diff(&current, &preview);

	Ok(PresetPreview { preset, current, preview, diff })
}


// vim: ts=4
