//! Transactional preset application.
//!
//! Every authorization check runs before the first mutating statement.
//! The delete+insert itself happens inside one storage transaction, so a
//! failure midway leaves the previous override set untouched. Concurrent
//! applies to the same scope instance are last-write-wins.

use carenav_types::actor::{ActorCtx, ActorId};
use carenav_types::tab_adapter::{TabAdapter, TabConfig};

use crate::prelude::*;
use crate::preview::{materialize, resolve_owner};
use crate::types::{ApplyResult, TargetScope};
use crate::{guard, resolver};

async fn effective_tabs(tabs: &dyn TabAdapter, actor: &ActorCtx) -> CnResult<Vec<TabConfig>> {
	let rows =
		tabs.list_tab_configs(actor.org_id, actor.role_id, actor.user.user_id()).await?;
	Ok(resolver::resolve(rows))
}

/// Applies `preset_id` at `target` for `actor`: replaces the scope
/// instance's overrides with rows materialized from the preset, then
/// returns the re-resolved effective configuration
pub async fn apply(
	tabs: &dyn TabAdapter,
	preset_id: PresetId,
	target: TargetScope,
	actor: &ActorCtx,
) -> CnResult<ApplyResult> {
	let preset = tabs.read_preset(preset_id).await?;
	if !guard::can_use(&preset, actor) {
		warn!(preset = %preset_id, "Preset access denied");
		return Err(Error::PermissionDenied);
	}
	if target == TargetScope::Organization && !actor.is_admin() {
		warn!(org = %actor.org_id, "Organization-wide apply requires an administrative role");
		return Err(Error::PermissionDenied);
	}
	if target == TargetScope::Role && actor.role_id.is_none() {
		return Err(Error::ValidationError("actor has no role assigned".into()));
	}

	// The system operator is not backed by a stored user row, so there is
	// nothing to write at user scope; its preferences reset on logout.
	if target == TargetScope::User && actor.user == ActorId::Ephemeral {
		info!(preset = %preset.name, "Session-only apply for the system operator");
		let tabs_now = effective_tabs(tabs, actor).await?;
		return Ok(ApplyResult {
			message: "Preset applied for this session only; preferences reset on logout".into(),
			preset: preset.name,
			tabs: tabs_now,
		});
	}

	let owner = resolve_owner(target, actor)?;
	let items = tabs.list_preset_items(preset_id).await?;
	let system = tabs.list_system_defaults().await?;
	let rows = materialize(&items, &system, owner, actor.user.user_id());

	tabs.replace_scope_overrides(owner, &rows).await?;
	info!(preset = %preset.name, target = ?target, rows = rows.len(), "Preset applied");

	let merged = effective_tabs(tabs, actor).await?;
	Ok(ApplyResult { message: "Preset applied".into(), preset: preset.name, tabs: merged })
}

// vim: ts=4
