//! Preset access guard.
//!
//! Evaluated before both preview and apply. Whether a preset exists is a
//! separate question answered first by the storage lookup; a preset the
//! actor can see but not use is reported as permission denied, not
//! masked as missing.

use carenav_types::actor::ActorCtx;
use carenav_types::tab_adapter::{PresetScope, TabPreset};

/// Whether `actor` may preview or apply `preset`
pub fn can_use(preset: &TabPreset, actor: &ActorCtx) -> bool {
	match preset.scope {
		PresetScope::System => true,
		PresetScope::Organization => preset.organization_id == Some(actor.org_id),
		PresetScope::User => match actor.user.user_id() {
			Some(user_id) => preset.created_by == Some(user_id),
			None => false,
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use carenav_types::actor::ActorId;
	use carenav_types::types::{OrgId, PresetId, Timestamp, UserId};

	fn preset(scope: PresetScope, org: Option<OrgId>, creator: Option<UserId>) -> TabPreset {
		TabPreset {
			preset_id: PresetId(1),
			name: "Minimal".into(),
			description: None,
			scope,
			organization_id: org,
			created_by: creator,
			created_at: Timestamp(0),
		}
	}

	fn actor(user: ActorId, org_id: OrgId) -> ActorCtx {
		ActorCtx { user, org_id, role: None, role_id: None }
	}

	#[test]
	fn system_presets_are_usable_by_anyone() {
		let p = preset(PresetScope::System, None, None);
		assert!(can_use(&p, &actor(ActorId::Persisted(UserId(1)), OrgId(1))));
		assert!(can_use(&p, &actor(ActorId::Ephemeral, OrgId(9))));
	}

	#[test]
	fn organization_presets_require_matching_org() {
		let p = preset(PresetScope::Organization, Some(OrgId(1)), None);
		assert!(can_use(&p, &actor(ActorId::Persisted(UserId(1)), OrgId(1))));
		assert!(!can_use(&p, &actor(ActorId::Persisted(UserId(1)), OrgId(2))));
	}

	#[test]
	fn organization_preset_without_owner_matches_nobody() {
		let p = preset(PresetScope::Organization, None, None);
		assert!(!can_use(&p, &actor(ActorId::Persisted(UserId(1)), OrgId(1))));
	}

	#[test]
	fn user_presets_require_the_creator() {
		let p = preset(PresetScope::User, None, Some(UserId(5)));
		assert!(can_use(&p, &actor(ActorId::Persisted(UserId(5)), OrgId(1))));
		assert!(!can_use(&p, &actor(ActorId::Persisted(UserId(6)), OrgId(1))));
		assert!(!can_use(&p, &actor(ActorId::Ephemeral, OrgId(1))));
	}
}

// vim: ts=4
