//! Preset catalog: the presets an actor can see.

use carenav_types::actor::ActorCtx;
use carenav_types::tab_adapter::{TabAdapter, TabPreset};

use crate::prelude::*;

/// Lists the union of system presets, the actor's organization's presets,
/// and the actor's own presets, ordered by name
pub async fn list_for(tabs: &dyn TabAdapter, actor: &ActorCtx) -> CnResult<Vec<TabPreset>> {
	tabs.list_presets(actor.org_id, actor.user.user_id()).await
}

// vim: ts=4
