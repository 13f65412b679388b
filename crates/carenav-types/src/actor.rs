//! Actor context attached to every authenticated request.
//!
//! Identity resolution itself lives upstream (gateway middleware); this
//! module only models what the engine needs: who is acting, for which
//! organization, and with what role.

use crate::types::{OrgId, RoleId, UserId};

/// Role name that grants organization-level administration
pub const ADMIN_ROLE: &str = "admin";

/// Actor identity.
///
/// `Ephemeral` is the reserved system-operator identity. It is not backed
/// by a stored user row and must never be written to storage; anything it
/// would persist at user scope is discarded on logout instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorId {
	Persisted(UserId),
	Ephemeral,
}

impl ActorId {
	pub fn user_id(self) -> Option<UserId> {
		match self {
			ActorId::Persisted(user_id) => Some(user_id),
			ActorId::Ephemeral => None,
		}
	}
}

/// Context struct for an authenticated actor
#[derive(Clone, Debug)]
pub struct ActorCtx {
	pub user: ActorId,
	pub org_id: OrgId,
	pub role: Option<Box<str>>,
	pub role_id: Option<RoleId>,
}

impl ActorCtx {
	pub fn is_admin(&self) -> bool {
		matches!(self.user, ActorId::Ephemeral) || self.role.as_deref() == Some(ADMIN_ROLE)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ephemeral_actor_is_admin_and_has_no_user_id() {
		let actor = ActorCtx {
			user: ActorId::Ephemeral,
			org_id: OrgId(1),
			role: None,
			role_id: None,
		};
		assert!(actor.is_admin());
		assert_eq!(actor.user.user_id(), None);
	}

	#[test]
	fn admin_role_grants_admin() {
		let actor = ActorCtx {
			user: ActorId::Persisted(UserId(7)),
			org_id: OrgId(1),
			role: Some("admin".into()),
			role_id: Some(RoleId(2)),
		};
		assert!(actor.is_admin());

		let actor = ActorCtx { role: Some("clinician".into()), ..actor };
		assert!(!actor.is_admin());
	}
}

// vim: ts=4
