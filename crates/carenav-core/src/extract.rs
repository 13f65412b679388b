//! Custom extractors and the trusted-gateway middleware.
//!
//! Identity is established upstream (auth/tenant gateway); by the time a
//! request reaches this server the gateway has attached the actor context
//! as forwarded headers. `resolve_actor` turns those headers into an
//! [`ActorCtx`] and injects it into the request extensions, where the
//! [`Actor`] extractor picks it up. A request without a resolvable
//! organization context never reaches a handler.

use axum::extract::{FromRequestParts, Request};
use axum::http::{HeaderMap, request::Parts};
use axum::middleware::Next;
use axum::response::Response;

use crate::prelude::*;
use carenav_types::actor::{ActorCtx, ActorId};

/// Header carrying the acting user id, or the reserved value `system`
/// for the non-persisted operator identity.
pub const HDR_USER_ID: &str = "x-user-id";
pub const HDR_ORG_ID: &str = "x-org-id";
pub const HDR_ROLE: &str = "x-role";
pub const HDR_ROLE_ID: &str = "x-role-id";
pub const HDR_REQUEST_ID: &str = "x-request-id";

/// Reserved user-id value for the ephemeral system operator
pub const SYSTEM_ACTOR: &str = "system";

// Actor //
//*******//
#[derive(Debug, Clone)]
pub struct Actor(pub ActorCtx);

impl<S> FromRequestParts<S> for Actor
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(actor) = parts.extensions.get::<Actor>().cloned() {
			Ok(actor)
		} else {
			Err(Error::PermissionDenied)
		}
	}
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
	headers.get(name).and_then(|v| v.to_str().ok())
}

/// Builds the actor context from the gateway headers.
///
/// Fails with `PermissionDenied` when the organization context or the
/// user identity is missing or malformed; the gateway contract says those
/// are always present on authenticated requests.
pub fn actor_from_headers(headers: &HeaderMap) -> CnResult<ActorCtx> {
	let org_id = header_str(headers, HDR_ORG_ID)
		.and_then(|v| v.parse::<i64>().ok())
		.map(OrgId)
		.ok_or(Error::PermissionDenied)?;

	let user = match header_str(headers, HDR_USER_ID) {
		Some(SYSTEM_ACTOR) => ActorId::Ephemeral,
		Some(v) => {
			ActorId::Persisted(UserId(v.parse::<i64>().map_err(|_| Error::PermissionDenied)?))
		}
		None => return Err(Error::PermissionDenied),
	};

	let role = header_str(headers, HDR_ROLE).map(|v| v.to_owned().into_boxed_str());
	let role_id =
		header_str(headers, HDR_ROLE_ID).and_then(|v| v.parse::<i64>().ok()).map(RoleId);

	Ok(ActorCtx { user, org_id, role, role_id })
}

/// Middleware that requires a resolvable actor context on the request
pub async fn resolve_actor(mut req: Request, next: Next) -> Result<Response, Error> {
	let actor = actor_from_headers(req.headers()).inspect_err(|_| {
		warn!("Request without resolvable actor context");
	})?;
	req.extensions_mut().insert(Actor(actor));
	Ok(next.run(req).await)
}

// RequestId //
//***********//
/// Request ID for tracing and debugging
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Optional Request ID extractor - always succeeds, returns None if not available
#[derive(Clone, Debug)]
pub struct OptionalRequestId(pub Option<String>);

impl<S> FromRequestParts<S> for OptionalRequestId
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let req_id = parts.extensions.get::<RequestId>().map(|r| r.0.clone());
		Ok(OptionalRequestId(req_id))
	}
}

/// Middleware that propagates the gateway request id, generating one
/// when the header is absent
pub async fn request_id(mut req: Request, next: Next) -> Response {
	let req_id = header_str(req.headers(), HDR_REQUEST_ID)
		.map(str::to_owned)
		.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
	req.extensions_mut().insert(RequestId(req_id));
	next.run(req).await
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::http::HeaderValue;

	fn headers(entries: &[(&str, &str)]) -> HeaderMap {
		let mut map = HeaderMap::new();
		for (name, value) in entries {
			map.insert(
				axum::http::HeaderName::try_from(*name).unwrap(),
				HeaderValue::from_str(value).unwrap(),
			);
		}
		map
	}

	#[test]
	fn full_context_parses() {
		let map = headers(&[
			(HDR_USER_ID, "42"),
			(HDR_ORG_ID, "7"),
			(HDR_ROLE, "clinician"),
			(HDR_ROLE_ID, "3"),
		]);
		let actor = actor_from_headers(&map).unwrap();
		assert_eq!(actor.user, ActorId::Persisted(UserId(42)));
		assert_eq!(actor.org_id, OrgId(7));
		assert_eq!(actor.role.as_deref(), Some("clinician"));
		assert_eq!(actor.role_id, Some(RoleId(3)));
	}

	#[test]
	fn system_sentinel_maps_to_ephemeral() {
		let map = headers(&[(HDR_USER_ID, "system"), (HDR_ORG_ID, "7")]);
		let actor = actor_from_headers(&map).unwrap();
		assert_eq!(actor.user, ActorId::Ephemeral);
	}

	#[test]
	fn missing_org_context_is_denied() {
		let map = headers(&[(HDR_USER_ID, "42")]);
		assert!(matches!(actor_from_headers(&map), Err(Error::PermissionDenied)));
	}

	#[test]
	fn malformed_user_id_is_denied() {
		let map = headers(&[(HDR_USER_ID, "droptable"), (HDR_ORG_ID, "7")]);
		assert!(matches!(actor_from_headers(&map), Err(Error::PermissionDenied)));
	}
}

// vim: ts=4
