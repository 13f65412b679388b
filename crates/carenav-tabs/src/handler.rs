//! Tab-configuration HTTP handlers

use axum::{
	Json,
	extract::{Path, Query, State},
	http::StatusCode,
};
use serde::Deserialize;

use carenav_core::extract::{Actor, OptionalRequestId};
use carenav_types::tab_adapter::{TabConfig, TabPreset};
use carenav_types::types::ApiResponse;

use crate::prelude::*;
use crate::types::{ApplyResult, PresetPreview, TargetScope};
use crate::{apply, catalog, preview, resolver};

/// GET /api/tabs - the actor's effective tab configuration
pub async fn get_tabs(
	State(app): State<App>,
	Actor(actor): Actor,
	OptionalRequestId(req_id): OptionalRequestId,
) -> CnResult<(StatusCode, Json<ApiResponse<Vec<TabConfig>>>)> {
	let rows = app
		.tab_adapter
		.list_tab_configs(actor.org_id, actor.role_id, actor.user.user_id())
		.await?;
	let tabs = resolver::resolve(rows);

	let mut response = ApiResponse::new(tabs);
	if let Some(id) = req_id {
		response = response.with_req_id(id);
	}
	Ok((StatusCode::OK, Json(response)))
}

/// GET /api/tab-presets - presets visible to the actor
pub async fn list_presets(
	State(app): State<App>,
	Actor(actor): Actor,
	OptionalRequestId(req_id): OptionalRequestId,
) -> CnResult<(StatusCode, Json<ApiResponse<Vec<TabPreset>>>)> {
	let presets = catalog::list_for(&*app.tab_adapter, &actor).await?;

	let mut response = ApiResponse::new(presets);
	if let Some(id) = req_id {
		response = response.with_req_id(id);
	}
	Ok((StatusCode::OK, Json(response)))
}

#[derive(Deserialize)]
pub struct PreviewQuery {
	#[serde(rename = "targetScope")]
	pub target_scope: TargetScope,
}

/// GET /api/tab-presets/{preset_id}/preview - dry-run a preset apply
pub async fn preview_preset(
	State(app): State<App>,
	Actor(actor): Actor,
	Path(preset_id): Path<i64>,
	Query(query): Query<PreviewQuery>,
	OptionalRequestId(req_id): OptionalRequestId,
) -> CnResult<(StatusCode, Json<ApiResponse<PresetPreview>>)> {
	let result = preview::preview(
		&*app.tab_adapter,
		PresetId(preset_id),
		query.target_scope,
		&actor,
	)
	.await?;

	let mut response = ApiResponse::new(result);
	if let Some(id) = req_id {
		response = response.with_req_id(id);
	}
	Ok((StatusCode::OK, Json(response)))
}

#[derive(Deserialize)]
pub struct ApplyRequest {
	#[serde(rename = "targetScope")]
	pub target_scope: TargetScope,
}

/// POST /api/tab-presets/{preset_id}/apply - apply a preset at a scope
pub async fn apply_preset(
	State(app): State<App>,
	Actor(actor): Actor,
	Path(preset_id): Path<i64>,
	OptionalRequestId(req_id): OptionalRequestId,
	Json(req): Json<ApplyRequest>,
) -> CnResult<(StatusCode, Json<ApiResponse<ApplyResult>>)> {
	let result =
		apply::apply(&*app.tab_adapter, PresetId(preset_id), req.target_scope, &actor).await?;

	let mut response = ApiResponse::new(result);
	if let Some(id) = req_id {
		response = response.with_req_id(id);
	}
	Ok((StatusCode::OK, Json(response)))
}

// vim: ts=4
