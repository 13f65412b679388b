use axum::{
	Router, middleware,
	routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use carenav_core::app::App;
use carenav_core::extract::{request_id, resolve_actor};
use carenav_tabs::handler;

pub fn init(state: App) -> Router {
	Router::new()
		.route("/api/tabs", get(handler::get_tabs))
		.route("/api/tab-presets", get(handler::list_presets))
		.route("/api/tab-presets/{preset_id}/preview", get(handler::preview_preset))
		.route("/api/tab-presets/{preset_id}/apply", post(handler::apply_preset))
		.layer(middleware::from_fn(resolve_actor))
		.layer(middleware::from_fn(request_id))
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
		.with_state(state)
}

// vim: ts=4
