//! Carenav server entry point

use std::{env, path::PathBuf, sync::Arc};

use carenav_core::app::{AppBuilderOpts, AppState};
use carenav_tab_adapter_sqlite::TabAdapterSqlite;
use carenav_types::prelude::*;

mod bootstrap;
mod routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "info".into()),
		)
		.init();

	let db_dir = PathBuf::from(env::var("DB_DIR").unwrap_or_else(|_| "./data".to_string()));
	let listen = env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

	tokio::fs::create_dir_all(&db_dir).await?;
	let tab_adapter = Arc::new(TabAdapterSqlite::new(db_dir.join("tabs.db")).await?);
	bootstrap::ensure_system_defaults(&*tab_adapter).await?;

	let state = Arc::new(AppState {
		opts: AppBuilderOpts { listen: listen.clone().into_boxed_str(), db_dir },
		tab_adapter,
	});

	let router = routes::init(state);
	let listener = tokio::net::TcpListener::bind(&listen).await?;
	info!(%listen, "Carenav server listening");
	axum::serve(listener, router).await?;

	Ok(())
}

// vim: ts=4
