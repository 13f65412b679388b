//! App state type

use std::{path::PathBuf, sync::Arc};

use carenav_types::tab_adapter::TabAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,

	pub tab_adapter: Arc<dyn TabAdapter>,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	pub db_dir: PathBuf,
}

// vim: ts=4
