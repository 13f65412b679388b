pub use crate::app::{App, AppState};
pub use carenav_types::error::{CnResult, Error};
pub use carenav_types::types::{OrgId, PresetId, RoleId, Timestamp, UserId};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
