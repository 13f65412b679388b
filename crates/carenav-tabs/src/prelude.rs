pub use carenav_core::app::App;
pub use carenav_types::error::{CnResult, Error};
pub use carenav_types::types::{OrgId, PresetId, RoleId, Timestamp, UserId};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
