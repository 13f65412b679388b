//! First-run seeding of the system default tabs.
//!
//! The clinic tab set every organization starts from. Seeding inserts
//! only keys that do not exist yet, so operator edits survive restarts
//! and exactly one system default per key exists at any time.

use carenav_types::prelude::*;
use carenav_types::tab_adapter::{NewTabConfig, Scope, TabAdapter};

const DEFAULT_TABS: &[(&str, &str, &str, &str, i32)] = &[
	("dashboard", "Dashboard", "gauge", "general", 1),
	("patients", "Patients", "users", "clinical", 2),
	("appointments", "Appointments", "calendar", "clinical", 3),
	("prescriptions", "Prescriptions", "pill", "clinical", 4),
	("lab-results", "Lab results", "flask", "clinical", 5),
	("vaccinations", "Vaccinations", "syringe", "clinical", 6),
	("billing", "Billing", "receipt", "administration", 7),
	("settings", "Settings", "sliders", "administration", 8),
];

pub async fn ensure_system_defaults(tabs: &dyn TabAdapter) -> CnResult<()> {
	for (key, label, icon, category, display_order) in DEFAULT_TABS {
		tabs.create_system_default(&NewTabConfig {
			key: (*key).into(),
			label: (*label).into(),
			icon: Some((*icon).into()),
			content_type: None,
			settings: None,
			scope: Scope::System,
			organization_id: None,
			role_id: None,
			user_id: None,
			is_visible: true,
			is_mandatory: *key == "dashboard",
			is_system_default: true,
			category: Some((*category).into()),
			display_order: *display_order,
			created_by: None,
		})
		.await?;
	}
	info!(tabs = DEFAULT_TABS.len(), "System default tabs ensured");
	Ok(())
}

// vim: ts=4
