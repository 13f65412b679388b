//! Types for the tab-configuration engine

use serde::{Deserialize, Serialize};

use carenav_types::tab_adapter::{Scope, TabConfig, TabPreset};

/// Scope at which a preset can be applied. System defaults are seeded,
/// never written through the apply path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetScope {
	#[serde(rename = "organization")]
	Organization,
	#[serde(rename = "role")]
	Role,
	#[serde(rename = "user")]
	User,
}

impl TargetScope {
	pub fn scope(self) -> Scope {
		match self {
			TargetScope::Organization => Scope::Organization,
			TargetScope::Role => Scope::Role,
			TargetScope::User => Scope::User,
		}
	}
}

/// Keys that differ between two resolved tab lists.
///
/// The three sets are pairwise disjoint and together account for every
/// key that differs between the lists.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TabDiff {
	pub added: Vec<Box<str>>,
	pub removed: Vec<Box<str>>,
	pub modified: Vec<Box<str>>,
}

impl TabDiff {
	pub fn is_empty(&self) -> bool {
		self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
	}
}

/// Result of a simulated apply. `current` is the actor's effective
/// configuration as stored; `preview` is what it would become.
#[derive(Debug, Serialize)]
pub struct PresetPreview {
	pub preset: TabPreset,
	pub current: Vec<TabConfig>,
	pub preview: Vec<TabConfig>,
	pub diff: TabDiff,
}

/// Result of an apply. `tabs` is the actor's effective configuration
/// after the transaction committed.
#[derive(Debug, Serialize)]
pub struct ApplyResult {
	pub message: Box<str>,
	pub preset: Box<str>,
	pub tabs: Vec<TabConfig>,
}

// vim: ts=4
