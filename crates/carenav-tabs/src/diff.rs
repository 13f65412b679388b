//! Diff between two resolved tab lists.

use std::collections::BTreeMap;

use carenav_types::tab_adapter::TabConfig;

use crate::types::TabDiff;

fn differs(a: &TabConfig, b: &TabConfig) -> bool {
	a.label != b.label
		|| a.icon != b.icon
		|| a.display_order != b.display_order
		|| a.is_visible != b.is_visible
		|| a.scope != b.scope
}

/// Computes which keys were added, removed, or modified between two
/// resolved lists.
///
/// A key counts as modified when its label, icon, display order, or
/// visibility changes, and also when the winning row moves to a different
/// scope with identical display values: the tab is then sourced from a
/// new override even though it looks the same.
pub fn diff(current: &[TabConfig], preview: &[TabConfig]) -> TabDiff {
	let current_by_key: BTreeMap<&str, &TabConfig> =
		current.iter().map(|tab| (&*tab.key, tab)).collect();
	let preview_by_key: BTreeMap<&str, &TabConfig> =
		preview.iter().map(|tab| (&*tab.key, tab)).collect();

	let mut result = TabDiff::default();

	for tab in preview {
		match current_by_key.get(&*tab.key) {
			None => result.added.push(tab.key.clone()),
			Some(before) if differs(before, tab) => result.modified.push(tab.key.clone()),
			Some(_) => {}
		}
	}
	for tab in current {
		if !preview_by_key.contains_key(&*tab.key) {
			result.removed.push(tab.key.clone());
		}
	}

	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testutil::{tab, user_tab};
	use carenav_types::tab_adapter::Scope;
	use carenav_types::types::UserId;
	use std::collections::BTreeSet;

	#[test]
	fn added_removed_modified() {
		let current = vec![
			tab("dashboard", Scope::System, true, 1),
			tab("billing", Scope::System, true, 3),
		];
		let mut moved = tab("dashboard", Scope::System, true, 5);
		moved.label = "Home".into();
		let preview = vec![moved, tab("patients", Scope::System, true, 2)];

		let d = diff(&current, &preview);
		assert_eq!(d.added, vec!["patients".into()] as Vec<Box<str>>);
		assert_eq!(d.removed, vec!["billing".into()] as Vec<Box<str>>);
		assert_eq!(d.modified, vec!["dashboard".into()] as Vec<Box<str>>);
	}

	#[test]
	fn identical_lists_diff_empty() {
		let current = vec![tab("dashboard", Scope::System, true, 1)];
		let preview = vec![tab("dashboard", Scope::System, true, 1)];
		assert!(diff(&current, &preview).is_empty());
	}

	#[test]
	fn scope_change_alone_counts_as_modified() {
		let current = vec![tab("dashboard", Scope::System, true, 1)];
		let preview = vec![user_tab("dashboard", UserId(3), true, 1)];
		let d = diff(&current, &preview);
		assert_eq!(d.modified, vec!["dashboard".into()] as Vec<Box<str>>);
		assert!(d.added.is_empty());
		assert!(d.removed.is_empty());
	}

	// The three sets partition the changed keys: pairwise disjoint, and
	// every differing key lands in exactly one of them.
	#[test]
	fn diff_sets_are_disjoint_and_complete() {
		let current = vec![
			tab("a", Scope::System, true, 1),
			tab("b", Scope::System, true, 2),
			tab("c", Scope::System, true, 3),
		];
		let preview = vec![
			tab("b", Scope::System, true, 9),
			tab("c", Scope::System, true, 3),
			tab("d", Scope::System, true, 4),
		];
		let d = diff(&current, &preview);

		let added: BTreeSet<_> = d.added.iter().collect();
		let removed: BTreeSet<_> = d.removed.iter().collect();
		let modified: BTreeSet<_> = d.modified.iter().collect();
		assert!(added.is_disjoint(&removed));
		assert!(added.is_disjoint(&modified));
		assert!(removed.is_disjoint(&modified));

		let mut all: Vec<&Box<str>> = added.into_iter().chain(removed).chain(modified).collect();
		all.sort();
		let keys: Vec<&str> = all.iter().map(|k| &***k).collect();
		assert_eq!(keys, vec!["a", "b", "d"]);
	}
}

// vim: ts=4
