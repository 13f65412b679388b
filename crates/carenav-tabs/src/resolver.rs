//! Scope resolution: merges raw override rows into the effective tab list.
//!
//! For each distinct key the row with the highest scope priority wins
//! (`system < organization < role < user`). Hidden rows are dropped after
//! the merge, so an override can hide a tab that a lower scope shows.

use std::collections::btree_map::{BTreeMap, Entry};

use carenav_types::tab_adapter::TabConfig;

use crate::prelude::*;

/// Reduces override rows to the effective configuration: one row per key,
/// highest scope priority wins, hidden tabs dropped, ascending by
/// `display_order`.
///
/// Two rows at equal priority for one key violate the storage uniqueness
/// invariant; when it happens anyway the later row in the input wins, and
/// the conflict is logged. Rows with equal `display_order` keep a stable
/// key order.
pub fn resolve(rows: Vec<TabConfig>) -> Vec<TabConfig> {
	let mut by_key: BTreeMap<Box<str>, TabConfig> = BTreeMap::new();

	for row in rows {
		match by_key.entry(row.key.clone()) {
			Entry::Vacant(entry) => {
				entry.insert(row);
			}
			Entry::Occupied(mut entry) => {
				let prio = row.scope.priority();
				let existing = entry.get().scope.priority();
				if prio == existing {
					warn!(
						key = %row.key,
						scope = ?row.scope,
						"Duplicate override at equal scope, keeping the later row"
					);
				}
				if prio >= existing {
					entry.insert(row);
				}
			}
		}
	}

	let mut tabs: Vec<TabConfig> =
		by_key.into_values().filter(|tab| tab.is_visible).collect();
	tabs.sort_by_key(|tab| tab.display_order);
	tabs
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testutil::{org_tab, role_tab, tab, user_tab};
	use carenav_types::tab_adapter::Scope;
	use carenav_types::types::{OrgId, RoleId, UserId};

	#[test]
	fn highest_scope_wins() {
		let rows = vec![
			tab("dashboard", Scope::System, true, 1),
			org_tab("dashboard", OrgId(1), true, 5),
			role_tab("dashboard", RoleId(2), true, 7),
			user_tab("dashboard", UserId(3), true, 9),
		];
		let resolved = resolve(rows);
		assert_eq!(resolved.len(), 1);
		assert_eq!(resolved[0].scope, Scope::User);
		assert_eq!(resolved[0].display_order, 9);
	}

	#[test]
	fn hidden_rows_are_dropped_after_merge() {
		let rows = vec![
			tab("billing", Scope::System, true, 1),
			user_tab("billing", UserId(3), false, 1),
			tab("patients", Scope::System, true, 2),
		];
		let resolved = resolve(rows);
		assert_eq!(resolved.len(), 1);
		assert_eq!(&*resolved[0].key, "patients");
		assert!(resolved.iter().all(|t| t.is_visible));
	}

	#[test]
	fn result_is_ordered_and_deduplicated() {
		let rows = vec![
			tab("c", Scope::System, true, 30),
			tab("a", Scope::System, true, 10),
			tab("b", Scope::System, true, 20),
			user_tab("a", UserId(3), true, 40),
		];
		let resolved = resolve(rows);
		let keys: Vec<&str> = resolved.iter().map(|t| &*t.key).collect();
		assert_eq!(keys, vec!["b", "c", "a"]);
		assert!(resolved.windows(2).all(|w| w[0].display_order <= w[1].display_order));
	}

	// Equal-priority duplicates should not exist in storage; when the
	// caller hands them over anyway, the later row wins. Pinned here so a
	// change in that behavior is an intentional one.
	#[test]
	fn equal_scope_duplicate_keeps_the_later_row() {
		let first = user_tab("dashboard", UserId(3), true, 1);
		let mut second = user_tab("dashboard", UserId(3), true, 2);
		second.label = "later".into();

		let resolved = resolve(vec![first, second]);
		assert_eq!(resolved.len(), 1);
		assert_eq!(&*resolved[0].label, "later");
		assert_eq!(resolved[0].display_order, 2);
	}

	#[test]
	fn equal_display_order_keeps_key_order() {
		let rows = vec![
			tab("zeta", Scope::System, true, 1),
			tab("alpha", Scope::System, true, 1),
		];
		let keys: Vec<Box<str>> = resolve(rows).into_iter().map(|t| t.key).collect();
		assert_eq!(keys, vec!["alpha".into(), "zeta".into()]);
	}
}

// vim: ts=4
