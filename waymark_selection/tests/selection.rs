// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `waymark_selection` crate.
//!
//! These exercise the `Selection<K>` API with a focus on how contents, the
//! primary role, and the revision counter interact.

use waymark_selection::Selection;

#[test]
fn empty_selection_basics() {
    let sel = Selection::<&str>::new();
    assert!(sel.is_empty());
    assert_eq!(sel.len(), 0);
    assert_eq!(sel.primary(), None);
    assert_eq!(sel.revision(), 0);
}

#[test]
fn select_only_sets_primary_and_bumps_revision() {
    let mut sel = Selection::new();
    sel.select_only("A-1");

    assert_eq!(sel.items(), &["A-1"]);
    assert_eq!(sel.primary(), Some(&"A-1"));
    assert_eq!(sel.revision(), 1);

    // No-op: selecting the same singleton again leaves the revision alone.
    sel.select_only("A-1");
    assert_eq!(sel.revision(), 1);
}

#[test]
fn clear_empties_and_bumps_revision_only_on_change() {
    let mut sel = Selection::<&str>::new();
    sel.clear();
    assert_eq!(sel.revision(), 0);

    sel.select_only("A-1");
    assert_eq!(sel.revision(), 1);

    sel.clear();
    assert!(sel.is_empty());
    assert_eq!(sel.primary(), None);
    assert_eq!(sel.revision(), 2);
}

#[test]
fn replace_with_dedups_and_sets_first_as_primary() {
    let mut sel = Selection::new();

    sel.replace_with(["A-1", "A-2", "A-2", "A-3"]);
    assert_eq!(sel.items(), &["A-1", "A-2", "A-3"]);
    assert_eq!(sel.primary(), Some(&"A-1"));

    // Replacing with identical contents is a no-op.
    let rev = sel.revision();
    sel.replace_with(["A-1", "A-2", "A-3"]);
    assert_eq!(sel.revision(), rev);

    // An empty batch deselects everything.
    sel.replace_with([]);
    assert!(sel.is_empty());
    assert_eq!(sel.primary(), None);
}

#[test]
fn extend_with_adds_items_and_moves_primary_to_last_added() {
    let mut sel = Selection::new();
    sel.replace_with(["A-1", "A-2"]);
    let rev_before = sel.revision();

    sel.extend_with(["A-2", "A-3", "A-3", "A-4"]);
    assert_eq!(sel.items(), &["A-1", "A-2", "A-3", "A-4"]);
    assert_eq!(sel.primary(), Some(&"A-4"));
    assert!(sel.revision() > rev_before);

    // Extending with only already-selected keys changes nothing.
    let rev_noop = sel.revision();
    sel.extend_with(["A-1", "A-2"]);
    assert_eq!(sel.revision(), rev_noop);
}

#[test]
fn add_and_remove_update_primary_and_revision() {
    let mut sel = Selection::new();
    sel.add("A-1");
    sel.add("A-2");
    assert_eq!(sel.items(), &["A-1", "A-2"]);
    assert_eq!(sel.primary(), Some(&"A-2"));

    let rev_before = sel.revision();
    // Adding an already-selected key only moves the primary.
    sel.add("A-1");
    assert_eq!(sel.primary(), Some(&"A-1"));
    assert!(sel.revision() > rev_before);

    // Removing a non-existent key is a no-op.
    let rev_before_remove = sel.revision();
    sel.remove(&"A-99");
    assert_eq!(sel.revision(), rev_before_remove);

    // Removing an existing key updates contents and revision.
    sel.remove(&"A-1");
    assert_eq!(sel.items(), &["A-2"]);
    assert!(sel.revision() > rev_before_remove);
}

#[test]
fn toggle_adds_and_removes_with_revision() {
    let mut sel = Selection::new();

    sel.toggle("A-1");
    assert_eq!(sel.items(), &["A-1"]);
    assert_eq!(sel.primary(), Some(&"A-1"));
    let rev_after_add = sel.revision();

    sel.toggle("A-1");
    assert!(sel.items().is_empty());
    assert!(sel.primary().is_none());
    assert!(sel.revision() > rev_after_add);
}

#[test]
fn removing_below_primary_keeps_it_pointing_at_the_same_key() {
    let mut sel = Selection::new();
    sel.replace_with(["A-1", "A-2", "A-3"]);
    sel.set_primary(&"A-3");

    sel.remove(&"A-1");
    assert_eq!(sel.items(), &["A-2", "A-3"]);
    assert_eq!(sel.primary(), Some(&"A-3"));
}

#[test]
fn set_primary_is_a_noop_when_unchanged_or_unselected() {
    let mut sel = Selection::new();
    sel.replace_with(["A-1", "A-2"]);
    sel.set_primary(&"A-2");
    let rev = sel.revision();

    sel.set_primary(&"A-2");
    assert_eq!(sel.revision(), rev);

    // Keys outside the selection never become primary.
    sel.set_primary(&"A-99");
    assert_eq!(sel.primary(), Some(&"A-2"));
    assert_eq!(sel.revision(), rev);
}

#[test]
fn is_selected_reflects_membership() {
    let mut sel = Selection::new();
    sel.replace_with(["A-1", "A-2"]);

    assert!(sel.is_selected(&"A-1"));
    assert!(!sel.is_selected(&"A-3"));

    sel.remove(&"A-1");
    assert!(!sel.is_selected(&"A-1"));
}
