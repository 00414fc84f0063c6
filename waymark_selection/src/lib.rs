// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Selection: bookkeeping for the set of selected signs.
//!
//! The viewport engine resolves taps to sign identifiers; *which* signs are
//! currently selected is application state the host owns. This crate is that
//! bookkeeping: a small container tracking the selected keys, an optional
//! **primary** key (the most recently interacted-with sign, the one detail
//! panes show), and a monotonically increasing **revision** counter that
//! bumps only when the contents actually change.
//!
//! The renderer consumes a selection purely as a membership test — selected
//! signs get the highlight color regardless of status. Nothing here knows
//! about geometry, pages, or ordering; callers map gestures (tap, lasso,
//! toggle) into concrete key sets and hand them over.
//!
//! - Keys live in a small `Vec<K>` with uniqueness enforced by equality; no
//!   hashing or ordering constraints on `K`. Selections in sign review run
//!   to tens of items, not thousands.
//! - No-op mutations (selecting the already-selected singleton, clearing an
//!   empty selection) leave the revision untouched, so hosts can use it as a
//!   cheap "did anything change?" probe after a batch of calls.
//!
//! ## Minimal example
//!
//! ```rust
//! use waymark_selection::Selection;
//!
//! let mut selection = Selection::new();
//!
//! // Tap on a sign: replace the selection with it.
//! selection.select_only("ATL06-1-0147");
//! assert_eq!(selection.primary(), Some(&"ATL06-1-0147"));
//!
//! // Ctrl-click toggles membership.
//! selection.toggle("ATL06-1-0012");
//! assert_eq!(selection.len(), 2);
//!
//! // Lasso: the hit layer computes the keys, the selection takes the batch.
//! selection.replace_with(["ATL06-1-0200", "ATL06-1-0201"]);
//! assert!(selection.is_selected(&"ATL06-1-0201"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// A set of selected sign keys plus a primary key and a change revision.
///
/// `Selection` requires only equality on `K`, so it works directly with sign
/// number strings or any host-side handle type. Uniqueness is enforced by
/// scanning, which is the right trade for the tens-of-items selections sign
/// review produces.
#[derive(Clone, Debug, Default)]
pub struct Selection<K> {
    items: Vec<K>,
    primary: Option<usize>,
    revision: u64,
}

impl<K> Selection<K> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            primary: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns all selected keys in their internal order.
    ///
    /// The order is stable within one instance but carries no application
    /// meaning.
    #[must_use]
    pub fn items(&self) -> &[K] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.items.iter()
    }

    /// Returns the primary key, if any.
    ///
    /// The primary is the most recently interacted-with sign; hosts use it
    /// to drive detail panes and keyboard commands.
    #[must_use]
    pub fn primary(&self) -> Option<&K> {
        self.primary.map(|idx| &self.items[idx])
    }

    /// Returns the current revision counter.
    ///
    /// Bumped only when a mutation changes the selected set or the primary.
    /// Observers compare revisions instead of full contents to decide
    /// whether to re-render.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        if self.items.is_empty() && self.primary.is_none() {
            return;
        }
        self.items.clear();
        self.primary = None;
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K> Selection<K>
where
    K: PartialEq,
{
    /// Returns `true` if `key` is currently selected.
    ///
    /// This is the membership test the renderer evaluates per visible
    /// hotspot to pick the highlight color.
    #[must_use]
    pub fn is_selected(&self, key: &K) -> bool {
        self.position_of(key).is_some()
    }

    /// Replaces the selection with a single key, which becomes primary.
    ///
    /// The mapping for a plain tap on a sign.
    pub fn select_only(&mut self, key: K) {
        if self.items.len() == 1 && self.items.first() == Some(&key) && self.primary == Some(0) {
            return;
        }
        self.items.clear();
        self.items.push(key);
        self.primary = Some(0);
        self.bump_revision();
    }

    /// Replaces the selection with a batch of keys.
    ///
    /// Duplicates in the input are ignored; the first unique key becomes
    /// primary. The mapping for a lasso that starts a fresh selection.
    pub fn replace_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        let mut new_items: Vec<K> = Vec::new();
        for key in keys {
            if !new_items.iter().any(|existing| existing == &key) {
                new_items.push(key);
            }
        }
        let new_primary = if new_items.is_empty() { None } else { Some(0) };
        if new_items == self.items && self.primary == new_primary {
            return;
        }
        self.items = new_items;
        self.primary = new_primary;
        self.bump_revision();
    }

    /// Extends the selection with a batch of keys.
    ///
    /// Already-selected keys stay put; duplicates in the input are ignored.
    /// The last key actually added becomes primary. The mapping for a lasso
    /// with a modifier held.
    pub fn extend_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        let mut last_added = None;
        for key in keys {
            if self.position_of(&key).is_none() {
                self.items.push(key);
                last_added = Some(self.items.len() - 1);
            }
        }
        if let Some(idx) = last_added {
            self.primary = Some(idx);
            self.bump_revision();
        }
    }

    /// Adds `key` if not already selected; a newly added key becomes
    /// primary. Re-adding an existing key only moves the primary.
    pub fn add(&mut self, key: K) {
        if let Some(idx) = self.position_of(&key) {
            if self.primary != Some(idx) {
                self.primary = Some(idx);
                self.bump_revision();
            }
        } else {
            self.items.push(key);
            self.primary = Some(self.items.len() - 1);
            self.bump_revision();
        }
    }

    /// Removes `key` from the selection if present.
    pub fn remove(&mut self, key: &K) {
        if let Some(idx) = self.position_of(key) {
            self.remove_at(idx);
            self.bump_revision();
        }
    }

    /// Toggles membership of `key`.
    ///
    /// A newly added key becomes primary; removing the last key clears the
    /// primary. The mapping for ctrl-click.
    pub fn toggle(&mut self, key: K) {
        if let Some(idx) = self.position_of(&key) {
            self.remove_at(idx);
            self.bump_revision();
        } else {
            self.items.push(key);
            self.primary = Some(self.items.len() - 1);
            self.bump_revision();
        }
    }

    /// Makes `key` the primary if it is already selected.
    pub fn set_primary(&mut self, key: &K) {
        if let Some(idx) = self.position_of(key)
            && self.primary != Some(idx)
        {
            self.primary = Some(idx);
            self.bump_revision();
        }
    }

    fn position_of(&self, key: &K) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }

    fn remove_at(&mut self, idx: usize) {
        self.items.remove(idx);
        if let Some(current) = self.primary {
            if current == idx {
                self.primary = None;
            } else if current > idx {
                self.primary = Some(current - 1);
            }
        }
    }
}
