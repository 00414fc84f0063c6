// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::Hash;
use hashbrown::HashMap;
use waymark_plan::SignStatus;

use crate::StatusPort;

/// Default bound on the undo and redo stacks.
///
/// A site walk produces a few hundred markings per page at most; keeping the
/// last hundred reversible covers every realistic correction without letting
/// history grow with session length.
const DEFAULT_HISTORY_LIMIT: usize = 100;

/// One sign's tracked state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusRecord {
    /// Installation status.
    pub status: SignStatus,
    /// Free-form technician note, if any.
    pub note: Option<String>,
    /// Caller-supplied timestamp of the last change, in milliseconds.
    pub updated_at_ms: u64,
}

impl StatusRecord {
    /// Creates a record with no note.
    #[must_use]
    pub const fn new(status: SignStatus, updated_at_ms: u64) -> Self {
        Self {
            status,
            note: None,
            updated_at_ms,
        }
    }

    /// Attaches a technician note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// One mutation of the store.
///
/// Every change goes through [`StatusStore::apply`] as an action, which is
/// what makes the history exact: the inverse of a `Mark` over an existing
/// record is a `Mark` restoring it, the inverse of a first-time `Mark` is a
/// `Clear`, and vice versa.
#[derive(Clone, Debug, PartialEq)]
pub enum StatusAction<K> {
    /// Sets (or replaces) the record for a sign.
    Mark {
        /// Sign key.
        key: K,
        /// The new record.
        record: StatusRecord,
    },
    /// Removes the record for a sign, returning it to the unmarked state.
    Clear {
        /// Sign key.
        key: K,
    },
}

impl<K> StatusAction<K> {
    /// Shorthand for a [`StatusAction::Mark`].
    #[must_use]
    pub const fn mark(key: K, record: StatusRecord) -> Self {
        Self::Mark { key, record }
    }

    /// Shorthand for a [`StatusAction::Clear`].
    #[must_use]
    pub const fn clear(key: K) -> Self {
        Self::Clear { key }
    }
}

/// Reducer-style map from sign key to [`StatusRecord`] with undo/redo.
///
/// Owned by the host application; one store per page or per site, as the
/// host prefers. The viewport engine reads it through a closure at frame
/// build time and never holds a reference across frames.
#[derive(Clone, Debug)]
pub struct StatusStore<K> {
    records: HashMap<K, StatusRecord>,
    undo: VecDeque<StatusAction<K>>,
    redo: VecDeque<StatusAction<K>>,
    history_limit: usize,
    revision: u64,
}

impl<K> Default for StatusStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> StatusStore<K> {
    /// Creates an empty store with the default history bound.
    #[must_use]
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Creates an empty store keeping at most `limit` undoable actions.
    ///
    /// A limit of zero disables history entirely; apply still works.
    #[must_use]
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            records: HashMap::new(),
            undo: VecDeque::new(),
            redo: VecDeque::new(),
            history_limit: limit,
            revision: 0,
        }
    }

    /// Returns the number of signs with a recorded status.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no sign has a recorded status.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the current revision counter.
    ///
    /// Bumped on every effective change, including undo, redo, and load.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if there is an action to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns `true` if there is an undone action to replay.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Iterates over all recorded signs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &StatusRecord)> {
        self.records.iter()
    }

    /// Snapshot of the store's shape for debugging and host inspection.
    #[must_use]
    pub fn debug_info(&self) -> StatusStoreDebugInfo {
        StatusStoreDebugInfo {
            records: self.records.len(),
            undo_depth: self.undo.len(),
            redo_depth: self.redo.len(),
            history_limit: self.history_limit,
            revision: self.revision,
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K> StatusStore<K>
where
    K: Hash + Eq + Clone,
{
    /// Returns the record for a sign, if any.
    ///
    /// Borrowed key forms work the way map lookups usually do: a store
    /// keyed by `String` answers `&str` queries.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&StatusRecord>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.records.get(key)
    }

    /// Returns just the status for a sign, if any.
    ///
    /// This is the lookup the overlay layer evaluates per visible hotspot.
    #[must_use]
    pub fn status_of<Q>(&self, key: &Q) -> Option<SignStatus>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.records.get(key).map(|record| record.status)
    }

    /// Applies an action, recording its inverse for undo.
    ///
    /// Returns `true` if the store changed. No-op actions (marking with an
    /// identical record, clearing an unmarked sign) leave history and
    /// revision untouched. Any effective action clears the redo stack.
    pub fn apply(&mut self, action: StatusAction<K>) -> bool {
        let Some(inverse) = self.run(action) else {
            return false;
        };
        self.push_bounded_undo(inverse);
        self.redo.clear();
        self.bump_revision();
        true
    }

    /// Undoes the most recent action.
    ///
    /// Returns `false` when there is nothing to undo — the host's undo
    /// gesture simply fizzles rather than erroring.
    pub fn undo(&mut self) -> bool {
        let Some(inverse) = self.undo.pop_back() else {
            return false;
        };
        // Undoing cannot be a no-op: the inverse restores a state that the
        // recorded action demonstrably changed.
        if let Some(redo) = self.run(inverse) {
            self.redo.push_back(redo);
        }
        self.bump_revision();
        true
    }

    /// Replays the most recently undone action.
    pub fn redo(&mut self) -> bool {
        let Some(action) = self.redo.pop_back() else {
            return false;
        };
        if let Some(inverse) = self.run(action) {
            self.push_bounded_undo(inverse);
        }
        self.bump_revision();
        true
    }

    /// Writes the current records through a persistence port.
    ///
    /// The store is not mutated; ordering of the saved entries is arbitrary.
    pub fn save_to<P>(&self, port: &mut P) -> Result<(), P::Error>
    where
        P: StatusPort<K> + ?Sized,
    {
        let entries: Vec<(K, StatusRecord)> = self
            .records
            .iter()
            .map(|(key, record)| (key.clone(), record.clone()))
            .collect();
        port.save(&entries)
    }

    /// Replaces the store's contents from a persistence port.
    ///
    /// History is cleared — undoing across a load would silently revert to
    /// in-memory state the storage never saw. The revision bumps even if the
    /// loaded contents happen to match.
    pub fn load_from<P>(&mut self, port: &mut P) -> Result<(), P::Error>
    where
        P: StatusPort<K> + ?Sized,
    {
        let entries = port.load()?;
        self.records = entries.into_iter().collect();
        self.undo.clear();
        self.redo.clear();
        self.bump_revision();
        Ok(())
    }

    /// Executes an action against the map, returning its inverse, or `None`
    /// if the action changed nothing.
    fn run(&mut self, action: StatusAction<K>) -> Option<StatusAction<K>> {
        match action {
            StatusAction::Mark { key, record } => {
                if self.records.get(&key) == Some(&record) {
                    return None;
                }
                match self.records.insert(key.clone(), record) {
                    Some(previous) => Some(StatusAction::Mark {
                        key,
                        record: previous,
                    }),
                    None => Some(StatusAction::Clear { key }),
                }
            }
            StatusAction::Clear { key } => {
                let previous = self.records.remove(&key)?;
                Some(StatusAction::Mark {
                    key,
                    record: previous,
                })
            }
        }
    }

    fn push_bounded_undo(&mut self, inverse: StatusAction<K>) {
        if self.history_limit == 0 {
            return;
        }
        if self.undo.len() == self.history_limit {
            self.undo.pop_front();
        }
        self.undo.push_back(inverse);
    }
}

/// Debug snapshot of a [`StatusStore`]'s shape.
#[derive(Clone, Copy, Debug)]
pub struct StatusStoreDebugInfo {
    /// Signs with a recorded status.
    pub records: usize,
    /// Depth of the undo stack.
    pub undo_depth: usize,
    /// Depth of the redo stack.
    pub redo_depth: usize,
    /// Configured history bound.
    pub history_limit: usize,
    /// Current revision counter.
    pub revision: u64,
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use waymark_plan::SignStatus;

    use super::{StatusAction, StatusRecord, StatusStore};
    use crate::StatusPort;

    fn installed(at: u64) -> StatusRecord {
        StatusRecord::new(SignStatus::Installed, at)
    }

    #[test]
    fn mark_and_read_back() {
        let mut store = StatusStore::new();
        assert!(store.apply(StatusAction::mark("A-1", installed(100))));

        assert_eq!(store.status_of(&"A-1"), Some(SignStatus::Installed));
        assert_eq!(store.status_of(&"A-2"), None);
        assert_eq!(store.len(), 1);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn identical_mark_is_a_noop() {
        let mut store = StatusStore::new();
        store.apply(StatusAction::mark("A-1", installed(100)));
        let rev = store.revision();

        assert!(!store.apply(StatusAction::mark("A-1", installed(100))));
        assert_eq!(store.revision(), rev);
        assert!(!store.can_redo());

        // A different timestamp is an effective change.
        assert!(store.apply(StatusAction::mark("A-1", installed(200))));
    }

    #[test]
    fn clearing_an_unmarked_sign_is_a_noop() {
        let mut store = StatusStore::<&str>::new();
        assert!(!store.apply(StatusAction::clear("A-1")));
        assert_eq!(store.revision(), 0);
        assert!(!store.can_undo());
    }

    #[test]
    fn undo_redo_round_trips_a_mark() {
        let mut store = StatusStore::new();
        store.apply(StatusAction::mark("A-1", installed(100)));

        assert!(store.undo());
        assert_eq!(store.status_of(&"A-1"), None);
        assert!(store.can_redo());

        assert!(store.redo());
        assert_eq!(store.get(&"A-1"), Some(&installed(100)));
        assert!(store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn undo_restores_the_replaced_record() {
        let mut store = StatusStore::new();
        store.apply(StatusAction::mark("A-1", installed(100)));
        store.apply(StatusAction::mark(
            "A-1",
            StatusRecord::new(SignStatus::Damaged, 200).with_note("bent bracket"),
        ));

        assert!(store.undo());
        assert_eq!(store.get(&"A-1"), Some(&installed(100)));
    }

    #[test]
    fn new_action_clears_redo() {
        let mut store = StatusStore::new();
        store.apply(StatusAction::mark("A-1", installed(100)));
        store.undo();
        assert!(store.can_redo());

        store.apply(StatusAction::mark("A-2", installed(300)));
        assert!(!store.can_redo());
        assert!(!store.redo());
    }

    #[test]
    fn history_is_bounded() {
        let mut store = StatusStore::with_history_limit(3);
        for step in 0..10_u64 {
            store.apply(StatusAction::mark("A-1", installed(step)));
        }
        assert_eq!(store.debug_info().undo_depth, 3);

        // Only the last three marks unwind; the oldest reachable state is
        // the record from step 6.
        assert!(store.undo());
        assert!(store.undo());
        assert!(store.undo());
        assert!(!store.undo());
        assert_eq!(store.get(&"A-1"), Some(&installed(6)));
    }

    #[test]
    fn zero_history_limit_disables_undo() {
        let mut store = StatusStore::with_history_limit(0);
        assert!(store.apply(StatusAction::mark("A-1", installed(100))));
        assert!(!store.can_undo());
        assert!(!store.undo());
        assert_eq!(store.status_of(&"A-1"), Some(SignStatus::Installed));
    }

    #[test]
    fn undo_fizzles_on_empty_history() {
        let mut store = StatusStore::<&str>::new();
        assert!(!store.undo());
        assert!(!store.redo());
        assert_eq!(store.revision(), 0);
    }

    /// Vec-backed port standing in for whatever storage a deployment has.
    #[derive(Default)]
    struct MemoryPort {
        saved: Vec<(&'static str, StatusRecord)>,
    }

    impl StatusPort<&'static str> for MemoryPort {
        type Error = core::convert::Infallible;

        fn save(&mut self, records: &[(&'static str, StatusRecord)]) -> Result<(), Self::Error> {
            self.saved = records.to_vec();
            Ok(())
        }

        fn load(&mut self) -> Result<Vec<(&'static str, StatusRecord)>, Self::Error> {
            Ok(self.saved.clone())
        }
    }

    #[test]
    fn save_and_load_round_trip_through_a_port() {
        let mut store = StatusStore::new();
        store.apply(StatusAction::mark("A-1", installed(100)));
        store.apply(StatusAction::mark(
            "A-2",
            StatusRecord::new(SignStatus::Missing, 200),
        ));

        let mut port = MemoryPort::default();
        store.save_to(&mut port).unwrap();
        assert_eq!(port.saved.len(), 2);

        let mut restored = StatusStore::new();
        restored.load_from(&mut port).unwrap();
        assert_eq!(restored.status_of(&"A-1"), Some(SignStatus::Installed));
        assert_eq!(restored.status_of(&"A-2"), Some(SignStatus::Missing));
        assert_eq!(restored.revision(), 1);

        // Loading severs history: the pre-load actions are not undoable.
        assert!(!restored.can_undo());
    }
}
