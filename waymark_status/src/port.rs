// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::StatusRecord;

/// Save/load boundary for a [`StatusStore`](crate::StatusStore).
///
/// The store never touches storage itself; hosts implement this trait over
/// whatever the deployment has — browser local storage, a sync endpoint, a
/// file — and decide when to call [`StatusStore::save_to`](crate::StatusStore::save_to)
/// and [`StatusStore::load_from`](crate::StatusStore::load_from). Entry
/// ordering carries no meaning in either direction.
pub trait StatusPort<K> {
    /// Error surfaced by the underlying storage.
    type Error;

    /// Persists a snapshot of all records.
    fn save(&mut self, records: &[(K, StatusRecord)]) -> Result<(), Self::Error>;

    /// Reads back the most recently persisted snapshot.
    fn load(&mut self) -> Result<Vec<(K, StatusRecord)>, Self::Error>;
}
