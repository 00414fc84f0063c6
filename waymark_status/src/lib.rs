// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Status: the host-side store for sign installation status.
//!
//! Field technicians walk a site marking each sign installed, missing, or
//! damaged; validation reviewers correct extraction output. Both workflows
//! mutate the same thing: a map from sign key to a [`StatusRecord`]. This
//! crate holds that map behind a reducer-style API so every mutation goes
//! through one explicit [`StatusAction`] type, with inverse-action undo/redo
//! history and a [`StatusPort`] save/load boundary — the store itself never
//! touches storage.
//!
//! The viewport engine is only a *reader* of this store: the overlay layer
//! takes a `sign -> status` lookup to pick render colors, and the two-finger
//! undo gesture surfaces as an event the host answers by calling
//! [`StatusStore::undo`]. Nothing in the engine mutates status.
//!
//! - Every change is an action; applying one records its inverse on a
//!   bounded undo stack and clears the redo stack.
//! - A [`StatusStore::revision`] counter bumps on every effective change,
//!   so hosts can cheaply decide whether to rebuild a frame.
//! - Persistence lives at the edge: implement [`StatusPort`] over whatever
//!   storage the deployment has and call [`StatusStore::save_to`] /
//!   [`StatusStore::load_from`] at the host's own cadence.
//!
//! ## Minimal example
//!
//! ```rust
//! use waymark_plan::SignStatus;
//! use waymark_status::{StatusAction, StatusRecord, StatusStore};
//!
//! let mut store = StatusStore::new();
//!
//! store.apply(StatusAction::mark(
//!     "ATL06-1-0147",
//!     StatusRecord::new(SignStatus::Installed, 1_700_000_000_000),
//! ));
//! assert_eq!(store.status_of(&"ATL06-1-0147"), Some(SignStatus::Installed));
//!
//! // The two-finger tap arrives as an undo request; answer it here.
//! assert!(store.undo());
//! assert_eq!(store.status_of(&"ATL06-1-0147"), None);
//! assert!(store.redo());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod port;
mod store;

pub use port::StatusPort;
pub use store::{StatusAction, StatusRecord, StatusStore, StatusStoreDebugInfo};
