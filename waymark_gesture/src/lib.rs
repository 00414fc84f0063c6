// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Gesture: pointer/touch gesture recognition for plan viewers.
//!
//! This crate turns a raw stream of contact events into the semantic
//! vocabulary of the viewer: pan, anchored pinch zoom, tap-select,
//! two-finger tap (undo), three-finger tap (overview toggle), edge swipe
//! (page navigation), and wheel zoom. It is the replacement for gesture
//! detection scattered across ad hoc event-handler conditionals: one
//! explicit state machine per interaction session, unit-testable by feeding
//! it synthetic event records.
//!
//! ## Input model
//!
//! [`GestureRecognizer`] consumes `(contact id, position, timestamp)`
//! records via [`GestureRecognizer::on_down`], [`on_move`](GestureRecognizer::on_move),
//! [`on_up`](GestureRecognizer::on_up), and [`on_cancel`](GestureRecognizer::on_cancel).
//! Timestamps are caller-supplied milliseconds; the crate never reads a
//! clock. Each call returns the [`GestureUpdate`]s the event produced, in
//! order. Updates are *semantic*, not applied: the caller owns the transform
//! and applies [`GestureUpdate::Pan`] / [`GestureUpdate::ZoomAbout`] to it.
//!
//! ## Classification rules
//!
//! A session begins at the first contact down and ends when the last contact
//! lifts. Classification is mutually exclusive and order-sensitive:
//!
//! - One contact moving beyond the pan threshold becomes a **pan** stream.
//! - Two contacts produce **pinch** updates (zoom about the contact
//!   midpoint, factor from the distance ratio) plus midpoint pans so the
//!   plan tracks the fingers.
//! - Short, small-movement sessions emit exactly one discrete gesture on
//!   release — tap, two-finger tap, or three-finger tap by the session's
//!   peak contact count.
//! - Once a session has produced any continuous transform update, discrete
//!   emission is suppressed for that session. Lifting one finger of a pinch
//!   degrades to continued panning; a fourth contact is ignored outright.
//! - A single-contact session released near a vertical viewport edge with
//!   enough horizontal travel emits an **edge swipe** instead of a plain
//!   pan ending. Edge swipes are by construction moved sessions and are the
//!   one discrete gesture exempt from moved-session suppression.
//!
//! A pinch released while still changing scale emits a
//! [`GestureUpdate::PinchFlick`] carrying the residual per-frame factor;
//! hosts feed it into [`Momentum`] and tick that on their frame timer until
//! it reports completion. Wheel input is a synthetic single-point pinch with
//! no momentum.
//!
//! Every threshold lives in [`GestureConfig`]; nothing is hardwired at a
//! call site.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use waymark_gesture::{GestureConfig, GestureRecognizer, GestureUpdate};
//!
//! let mut rec = GestureRecognizer::new(GestureConfig::default());
//!
//! // Press and release within the tap window without moving: a tap.
//! assert!(rec.on_down(1, Point::new(100.0, 100.0), 1_000).is_empty());
//! let updates = rec.on_up(1, Point::new(101.0, 100.0), 1_120);
//! assert!(matches!(updates.as_slice(), [GestureUpdate::Tap(_)]));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod momentum;
mod recognizer;

pub use config::GestureConfig;
pub use momentum::Momentum;
pub use recognizer::{
    GestureDebugInfo, GesturePhase, GestureRecognizer, GestureUpdate, SwipeDirection,
};
