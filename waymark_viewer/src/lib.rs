// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Viewer: the consolidated plan viewer component.
//!
//! [`PlanViewer`] is the one parameterized viewer that replaces per-context
//! forks (field capture, validation review, demos): a single component whose
//! behavior differences — zoom range, gesture thresholds, coloring mode,
//! grid, tap-target size — all live in [`ViewerConfig`]. It composes the
//! rest of the workspace:
//!
//! - a [`PlanViewport`](waymark_viewport::PlanViewport) holding the pan/zoom
//!   transform,
//! - a [`GestureRecognizer`](waymark_gesture::GestureRecognizer) classifying
//!   pointer input,
//! - a [`Momentum`](waymark_gesture::Momentum) slot for pinch-flick decay,
//! - the immutable hotspot list and the image lifecycle state.
//!
//! Each viewer instance owns all of that outright; mounting two viewers
//! shares nothing.
//!
//! ## Events out, not callbacks in
//!
//! Every input method returns the [`ViewerEvent`]s it produced, in order.
//! The host matches on them — select a sign, flip a page, pop its undo
//! stack — rather than registering callbacks. Transform changes are folded
//! into a single trailing [`ViewerEvent::TransformChanged`] per call, which
//! hosts typically use to refresh a zoom-percentage readout.
//!
//! ## The host drives time
//!
//! The library reads no clocks. Pointer events carry caller-supplied
//! millisecond timestamps, and the pinch-flick animation advances only when
//! the host calls [`PlanViewer::tick`] on its frame timer, stopping when
//! [`PlanViewer::momentum_active`] goes false. A new gesture or an image
//! change cancels the run implicitly; unmounting is just dropping the
//! viewer — there is no timer to leak.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use waymark_plan::{Hotspot, ImageState, PercentRect};
//! use waymark_viewer::{PlanViewer, ViewerConfig, ViewerEvent};
//!
//! let mut viewer = PlanViewer::new(Rect::new(0.0, 0.0, 800.0, 600.0), ViewerConfig::default());
//! viewer.set_hotspots(vec![Hotspot::new(
//!     "ATL06-1-0147",
//!     PercentRect::new(10.0, 8.0, 2.0, 1.0),
//!     92.0,
//! )]);
//! viewer.set_image_state(ImageState::Ready(Size::new(3300.0, 2550.0)));
//!
//! // A quick tap on the sign (10% of 3300 is image x 330) selects it.
//! viewer.pointer_down(1, Point::new(340.0, 210.0), 1_000);
//! let events = viewer.pointer_up(1, Point::new(340.0, 210.0), 1_150);
//! assert_eq!(
//!     events,
//!     [ViewerEvent::HotspotActivated("ATL06-1-0147".into())]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod event;
mod viewer;

pub use config::ViewerConfig;
pub use event::ViewerEvent;
pub use viewer::{PlanViewer, PlanViewerDebugInfo};
