// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Viewport: pan/zoom transform state over a plan image.
//!
//! This crate is the headless camera of the viewport engine. It models how
//! base-image pixel space maps onto viewport pixel space as a single uniform
//! scale plus translation:
//!
//! ```text
//! view_px = image_px * scale + translate
//! ```
//!
//! Two layers are exposed:
//!
//! - [`Transform`]: plain data (`scale`, `translate`) with **pure** update
//!   functions — [`Transform::zoom_about`], [`Transform::pan_by`],
//!   [`Transform::reset`]. These are what the gesture recognizer composes;
//!   being pure, they are unit-testable with literal numbers and can never
//!   leave hidden state behind.
//! - [`PlanViewport`]: a transform plus the device-space view rectangle and
//!   [`ZoomLimits`], caching the composed image→view affine and its inverse.
//!   The pair is rebuilt as one combined transform rather than nested
//!   per-operation transforms, so repeated gestures do not compound rounding
//!   error.
//!
//! Zooming is always **anchored**: the image point under the cursor or pinch
//! midpoint stays under it as the scale changes. This is the correctness
//! property that makes pinch-to-zoom feel pinned rather than jumping, and it
//! is tested as such.
//!
//! Panning is deliberately *not* clamped to the image bounds — field use
//! wants the plan positionable anywhere, including past the edge. Scale is
//! always clamped into the configured limits before application, so no
//! invalid transform is reachable through the public API.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use waymark_viewport::PlanViewport;
//!
//! let mut vp = PlanViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! // Wheel zoom in, anchored at the cursor.
//! vp.zoom_about_view_point(Point::new(400.0, 300.0), 1.1);
//!
//! // Convert a tap back into image space for hit testing.
//! let image_pt = vp.view_to_image_point(Point::new(400.0, 300.0));
//! # let _ = image_pt;
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod transform;
mod viewport;

pub use transform::{Transform, ZoomLimits};
pub use viewport::{PlanViewport, PlanViewportDebugInfo};
