// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Plan: sign hotspot records and the percentage coordinate model.
//!
//! A floor-plan page is a large raster image (thousands of pixels on a side)
//! plus a set of **hotspots**: one clickable region per sign detected by the
//! offline extraction pipeline. Hotspot geometry is stored as *percentages of
//! the base image* rather than pixels, because the same page is displayed at
//! many rendered sizes and percentages are resolution independent.
//!
//! This crate holds the leaf data types shared by the rest of the workspace:
//!
//! - [`PercentRect`]: a bounding region in percent units with pure,
//!   deterministic conversion to and from image pixel space.
//! - [`Hotspot`]: one extracted sign location (immutable input data).
//! - [`SignStatus`]: the field installation vocabulary used for render
//!   coloring and status tracking.
//! - [`ImageState`]: the lifecycle of the base image, including the
//!   "dimensions not yet known" and "failed to load" states that the
//!   renderer must treat as valid.
//!
//! ## Coordinate conventions
//!
//! `x`/`y` of a [`PercentRect`] name the **top-left corner** of the box, in
//! `0..=100`. A hotspot at `{x: 25, y: 15, width: 2, height: 1}` on a
//! 3300×2550 image therefore occupies the pixel rect with origin
//! `(825, 382.5)` and size `(66, 25.5)`.
//!
//! ```rust
//! use kurbo::Size;
//! use waymark_plan::PercentRect;
//!
//! let bounds = PercentRect::new(25.0, 15.0, 2.0, 1.0);
//! let px = bounds.to_image_rect(Size::new(3300.0, 2550.0));
//! assert_eq!((px.x0, px.y0), (825.0, 382.5));
//! assert_eq!((px.width(), px.height()), (66.0, 25.5));
//! ```
//!
//! ## Tolerance
//!
//! Extraction output is machine-generated and occasionally malformed
//! (out-of-range percentages, zero or negative extents). Conversions never
//! reject a record; [`PercentRect::sanitized`] clamps geometry into the valid
//! range so that one bad detection clips rather than blanking a whole page
//! overlay. Consumers that render or hit-test are expected to sanitize first
//! so the two never disagree.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hotspot;
mod image;
mod percent;

pub use hotspot::{Hotspot, SignStatus};
pub use image::ImageState;
pub use percent::PercentRect;
