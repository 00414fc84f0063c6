// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Hit: resolve taps and lasso rectangles against hotspot sets.
//!
//! Hit testing answers "which sign did the user mean?" for a pointer event
//! in device space. The point is converted into image space through the
//! inverse viewport transform and tested against each hotspot's
//! percentage-derived rectangle — after the same minimum-tap-target
//! enlargement the renderer applies, so a hit always succeeds against what
//! the user visually sees, and after the same geometry sanitization, so hit
//! and render never disagree about a malformed record.
//!
//! Dense sign layouts overlap constantly, so resolution is deterministic:
//! the **smallest enlarged area** wins (most specific match), and equal
//! areas fall to the **highest index** (topmost in render order, hotspots
//! being drawn in slice order).
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use waymark_hit::{HitParams, hit_test_point};
//! use waymark_plan::{Hotspot, PercentRect};
//! use waymark_viewport::PlanViewport;
//!
//! let spots = [Hotspot::new("A-1", PercentRect::new(25.0, 15.0, 2.0, 1.0), 90.0)];
//! let viewport = PlanViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! let hit = hit_test_point(
//!     &spots,
//!     Size::new(3300.0, 2550.0),
//!     &viewport,
//!     Point::new(850.0, 390.0),
//!     &HitParams::default(),
//! );
//! assert_eq!(hit.map(|h| h.index), Some(0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;
use waymark_plan::Hotspot;
use waymark_viewport::PlanViewport;

/// Tunables for hit testing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Minimum on-screen size of a hit/render target, in device pixels.
    /// The touch-target guideline value; kept configurable rather than
    /// assumed precise.
    pub min_target_px: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self { min_target_px: 44.0 }
    }
}

/// One resolved hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Index of the hotspot in the slice passed to the query.
    pub index: usize,
    /// Enlarged image-space area used for the specificity tie-break.
    pub area: f64,
}

/// Grows an image-space rect so it never renders (or hits) below the
/// minimum target size on screen.
///
/// The floor is `min_target_px / scale` in image units, applied per axis
/// around the rect center **before** the transform, so the on-screen floor
/// is exactly `min_target_px` at any zoom. Rects already large enough are
/// returned unchanged. The renderer applies the identical enlargement;
/// keeping the two in lockstep is what makes every visible box tappable.
#[must_use]
pub fn enlarged_image_rect(rect: Rect, scale: f64, params: &HitParams) -> Rect {
    if scale <= 0.0 {
        return rect;
    }
    let floor = params.min_target_px / scale;
    let width = rect.width().max(floor);
    let height = rect.height().max(floor);
    Rect::from_center_size(rect.center(), Size::new(width, height))
}

/// Returns every hotspot under a device-space point, most specific first.
///
/// Ordering is smallest enlarged area, then highest index. Returns nothing
/// while the image size is unknown or degenerate — without real dimensions
/// the percent geometry has no pixel meaning.
#[must_use]
pub fn hits_at_point(
    spots: &[Hotspot],
    image_size: Size,
    viewport: &PlanViewport,
    view_pt: Point,
    params: &HitParams,
) -> SmallVec<[Hit; 4]> {
    let mut hits: SmallVec<[Hit; 4]> = SmallVec::new();
    if image_size.width <= 0.0 || image_size.height <= 0.0 {
        return hits;
    }
    let image_pt = viewport.view_to_image_point(view_pt);
    let scale = viewport.scale();

    for (index, spot) in spots.iter().enumerate() {
        let rect = enlarged_image_rect(
            spot.bounds.sanitized().to_image_rect(image_size),
            scale,
            params,
        );
        if contains(rect, image_pt) {
            hits.push(Hit {
                index,
                area: rect.area(),
            });
        }
    }

    // Smallest area first; among equals the higher index (topmost) leads.
    hits.sort_by(|a, b| {
        a.area
            .total_cmp(&b.area)
            .then_with(|| b.index.cmp(&a.index))
    });
    hits
}

/// Resolves a device-space point to at most one hotspot.
///
/// The winner is the most specific overlapping hotspot per the ordering of
/// [`hits_at_point`].
#[must_use]
pub fn hit_test_point(
    spots: &[Hotspot],
    image_size: Size,
    viewport: &PlanViewport,
    view_pt: Point,
    params: &HitParams,
) -> Option<Hit> {
    hits_at_point(spots, image_size, viewport, view_pt, params)
        .first()
        .copied()
}

/// Returns the indices of all hotspots intersecting a device-space
/// rectangle, in slice order.
///
/// This is the lasso/multi-select primitive for validation workflows. The
/// same enlargement applies, so everything visibly inside the band is
/// included.
#[must_use]
pub fn hits_in_rect(
    spots: &[Hotspot],
    image_size: Size,
    viewport: &PlanViewport,
    view_rect: Rect,
    params: &HitParams,
) -> Vec<usize> {
    let mut out = Vec::new();
    if image_size.width <= 0.0 || image_size.height <= 0.0 {
        return out;
    }
    let query = viewport.view_to_image_rect(view_rect);
    let scale = viewport.scale();

    for (index, spot) in spots.iter().enumerate() {
        let rect = enlarged_image_rect(
            spot.bounds.sanitized().to_image_rect(image_size),
            scale,
            params,
        );
        if rect.intersect(query).area() > 0.0 {
            out.push(index);
        }
    }
    out
}

/// Inclusive containment; kurbo's `Rect::contains` is half-open, which
/// would make the far edges of a box untappable.
fn contains(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}
