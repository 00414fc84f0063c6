// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Allowed zoom range for a viewport.
///
/// The defaults come from field use: `min` of `1.0` (the plan never renders
/// smaller than its fitted size) and `max` of `5.0`. Validation and demo
/// contexts configure wider ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Smallest allowed scale factor.
    pub min: f64,
    /// Largest allowed scale factor.
    pub max: f64,
}

impl ZoomLimits {
    /// Creates limits, normalizing so that `min <= max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamps a scale factor into the range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: 1.0, max: 5.0 }
    }
}

/// A uniform scale plus translation mapping image pixels to view pixels.
///
/// `view_px = image_px * scale + translate`. All update functions are pure:
/// they take `self` by value and return the successor transform, which keeps
/// gesture handling testable against literal numbers and guarantees there is
/// no hidden state to desynchronize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform scale factor. Always positive.
    pub scale: f64,
    /// Translation in view pixels.
    pub translate: Vec2,
}

impl Transform {
    /// The identity mapping: scale 1, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
    };

    /// Returns the mount-time transform (identity).
    #[must_use]
    pub const fn reset() -> Self {
        Self::IDENTITY
    }

    /// Zooms by `factor` anchored at `anchor` (in view pixels).
    ///
    /// The new scale is `clamp(scale * factor)` against `limits`; the
    /// translation is then recomputed so the image point currently under the
    /// anchor stays under it:
    ///
    /// ```text
    /// translate' = anchor - (anchor - translate) * (scale' / scale)
    /// ```
    ///
    /// Non-positive or non-finite factors leave the transform unchanged.
    #[must_use]
    pub fn zoom_about(self, anchor: Point, factor: f64, limits: ZoomLimits) -> Self {
        if !(factor > 0.0) || !factor.is_finite() {
            return self;
        }
        let new_scale = limits.clamp(self.scale * factor);
        if new_scale == self.scale {
            return self;
        }
        let ratio = new_scale / self.scale;
        let anchor = anchor.to_vec2();
        Self {
            scale: new_scale,
            translate: anchor - (anchor - self.translate) * ratio,
        }
    }

    /// Translates the view by `delta` view pixels.
    ///
    /// No clamping against image bounds: panning past the edge is allowed.
    #[must_use]
    pub fn pan_by(self, delta: Vec2) -> Self {
        Self {
            scale: self.scale,
            translate: self.translate + delta,
        }
    }

    /// Returns the equivalent affine, composed as translate ∘ scale.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Maps an image-space point into view space.
    #[must_use]
    pub fn image_to_view_point(self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.translate.x,
            pt.y * self.scale + self.translate.y,
        )
    }

    /// Maps a view-space point back into image space.
    #[must_use]
    pub fn view_to_image_point(self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.translate.x) / self.scale,
            (pt.y - self.translate.y) / self.scale,
        )
    }

    /// Maps an image-space rect into view space.
    ///
    /// The transform is axis-aligned with uniform positive scale, so mapping
    /// the two corners is exact.
    #[must_use]
    pub fn image_to_view_rect(self, rect: Rect) -> Rect {
        let p0 = self.image_to_view_point(Point::new(rect.x0, rect.y0));
        let p1 = self.image_to_view_point(Point::new(rect.x1, rect.y1));
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// Maps a view-space rect back into image space.
    #[must_use]
    pub fn view_to_image_rect(self, rect: Rect) -> Rect {
        let p0 = self.view_to_image_point(Point::new(rect.x0, rect.y0));
        let p1 = self.view_to_image_point(Point::new(rect.x1, rect.y1));
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
