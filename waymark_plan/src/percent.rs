// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// A bounding region expressed as percentages of the base image.
///
/// `x` and `y` name the top-left corner; all four fields are in `0..=100`
/// for well-formed records. Values outside that range are representable
/// (extraction output is not trusted) and are brought back into range by
/// [`PercentRect::sanitized`] at the rendering/hit-testing boundary.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PercentRect {
    /// Left edge as a percentage of the image width.
    pub x: f64,
    /// Top edge as a percentage of the image height.
    pub y: f64,
    /// Width as a percentage of the image width.
    pub width: f64,
    /// Height as a percentage of the image height.
    pub height: f64,
}

impl PercentRect {
    /// Creates a percent rect from its four components.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` if the rect satisfies the well-formedness invariant:
    /// both corners inside `0..=100` and non-negative extents.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.width >= 0.0
            && self.height >= 0.0
            && (0.0..=100.0).contains(&self.x)
            && (0.0..=100.0).contains(&self.y)
            && self.x + self.width <= 100.0
            && self.y + self.height <= 100.0
    }

    /// Clamps the rect into the valid percentage range.
    ///
    /// Out-of-range corners are moved to the nearest edge and extents are
    /// clamped so the far corner stays inside the image. Negative extents
    /// collapse to zero; degenerate rects survive (downstream minimum-size
    /// enlargement keeps them visible and tappable). Non-finite components
    /// collapse to zero so arithmetic stays total.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        let x = finite(self.x).clamp(0.0, 100.0);
        let y = finite(self.y).clamp(0.0, 100.0);
        let width = finite(self.width).clamp(0.0, 100.0 - x);
        let height = finite(self.height).clamp(0.0, 100.0 - y);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Converts to a pixel rect on an image of the given natural size.
    ///
    /// The conversion is a pure scale; no clamping is applied here, so a
    /// malformed rect converts to a malformed pixel rect. Callers that need
    /// in-bounds geometry sanitize first.
    #[must_use]
    pub fn to_image_rect(&self, image_size: Size) -> Rect {
        let x0 = self.x / 100.0 * image_size.width;
        let y0 = self.y / 100.0 * image_size.height;
        let x1 = (self.x + self.width) / 100.0 * image_size.width;
        let y1 = (self.y + self.height) / 100.0 * image_size.height;
        Rect::new(x0, y0, x1, y1)
    }

    /// Converts a pixel rect on an image of the given natural size back to
    /// percentages.
    ///
    /// Inverse of [`PercentRect::to_image_rect`] up to floating point
    /// tolerance. Zero image dimensions yield a zero rect rather than NaNs.
    #[must_use]
    pub fn from_image_rect(rect: Rect, image_size: Size) -> Self {
        if image_size.width <= 0.0 || image_size.height <= 0.0 {
            return Self::default();
        }
        Self {
            x: rect.x0 / image_size.width * 100.0,
            y: rect.y0 / image_size.height * 100.0,
            width: rect.width() / image_size.width * 100.0,
            height: rect.height() / image_size.height * 100.0,
        }
    }

    /// Converts a percent point (the rect's top-left convention) to an image
    /// pixel point.
    #[must_use]
    pub fn percent_to_image_point(pt: Point, image_size: Size) -> Point {
        Point::new(
            pt.x / 100.0 * image_size.width,
            pt.y / 100.0 * image_size.height,
        )
    }

    /// Converts an image pixel point to percent coordinates.
    ///
    /// Zero image dimensions yield the origin rather than NaNs.
    #[must_use]
    pub fn image_to_percent_point(pt: Point, image_size: Size) -> Point {
        if image_size.width <= 0.0 || image_size.height <= 0.0 {
            return Point::ORIGIN;
        }
        Point::new(
            pt.x / image_size.width * 100.0,
            pt.y / image_size.height * 100.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::PercentRect;

    const PAGE: Size = Size::new(3300.0, 2550.0);

    #[test]
    fn spec_fixture_converts_to_expected_pixel_rect() {
        let bounds = PercentRect::new(25.0, 15.0, 2.0, 1.0);
        let px = bounds.to_image_rect(PAGE);

        assert_eq!(px.x0, 825.0);
        assert_eq!(px.y0, 382.5);
        assert_eq!(px.width(), 66.0);
        assert_eq!(px.height(), 25.5);
    }

    #[test]
    fn image_rect_round_trips_within_tolerance() {
        let original = PercentRect::new(12.34, 56.78, 3.21, 0.9);
        let back = PercentRect::from_image_rect(original.to_image_rect(PAGE), PAGE);

        assert!((back.x - original.x).abs() < 1e-9);
        assert!((back.y - original.y).abs() < 1e-9);
        assert!((back.width - original.width).abs() < 1e-9);
        assert!((back.height - original.height).abs() < 1e-9);
    }

    #[test]
    fn point_conversions_round_trip() {
        let pct = Point::new(33.0, 66.0);
        let px = PercentRect::percent_to_image_point(pct, PAGE);
        let back = PercentRect::image_to_percent_point(px, PAGE);

        assert!((back.x - pct.x).abs() < 1e-9);
        assert!((back.y - pct.y).abs() < 1e-9);
    }

    #[test]
    fn sanitized_clamps_overflowing_rect() {
        let bad = PercentRect::new(95.0, 10.0, 20.0, 5.0);
        let fixed = bad.sanitized();

        assert!(fixed.is_well_formed());
        assert_eq!(fixed.x, 95.0);
        assert_eq!(fixed.width, 5.0);
        assert_eq!(fixed.height, 5.0);
    }

    #[test]
    fn sanitized_collapses_negative_extent_and_nan() {
        let bad = PercentRect::new(-10.0, 50.0, -3.0, f64::NAN);
        let fixed = bad.sanitized();

        assert!(fixed.is_well_formed());
        assert_eq!(fixed.x, 0.0);
        assert_eq!(fixed.width, 0.0);
        assert_eq!(fixed.height, 0.0);
    }

    #[test]
    fn from_image_rect_with_zero_size_is_zero() {
        let rect = kurbo::Rect::new(10.0, 10.0, 20.0, 20.0);
        let pct = PercentRect::from_image_rect(rect, Size::ZERO);
        assert_eq!(pct, PercentRect::default());
    }
}
