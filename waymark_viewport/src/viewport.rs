// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::{Transform, ZoomLimits};

/// A bounded viewport over a plan image.
///
/// `PlanViewport` combines a [`Transform`] with the device-space view
/// rectangle and [`ZoomLimits`], and caches the composed image→view affine
/// together with its inverse. Every mutation rebuilds the cached pair from
/// the transform in one step, so conversions never accumulate rounding from
/// chained incremental updates.
///
/// The view rectangle's origin participates in the mapping (a viewport
/// embedded at `(200, 0)` in a window maps image pixels into that region),
/// while [`PlanViewport::transform`] stays in viewport-local terms as the
/// gesture layer expects.
#[derive(Clone, Debug)]
pub struct PlanViewport {
    view_rect: Rect,
    transform: Transform,
    limits: ZoomLimits,
    image_to_view: Affine,
    view_to_image: Affine,
}

impl PlanViewport {
    /// Creates a viewport covering `view_rect` with the identity transform
    /// and default zoom limits.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        Self::with_limits(view_rect, ZoomLimits::default())
    }

    /// Creates a viewport with explicit zoom limits.
    #[must_use]
    pub fn with_limits(view_rect: Rect, limits: ZoomLimits) -> Self {
        let mut vp = Self {
            view_rect,
            transform: Transform {
                scale: limits.clamp(1.0),
                translate: Vec2::ZERO,
            },
            limits,
            image_to_view: Affine::IDENTITY,
            view_to_image: Affine::IDENTITY,
        };
        vp.rebuild();
        vp
    }

    /// Returns the view rectangle in device coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the view rectangle in device coordinates.
    ///
    /// Zoom and pan are untouched; the cached affines are rebuilt.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild();
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Replaces the transform, clamping its scale into the zoom limits.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = Transform {
            scale: self.limits.clamp(transform.scale),
            translate: transform.translate,
        };
        self.rebuild();
    }

    /// Returns the current zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Replaces the zoom limits and re-clamps the current scale.
    pub fn set_zoom_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
        let clamped = limits.clamp(self.transform.scale);
        if clamped != self.transform.scale {
            self.transform.scale = clamped;
        }
        self.rebuild();
    }

    /// Current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Zooms by `factor` anchored at a device-space point.
    ///
    /// The image point under the anchor stays under it; see
    /// [`Transform::zoom_about`].
    pub fn zoom_about_view_point(&mut self, anchor: Point, factor: f64) {
        let local = Point::new(
            anchor.x - self.view_rect.x0,
            anchor.y - self.view_rect.y0,
        );
        let next = self.transform.zoom_about(local, factor, self.limits);
        if next != self.transform {
            self.transform = next;
            self.rebuild();
        }
    }

    /// Pans by a delta in device pixels. Unclamped.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.transform = self.transform.pan_by(delta);
        self.rebuild();
    }

    /// Resets to the mount-time state: scale 1 (clamped into limits),
    /// no translation.
    pub fn reset(&mut self) {
        self.transform = Transform {
            scale: self.limits.clamp(1.0),
            translate: Vec2::ZERO,
        };
        self.rebuild();
    }

    /// Fits an image of `image_size` entirely into the view, centered and
    /// aspect-preserving, clamped into the zoom limits.
    ///
    /// Degenerate image or view dimensions are a no-op.
    pub fn fit_image(&mut self, image_size: Size) {
        if image_size.width <= 0.0 || image_size.height <= 0.0 {
            return;
        }
        let view = self.view_rect.size();
        if view.width <= 0.0 || view.height <= 0.0 {
            return;
        }
        let scale = self
            .limits
            .clamp((view.width / image_size.width).min(view.height / image_size.height));
        let translate = Vec2::new(
            (view.width - image_size.width * scale) / 2.0,
            (view.height - image_size.height * scale) / 2.0,
        );
        self.transform = Transform { scale, translate };
        self.rebuild();
    }

    /// Pans so the given image-space point lands at the view center.
    pub fn center_on(&mut self, image_pt: Point) {
        let at = self.image_to_view_point(image_pt);
        self.pan_by_view(self.view_rect.center() - at);
    }

    /// Returns the composed image→view affine.
    ///
    /// This is the single transform a backend applies to the image layer;
    /// it already folds in the view rect origin.
    #[must_use]
    pub fn image_to_view_affine(&self) -> Affine {
        self.image_to_view
    }

    /// Converts an image-space point into device coordinates.
    #[must_use]
    pub fn image_to_view_point(&self, pt: Point) -> Point {
        self.image_to_view * pt
    }

    /// Converts a device-space point into image coordinates.
    #[must_use]
    pub fn view_to_image_point(&self, pt: Point) -> Point {
        self.view_to_image * pt
    }

    /// Converts an image-space rect into device coordinates.
    #[must_use]
    pub fn image_to_view_rect(&self, rect: Rect) -> Rect {
        let p0 = self.image_to_view * Point::new(rect.x0, rect.y0);
        let p1 = self.image_to_view * Point::new(rect.x1, rect.y1);
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// Converts a device-space rect into image coordinates.
    #[must_use]
    pub fn view_to_image_rect(&self, rect: Rect) -> Rect {
        let p0 = self.view_to_image * Point::new(rect.x0, rect.y0);
        let p1 = self.view_to_image * Point::new(rect.x1, rect.y1);
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// Returns the image-space rectangle currently visible through the view.
    ///
    /// This is the culling input: hotspots whose image rects miss it are not
    /// projected at all.
    #[must_use]
    pub fn visible_image_rect(&self) -> Rect {
        self.view_to_image_rect(self.view_rect)
    }

    /// Snapshot of the current state for debugging and host inspection.
    #[must_use]
    pub fn debug_info(&self) -> PlanViewportDebugInfo {
        PlanViewportDebugInfo {
            view_rect: self.view_rect,
            transform: self.transform,
            limits: self.limits,
            visible_image_rect: self.visible_image_rect(),
        }
    }

    fn rebuild(&mut self) {
        let view_origin = Vec2::new(self.view_rect.x0, self.view_rect.y0);
        self.image_to_view = Affine::translate(view_origin + self.transform.translate)
            * Affine::scale(self.transform.scale);
        self.view_to_image = self.image_to_view.inverse();
    }
}

/// Debug snapshot of a [`PlanViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct PlanViewportDebugInfo {
    /// View rectangle in device coordinates.
    pub view_rect: Rect,
    /// Current transform (viewport-local).
    pub transform: Transform,
    /// Configured zoom limits.
    pub limits: ZoomLimits,
    /// Image-space rectangle currently visible.
    pub visible_image_rect: Rect,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::PlanViewport;
    use crate::ZoomLimits;

    fn wide_viewport() -> PlanViewport {
        PlanViewport::with_limits(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            ZoomLimits::new(0.1, 5.0),
        )
    }

    #[test]
    fn identity_round_trip() {
        let vp = wide_viewport();
        let pt = Point::new(123.0, 456.0);
        let back = vp.view_to_image_point(vp.image_to_view_point(pt));
        assert!((back.x - pt.x).abs() < 1e-9);
        assert!((back.y - pt.y).abs() < 1e-9);
    }

    #[test]
    fn round_trip_across_zoom_range() {
        let mut vp = wide_viewport();
        let pt = Point::new(1650.0, 1275.0);
        for factor in [0.2, 0.5, 1.0, 2.0, 4.9] {
            vp.reset();
            vp.zoom_about_view_point(Point::new(400.0, 300.0), factor);
            vp.pan_by_view(Vec2::new(-210.0, 95.0));
            let back = vp.view_to_image_point(vp.image_to_view_point(pt));
            assert!((back.x - pt.x).abs() < 1e-6);
            assert!((back.y - pt.y).abs() < 1e-6);
        }
    }

    #[test]
    fn zoom_about_view_point_pins_the_anchor() {
        let mut vp = wide_viewport();
        vp.pan_by_view(Vec2::new(-300.0, -150.0));

        let anchor = Point::new(400.0, 300.0);
        let before = vp.view_to_image_point(anchor);
        vp.zoom_about_view_point(anchor, 2.0);
        let after = vp.image_to_view_point(before);

        assert!((after.x - anchor.x).abs() < 1.0);
        assert!((after.y - anchor.y).abs() < 1.0);
    }

    #[test]
    fn anchor_respects_offset_view_rect() {
        let mut vp = PlanViewport::with_limits(
            Rect::new(200.0, 100.0, 1000.0, 700.0),
            ZoomLimits::new(0.1, 5.0),
        );
        let anchor = Point::new(600.0, 400.0);
        let before = vp.view_to_image_point(anchor);
        vp.zoom_about_view_point(anchor, 1.6);
        let after = vp.image_to_view_point(before);

        assert!((after.x - anchor.x).abs() < 1e-6);
        assert!((after.y - anchor.y).abs() < 1e-6);
    }

    #[test]
    fn default_limits_hold_scale_at_or_above_one() {
        let mut vp = PlanViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        vp.zoom_about_view_point(Point::new(400.0, 300.0), 0.5);
        assert_eq!(vp.scale(), 1.0);

        for _ in 0..32 {
            vp.zoom_about_view_point(Point::new(400.0, 300.0), 1.5);
        }
        assert_eq!(vp.scale(), 5.0);
    }

    #[test]
    fn reset_restores_identity() {
        let mut vp = wide_viewport();
        vp.zoom_about_view_point(Point::new(10.0, 10.0), 3.0);
        vp.pan_by_view(Vec2::new(999.0, -999.0));
        vp.reset();

        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.transform().translate, Vec2::ZERO);
    }

    #[test]
    fn fit_image_centers_and_preserves_aspect() {
        let mut vp = wide_viewport();
        vp.fit_image(Size::new(3300.0, 2550.0));

        // Width-limited: 800 / 3300.
        let expected = 800.0 / 3300.0;
        assert!((vp.scale() - expected).abs() < 1e-12);

        // Image center maps to view center.
        let center = vp.image_to_view_point(Point::new(1650.0, 1275.0));
        assert!((center.x - 400.0).abs() < 1e-9);
        assert!((center.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn center_on_moves_target_to_view_center() {
        let mut vp = wide_viewport();
        vp.zoom_about_view_point(Point::new(0.0, 0.0), 2.0);
        vp.center_on(Point::new(500.0, 500.0));

        let at = vp.image_to_view_point(Point::new(500.0, 500.0));
        assert!((at.x - 400.0).abs() < 1e-9);
        assert!((at.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn visible_image_rect_shrinks_when_zooming_in() {
        let mut vp = wide_viewport();
        let before = vp.visible_image_rect();
        vp.zoom_about_view_point(Point::new(400.0, 300.0), 2.0);
        let after = vp.visible_image_rect();

        assert!(after.width() < before.width());
        assert!(after.height() < before.height());
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut vp = wide_viewport();
        vp.pan_by_view(Vec2::new(5.0, 6.0));
        let info = vp.debug_info();
        assert_eq!(info.view_rect, vp.view_rect());
        assert_eq!(info.transform, vp.transform());
        assert_eq!(info.visible_image_rect, vp.visible_image_rect());
    }
}
