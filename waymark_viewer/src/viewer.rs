// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use waymark_gesture::{GestureRecognizer, GestureUpdate, Momentum};
use waymark_hit::hit_test_point;
use waymark_overlay::{OverlayFrame, build_frame};
use waymark_plan::{Hotspot, ImageState, SignStatus};
use waymark_viewport::{PlanViewport, Transform};

use crate::{ViewerConfig, ViewerEvent};

/// The consolidated plan viewer.
///
/// Owns one viewport, one gesture recognizer, one momentum slot, and the
/// page data (hotspot list + image state). See the crate docs for the
/// interaction model; every input method returns the [`ViewerEvent`]s it
/// produced.
#[derive(Clone, Debug)]
pub struct PlanViewer {
    config: ViewerConfig,
    viewport: PlanViewport,
    recognizer: GestureRecognizer,
    momentum: Option<Momentum>,
    hotspots: Vec<Hotspot>,
    image: ImageState,
}

impl PlanViewer {
    /// Creates a viewer covering `view_rect` with no hotspots and the image
    /// still loading.
    #[must_use]
    pub fn new(view_rect: Rect, config: ViewerConfig) -> Self {
        let mut recognizer = GestureRecognizer::new(config.gesture);
        recognizer.set_view_rect(view_rect);
        Self {
            config,
            viewport: PlanViewport::with_limits(view_rect, config.limits),
            recognizer,
            momentum: None,
            hotspots: Vec::new(),
            image: ImageState::Loading,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.viewport.transform()
    }

    /// Returns the viewport for read-side conversions.
    #[must_use]
    pub fn viewport(&self) -> &PlanViewport {
        &self.viewport
    }

    /// Returns the hotspot list.
    #[must_use]
    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    /// Returns the image lifecycle state.
    #[must_use]
    pub fn image_state(&self) -> ImageState {
        self.image
    }

    /// Replaces the hotspot list.
    ///
    /// The list is immutable input from the extraction pipeline; replacing
    /// it wholesale is how a host switches pages (together with
    /// [`PlanViewer::set_image_state`]).
    pub fn set_hotspots(&mut self, hotspots: Vec<Hotspot>) {
        self.hotspots = hotspots;
    }

    /// Sets the image lifecycle state.
    ///
    /// Any actual change resets the transform to the mount state and cancels
    /// a running flick: a new page (or a retried load) must never inherit
    /// the previous page's pan/zoom. Returns the transform-change event when
    /// the reset moved anything.
    pub fn set_image_state(&mut self, image: ImageState) -> Vec<ViewerEvent> {
        if self.image == image {
            return Vec::new();
        }
        self.image = image;
        self.momentum = None;
        self.recognizer.on_cancel();

        let before = self.viewport.transform();
        self.viewport.reset();
        if self.viewport.transform() == before {
            Vec::new()
        } else {
            Vec::from([ViewerEvent::TransformChanged(self.viewport.transform())])
        }
    }

    /// Moves/resizes the viewer within its window.
    ///
    /// Pan and zoom are preserved; edge-swipe margins follow the new rect.
    pub fn set_view_rect(&mut self, rect: Rect) {
        self.viewport.set_view_rect(rect);
        self.recognizer.set_view_rect(rect);
    }

    /// A pointer or touch contact landed.
    ///
    /// Starting a new gesture session takes over from any running flick.
    pub fn pointer_down(&mut self, id: u64, pos: Point, at_ms: u64) -> Vec<ViewerEvent> {
        self.momentum = None;
        let updates = self.recognizer.on_down(id, pos, at_ms);
        self.apply_updates(updates)
    }

    /// A tracked contact moved.
    pub fn pointer_move(&mut self, id: u64, pos: Point, at_ms: u64) -> Vec<ViewerEvent> {
        let updates = self.recognizer.on_move(id, pos, at_ms);
        self.apply_updates(updates)
    }

    /// A tracked contact lifted.
    pub fn pointer_up(&mut self, id: u64, pos: Point, at_ms: u64) -> Vec<ViewerEvent> {
        let updates = self.recognizer.on_up(id, pos, at_ms);
        self.apply_updates(updates)
    }

    /// The platform cancelled the interaction. Drops the gesture session
    /// without emitting anything.
    pub fn pointer_cancel(&mut self) {
        self.recognizer.on_cancel();
    }

    /// Mouse-wheel input: an anchored zoom step at the cursor.
    ///
    /// Explicit input overrides animation, so a running flick stops first.
    pub fn wheel(&mut self, pos: Point, delta_y: f64) -> Vec<ViewerEvent> {
        self.momentum = None;
        let updates = self.recognizer.on_wheel(pos, delta_y);
        self.apply_updates(updates)
    }

    /// Advances the pinch-flick animation by one frame.
    ///
    /// Call once per animation frame while [`PlanViewer::momentum_active`]
    /// is `true`; an empty return with no momentum left means the host can
    /// stop its timer. The run also stops early when the zoom limit is
    /// reached — decaying against the clamp would burn frames changing
    /// nothing.
    pub fn tick(&mut self) -> Vec<ViewerEvent> {
        let Some(momentum) = &mut self.momentum else {
            return Vec::new();
        };
        let Some((anchor, factor)) = momentum.tick() else {
            self.momentum = None;
            return Vec::new();
        };

        let before = self.viewport.transform();
        self.viewport.zoom_about_view_point(anchor, factor);
        if self.viewport.transform() == before {
            self.momentum = None;
            return Vec::new();
        }
        Vec::from([ViewerEvent::TransformChanged(self.viewport.transform())])
    }

    /// Returns `true` while a pinch flick is animating.
    #[must_use]
    pub fn momentum_active(&self) -> bool {
        self.momentum.is_some()
    }

    /// Stops a running flick without applying anything further.
    pub fn cancel_momentum(&mut self) {
        self.momentum = None;
    }

    /// Explicit zoom-in command, anchored at the view center.
    pub fn zoom_in(&mut self) -> Vec<ViewerEvent> {
        self.zoom_command(self.config.command_zoom_step)
    }

    /// Explicit zoom-out command, anchored at the view center.
    pub fn zoom_out(&mut self) -> Vec<ViewerEvent> {
        self.zoom_command(1.0 / self.config.command_zoom_step)
    }

    /// Resets pan and zoom to the mount state.
    pub fn reset_view(&mut self) -> Vec<ViewerEvent> {
        self.momentum = None;
        let before = self.viewport.transform();
        self.viewport.reset();
        self.transform_event_since(before)
    }

    /// Fits the whole plan into the view, centered.
    ///
    /// A no-op until the image dimensions are known.
    pub fn fit(&mut self) -> Vec<ViewerEvent> {
        let Some(size) = self.image.size() else {
            return Vec::new();
        };
        self.momentum = None;
        let before = self.viewport.transform();
        self.viewport.fit_image(size);
        self.transform_event_since(before)
    }

    /// Resolves a device-space point to the hotspot a tap there would
    /// activate, if any.
    #[must_use]
    pub fn hit_test(&self, view_pt: Point) -> Option<&Hotspot> {
        let size = self.image.size()?;
        hit_test_point(
            &self.hotspots,
            size,
            &self.viewport,
            view_pt,
            &self.config.overlay.hit,
        )
        .map(|hit| &self.hotspots[hit.index])
    }

    /// Builds the frame description for the current state.
    ///
    /// `status_of` and `is_selected` are the host's read-only lookups
    /// (typically a status store and a selection); see `waymark_overlay`
    /// for the layer semantics.
    #[must_use]
    pub fn frame<S, Q>(&self, status_of: S, is_selected: Q) -> OverlayFrame<'_>
    where
        S: Fn(&str) -> Option<SignStatus>,
        Q: Fn(&str) -> bool,
    {
        build_frame(
            &self.hotspots,
            self.image,
            &self.viewport,
            &self.config.overlay,
            status_of,
            is_selected,
        )
    }

    /// Snapshot of the viewer's state for debugging and host inspection.
    #[must_use]
    pub fn debug_info(&self) -> PlanViewerDebugInfo {
        PlanViewerDebugInfo {
            viewport: self.viewport.debug_info(),
            gesture: self.recognizer.debug_info(),
            momentum_active: self.momentum.is_some(),
            hotspots: self.hotspots.len(),
            image: self.image,
        }
    }

    fn zoom_command(&mut self, factor: f64) -> Vec<ViewerEvent> {
        self.momentum = None;
        let before = self.viewport.transform();
        self.viewport
            .zoom_about_view_point(self.viewport.view_rect().center(), factor);
        self.transform_event_since(before)
    }

    fn transform_event_since(&self, before: Transform) -> Vec<ViewerEvent> {
        if self.viewport.transform() == before {
            Vec::new()
        } else {
            Vec::from([ViewerEvent::TransformChanged(self.viewport.transform())])
        }
    }

    /// Applies recognizer output to the viewport and maps discrete gestures
    /// to host events. Continuous updates coalesce into one trailing
    /// [`ViewerEvent::TransformChanged`].
    fn apply_updates(&mut self, updates: Vec<GestureUpdate>) -> Vec<ViewerEvent> {
        let mut events = Vec::new();
        let before = self.viewport.transform();

        for update in updates {
            match update {
                GestureUpdate::Pan(delta) => self.viewport.pan_by_view(delta),
                GestureUpdate::ZoomAbout { anchor, factor } => {
                    self.viewport.zoom_about_view_point(anchor, factor);
                }
                GestureUpdate::Tap(pos) => {
                    if let Some(spot) = self.hit_test(pos) {
                        events.push(ViewerEvent::HotspotActivated(spot.sign.clone()));
                    }
                }
                GestureUpdate::TwoFingerTap => events.push(ViewerEvent::UndoRequested),
                GestureUpdate::ThreeFingerTap => events.push(ViewerEvent::OverviewToggleRequested),
                GestureUpdate::EdgeSwipe(direction) => {
                    events.push(ViewerEvent::PageNavigationRequested(direction));
                }
                GestureUpdate::PinchFlick { anchor, residual } => {
                    let momentum = Momentum::new(anchor, residual, &self.config.gesture);
                    if !momentum.is_finished() {
                        self.momentum = Some(momentum);
                    }
                }
            }
        }

        events.extend(self.transform_event_since(before));
        events
    }
}

/// Debug snapshot of a [`PlanViewer`]'s state.
#[derive(Clone, Copy, Debug)]
pub struct PlanViewerDebugInfo {
    /// Viewport state (transform, limits, visible region).
    pub viewport: waymark_viewport::PlanViewportDebugInfo,
    /// Gesture session state.
    pub gesture: waymark_gesture::GestureDebugInfo,
    /// Whether a pinch flick is animating.
    pub momentum_active: bool,
    /// Number of hotspots on the page.
    pub hotspots: usize,
    /// Image lifecycle state.
    pub image: ImageState,
}
