// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::GestureConfig;

/// Horizontal travel direction of an edge swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled left, releasing near the left viewport edge.
    Left,
    /// Finger travelled right, releasing near the right viewport edge.
    Right,
}

/// One semantic output of the recognizer.
///
/// Continuous updates (`Pan`, `ZoomAbout`) stream while a gesture is live
/// and are applied by the caller to its transform; the rest are discrete and
/// fire at most once per session, on release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureUpdate {
    /// Translate the view by this many device pixels.
    Pan(Vec2),
    /// Scale by `factor` anchored at `anchor` (device pixels).
    ZoomAbout {
        /// Anchor point that must stay fixed through the zoom.
        anchor: Point,
        /// Incremental scale factor for this frame.
        factor: f64,
    },
    /// Single-contact tap at the release position: hit-test and select.
    Tap(Point),
    /// Two-finger tap: the field vocabulary for undo.
    TwoFingerTap,
    /// Three-finger tap: toggle the overview/scrubber.
    ThreeFingerTap,
    /// Single-contact swipe released near a vertical viewport edge: page
    /// navigation.
    EdgeSwipe(SwipeDirection),
    /// A pinch ended while still changing scale; feed into
    /// [`Momentum`](crate::Momentum) and tick on the host frame timer.
    PinchFlick {
        /// Anchor for the decaying zoom (last pinch midpoint).
        anchor: Point,
        /// Last per-frame factor minus one.
        residual: f64,
    },
}

/// Classification of the current gesture session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No contacts down.
    #[default]
    Idle,
    /// Contacts down, nothing classified yet; a discrete tap is still
    /// possible on release.
    Pending,
    /// Single-contact continuous pan.
    Panning,
    /// Two-contact continuous pinch (midpoint pan + anchored zoom).
    Pinching,
}

#[derive(Clone, Copy, Debug)]
struct Contact {
    id: u64,
    start: Point,
    last: Point,
    pos: Point,
}

impl Contact {
    fn travel(&self) -> f64 {
        (self.pos - self.start).hypot()
    }
}

#[derive(Clone, Debug)]
struct Session {
    started_at: u64,
    phase: GesturePhase,
    contacts: SmallVec<[Contact; 3]>,
    peak_contacts: usize,
    max_travel: f64,
    last_pinch_dist: f64,
    last_mid: Point,
    last_pinch_factor: f64,
}

impl Session {
    fn new(started_at: u64) -> Self {
        Self {
            started_at,
            phase: GesturePhase::Pending,
            contacts: SmallVec::new(),
            peak_contacts: 0,
            max_travel: 0.0,
            last_pinch_dist: 0.0,
            last_mid: Point::ORIGIN,
            last_pinch_factor: 1.0,
        }
    }

    fn contact_mut(&mut self, id: u64) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.id == id)
    }

    fn pinch_geometry(&self) -> (Point, f64) {
        let a = self.contacts[0].pos;
        let b = self.contacts[1].pos;
        (a.midpoint(b), (b - a).hypot())
    }

    /// Re-baselines incremental pinch tracking from the current two
    /// contacts. Called whenever the tracked pair changes.
    fn rebase_pinch(&mut self) {
        let (mid, dist) = self.pinch_geometry();
        self.last_mid = mid;
        self.last_pinch_dist = dist;
        self.last_pinch_factor = 1.0;
    }

    fn has_mutated(&self) -> bool {
        matches!(self.phase, GesturePhase::Panning | GesturePhase::Pinching)
    }
}

/// State machine turning contact events into [`GestureUpdate`]s.
///
/// One recognizer serves one viewport. Feed it down/move/up/cancel records
/// with caller-supplied millisecond timestamps; every call returns the
/// updates that event produced (often none). See the crate docs for the
/// classification rules.
///
/// The view rectangle is only consulted for edge-swipe eligibility; a
/// recognizer with an empty view rect simply never reports edge swipes.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    view_rect: Rect,
    session: Option<Session>,
}

impl GestureRecognizer {
    /// Creates a recognizer with the given thresholds and no view rect.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            view_rect: Rect::ZERO,
            session: None,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Sets the device-space view rectangle used for edge-swipe margins.
    pub fn set_view_rect(&mut self, rect: Rect) {
        self.view_rect = rect;
    }

    /// Returns `true` when no session is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    /// A contact landed.
    ///
    /// Starts a session on the first contact. Extra contacts are tracked up
    /// to three while the session is still pending; once a session has
    /// committed to panning or pinching, late contacts are ignored outright
    /// (their later moves and lifts carry unknown ids and fall through).
    /// Never emits updates; the return value is kept for API uniformity.
    pub fn on_down(&mut self, id: u64, pos: Point, at_ms: u64) -> Vec<GestureUpdate> {
        let session = self.session.get_or_insert_with(|| Session::new(at_ms));
        if let Some(contact) = session.contact_mut(id) {
            // Duplicate down for a live id: treat as a position refresh.
            contact.pos = pos;
            return Vec::new();
        }

        let accept = match session.phase {
            GesturePhase::Pending => session.contacts.len() < 3,
            // A single-finger pan grows into a pinch; anything beyond two
            // contacts on a committed gesture is ignored.
            GesturePhase::Panning => session.contacts.len() < 2,
            GesturePhase::Pinching | GesturePhase::Idle => false,
        };
        if !accept {
            return Vec::new();
        }

        session.contacts.push(Contact {
            id,
            start: pos,
            last: pos,
            pos,
        });
        session.peak_contacts = session.peak_contacts.max(session.contacts.len());

        if session.contacts.len() == 2 {
            session.rebase_pinch();
            if session.phase == GesturePhase::Panning {
                session.phase = GesturePhase::Pinching;
            }
        }
        Vec::new()
    }

    /// A tracked contact moved.
    pub fn on_move(&mut self, id: u64, pos: Point, _at_ms: u64) -> Vec<GestureUpdate> {
        let Some(session) = &mut self.session else {
            return Vec::new();
        };
        let Some(contact) = session.contact_mut(id) else {
            return Vec::new();
        };
        contact.pos = pos;
        let travel = contact.travel();
        session.max_travel = session.max_travel.max(travel);

        match session.contacts.len() {
            1 => Self::single_contact_move(&self.config, session),
            2 => Self::dual_contact_move(&self.config, session),
            // Three pending contacts have no continuous vocabulary; the
            // session either resolves to a three-finger tap or to nothing.
            _ => Vec::new(),
        }
    }

    fn single_contact_move(config: &GestureConfig, session: &mut Session) -> Vec<GestureUpdate> {
        let contact = &mut session.contacts[0];
        match session.phase {
            GesturePhase::Pending => {
                if contact.travel() > config.pan_threshold_px {
                    session.phase = GesturePhase::Panning;
                    let delta = contact.pos - contact.start;
                    contact.last = contact.pos;
                    Vec::from([GestureUpdate::Pan(delta)])
                } else {
                    Vec::new()
                }
            }
            _ => {
                let delta = contact.pos - contact.last;
                contact.last = contact.pos;
                if delta == Vec2::ZERO {
                    Vec::new()
                } else {
                    Vec::from([GestureUpdate::Pan(delta)])
                }
            }
        }
    }

    fn dual_contact_move(config: &GestureConfig, session: &mut Session) -> Vec<GestureUpdate> {
        let (mid, dist) = session.pinch_geometry();

        if session.phase == GesturePhase::Pending {
            let spread = (dist - session.last_pinch_dist).abs();
            let drifted = (mid - session.last_mid).hypot();
            if spread.max(drifted) <= config.multi_tap_movement_px {
                return Vec::new();
            }
            session.phase = GesturePhase::Pinching;
        }

        let mut updates = Vec::new();
        let mid_delta = mid - session.last_mid;
        if mid_delta != Vec2::ZERO {
            updates.push(GestureUpdate::Pan(mid_delta));
        }
        if session.last_pinch_dist > 0.0 && dist > 0.0 {
            let factor = dist / session.last_pinch_dist;
            if factor != 1.0 {
                updates.push(GestureUpdate::ZoomAbout { anchor: mid, factor });
            }
            session.last_pinch_factor = factor;
        }
        session.last_mid = mid;
        if dist > 0.0 {
            session.last_pinch_dist = dist;
        }
        updates
    }

    /// A tracked contact lifted.
    ///
    /// Intermediate lifts degrade the session (pinch → pan); the final lift
    /// resolves it into at most one discrete gesture.
    pub fn on_up(&mut self, id: u64, pos: Point, at_ms: u64) -> Vec<GestureUpdate> {
        let Some(session) = &mut self.session else {
            return Vec::new();
        };
        let Some(idx) = session.contacts.iter().position(|c| c.id == id) else {
            return Vec::new();
        };
        session.contacts[idx].pos = pos;
        session.max_travel = session.max_travel.max(session.contacts[idx].travel());
        let released = session.contacts.remove(idx);

        match session.contacts.len() {
            0 => {
                let updates = Self::finalize(&self.config, self.view_rect, session, released, at_ms);
                self.session = None;
                updates
            }
            1 => {
                // A pinch losing a finger continues as a pan with the
                // survivor; re-anchor so the next move doesn't jump. The
                // pinch itself ends here, so this is also where a flick is
                // judged: if the last frame was still changing scale, hand
                // the residual to the momentum loop.
                let survivor = &mut session.contacts[0];
                survivor.last = survivor.pos;
                if session.phase == GesturePhase::Pinching {
                    session.phase = GesturePhase::Panning;
                    let residual = session.last_pinch_factor - 1.0;
                    if residual.abs() >= self.config.momentum_start_delta {
                        return Vec::from([GestureUpdate::PinchFlick {
                            anchor: session.last_mid,
                            residual,
                        }]);
                    }
                }
                Vec::new()
            }
            _ => {
                session.rebase_pinch();
                Vec::new()
            }
        }
    }

    fn finalize(
        config: &GestureConfig,
        view_rect: Rect,
        session: &Session,
        released: Contact,
        at_ms: u64,
    ) -> Vec<GestureUpdate> {
        let duration = at_ms.saturating_sub(session.started_at);
        match session.phase {
            GesturePhase::Panning => {
                if session.peak_contacts == 1 {
                    if let Some(direction) = Self::edge_swipe(config, view_rect, &released) {
                        return Vec::from([GestureUpdate::EdgeSwipe(direction)]);
                    }
                }
                Vec::new()
            }
            // A session can only reach zero contacts from one, and losing
            // the second pinch finger already degraded it to panning (and
            // judged the flick there), so this arm is unreachable in
            // practice; kept total for safety.
            GesturePhase::Pinching => Vec::new(),
            GesturePhase::Pending => match session.peak_contacts {
                1 if duration <= config.tap_max_duration_ms
                    && session.max_travel <= config.pan_threshold_px =>
                {
                    Vec::from([GestureUpdate::Tap(released.pos)])
                }
                2 if duration <= config.multi_tap_max_duration_ms
                    && session.max_travel <= config.multi_tap_movement_px =>
                {
                    Vec::from([GestureUpdate::TwoFingerTap])
                }
                3 if duration <= config.multi_tap_max_duration_ms
                    && session.max_travel <= config.multi_tap_movement_px =>
                {
                    Vec::from([GestureUpdate::ThreeFingerTap])
                }
                _ => Vec::new(),
            },
            GesturePhase::Idle => Vec::new(),
        }
    }

    fn edge_swipe(
        config: &GestureConfig,
        view_rect: Rect,
        released: &Contact,
    ) -> Option<SwipeDirection> {
        if view_rect.width() <= 0.0 {
            return None;
        }
        let dx = released.pos.x - released.start.x;
        let near_left = released.pos.x - view_rect.x0 <= config.edge_margin_px;
        let near_right = view_rect.x1 - released.pos.x <= config.edge_margin_px;
        if near_left && dx <= -config.edge_distance_px {
            Some(SwipeDirection::Left)
        } else if near_right && dx >= config.edge_distance_px {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }

    /// The platform cancelled the interaction (e.g. the page scrolled or
    /// the app lost focus). Drops the session without emitting anything.
    pub fn on_cancel(&mut self) {
        self.session = None;
    }

    /// Mouse wheel input: a synthetic single-point pinch anchored at the
    /// cursor, one step per notch, no momentum.
    ///
    /// Scroll-away zooms out, scroll-toward zooms in; a zero delta is a
    /// no-op.
    pub fn on_wheel(&mut self, pos: Point, delta_y: f64) -> Vec<GestureUpdate> {
        let factor = if delta_y > 0.0 {
            self.config.wheel_zoom_out
        } else if delta_y < 0.0 {
            self.config.wheel_zoom_in
        } else {
            return Vec::new();
        };
        Vec::from([GestureUpdate::ZoomAbout {
            anchor: pos,
            factor,
        }])
    }

    /// Snapshot of the live session for debugging and host inspection.
    #[must_use]
    pub fn debug_info(&self) -> GestureDebugInfo {
        match &self.session {
            Some(session) => GestureDebugInfo {
                phase: session.phase,
                contacts: session.contacts.len(),
                peak_contacts: session.peak_contacts,
                has_mutated: session.has_mutated(),
                started_at: Some(session.started_at),
            },
            None => GestureDebugInfo {
                phase: GesturePhase::Idle,
                contacts: 0,
                peak_contacts: 0,
                has_mutated: false,
                started_at: None,
            },
        }
    }
}

/// Debug snapshot of a [`GestureRecognizer`] session.
#[derive(Clone, Copy, Debug)]
pub struct GestureDebugInfo {
    /// Current classification.
    pub phase: GesturePhase,
    /// Contacts currently tracked.
    pub contacts: usize,
    /// Peak simultaneous tracked contacts this session.
    pub peak_contacts: usize,
    /// Whether the session has produced continuous transform updates
    /// (and therefore suppresses discrete gestures).
    pub has_mutated: bool,
    /// Session start timestamp, if a session is live.
    pub started_at: Option<u64>,
}
