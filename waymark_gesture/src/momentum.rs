// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::GestureConfig;

/// Damped continuation of a pinch after the fingers lift.
///
/// `Momentum` holds the residual per-frame scale deviation from the last
/// pinch frame and decays it geometrically. The host owns the timer: call
/// [`Momentum::tick`] once per animation frame and apply the returned
/// anchored zoom factor; `None` means the deviation has decayed below the
/// stop threshold and the timer should be cancelled. Dropping the value (or
/// simply not ticking it again) cancels outright — starting a new gesture
/// session or unmounting must do exactly that, or the stale loop keeps
/// mutating a viewport nobody is looking at.
#[derive(Clone, Copy, Debug)]
pub struct Momentum {
    anchor: Point,
    residual: f64,
    decay: f64,
    stop: f64,
}

impl Momentum {
    /// Creates a momentum run from a pinch-flick residual.
    ///
    /// `residual` is the last per-frame factor minus one, as reported by
    /// the recognizer's flick update.
    #[must_use]
    pub fn new(anchor: Point, residual: f64, config: &GestureConfig) -> Self {
        Self {
            anchor,
            residual,
            decay: config.momentum_decay,
            stop: config.momentum_stop_delta,
        }
    }

    /// Advances one animation frame.
    ///
    /// Returns the anchor and the zoom factor to apply this frame, or
    /// `None` once the run has decayed out.
    pub fn tick(&mut self) -> Option<(Point, f64)> {
        self.residual *= self.decay;
        if self.residual.abs() < self.stop {
            self.residual = 0.0;
            return None;
        }
        Some((self.anchor, 1.0 + self.residual))
    }

    /// Returns `true` once the run has decayed out (or was never live).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.residual.abs() < self.stop
    }
}
