// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Thresholds and tuning constants for gesture classification.
///
/// All values are host-overridable; the defaults are the ones the field
/// crews have been using. Distances are in device pixels, durations in
/// milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Movement beyond this distance reclassifies a pending session as a
    /// continuous gesture (pan or pinch).
    pub pan_threshold_px: f64,
    /// Maximum press duration for a single-contact tap.
    pub tap_max_duration_ms: u64,
    /// Maximum press duration for two- and three-finger taps. Deliberate
    /// multi-finger taps are brisk; a longer hold is treated as an aborted
    /// continuous gesture and emits nothing.
    pub multi_tap_max_duration_ms: u64,
    /// Movement tolerance for multi-finger taps, and the engagement
    /// threshold for pinching. Looser than [`GestureConfig::pan_threshold_px`]:
    /// two gloved fingers landing together always wobble a few pixels.
    pub multi_tap_movement_px: f64,
    /// A single-contact session must end within this distance of the left
    /// or right viewport edge to qualify as an edge swipe.
    pub edge_margin_px: f64,
    /// Minimum horizontal travel for an edge swipe.
    pub edge_distance_px: f64,
    /// Wheel-up (zoom in) factor per notch.
    pub wheel_zoom_in: f64,
    /// Wheel-down (zoom out) factor per notch.
    pub wheel_zoom_out: f64,
    /// Per-tick multiplier applied to the residual pinch factor during
    /// momentum, at the host's animation cadence (~16ms).
    pub momentum_decay: f64,
    /// Minimum residual per-frame factor deviation (|factor − 1|) at pinch
    /// release for momentum to start at all.
    pub momentum_start_delta: f64,
    /// Momentum stops once the decayed deviation falls below this.
    pub momentum_stop_delta: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pan_threshold_px: 5.0,
            tap_max_duration_ms: 300,
            multi_tap_max_duration_ms: 200,
            multi_tap_movement_px: 10.0,
            edge_margin_px: 50.0,
            edge_distance_px: 100.0,
            wheel_zoom_in: 1.1,
            wheel_zoom_out: 0.9,
            momentum_decay: 0.92,
            momentum_start_delta: 0.005,
            momentum_stop_delta: 0.001,
        }
    }
}
