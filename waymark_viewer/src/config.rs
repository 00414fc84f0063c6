// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use waymark_gesture::GestureConfig;
use waymark_overlay::OverlayConfig;
use waymark_viewport::ZoomLimits;

/// Everything that varies between viewer contexts, with field-use defaults.
///
/// One struct instead of forked viewer variants: validation review widens
/// the zoom range, switches the palette to confidence mode, and turns the
/// grid on; field capture keeps the defaults. Hit-target size and
/// level-of-detail thresholds live inside [`OverlayConfig`].
#[derive(Clone, Copy, Debug)]
pub struct ViewerConfig {
    /// Allowed zoom range.
    pub limits: ZoomLimits,
    /// Gesture thresholds and momentum tuning.
    pub gesture: GestureConfig,
    /// Frame building: level of detail, palettes, tap-target floor, grid.
    pub overlay: OverlayConfig,
    /// Zoom factor applied per explicit zoom-in command (zoom-out uses the
    /// reciprocal). These are the on-screen buttons, as opposed to wheel
    /// steps which live in [`GestureConfig`].
    pub command_zoom_step: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            limits: ZoomLimits::default(),
            gesture: GestureConfig::default(),
            overlay: OverlayConfig::default(),
            command_zoom_step: 1.25,
        }
    }
}
