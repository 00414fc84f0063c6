// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use waymark_hit::HitParams;
use waymark_plan::SignStatus;

/// Scale thresholds driving hotspot level of detail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LodThresholds {
    /// Below this scale the hotspot layer is suppressed entirely.
    pub hide_below: f64,
    /// From this scale upward, text labels render alongside boxes.
    pub labels_from: f64,
}

impl Default for LodThresholds {
    fn default() -> Self {
        Self {
            hide_below: 0.3,
            labels_from: 0.5,
        }
    }
}

/// Fixed status palette plus the selection highlight.
///
/// Selection wins over status; everything else is a straight lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusPalette {
    /// Not yet installed / not yet checked.
    pub pending: Color,
    /// Confirmed installed.
    pub installed: Color,
    /// Expected but absent in the field.
    pub missing: Color,
    /// Present but damaged.
    pub damaged: Color,
    /// Highlight for selected signs, regardless of status.
    pub selected: Color,
    /// Grid overlay lines.
    pub grid: Color,
}

impl StatusPalette {
    /// Returns the fill color for a status.
    #[must_use]
    pub fn for_status(&self, status: SignStatus) -> Color {
        match status {
            SignStatus::Pending => self.pending,
            SignStatus::Installed => self.installed,
            SignStatus::Missing => self.missing,
            SignStatus::Damaged => self.damaged,
        }
    }
}

impl Default for StatusPalette {
    fn default() -> Self {
        Self {
            pending: Color::from_rgb8(0xf5, 0x9e, 0x0b),
            installed: Color::from_rgb8(0x22, 0xc5, 0x5e),
            missing: Color::from_rgb8(0xef, 0x44, 0x44),
            damaged: Color::from_rgb8(0xa8, 0x55, 0xf7),
            selected: Color::from_rgb8(0x3b, 0x82, 0xf6),
            grid: Color::from_rgb8(0x9c, 0xa3, 0xaf),
        }
    }
}

/// Confidence coloring for validation review: boxes tier by OCR confidence
/// so dubious detections stand out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceTiers {
    /// Confidence at or above this renders as `high`.
    pub high_from: f64,
    /// Confidence at or above this (but below `high_from`) renders as
    /// `medium`; anything lower renders as `low`.
    pub medium_from: f64,
    /// Trustworthy detections.
    pub high: Color,
    /// Worth a glance.
    pub medium: Color,
    /// Needs review.
    pub low: Color,
}

impl ConfidenceTiers {
    /// Returns the tier color for a confidence value.
    #[must_use]
    pub fn for_confidence(&self, confidence: f64) -> Color {
        if confidence >= self.high_from {
            self.high
        } else if confidence >= self.medium_from {
            self.medium
        } else {
            self.low
        }
    }
}

impl Default for ConfidenceTiers {
    fn default() -> Self {
        Self {
            high_from: 80.0,
            medium_from: 50.0,
            high: Color::from_rgb8(0x22, 0xc5, 0x5e),
            medium: Color::from_rgb8(0xf5, 0x9e, 0x0b),
            low: Color::from_rgb8(0xef, 0x44, 0x44),
        }
    }
}

/// Which quantity drives box coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaletteMode {
    /// Color by installation status (field use).
    #[default]
    Status,
    /// Color by OCR confidence (validation review).
    Confidence,
}

/// Everything the frame builder needs beyond the data itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct OverlayConfig {
    /// Level-of-detail thresholds.
    pub lod: LodThresholds,
    /// Minimum-target enlargement, shared verbatim with hit testing.
    pub hit: HitParams,
    /// Status palette and highlight.
    pub palette: StatusPalette,
    /// Confidence tiers for [`PaletteMode::Confidence`].
    pub confidence: ConfidenceTiers,
    /// Coloring mode.
    pub mode: PaletteMode,
    /// Whether to emit the grid overlay layer.
    pub grid: bool,
}
