// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use kurbo::Rect;

use crate::PercentRect;

/// Installation status of a sign, as tracked in the field.
///
/// The palette in `waymark_overlay` maps each variant to a fixed color;
/// hosts store per-sign status in `waymark_status` and supply it at render
/// time. A hotspot with no recorded status renders as [`SignStatus::Pending`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SignStatus {
    /// Not yet installed or not yet checked.
    #[default]
    Pending,
    /// Confirmed installed at the detected location.
    Installed,
    /// Expected but not found in the field.
    Missing,
    /// Present but damaged and needing replacement.
    Damaged,
}

/// One machine-extracted sign location on a floor-plan page.
///
/// Hotspots are immutable input produced by the offline extraction pipeline.
/// Geometry is never mutated by the engine; mutable state (installation
/// status, selection) is overlaid by the host keyed on [`Hotspot::sign`].
///
/// The sign number is unique within a page. Bounds are percentages of the
/// base image (see [`PercentRect`] for the conventions); the optional text
/// box is in raw pixel space exactly as extracted and is carried through for
/// host tooling rather than interpreted here.
#[derive(Clone, Debug, PartialEq)]
pub struct Hotspot {
    /// Sign number, e.g. `ATL06-1-0147`. Unique within a page.
    pub sign: String,
    /// Detected bounding region in percent coordinates.
    pub bounds: PercentRect,
    /// Secondary text bounding box in raw pixel space, as extracted.
    pub text_bounds: Option<Rect>,
    /// OCR confidence in `0..=100`.
    pub confidence: f64,
    /// Status tag assigned at extraction time, if any.
    pub extracted_status: Option<SignStatus>,
}

impl Hotspot {
    /// Creates a hotspot from the fields every extraction record carries.
    #[must_use]
    pub fn new(sign: impl Into<String>, bounds: PercentRect, confidence: f64) -> Self {
        Self {
            sign: sign.into(),
            bounds,
            text_bounds: None,
            confidence,
            extracted_status: None,
        }
    }

    /// Attaches the raw-pixel text bounding box.
    #[must_use]
    pub fn with_text_bounds(mut self, rect: Rect) -> Self {
        self.text_bounds = Some(rect);
        self
    }

    /// Attaches an extraction-time status tag.
    #[must_use]
    pub fn with_status(mut self, status: SignStatus) -> Self {
        self.extracted_status = Some(status);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Hotspot, SignStatus};
    use crate::PercentRect;

    #[test]
    fn builder_carries_optional_fields() {
        let spot = Hotspot::new("ATL06-1-0147", PercentRect::new(25.0, 15.0, 2.0, 1.0), 87.5)
            .with_text_bounds(kurbo::Rect::new(820.0, 380.0, 890.0, 410.0))
            .with_status(SignStatus::Installed);

        assert_eq!(spot.sign, "ATL06-1-0147");
        assert_eq!(spot.confidence, 87.5);
        assert!(spot.text_bounds.is_some());
        assert_eq!(spot.extracted_status, Some(SignStatus::Installed));
    }

    #[test]
    fn default_status_is_pending() {
        assert_eq!(SignStatus::default(), SignStatus::Pending);
    }
}
