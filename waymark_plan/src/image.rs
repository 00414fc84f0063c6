// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Lifecycle of the base plan image as seen by the viewport engine.
///
/// Image decode is delegated to the platform and is asynchronous; until it
/// completes the natural dimensions are unknown. Both that transient state
/// and outright load failure are *valid renderer states*: frames built from
/// them contain no image layer and no hotspot layer, and hit tests resolve
/// to nothing, but nothing panics and the rest of the page stays usable.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ImageState {
    /// Decode in flight; natural dimensions not yet known.
    #[default]
    Loading,
    /// Image decoded; natural pixel dimensions known.
    Ready(Size),
    /// Decode failed. Distinct from `Loading` so hosts can show an error
    /// affordance while keeping controls and sign lists functional.
    Failed,
}

impl ImageState {
    /// Returns the natural pixel size if the image is ready.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        match self {
            Self::Ready(size) => Some(*size),
            Self::Loading | Self::Failed => None,
        }
    }

    /// Returns `true` once dimensions are known.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
