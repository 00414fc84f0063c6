// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Overlay: decide what a plan viewer frame contains.
//!
//! This crate is the renderer-side half of the viewport engine, without a
//! renderer: [`build_frame`] takes the hotspot set, the image state, the
//! current viewport, and host-supplied status/selection lookups, and
//! produces an [`OverlayFrame`] — a plain description of the frame that any
//! backend (canvas, GPU scene graph, SVG) can draw directly. The heavy
//! lifting is *deciding*, not drawing:
//!
//! - **Culling**: hotspots outside the visible image region never get
//!   projected. Sites run to thousands of signs per page; the frame stays
//!   proportional to what is on screen.
//! - **Level of detail**: below [`LodThresholds::hide_below`] the hotspot
//!   layer is suppressed entirely (a sea of sub-pixel boxes is noise);
//!   between the thresholds boxes render without labels; from
//!   [`LodThresholds::labels_from`] upward both render.
//! - **Minimum target size**: boxes are enlarged in image space with the
//!   same floor hit testing uses, so everything drawn is tappable and
//!   everything tappable is drawn.
//! - **Coloring**: purely a function of the host-supplied status (or OCR
//!   confidence, in validation mode); selected signs get the highlight
//!   color regardless of status.
//!
//! The image layer is carried as the viewport's single composed affine —
//! one transform for the backend to apply, not a nest of incremental ones.
//! `Loading` and `Failed` image states produce frames with no layers at
//! all ([`OverlayFrame::image_failed`] distinguishes the two so hosts can
//! show an error affordance while the rest of the page stays usable).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod frame;

pub use config::{ConfidenceTiers, LodThresholds, OverlayConfig, PaletteMode, StatusPalette};
pub use frame::{GridLine, OverlayBox, OverlayFrame, OverlayLayers, build_frame};
