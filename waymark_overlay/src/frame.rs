// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use kurbo::{Affine, Rect};
use peniko::Color;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use waymark_hit::enlarged_image_rect;
use waymark_plan::{Hotspot, ImageState, SignStatus};
use waymark_viewport::PlanViewport;

use crate::{OverlayConfig, PaletteMode};

bitflags::bitflags! {
    /// Layers present in a built frame.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct OverlayLayers: u8 {
        /// The base plan image.
        const IMAGE  = 0b0000_0001;
        /// Hotspot boxes.
        const BOXES  = 0b0000_0010;
        /// Sign-number labels.
        const LABELS = 0b0000_0100;
        /// Alignment grid.
        const GRID   = 0b0000_1000;
    }
}

/// One projected hotspot box, ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayBox<'a> {
    /// Index of the hotspot in the input slice.
    pub index: usize,
    /// Box in device/view coordinates, enlargement applied.
    pub rect: Rect,
    /// Fill color (selection highlight already folded in).
    pub color: Color,
    /// Sign-number label, present only at label-rendering zoom.
    pub label: Option<&'a str>,
    /// Whether this sign is currently selected.
    pub selected: bool,
}

/// One grid overlay line in device coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// `true` for a vertical line (offset is an x coordinate), `false`
    /// for horizontal (offset is a y coordinate).
    pub vertical: bool,
    /// Device-space coordinate of the line.
    pub offset: f64,
}

/// Complete description of one viewer frame.
///
/// Backends draw layers in order: image (under `image_transform`), grid,
/// boxes, labels. A frame with empty [`OverlayFrame::layers`] means "image
/// not available"; [`OverlayFrame::image_failed`] tells load failure apart
/// from decode-in-flight.
#[derive(Clone, Debug)]
pub struct OverlayFrame<'a> {
    /// Which layers this frame contains.
    pub layers: OverlayLayers,
    /// The single composed image→view affine for the image layer.
    pub image_transform: Option<Affine>,
    /// Projected hotspot boxes, in input order (z-order: later on top).
    pub boxes: Vec<OverlayBox<'a>>,
    /// Grid lines, when the grid layer is enabled.
    pub grid: Vec<GridLine>,
    /// `true` if the image failed to load (as opposed to still loading).
    pub image_failed: bool,
    /// Grid color from the palette, carried for the backend.
    pub grid_color: Color,
}

/// Builds the frame description for the current viewer state.
///
/// `status_of` is the host's read-only sign → status lookup (the store's
/// current value); `is_selected` the selection membership test. A sign with
/// no host status falls back to its extraction-time tag, then to
/// [`SignStatus::Pending`].
#[must_use]
pub fn build_frame<'a, S, Q>(
    spots: &'a [Hotspot],
    image: ImageState,
    viewport: &PlanViewport,
    config: &OverlayConfig,
    status_of: S,
    is_selected: Q,
) -> OverlayFrame<'a>
where
    S: Fn(&str) -> Option<SignStatus>,
    Q: Fn(&str) -> bool,
{
    let mut frame = OverlayFrame {
        layers: OverlayLayers::empty(),
        image_transform: None,
        boxes: Vec::new(),
        grid: Vec::new(),
        image_failed: matches!(image, ImageState::Failed),
        grid_color: config.palette.grid,
    };
    let Some(image_size) = image.size() else {
        return frame;
    };

    frame.layers |= OverlayLayers::IMAGE;
    frame.image_transform = Some(viewport.image_to_view_affine());

    let scale = viewport.scale();
    let visible = viewport.visible_image_rect();

    if scale >= config.lod.hide_below {
        frame.layers |= OverlayLayers::BOXES;
        let labels = scale >= config.lod.labels_from;
        if labels {
            frame.layers |= OverlayLayers::LABELS;
        }

        for (index, spot) in spots.iter().enumerate() {
            let rect = enlarged_image_rect(
                spot.bounds.sanitized().to_image_rect(image_size),
                scale,
                &config.hit,
            );
            if rect.intersect(visible).area() <= 0.0 {
                continue;
            }

            let selected = is_selected(&spot.sign);
            let color = if selected {
                config.palette.selected
            } else {
                match config.mode {
                    PaletteMode::Status => {
                        let status = status_of(&spot.sign)
                            .or(spot.extracted_status)
                            .unwrap_or_default();
                        config.palette.for_status(status)
                    }
                    PaletteMode::Confidence => config.confidence.for_confidence(spot.confidence),
                }
            };

            frame.boxes.push(OverlayBox {
                index,
                rect: viewport.image_to_view_rect(rect),
                color,
                label: labels.then(|| spot.sign.as_str()),
                selected,
            });
        }
    }

    if config.grid {
        frame.grid = grid_lines(viewport, image_size, visible);
        if !frame.grid.is_empty() {
            frame.layers |= OverlayLayers::GRID;
        }
    }

    frame
}

/// Target on-screen spacing between grid lines.
const GRID_TARGET_PX: f64 = 64.0;

/// Hard cap on lines per axis; past this the grid would be visual noise
/// anyway, so it is dropped rather than truncated lopsidedly.
const GRID_MAX_LINES: usize = 256;

/// Picks a grid spacing in image units so lines land roughly
/// [`GRID_TARGET_PX`] apart on screen, on a 1-2-5 ladder.
fn grid_spacing(scale: f64) -> f64 {
    let desired = GRID_TARGET_PX / scale;
    let mut unit = 1.0_f64;
    while unit * 10.0 <= desired {
        unit *= 10.0;
    }
    loop {
        for m in [1.0_f64, 2.0, 5.0, 10.0] {
            let step = m * unit;
            if step >= desired {
                return step;
            }
        }
        unit *= 10.0;
    }
}

fn grid_lines(viewport: &PlanViewport, image_size: kurbo::Size, visible: Rect) -> Vec<GridLine> {
    let scale = viewport.scale();
    if scale <= 0.0 {
        return Vec::new();
    }
    let spacing = grid_spacing(scale);

    // Only grid the part of the image actually on screen.
    let region = visible.intersect(Rect::new(0.0, 0.0, image_size.width, image_size.height));
    if region.width() <= 0.0 || region.height() <= 0.0 {
        return Vec::new();
    }
    let count_x = (region.width() / spacing) as usize;
    let count_y = (region.height() / spacing) as usize;
    if count_x > GRID_MAX_LINES || count_y > GRID_MAX_LINES {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(count_x + count_y + 2);
    let mut x = (region.x0 / spacing).ceil() * spacing;
    while x <= region.x1 {
        lines.push(GridLine {
            vertical: true,
            offset: viewport.image_to_view_point(kurbo::Point::new(x, 0.0)).x,
        });
        x += spacing;
    }
    let mut y = (region.y0 / spacing).ceil() * spacing;
    while y <= region.y1 {
        lines.push(GridLine {
            vertical: false,
            offset: viewport.image_to_view_point(kurbo::Point::new(0.0, y)).y,
        });
        y += spacing;
    }
    lines
}
