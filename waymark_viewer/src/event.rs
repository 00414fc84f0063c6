// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use waymark_gesture::SwipeDirection;
use waymark_viewport::Transform;

/// One event the viewer hands up to its host.
///
/// Events are returned from the input call that produced them, in order.
/// The viewer never acts on application state itself: selection, page
/// routing, and the undo stack all belong to the host.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent {
    /// A tap resolved to this sign. The host decides what activation means
    /// (select, open a detail pane, cycle a status).
    HotspotActivated(String),
    /// The view transform changed; carries the new value for zoom-percentage
    /// displays. At most one per input call, after all updates applied.
    TransformChanged(Transform),
    /// An edge swipe asked for the previous or next page.
    PageNavigationRequested(SwipeDirection),
    /// A two-finger tap asked to undo the last status change.
    UndoRequested,
    /// A three-finger tap asked to toggle the overview/scrubber.
    OverviewToggleRequested,
}
