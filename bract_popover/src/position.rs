// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of popover content relative to its activator.
//!
//! The state machine only needs to know whether content is visible; where it goes is
//! delegated to a [`Positioner`]. [`AnchorPositioner`] is a minimal implementation that
//! places content flush against the activator with a gap. It does not flip or shift to
//! avoid collisions.

use kurbo::{Point, Rect, Size};

/// Side of the activator the content is placed on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Above the activator.
    Top,
    /// Below the activator.
    #[default]
    Bottom,
    /// Left of the activator.
    Left,
    /// Right of the activator.
    Right,
}

/// Alignment along the side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    /// Align leading edges.
    #[default]
    Start,
    /// Center on the activator.
    Center,
    /// Align trailing edges.
    End,
}

/// Preferred placement of popover content.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Side of the activator.
    pub side: Side,
    /// Alignment along that side.
    pub align: Align,
}

/// Computes where floating content goes.
pub trait Positioner {
    /// Origin of content of size `content` anchored to `activator`.
    fn position(&self, activator: Rect, content: Size, placement: Placement) -> Point;
}

/// Places content against the activator, separated by `gap`.
///
/// ```rust
/// use bract_popover::{Align, AnchorPositioner, Placement, Positioner, Side};
/// use kurbo::{Point, Rect, Size};
///
/// let p = AnchorPositioner { gap: 4.0 };
/// let origin = p.position(
///     Rect::new(10.0, 10.0, 50.0, 30.0),
///     Size::new(100.0, 60.0),
///     Placement { side: Side::Bottom, align: Align::Start },
/// );
/// assert_eq!(origin, Point::new(10.0, 34.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AnchorPositioner {
    /// Distance between activator and content.
    pub gap: f64,
}

impl Positioner for AnchorPositioner {
    fn position(&self, activator: Rect, content: Size, placement: Placement) -> Point {
        let cross = |start: f64, end: f64, extent: f64| match placement.align {
            Align::Start => start,
            Align::Center => (start + end - extent) / 2.0,
            Align::End => end - extent,
        };
        match placement.side {
            Side::Bottom => Point::new(
                cross(activator.x0, activator.x1, content.width),
                activator.y1 + self.gap,
            ),
            Side::Top => Point::new(
                cross(activator.x0, activator.x1, content.width),
                activator.y0 - self.gap - content.height,
            ),
            Side::Right => Point::new(
                activator.x1 + self.gap,
                cross(activator.y0, activator.y1, content.height),
            ),
            Side::Left => Point::new(
                activator.x0 - self.gap - content.width,
                cross(activator.y0, activator.y1, content.height),
            ),
        }
    }
}
