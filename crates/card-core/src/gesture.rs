//! Input-source profiles and the pure geometry shared by every gesture path.
//!
//! Touch and mouse handlers only differ in a handful of constants, so both
//! feed the same controller and select their behaviour through a
//! [`GestureProfile`].

use crate::constants::*;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Touch,
    Mouse,
}

/// Per-source tuning for tilt and drag-to-rotate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureProfile {
    pub max_tilt_deg: f64,
    /// Horizontal travel that must be exceeded before a drag rotates the card.
    pub swipe_min_px: f64,
    /// Degrees added per pixel of cumulative horizontal drag, on every move.
    pub drag_gain: f64,
}

impl GestureProfile {
    pub const TOUCH: Self = Self {
        max_tilt_deg: TOUCH_MAX_TILT_DEG,
        swipe_min_px: TOUCH_SWIPE_MIN_PX,
        drag_gain: TOUCH_DRAG_GAIN,
    };

    pub const MOUSE: Self = Self {
        max_tilt_deg: MOUSE_MAX_TILT_DEG,
        swipe_min_px: MOUSE_SWIPE_MIN_PX,
        drag_gain: MOUSE_DRAG_GAIN,
    };

    pub fn for_source(source: InputSource) -> Self {
        match source {
            InputSource::Touch => Self::TOUCH,
            InputSource::Mouse => Self::MOUSE,
        }
    }

    /// A drag rotates only when horizontal travel dominates vertical and clears
    /// the source's minimum.
    #[inline]
    pub fn is_rotating_drag(&self, drag: DVec2) -> bool {
        drag.x.abs() > drag.y.abs() && drag.x.abs() > self.swipe_min_px
    }
}

/// One pointer or touch reading in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pos: DVec2,
    pub time_ms: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64, time_ms: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            time_ms,
        }
    }
}

/// Client-space bounding box of the card element. Width and height are
/// assumed positive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn half_extent(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Tilt angles `(tilt_x, tilt_y)` for a pointer at `pos`.
///
/// The offset from the card centre is normalised by the half extents and
/// scaled by `max_tilt_deg`. Pitch is inverted: a pointer above the centre
/// gives a positive `tilt_x`, which under CSS `rotateX` tips the top edge away
/// from the viewer.
#[inline]
pub fn tilt_for_pointer(rect: &CardRect, pos: DVec2, max_tilt_deg: f64) -> (f64, f64) {
    let offset = (pos - rect.center()) / rect.half_extent();
    let tilt_y = offset.x * max_tilt_deg;
    let tilt_x = -(offset.y * max_tilt_deg);
    (tilt_x, tilt_y)
}

/// How a finished gesture is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Stayed inside the tap slop on both axes.
    Tap,
    /// Mostly horizontal travel; hands off to inertia.
    Swipe,
    /// Mostly vertical travel; nothing happens.
    Ignored,
}

pub fn classify_release(total: DVec2) -> Release {
    let (dx, dy) = (total.x.abs(), total.y.abs());
    if dx < TAP_SLOP_PX && dy < TAP_SLOP_PX {
        Release::Tap
    } else if dx > dy {
        Release::Swipe
    } else {
        Release::Ignored
    }
}
