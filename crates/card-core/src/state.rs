//! Mutable interaction state owned by [`crate::CardController`].
//!
//! Nothing in here touches a platform API; the web front-end only ever sees
//! this through the controller and the rendered [`crate::CardTransform`].

use crate::gesture::InputSource;
use glam::DVec2;

/// Opaque identifier of a scheduled animation frame.
///
/// On the web this wraps the id returned by `requestAnimationFrame`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationHandle(pub i32);

/// Everything the card remembers between events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardState {
    /// Back face is showing.
    pub is_flipped: bool,
    /// Accumulated yaw in degrees.
    pub current_rotation: f64,
    /// Pointer-driven pitch offset in degrees. Never folded into `current_rotation`.
    pub tilt_x: f64,
    /// Pointer-driven yaw offset in degrees. Never folded into `current_rotation`.
    pub tilt_y: f64,
    /// Signed angular speed in degrees per millisecond.
    pub velocity: f64,
    pub is_dragging: bool,
    /// In-flight inertia frame, if any. At most one exists at a time.
    pub animation: Option<AnimationHandle>,
    /// Pointer position at gesture start.
    pub start: DVec2,
    /// Timestamp (ms) of the last drag sample or inertia tick.
    pub last_sample_time: f64,
    /// Source of the drag in progress.
    pub gesture_source: Option<InputSource>,
    /// When the last touch drag ended or was cancelled.
    pub last_touch_release: Option<f64>,
}

impl CardState {
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}
