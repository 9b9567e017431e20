//! The card interaction state machine.
//!
//! `Idle -> Dragging -> Idle` (tap, flips) or `-> Animating` (swipe, inertia);
//! `Animating -> Idle` once the spin decays. Starting a gesture while
//! animating cancels the pending frame before anything else is touched.
//!
//! Rendering and frame scheduling are injected through [`CardSurface`] and
//! [`FrameScheduler`] so the whole machine runs on the host under test.

use crate::constants::*;
use crate::gesture::{
    classify_release, tilt_for_pointer, CardRect, GestureProfile, InputSource, PointerSample,
    Release,
};
use crate::state::{AnimationHandle, CardState};
use crate::transform::CardTransform;

/// The visual element the controller drives.
pub trait CardSurface {
    /// Current client-space bounds, read on every move.
    fn rect(&self) -> CardRect;
    fn set_transform(&mut self, transform: &CardTransform);
    /// Face-swap visual state.
    fn set_flipped(&mut self, flipped: bool);
    /// "rotating" visual mode, on for the duration of a gesture.
    fn set_rotating(&mut self, rotating: bool);
}

/// Per-frame callback source. The scheduled callback must end up calling
/// [`CardController::on_animation_frame`].
pub trait FrameScheduler {
    fn request_frame(&mut self) -> AnimationHandle;
    fn cancel_frame(&mut self, handle: AnimationHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InertiaStep {
    /// Rotation advanced and another frame is scheduled.
    Continue,
    /// Velocity is negligible; no frame is pending.
    Done,
}

pub struct CardController<S, F> {
    state: CardState,
    surface: S,
    scheduler: F,
}

impl<S: CardSurface, F: FrameScheduler> CardController<S, F> {
    pub fn new(surface: S, scheduler: F) -> Self {
        Self {
            state: CardState::default(),
            surface,
            scheduler,
        }
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn transform(&self) -> CardTransform {
        CardTransform {
            rotation_y: self.state.current_rotation,
            tilt_x: self.state.tilt_x,
            tilt_y: self.state.tilt_y,
        }
    }

    pub fn render(&mut self) {
        let transform = self.transform();
        self.surface.set_transform(&transform);
    }

    // ---------------- Gestures ----------------

    /// Pointer or touch down. Returns `false` when a mouse press is dropped as
    /// the browser's compatibility replay of a touch that just ended.
    pub fn begin_gesture(&mut self, source: InputSource, sample: PointerSample) -> bool {
        if source == InputSource::Mouse && self.is_compat_mouse(sample.time_ms) {
            log::debug!("ignoring mouse press replayed after touch");
            return false;
        }
        // must precede the sampling reset, or a stale tick could spin the new drag
        self.cancel_inertia();
        self.state.start = sample.pos;
        self.state.last_sample_time = sample.time_ms;
        self.state.is_dragging = true;
        self.state.gesture_source = Some(source);
        self.surface.set_rotating(true);
        true
    }

    /// Pointer or touch move. Always retilts and re-renders; rotates only
    /// while a drag is in progress and horizontal travel dominates.
    pub fn update_gesture(&mut self, source: InputSource, sample: PointerSample) {
        let profile = GestureProfile::for_source(source);
        let rect = self.surface.rect();
        let (tilt_x, tilt_y) = tilt_for_pointer(&rect, sample.pos, profile.max_tilt_deg);
        self.state.tilt_x = tilt_x;
        self.state.tilt_y = tilt_y;

        if self.state.is_dragging {
            let drag = sample.pos - self.state.start;
            let elapsed = sample.time_ms - self.state.last_sample_time;
            self.state.last_sample_time = sample.time_ms;

            if profile.is_rotating_drag(drag) {
                if elapsed > 0.0 {
                    self.state.velocity = drag.x / elapsed;
                }
                self.state.current_rotation += drag.x * profile.drag_gain;
            }
        }
        self.render();
    }

    /// Pointer or touch up. Returns how the gesture was read, or `None` when no
    /// drag was in progress.
    pub fn end_gesture(&mut self, sample: PointerSample) -> Option<Release> {
        if !self.state.is_dragging {
            return None;
        }
        self.finish_drag(sample.time_ms);

        let release = classify_release(sample.pos - self.state.start);
        match release {
            Release::Tap => self.flip(),
            Release::Swipe => {
                self.start_inertia(sample.time_ms);
            }
            Release::Ignored => {}
        }
        Some(release)
    }

    /// Touch cancelled by the system: the drag ends without being read as a
    /// tap or a swipe.
    pub fn cancel_gesture(&mut self, now_ms: f64) {
        if self.state.is_dragging {
            self.finish_drag(now_ms);
        }
    }

    fn finish_drag(&mut self, now_ms: f64) {
        self.state.is_dragging = false;
        if self.state.gesture_source.take() == Some(InputSource::Touch) {
            self.state.last_touch_release = Some(now_ms);
        }
        self.surface.set_rotating(false);
    }

    #[inline]
    fn is_compat_mouse(&self, now_ms: f64) -> bool {
        self.state
            .last_touch_release
            .is_some_and(|t| now_ms - t < COMPAT_MOUSE_WINDOW_MS)
    }

    /// Mouse left the card: an unfinished drag always hands off to inertia,
    /// and the tilt snaps back to flat.
    pub fn pointer_leave(&mut self, now_ms: f64) {
        if self.state.is_dragging {
            self.finish_drag(now_ms);
            self.start_inertia(now_ms);
        }
        self.state.tilt_x = 0.0;
        self.state.tilt_y = 0.0;
        self.render();
    }

    // ---------------- Direct actions ----------------

    pub fn flip(&mut self) {
        self.state.is_flipped = !self.state.is_flipped;
        self.surface.set_flipped(self.state.is_flipped);
        log::info!("card flipped: {}", self.state.is_flipped);
    }

    /// Back to zero rotation, flat, front face up.
    pub fn reset(&mut self) {
        self.state.current_rotation = 0.0;
        self.state.tilt_x = 0.0;
        self.state.tilt_y = 0.0;
        self.render();
        if self.state.is_flipped {
            self.flip();
        }
    }

    pub fn rotate_left(&mut self) {
        self.rotate_by(-ROTATE_STEP_DEG);
    }

    pub fn rotate_right(&mut self) {
        self.rotate_by(ROTATE_STEP_DEG);
    }

    pub fn rotate_by(&mut self, degrees: f64) {
        self.state.current_rotation += degrees;
        self.render();
    }

    // ---------------- Inertia ----------------

    /// Runs the first inertia step immediately, measuring elapsed time from the
    /// last drag sample. No-op (returns `false`) if an animation is in flight.
    pub fn start_inertia(&mut self, now_ms: f64) -> bool {
        if self.state.is_animating() {
            return false;
        }
        log::debug!("inertia start: velocity={:.4}", self.state.velocity);
        self.step_inertia(now_ms);
        true
    }

    /// Entry point for the scheduled frame callback. A frame whose handle was
    /// already invalidated does nothing.
    pub fn on_animation_frame(&mut self, now_ms: f64) -> InertiaStep {
        if self.state.animation.take().is_none() {
            return InertiaStep::Done;
        }
        self.step_inertia(now_ms)
    }

    pub fn cancel_inertia(&mut self) {
        if let Some(handle) = self.state.animation.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    fn step_inertia(&mut self, now_ms: f64) -> InertiaStep {
        let elapsed = now_ms - self.state.last_sample_time;
        self.state.last_sample_time = now_ms;

        if self.state.velocity.abs() > INERTIA_MIN_VELOCITY {
            self.state.current_rotation += self.state.velocity * elapsed * INERTIA_GAIN;
            self.state.velocity *= INERTIA_FRICTION;
            self.render();
            self.state.animation = Some(self.scheduler.request_frame());
            InertiaStep::Continue
        } else {
            self.state.velocity = 0.0;
            self.state.animation = None;
            log::debug!("inertia settled at {:.2}deg", self.state.current_rotation);
            InertiaStep::Done
        }
    }
}
