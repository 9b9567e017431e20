// Gesture and inertia tuning shared by the touch and mouse paths.
// Angles are degrees, distances are CSS pixels, times are milliseconds.

// Tilt
pub const TOUCH_MAX_TILT_DEG: f64 = 10.0; // reduced sensitivity for fingers
pub const MOUSE_MAX_TILT_DEG: f64 = 15.0;

// Drag-to-rotate
pub const TOUCH_SWIPE_MIN_PX: f64 = 20.0; // horizontal travel before a touch starts rotating
pub const MOUSE_SWIPE_MIN_PX: f64 = 0.0;
pub const TOUCH_DRAG_GAIN: f64 = 0.2; // degrees per px of cumulative drag, per move
pub const MOUSE_DRAG_GAIN: f64 = 0.5;

// Release classification
pub const TAP_SLOP_PX: f64 = 10.0; // strict bound on |dx| and |dy| for a tap/click

// Mouse presses this soon after a touch ends are the browser replaying the touch
pub const COMPAT_MOUSE_WINDOW_MS: f64 = 500.0;

// Inertial spin-down
pub const INERTIA_GAIN: f64 = 0.05; // rotation = velocity * elapsed * gain
pub const INERTIA_FRICTION: f64 = 0.9; // velocity multiplier per tick
pub const INERTIA_MIN_VELOCITY: f64 = 0.01; // deg/ms, at or below this the spin stops

// Control buttons
pub const ROTATE_STEP_DEG: f64 = 90.0;
