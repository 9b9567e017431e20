pub mod buttons;
pub mod pointer;
pub mod touch;

pub use buttons::{wire_control_buttons, ControlButtons};
pub use pointer::wire_mouse_handlers;
pub use touch::wire_touch_handlers;
