// DOM contract of the page hosting the card. The card element and its four
// controls are looked up once at start-up; classes go on the card element only.

// Element ids
pub const CARD_ID: &str = "card";
pub const FLIP_BUTTON_ID: &str = "flipBtn";
pub const RESET_BUTTON_ID: &str = "resetBtn";
pub const ROTATE_LEFT_BUTTON_ID: &str = "rotateLeftBtn";
pub const ROTATE_RIGHT_BUTTON_ID: &str = "rotateRightBtn";

pub const CONTROL_BUTTON_IDS: [&str; 4] = [
    FLIP_BUTTON_ID,
    RESET_BUTTON_ID,
    ROTATE_LEFT_BUTTON_ID,
    ROTATE_RIGHT_BUTTON_ID,
];

// Visual state classes
pub const FLIPPED_CLASS: &str = "flipped"; // back face showing
pub const ROTATING_CLASS: &str = "rotating"; // gesture in progress, CSS transitions off

// Style property the composed transform is written to
pub const TRANSFORM_PROPERTY: &str = "transform";
