use std::fmt;

/// The card's composed CSS transform.
///
/// Applied in this exact order: committed yaw, pointer pitch, then pointer
/// yaw again. The second yaw term is kept so the rendered output matches what
/// the card has always produced.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardTransform {
    pub rotation_y: f64,
    pub tilt_x: f64,
    pub tilt_y: f64,
}

impl CardTransform {
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CardTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rotateY({}deg) rotateX({}deg) rotateY({}deg)",
            css_number(self.rotation_y),
            css_number(self.tilt_x),
            css_number(self.tilt_y)
        )
    }
}

// Negative zero prints as "-0" in Rust; CSS output wants "0".
#[inline]
fn css_number(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}
