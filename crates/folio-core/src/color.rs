//! HSLA colours as used by the Canvas 2D `fillStyle` / gradient stops.

use std::fmt;

use crate::constants::HUE_PERIOD;

/// Hue in degrees, saturation and lightness in percent, alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    pub fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation,
            lightness,
            alpha,
        }
    }

    /// CSS colour string, e.g. `hsla(120,70%,60%,0.08)`.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({},{}%,{}%,{})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Fold any hue into `[0, 360)`.
#[inline]
pub fn wrap_hue(hue: f32) -> f32 {
    let h = hue.rem_euclid(HUE_PERIOD);
    // rem_euclid can round up to exactly the period for tiny negative inputs
    if h >= HUE_PERIOD {
        0.0
    } else {
        h
    }
}
