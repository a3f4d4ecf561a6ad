//! Hover shine on project cards: the pointer position inside a card, as
//! percentages of its size, drives the `--mx` / `--my` CSS variables.

/// Client-space rectangle (as returned by `getBoundingClientRect`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShineOffset {
    pub mx: f64,
    pub my: f64,
}

impl ShineOffset {
    /// CSS values for `--mx` and `--my`.
    pub fn css_values(&self) -> (String, String) {
        (format!("{}%", self.mx), format!("{}%", self.my))
    }
}

/// Pointer position relative to `rect` in percent. Positions outside the
/// card are not clamped. Returns `None` for an empty rect.
pub fn shine_offset(client_x: f64, client_y: f64, rect: Rect) -> Option<ShineOffset> {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }
    Some(ShineOffset {
        mx: (client_x - rect.left) / rect.width * 100.0,
        my: (client_y - rect.top) / rect.height * 100.0,
    })
}
