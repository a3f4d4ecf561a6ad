//! Drawing surface abstraction.
//!
//! The animator only needs three raster operations, so it draws through the
//! [`Surface`] trait instead of a browser context. The web front-end
//! implements it for `CanvasRenderingContext2d`; [`RecordingSurface`] keeps
//! the draw commands in memory for headless use and tests.

use glam::Vec2;

use crate::color::Hsla;

/// Pixel dimensions of a surface's backing buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

impl BackingSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Backing resolution for a display size in CSS pixels.
    ///
    /// Non-finite or negative inputs collapse to zero.
    pub fn from_css(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width: to_px(css_width * device_pixel_ratio),
            height: to_px(css_height * device_pixel_ratio),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[inline]
fn to_px(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.floor().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

pub trait Surface {
    /// Erase the whole backing buffer.
    fn clear(&mut self, size: BackingSize);

    /// Fill the whole buffer with a linear gradient running from the top-left
    /// corner to the bottom-right corner.
    fn fill_diagonal_gradient(&mut self, size: BackingSize, start: Hsla, end: Hsla);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(BackingSize),
    Gradient {
        size: BackingSize,
        start: Hsla,
        end: Hsla,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Hsla,
    },
}

/// In-memory surface that records every draw call.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the recorded commands, typically between frames.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Hsla)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }

    pub fn circle_count(&self) -> usize {
        self.circles().count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, size: BackingSize) {
        self.commands.push(DrawCommand::Clear(size));
    }

    fn fill_diagonal_gradient(&mut self, size: BackingSize, start: Hsla, end: Hsla) {
        self.commands.push(DrawCommand::Gradient { size, start, end });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}
