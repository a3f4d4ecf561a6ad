use folio_core::{BackingSize, Hsla, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// Canvas 2D implementation of the trail's drawing surface.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: BackingSize) {
        self.ctx
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn fill_diagonal_gradient(&mut self, size: BackingSize, start: Hsla, end: Hsla) {
        let (w, h) = (size.width as f64, size.height as f64);
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, w, h);
        _ = gradient.add_color_stop(0.0, &start.css());
        _ = gradient.add_color_stop(1.0, &end.css());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.css());
        // arc() throws on a negative radius
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}
