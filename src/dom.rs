use anyhow::anyhow;
use folio_core::{TrailAnimator, TrailConfig};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::DATA_ATTR_PREFIX;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<Option<web::HtmlCanvasElement>> {
    match document.get_element_by_id(id) {
        Some(el) => el
            .dyn_into::<web::HtmlCanvasElement>()
            .map(Some)
            .map_err(|e| anyhow!("#{} is not a canvas: {:?}", id, e)),
        None => Ok(None),
    }
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!(format!("{:?}", e)))
}

/// Resize the animator to the canvas's CSS size and apply the resulting
/// backing resolution to the canvas.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, animator: &mut TrailAnimator) {
    let rect = canvas.get_bounding_client_rect();
    let size = animator.resize(rect.width(), rect.height(), device_pixel_ratio());
    canvas.set_width(size.width);
    canvas.set_height(size.height);
}

/// Defaults overridden by the canvas's `data-*` attributes. Bad values are
/// logged and skipped.
pub fn trail_config(canvas: &web::HtmlCanvasElement) -> TrailConfig {
    let mut config = TrailConfig::default();
    for key in TrailConfig::OVERRIDE_KEYS {
        let attr = format!("{}{}", DATA_ATTR_PREFIX, key);
        if let Some(value) = canvas.get_attribute(&attr) {
            if let Err(e) = config.apply_override(key, &value) {
                log::warn!("[config] ignoring {}: {}", attr, e);
            }
        }
    }
    config
}
