#![cfg(target_arch = "wasm32")]
use folio_core::{InstantClock, TrailAnimator, TrailLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod footer;
mod frame;
mod input;
mod render;

use constants::TRAIL_CANVAS_ID;

thread_local! {
    static TRAIL: RefCell<Option<frame::LoopHandle>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Resume the cursor trail after `stopTrail`.
#[wasm_bindgen(js_name = startTrail)]
pub fn start_trail() {
    TRAIL.with(|t| {
        if let Some(handle) = t.borrow().as_ref() {
            handle.start();
        }
    });
}

/// Stop scheduling trail frames. The particles stay where they are.
#[wasm_bindgen(js_name = stopTrail)]
pub fn stop_trail() {
    TRAIL.with(|t| {
        if let Some(handle) = t.borrow().as_ref() {
            handle.stop();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    footer::set_year(&document);
    events::wire_card_shine(&document);

    match dom::canvas_by_id(&document, TRAIL_CANVAS_ID)? {
        Some(canvas) => {
            let handle = init_trail(canvas)?;
            handle.start();
            TRAIL.with(|t| *t.borrow_mut() = Some(handle));
        }
        None => log::debug!("no #{} canvas; trail disabled", TRAIL_CANVAS_ID),
    }
    Ok(())
}

fn init_trail(canvas: web::HtmlCanvasElement) -> anyhow::Result<frame::LoopHandle> {
    let ctx = dom::context_2d(&canvas)?;
    let config = dom::trail_config(&canvas);
    log::info!(
        "[trail] particles/move={} hue_step={} cap={:?}",
        config.particles_per_move,
        config.hue_step,
        config.max_particles
    );
    let trail = Rc::new(RefCell::new(TrailLoop::new(TrailAnimator::new(config))));

    // Backing size must match CSS size * devicePixelRatio before the first frame
    events::wire_canvas_resize(&canvas, trail.clone());
    events::wire_trail_pointer(canvas, trail.clone());

    Ok(frame::LoopHandle::new(frame::FrameContext {
        trail,
        surface: render::CanvasSurface::new(ctx),
        clock: InstantClock::new(),
    }))
}
