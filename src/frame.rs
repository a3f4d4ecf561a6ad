use folio_core::{InstantClock, LoopControl, TrailLoop};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render::CanvasSurface;

pub struct FrameContext {
    pub trail: Rc<RefCell<TrailLoop>>,
    pub surface: CanvasSurface,
    pub clock: InstantClock,
}

impl FrameContext {
    pub fn frame(&mut self) -> LoopControl {
        self.trail
            .borrow_mut()
            .run_frame(&mut self.surface, &mut self.clock)
    }
}

/// Owns the `requestAnimationFrame` chain for the trail. At most one frame
/// callback is pending at any time; the chain ends on the first frame after
/// `stop()`.
#[derive(Clone)]
pub struct LoopHandle {
    ctx: Rc<RefCell<FrameContext>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn new(ctx: FrameContext) -> Self {
        let handle = LoopHandle {
            ctx: Rc::new(RefCell::new(ctx)),
            tick: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(false)),
        };
        // The closure keeps a handle to itself; it lives as long as the page.
        let tick_handle = handle.clone();
        *handle.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            tick_handle.pending.set(false);
            let control = tick_handle.ctx.borrow_mut().frame();
            if control == LoopControl::Continue {
                tick_handle.request_frame();
            }
        }) as Box<dyn FnMut()>));
        handle
    }

    pub fn start(&self) {
        let needs_frame = self.ctx.borrow().trail.borrow_mut().start();
        if needs_frame {
            self.request_frame();
        }
    }

    pub fn stop(&self) {
        self.ctx.borrow().trail.borrow_mut().stop();
    }

    fn request_frame(&self) {
        if self.pending.get() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(_) => self.pending.set(true),
                Err(e) => log::error!("requestAnimationFrame error: {:?}", e),
            }
        }
    }
}
