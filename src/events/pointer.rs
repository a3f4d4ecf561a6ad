use folio_core::TrailLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::input;

/// Spawn trail particles for every pointer sample over the canvas.
pub fn wire_trail_pointer(canvas: web::HtmlCanvasElement, trail: Rc<RefCell<TrailLoop>>) {
    let target = canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = canvas.get_bounding_client_rect();
        let [x, y] = input::client_to_device_px(
            ev.client_x() as f64,
            ev.client_y() as f64,
            rect.left(),
            rect.top(),
            dom::device_pixel_ratio(),
        );
        trail.borrow_mut().animator_mut().on_pointer_move(x, y);
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the canvas backing buffer in step with its display size.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, trail: Rc<RefCell<TrailLoop>>) {
    dom::sync_canvas_backing_size(canvas, trail.borrow_mut().animator_mut());
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize, trail.borrow_mut().animator_mut());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
