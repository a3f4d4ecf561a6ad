use folio_core::{shine_offset, Rect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CARD_SELECTOR, SHINE_SELECTOR, SHINE_X_VAR, SHINE_Y_VAR};

/// Make the `.shine` layer of every card follow the cursor.
pub fn wire_card_shine(document: &web::Document) {
    let cards = match document.query_selector_all(CARD_SELECTOR) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[shine] query {} failed: {:?}", CARD_SELECTOR, e);
            return;
        }
    };
    let mut wired = 0;
    for i in 0..cards.length() {
        let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        // cards without a shine layer are left alone
        let Ok(Some(shine)) = card.query_selector(SHINE_SELECTOR) else {
            continue;
        };
        let Ok(shine) = shine.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        wire_card(card, shine);
        wired += 1;
    }
    log::debug!("[shine] wired {} of {} cards", wired, cards.length());
}

fn wire_card(card: web::Element, shine: web::HtmlElement) {
    let target = card.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let r = card.get_bounding_client_rect();
        let rect = Rect::new(r.left(), r.top(), r.width(), r.height());
        if let Some(offset) = shine_offset(ev.client_x() as f64, ev.client_y() as f64, rect) {
            let (mx, my) = offset.css_values();
            let style = shine.style();
            _ = style.set_property(SHINE_X_VAR, &mx);
            _ = style.set_property(SHINE_Y_VAR, &my);
        }
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
