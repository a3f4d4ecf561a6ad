use web_sys as web;

use crate::constants::YEAR_ELEMENT_ID;

/// Write the current calendar year into the footer's year slot, if present.
#[inline]
pub fn set_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(YEAR_ELEMENT_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
