// Host-side tests for the DOM hook constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_bare() {
    for id in [TRAIL_CANVAS_ID, YEAR_ELEMENT_ID] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "{id} must be passed to getElementById without '#'");
        assert!(!id.contains(char::is_whitespace));
    }
}

#[test]
fn selectors_are_class_selectors() {
    assert!(CARD_SELECTOR.starts_with('.'));
    assert!(SHINE_SELECTOR.starts_with('.'));
}

#[test]
fn shine_vars_are_custom_properties() {
    assert!(SHINE_X_VAR.starts_with("--"));
    assert!(SHINE_Y_VAR.starts_with("--"));
    assert_ne!(SHINE_X_VAR, SHINE_Y_VAR);
}

#[test]
fn trail_overrides_map_to_data_attributes() {
    assert_eq!(DATA_ATTR_PREFIX, "data-");
    for key in folio_core::TrailConfig::OVERRIDE_KEYS {
        let attr = format!("{}{}", DATA_ATTR_PREFIX, key);
        assert!(attr
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '-'));
    }
}
