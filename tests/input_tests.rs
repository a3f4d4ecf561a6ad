// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn client_to_device_px_offsets_by_rect_origin() {
    let [x, y] = client_to_device_px(150.0, 80.0, 50.0, 30.0, 1.0);
    assert_eq!(x, 100.0);
    assert_eq!(y, 50.0);
}

#[test]
fn client_to_device_px_scales_by_ratio() {
    let [x, y] = client_to_device_px(150.0, 80.0, 50.0, 30.0, 2.0);
    assert_eq!(x, 200.0);
    assert_eq!(y, 100.0);

    let [x, y] = client_to_device_px(10.0, 10.0, 0.0, 0.0, 1.5);
    assert!((x - 15.0).abs() < 1e-6);
    assert!((y - 15.0).abs() < 1e-6);
}

#[test]
fn client_to_device_px_allows_points_outside_the_element() {
    let [x, y] = client_to_device_px(0.0, 0.0, 20.0, 40.0, 1.0);
    assert_eq!(x, -20.0);
    assert_eq!(y, -40.0);
}
