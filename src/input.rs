// Pointer coordinate helpers. Kept free of browser types so host tests can
// include this file directly.

/// Client-space pointer position to device pixels inside an element whose
/// bounding rect starts at (`left`, `top`).
#[inline]
pub fn client_to_device_px(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    device_pixel_ratio: f64,
) -> [f32; 2] {
    [
        ((client_x - left) * device_pixel_ratio) as f32,
        ((client_y - top) * device_pixel_ratio) as f32,
    ]
}
