pub mod card;
pub mod pointer;

pub use card::wire_card_shine;
pub use pointer::{wire_canvas_resize, wire_trail_pointer};
