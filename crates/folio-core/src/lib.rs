//! Pure logic behind the folio site's visual effects.
//!
//! Nothing here touches browser APIs, so the whole crate builds and tests on
//! the host. The wasm front-end (`folio-web`) feeds pointer samples and
//! resize events in and draws through a [`Surface`] implementation.

pub mod color;
pub mod config;
pub mod constants;
pub mod driver;
pub mod particle;
pub mod shine;
pub mod surface;
pub mod trail;

pub use color::{wrap_hue, Hsla};
pub use config::{ConfigError, TrailConfig};
pub use driver::{
    FixedClock, FrameClock, FrameStats, InstantClock, LoopControl, LoopState, TrailLoop,
};
pub use particle::Particle;
pub use shine::{shine_offset, Rect, ShineOffset};
pub use surface::{BackingSize, DrawCommand, RecordingSurface, Surface};
pub use trail::TrailAnimator;
