// Trail tuning constants shared by the animator defaults and the web front-end.

// Spawning
pub const PARTICLES_PER_MOVE: usize = 6; // particles appended per pointer sample
pub const MAX_PARTICLES_PER_MOVE: usize = 1024; // ceiling for page overrides
pub const VELOCITY_SPREAD: f32 = 0.6; // per-axis velocity is drawn from [-spread, spread]
pub const RADIUS_MIN: f32 = 3.0;
pub const RADIUS_MAX: f32 = 5.0;

// Per-frame decay
pub const LIFE_DECREMENT: f32 = 0.012; // 1.0 -> 0 in 84 frames
pub const RADIUS_DECAY: f32 = 0.992; // multiplicative, must stay below 1
pub const MIN_LIFE_DECREMENT: f32 = 1e-4; // keeps lifetimes to 10k frames at most

// Hue rotation (degrees)
pub const HUE_START: f32 = 300.0;
pub const HUE_STEP: f32 = 0.2;
pub const HUE_PERIOD: f32 = 360.0;

// Backdrop wash: diagonal two-stop gradient
pub const WASH_HUE_OFFSET: f32 = 60.0; // second stop relative to the global hue
pub const WASH_SATURATION: f32 = 70.0;
pub const WASH_LIGHTNESS: f32 = 60.0;
pub const WASH_ALPHA: f32 = 0.08;

// Particle fill
pub const PARTICLE_HUE_OFFSET: f32 = 180.0; // complementary to the wash
pub const PARTICLE_SATURATION: f32 = 90.0;
pub const PARTICLE_LIGHTNESS: f32 = 65.0;

// Stats
pub const STATS_LOG_EVERY_FRAMES: u64 = 600; // ~10 s at 60 Hz
