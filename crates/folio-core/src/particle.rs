//! A single trail particle.

use glam::Vec2;

/// Ephemeral point drawn while `life > 0`. Positions are in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: f32,
    pub radius: f32,
    /// Frames survived since spawn.
    pub age: u32,
}

impl Particle {
    pub const INITIAL_LIFE: f32 = 1.0;
    /// Life at or below this counts as expired.
    pub const LIFE_EPSILON: f32 = 1e-6;

    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Particle {
            position,
            velocity,
            life: Self::INITIAL_LIFE,
            radius,
            age: 0,
        }
    }

    /// Advance one frame. Returns false once the particle has expired.
    #[inline]
    pub fn step(&mut self, life_decrement: f32, radius_decay: f32) -> bool {
        self.position += self.velocity;
        // derived from the age so rounding does not accumulate across frames
        self.age = self.age.saturating_add(1);
        self.life = Self::INITIAL_LIFE - self.age as f32 * life_decrement;
        self.radius *= radius_decay;
        self.is_alive()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > Self::LIFE_EPSILON
    }
}
