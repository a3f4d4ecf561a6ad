//! Cursor particle trail.
//!
//! Pointer samples spawn small batches of particles; every frame the trail
//! rotates its hue, paints a translucent diagonal wash and draws the
//! surviving particles in the complementary hue, faded by their remaining
//! life.

use glam::Vec2;
use rand::prelude::*;

use crate::color::{wrap_hue, Hsla};
use crate::config::TrailConfig;
use crate::constants::*;
use crate::particle::Particle;
use crate::surface::{BackingSize, Surface};

pub struct TrailAnimator {
    particles: Vec<Particle>,
    hue: f32,
    backing: BackingSize,
    config: TrailConfig,
    rng: StdRng,
}

impl Default for TrailAnimator {
    fn default() -> Self {
        Self::new(TrailConfig::default())
    }
}

impl TrailAnimator {
    pub fn new(config: TrailConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            particles: Vec::new(),
            hue: wrap_hue(config.hue_start),
            backing: BackingSize::default(),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn backing_size(&self) -> BackingSize {
        self.backing
    }

    /// Spawn a batch of particles at a device-pixel position.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let origin = Vec2::new(x, y);
        let spread = self.config.velocity_spread;
        let (r_min, r_max) = (self.config.radius_min, self.config.radius_max);
        self.particles.reserve(self.config.particles_per_move);
        for _ in 0..self.config.particles_per_move {
            let velocity = Vec2::new(
                self.rng.gen_range(-spread..=spread),
                self.rng.gen_range(-spread..=spread),
            );
            let radius = self.rng.gen_range(r_min..=r_max);
            self.particles.push(Particle::new(origin, velocity, radius));
        }
        if let Some(cap) = self.config.max_particles {
            if self.particles.len() > cap {
                let excess = self.particles.len() - cap;
                self.particles.drain(..excess);
            }
        }
    }

    /// Match the backing buffer to a new display size. Returns the size the
    /// host should apply to its canvas.
    pub fn resize(
        &mut self,
        css_width: f64,
        css_height: f64,
        device_pixel_ratio: f64,
    ) -> BackingSize {
        self.backing = BackingSize::from_css(css_width, css_height, device_pixel_ratio);
        log::debug!(
            "[trail] resize {:.1}x{:.1} @{:.2} -> {}x{}",
            css_width,
            css_height,
            device_pixel_ratio,
            self.backing.width,
            self.backing.height
        );
        self.backing
    }

    /// Advance the simulation by one frame without drawing.
    pub fn step(&mut self) {
        self.hue = wrap_hue(self.hue + self.config.hue_step);
        let (decrement, decay) = (self.config.life_decrement, self.config.radius_decay);
        self.particles.retain_mut(|p| p.step(decrement, decay));
    }

    /// Draw one frame. A zero-area surface still advances the simulation but
    /// draws nothing.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let size = self.backing;
        let visible = !size.is_empty();
        if visible {
            surface.clear(size);
        }
        self.step();
        if !visible {
            return;
        }
        let (start, end) = self.wash_colors();
        surface.fill_diagonal_gradient(size, start, end);
        let particle_hue = self.hue + PARTICLE_HUE_OFFSET;
        for p in &self.particles {
            let color = Hsla::new(particle_hue, PARTICLE_SATURATION, PARTICLE_LIGHTNESS, p.life);
            surface.fill_circle(p.position, p.radius, color);
        }
    }

    /// Gradient stop colours for the current hue.
    pub fn wash_colors(&self) -> (Hsla, Hsla) {
        (
            Hsla::new(self.hue, WASH_SATURATION, WASH_LIGHTNESS, WASH_ALPHA),
            Hsla::new(
                self.hue + WASH_HUE_OFFSET,
                WASH_SATURATION,
                WASH_LIGHTNESS,
                WASH_ALPHA,
            ),
        )
    }
}
