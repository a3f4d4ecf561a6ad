//! Trail configuration: defaults from [`crate::constants`] plus per-page
//! overrides supplied as string key/value pairs (the web front-end reads them
//! from `data-*` attributes on the canvas).

use std::str::FromStr;

use thiserror::Error;

use crate::constants::*;
use crate::particle::Particle;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown trail setting `{0}`")]
    UnknownKey(String),
    #[error("`{key}` expects a number, got `{value}`")]
    InvalidNumber { key: String, value: String },
    #[error("`{key}` = {value} is out of range ({expected})")]
    OutOfRange {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    pub particles_per_move: usize,
    pub velocity_spread: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub life_decrement: f32,
    pub radius_decay: f32,
    pub hue_start: f32,
    pub hue_step: f32,
    /// Cap on live particles; the oldest are discarded first. `None` leaves
    /// the set unbounded.
    pub max_particles: Option<usize>,
    /// Fixed RNG seed for reproducible spawns; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            particles_per_move: PARTICLES_PER_MOVE,
            velocity_spread: VELOCITY_SPREAD,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            life_decrement: LIFE_DECREMENT,
            radius_decay: RADIUS_DECAY,
            hue_start: HUE_START,
            hue_step: HUE_STEP,
            max_particles: None,
            seed: None,
        }
    }
}

impl TrailConfig {
    /// Keys accepted by [`TrailConfig::apply_override`].
    pub const OVERRIDE_KEYS: &'static [&'static str] = &[
        "particles-per-move",
        "hue-step",
        "life-decrement",
        "radius-decay",
        "max-particles",
        "seed",
    ];

    /// Parse and apply a single override. On error the config is unchanged.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "particles-per-move" => {
                let n: usize = parse(key, value)?;
                if !(1..=MAX_PARTICLES_PER_MOVE).contains(&n) {
                    return Err(out_of_range("particles-per-move", value, "1 ..= 1024"));
                }
                self.particles_per_move = n;
            }
            "hue-step" => {
                let step: f32 = parse(key, value)?;
                if !step.is_finite() || !(0.0..360.0).contains(&step) {
                    return Err(out_of_range("hue-step", value, "0 <= step < 360"));
                }
                self.hue_step = step;
            }
            "life-decrement" => {
                let d: f32 = parse(key, value)?;
                if !(MIN_LIFE_DECREMENT..=1.0).contains(&d) {
                    return Err(out_of_range(
                        "life-decrement",
                        value,
                        "0.0001 <= decrement <= 1",
                    ));
                }
                self.life_decrement = d;
            }
            "radius-decay" => {
                let f: f32 = parse(key, value)?;
                if !(f > 0.0 && f < 1.0) {
                    return Err(out_of_range("radius-decay", value, "0 < factor < 1"));
                }
                self.radius_decay = f;
            }
            "max-particles" => {
                let n: usize = parse(key, value)?;
                // zero means "no cap"
                self.max_particles = (n > 0).then_some(n);
            }
            "seed" => {
                self.seed = Some(parse(key, value)?);
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        log::debug!("[config] {} = {}", key, value);
        Ok(())
    }

    /// Apply every override, keeping the defaults for entries that fail.
    /// Returns the rejected entries.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Vec<ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        overrides
            .into_iter()
            .filter_map(|(k, v)| self.apply_override(k, v).err())
            .collect()
    }

    /// Upper bound on the frames a particle survives without input.
    pub fn max_lifetime_frames(&self) -> u32 {
        (Particle::INITIAL_LIFE / self.life_decrement).ceil() as u32
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn out_of_range(key: &'static str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::OutOfRange {
        key,
        value: value.to_string(),
        expected,
    }
}
