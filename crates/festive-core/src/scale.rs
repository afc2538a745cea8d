use crate::config::{EffectConfig, Intensity};
use crate::constants::{COMPACT_LIGHT_RATIO, COMPACT_PARTICLE_RATIO, COMPACT_VIEWPORT_MAX_WIDTH};

/// Number of particle and light elements one generation should hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementCounts {
    pub particles: usize,
    pub lights: usize,
}

impl ElementCounts {
    pub fn for_config(config: &EffectConfig, compact: bool) -> Self {
        Self {
            particles: particle_count(config.particles, config.intensity, compact),
            lights: light_count(config.lights, compact),
        }
    }
}

#[inline]
fn scale_floor(value: u64, (num, den): (u32, u32)) -> u64 {
    value * num as u64 / den as u64
}

/// Round half up, matching `Math.round` for non-negative values.
#[inline]
fn scale_round(value: u64, (num, den): (u32, u32)) -> u64 {
    (value * num as u64 + den as u64 / 2) / den as u64
}

/// Saturates on targets where `usize` is narrower than the count (wasm32).
#[inline]
fn to_count(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Intensity scaling first (rounded), then the compact-viewport factor (floored).
pub fn particle_count(base: u32, intensity: Intensity, compact: bool) -> usize {
    let scaled = scale_round(base as u64, intensity.ratio());
    let scaled = if compact {
        scale_floor(scaled, COMPACT_PARTICLE_RATIO)
    } else {
        scaled
    };
    to_count(scaled)
}

pub fn light_count(base: u32, compact: bool) -> usize {
    if compact {
        to_count(scale_floor(base as u64, COMPACT_LIGHT_RATIO))
    } else {
        to_count(base as u64)
    }
}

#[inline]
pub fn is_compact(viewport_width: f64) -> bool {
    viewport_width < COMPACT_VIEWPORT_MAX_WIDTH
}
