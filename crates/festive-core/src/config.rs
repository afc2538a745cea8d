//! Effect configuration: caller options merged over defaults.
//!
//! `EffectOptions` is what a page hands over (a JS object serialized to
//! JSON). Every field is optional and unknown keys are kept in `extra` so a
//! page can stash its own settings next to ours. `EffectConfig` is the
//! resolved record the controller works from.

use crate::constants::{DEFAULT_LIGHTS, DEFAULT_PARTICLES, MAX_ELEMENTS};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown intensity '{0}' (expected low, medium or high)")]
    UnknownIntensity(String),
    #[error("{field} = {requested} exceeds the limit of {max}")]
    TooManyElements {
        field: &'static str,
        requested: u32,
        max: u32,
    },
    #[error("invalid options: {0}")]
    Options(#[from] serde_json::Error),
    #[error("options must be an object")]
    NotAnObject,
}

/// How dense the snowfall is. Lights are not affected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Low, Intensity::Medium, Intensity::High];

    /// Scale factor applied to the base particle count.
    pub fn multiplier(self) -> f64 {
        let (num, den) = self.ratio();
        num as f64 / den as f64
    }

    /// The multiplier as an exact (numerator, denominator) pair so counts can
    /// be floored without float error.
    pub fn ratio(self) -> (u32, u32) {
        match self {
            Intensity::Low => (1, 2),
            Intensity::Medium => (1, 1),
            Intensity::High => (3, 2),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }

    /// Lenient parse used for page-supplied values: unknown names fall back
    /// to `Medium`, which leaves the base count unscaled.
    pub fn parse_or_default(raw: &str) -> Intensity {
        match raw.parse() {
            Ok(level) => level,
            Err(e) => {
                log::warn!("[config] {}; using medium", e);
                Intensity::Medium
            }
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intensity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Intensity::Low),
            "medium" => Ok(Intensity::Medium),
            "high" => Ok(Intensity::High),
            _ => Err(ConfigError::UnknownIntensity(s.to_string())),
        }
    }
}

/// Partial options as supplied by a page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectOptions {
    #[serde(alias = "snowflakes", skip_serializing_if = "Option::is_none")]
    pub particles: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lights: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    /// Unrecognized keys, retained as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl EffectOptions {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        // `JSON.stringify(undefined)` and friends reach us as empty/"null"
        let trimmed = json.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    /// Like `from_json`, but a malformed field is logged and treated as
    /// absent instead of discarding the whole object. Fails only when the
    /// input is not a JSON object.
    pub fn from_json_lenient(json: &str) -> Result<Self, ConfigError> {
        let trimmed = json.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Self::default());
        }
        let serde_json::Value::Object(map) = serde_json::from_str(trimmed)? else {
            return Err(ConfigError::NotAnObject);
        };
        let mut options = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "particles" => options.particles = lenient_field(&key, value),
                // `particles` wins when both spellings are present
                "snowflakes" => {
                    if options.particles.is_none() {
                        options.particles = lenient_field(&key, value);
                    }
                }
                "lights" => options.lights = lenient_field(&key, value),
                "enabled" => options.enabled = lenient_field(&key, value),
                "intensity" => options.intensity = lenient_field(&key, value),
                _ => {
                    options.extra.insert(key, value);
                }
            }
        }
        Ok(options)
    }
}

fn lenient_field<T: DeserializeOwned>(key: &str, value: serde_json::Value) -> Option<T> {
    match serde_json::from_value::<Option<T>>(value) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[config] ignoring option '{}': {}", key, e);
            None
        }
    }
}

/// Resolved configuration driving element generation.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectConfig {
    pub particles: u32,
    pub lights: u32,
    pub enabled: bool,
    pub intensity: Intensity,
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            particles: DEFAULT_PARTICLES,
            lights: DEFAULT_LIGHTS,
            enabled: true,
            intensity: Intensity::Medium,
            extra: BTreeMap::new(),
        }
    }
}

impl EffectConfig {
    /// Merge supplied options over the defaults. An explicit zero is kept.
    pub fn from_options(options: EffectOptions) -> Self {
        let defaults = Self::default();
        Self {
            particles: options.particles.unwrap_or(defaults.particles),
            lights: options.lights.unwrap_or(defaults.lights),
            enabled: options.enabled.unwrap_or(defaults.enabled),
            intensity: options
                .intensity
                .as_deref()
                .map(Intensity::parse_or_default)
                .unwrap_or(defaults.intensity),
            extra: options.extra,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, requested) in [("particles", self.particles), ("lights", self.lights)] {
            if requested > MAX_ELEMENTS {
                return Err(ConfigError::TooManyElements {
                    field,
                    requested,
                    max: MAX_ELEMENTS,
                });
            }
        }
        Ok(())
    }

    /// Copy with both counts limited to `MAX_ELEMENTS`.
    pub fn clamped(mut self) -> Self {
        self.particles = self.particles.min(MAX_ELEMENTS);
        self.lights = self.lights.min(MAX_ELEMENTS);
        self
    }
}
