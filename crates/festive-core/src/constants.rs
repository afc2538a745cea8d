// Shared effect constants used by the core controller and the web frontend.

// Defaults merged under caller-supplied options
pub const DEFAULT_PARTICLES: u32 = 50;
pub const DEFAULT_LIGHTS: u32 = 20;
pub const DEFAULT_CONTAINER_SELECTOR: &str = "header.hero";

// Upper bound accepted from options; larger requests are clamped by the frontend
pub const MAX_ELEMENTS: u32 = 1000;

// Viewports narrower than this (CSS px) get the compact element counts
pub const COMPACT_VIEWPORT_MAX_WIDTH: f64 = 768.0;
// Compact factors as exact ratios (numerator, denominator): 0.5 and 0.7
pub const COMPACT_PARTICLE_RATIO: (u32, u32) = (1, 2);
pub const COMPACT_LIGHT_RATIO: (u32, u32) = (7, 10);

// Fraction of the container that must be on screen to count as visible
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

// Particle randomization ranges: [min, max)
pub const PARTICLE_LEFT_PCT: (f64, f64) = (0.0, 100.0);
pub const PARTICLE_DELAY_SEC: (f64, f64) = (0.0, 10.0);
pub const PARTICLE_DURATION_SEC: (f64, f64) = (5.0, 10.0);
pub const PARTICLE_OPACITY: (f64, f64) = (0.2, 1.0);

// Lights are staggered by this much per index
pub const LIGHT_STAGGER_SEC: f64 = 0.5;

pub const LIGHT_PALETTE: [&str; 5] = [
    "#ff0000", // red
    "#00ff00", // green
    "#ffff00", // yellow
    "#ff4500", // orange-red
    "#00ffff", // cyan
];

// Markup contract consumed by the external stylesheet
pub const PARTICLE_CLASS: &str = "christmas-snowflake";
pub const LIGHT_CLASS: &str = "christmas-light";
pub const OVERLAY_CLASS: &str = "christmas-overlay";
pub const BANNER_CLASS: &str = "christmas-message";
pub const BANNER_TEXT: &str = "🎄 Feliz Navidad 🎄";

// Activation signals and persistence
pub const DECEMBER_MONTH_INDEX: u32 = 11; // months are 0-based
pub const QUERY_KEY: &str = "christmas";
pub const STORAGE_KEY: &str = "christmas-mode";
pub const FLAG_ON: &str = "true";

// Toggle glyphs
pub const GLYPH_ACTIVE: &str = "🎄";
pub const GLYPH_INACTIVE: &str = "❄️";
