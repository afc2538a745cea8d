//! Randomized styles for generated elements and the host-independent
//! `ElementSpec` handed to a `Surface`.

use crate::constants::*;
use crate::random::{pick, uniform, RandomSource};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Particle,
    Light,
    Overlay,
    Banner,
}

impl ElementKind {
    pub fn class(self) -> &'static str {
        match self {
            ElementKind::Particle => PARTICLE_CLASS,
            ElementKind::Light => LIGHT_CLASS,
            ElementKind::Overlay => OVERLAY_CLASS,
            ElementKind::Banner => BANNER_CLASS,
        }
    }
}

/// Inline style declarations as (CSS property, value) pairs.
pub type StyleList = SmallVec<[(&'static str, String); 4]>;

/// Everything a host needs to create one decorative element.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementSpec {
    pub kind: ElementKind,
    pub styles: StyleList,
    pub text: Option<&'static str>,
}

impl ElementSpec {
    pub fn overlay() -> Self {
        Self {
            kind: ElementKind::Overlay,
            styles: StyleList::new(),
            text: None,
        }
    }

    pub fn banner() -> Self {
        Self {
            kind: ElementKind::Banner,
            styles: StyleList::new(),
            text: Some(BANNER_TEXT),
        }
    }

    #[inline]
    pub fn class(&self) -> &'static str {
        self.kind.class()
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }
}

/// One falling snow particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleStyle {
    pub left_pct: f64,
    pub delay_sec: f64,
    pub duration_sec: f64,
    pub opacity: f64,
}

impl ParticleStyle {
    /// Draws four values from `src`, in field order.
    pub fn sample(src: &mut dyn RandomSource) -> Self {
        let left_pct = uniform(src, PARTICLE_LEFT_PCT);
        let delay_sec = uniform(src, PARTICLE_DELAY_SEC);
        let duration_sec = uniform(src, PARTICLE_DURATION_SEC);
        let opacity = uniform(src, PARTICLE_OPACITY);
        Self {
            left_pct,
            delay_sec,
            duration_sec,
            opacity,
        }
    }

    pub fn to_spec(&self) -> ElementSpec {
        let mut styles = StyleList::new();
        styles.push(("left", format!("{}%", self.left_pct)));
        styles.push(("animation-delay", format!("{}s", self.delay_sec)));
        styles.push(("animation-duration", format!("{}s", self.duration_sec)));
        styles.push(("opacity", format!("{}", self.opacity)));
        ElementSpec {
            kind: ElementKind::Particle,
            styles,
            text: None,
        }
    }
}

/// One string light. Position and delay follow the index; only the color
/// is random.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightStyle {
    pub left_pct: f64,
    pub delay_sec: f64,
    pub color: &'static str,
}

impl LightStyle {
    pub fn at(index: usize, count: usize, src: &mut dyn RandomSource) -> Self {
        let left_pct = if count == 0 {
            0.0
        } else {
            index as f64 / count as f64 * 100.0
        };
        Self {
            left_pct,
            delay_sec: index as f64 * LIGHT_STAGGER_SEC,
            color: *pick(src, &LIGHT_PALETTE),
        }
    }

    pub fn to_spec(&self) -> ElementSpec {
        let mut styles = StyleList::new();
        styles.push(("left", format!("{}%", self.left_pct)));
        styles.push(("animation-delay", format!("{}s", self.delay_sec)));
        styles.push(("background-color", self.color.to_string()));
        ElementSpec {
            kind: ElementKind::Light,
            styles,
            text: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;

    #[test]
    fn particle_draws_follow_field_order() {
        let mut script = [0.5, 0.1, 0.0, 1.0 - f64::EPSILON].into_iter();
        let mut src = move || script.next().unwrap_or(0.0);
        let p = ParticleStyle::sample(&mut src);
        assert_eq!(p.left_pct, 50.0);
        assert_eq!(p.delay_sec, 1.0);
        assert_eq!(p.duration_sec, 5.0);
        assert!(p.opacity < 1.0 && p.opacity > 0.99);
    }

    #[test]
    fn particle_ranges_hold_for_seeded_source() {
        let mut src = RngSource::seeded(7);
        for _ in 0..500 {
            let p = ParticleStyle::sample(&mut src);
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..10.0).contains(&p.delay_sec));
            assert!((5.0..10.0).contains(&p.duration_sec));
            assert!((0.2..1.0).contains(&p.opacity));
        }
    }

    #[test]
    fn particle_spec_carries_units() {
        let spec = ParticleStyle {
            left_pct: 12.5,
            delay_sec: 3.0,
            duration_sec: 7.25,
            opacity: 0.4,
        }
        .to_spec();
        assert_eq!(spec.class(), "christmas-snowflake");
        assert_eq!(spec.style("left"), Some("12.5%"));
        assert_eq!(spec.style("animation-delay"), Some("3s"));
        assert_eq!(spec.style("animation-duration"), Some("7.25s"));
        assert_eq!(spec.style("opacity"), Some("0.4"));
        assert_eq!(spec.text, None);
    }

    #[test]
    fn lights_are_evenly_spaced_and_staggered() {
        let mut src = || 0.0;
        let lights: Vec<_> = (0..4).map(|i| LightStyle::at(i, 4, &mut src)).collect();
        let lefts: Vec<f64> = lights.iter().map(|l| l.left_pct).collect();
        let delays: Vec<f64> = lights.iter().map(|l| l.delay_sec).collect();
        assert_eq!(lefts, vec![0.0, 25.0, 50.0, 75.0]);
        assert_eq!(delays, vec![0.0, 0.5, 1.0, 1.5]);
        assert!(lights.iter().all(|l| l.color == "#ff0000"));
    }

    #[test]
    fn light_color_comes_from_palette() {
        let mut src = || 0.9;
        let spec = LightStyle::at(0, 1, &mut src).to_spec();
        assert_eq!(spec.class(), "christmas-light");
        assert_eq!(spec.style("background-color"), Some("#00ffff"));
    }

    #[test]
    fn every_palette_color_is_reachable() {
        for (slot, expected) in LIGHT_PALETTE.iter().enumerate() {
            let mut src = move || (slot as f64 + 0.5) / LIGHT_PALETTE.len() as f64;
            let light = LightStyle::at(slot, LIGHT_PALETTE.len(), &mut src);
            assert_eq!(light.color, *expected);
        }
    }

    #[test]
    fn banner_and_overlay() {
        assert_eq!(ElementSpec::banner().text, Some("🎄 Feliz Navidad 🎄"));
        assert_eq!(ElementSpec::banner().class(), "christmas-message");
        assert_eq!(ElementSpec::overlay().class(), "christmas-overlay");
        assert!(ElementSpec::overlay().styles.is_empty());
    }
}
