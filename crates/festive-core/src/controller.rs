//! The effect controller: generates particles, lights, the overlay and the
//! banner inside one container, pauses them while the container is off
//! screen, and rebuilds them when the intensity or viewport changes.
//!
//! A controller built without a container is inert: every operation is a
//! silent no-op.

use crate::config::{EffectConfig, EffectOptions, Intensity};
use crate::constants::VISIBILITY_THRESHOLD;
use crate::layout::{ElementSpec, LightStyle, ParticleStyle};
use crate::random::RandomSource;
use crate::scale::{is_compact, ElementCounts};
use crate::surface::{Decoration, PlayState, Surface};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Elements of the current generation. Shared with the visibility callback,
/// which only flips play state.
struct Owned<E> {
    particles: Vec<E>,
    lights: Vec<E>,
    overlay: Option<E>,
    banner: Option<E>,
    visible: bool,
}

impl<E: Decoration> Owned<E> {
    fn new() -> Self {
        Self {
            particles: Vec::new(),
            lights: Vec::new(),
            overlay: None,
            banner: None,
            visible: true,
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        let state = PlayState::for_visibility(visible);
        for el in self.particles.iter().chain(self.lights.iter()) {
            el.set_play_state(state);
        }
    }

    fn clear_generated(&mut self) {
        for el in self.particles.drain(..).chain(self.lights.drain(..)) {
            el.detach();
        }
    }

    fn clear_all(&mut self) {
        self.clear_generated();
        if let Some(el) = self.overlay.take() {
            el.detach();
        }
        if let Some(el) = self.banner.take() {
            el.detach();
        }
    }
}

pub struct EffectController<S: Surface> {
    surface: Option<S>,
    config: EffectConfig,
    owned: Rc<RefCell<Owned<S::Element>>>,
    watch: Option<S::Watch>,
    rng: Box<dyn RandomSource>,
    compact: bool,
    active: bool,
}

impl<S: Surface> EffectController<S> {
    /// Merge `options` over the defaults and bind to `surface`. Activates
    /// immediately unless the options disable the effect.
    pub fn new(
        surface: Option<S>,
        options: EffectOptions,
        rng: impl RandomSource + 'static,
    ) -> Self {
        Self::with_config(surface, EffectConfig::from_options(options), rng)
    }

    pub fn with_config(
        surface: Option<S>,
        config: EffectConfig,
        rng: impl RandomSource + 'static,
    ) -> Self {
        if surface.is_none() {
            log::debug!("[effect] no container; controller is inert");
        }
        let mut ctl = Self {
            surface,
            config,
            owned: Rc::new(RefCell::new(Owned::new())),
            watch: None,
            rng: Box::new(rng),
            compact: false,
            active: false,
        };
        if ctl.config.enabled {
            ctl.activate();
        }
        ctl
    }

    /// Generate all elements, attach the overlay and banner, start watching
    /// visibility, then apply the compact-viewport counts if needed. Calling
    /// this while active regenerates from scratch.
    pub fn activate(&mut self) {
        if self.surface.is_none() {
            return;
        }
        if self.active {
            self.owned.borrow_mut().clear_all();
        }
        self.compact = false;
        self.generate();
        self.attach_chrome();
        self.ensure_watch();
        self.active = true;

        let width = self.surface.as_ref().map(|s| s.viewport_width());
        if let Some(width) = width.filter(|w| is_compact(*w)) {
            log::debug!("[effect] compact viewport ({}px)", width);
            self.compact = true;
            self.regenerate();
        }
        let counts = self.counts();
        log::info!(
            "[effect] active: particles={} lights={} intensity={}",
            counts.particles,
            counts.lights,
            self.config.intensity
        );
    }

    /// Detach every particle and light and generate a fresh set from the
    /// current configuration. No-op while inactive.
    pub fn rebuild(&mut self) {
        if !self.active {
            return;
        }
        self.regenerate();
    }

    /// Record the new level and rebuild if active.
    pub fn set_intensity(&mut self, level: Intensity) {
        self.config.intensity = level;
        self.rebuild();
    }

    pub fn toggle(&mut self, enable: bool) {
        self.config.enabled = enable;
        if enable {
            self.activate();
        } else {
            self.deactivate();
        }
    }

    /// Remove every owned element and stop watching visibility.
    pub fn deactivate(&mut self) {
        self.owned.borrow_mut().clear_all();
        if let (Some(surface), Some(watch)) = (self.surface.as_mut(), self.watch.take()) {
            surface.unwatch(watch);
        }
        if self.active {
            log::info!("[effect] deactivated");
        }
        self.active = false;
        self.compact = false;
    }

    /// Re-evaluate the compact layout after a viewport resize.
    pub fn refresh_viewport(&mut self, width: f64) {
        if !self.active {
            return;
        }
        let compact = is_compact(width);
        if compact != self.compact {
            log::debug!("[effect] viewport {}px, compact={}", width, compact);
            self.compact = compact;
            self.regenerate();
        }
    }

    /// Pause (`false`) or resume (`true`) all particle and light animations.
    pub fn set_visible(&mut self, visible: bool) {
        self.owned.borrow_mut().set_visible(visible);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_inert(&self) -> bool {
        self.surface.is_none()
    }

    pub fn is_visible(&self) -> bool {
        self.owned.borrow().visible
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Counts the next generation will have.
    pub fn counts(&self) -> ElementCounts {
        ElementCounts::for_config(&self.config, self.compact)
    }

    pub fn particle_count(&self) -> usize {
        self.owned.borrow().particles.len()
    }

    pub fn light_count(&self) -> usize {
        self.owned.borrow().lights.len()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    fn regenerate(&mut self) {
        self.owned.borrow_mut().clear_generated();
        self.generate();
    }

    fn generate(&mut self) {
        let counts = self.counts();
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let rng = &mut *self.rng;
        let mut owned = self.owned.borrow_mut();
        // new elements start in the current play state
        let state = PlayState::for_visibility(owned.visible);

        for _ in 0..counts.particles {
            let spec = ParticleStyle::sample(rng).to_spec();
            if let Some(el) = spawn(surface, &spec, state) {
                owned.particles.push(el);
            }
        }
        for i in 0..counts.lights {
            let spec = LightStyle::at(i, counts.lights, rng).to_spec();
            if let Some(el) = spawn(surface, &spec, state) {
                owned.lights.push(el);
            }
        }
    }

    fn attach_chrome(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let mut owned = self.owned.borrow_mut();
        owned.overlay = surface.spawn(&ElementSpec::overlay());
        owned.banner = surface.spawn(&ElementSpec::banner());
    }

    fn ensure_watch(&mut self) {
        if self.watch.is_some() {
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let owned: Weak<RefCell<Owned<S::Element>>> = Rc::downgrade(&self.owned);
        let on_change = Box::new(move |visible: bool| {
            if let Some(owned) = owned.upgrade() {
                owned.borrow_mut().set_visible(visible);
            }
        });
        self.watch = Some(surface.watch_visibility(VISIBILITY_THRESHOLD, on_change));
    }
}

fn spawn<S: Surface>(surface: &mut S, spec: &ElementSpec, state: PlayState) -> Option<S::Element> {
    let el = surface.spawn(spec);
    match &el {
        Some(el) if state == PlayState::Paused => el.set_play_state(state),
        Some(_) => {}
        None => log::warn!("[effect] could not create .{}", spec.class()),
    }
    el
}

impl<S: Surface> Drop for EffectController<S> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
