//! Host seam between the controller and whatever renders its elements.
//!
//! The browser build implements these traits over `web_sys`; tests use an
//! in-memory fake. The controller never touches a DOM type directly.

use crate::layout::ElementSpec;

/// `animation-play-state` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Running,
    Paused,
}

impl PlayState {
    pub fn css_value(self) -> &'static str {
        match self {
            PlayState::Running => "running",
            PlayState::Paused => "paused",
        }
    }

    pub fn for_visibility(visible: bool) -> Self {
        if visible {
            PlayState::Running
        } else {
            PlayState::Paused
        }
    }
}

/// A created decorative element, exclusively owned by one controller.
pub trait Decoration: Clone + 'static {
    fn set_play_state(&self, state: PlayState);
    /// Remove the element from its container.
    fn detach(&self);
}

/// Callback invoked with `true` when the container scrolls into view and
/// `false` when it leaves.
pub type VisibilityCallback = Box<dyn FnMut(bool)>;

/// The container element plus the host services the controller needs.
pub trait Surface {
    type Element: Decoration;
    /// Registration handle returned by `watch_visibility`.
    type Watch;

    /// Create an element from `spec` and append it to the container.
    /// Returns `None` if the host refused to create it.
    fn spawn(&mut self, spec: &ElementSpec) -> Option<Self::Element>;

    /// Current viewport width in CSS pixels.
    fn viewport_width(&self) -> f64;

    fn watch_visibility(&mut self, threshold: f64, on_change: VisibilityCallback) -> Self::Watch;

    fn unwatch(&mut self, watch: Self::Watch);
}
