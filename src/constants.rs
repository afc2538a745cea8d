// DOM-side names used by the web frontend.
//
// The markup contract for generated elements lives in `festive_core`; these
// cover the toggle button and the browser events we listen to.

// Toggle button
pub const TOGGLE_BUTTON_ID: &str = "christmas-toggle";
pub const TOGGLE_BUTTON_CLASS: &str = "christmas-toggle-btn";
pub const TOGGLE_BUTTON_TITLE: &str = "Toggle Christmas Mode";

// Inline style property flipped by the visibility observer
pub const PLAY_STATE_PROPERTY: &str = "animation-play-state";

// Tag used for every generated decoration
pub const DECORATION_TAG: &str = "div";

// Browser events
pub const EVENT_CLICK: &str = "click";
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_DOM_READY: &str = "DOMContentLoaded";

// Fallback when the window reports no usable inner width
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1024.0;
