//! Platform-free logic behind the festive header effect.
//!
//! Nothing here references browser APIs. The web frontend implements
//! `Surface`/`Decoration` over the DOM and `FlagStore` over local storage.

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod controller;
pub mod layout;
pub mod random;
pub mod scale;
pub mod surface;

pub use bootstrap::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use layout::*;
pub use random::*;
pub use scale::*;
pub use surface::*;
