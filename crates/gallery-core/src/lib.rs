//! Platform-free logic for the cube gallery.
//!
//! Nothing in this crate touches the DOM, so it builds and tests on the host.
//! The web front-end owns the elements and forwards events into these types.

pub mod config;
pub mod constants;
pub mod controller;
pub mod input;
pub mod media;
pub mod orientation;
pub mod particles;
pub mod preload;

pub use config::*;
pub use controller::*;
pub use input::*;
pub use media::*;
pub use orientation::*;
pub use particles::*;
pub use preload::*;
