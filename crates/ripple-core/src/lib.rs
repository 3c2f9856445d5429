pub mod color;
pub mod config;
pub mod constants;
pub mod controls;
pub mod error;
pub mod registry;
pub mod ripple;
pub mod scene;
pub mod spawner;
pub mod surface;
pub mod tone;

pub use color::*;
pub use config::*;
pub use constants::*;
pub use controls::*;
pub use error::*;
pub use registry::*;
pub use ripple::*;
pub use scene::*;
pub use spawner::*;
pub use surface::*;
pub use tone::*;
