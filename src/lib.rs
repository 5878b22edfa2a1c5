//! Escape-time Mandelbrot computation engine.
//!
//! Turns a mutable viewport session (pan/zoom transform over a region of the
//! complex plane plus an iteration cap) into interleaved RGBA pixel buffers,
//! one [`Engine::generate_image`] call per frame. The windowing, input and
//! presentation loop is the host's job; this crate is the pure computation
//! service behind it.

mod core;
mod engine;

pub use crate::core::actions::generate_image::generate_image::{ColourMode, GenerateImageError};
pub use crate::core::actions::generate_image::ports::colour_map::ColourMap;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_size::PixelSize;
pub use crate::core::data::vec2::Vec2;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::colour_map::SineGreyscale;
pub use crate::engine::{ConfigError, Engine, EngineConfig};
