use crate::core::actions::generate_image::generate_image::{
    ColourMode, GenerateImageError, generate_image,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::vec2::Vec2;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_map::SineGreyscale;
use crate::engine::config::{ConfigError, EngineConfig, validate_image_factor};

/// The long-lived engine session the host drives.
///
/// Owns the mutable viewport for the process lifetime. The host maps its
/// input and frame timing onto these calls (`velocity = rate * dt` computed
/// host-side, passed in as the pan delta or zoom factor) and calls
/// [`Engine::generate_image`] once per frame; calls never overlap, so
/// mutation and rendering are temporally disjoint and no locking exists.
#[derive(Debug, Clone)]
pub struct Engine {
    viewport: Viewport,
    colour_mode: ColourMode,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            colour_mode: ColourMode::default(),
        }
    }
}

impl Engine {
    pub(crate) fn from_parts(viewport: Viewport, colour_mode: ColourMode) -> Self {
        Self {
            viewport,
            colour_mode,
        }
    }

    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.build()
    }

    /// Sets the pixels-per-unit resolution factor. Unlike the raw viewport
    /// setter this is a configuration entry point and rejects non-positive
    /// factors.
    pub fn set_image_factor(&mut self, image_factor: f64) -> Result<(), ConfigError> {
        validate_image_factor(image_factor)?;
        self.viewport.set_image_factor(image_factor);
        Ok(())
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.viewport.pan(delta);
    }

    pub fn zoom(&mut self, factor: f64) {
        self.viewport.zoom(factor);
    }

    pub fn increment_iterations(&mut self) {
        self.viewport.increment_iterations();
    }

    pub fn decrement_iterations(&mut self) {
        self.viewport.decrement_iterations();
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.viewport.max_iterations()
    }

    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.viewport.size()
    }

    pub fn set_colour_mode(&mut self, mode: ColourMode) {
        self.colour_mode = mode;
    }

    #[must_use]
    pub fn colour_mode(&self) -> ColourMode {
        self.colour_mode
    }

    /// Renders the next frame from a snapshot of the current viewport.
    pub fn generate_image(&self) -> Result<PixelBuffer, GenerateImageError> {
        let snapshot = self.viewport;
        let colour_map = SineGreyscale::new(snapshot.max_iterations());

        generate_image(snapshot, &colour_map, self.colour_mode)
    }
}
