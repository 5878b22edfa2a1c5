use crate::core::actions::generate_image::generate_image::ColourMode;
use crate::core::data::vec2::Vec2;
use crate::core::data::viewport::Viewport;
use crate::engine::session::Engine;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    NonPositiveSize { width: f64, height: f64 },
    NonPositiveScale { x: f64, y: f64 },
    NonPositiveImageFactor { image_factor: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
            Self::NonPositiveScale { x, y } => {
                write!(f, "viewport scale must be positive: ({}, {})", x, y)
            }
            Self::NonPositiveImageFactor { image_factor } => {
                write!(f, "image factor must be positive: {}", image_factor)
            }
        }
    }
}

impl Error for ConfigError {}

pub(crate) fn validate_image_factor(image_factor: f64) -> Result<(), ConfigError> {
    // also rejects NaN, which fails every comparison
    if image_factor > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveImageFactor { image_factor })
    }
}

/// The validating configuration layer in front of the engine.
///
/// The viewport setters themselves do not range-check; everything that
/// enters the pipeline through this config is checked here instead, so
/// non-positive sizes, scales or image factors never reach the numeric core.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EngineConfig {
    pub position: Vec2,
    pub size: Vec2,
    pub offset: Vec2,
    pub scale: Vec2,
    pub max_iterations: u32,
    pub image_factor: f64,
    pub colour_mode: ColourMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            position: viewport.position(),
            size: viewport.size(),
            offset: viewport.offset(),
            scale: viewport.scale(),
            max_iterations: viewport.max_iterations(),
            image_factor: viewport.image_factor(),
            colour_mode: ColourMode::default(),
        }
    }
}

impl EngineConfig {
    pub fn build(self) -> Result<Engine, ConfigError> {
        if !(self.size.x > 0.0 && self.size.y > 0.0) {
            return Err(ConfigError::NonPositiveSize {
                width: self.size.x,
                height: self.size.y,
            });
        }
        if !(self.scale.x > 0.0 && self.scale.y > 0.0) {
            return Err(ConfigError::NonPositiveScale {
                x: self.scale.x,
                y: self.scale.y,
            });
        }
        validate_image_factor(self.image_factor)?;

        let mut viewport = Viewport::default();
        viewport.set_position(self.position);
        viewport.set_size(self.size);
        viewport.set_offset(self.offset);
        viewport.set_scale(self.scale);
        viewport.set_max_iterations(self.max_iterations);
        viewport.set_image_factor(self.image_factor);

        Ok(Engine::from_parts(viewport, self.colour_mode))
    }
}
