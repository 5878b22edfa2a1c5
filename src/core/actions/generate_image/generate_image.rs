use crate::core::actions::assemble_pixels::assemble_pixels;
use crate::core::actions::generate_image::ports::colour_map::ColourMap;
use crate::core::actions::map_coordinates::complex_samples;
use crate::core::actions::par_map::par_map;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_map::calculate_colours;
use crate::core::fractals::mandelbrot::escape::{
    calculate_continuous_iterations, calculate_iterations,
};
use std::error::Error;
use std::fmt;

/// Which escape-count variant feeds the colour stage.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ColourMode {
    /// Integer escape counts; visible banding at iteration boundaries.
    #[default]
    Discrete,
    /// Continuous (smoothed) escape counts.
    Smooth,
}

#[derive(Debug)]
pub enum GenerateImageError {
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GenerateImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GenerateImageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Renders one frame from a viewport snapshot.
///
/// The viewport is taken by value: the copy is the immutable snapshot the
/// whole frame computes from, so a host mutating its own viewport between
/// frames can never race an in-flight render.
///
/// Stages: pixel grid → complex samples (sequential) → escape counts
/// (parallel) → colours (parallel) → interleaved RGBA bytes (sequential).
/// Each parallel stage joins before the next starts, and every intermediate
/// array preserves index correspondence, so the call is referentially
/// transparent: the same snapshot always yields the same buffer.
pub fn generate_image<CMap: ColourMap>(
    viewport: Viewport,
    colour_map: &CMap,
    mode: ColourMode,
) -> Result<PixelBuffer, GenerateImageError> {
    let pixel_size = viewport.pixel_size();
    let samples = complex_samples(&viewport, pixel_size);

    let values: Vec<f64> = match mode {
        ColourMode::Discrete => {
            let iterations = calculate_iterations(&samples, viewport.max_iterations());
            par_map(&iterations, |i| f64::from(*i))
        }
        ColourMode::Smooth => calculate_continuous_iterations(&samples, viewport.max_iterations()),
    };

    let colours = calculate_colours(&values, colour_map);
    let bytes = assemble_pixels(&colours);

    PixelBuffer::from_data(pixel_size, bytes).map_err(GenerateImageError::PixelBuffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_size::PixelSize;
    use crate::core::data::vec2::Vec2;
    use crate::core::fractals::mandelbrot::colour_map::SineGreyscale;

    fn default_mapper() -> SineGreyscale {
        SineGreyscale::new(Viewport::default().max_iterations())
    }

    #[test]
    fn test_default_viewport_renders_three_by_three_rgba() {
        let viewport = Viewport::default();

        let image = generate_image(viewport, &default_mapper(), ColourMode::Discrete).unwrap();

        assert_eq!(image.pixel_size(), PixelSize::new(3, 3));
        assert_eq!(image.bytes().len(), 36);
    }

    #[test]
    fn test_identical_snapshots_yield_identical_buffers() {
        let viewport = Viewport::default();

        let first = generate_image(viewport, &default_mapper(), ColourMode::Discrete).unwrap();
        let second = generate_image(viewport, &default_mapper(), ColourMode::Discrete).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_smooth_mode_is_deterministic_too() {
        let viewport = Viewport::default();

        let first = generate_image(viewport, &default_mapper(), ColourMode::Smooth).unwrap();
        let second = generate_image(viewport, &default_mapper(), ColourMode::Smooth).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_every_pixel_is_opaque() {
        let mut viewport = Viewport::default();
        viewport.set_image_factor(8.0);

        let image = generate_image(viewport, &default_mapper(), ColourMode::Discrete).unwrap();

        for alpha in image.bytes().iter().skip(3).step_by(4) {
            assert_eq!(*alpha, 255);
        }
    }

    #[test]
    fn test_interior_centre_pixel_is_white() {
        // centre the 3x3 grid's middle sample on the origin, which never
        // escapes and therefore renders at full intensity
        let mut viewport = Viewport::default();
        viewport.set_position(Vec2::new(-1.0, -1.0));

        let image = generate_image(viewport, &default_mapper(), ColourMode::Discrete).unwrap();

        // middle pixel of a 3x3 frame starts at byte 4 * 4
        assert_eq!(&image.bytes()[16..20], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_zoomed_snapshot_changes_the_buffer() {
        let base = Viewport::default();
        let mut zoomed = base;
        zoomed.zoom(-0.5);

        let base_image = generate_image(base, &default_mapper(), ColourMode::Discrete).unwrap();
        let zoomed_image = generate_image(zoomed, &default_mapper(), ColourMode::Discrete).unwrap();

        assert_eq!(base_image.pixel_size(), zoomed_image.pixel_size());
        assert_ne!(base_image.bytes(), zoomed_image.bytes());
    }

    #[test]
    fn test_zero_iteration_cap_renders_fallback_frame() {
        let mut viewport = Viewport::default();
        viewport.set_max_iterations(0);
        let mapper = SineGreyscale::new(0);

        let image = generate_image(viewport, &mapper, ColourMode::Discrete).unwrap();

        for pixel in image.bytes().chunks_exact(4) {
            assert_eq!(pixel, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn test_image_factor_sets_resolution() {
        let mut viewport = Viewport::default();
        viewport.set_image_factor(10.0);

        let image = generate_image(viewport, &default_mapper(), ColourMode::Discrete).unwrap();

        assert_eq!(image.pixel_size(), PixelSize::new(30, 30));
        assert_eq!(image.bytes().len(), 30 * 30 * 4);
    }
}
