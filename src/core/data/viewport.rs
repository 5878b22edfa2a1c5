use crate::core::data::pixel_size::PixelSize;
use crate::core::data::vec2::Vec2;

const DEFAULT_POSITION: Vec2 = Vec2 { x: -2.0, y: -1.5 };
const DEFAULT_SIZE: Vec2 = Vec2 { x: 3.0, y: 3.0 };
const DEFAULT_MAX_ITERATIONS: u32 = 50;

/// The viewport session state: a base region of the complex plane plus the
/// accumulated pan/zoom transform, the iteration cap and the pixels-per-unit
/// resolution factor.
///
/// This is the one long-lived mutable value of the engine. It is `Copy`, and
/// the pipeline takes it by value, so every frame computes from an immutable
/// snapshot while the host mutates the original strictly between frames.
///
/// Invariants (`size` and `scale` components positive, `image_factor`
/// positive) are upheld by callers; the setters here do not validate. The
/// validating entry point is `EngineConfig`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    position: Vec2,
    size: Vec2,
    offset: Vec2,
    scale: Vec2,
    max_iterations: u32,
    image_factor: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            size: DEFAULT_SIZE,
            offset: Vec2::default(),
            scale: Vec2::new(1.0, 1.0),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            image_factor: 1.0,
        }
    }
}

impl Viewport {
    /// Pans by `delta ⊙ scale`: the delta is expressed in normalized units
    /// and scaled by the current zoom, so visual pan speed is
    /// zoom-independent.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta.hadamard(self.scale);
    }

    /// Zooms around the viewport centre: shifts the offset by half the
    /// scaled size times the factor, then multiplies the per-axis scale by
    /// `1 + factor`. Positive factors widen the view, negative factors in
    /// `(-1, 0)` narrow it.
    pub fn zoom(&mut self, factor: f64) {
        self.offset -= self.size.hadamard(self.scale) * (0.5 * factor);
        self.scale = self.scale * (1.0 + factor);
    }

    pub fn increment_iterations(&mut self) {
        self.max_iterations += 1;
    }

    /// Decrements the iteration cap, stopping at zero.
    pub fn decrement_iterations(&mut self) {
        self.max_iterations = self.max_iterations.saturating_sub(1);
    }

    /// Complex-plane size that renders at `factor` pixels per unit, used to
    /// size the viewport to a desired pixel density.
    #[must_use]
    pub fn convert_pixel_size(pixel_size: PixelSize, factor: f64) -> Vec2 {
        Vec2::new(
            f64::from(pixel_size.width) / factor,
            f64::from(pixel_size.height) / factor,
        )
    }

    /// Output resolution of the next frame: `round(image_factor * size)` per
    /// axis.
    #[must_use]
    pub fn pixel_size(&self) -> PixelSize {
        PixelSize::new(
            (self.image_factor * self.size.x).round() as u32,
            (self.image_factor * self.size.y).round() as u32,
        )
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    #[must_use]
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn image_factor(&self) -> f64 {
        self.image_factor
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) {
        self.max_iterations = max_iterations;
    }

    pub fn set_image_factor(&mut self, image_factor: f64) {
        self.image_factor = image_factor;
    }
}
