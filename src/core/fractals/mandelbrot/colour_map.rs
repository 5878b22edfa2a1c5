use crate::core::actions::generate_image::ports::colour_map::ColourMap;
use crate::core::actions::par_map::par_map;
use crate::core::data::colour::Colour;
use std::f64::consts::FRAC_PI_2;

/// Greyscale ramp over the iteration fraction:
/// `intensity = sin(π/2 * value / max_iterations) * 255` on all three
/// channels, alpha opaque. Black at 0, white at the cap, monotonically
/// increasing in between.
#[derive(Debug, Copy, Clone)]
pub struct SineGreyscale {
    max_iterations: u32,
}

impl SineGreyscale {
    /// Colour emitted when the iteration cap is zero and the ramp fraction
    /// would be 0/0.
    pub const ZERO_CAP_FALLBACK: Colour = Colour::OPAQUE_BLACK;

    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for SineGreyscale {
    fn map(&self, iteration_value: f64) -> Colour {
        if self.max_iterations == 0 {
            return Self::ZERO_CAP_FALLBACK;
        }

        let fraction = iteration_value / f64::from(self.max_iterations);
        let intensity = ((FRAC_PI_2 * fraction).sin() * 255.0) as u8;

        Colour::opaque(intensity, intensity, intensity)
    }

    fn display_name(&self) -> &str {
        "Sine greyscale"
    }
}

/// Elementwise colour mapping over an iteration-value array; output index
/// matches input index. Both the discrete path (counts widened to f64) and
/// the smooth path go through here.
#[must_use]
pub fn calculate_colours<CMap: ColourMap>(values: &[f64], mapper: &CMap) -> Vec<Colour> {
    par_map(values, |value| mapper.map(*value))
}
