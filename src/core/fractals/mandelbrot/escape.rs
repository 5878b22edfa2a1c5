use crate::core::actions::par_map::par_map;
use crate::core::data::complex::Complex;
use std::f64::consts::LN_2;

/// Bounded escape test for the quadratic map `z ← z² + c`, seeded with
/// `z₀ = c`.
///
/// Counts map applications while the iterate stays inside `|z| < 2` and the
/// count stays below the cap. Total: at most `max_iterations` steps run.
/// Samples already outside the disc return 0 without iterating; samples
/// whose orbit never escapes return exactly `max_iterations`.
#[must_use]
pub fn escape_iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;
    let mut iterations = 0;

    while iterations < max_iterations && z.magnitude_squared() < 4.0 {
        z = z * z + c;
        iterations += 1;
    }

    iterations
}

/// Smoothed escape count, reducing colour banding at integer iteration
/// boundaries.
///
/// The correction term uses the magnitude of the *initial* sample, not of
/// the iterate at the moment of escape. That departs from the conventional
/// smooth-colouring formula and is deliberate (see DESIGN.md). For `c = 0`
/// the term diverges and the result is `-inf`, which the colour stage
/// collapses to black.
#[must_use]
pub fn continuous_iteration(c: Complex, max_iterations: u32) -> f64 {
    f64::from(escape_iterations(c, max_iterations)) + 1.0 - (LN_2 / c.magnitude()) / LN_2
}

/// Elementwise [`escape_iterations`] over a sample array; output index
/// matches input index.
#[must_use]
pub fn calculate_iterations(samples: &[Complex], max_iterations: u32) -> Vec<u32> {
    par_map(samples, |c| escape_iterations(*c, max_iterations))
}

/// Elementwise [`continuous_iteration`] over a sample array; output index
/// matches input index.
#[must_use]
pub fn calculate_continuous_iterations(samples: &[Complex], max_iterations: u32) -> Vec<f64> {
    par_map(samples, |c| continuous_iteration(*c, max_iterations))
}
