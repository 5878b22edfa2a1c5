use crate::core::data::complex::Complex;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::viewport::Viewport;

/// Maps the pixel grid onto the complex plane.
///
/// The sample for pixel `(n, m)` is
/// `position + offset + (n * step.x, m * step.y)` with
/// `step = (scale.x * size.x / width, scale.y * size.y / height)`; the
/// result is a flat row-major array of length `width * height` with the
/// top-left pixel first. This affine map is the only coupling between pixel
/// space and the plane.
///
/// Samples are computed from the pixel indices directly rather than by
/// accumulating `step`, so each sample is the exact affine image of its
/// index.
#[must_use]
pub fn complex_samples(viewport: &Viewport, pixel_size: PixelSize) -> Vec<Complex> {
    let size = viewport.size();
    let scale = viewport.scale();
    let origin = viewport.position() + viewport.offset();

    let step_x = scale.x * size.x / f64::from(pixel_size.width);
    let step_y = scale.y * size.y / f64::from(pixel_size.height);

    let mut samples = Vec::with_capacity(pixel_size.sample_count());

    for m in 0..pixel_size.height {
        for n in 0..pixel_size.width {
            samples.push(Complex {
                real: origin.x + f64::from(n) * step_x,
                imag: origin.y + f64::from(m) * step_y,
            });
        }
    }

    samples
}
