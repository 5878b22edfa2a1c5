/// Output resolution of one rendered frame.
///
/// Carries no positivity invariant: a viewport small enough to round to a
/// zero-pixel axis renders as an empty frame rather than an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of samples in the frame, which is also the length of every
    /// per-frame intermediate array.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
