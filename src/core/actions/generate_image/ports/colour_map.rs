use crate::core::data::colour::Colour;

/// Maps one escape-time value (integer counts arrive widened to f64, smooth
/// counts arrive as-is) to an output colour.
///
/// Implementations must be total: any degenerate numeric case is resolved to
/// a concrete colour here rather than propagated into the pixel buffer. They
/// are applied elementwise in parallel, so they must also be `Sync`.
pub trait ColourMap: Sync {
    fn map(&self, iteration_value: f64) -> Colour;

    fn display_name(&self) -> &str;
}
