use crate::core::data::colour::Colour;

/// Packs colours into interleaved RGBA bytes, four per colour, preserving
/// input order exactly.
///
/// This stage is strictly sequential: the raster position of a pixel is
/// encoded purely by its byte offset, so the pack order is the output
/// format.
#[must_use]
pub fn assemble_pixels(colours: &[Colour]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(colours.len() * 4);

    for colour in colours {
        buffer.push(colour.r);
        buffer.push(colour.g);
        buffer.push(colour.b);
        buffer.push(colour.a);
    }

    buffer
}
