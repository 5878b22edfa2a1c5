pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod pixel_size;
pub mod vec2;
pub mod viewport;
