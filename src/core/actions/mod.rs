pub mod assemble_pixels;
pub mod generate_image;
pub mod map_coordinates;
pub mod par_map;
