pub mod hsl_to_rgb;
pub mod pixel_to_field_coords;
