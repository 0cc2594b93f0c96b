pub mod render_julia_field;
