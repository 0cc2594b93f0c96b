mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::controllers::export::export_controller::{ExportController, ExportError};
pub use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, Deadline, NeverCancel,
};
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::render_julia_field::render_julia_field::{
    RenderError, render_julia_field, render_julia_field_cancelable, render_julia_field_serial,
    render_julia_pixel_buffer,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::julia::algorithm::{
    ESCAPE_RADIUS_SQUARED, JuliaAlgorithm, MAX_ITERATIONS, smooth_iteration_count,
};
pub use crate::core::fractals::julia::colour_mapping::maps::smooth_hsl_gradient::JuliaSmoothHslGradient;
pub use crate::core::fractals::julia::julia_config::JuliaConfig;
pub use crate::core::util::hsl_to_rgb::{Hsl, Rgb, hsl_to_rgb, hue_to_rgb};
pub use crate::core::util::pixel_to_field_coords::{
    PixelToFieldCoordsError, cursor_to_julia_parameter, pixel_to_field_coords,
};
pub use crate::input::cli::args::{CliArgs, Dimensions, OutputFormat};
pub use crate::input::cli::commands::run_export::RunExportCommand;
pub use crate::input::cli::errors::CliError;
pub use crate::presenters::file::png::PngFilePresenter;
pub use crate::presenters::file::ppm::PpmFilePresenter;
