use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer_serial,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer_parallel_rayon::generate_pixel_buffer_parallel_rayon;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::julia::colour_mapping::maps::smooth_hsl_gradient::JuliaSmoothHslGradient;
use crate::core::util::pixel_to_field_coords::PixelToFieldCoordsError;
use log::debug;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    InvalidDimensions { width: u32, height: u32 },
    AllocationFailed { width: u32, height: u32 },
    Cancelled(Cancelled),
    Field(PixelToFieldCoordsError),
    ColourMap(Box<dyn Error + Send + Sync>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid field dimensions {}x{}", width, height)
            }
            Self::AllocationFailed { width, height } => {
                write!(f, "could not allocate a {}x{} RGB buffer", width, height)
            }
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Field(err) => write!(f, "field mapping error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDimensions { .. } | Self::AllocationFailed { .. } => None,
            Self::Cancelled(c) => Some(c),
            Self::Field(err) => Some(err),
            Self::ColourMap(err) => Some(&**err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<GeneratePixelBufferError<PixelToFieldCoordsError>> for RenderError {
    fn from(err: GeneratePixelBufferError<PixelToFieldCoordsError>) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferError::Algorithm(err) => Self::Field(err),
            GeneratePixelBufferError::ColourMap(err) => Self::ColourMap(err),
            GeneratePixelBufferError::PixelBuffer(PixelBufferError::AllocationFailed {
                pixel_rect,
            }) => Self::AllocationFailed {
                width: pixel_rect.width(),
                height: pixel_rect.height(),
            },
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

fn field_rect(width: u32, height: u32) -> Result<PixelRect, RenderError> {
    PixelRect::from_size(width, height).map_err(|PixelRectError::InvalidSize { .. }| {
        RenderError::InvalidDimensions { width, height }
    })
}

/// Renders a smoothly coloured Julia field for parameter `c` as packed RGB
/// bytes, `width * height * 3` long, rows in parallel.
pub fn render_julia_field(
    c: Complex,
    width: u32,
    height: u32,
) -> Result<PixelBufferData, RenderError> {
    render_julia_field_cancelable(c, width, height, &NeverCancel)
}

/// Like [`render_julia_field`] but polls `cancel` at each row start and
/// periodically within rows, returning [`RenderError::Cancelled`] and no
/// buffer if it fires.
pub fn render_julia_field_cancelable<C: CancelToken>(
    c: Complex,
    width: u32,
    height: u32,
    cancel: &C,
) -> Result<PixelBufferData, RenderError> {
    let pixel_rect = field_rect(width, height)?;

    render_julia_pixel_buffer(c, pixel_rect, cancel).map(PixelBuffer::into_data)
}

/// Sequential reference for [`render_julia_field`]; produces identical bytes.
pub fn render_julia_field_serial(
    c: Complex,
    width: u32,
    height: u32,
) -> Result<PixelBufferData, RenderError> {
    let pixel_rect = field_rect(width, height)?;
    let algorithm = JuliaAlgorithm::new(pixel_rect, c);

    let buffer = generate_pixel_buffer_serial(
        pixel_rect,
        &algorithm,
        &JuliaSmoothHslGradient::new(),
        &NeverCancel,
    )?;

    Ok(buffer.into_data())
}

/// Renders into the dimensioned [`PixelBuffer`] that file presenters consume.
///
/// The output is allocated before any pixel is computed and rows are coloured
/// in place, so an unallocatable field fails with
/// [`RenderError::AllocationFailed`] instead of aborting.
pub fn render_julia_pixel_buffer<C: CancelToken>(
    c: Complex,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, RenderError> {
    debug!(
        "rendering {}x{} julia field for c = {} + {}i",
        pixel_rect.width(),
        pixel_rect.height(),
        c.real,
        c.imag
    );

    let algorithm = JuliaAlgorithm::new(pixel_rect, c);
    let buffer = generate_pixel_buffer_parallel_rayon(
        pixel_rect,
        &algorithm,
        &JuliaSmoothHslGradient::new(),
        cancel,
    )?;

    let lit = buffer
        .buffer()
        .chunks_exact(3)
        .filter(|rgb| rgb.iter().any(|&byte| byte != 0))
        .count();
    debug!("{} of {} pixels coloured", lit, pixel_rect.size());

    Ok(buffer)
}
