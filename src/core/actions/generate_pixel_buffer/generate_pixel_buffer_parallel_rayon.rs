use rayon::prelude::*;

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, colour_row,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::pixel_rect::PixelRect;

/// Allocates the output buffer up front, then colours its rows in parallel
/// on the current rayon pool, each task writing only its own row.
///
/// No per-pixel intermediate is kept, so a rect too large to hold fails with
/// [`GeneratePixelBufferError::PixelBuffer`] before any pixel is computed.
/// Once `cancel` fires the remaining rows are abandoned and the buffer is
/// dropped.
pub fn generate_pixel_buffer_parallel_rayon<Alg, T, CMap, C>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    mapper: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError<Alg::Failure>>
where
    Alg: FractalAlgorithm<Success = Option<T>> + Sync,
    Alg::Failure: Send,
    CMap: ColourMap<T> + Sync,
    C: CancelToken,
{
    let mut buffer = PixelBuffer::try_new(pixel_rect)?;
    let row_bytes = pixel_rect.width() as usize * BYTES_PER_PIXEL;
    let columns = pixel_rect.top_left().x..=pixel_rect.bottom_right().x;
    let top = pixel_rect.top_left().y;

    buffer
        .buffer_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .try_for_each(|(row_index, row)| {
            let y = top + row_index as i32;

            colour_row(row, y, columns.clone(), algorithm, mapper, cancel)
        })?;

    Ok(buffer)
}
