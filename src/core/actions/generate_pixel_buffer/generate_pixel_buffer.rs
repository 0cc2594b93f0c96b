use std::error::Error;
use std::fmt;
use std::ops::RangeInclusive;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

#[derive(Debug)]
pub enum GeneratePixelBufferError<E> {
    /// The operation was cancelled before completion.
    Cancelled(Cancelled),
    /// The fractal algorithm reported a failure.
    Algorithm(E),
    /// A colour mapping error occurred.
    ColourMap(Box<dyn Error + Send + Sync>),
    /// The output buffer could not be allocated.
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for GeneratePixelBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GeneratePixelBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Algorithm(err) => Some(err),
            Self::ColourMap(err) => Some(&**err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl<E> From<PixelBufferError> for GeneratePixelBufferError<E> {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Evaluates and colours one row of pixels straight into its `width * 3`
/// output bytes.
///
/// `None` values are skipped and keep whatever the row already holds.
/// `cancel` is polled at the row start and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels after it.
pub fn colour_row<Alg, T, CMap, C>(
    row: &mut [u8],
    y: i32,
    columns: RangeInclusive<i32>,
    algorithm: &Alg,
    mapper: &CMap,
    cancel: &C,
) -> Result<(), GeneratePixelBufferError<Alg::Failure>>
where
    Alg: FractalAlgorithm<Success = Option<T>>,
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let pixels = row.chunks_exact_mut(BYTES_PER_PIXEL).zip(columns);

    for (column, (rgb, x)) in pixels.enumerate() {
        if column % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferError::Cancelled(Cancelled));
        }

        let value = algorithm
            .compute(Point { x, y })
            .map_err(GeneratePixelBufferError::Algorithm)?;

        let Some(value) = value else {
            continue;
        };

        let colour = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        rgb.copy_from_slice(&[colour.r, colour.g, colour.b]);
    }

    Ok(())
}

/// Sequential reference: allocates a zeroed buffer first, then colours it
/// one row at a time, top to bottom.
pub fn generate_pixel_buffer_serial<Alg, T, CMap, C>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    mapper: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError<Alg::Failure>>
where
    Alg: FractalAlgorithm<Success = Option<T>>,
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let mut buffer = PixelBuffer::try_new(pixel_rect)?;
    let row_bytes = pixel_rect.width() as usize * BYTES_PER_PIXEL;
    let columns = pixel_rect.top_left().x..=pixel_rect.bottom_right().x;
    let rows = pixel_rect.top_left().y..=pixel_rect.bottom_right().y;

    for (row, y) in buffer.buffer_mut().chunks_exact_mut(row_bytes).zip(rows) {
        colour_row(row, y, columns.clone(), algorithm, mapper, cancel)?;
    }

    Ok(buffer)
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::colour::Colour;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_colours_row_major_and_leaves_unescaped_black() {
        let pixel_rect = PixelRect::from_size(3, 2).unwrap();
        let mapper = RedChannel::default();

        let buffer =
            generate_pixel_buffer_serial(pixel_rect, &Coordinates, &mapper, &NeverCancel).unwrap();

        assert_eq!(
            buffer.buffer(),
            &vec![0, 0, 0, 1, 1, 2, 2, 1, 2, 16, 1, 2, 0, 0, 0, 18, 1, 2]
        );
        assert_eq!(mapper.calls.load(Ordering::Relaxed), 4);
    }

    #[test]
    fn test_respects_offset_rect() {
        let pixel_rect = PixelRect::new(Point { x: 2, y: 1 }, Point { x: 3, y: 1 }).unwrap();

        let buffer = generate_pixel_buffer_serial(
            pixel_rect,
            &Coordinates,
            &RedChannel::default(),
            &NeverCancel,
        )
        .unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 1 }), Ok(Colour { r: 18, g: 1, b: 2 }));
        assert_eq!(buffer.pixel(Point { x: 3, y: 1 }), Ok(Colour { r: 19, g: 1, b: 2 }));
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let pixel_rect = PixelRect::from_size(3, 3).unwrap();

        let result = generate_pixel_buffer_serial(
            pixel_rect,
            &DiagonalOnly,
            &RedChannel::default(),
            &NeverCancel,
        );

        assert!(matches!(result, Err(GeneratePixelBufferError::Algorithm(OffDiagonal))));
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let pixel_rect = PixelRect::from_size(2, 2).unwrap();

        let result =
            generate_pixel_buffer_serial(pixel_rect, &Coordinates, &FailingColourMap, &NeverCancel);

        assert!(matches!(result, Err(GeneratePixelBufferError::ColourMap(_))));
    }

    #[test]
    fn test_oversized_rect_fails_before_computing() {
        let pixel_rect = PixelRect::from_size(i32::MAX as u32, i32::MAX as u32).unwrap();
        let mapper = RedChannel::default();

        let result = generate_pixel_buffer_serial(pixel_rect, &Coordinates, &mapper, &NeverCancel);

        assert!(matches!(
            result,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::AllocationFailed { .. }
            ))
        ));
        assert_eq!(mapper.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_returns_cancelled_when_token_is_cancelled() {
        let pixel_rect = PixelRect::from_size(3, 2).unwrap();
        let mapper = RedChannel::default();

        let result = generate_pixel_buffer_serial(pixel_rect, &Coordinates, &mapper, &|| true);

        assert!(matches!(result, Err(GeneratePixelBufferError::Cancelled(_))));
    }

    #[test]
    fn test_colour_row_polls_every_interval() {
        // columns 0, 1024 and 2048
        let mut row = vec![0; 3000 * BYTES_PER_PIXEL];
        let polls = AtomicUsize::new(0);
        let token = counting_token(&polls);

        colour_row(&mut row, 0, 0..=2999, &Coordinates, &RedChannel::default(), &token).unwrap();

        assert_eq!(polls.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_error_display() {
        let cancelled = GeneratePixelBufferError::<OffDiagonal>::Cancelled(Cancelled);
        let colour_map = GeneratePixelBufferError::<OffDiagonal>::ColourMap("no colour".into());

        assert_eq!(cancelled.to_string(), "operation cancelled");
        assert_eq!(colour_map.to_string(), "colour map error: no colour");
        assert_eq!(
            GeneratePixelBufferError::Algorithm(OffDiagonal).to_string(),
            "algorithm error: off the diagonal"
        );
    }
}
