use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToFieldCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToFieldCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToFieldCoordsError {}

/// Maps a pixel to centred field coordinates: `(p - 0.5 * size) / height`.
///
/// Both axes are divided by the height, so the vertical extent always spans
/// `[-0.5, 0.5)` and the horizontal extent follows the aspect ratio.
pub fn pixel_to_field_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
) -> Result<Complex, PixelToFieldCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToFieldCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_pixel_x = (pixel_position.x as i64 - pixel_rect.top_left().x as i64) as f32;
    let relative_pixel_y = (pixel_position.y as i64 - pixel_rect.top_left().y as i64) as f32;
    let width = pixel_rect.width() as f32;
    let height = pixel_rect.height() as f32;

    Ok(Complex {
        real: (relative_pixel_x - 0.5 * width) / height,
        imag: (relative_pixel_y - 0.5 * height) / height,
    })
}

/// Derives a Julia parameter from a cursor position inside a window, using
/// the same centred, height-normalised mapping as the field itself.
pub fn cursor_to_julia_parameter(
    cursor: Point,
    window: PixelRect,
) -> Result<Complex, PixelToFieldCoordsError> {
    pixel_to_field_coords(cursor, window)
}
