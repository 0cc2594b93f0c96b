use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ExtendedColorType, ImageFormat};
use std::path::Path;

/// 8-bit RGB PNG, the screenshot format.
#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        image::save_buffer_with_format(
            filepath,
            buffer.buffer(),
            buffer.pixel_rect().width(),
            buffer.pixel_rect().height(),
            ExtendedColorType::Rgb8,
            ImageFormat::Png,
        )?;

        Ok(())
    }

    fn format_name(&self) -> &'static str {
        "PNG"
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
