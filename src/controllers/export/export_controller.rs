use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_julia_field::render_julia_field::{
    RenderError, render_julia_pixel_buffer,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::julia::julia_config::JuliaConfig;

#[derive(Debug)]
pub enum ExportError {
    Render(RenderError),
    Present(PresentError),
    NothingRendered,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::Present(err) => write!(f, "export failed: {}", err),
            Self::NothingRendered => write!(f, "nothing has been rendered yet"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Present(err) => Some(err),
            Self::NothingRendered => None,
        }
    }
}

impl From<RenderError> for ExportError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<PresentError> for ExportError {
    fn from(err: PresentError) -> Self {
        Self::Present(err)
    }
}

/// Renders a configured field once and writes it through a file presenter.
pub struct ExportController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> ExportController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate<C: CancelToken>(
        &mut self,
        config: &JuliaConfig,
        cancel: &C,
    ) -> Result<(), ExportError> {
        let pixel_rect = PixelRect::from_size(config.width, config.height).map_err(|_| {
            RenderError::InvalidDimensions {
                width: config.width,
                height: config.height,
            }
        })?;

        info!("Rendering Julia field...");
        info!("Image size: {}x{}", config.width, config.height);
        info!("Parameter:  c = {} + {}i", config.c.real, config.c.imag);

        let start = Instant::now();
        let buffer = render_julia_pixel_buffer(config.c, pixel_rect, cancel)?;

        info!("Duration:   {:?}", start.elapsed());

        self.buffer = Some(buffer);

        Ok(())
    }

    pub fn write(&self, filepath: &Path) -> Result<(), ExportError> {
        let buffer = self.buffer.as_ref().ok_or(ExportError::NothingRendered)?;

        self.presenter.present(buffer, filepath)?;
        info!("Saved {} to {}", self.presenter.format_name(), filepath.display());

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }
}
