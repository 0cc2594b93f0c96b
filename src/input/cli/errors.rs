use std::error::Error;
use std::fmt;

use crate::controllers::export::export_controller::ExportError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::util::pixel_to_field_coords::PixelToFieldCoordsError;

#[derive(Debug)]
pub enum CliError {
    Window(PixelRectError),
    Cursor(PixelToFieldCoordsError),
    ThreadPool(rayon::ThreadPoolBuildError),
    Export(ExportError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window(err) => write!(f, "invalid window: {}", err),
            Self::Cursor(err) => write!(f, "invalid cursor: {}", err),
            Self::ThreadPool(err) => write!(f, "could not start worker threads: {}", err),
            Self::Export(err) => write!(f, "{}", err),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Window(err) => Some(err),
            Self::Cursor(err) => Some(err),
            Self::ThreadPool(err) => Some(err),
            Self::Export(err) => Some(err),
        }
    }
}

impl From<PixelRectError> for CliError {
    fn from(err: PixelRectError) -> Self {
        Self::Window(err)
    }
}

impl From<PixelToFieldCoordsError> for CliError {
    fn from(err: PixelToFieldCoordsError) -> Self {
        Self::Cursor(err)
    }
}

impl From<rayon::ThreadPoolBuildError> for CliError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}

impl From<ExportError> for CliError {
    fn from(err: ExportError) -> Self {
        Self::Export(err)
    }
}
