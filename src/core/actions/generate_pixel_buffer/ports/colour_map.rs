use crate::core::data::colour::Colour;
use std::error::Error;

pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, Box<dyn Error + Send + Sync>>;

    fn display_name(&self) -> &str;
}
