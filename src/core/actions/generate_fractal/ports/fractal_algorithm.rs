use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel fractal evaluation. Implementations must not depend on the order
/// in which pixels are computed, so generators are free to run them in
/// parallel.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
