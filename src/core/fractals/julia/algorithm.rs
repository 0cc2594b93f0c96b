use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_field_coords::{
    PixelToFieldCoordsError, pixel_to_field_coords,
};
use std::f32::consts::LN_2;
use std::ops::ControlFlow;

pub const MAX_ITERATIONS: u32 = 128;
pub const ESCAPE_RADIUS_SQUARED: f32 = 4.0;

/// Escape-time Julia iteration over a height-normalised field.
///
/// `compute` yields the smooth (fractional) iteration count at which a
/// pixel's orbit escaped, or `None` if it stayed bounded for
/// [`MAX_ITERATIONS`] steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    pixel_rect: PixelRect,
    c: Complex,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Success = Option<f32>;
    type Failure = PixelToFieldCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let z0 = pixel_to_field_coords(pixel, self.pixel_rect)?;

        Ok(self.escape(z0))
    }
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, c: Complex) -> Self {
        Self { pixel_rect, c }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }

    /// Iterates `z ← z² + c` from `z0`. The step comes before the escape test,
    /// so an orbit leaving the radius on its first step escapes at 0.
    #[must_use]
    pub fn escape(&self, z0: Complex) -> Option<f32> {
        let escape = (0..MAX_ITERATIONS).try_fold(z0, |z, iteration| {
            let z = z * z + self.c;

            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                ControlFlow::Break((iteration, z))
            } else {
                ControlFlow::Continue(z)
            }
        });

        match escape {
            ControlFlow::Break((iteration, z)) => Some(smooth_iteration_count(iteration, z)),
            ControlFlow::Continue(_) => None,
        }
    }
}

/// Continuous iteration count `i + 1 - log2(log2|z|)`, removing the banding
/// of the integer escape step.
#[must_use]
pub fn smooth_iteration_count(iteration: u32, z: Complex) -> f32 {
    let log_zn = z.magnitude_squared().ln() / 2.0;
    let nu = (log_zn / LN_2).ln() / LN_2;

    iteration as f32 + 1.0 - nu
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algorithm(width: u32, height: u32, c: Complex) -> JuliaAlgorithm {
        JuliaAlgorithm::new(PixelRect::from_size(width, height).unwrap(), c)
    }

    #[test]
    fn origin_with_zero_parameter_never_escapes() {
        let algorithm = algorithm(10, 10, Complex::new(0.0, 0.0));

        assert_eq!(algorithm.escape(Complex::new(0.0, 0.0)), None);
    }

    #[test]
    fn unit_disc_is_bounded_for_zero_parameter() {
        let algorithm = algorithm(10, 10, Complex::new(0.0, 0.0));

        assert_eq!(algorithm.escape(Complex::new(0.7, -0.7)), None);
    }

    #[test]
    fn far_point_escapes_on_first_step() {
        let algorithm = algorithm(10, 10, Complex::new(0.0, 0.0));

        // z1 = 9, so i = 0 and the smooth count is 1 - log2(log2(9))
        let smooth = algorithm.escape(Complex::new(3.0, 0.0)).unwrap();
        let expected = 1.0 - 9.0_f32.log2().log2();

        assert!((smooth - expected).abs() < 1e-5, "smooth={}", smooth);
    }

    #[test]
    fn smooth_count_is_continuous_at_escape_radius() {
        // just past |z| = 2 the correction term is ~0, giving i + 1
        let smooth = smooth_iteration_count(5, Complex::new(2.0001, 0.0));

        assert!((smooth - 6.0).abs() < 1e-3, "smooth={}", smooth);
    }

    #[test]
    fn smooth_count_decreases_with_overshoot() {
        let near = smooth_iteration_count(10, Complex::new(2.5, 0.0));
        let far = smooth_iteration_count(10, Complex::new(40.0, 0.0));

        assert!(far < near);
    }

    #[test]
    fn escape_count_stays_below_budget() {
        let algorithm = algorithm(64, 64, Complex::new(-0.8, 0.156));
        let pixel_rect = algorithm.pixel_rect();

        for y in 0..64 {
            for x in 0..64 {
                if let Some(smooth) = algorithm.compute(Point { x, y }).unwrap() {
                    assert!(smooth <= MAX_ITERATIONS as f32 + 1.0);
                    assert!(pixel_rect.contains_point(Point { x, y }));
                }
            }
        }
    }

    #[test]
    fn compute_maps_pixel_before_iterating() {
        let algorithm = algorithm(4, 4, Complex::new(-0.8, 0.156));

        // pixel (0, 0) starts at z0 = (-0.5, -0.5)
        assert_eq!(
            algorithm.compute(Point { x: 0, y: 0 }),
            Ok(algorithm.escape(Complex::new(-0.5, -0.5)))
        );
    }

    #[test]
    fn compute_returns_error_for_pixel_outside_pixel_rect() {
        let algorithm = algorithm(10, 10, Complex::new(-0.8, 0.156));
        let point = Point { x: 11, y: 0 };

        assert_eq!(
            algorithm.compute(point),
            Err(PixelToFieldCoordsError::PointOutsideRect {
                point,
                pixel_rect: algorithm.pixel_rect()
            })
        );
    }
}
