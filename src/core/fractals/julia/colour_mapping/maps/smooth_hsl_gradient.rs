use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::julia::algorithm::MAX_ITERATIONS;
use crate::core::util::hsl_to_rgb::{Hsl, hsl_to_rgb};
use std::error::Error;

pub const HUE: f32 = 0.6;
pub const SATURATION: f32 = 0.8;

/// Blue gradient driven by lightness: the smooth iteration count divided by
/// the iteration budget becomes the HSL lightness at a fixed hue and
/// saturation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JuliaSmoothHslGradient;

impl ColourMap<f32> for JuliaSmoothHslGradient {
    fn map(&self, smooth_iterations: f32) -> Result<Colour, Box<dyn Error + Send + Sync>> {
        // lightness is deliberately left unclamped; only the channels are
        let lightness = smooth_iterations / MAX_ITERATIONS as f32;
        let rgb = hsl_to_rgb(Hsl {
            hue: HUE,
            saturation: SATURATION,
            lightness,
        });

        Ok(Colour {
            r: channel_to_byte(rgb.r),
            g: channel_to_byte(rgb.g),
            b: channel_to_byte(rgb.b),
        })
    }

    fn display_name(&self) -> &str {
        "Smooth HSL gradient"
    }
}

impl JuliaSmoothHslGradient {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

// truncates like a float-to-byte cast; NaN lands on 0
fn channel_to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_zero_is_black() {
        let colour = JuliaSmoothHslGradient::new().map(0.0).unwrap();

        assert_eq!(colour, Colour::BLACK);
    }

    #[test]
    fn test_map_half_budget_is_saturated_blue() {
        // lightness 0.5 -> (0.1, 0.42, 0.9)
        let colour = JuliaSmoothHslGradient::new().map(64.0).unwrap();

        assert_eq!(colour.r, 25);
        assert!(colour.g == 106 || colour.g == 107, "g={}", colour.g);
        assert!(colour.b == 229 || colour.b == 228, "b={}", colour.b);
    }

    #[test]
    fn test_map_full_budget_is_near_white() {
        let colour = JuliaSmoothHslGradient::new().map(128.0).unwrap();

        assert!(colour.r >= 254 && colour.g >= 254 && colour.b >= 254, "{:?}", colour);
    }

    #[test]
    fn test_map_clamps_out_of_range_lightness() {
        let mapper = JuliaSmoothHslGradient::new();

        assert_eq!(mapper.map(-20.0).unwrap(), Colour::BLACK);
        assert_eq!(mapper.map(400.0).unwrap(), Colour { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn test_map_is_blue_dominant_for_escaped_pixels() {
        let mapper = JuliaSmoothHslGradient::new();

        for smooth in [3.3, 16.9, 30.5, 83.9] {
            let colour = mapper.map(smooth).unwrap();
            assert!(colour.b >= colour.g && colour.g >= colour.r, "{:?}", colour);
            assert!(!colour.is_black());
        }
    }

    #[test]
    fn test_channel_to_byte_truncates_and_clamps() {
        assert_eq!(channel_to_byte(0.999), 254);
        assert_eq!(channel_to_byte(1.5), 255);
        assert_eq!(channel_to_byte(-0.5), 0);
        assert_eq!(channel_to_byte(f32::NAN), 0);
    }
}
