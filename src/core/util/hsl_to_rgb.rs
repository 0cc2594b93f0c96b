#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

/// Unclamped colour channels; nominally in `[0, 1]` but lightness outside
/// that range is passed through untouched.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

#[must_use]
pub fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;

    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }

    p
}

#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl {
        hue: h,
        saturation: s,
        lightness: l,
    } = hsl;

    if s == 0.0 {
        return Rgb { r: l, g: l, b: l };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb {
        r: hue_to_rgb(p, q, h + 1.0 / 3.0),
        g: hue_to_rgb(p, q, h),
        b: hue_to_rgb(p, q, h - 1.0 / 3.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_rgb_approx_eq(actual: Rgb, expected: Rgb) {
        assert!(
            (actual.r - expected.r).abs() <= EPSILON
                && (actual.g - expected.g).abs() <= EPSILON
                && (actual.b - expected.b).abs() <= EPSILON,
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }

    fn hsl(hue: f32, saturation: f32, lightness: f32) -> Hsl {
        Hsl {
            hue,
            saturation,
            lightness,
        }
    }

    #[test]
    fn achromatic_when_saturation_is_zero() {
        let rgb = hsl_to_rgb(hsl(0.6, 0.0, 0.3));

        assert_eq!(rgb, Rgb { r: 0.3, g: 0.3, b: 0.3 });
    }

    #[test]
    fn primary_hues() {
        assert_rgb_approx_eq(hsl_to_rgb(hsl(0.0, 1.0, 0.5)), Rgb { r: 1.0, g: 0.0, b: 0.0 });
        assert_rgb_approx_eq(
            hsl_to_rgb(hsl(1.0 / 3.0, 1.0, 0.5)),
            Rgb { r: 0.0, g: 1.0, b: 0.0 },
        );
        assert_rgb_approx_eq(
            hsl_to_rgb(hsl(2.0 / 3.0, 1.0, 0.5)),
            Rgb { r: 0.0, g: 0.0, b: 1.0 },
        );
    }

    #[test]
    fn fractal_palette_midpoint() {
        // hue 0.6, saturation 0.8: q = 0.9, p = 0.1
        let rgb = hsl_to_rgb(hsl(0.6, 0.8, 0.5));

        assert_rgb_approx_eq(rgb, Rgb { r: 0.1, g: 0.42, b: 0.9 });
    }

    #[test]
    fn fractal_palette_extremes() {
        assert_rgb_approx_eq(hsl_to_rgb(hsl(0.6, 0.8, 0.0)), Rgb { r: 0.0, g: 0.0, b: 0.0 });
        assert_rgb_approx_eq(hsl_to_rgb(hsl(0.6, 0.8, 1.0)), Rgb { r: 1.0, g: 1.0, b: 1.0 });
    }

    #[test]
    fn lightness_outside_unit_range_is_not_clamped() {
        let rgb = hsl_to_rgb(hsl(0.6, 0.8, 1.2));

        assert!(rgb.r > 1.0 || rgb.g > 1.0 || rgb.b > 1.0);

        let rgb = hsl_to_rgb(hsl(0.6, 0.8, -0.1));

        assert!(rgb.r < 0.0 || rgb.g < 0.0 || rgb.b < 0.0);
    }

    #[test]
    fn hue_to_rgb_wraps_phase() {
        assert_eq!(hue_to_rgb(0.1, 0.9, -0.5), hue_to_rgb(0.1, 0.9, 0.5));
        assert_eq!(hue_to_rgb(0.1, 0.9, 1.25), hue_to_rgb(0.1, 0.9, 0.25));
    }

    #[test]
    fn hue_to_rgb_segments() {
        assert_eq!(hue_to_rgb(0.0, 1.0, 0.3), 1.0);
        assert_eq!(hue_to_rgb(0.25, 1.0, 0.9), 0.25);
        assert!((hue_to_rgb(0.0, 1.0, 0.1) - 0.6).abs() <= EPSILON);
        assert!((hue_to_rgb(0.0, 1.0, 0.6) - 0.4).abs() <= EPSILON);
    }
}
