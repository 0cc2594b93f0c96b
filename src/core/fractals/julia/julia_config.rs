use crate::core::data::complex::Complex;

// same as the viewer window
const DEFAULT_WIDTH: u32 = 1000;
const DEFAULT_HEIGHT: u32 = 1000;

fn default_parameter() -> Complex {
    Complex {
        real: -0.8,
        imag: 0.156,
    }
}

/// What to render: the Julia parameter and the export resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaConfig {
    pub c: Complex,
    pub width: u32,
    pub height: u32,
}

impl Default for JuliaConfig {
    fn default() -> Self {
        Self {
            c: default_parameter(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}
