use std::ops::{Add, Mul};

// single precision throughout
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f32,
    pub imag: f32,
}

impl Complex {
    #[must_use]
    pub fn new(real: f32, imag: f32) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f32 {
        self.real * self.real + self.imag * self.imag
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}
