use std::ops::{Add, Mul};

use crate::core::util::real::Real;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex<R: Real> {
    pub real: R,
    pub imag: R,
}

impl<R: Real> Complex<R> {
    #[must_use]
    pub fn new(real: R, imag: R) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> R {
        self.real * self.real + self.imag * self.imag
    }
}

impl<R: Real> Add for Complex<R> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl<R: Real> Mul for Complex<R> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}
