use std::ops::{Add, AddAssign, Mul, MulAssign};

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
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

impl AddAssign for Complex {
    fn add_assign(&mut self, other: Self) {
        self.real += other.real;
        self.imag += other.imag;
    }
}

impl MulAssign for Complex {
    // both components are read before either is written, so `z *= z` is safe
    fn mul_assign(&mut self, other: Self) {
        let real = self.real * other.real - self.imag * other.imag;
        let imag = self.real * other.imag + self.imag * other.real;

        self.real = real;
        self.imag = imag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, -4.0);

        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_zero() {
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
        assert_eq!(Complex::ZERO, Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);

        assert_eq!(result, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);

        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_mul_by_zero() {
        let result = Complex::new(5.0, 3.0) * Complex::ZERO;

        assert_eq!(result, Complex::ZERO);
    }

    #[test]
    fn test_add_assign_matches_add() {
        let a = Complex::new(1.5, -2.0);
        let b = Complex::new(0.25, 4.0);
        let mut accumulated = a;
        accumulated += b;

        assert_eq!(accumulated, a + b);
    }

    #[test]
    fn test_mul_assign_matches_mul() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);
        let mut accumulated = a;
        accumulated *= b;

        assert_eq!(accumulated, a * b);
    }

    #[test]
    fn test_square_in_place_does_not_use_partial_update() {
        // (2 + 3i)² = 4 + 12i + 9i² = -5 + 12i
        let mut z = Complex::new(2.0, 3.0);
        z *= z;

        assert_eq!(z, Complex::new(-5.0, 12.0));
    }
}
