use crate::core::actions::render_tile::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::settings::FrameSettings;

/// Escape-time evaluator for one frame.
///
/// Exponents from the settings are converted to linear values once, at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    linear_scale: f64,
    linear_tolerance: f64,
    center_x: f64,
    center_y: f64,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(frame: &FrameSettings) -> Self {
        Self {
            linear_scale: 10f64.powf(frame.scale),
            linear_tolerance: 10f64.powf(frame.tolerance),
            center_x: frame.center_x,
            center_y: frame.center_y,
            max_iterations: frame.iterations.get(),
        }
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        Complex::new(
            (f64::from(pixel.x) - self.center_x) * self.linear_scale,
            (f64::from(pixel.y) - self.center_y) * self.linear_scale,
        )
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn compute(&self, pixel: Point) -> f64 {
        let c = self.pixel_to_complex(pixel);
        let mut z = Complex::ZERO;

        for step in 0..self.max_iterations {
            z *= z;
            z += c;

            // stays-below test, not the usual |z|² > 4 divergence test
            if z.magnitude_squared() < self.linear_tolerance {
                return f64::from(step) / f64::from(self.max_iterations);
            }
        }

        0.0
    }
}
