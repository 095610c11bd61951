use crate::core::data::point::Point;

pub trait FractalAlgorithm {
    /// Normalized intensity in `[0, 1)` for one pixel.
    fn compute(&self, pixel: Point) -> f64;
}
