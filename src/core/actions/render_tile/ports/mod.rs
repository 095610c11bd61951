pub mod fractal_algorithm;
pub mod pixel_sink;
