use crate::core::data::pixel_buffer::PixelBuffer;
use std::path::Path;

/// Persists the converged image once the headless host stops ticking.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
