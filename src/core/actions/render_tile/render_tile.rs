use crate::core::actions::render_tile::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_tile::ports::pixel_sink::PixelSink;
use crate::core::data::point::Point;
use crate::core::data::tile::Tile;
use std::num::NonZeroU32;

/// Maps a normalized intensity to a grey level, `floor(fraction * 255)`.
#[must_use]
pub fn fraction_to_grey(fraction: f64) -> u8 {
    (fraction * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Samples the tile every `detail` pixels in both directions and paints one
/// `detail x detail` block per sample, anchored at the sample.
///
/// Returns the number of samples painted.
pub fn render_tile<A, S>(tile: Tile, detail: NonZeroU32, algorithm: &A, sink: &mut S) -> usize
where
    A: FractalAlgorithm + ?Sized,
    S: PixelSink + ?Sized,
{
    let bounds = tile.pixel_bounds();
    let step = detail.get() as usize;
    let mut samples = 0;

    for x in (bounds.left..bounds.right).step_by(step) {
        for y in (bounds.top..bounds.bottom).step_by(step) {
            let fraction = algorithm.compute(Point { x, y });

            sink.paint_block(x, y, detail.get(), detail.get(), fraction_to_grey(fraction));
            samples += 1;
        }
    }

    samples
}
