/// Destination for rendered blocks, typically the display surface.
///
/// Coordinates are surface pixels; implementations clip blocks to their own bounds.
pub trait PixelSink {
    fn paint_block(&mut self, x: i32, y: i32, width: u32, height: u32, grey: u8);
}
