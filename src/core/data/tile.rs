/// Axis-aligned rectangle of the surface, `[x1, x2) x [y1, y2)`.
///
/// Edges may be fractional. Neighbouring tiles share exactly the same edge value, so
/// rounding both edges of every tile with [`Tile::pixel_bounds`] still partitions the
/// integer pixel grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tile {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Integer pixel span of a tile, half-open on the right and bottom.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelBounds {
    #[must_use]
    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }
}

impl Tile {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    #[must_use]
    pub fn pixel_bounds(&self) -> PixelBounds {
        PixelBounds {
            left: self.x1.round() as i32,
            top: self.y1.round() as i32,
            right: self.x2.round() as i32,
            bottom: self.y2.round() as i32,
        }
    }
}
