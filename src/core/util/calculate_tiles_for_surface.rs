use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::tile::Tile;
use std::num::NonZeroU32;

/// Target edge length of a tile in pixels.
pub const TILE_EDGE: NonZeroU32 = NonZeroU32::new(300).unwrap();

/// Splits the surface into `ceil(W / edge) x ceil(H / edge)` equally sized tiles,
/// enumerated column by column.
pub fn calculate_tiles_for_surface(size: SurfaceSize, tile_edge: NonZeroU32) -> Vec<Tile> {
    let num_x = size.width().div_ceil(tile_edge.get());
    let num_y = size.height().div_ceil(tile_edge.get());

    let width = f64::from(size.width());
    let height = f64::from(size.height());

    // edges come from the same expression on both sides of a boundary, so tiles never
    // overlap or leave gaps and the last edge lands exactly on the surface size
    let edge = |index: u32, extent: f64, count: u32| extent * f64::from(index) / f64::from(count);

    let mut tiles = Vec::with_capacity((num_x * num_y) as usize);

    for x in 0..num_x {
        for y in 0..num_y {
            tiles.push(Tile {
                x1: edge(x, width, num_x),
                y1: edge(y, height, num_y),
                x2: edge(x + 1, width, num_x),
                y2: edge(y + 1, height, num_y),
            });
        }
    }

    tiles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles_for(width: u32, height: u32) -> Vec<Tile> {
        calculate_tiles_for_surface(SurfaceSize::new(width, height).unwrap(), TILE_EDGE)
    }

    #[test]
    fn test_600_by_600_gives_four_300_pixel_tiles() {
        let tiles = tiles_for(600, 600);

        assert_eq!(tiles.len(), 4);
        assert!(tiles.iter().all(|t| t.width() == 300.0 && t.height() == 300.0));
    }

    #[test]
    fn test_tile_counts_round_up() {
        assert_eq!(tiles_for(1, 1).len(), 1);
        assert_eq!(tiles_for(300, 300).len(), 1);
        assert_eq!(tiles_for(301, 300).len(), 2);
        assert_eq!(tiles_for(1920, 1080).len(), 7 * 4);
    }

    #[test]
    fn test_tiles_are_column_major() {
        let tiles = tiles_for(900, 600);

        let origins: Vec<(f64, f64)> = tiles.iter().map(|t| (t.x1, t.y1)).collect();

        assert_eq!(
            origins,
            vec![
                (0.0, 0.0),
                (0.0, 300.0),
                (300.0, 0.0),
                (300.0, 300.0),
                (600.0, 0.0),
                (600.0, 300.0)
            ]
        );
    }

    #[test]
    fn test_fractional_tile_sizes_are_uniform() {
        let tiles = tiles_for(700, 650);

        // 3 columns of 233.33.. and 3 rows of 216.66..
        assert_eq!(tiles.len(), 9);
        for tile in &tiles {
            assert!((tile.width() - 700.0 / 3.0).abs() < 1e-9);
            assert!((tile.height() - 650.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tiles_exactly_cover_surface() {
        for (width, height) in [(1, 1), (299, 301), (700, 650), (1000, 301), (1921, 1079)] {
            let tiles = tiles_for(width, height);
            let area: f64 = tiles.iter().map(|t| t.width() * t.height()).sum();

            assert!((area - f64::from(width) * f64::from(height)).abs() < 1e-6);
            assert!(tiles.iter().all(|t| t.x1 >= 0.0 && t.y1 >= 0.0));
            assert!(tiles.iter().any(|t| t.x2 == f64::from(width)));
            assert!(tiles.iter().any(|t| t.y2 == f64::from(height)));
        }
    }

    #[test]
    fn test_pixel_bounds_partition_every_pixel_once() {
        for (width, height) in [(1, 1), (299, 301), (700, 650), (1000, 301)] {
            let tiles = tiles_for(width, height);
            let mut hits = vec![0u8; (width * height) as usize];

            for tile in &tiles {
                let bounds = tile.pixel_bounds();
                for y in bounds.top..bounds.bottom {
                    for x in bounds.left..bounds.right {
                        hits[(y as u32 * width + x as u32) as usize] += 1;
                    }
                }
            }

            assert!(
                hits.iter().all(|&count| count == 1),
                "{}x{} is not partitioned exactly",
                width,
                height
            );
        }
    }

    #[test]
    fn test_neighbouring_tiles_share_edges() {
        let tiles = tiles_for(1000, 1000);
        // 4 x 4 grid, column-major
        for column in 0..4 {
            for row in 0..3 {
                let upper = tiles[column * 4 + row];
                let lower = tiles[column * 4 + row + 1];

                assert_eq!(upper.y2, lower.y1);
            }
        }
        for column in 0..3 {
            assert_eq!(tiles[column * 4].x2, tiles[(column + 1) * 4].x1);
        }
    }
}
