pub mod calculate_tiles_for_surface;
