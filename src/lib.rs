mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::options::{CliOptions, CliOptionsError};
pub use controllers::cli::render_to_file::{CliRenderController, RenderSummary};
pub use controllers::interactive::{
    FrameProgress, FrameReport, FrameScheduler, FrameState, RefinementLoop, RenderContext, Tick,
    YIELD_BELOW_DETAIL,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::cancellation::{CancelToken, CancellationFlag, NeverCancel};
pub use crate::core::actions::render_tile::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_tile::ports::pixel_sink::PixelSink;
pub use crate::core::actions::render_tile::render_tile::{fraction_to_grey, render_tile};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::settings::{
    COARSEST_DETAIL, FrameSettings, Settings, SettingsRanges, normalize_detail,
};
pub use crate::core::data::surface_size::{SurfaceSize, SurfaceSizeError};
pub use crate::core::data::tile::{PixelBounds, Tile};
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::util::calculate_tiles_for_surface::{TILE_EDGE, calculate_tiles_for_surface};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
