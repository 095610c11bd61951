use log::info;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::core::data::surface_size::SurfaceSize;
use crate::input::gui::app::gui_app::GuiApp;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Opens the explorer window and runs until it is closed.
#[derive(Debug, Default)]
pub struct RunGuiCommand {}

impl RunGuiCommand {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let event_loop = EventLoop::new()?;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let inner = window.inner_size();
        let size = SurfaceSize::new(inner.width, inner.height)?;
        info!("opening {}x{} window", size.width(), size.height());

        let presenter = PixelsPresenter::new(window, size)?;
        let app = GuiApp::new(window, &event_loop, presenter, size);

        app.run(event_loop)?;

        Ok(())
    }
}
