use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

use log::debug;

use crate::controllers::interactive::context::RenderContext;
use crate::controllers::interactive::frame_scheduler::FrameState;
use crate::controllers::interactive::refinement_loop::{RefinementLoop, Tick};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::surface_size::SurfaceSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSummary {
    pub frames_completed: u32,
    pub frames_cancelled: u32,
    pub ticks: u32,
    pub duration: Duration,
}

/// Headless host: ticks the refinement loop back to back until it converges, then
/// hands the finished buffer to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    refinement: RefinementLoop,
    buffer: PixelBuffer,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, size: SurfaceSize) -> Self {
        Self {
            presenter,
            refinement: RefinementLoop::new(RenderContext::new(size)),
            buffer: PixelBuffer::new(size),
        }
    }

    #[must_use]
    pub fn context(&self) -> &Rc<RenderContext> {
        self.refinement.context()
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn generate(&mut self) -> RenderSummary {
        let start = Instant::now();
        let mut summary = RenderSummary::default();

        let surface = self.context().surface();
        if surface != self.buffer.size() {
            self.buffer.resize(surface);
        }

        loop {
            summary.ticks += 1;

            match self.refinement.tick(&mut self.buffer) {
                Tick::Converged => break,
                Tick::Suspended { .. } => {}
                Tick::FrameFinished(report) => match report.state {
                    FrameState::Cancelled => summary.frames_cancelled += 1,
                    _ => summary.frames_completed += 1,
                },
            }
        }

        summary.duration = start.elapsed();
        debug!("refinement converged: {:?}", summary);

        summary
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        self.presenter.present(&self.buffer, filepath)
    }
}
