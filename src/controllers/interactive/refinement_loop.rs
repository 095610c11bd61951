use crate::controllers::interactive::context::RenderContext;
use crate::controllers::interactive::frame_scheduler::{
    FrameProgress, FrameReport, FrameScheduler, FrameState,
};
use crate::core::actions::render_tile::ports::pixel_sink::PixelSink;
use crate::core::data::settings::COARSEST_DETAIL;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::util::calculate_tiles_for_surface::{TILE_EDGE, calculate_tiles_for_surface};
use log::debug;
use std::cell::Cell;
use std::num::NonZeroU32;
use std::rc::Rc;

/// What one call to [`RefinementLoop::tick`] did before handing control back.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tick {
    /// A fine frame is in flight and stopped at a tile boundary.
    Suspended { detail: NonZeroU32 },
    FrameFinished(FrameReport),
    /// The stride-1 frame is already on screen; nothing was rendered.
    Converged,
}

/// Renders successive frames at strides 20, 19, .. 1 and starts over at 20 whenever
/// the shared context reports a change.
///
/// Each `tick` runs until the next suspension point, so the host calls it again on
/// its next idle turn: between frames always, and between tiles of fine frames.
pub struct RefinementLoop {
    context: Rc<RenderContext>,
    restart: Rc<Cell<bool>>,
    detail: u32,
    frame: Option<FrameScheduler<MandelbrotAlgorithm>>,
}

impl RefinementLoop {
    #[must_use]
    pub fn new(context: Rc<RenderContext>) -> Self {
        let restart = Rc::new(Cell::new(true));
        let on_change = Rc::clone(&restart);
        context.on_change(move || on_change.set(true));

        Self {
            context,
            restart,
            detail: COARSEST_DETAIL,
            frame: None,
        }
    }

    #[must_use]
    pub fn context(&self) -> &Rc<RenderContext> {
        &self.context
    }

    /// Stride of the frame in flight, or of the last frame started.
    #[must_use]
    pub fn detail(&self) -> u32 {
        self.detail
    }

    #[must_use]
    pub fn is_frame_in_flight(&self) -> bool {
        self.frame.is_some()
    }

    #[must_use]
    pub fn restart_pending(&self) -> bool {
        self.restart.get()
    }

    pub fn tick<S: PixelSink + ?Sized>(&mut self, sink: &mut S) -> Tick {
        if let Some(frame) = self.frame.take() {
            return self.resume(frame, sink);
        }

        if self.restart.replace(false) {
            debug!("restarting refinement at stride {}", COARSEST_DETAIL);
            self.detail = COARSEST_DETAIL;
            // no frame is in flight, so a pending request would only abort the new one
            self.context.cancellation().clear();
        } else if self.detail <= 1 {
            self.detail = 1;
            return Tick::Converged;
        } else {
            self.detail -= 1;
        }

        let detail = NonZeroU32::new(self.detail).unwrap_or(NonZeroU32::MIN);
        self.context.record_detail(detail);

        let frame_settings = self.context.settings().snapshot_with_detail(detail);
        let tiles = calculate_tiles_for_surface(self.context.surface(), TILE_EDGE);

        debug!("frame at stride {} over {} tiles", detail, tiles.len());

        let frame = FrameScheduler::new(tiles, detail, MandelbrotAlgorithm::new(&frame_settings));
        self.resume(frame, sink)
    }

    fn resume<S: PixelSink + ?Sized>(
        &mut self,
        frame: FrameScheduler<MandelbrotAlgorithm>,
        sink: &mut S,
    ) -> Tick {
        match frame.resume(sink, self.context.cancellation()) {
            FrameProgress::Suspended(frame) => {
                let detail = frame.detail();
                self.frame = Some(frame);
                Tick::Suspended { detail }
            }
            FrameProgress::Complete(report) => {
                match report.state {
                    FrameState::Cancelled => debug!(
                        "frame at stride {} cancelled after {} tiles, {} discarded",
                        report.detail, report.tiles_rendered, report.tiles_discarded
                    ),
                    _ => debug!(
                        "frame at stride {} done: {} tiles, {} samples",
                        report.detail, report.tiles_rendered, report.samples
                    ),
                }

                Tick::FrameFinished(report)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::surface_size::SurfaceSize;

    #[derive(Default)]
    struct CountingSink {
        blocks: usize,
    }

    impl PixelSink for CountingSink {
        fn paint_block(&mut self, _x: i32, _y: i32, _width: u32, _height: u32, _grey: u8) {
            self.blocks += 1;
        }
    }

    fn refinement(width: u32, height: u32) -> RefinementLoop {
        RefinementLoop::new(RenderContext::new(SurfaceSize::new(width, height).unwrap()))
    }

    fn finished(tick: Tick) -> FrameReport {
        match tick {
            Tick::FrameFinished(report) => report,
            other => panic!("expected a finished frame, got {:?}", other),
        }
    }

    /// Ticks until the next frame finishes, returning it.
    fn next_frame<S: PixelSink>(refinement: &mut RefinementLoop, sink: &mut S) -> FrameReport {
        loop {
            match refinement.tick(sink) {
                Tick::FrameFinished(report) => return report,
                Tick::Suspended { .. } => {}
                Tick::Converged => panic!("converged before a frame finished"),
            }
        }
    }

    #[test]
    fn first_frame_is_coarsest() {
        let mut refinement = refinement(600, 600);
        let mut sink = CountingSink::default();

        let report = finished(refinement.tick(&mut sink));

        assert_eq!(report.detail.get(), COARSEST_DETAIL);
        assert_eq!(report.state, FrameState::Done);
        assert_eq!(report.tiles_rendered, 4);
        assert!(sink.blocks > 0);
    }

    #[test]
    fn strides_decrease_to_one_then_converge() {
        let mut refinement = refinement(40, 30);
        let mut sink = CountingSink::default();
        let mut strides = Vec::new();

        loop {
            match refinement.tick(&mut sink) {
                Tick::FrameFinished(report) => strides.push(report.detail.get()),
                Tick::Suspended { .. } => {}
                Tick::Converged => break,
            }
        }

        assert_eq!(strides, (1..=COARSEST_DETAIL).rev().collect::<Vec<_>>());
        assert_eq!(refinement.tick(&mut sink), Tick::Converged);
        assert_eq!(refinement.detail(), 1);
    }

    #[test]
    fn fine_frames_suspend_between_tiles() {
        let mut refinement = refinement(600, 600);
        let mut sink = CountingSink::default();

        for _ in 0..16 {
            next_frame(&mut refinement, &mut sink);
        }
        assert_eq!(refinement.detail(), 5);

        // stride 4 over four tiles: three suspensions, then completion
        for _ in 0..3 {
            assert_eq!(
                refinement.tick(&mut sink),
                Tick::Suspended {
                    detail: NonZeroU32::new(4).unwrap()
                }
            );
            assert!(refinement.is_frame_in_flight());
        }
        let report = finished(refinement.tick(&mut sink));

        assert_eq!(report.detail.get(), 4);
        assert_eq!(report.tiles_rendered, 4);
        assert!(!refinement.is_frame_in_flight());
    }

    #[test]
    fn settings_change_between_frames_restarts_at_coarsest() {
        let mut refinement = refinement(60, 60);
        let mut sink = CountingSink::default();

        while refinement.detail() != 7 {
            next_frame(&mut refinement, &mut sink);
        }

        refinement
            .context()
            .update_settings(|settings| settings.iterations = 30);

        assert!(refinement.restart_pending());

        let report = finished(refinement.tick(&mut sink));

        assert_eq!(report.detail.get(), COARSEST_DETAIL);
        assert_eq!(report.state, FrameState::Done, "stale cancellation is dropped");
        assert_eq!(refinement.detail(), COARSEST_DETAIL);
    }

    #[test]
    fn settings_change_mid_frame_cancels_then_restarts() {
        let mut refinement = refinement(900, 600);
        let mut sink = CountingSink::default();

        while refinement.detail() != 5 {
            next_frame(&mut refinement, &mut sink);
        }
        assert!(matches!(refinement.tick(&mut sink), Tick::Suspended { .. }));

        refinement
            .context()
            .update_settings(|settings| settings.scale = -3.0);

        let cancelled = finished(refinement.tick(&mut sink));

        assert_eq!(cancelled.state, FrameState::Cancelled);
        assert_eq!(cancelled.detail.get(), 4);
        assert_eq!(cancelled.tiles_rendered, 2);
        assert_eq!(cancelled.tiles_discarded, 4);

        let restarted = finished(refinement.tick(&mut sink));

        assert_eq!(restarted.detail.get(), COARSEST_DETAIL);
        assert_eq!(restarted.state, FrameState::Done);
    }

    #[test]
    fn converged_loop_restarts_on_change() {
        let mut refinement = refinement(20, 20);
        let mut sink = CountingSink::default();

        while refinement.tick(&mut sink) != Tick::Converged {}

        refinement
            .context()
            .update_settings(|settings| settings.tolerance = 0.0);

        let report = finished(refinement.tick(&mut sink));

        assert_eq!(report.detail.get(), COARSEST_DETAIL);
    }

    #[test]
    fn resize_restarts_with_new_tiling() {
        let mut refinement = refinement(300, 300);
        let mut buffer = PixelBuffer::new(refinement.context().surface());

        assert_eq!(finished(refinement.tick(&mut buffer)).tiles_rendered, 1);

        let size = SurfaceSize::new(900, 600).unwrap();
        refinement.context().resize(size);
        buffer.resize(size);

        let report = finished(refinement.tick(&mut buffer));

        assert_eq!(report.detail.get(), COARSEST_DETAIL);
        assert_eq!(report.tiles_rendered, 6);
    }

    #[test]
    fn stride_is_mirrored_into_settings() {
        let mut refinement = refinement(50, 50);
        let mut sink = CountingSink::default();

        next_frame(&mut refinement, &mut sink);
        next_frame(&mut refinement, &mut sink);

        assert_eq!(refinement.context().settings().detail, 19.0);
        assert!(!refinement.restart_pending());
    }

    #[test]
    fn tick_paints_into_pixel_buffer() {
        let mut refinement = refinement(300, 300);
        let mut buffer = PixelBuffer::new(refinement.context().surface());

        while refinement.tick(&mut buffer) != Tick::Converged {}

        assert!(buffer.buffer().iter().any(|&b| b != 0));
    }
}
