use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_tile::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_tile::ports::pixel_sink::PixelSink;
use crate::core::actions::render_tile::render_tile::render_tile;
use crate::core::data::tile::Tile;
use log::trace;
use std::collections::VecDeque;
use std::num::NonZeroU32;

/// Frames with a stride below this hand control back to the host after every tile.
pub const YIELD_BELOW_DETAIL: u32 = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameState {
    Running,
    Cancelled,
    Done,
}

/// Summary handed back exactly once, when a frame finishes or is cancelled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameReport {
    pub detail: NonZeroU32,
    pub state: FrameState,
    pub tiles_rendered: usize,
    pub tiles_discarded: usize,
    pub samples: usize,
}

pub enum FrameProgress<A> {
    /// Stopped at a tile boundary; resume on the host's next turn.
    Suspended(FrameScheduler<A>),
    Complete(FrameReport),
}

/// Drives one frame's tile queue.
///
/// `resume` consumes the scheduler and only hands it back while the frame is still
/// running, so a finished frame cannot report completion twice or render again.
pub struct FrameScheduler<A> {
    queue: VecDeque<Tile>,
    detail: NonZeroU32,
    algorithm: A,
    tiles_rendered: usize,
    samples: usize,
}

impl<A: FractalAlgorithm> FrameScheduler<A> {
    #[must_use]
    pub fn new(tiles: Vec<Tile>, detail: NonZeroU32, algorithm: A) -> Self {
        Self {
            queue: tiles.into(),
            detail,
            algorithm,
            tiles_rendered: 0,
            samples: 0,
        }
    }

    #[must_use]
    pub fn detail(&self) -> NonZeroU32 {
        self.detail
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn tiles_rendered(&self) -> usize {
        self.tiles_rendered
    }

    #[must_use]
    pub fn yields_between_tiles(&self) -> bool {
        self.detail.get() < YIELD_BELOW_DETAIL
    }

    /// Renders tiles until the frame completes or, at fine detail, until one tile
    /// has been rendered.
    pub fn resume<S, C>(mut self, sink: &mut S, cancel: &C) -> FrameProgress<A>
    where
        S: PixelSink + ?Sized,
        C: CancelToken + ?Sized,
    {
        loop {
            match self.step(sink, cancel) {
                FrameState::Running if self.yields_between_tiles() => {
                    return FrameProgress::Suspended(self);
                }
                FrameState::Running => {}
                state => return FrameProgress::Complete(self.finish(state)),
            }
        }
    }

    fn step<S, C>(&mut self, sink: &mut S, cancel: &C) -> FrameState
    where
        S: PixelSink + ?Sized,
        C: CancelToken + ?Sized,
    {
        let Some(tile) = self.queue.pop_front() else {
            return FrameState::Done;
        };

        let samples = render_tile(tile, self.detail, &self.algorithm, sink);
        self.samples += samples;
        self.tiles_rendered += 1;

        trace!(
            "tile {} at stride {}: {} samples, {} tiles left",
            self.tiles_rendered,
            self.detail,
            samples,
            self.queue.len()
        );

        if cancel.take_request() {
            return FrameState::Cancelled;
        }

        if self.queue.is_empty() {
            FrameState::Done
        } else {
            FrameState::Running
        }
    }

    fn finish(self, state: FrameState) -> FrameReport {
        FrameReport {
            detail: self.detail,
            state,
            tiles_rendered: self.tiles_rendered,
            tiles_discarded: self.queue.len(),
            samples: self.samples,
        }
    }
}
