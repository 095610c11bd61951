//! Interactive, progressively refined rendering.
//!
//! # Architecture
//!
//! - **Input**: the control panel and resize notifier post changes through
//!   [`RenderContext`]
//! - **Output**: tiles are painted into any [`PixelSink`](crate::PixelSink)
//! - **Core**: [`RefinementLoop`] sequences frames; each frame is a
//!   [`FrameScheduler`] over the tile queue
//!
//! Everything runs on one thread. The host calls [`RefinementLoop::tick`] whenever it
//! is idle; every tick returns at a suspension point.

pub mod context;
pub mod frame_scheduler;
pub mod refinement_loop;

pub use context::RenderContext;
pub use frame_scheduler::{
    FrameProgress, FrameReport, FrameScheduler, FrameState, YIELD_BELOW_DETAIL,
};
pub use refinement_loop::{RefinementLoop, Tick};
