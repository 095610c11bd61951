//! Input adapters for the explorer.
//!
//! The GUI adapter turns window events and control panel edits into settings
//! updates and resize notifications on the shared render context.

pub mod gui;
