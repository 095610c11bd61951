//! Windowed host built on winit, pixels and egui.

pub mod app;
pub mod commands;
