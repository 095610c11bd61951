pub mod control_panel;
pub mod gui_app;
pub mod ports;
