use egui::Context as EguiContext;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::surface_size::SurfaceSize;

pub trait GuiPresenterPort {
    fn render(
        &mut self,
        buffer: &PixelBuffer,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, size: SurfaceSize) -> Result<(), pixels::TextureError>;
}
