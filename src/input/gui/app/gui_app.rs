use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{error, warn};
use winit::error::EventLoopError;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::Window;

use crate::controllers::interactive::context::RenderContext;
use crate::controllers::interactive::refinement_loop::{RefinementLoop, Tick};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::surface_size::SurfaceSize;
use crate::input::gui::app::control_panel::ControlPanel;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

/// Window host for the refinement loop.
///
/// The event loop's idle phase runs one refinement tick per turn, so the control panel
/// and resize events are handled between tiles of a frame.
pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    refinement: RefinementLoop,
    buffer: PixelBuffer,
    panel: ControlPanel,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    redraw_pending: bool,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        size: SurfaceSize,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        let context = RenderContext::new(size);
        let panel = ControlPanel::new(&context);

        Self {
            window,
            presenter,
            refinement: RefinementLoop::new(context),
            buffer: PixelBuffer::new(size),
            panel,
            egui_ctx,
            egui_state,
            redraw_pending: true,
        }
    }

    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), EventLoopError> {
        let window = self.window;

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let response = self.egui_state.on_window_event(window, event);
                if response.repaint {
                    self.redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        if let Err(err) = self.redraw() {
                            error!("render error: {err}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => self.resize(size.width, size.height),
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        self.resize(size.width, size.height);
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                let busy = self.idle();

                if self.redraw_pending {
                    window.request_redraw();
                }

                elwt.set_control_flow(if busy {
                    ControlFlow::Poll
                } else {
                    ControlFlow::Wait
                });
            }
            _ => {}
        })
    }

    /// One refinement tick. Returns false once the image has converged.
    fn idle(&mut self) -> bool {
        match self.refinement.tick(&mut self.buffer) {
            Tick::Converged => false,
            Tick::Suspended { .. } => {
                self.redraw_pending = true;
                true
            }
            Tick::FrameFinished(report) => {
                self.panel.record_frame(&report);
                self.redraw_pending = true;
                true
            }
        }
    }

    fn redraw(&mut self) -> Result<(), pixels::Error> {
        self.redraw_pending = false;

        let raw_input = self.egui_state.take_egui_input(self.window);
        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            self.panel.show(ctx, self.refinement.context());
        });

        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output.clone());

        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        self.presenter
            .render(&self.buffer, egui_output, &self.egui_ctx)
    }

    fn resize(&mut self, width: u32, height: u32) {
        // a minimized window reports a zero size; keep the last surface
        let Ok(size) = SurfaceSize::new(width, height) else {
            return;
        };

        if let Err(err) = self.presenter.resize(size) {
            warn!("failed to resize framebuffer to {width}x{height}: {err}");
            return;
        }

        self.buffer.resize(size);
        self.refinement.context().resize(size);
        self.redraw_pending = true;
    }
}
