use crate::controllers::interactive::context::RenderContext;
use crate::controllers::interactive::frame_scheduler::{FrameReport, FrameState};
use crate::core::data::settings::{Settings, SettingsRanges};

/// Slider panel over the shared settings.
///
/// Each UI pass edits a draft copied from the context; edits are posted back through
/// the context so the refinement loop restarts.
pub struct ControlPanel {
    draft: Settings,
    frames_completed: u64,
    frames_cancelled: u64,
}

impl ControlPanel {
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        Self {
            draft: context.settings(),
            frames_completed: 0,
            frames_cancelled: 0,
        }
    }

    pub fn record_frame(&mut self, report: &FrameReport) {
        match report.state {
            FrameState::Cancelled => self.frames_cancelled += 1,
            _ => self.frames_completed += 1,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, context: &RenderContext) {
        self.draft = context.settings();
        let mut reset = false;

        egui::Window::new("Controls")
            .default_pos([10.0, 10.0])
            .default_size([260.0, 240.0])
            .show(ctx, |ui| {
                ui.heading("Mandelbrot Explorer");
                ui.separator();

                egui::Grid::new("settings_grid").num_columns(2).show(ui, |ui| {
                    ui.label("scale");
                    ui.add(egui::Slider::new(&mut self.draft.scale, SettingsRanges::SCALE));
                    ui.end_row();

                    ui.label("posX");
                    ui.add(egui::DragValue::new(&mut self.draft.center_x).speed(1.0));
                    ui.end_row();

                    ui.label("posY");
                    ui.add(egui::DragValue::new(&mut self.draft.center_y).speed(1.0));
                    ui.end_row();

                    ui.label("detail");
                    ui.add(egui::Slider::new(&mut self.draft.detail, SettingsRanges::DETAIL));
                    ui.end_row();

                    ui.label("iterations");
                    ui.add(egui::Slider::new(
                        &mut self.draft.iterations,
                        SettingsRanges::ITERATIONS,
                    ));
                    ui.end_row();

                    ui.label("tolerance");
                    ui.add(egui::Slider::new(
                        &mut self.draft.tolerance,
                        SettingsRanges::TOLERANCE,
                    ));
                    ui.end_row();
                });

                if ui.button("Reset view").clicked() {
                    reset = true;
                }

                ui.separator();
                let surface = context.surface();
                ui.label(format!("Surface: {}x{}", surface.width(), surface.height()));
                ui.label(format!(
                    "Frames: {} done, {} cancelled",
                    self.frames_completed, self.frames_cancelled
                ));
            });

        if reset {
            self.reset(context);
        } else {
            self.commit(context);
        }
    }

    /// Posts the draft if the user changed anything. Returns whether an update was posted.
    pub fn commit(&self, context: &RenderContext) -> bool {
        if self.draft == context.settings() {
            return false;
        }

        let draft = self.draft;
        context.update_settings(|settings| *settings = draft);
        true
    }

    pub fn reset(&mut self, context: &RenderContext) {
        let defaults = Settings::for_surface(context.surface());
        context.update_settings(|settings| *settings = defaults);
        self.draft = context.settings();
    }
}
