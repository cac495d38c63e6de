use crate::config::{AppConfig, PEN_KEY};
use crate::dialogs::{ActiveDialog, ColorPrompt, DialogOutcome, MessageDialog, ThicknessPrompt};
use crate::input::SurfaceInput;
use crate::panels::{self, Canvas, PanelAction};
use crate::pen::PenState;
use crate::session::PaintSession;

pub struct PaintApp {
    config: AppConfig,
    session: PaintSession,
    dialog: ActiveDialog,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_pen(AppConfig::default(), PenState::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        // Restore the pen from the previous run; drawings are never persisted
        let pen = cc
            .storage
            .and_then(|storage| eframe::get_value::<PenState>(storage, PEN_KEY))
            .unwrap_or_default();
        log::debug!("Starting with pen {:?}", pen);

        Self::with_pen(config, pen)
    }

    pub fn with_pen(config: AppConfig, pen: PenState) -> Self {
        let session = PaintSession::new(pen, config.retention);
        Self {
            config,
            session,
            dialog: ActiveDialog::None,
        }
    }

    fn handle_action(&mut self, action: PanelAction) {
        log::debug!("Control activated: {:?}", action);
        match action {
            PanelAction::ChooseColor => {
                self.dialog = ActiveDialog::Color(ColorPrompt::new(self.session.pen()));
            }
            PanelAction::ChooseThickness => {
                self.dialog = ActiveDialog::Thickness(ThicknessPrompt::new(self.session.pen()));
            }
            PanelAction::Erase => self.session.erase(),
            PanelAction::OpenProjector => {
                self.session.open_projector();
            }
        }
    }

    fn handle_input(&mut self, inputs: Vec<SurfaceInput>) {
        for input in inputs {
            match input {
                SurfaceInput::Press(point) => self.session.pointer_press(point),
                SurfaceInput::Drag(point) => self.session.pointer_drag(point),
            }
        }
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let dialog = std::mem::take(&mut self.dialog);
        self.dialog = match dialog {
            ActiveDialog::None => ActiveDialog::None,
            ActiveDialog::Color(mut prompt) => match prompt.show(ctx) {
                DialogOutcome::Open => ActiveDialog::Color(prompt),
                DialogOutcome::Confirmed(color) => {
                    self.session.choose_color(Some(color));
                    ActiveDialog::None
                }
                DialogOutcome::Cancelled => {
                    self.session.choose_color(None);
                    ActiveDialog::None
                }
            },
            ActiveDialog::Thickness(mut prompt) => match prompt.show(ctx) {
                DialogOutcome::Open => ActiveDialog::Thickness(prompt),
                DialogOutcome::Confirmed(input) => self.thickness_outcome(&input),
                DialogOutcome::Cancelled => ActiveDialog::None,
            },
            ActiveDialog::Message(message) => match message.show(ctx) {
                DialogOutcome::Open => ActiveDialog::Message(message),
                _ => ActiveDialog::None,
            },
        };
    }

    /// Apply a confirmed thickness entry; a rejected one turns into an error message
    fn thickness_outcome(&mut self, input: &str) -> ActiveDialog {
        match self.session.submit_thickness(input) {
            Ok(_) => ActiveDialog::None,
            Err(err) => ActiveDialog::Message(MessageDialog::error(err.to_string())),
        }
    }

    fn show_projector(&mut self, ctx: &egui::Context) {
        let background = self.config.canvas_background;
        let pen = *self.session.pen();
        let Some(projector) = self.session.projector() else {
            return;
        };
        if !projector.is_visible() {
            return;
        }

        let viewport_id = egui::ViewportId::from_hash_of("projector");
        let mut close_requested = false;
        ctx.show_viewport_immediate(viewport_id, self.config.projector_viewport(), |ctx, class| {
            if class == egui::ViewportClass::Embedded {
                // No native windows on this backend, show it inside the main one
                let mut open = true;
                egui::Window::new(self.config.projector_title.as_str())
                    .open(&mut open)
                    .default_size(self.config.window_size * 0.5)
                    .show(ctx, |ui| {
                        // The projector only displays, pointer activity there is ignored
                        Canvas::allocate(ui, background, egui::Sense::hover())
                            .render(projector.surface(), &pen);
                    });
                close_requested = !open;
            } else {
                panels::canvas(ctx, background, egui::Sense::hover())
                    .render(projector.surface(), &pen);
                close_requested = ctx.input(|i| i.viewport().close_requested());
            }
        });

        if close_requested {
            log::info!("Projector hidden");
            self.session.hide_projector();
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, PEN_KEY, self.session.pen());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let top = panels::projector_bar(ctx, &self.config);
        let bottom = panels::controls_bar(ctx, &self.config);

        let mut canvas = panels::canvas(ctx, self.config.canvas_background, egui::Sense::drag());

        // Drawing is disabled while a prompt is up, the prompts are modal
        if !self.dialog.is_open() {
            if let Some(action) = top.or(bottom) {
                self.handle_action(action);
            }
            self.handle_input(canvas.take_inputs());
        }
        canvas.render(self.session.surface(), self.session.pen());

        self.show_dialog(ctx);

        if self.session.sync_projector() > 0 {
            ctx.request_repaint();
        }
        self.show_projector(ctx);
    }
}
