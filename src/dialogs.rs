//! Modal prompts for pen settings and error messages.
//!
//! Each prompt keeps its own buffer and reports a [`DialogOutcome`] every
//! frame; the caller drops the prompt once it is no longer `Open`.

use egui::{Color32, Key};

use crate::pen::{PenState, Thickness};

#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome<T> {
    Open,
    Confirmed(T),
    Cancelled,
}

fn modal_window(title: &str) -> egui::Window<'static> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
}

fn escape_pressed(ctx: &egui::Context) -> bool {
    ctx.input(|i| i.key_pressed(Key::Escape))
}

/// Color chooser seeded with the current pen color
#[derive(Debug, Clone)]
pub struct ColorPrompt {
    color: Color32,
}

impl ColorPrompt {
    pub fn new(pen: &PenState) -> Self {
        Self { color: pen.color }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn show(&mut self, ctx: &egui::Context) -> DialogOutcome<Color32> {
        let mut outcome = DialogOutcome::Open;
        modal_window("Select Color").show(ctx, |ui| {
            egui::color_picker::color_picker_color32(
                ui,
                &mut self.color,
                egui::color_picker::Alpha::Opaque,
            );
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    outcome = DialogOutcome::Confirmed(self.color);
                }
                if ui.button("Cancel").clicked() {
                    outcome = DialogOutcome::Cancelled;
                }
            });
        });
        if escape_pressed(ctx) {
            outcome = DialogOutcome::Cancelled;
        }
        outcome
    }
}

/// Text entry for the pen thickness, seeded with the current value
#[derive(Debug, Clone)]
pub struct ThicknessPrompt {
    input: String,
}

impl ThicknessPrompt {
    pub fn new(pen: &PenState) -> Self {
        Self {
            input: pen.thickness.to_string(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Confirms with the raw text; validation belongs to the pen
    pub fn show(&mut self, ctx: &egui::Context) -> DialogOutcome<String> {
        let mut outcome = DialogOutcome::Open;
        modal_window("Thickness").show(ctx, |ui| {
            ui.label(format!(
                "Enter pen thickness ({}-{}):",
                Thickness::MIN,
                Thickness::MAX
            ));
            let response = ui.text_edit_singleline(&mut self.input);
            response.request_focus();
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || submitted {
                    outcome = DialogOutcome::Confirmed(self.input.clone());
                }
                if ui.button("Cancel").clicked() {
                    outcome = DialogOutcome::Cancelled;
                }
            });
        });
        if escape_pressed(ctx) {
            outcome = DialogOutcome::Cancelled;
        }
        outcome
    }
}

/// Error text with a single OK button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDialog {
    title: String,
    message: String,
}

impl MessageDialog {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_owned(),
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn show(&self, ctx: &egui::Context) -> DialogOutcome<()> {
        let mut outcome = DialogOutcome::Open;
        modal_window(&self.title).show(ctx, |ui| {
            ui.colored_label(ui.visuals().error_fg_color, &self.message);
            if ui.button("OK").clicked() {
                outcome = DialogOutcome::Confirmed(());
            }
        });
        if escape_pressed(ctx) || ctx.input(|i| i.key_pressed(Key::Enter)) {
            outcome = DialogOutcome::Confirmed(());
        }
        outcome
    }
}

/// The prompt currently on screen, at most one at a time
#[derive(Debug, Clone, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Color(ColorPrompt),
    Thickness(ThicknessPrompt),
    Message(MessageDialog),
}

impl ActiveDialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_are_seeded_from_pen() {
        let pen = PenState::new(Color32::RED, Thickness::new(7).unwrap());
        assert_eq!(ColorPrompt::new(&pen).color(), Color32::RED);
        assert_eq!(ThicknessPrompt::new(&pen).input(), "7");
    }

    #[test]
    fn test_active_dialog_open() {
        assert!(!ActiveDialog::default().is_open());
        let message = MessageDialog::error("bad");
        assert_eq!(message.message(), "bad");
        assert!(ActiveDialog::Message(message).is_open());
    }
}
