use crate::components::StyledButton;
use crate::config::AppConfig;

/// Button activated in one of the control bars this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    ChooseColor,
    ChooseThickness,
    Erase,
    OpenProjector,
}

fn bar_frame(config: &AppConfig) -> egui::Frame {
    egui::Frame::none()
        .fill(config.bar_background)
        .inner_margin(egui::Margin::same(10.0))
}

fn centered_buttons(
    ui: &mut egui::Ui,
    config: &AppConfig,
    buttons: &[(&str, PanelAction)],
) -> Option<PanelAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 10.0;
        // Center the row by padding with the width left over from the last frame
        let id = ui.id();
        let row_width = ui.data(|d| d.get_temp::<f32>(id)).unwrap_or(0.0);
        ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
        let start = ui.cursor().min.x;
        for &(label, button_action) in buttons {
            let button = StyledButton::new(label, config.button_fill, config.button_pressed_fill);
            if button.show(ui).clicked() {
                action = Some(button_action);
            }
        }
        let width = ui.cursor().min.x - start;
        ui.data_mut(|d| d.insert_temp(id, width));
    });
    action
}

/// Bottom bar with the pen controls
pub fn controls_bar(ctx: &egui::Context, config: &AppConfig) -> Option<PanelAction> {
    egui::TopBottomPanel::bottom("controls_bar")
        .frame(bar_frame(config))
        .show(ctx, |ui| {
            centered_buttons(
                ui,
                config,
                &[
                    ("Select Color", PanelAction::ChooseColor),
                    ("Thickness", PanelAction::ChooseThickness),
                    ("Erase", PanelAction::Erase),
                ],
            )
        })
        .inner
}

/// Top bar holding the projector button
pub fn projector_bar(ctx: &egui::Context, config: &AppConfig) -> Option<PanelAction> {
    egui::TopBottomPanel::top("projector_bar")
        .frame(bar_frame(config))
        .show(ctx, |ui| {
            centered_buttons(ui, config, &[("Projector", PanelAction::OpenProjector)])
        })
        .inner
}
