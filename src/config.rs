use egui::{Color32, Vec2};

use crate::mirror::RetentionPolicy;

/// Storage key for the persisted pen settings
pub const PEN_KEY: &str = "pen";

/// Start-up configuration for the main and projector windows
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub projector_title: String,
    pub window_size: Vec2,
    pub min_window_size: Vec2,
    pub canvas_background: Color32,
    pub bar_background: Color32,
    pub button_fill: Color32,
    pub button_pressed_fill: Color32,
    pub retention: RetentionPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "PAINT".to_owned(),
            projector_title: "Projector".to_owned(),
            window_size: Vec2::new(800.0, 600.0),
            min_window_size: Vec2::new(320.0, 240.0),
            canvas_background: Color32::WHITE,
            bar_background: Color32::from_rgb(173, 216, 230),
            button_fill: Color32::from_rgb(221, 160, 221),
            button_pressed_fill: Color32::from_rgb(173, 216, 230),
            retention: RetentionPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(&self.title)
                .with_resizable(true)
                .with_inner_size(self.window_size)
                .with_min_inner_size(self.min_window_size),
            ..Default::default()
        }
    }

    pub fn projector_viewport(&self) -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_title(&self.projector_title)
            .with_inner_size(self.window_size)
    }
}
