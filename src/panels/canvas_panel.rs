use crate::input::{SurfaceInput, surface_inputs};
use crate::pen::PenState;
use crate::surface::{PainterContext, Renderable};

/// The drawing area allocated for this frame
pub struct Canvas {
    painter: egui::Painter,
    rect: egui::Rect,
    inputs: Vec<SurfaceInput>,
}

impl Canvas {
    /// Allocate a surface filling `ui` and paint its background
    pub fn allocate(ui: &mut egui::Ui, background: egui::Color32, sense: egui::Sense) -> Self {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, sense);
        painter.rect_filled(response.rect, 0.0, background);

        Self {
            inputs: surface_inputs(&response),
            rect: response.rect,
            painter,
        }
    }

    /// Pointer activity over the surface, in surface-local coordinates
    pub fn take_inputs(&mut self) -> Vec<SurfaceInput> {
        std::mem::take(&mut self.inputs)
    }

    /// Shapes may be added after the panel closed, the painter keeps its layer
    pub fn render(&self, content: &dyn Renderable, pen: &PenState) {
        let mut target = PainterContext::new(&self.painter, self.rect.min);
        content.render(&mut target, pen);
    }
}

/// Fill the central area with a drawing surface
pub fn canvas(ctx: &egui::Context, background: egui::Color32, sense: egui::Sense) -> Canvas {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| Canvas::allocate(ui, background, sense))
        .inner
}
