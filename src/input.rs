use egui::{Pos2, Response, Vec2};

use crate::surface::Point;

/// Pointer activity on a drawing surface, in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceInput {
    Press(Point),
    Drag(Point),
}

/// Raw pointer state for one frame, as read from egui
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerFrame {
    pub drag_started: bool,
    pub dragged: bool,
    pub press_origin: Option<Pos2>,
    pub position: Option<Pos2>,
    pub delta: Vec2,
}

impl PointerFrame {
    pub fn from_response(response: &Response) -> Self {
        Self {
            drag_started: response.drag_started(),
            dragged: response.dragged(),
            press_origin: response.ctx.input(|i| i.pointer.press_origin()),
            position: response.interact_pointer_pos(),
            delta: response.drag_delta(),
        }
    }

    /// Translate this frame into surface events relative to `origin`.
    ///
    /// A press is reported where the button went down, which may be a few
    /// pixels before the drag was recognised.
    pub fn surface_inputs(&self, origin: Pos2) -> Vec<SurfaceInput> {
        let mut inputs = Vec::new();

        if self.drag_started {
            if let Some(press) = self.press_origin.or(self.position) {
                inputs.push(SurfaceInput::Press(Point::from_local(press, origin)));
            }
        }

        if self.dragged && self.delta != Vec2::ZERO {
            if let Some(pos) = self.position {
                let point = Point::from_local(pos, origin);
                let is_press_point = matches!(inputs.last(), Some(SurfaceInput::Press(p)) if *p == point);
                if !is_press_point {
                    inputs.push(SurfaceInput::Drag(point));
                }
            }
        }

        inputs
    }
}

/// Collect the pointer events for a surface painted at `response.rect`
pub fn surface_inputs(response: &Response) -> Vec<SurfaceInput> {
    PointerFrame::from_response(response).surface_inputs(response.rect.min)
}
