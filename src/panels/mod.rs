mod canvas_panel;
mod controls_panel;

pub use canvas_panel::{Canvas, canvas};
pub use controls_panel::{PanelAction, controls_bar, projector_bar};
