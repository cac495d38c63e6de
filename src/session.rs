use egui::Color32;

use crate::error::PenResult;
use crate::mirror::{MirrorEvent, MirrorLink, MirrorSurface, RetentionPolicy};
use crate::pen::{PenState, Thickness};
use crate::surface::{DrawSurface, Point};

/// The projector window and the link feeding it
#[derive(Debug)]
pub struct Projector {
    link: MirrorLink,
    surface: MirrorSurface,
    visible: bool,
}

impl Projector {
    pub fn surface(&self) -> &MirrorSurface {
        &self.surface
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Lifecycle of the projector window.
///
/// `NoProjector -> ProjectorOpen` happens once; the projector is never torn
/// down afterwards, only hidden and shown again.
#[derive(Debug, Default)]
pub enum ProjectorState {
    #[default]
    NoProjector,
    ProjectorOpen(Projector),
}

impl ProjectorState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::ProjectorOpen(_))
    }

    pub fn projector(&self) -> Option<&Projector> {
        match self {
            Self::ProjectorOpen(projector) => Some(projector),
            Self::NoProjector => None,
        }
    }

    pub fn projector_mut(&mut self) -> Option<&mut Projector> {
        match self {
            Self::ProjectorOpen(projector) => Some(projector),
            Self::NoProjector => None,
        }
    }

    fn link(&self) -> Option<&MirrorLink> {
        self.projector().map(|projector| &projector.link)
    }
}

/// Application controller: pen, primary surface and projector.
///
/// Every handler runs to completion on the UI thread, so none of this state
/// needs locking.
#[derive(Debug, Default)]
pub struct PaintSession {
    pen: PenState,
    surface: DrawSurface,
    projector: ProjectorState,
    retention: RetentionPolicy,
}

impl PaintSession {
    pub fn new(pen: PenState, retention: RetentionPolicy) -> Self {
        Self {
            pen,
            surface: DrawSurface::new(),
            projector: ProjectorState::NoProjector,
            retention,
        }
    }

    pub fn pen(&self) -> &PenState {
        &self.pen
    }

    /// The primary surface, holding only the current stroke
    pub fn surface(&self) -> &DrawSurface {
        &self.surface
    }

    pub fn projector_state(&self) -> &ProjectorState {
        &self.projector
    }

    pub fn projector(&self) -> Option<&Projector> {
        self.projector.projector()
    }

    pub fn projector_mut(&mut self) -> Option<&mut Projector> {
        self.projector.projector_mut()
    }

    fn forward(&self, event: MirrorEvent) {
        if let Some(link) = self.projector.link() {
            link.send(event);
        }
    }

    /// Start a new stroke at `point`, discarding the previous one
    pub fn pointer_press(&mut self, point: Point) {
        self.surface.reset();
        self.surface.append_point(point);
        self.forward(MirrorEvent::StrokeStarted(point));
    }

    pub fn pointer_drag(&mut self, point: Point) {
        if self.surface.is_empty() {
            log::debug!("Drag at {:?} without a press, starting a stroke", point);
            self.pointer_press(point);
            return;
        }
        self.surface.append_point(point);
        self.forward(MirrorEvent::PointAppended(point));
    }

    /// Clear the current stroke on both surfaces. Projector history is kept.
    pub fn erase(&mut self) {
        self.surface.reset();
        self.forward(MirrorEvent::StrokeCleared);
        log::info!("Canvas erased");
    }

    /// Create the projector on first call, otherwise just show it again.
    /// Returns true when the projector was created by this call.
    pub fn open_projector(&mut self) -> bool {
        if let Some(projector) = self.projector.projector_mut() {
            projector.visible = true;
            return false;
        }

        let (link, surface) = MirrorLink::connect(self.retention);
        if !self.surface.is_empty() {
            link.send(MirrorEvent::Snapshot(self.surface.points().to_vec()));
        }
        self.projector = ProjectorState::ProjectorOpen(Projector {
            link,
            surface,
            visible: true,
        });
        log::info!("Projector opened ({:?})", self.retention);
        true
    }

    pub fn hide_projector(&mut self) {
        if let Some(projector) = self.projector.projector_mut() {
            projector.visible = false;
        }
    }

    /// Apply pending mirror events; the projector keeps up even while hidden
    pub fn sync_projector(&mut self) -> usize {
        self.projector
            .projector_mut()
            .map_or(0, |projector| projector.surface.sync())
    }

    /// Result of the color prompt; `None` means it was cancelled
    pub fn choose_color(&mut self, choice: Option<Color32>) {
        if let Some(color) = choice {
            self.pen.set_color(color);
            log::info!("Pen color set to {:?}", self.pen.color);
        }
    }

    pub fn submit_thickness(&mut self, input: &str) -> PenResult<Thickness> {
        match self.pen.apply_thickness_input(input) {
            Ok(thickness) => {
                log::info!("Pen thickness set to {}", thickness);
                Ok(thickness)
            }
            Err(err) => {
                log::warn!("Rejected thickness input {:?}: {}", input, err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_resets_stroke() {
        let mut session = PaintSession::default();
        session.pointer_press(Point::new(0, 0));
        for i in 1..10 {
            session.pointer_drag(Point::new(i, i));
        }
        session.pointer_press(Point::new(42, 7));
        assert_eq!(session.surface().points(), &[Point::new(42, 7)]);
    }

    #[test]
    fn test_drag_without_press_starts_stroke() {
        let mut session = PaintSession::default();
        session.pointer_drag(Point::new(3, 3));
        session.pointer_drag(Point::new(4, 4));
        assert_eq!(session.surface().len(), 2);
    }

    #[test]
    fn test_open_projector_is_one_time() {
        let mut session = PaintSession::default();
        assert!(!session.projector_state().is_open());
        assert!(session.open_projector());
        session.hide_projector();
        assert!(!session.projector().unwrap().is_visible());
        assert!(!session.open_projector());
        assert!(session.projector().unwrap().is_visible());
    }

    #[test]
    fn test_reopen_does_not_duplicate_events() {
        let mut session = PaintSession::default();
        session.open_projector();
        session.open_projector();
        session.open_projector();
        session.pointer_press(Point::new(0, 0));
        session.pointer_drag(Point::new(1, 0));
        assert_eq!(session.sync_projector(), 2);
        let history: Vec<_> = session.projector().unwrap().surface().history().collect();
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_projector_opened_mid_stroke() {
        let mut session = PaintSession::default();
        session.pointer_press(Point::new(0, 0));
        session.pointer_drag(Point::new(1, 1));
        session.open_projector();
        session.pointer_drag(Point::new(2, 2));
        session.sync_projector();

        let mirror = session.projector().unwrap().surface();
        assert_eq!(mirror.live().points(), session.surface().points());
        assert_eq!(mirror.history().count(), 1);
    }

    #[test]
    fn test_history_after_mid_stroke_open_starts_at_last_point() {
        let mut session = PaintSession::default();
        session.pointer_press(Point::new(0, 0));
        session.pointer_drag(Point::new(5, 0));
        session.open_projector();
        session.pointer_drag(Point::new(10, 0));
        session.sync_projector();

        let history: Vec<_> = session.projector().unwrap().surface().history().collect();
        assert_eq!(
            history,
            vec![crate::surface::Segment { from: Point::new(5, 0), to: Point::new(10, 0) }]
        );
    }

    #[test]
    fn test_cancelled_color_keeps_pen() {
        let mut session = PaintSession::default();
        session.choose_color(None);
        assert_eq!(session.pen().color, Color32::BLACK);
        session.choose_color(Some(Color32::from_rgb(10, 20, 30)));
        assert_eq!(session.pen().color, Color32::from_rgb(10, 20, 30));
    }
}
