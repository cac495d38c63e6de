//! One-directional propagation of primary-surface activity to the projector.
//!
//! The primary side only ever holds a [`MirrorLink`] (a sender); the projector
//! side holds the [`MirrorSurface`] (the receiver plus what it has drawn).
//! Nothing flows back.

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::pen::PenState;
use crate::surface::{DrawSurface, DrawingContext, Point, Renderable, Segment};

/// Drawing activity on the primary surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorEvent {
    StrokeStarted(Point),
    PointAppended(Point),
    StrokeCleared,
    /// Current stroke at the moment the projector was attached
    Snapshot(Vec<Point>),
}

/// What the projector keeps once a stroke is replaced or erased
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetentionPolicy {
    /// Show only the live stroke, exactly like the primary surface
    LiveStroke,
    /// Also keep every dragged segment forever, across new strokes and erases
    #[default]
    AccumulateHistory,
}

/// Sending half, owned by the session
#[derive(Debug)]
pub struct MirrorLink {
    sender: UnboundedSender<MirrorEvent>,
}

impl MirrorLink {
    pub fn connect(policy: RetentionPolicy) -> (MirrorLink, MirrorSurface) {
        let (sender, receiver) = mpsc::unbounded();
        (
            MirrorLink { sender },
            MirrorSurface {
                receiver,
                policy,
                live: DrawSurface::new(),
                history: DrawSurface::new(),
                last_point: None,
            },
        )
    }

    pub fn send(&self, event: MirrorEvent) {
        if let Err(err) = self.sender.unbounded_send(event) {
            log::warn!("Projector surface is gone, dropping {:?}", err.into_inner());
        }
    }

    pub fn is_connected(&self) -> bool {
        !self.sender.is_closed()
    }
}

/// Receiving half: the surface shown in the projector window
#[derive(Debug)]
pub struct MirrorSurface {
    receiver: UnboundedReceiver<MirrorEvent>,
    policy: RetentionPolicy,
    live: DrawSurface,
    history: DrawSurface,
    last_point: Option<Point>,
}

impl MirrorSurface {
    /// Apply every pending event, returning how many were applied
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(Some(event)) = self.receiver.try_next() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, event: MirrorEvent) {
        match event {
            MirrorEvent::StrokeStarted(point) => {
                self.live.set_full_sequence(vec![point]);
                self.last_point = Some(point);
            }
            MirrorEvent::PointAppended(point) => {
                self.live.append_point(point);
                if self.policy == RetentionPolicy::AccumulateHistory {
                    if let Some(previous) = self.last_point {
                        self.history.append_segment(previous, point);
                    }
                }
                self.last_point = Some(point);
            }
            MirrorEvent::StrokeCleared => {
                self.live.set_full_sequence(Vec::new());
                self.last_point = None;
            }
            MirrorEvent::Snapshot(points) => {
                // History resumes from the newest snapshot point rather than
                // the stroke's press point, so the first retained segment
                // never cuts across the part drawn before the projector existed
                self.last_point = points.last().copied();
                self.live.set_full_sequence(points);
            }
        }
    }

    /// Mirror of the primary's current stroke
    pub fn live(&self) -> &DrawSurface {
        &self.live
    }

    /// Segments retained across strokes
    pub fn history(&self) -> impl Iterator<Item = Segment> + '_ {
        self.history.discrete_segments()
    }
}

impl Renderable for MirrorSurface {
    fn render(&self, into: &mut dyn DrawingContext, pen: &PenState) {
        let width = pen.thickness.width();
        for segment in self.history() {
            into.line_segment(segment.from, segment.to, pen.color, width);
        }
        self.live.render(into, pen);
    }
}
