use egui::{Color32, Painter, Pos2, Vec2};

use crate::pen::PenState;

/// Integer coordinate in surface-local space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert a screen position into the coordinate space of a surface whose
    /// top-left corner sits at `origin`.
    pub fn from_local(pos: Pos2, origin: Pos2) -> Self {
        let local = pos - origin;
        Self::new(local.x.round() as i32, local.y.round() as i32)
    }

    pub fn to_screen(self, origin: Pos2) -> Pos2 {
        origin + Vec2::new(self.x as f32, self.y as f32)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A single straight line between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Anything that can receive line segments
pub trait DrawingContext {
    fn line_segment(&mut self, from: Point, to: Point, color: Color32, width: f32);
}

/// Something that knows how to draw itself with the current pen
pub trait Renderable {
    fn render(&self, into: &mut dyn DrawingContext, pen: &PenState);
}

/// Draws into an egui painter, translating surface coordinates to screen space
pub struct PainterContext<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> PainterContext<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }
}

impl DrawingContext for PainterContext<'_> {
    fn line_segment(&mut self, from: Point, to: Point, color: Color32, width: f32) {
        self.painter.line_segment(
            [from.to_screen(self.origin), to.to_screen(self.origin)],
            egui::Stroke::new(width, color),
        );
    }
}

/// A point sequence rendered as connected line segments.
///
/// No raster is kept: every frame replays the full sequence, so rendering
/// twice without a change in between draws the same segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawSurface {
    points: Vec<Point>,
}

impl DrawSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Coordinates are not validated; the painter clips anything off-surface.
    pub fn append_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn set_full_sequence(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    /// Append an independent segment without touching existing content
    pub fn append_segment(&mut self, from: Point, to: Point) {
        self.points.push(from);
        self.points.push(to);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The segments `render` draws: every consecutive pair of points
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points
            .windows(2)
            .map(|pair| Segment { from: pair[0], to: pair[1] })
    }

    /// Points read two at a time, as written by `append_segment`
    pub fn discrete_segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points
            .chunks_exact(2)
            .map(|pair| Segment { from: pair[0], to: pair[1] })
    }
}

impl Renderable for DrawSurface {
    fn render(&self, into: &mut dyn DrawingContext, pen: &PenState) {
        let width = pen.thickness.width();
        for segment in self.segments() {
            into.line_segment(segment.from, segment.to, pen.color, width);
        }
    }
}

/// Drawing context that records each segment with its color and width instead of painting
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SegmentRecorder {
    pub lines: Vec<(Segment, Color32, f32)>,
}

impl SegmentRecorder {
    pub fn segments(&self) -> Vec<Segment> {
        self.lines.iter().map(|(segment, _, _)| *segment).collect()
    }
}

impl DrawingContext for SegmentRecorder {
    fn line_segment(&mut self, from: Point, to: Point, color: Color32, width: f32) {
        self.lines.push((Segment { from, to }, color, width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pen::Thickness;

    fn surface_from(points: &[(i32, i32)]) -> DrawSurface {
        let mut surface = DrawSurface::new();
        for &p in points {
            surface.append_point(p.into());
        }
        surface
    }

    #[test]
    fn test_short_sequences_draw_nothing() {
        let pen = PenState::default();
        for points in [&[][..], &[(3, 4)][..]] {
            let mut recorder = SegmentRecorder::default();
            surface_from(points).render(&mut recorder, &pen);
            assert!(recorder.lines.is_empty());
        }
    }

    #[test]
    fn test_render_connects_consecutive_points() {
        let surface = surface_from(&[(0, 0), (10, 0), (10, 10)]);
        let mut recorder = SegmentRecorder::default();
        surface.render(&mut recorder, &PenState::default());

        assert_eq!(
            recorder.segments(),
            vec![
                Segment { from: Point::new(0, 0), to: Point::new(10, 0) },
                Segment { from: Point::new(10, 0), to: Point::new(10, 10) },
            ]
        );
    }

    #[test]
    fn test_render_uses_pen_at_render_time() {
        let surface = surface_from(&[(0, 0), (5, 5)]);
        let pen = PenState::new(Color32::RED, Thickness::new(3).unwrap());
        let mut recorder = SegmentRecorder::default();
        surface.render(&mut recorder, &pen);

        assert_eq!(recorder.lines[0].1, Color32::RED);
        assert_eq!(recorder.lines[0].2, 3.0);
    }

    #[test]
    fn test_render_is_idempotent() {
        let surface = surface_from(&[(1, 1), (2, 3), (5, 8), (13, 21)]);
        let pen = PenState::default();
        let mut first = SegmentRecorder::default();
        let mut second = SegmentRecorder::default();
        surface.render(&mut first, &pen);
        surface.render(&mut second, &pen);
        assert_eq!(first, second);
    }

    #[test]
    fn test_append_segment_keeps_prior_content() {
        let mut surface = surface_from(&[(0, 0), (1, 1)]);
        surface.append_segment(Point::new(5, 5), Point::new(6, 6));
        assert_eq!(surface.len(), 4);
        assert_eq!(surface.points()[0], Point::new(0, 0));
    }

    #[test]
    fn test_set_full_sequence_replaces() {
        let mut surface = surface_from(&[(0, 0), (1, 1), (2, 2)]);
        surface.set_full_sequence(vec![Point::new(9, 9)]);
        assert_eq!(surface.points(), &[Point::new(9, 9)]);
    }

    #[test]
    fn test_point_from_local_rounds() {
        let origin = Pos2::new(100.0, 50.0);
        let point = Point::from_local(Pos2::new(110.6, 49.6), origin);
        assert_eq!(point, Point::new(11, 0));
        assert_eq!(point.to_screen(origin), Pos2::new(111.0, 50.0));
    }
}
