//! Line geometry for drawing the in-progress pattern.

use kurbo::{Line, Point};

use crate::geometry::{clamp, distance, dot_center};
use crate::tracker::GestureSnapshot;

/// Cursor distance at which the trailing segment becomes fully opaque.
pub const DEFAULT_FADE_DISTANCE: f64 = 20.0;

/// Role of a segment in the drawn path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Between two captured dots. Drawn with the fading treatment.
    Committed,
    /// From the last captured dot to the finger.
    Trailing,
}

/// One line of the visual path, in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    pub start: Point,
    pub end: Point,
    /// 0.0 (invisible) to 1.0 (fully opaque).
    pub opacity: f64,
    pub kind: SegmentKind,
}

impl PathSegment {
    pub fn line(&self) -> Line {
        Line::new(self.start, self.end)
    }
}

/// Opacity of the trailing segment for a cursor at `cursor`.
///
/// Ramps linearly from 0 at the dot center to 1 at `fade_distance` and beyond,
/// so a freshly captured dot never flashes a zero-length line.
pub fn trailing_opacity(dot_center: Point, cursor: Point, fade_distance: f64) -> f64 {
    if fade_distance <= 0.0 {
        return 1.0;
    }
    clamp(distance(dot_center, cursor), 0.0, fade_distance) / fade_distance
}

/// Segments to draw for `snapshot`. Nothing is drawn while idle.
pub fn path_segments(snapshot: &GestureSnapshot, fade_distance: f64) -> Vec<PathSegment> {
    if !snapshot.dragging {
        return Vec::new();
    }

    let mut segments: Vec<PathSegment> = snapshot
        .sequence
        .windows(2)
        .map(|pair| PathSegment {
            start: dot_center(pair[0]),
            end: dot_center(pair[1]),
            opacity: 1.0,
            kind: SegmentKind::Committed,
        })
        .collect();

    if let Some(last) = snapshot.last_dot() {
        let start = dot_center(last);
        let end = snapshot.cursor.unwrap_or(start);
        segments.push(PathSegment {
            start,
            end,
            opacity: trailing_opacity(start, end, fade_distance),
            kind: SegmentKind::Trailing,
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DotIndex;

    fn dot(i: usize) -> DotIndex {
        DotIndex::new(i).unwrap()
    }

    fn snapshot(sequence: &[usize], cursor: Option<Point>) -> GestureSnapshot {
        GestureSnapshot {
            sequence: sequence.iter().map(|&i| dot(i)).collect(),
            cursor,
            dragging: true,
        }
    }

    #[test]
    fn test_trailing_opacity_boundaries() {
        let center = Point::new(20.0, 20.0);
        let at = |d: f64| trailing_opacity(center, Point::new(20.0 + d, 20.0), DEFAULT_FADE_DISTANCE);
        assert!((at(20.0) - 1.0).abs() < f64::EPSILON);
        assert!((at(10.0) - 0.5).abs() < f64::EPSILON);
        assert!(at(0.0).abs() < f64::EPSILON);
        assert!((at(30.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trailing_opacity_diagonal() {
        let opacity = trailing_opacity(Point::new(20.0, 20.0), Point::new(26.0, 28.0), 20.0);
        assert!((opacity - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_segments_for_sequence() {
        let segments = path_segments(&snapshot(&[0, 1, 4], Some(Point::new(60.0, 90.0))), 20.0);
        assert_eq!(segments.len(), 3);

        assert_eq!(segments[0].kind, SegmentKind::Committed);
        assert_eq!(segments[0].start, Point::new(20.0, 20.0));
        assert_eq!(segments[0].end, Point::new(60.0, 20.0));
        assert_eq!(segments[1].start, Point::new(60.0, 20.0));
        assert_eq!(segments[1].end, Point::new(60.0, 60.0));
        assert!((segments[1].opacity - 1.0).abs() < f64::EPSILON);

        let trailing = segments[2];
        assert_eq!(trailing.kind, SegmentKind::Trailing);
        assert_eq!(trailing.start, Point::new(60.0, 60.0));
        assert_eq!(trailing.end, Point::new(60.0, 90.0));
        assert!((trailing.opacity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trailing_falls_back_to_dot_center() {
        let segments = path_segments(&snapshot(&[4], None), 20.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, segments[0].end);
        assert!(segments[0].opacity.abs() < f64::EPSILON);
        assert_eq!(segments[0].line(), Line::new(Point::new(60.0, 60.0), Point::new(60.0, 60.0)));
    }

    #[test]
    fn test_no_segments_when_idle() {
        let mut idle = snapshot(&[0, 1], None);
        idle.dragging = false;
        assert!(path_segments(&idle, 20.0).is_empty());
        assert!(path_segments(&GestureSnapshot::default(), 20.0).is_empty());
    }
}
