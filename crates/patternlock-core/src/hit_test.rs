//! Proximity hit-testing of the pointer against the dots.

use kurbo::{Point, Rect};

use crate::geometry::DotIndex;
use crate::projector::CanvasLayout;

/// Default tolerance around each dot box, in device pixels.
///
/// A fingertip covers far more than the drawn dot, so the exact box alone
/// makes for a very small target.
pub const DEFAULT_HIT_PADDING: f64 = 20.0;

/// Supplies up-to-date device-space bounding boxes for the nine dots.
pub trait DotBoxSource {
    /// Boxes for every dot, in any order.
    fn dot_boxes(&self) -> Vec<(DotIndex, Rect)>;
}

/// Boxes derived from the canvas position and the visual dot radius.
#[derive(Debug, Clone, Copy)]
pub struct LayoutDotBoxes {
    pub layout: CanvasLayout,
    pub dot_radius: f64,
}

impl DotBoxSource for LayoutDotBoxes {
    fn dot_boxes(&self) -> Vec<(DotIndex, Rect)> {
        DotIndex::all()
            .map(|dot| (dot, self.layout.dot_box(dot, self.dot_radius)))
            .collect()
    }
}

/// Check whether `point` lies inside `rect` grown by `padding` on every side.
/// Edges count as inside.
pub fn padded_contains(rect: Rect, point: Point, padding: f64) -> bool {
    point.x >= rect.x0 - padding
        && point.x <= rect.x1 + padding
        && point.y >= rect.y0 - padding
        && point.y <= rect.y1 + padding
}

/// Find the lowest-indexed dot whose padded box contains `pointer`.
pub fn find_hit_dot(pointer: Point, boxes: &[(DotIndex, Rect)], padding: f64) -> Option<DotIndex> {
    boxes
        .iter()
        .filter(|(_, rect)| padded_contains(*rect, pointer, padding))
        .map(|(dot, _)| *dot)
        .min()
}

/// Hit-test `pointer` against the boxes supplied by `source`.
pub fn hit_test_dots(source: &dyn DotBoxSource, pointer: Point, padding: f64) -> Option<DotIndex> {
    find_hit_dot(pointer, &source.dot_boxes(), padding)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(i: usize) -> DotIndex {
        DotIndex::new(i).unwrap()
    }

    /// A dot of radius 10 centered at (100, 100).
    fn single_box() -> Vec<(DotIndex, Rect)> {
        vec![(dot(0), Rect::new(90.0, 90.0, 110.0, 110.0))]
    }

    #[test]
    fn test_hit_inside_box() {
        assert_eq!(find_hit_dot(Point::new(100.0, 100.0), &single_box(), 0.0), Some(dot(0)));
    }

    #[test]
    fn test_hit_within_padding() {
        // 15 px to the right of the dot edge
        assert_eq!(
            find_hit_dot(Point::new(125.0, 100.0), &single_box(), DEFAULT_HIT_PADDING),
            Some(dot(0))
        );
        // 15 px above
        assert_eq!(
            find_hit_dot(Point::new(100.0, 75.0), &single_box(), DEFAULT_HIT_PADDING),
            Some(dot(0))
        );
    }

    #[test]
    fn test_miss_outside_padding() {
        assert_eq!(find_hit_dot(Point::new(135.0, 100.0), &single_box(), DEFAULT_HIT_PADDING), None);
        assert_eq!(find_hit_dot(Point::new(100.0, 65.0), &single_box(), DEFAULT_HIT_PADDING), None);
    }

    #[test]
    fn test_padding_edge_is_inclusive() {
        assert_eq!(
            find_hit_dot(Point::new(130.0, 130.0), &single_box(), DEFAULT_HIT_PADDING),
            Some(dot(0))
        );
    }

    #[test]
    fn test_first_dot_wins_on_overlap() {
        let boxes = vec![
            (dot(0), Rect::new(0.0, 0.0, 10.0, 10.0)),
            (dot(1), Rect::new(20.0, 0.0, 30.0, 10.0)),
        ];
        // Both padded boxes contain x = 15
        assert_eq!(find_hit_dot(Point::new(15.0, 5.0), &boxes, 10.0), Some(dot(0)));
    }

    #[test]
    fn test_lowest_index_wins_regardless_of_order() {
        let boxes = vec![
            (dot(5), Rect::new(0.0, 0.0, 10.0, 10.0)),
            (dot(1), Rect::new(5.0, 0.0, 15.0, 10.0)),
        ];
        assert_eq!(find_hit_dot(Point::new(7.0, 5.0), &boxes, 0.0), Some(dot(1)));
        assert_eq!(find_hit_dot(Point::new(2.0, 5.0), &boxes, 0.0), Some(dot(5)));
    }

    #[test]
    fn test_layout_source() {
        let source = LayoutDotBoxes {
            layout: CanvasLayout::new(Point::ZERO, 120.0).unwrap(),
            dot_radius: 2.5,
        };
        let boxes = source.dot_boxes();
        assert_eq!(boxes.len(), 9);
        assert_eq!(hit_test_dots(&source, Point::new(60.0, 60.0), 0.0), Some(dot(4)));
        assert_eq!(hit_test_dots(&source, Point::new(40.0, 40.0), 0.0), None);
        assert_eq!(hit_test_dots(&source, Point::new(40.0, 40.0), DEFAULT_HIT_PADDING), Some(dot(0)));
    }
}
