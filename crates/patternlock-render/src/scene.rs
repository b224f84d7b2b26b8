//! Backend-independent display list for one frame.

use kurbo::{Circle, Line};
use patternlock_core::geometry::{DotIndex, dot_center};
use patternlock_core::path::{SegmentKind, path_segments};
use peniko::Color;

use crate::renderer::RenderContext;

/// One drawable item, in logical coordinates.
#[derive(Debug, Clone)]
pub enum DisplayItem {
    Dot {
        index: DotIndex,
        circle: Circle,
        color: Color,
        /// Part of the current sequence; drawn with the pop animation.
        touched: bool,
    },
    Line {
        line: Line,
        color: Color,
        width: f64,
        opacity: f64,
        /// Committed segment; drawn with the fade-out animation.
        fading: bool,
    },
}

/// Build the items to draw for `ctx`: all nine dots, then the path on top.
pub fn build_display_list(ctx: &RenderContext) -> Vec<DisplayItem> {
    let style = &ctx.style;
    let mut items: Vec<DisplayItem> = DotIndex::all()
        .map(|index| DisplayItem::Dot {
            index,
            circle: Circle::new(dot_center(index), style.dot_radius),
            color: style.dot_color,
            touched: ctx.snapshot.is_visited(index),
        })
        .collect();

    items.extend(
        path_segments(ctx.snapshot, ctx.fade_distance)
            .into_iter()
            .map(|segment| DisplayItem::Line {
                line: Line::new(segment.start, segment.end),
                color: style.line_color,
                width: style.line_width,
                opacity: segment.opacity,
                fading: segment.kind == SegmentKind::Committed,
            }),
    );

    items
}
