//! Fixed geometry of the 3x3 dot grid on the logical canvas.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Side length of the square logical canvas.
pub const LOGICAL_CANVAS_SIZE: f64 = 120.0;
/// Distance between neighbouring dot centers.
pub const DOT_SPACING: f64 = 40.0;
/// Offset of the first dot center from the canvas edge.
pub const DOT_OFFSET: f64 = 20.0;
/// Number of dots per row and per column.
pub const GRID_COLUMNS: u8 = 3;
/// Total number of dots.
pub const DOT_COUNT: usize = 9;

/// Geometry errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("Dot index out of range: {0} (expected 0..=8)")]
    InvalidIndex(usize),
}

/// Index of a dot in the grid, row-major, always in `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct DotIndex(u8);

impl DotIndex {
    /// Create a dot index, or `None` if it is outside the grid.
    pub fn new(index: usize) -> Option<Self> {
        (index < DOT_COUNT).then(|| Self(index as u8))
    }

    /// The raw index.
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Column of the dot (0..3).
    pub fn column(self) -> u8 {
        self.0 % GRID_COLUMNS
    }

    /// Row of the dot (0..3).
    pub fn row(self) -> u8 {
        self.0 / GRID_COLUMNS
    }

    /// All nine dots in ascending order.
    pub fn all() -> impl Iterator<Item = DotIndex> {
        (0..DOT_COUNT as u8).map(Self)
    }
}

impl TryFrom<usize> for DotIndex {
    type Error = GeometryError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(GeometryError::InvalidIndex(index))
    }
}

impl From<DotIndex> for usize {
    fn from(dot: DotIndex) -> Self {
        dot.get()
    }
}

impl fmt::Display for DotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Center of a dot in logical coordinates.
pub fn dot_center(dot: DotIndex) -> Point {
    Point::new(
        DOT_OFFSET + f64::from(dot.column()) * DOT_SPACING,
        DOT_OFFSET + f64::from(dot.row()) * DOT_SPACING,
    )
}

/// Center of a dot given a raw index, failing for indices outside the grid.
pub fn dot_center_checked(index: usize) -> Result<Point, GeometryError> {
    DotIndex::try_from(index).map(dot_center)
}

/// Logical bounding box of a dot drawn with the given radius.
pub fn dot_bounds(dot: DotIndex, radius: f64) -> Rect {
    Rect::from_center_size(dot_center(dot), Size::new(radius * 2.0, radius * 2.0))
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Clamp `value` into `[min, max]`. Assumes `min <= max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
