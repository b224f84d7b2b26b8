//! Device-to-logical coordinate projection.
//!
//! The logical canvas is always a 120x120 square, however large it is drawn
//! on screen. Both axes are scaled by the factor derived from the on-screen
//! width, since the canvas preserves its aspect ratio.

use kurbo::{Point, Rect};
use thiserror::Error;

use crate::geometry::{DotIndex, LOGICAL_CANVAS_SIZE, dot_bounds};

/// Projection errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProjectionError {
    #[error("Canvas has not been laid out (width {0})")]
    CanvasNotLaidOut(f64),
}

/// Scale a single device-space axis value into logical units.
///
/// `canvas_width` must be positive; use [`CoordinateProjector::new`] to have
/// that checked once up front.
pub fn project_device_to_logical(device: f64, canvas_width: f64) -> f64 {
    device * LOGICAL_CANVAS_SIZE / canvas_width
}

/// Scales between device pixels and logical units for a canvas of known width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateProjector {
    canvas_width: f64,
}

impl CoordinateProjector {
    /// Create a projector for a canvas drawn `canvas_width` device pixels wide.
    pub fn new(canvas_width: f64) -> Result<Self, ProjectionError> {
        if canvas_width.is_finite() && canvas_width > 0.0 {
            Ok(Self { canvas_width })
        } else {
            Err(ProjectionError::CanvasNotLaidOut(canvas_width))
        }
    }

    /// On-screen width of the canvas in device pixels.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Logical units per device pixel.
    pub fn scale(&self) -> f64 {
        LOGICAL_CANVAS_SIZE / self.canvas_width
    }

    /// Project one device-space axis value.
    pub fn to_logical(&self, device: f64) -> f64 {
        project_device_to_logical(device, self.canvas_width)
    }

    /// Project one logical axis value back to device pixels.
    pub fn to_device(&self, logical: f64) -> f64 {
        logical * self.canvas_width / LOGICAL_CANVAS_SIZE
    }
}

/// Where the canvas currently sits on screen, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    origin: Point,
    projector: CoordinateProjector,
}

impl CanvasLayout {
    /// Create a layout, rejecting canvases that have no size yet.
    pub fn new(origin: Point, width: f64) -> Result<Self, ProjectionError> {
        Ok(Self {
            origin,
            projector: CoordinateProjector::new(width)?,
        })
    }

    /// Top-left corner of the canvas.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Rendered width (and height) of the canvas.
    pub fn width(&self) -> f64 {
        self.projector.canvas_width()
    }

    /// Device-space bounds of the whole canvas.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width(),
            self.origin.y + self.width(),
        )
    }

    /// Convert a device point to logical canvas coordinates.
    pub fn device_to_logical(&self, device: Point) -> Point {
        let projector = self.projector;
        Point::new(
            projector.to_logical(device.x - self.origin.x),
            projector.to_logical(device.y - self.origin.y),
        )
    }

    /// Convert a logical point to device coordinates.
    pub fn logical_to_device(&self, logical: Point) -> Point {
        let projector = self.projector;
        Point::new(
            self.origin.x + projector.to_device(logical.x),
            self.origin.y + projector.to_device(logical.y),
        )
    }

    /// Device-space bounding box of one dot drawn with `radius` logical units.
    pub fn dot_box(&self, dot: DotIndex, radius: f64) -> Rect {
        let logical = dot_bounds(dot, radius);
        let p0 = self.logical_to_device(Point::new(logical.x0, logical.y0));
        let p1 = self.logical_to_device(Point::new(logical.x1, logical.y1));
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }
}
