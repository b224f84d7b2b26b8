//! Pointer capture hooks.
//!
//! While a gesture is in progress the widget needs every move and release of
//! the pointer, even after it leaves the canvas. The host grants that through
//! a [`PointerCapture`]. The controller acquires it at drag start and releases
//! it on every path that ends the gesture.

use crate::input::PointerId;

/// Host hook for routing all events of one pointer to the widget.
pub trait PointerCapture {
    /// Start delivering every event of `pointer` to the widget.
    fn acquire(&mut self, pointer: PointerId);
    /// Stop the delivery started by [`PointerCapture::acquire`].
    fn release(&mut self, pointer: PointerId);
}

/// Capture for hosts that already deliver every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCapture;

impl PointerCapture for NoopCapture {
    fn acquire(&mut self, _pointer: PointerId) {}
    fn release(&mut self, _pointer: PointerId) {}
}
