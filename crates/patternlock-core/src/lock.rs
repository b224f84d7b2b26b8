//! The pattern lock controller.
//!
//! [`PatternLock`] wires host pointer input into the [`GestureTracker`]:
//! presses start a gesture, moves are hit-tested against the dots and
//! projected into logical space, releases end the gesture. Only the pointer
//! that started a gesture can drive it.

use kurbo::Point;
use std::fmt;

use crate::capture::{NoopCapture, PointerCapture};
use crate::config::PatternLockConfig;
use crate::geometry::DotIndex;
use crate::haptics::{Haptics, platform_haptics};
use crate::hit_test::{DotBoxSource, LayoutDotBoxes, hit_test_dots};
use crate::input::{PointerEvent, PointerId};
use crate::path::{PathSegment, path_segments};
use crate::projector::CanvasLayout;
use crate::tracker::{GestureSnapshot, GestureTracker, Pattern};

/// Gesture engine for one pattern widget.
pub struct PatternLock {
    config: PatternLockConfig,
    tracker: GestureTracker,
    layout: Option<CanvasLayout>,
    /// Overrides the boxes derived from `layout` when set.
    dot_boxes: Option<Box<dyn DotBoxSource>>,
    capture: Box<dyn PointerCapture>,
    /// Pointer driving the current gesture.
    active: Option<PointerId>,
}

impl fmt::Debug for PatternLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternLock")
            .field("config", &self.config)
            .field("tracker", &self.tracker)
            .field("layout", &self.layout)
            .field("active", &self.active)
            .finish()
    }
}

impl Default for PatternLock {
    fn default() -> Self {
        Self::new(PatternLockConfig::default())
    }
}

impl PatternLock {
    /// Create a widget using the platform's haptics.
    pub fn new(config: PatternLockConfig) -> Self {
        Self::with_haptics(config, platform_haptics())
    }

    /// Create a widget with a specific haptics implementation.
    pub fn with_haptics(config: PatternLockConfig, haptics: Box<dyn Haptics>) -> Self {
        let tracker = GestureTracker::new(haptics, config.vibrate_ms);
        Self {
            config,
            tracker,
            layout: None,
            dot_boxes: None,
            capture: Box::new(NoopCapture),
            active: None,
        }
    }

    /// Use `capture` to route pointer events to this widget during gestures.
    pub fn with_capture(mut self, capture: Box<dyn PointerCapture>) -> Self {
        self.capture = capture;
        self
    }

    /// Tell the widget where its canvas is on screen.
    pub fn set_layout(&mut self, layout: CanvasLayout) {
        self.layout = Some(layout);
    }

    pub fn layout(&self) -> Option<CanvasLayout> {
        self.layout
    }

    /// Hit-test against boxes from `source` instead of the computed layout boxes.
    pub fn set_dot_boxes(&mut self, source: Box<dyn DotBoxSource>) {
        self.dot_boxes = Some(source);
    }

    /// Register a callback that receives each finished gesture before it is cleared.
    pub fn on_complete(&mut self, listener: impl FnMut(&GestureSnapshot) + 'static) {
        self.tracker.on_complete(listener);
    }

    /// Copy of the current gesture state.
    pub fn snapshot(&self) -> GestureSnapshot {
        self.tracker.snapshot()
    }

    /// Line segments for drawing the current path.
    pub fn path_segments(&self) -> Vec<PathSegment> {
        path_segments(&self.tracker.snapshot(), self.config.fade_distance)
    }

    /// Pointer currently driving a gesture.
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.active
    }

    /// Dot under a device-space position, if any.
    pub fn hit_test(&self, device: Point) -> Option<DotIndex> {
        if let Some(source) = &self.dot_boxes {
            return hit_test_dots(source.as_ref(), device, self.config.hit_padding);
        }
        let layout = self.layout?;
        let source = LayoutDotBoxes {
            layout,
            dot_radius: self.config.dot_radius,
        };
        hit_test_dots(&source, device, self.config.hit_padding)
    }

    /// `pointer` was pressed on `dot`.
    pub fn pointer_down(&mut self, dot: DotIndex, pointer: PointerId) -> bool {
        if !self.tracker.drag_start(dot) {
            return false;
        }
        self.active = Some(pointer);
        self.capture.acquire(pointer);
        true
    }

    /// The pointer entered `dot`.
    pub fn pointer_entered_dot(&mut self, dot: DotIndex) -> bool {
        self.tracker.hover_dot(dot)
    }

    /// `pointer` moved to `device` (device pixels).
    pub fn pointer_moved(&mut self, pointer: PointerId, device: Point) {
        if self.active != Some(pointer) {
            return;
        }
        if let Some(dot) = self.hit_test(device) {
            self.pointer_entered_dot(dot);
        }
        match self.layout {
            Some(layout) => self.tracker.update_cursor(layout.device_to_logical(device)),
            None => log::warn!("pointer move before canvas layout, cursor not updated"),
        }
    }

    /// `pointer` was released. Returns the finished pattern.
    pub fn pointer_up(&mut self, pointer: PointerId) -> Option<Pattern> {
        if self.active.is_some_and(|active| active != pointer) {
            return None;
        }
        self.end_gesture()
    }

    /// Force the current gesture to end, e.g. after contact was lost.
    pub fn cancel(&mut self) -> Option<Pattern> {
        self.end_gesture()
    }

    /// Feed one pointer event. Returns a pattern when the event finished a gesture.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<Pattern> {
        match event {
            PointerEvent::Down { pointer, position } => {
                if let Some(dot) = self.hit_test(position) {
                    self.pointer_down(dot, pointer);
                }
                None
            }
            PointerEvent::Move { pointer, position } => {
                self.pointer_moved(pointer, position);
                None
            }
            PointerEvent::Up { pointer, .. } => self.pointer_up(pointer),
            PointerEvent::Cancel { pointer } => {
                if self.active == Some(pointer) {
                    self.end_gesture()
                } else {
                    None
                }
            }
        }
    }

    fn end_gesture(&mut self) -> Option<Pattern> {
        let pattern = self.tracker.drag_end();
        if let Some(pointer) = self.active.take() {
            self.capture.release(pointer);
        }
        pattern
    }
}

impl Drop for PatternLock {
    fn drop(&mut self) {
        if let Some(pointer) = self.active.take() {
            self.capture.release(pointer);
        }
    }
}
