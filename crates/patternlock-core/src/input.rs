//! Pointer events for unified mouse/touch handling.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};

/// Identifies one contact point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerId {
    /// The (single) mouse cursor.
    Mouse,
    /// A finger, by the platform's touch id.
    Touch(u64),
}

/// Pointer event in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { pointer: PointerId, position: Point },
    Move { pointer: PointerId, position: Point },
    Up { pointer: PointerId, position: Point },
    /// Contact was lost without a release (focus loss, touch cancel).
    Cancel { pointer: PointerId },
}

impl PointerEvent {
    /// The pointer this event belongs to.
    pub fn pointer(&self) -> PointerId {
        match *self {
            PointerEvent::Down { pointer, .. }
            | PointerEvent::Move { pointer, .. }
            | PointerEvent::Up { pointer, .. }
            | PointerEvent::Cancel { pointer } => pointer,
        }
    }

    /// Device position, if the event carries one.
    pub fn position(&self) -> Option<Point> {
        match *self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position, .. }
            | PointerEvent::Up { position, .. } => Some(position),
            PointerEvent::Cancel { .. } => None,
        }
    }
}

/// Translates winit window events into [`PointerEvent`]s.
///
/// Mouse button events carry no position in winit, so the last cursor
/// position is remembered here. Only the left button draws.
#[derive(Debug, Clone, Default)]
pub struct WinitPointerAdapter {
    cursor: Point,
    /// Pointer currently pressed, if any.
    pressed: Option<PointerId>,
}

impl WinitPointerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known mouse position in physical pixels.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Translate one window event. Returns `None` for events that are not pointer input.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_moved(Point::new(position.x, position.y))
            }
            WindowEvent::MouseInput { state, button, .. } => self.mouse_button(*state, *button),
            WindowEvent::Touch(Touch {
                phase, location, id, ..
            }) => Some(self.touch(*phase, *id, Point::new(location.x, location.y))),
            WindowEvent::Focused(false) => self.focus_lost(),
            _ => None,
        }
    }

    fn mouse_moved(&mut self, position: Point) -> Option<PointerEvent> {
        self.cursor = position;
        Some(PointerEvent::Move {
            pointer: PointerId::Mouse,
            position,
        })
    }

    fn mouse_button(&mut self, state: ElementState, button: MouseButton) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }
        let pointer = PointerId::Mouse;
        let position = self.cursor;
        match state {
            ElementState::Pressed => {
                self.pressed = Some(pointer);
                Some(PointerEvent::Down { pointer, position })
            }
            ElementState::Released => {
                if self.pressed == Some(pointer) {
                    self.pressed = None;
                }
                Some(PointerEvent::Up { pointer, position })
            }
        }
    }

    fn touch(&mut self, phase: TouchPhase, id: u64, position: Point) -> PointerEvent {
        let pointer = PointerId::Touch(id);
        match phase {
            TouchPhase::Started => {
                self.pressed.get_or_insert(pointer);
                PointerEvent::Down { pointer, position }
            }
            TouchPhase::Moved => PointerEvent::Move { pointer, position },
            TouchPhase::Ended => {
                self.release(pointer);
                PointerEvent::Up { pointer, position }
            }
            TouchPhase::Cancelled => {
                self.release(pointer);
                PointerEvent::Cancel { pointer }
            }
        }
    }

    fn release(&mut self, pointer: PointerId) {
        if self.pressed == Some(pointer) {
            self.pressed = None;
        }
    }

    fn focus_lost(&mut self) -> Option<PointerEvent> {
        self.pressed
            .take()
            .map(|pointer| PointerEvent::Cancel { pointer })
    }
}
