//! Gesture state machine.
//!
//! The tracker is either idle or dragging. While dragging it collects the
//! dots the pointer passes over, each at most once, in the order they were
//! first reached. The sequence, the cursor position and the dragging flag
//! are only ever changed together by the transition methods below.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::DotIndex;
use crate::haptics::{DEFAULT_VIBRATE_MS, Haptics, NoopHaptics};

/// A finished, duplicate-free sequence of dots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(Vec<DotIndex>);

impl Pattern {
    /// Raw indices in visiting order.
    pub fn indices(&self) -> Vec<usize> {
        self.0.iter().map(|dot| dot.get()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, dot) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{}", dot)?;
        }
        Ok(())
    }
}

/// Read-only copy of the gesture state, taken between transitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureSnapshot {
    /// Dots visited so far, in order.
    pub sequence: Vec<DotIndex>,
    /// Current finger position in logical coordinates.
    pub cursor: Option<Point>,
    /// Whether a gesture is in progress.
    pub dragging: bool,
}

impl GestureSnapshot {
    /// Whether `dot` has been visited in this gesture (drives highlighting).
    pub fn is_visited(&self, dot: DotIndex) -> bool {
        self.sequence.contains(&dot)
    }

    /// The most recently captured dot.
    pub fn last_dot(&self) -> Option<DotIndex> {
        self.sequence.last().copied()
    }
}

/// Callback invoked with the final gesture state just before it is reset.
pub type CompletionListener = Box<dyn FnMut(&GestureSnapshot)>;

/// The interaction state machine behind the widget.
pub struct GestureTracker {
    state: GestureSnapshot,
    haptics: Box<dyn Haptics>,
    vibrate_ms: u32,
    listeners: Vec<CompletionListener>,
}

impl fmt::Debug for GestureTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureTracker")
            .field("state", &self.state)
            .field("vibrate_ms", &self.vibrate_ms)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(Box::new(NoopHaptics), DEFAULT_VIBRATE_MS)
    }
}

impl GestureTracker {
    /// Create an idle tracker that buzzes `haptics` for `vibrate_ms` on every new dot.
    pub fn new(haptics: Box<dyn Haptics>, vibrate_ms: u32) -> Self {
        Self {
            state: GestureSnapshot::default(),
            haptics,
            vibrate_ms,
            listeners: Vec::new(),
        }
    }

    /// Register a callback that sees every finished gesture before it is cleared.
    pub fn on_complete(&mut self, listener: impl FnMut(&GestureSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> GestureSnapshot {
        self.state.clone()
    }

    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    /// Dots visited so far.
    pub fn sequence(&self) -> &[DotIndex] {
        &self.state.sequence
    }

    /// Current cursor position, if any.
    pub fn cursor(&self) -> Option<Point> {
        self.state.cursor
    }

    /// Begin a gesture on `dot`. Returns `false` if a gesture is already running.
    pub fn drag_start(&mut self, dot: DotIndex) -> bool {
        if self.state.dragging {
            log::warn!("drag start on dot {} ignored: gesture already in progress", dot);
            return false;
        }
        self.state = GestureSnapshot {
            sequence: vec![dot],
            cursor: None,
            dragging: true,
        };
        log::debug!("drag start on dot {}", dot);
        true
    }

    /// The pointer entered `dot`. Returns `true` if the dot was newly added.
    pub fn hover_dot(&mut self, dot: DotIndex) -> bool {
        if !self.state.dragging || self.state.sequence.contains(&dot) {
            return false;
        }
        self.state.sequence.push(dot);
        self.haptics.vibrate(self.vibrate_ms);
        log::debug!("dot {} captured", dot);
        true
    }

    /// Move the cursor to `position` (logical coordinates). Ignored while idle.
    pub fn update_cursor(&mut self, position: Point) {
        if self.state.dragging {
            self.state.cursor = Some(position);
        }
    }

    /// End the gesture, returning the finished pattern.
    ///
    /// Listeners are notified with the final state before it is reset.
    /// Calling this while idle does nothing and returns `None`.
    pub fn drag_end(&mut self) -> Option<Pattern> {
        if !self.state.dragging {
            return None;
        }
        for listener in &mut self.listeners {
            listener(&self.state);
        }
        let finished = std::mem::take(&mut self.state);
        let pattern = Pattern(finished.sequence);
        log::debug!("drag end, pattern {}", pattern);
        Some(pattern)
    }
}
