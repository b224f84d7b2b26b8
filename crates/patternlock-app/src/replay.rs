//! Replaying recorded pointer traces through the gesture engine.

use kurbo::Point;
use patternlock_core::config::PatternLockConfig;
use patternlock_core::haptics::Haptics;
use patternlock_core::input::PointerEvent;
use patternlock_core::lock::PatternLock;
use patternlock_core::projector::CanvasLayout;
use patternlock_core::tracker::{GestureSnapshot, Pattern};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;

use crate::AppResult;

/// Where the canvas sat on screen while the trace was recorded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TraceCanvas {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
}

/// A recorded sequence of pointer events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trace {
    /// Canvas placement; defaults to the origin at the configured width.
    #[serde(default)]
    pub canvas: Option<TraceCanvas>,
    pub events: Vec<PointerEvent>,
}

impl Trace {
    /// Parse a JSON trace.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON trace file.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Outcome of a replay.
#[derive(Debug, Clone, Default)]
pub struct ReplayReport {
    /// Every submitted pattern, in order.
    pub patterns: Vec<Pattern>,
    /// Final frame of the last submitted gesture, captured before its reset.
    pub last_frame: Option<GestureSnapshot>,
    /// Number of haptic pulses fired.
    pub vibrations: usize,
    /// Canvas placement the trace was replayed against.
    pub canvas: Option<CanvasLayout>,
}

/// Haptics that count pulses and log them.
struct CountingHaptics(Rc<Cell<usize>>);

impl Haptics for CountingHaptics {
    fn vibrate(&mut self, duration_ms: u32) {
        self.0.set(self.0.get() + 1);
        log::trace!("vibrate {} ms", duration_ms);
    }
}

/// Feed every event of `trace` through a fresh widget.
pub fn replay(trace: &Trace, config: &PatternLockConfig) -> AppResult<ReplayReport> {
    let canvas = trace.canvas.unwrap_or(TraceCanvas {
        x: 0.0,
        y: 0.0,
        width: config.canvas_width,
    });
    let layout = CanvasLayout::new(Point::new(canvas.x, canvas.y), canvas.width)?;

    let vibrations = Rc::new(Cell::new(0));
    let last_frame = Rc::new(RefCell::new(None));

    let mut lock = PatternLock::with_haptics(
        config.clone(),
        Box::new(CountingHaptics(vibrations.clone())),
    );
    lock.set_layout(layout);
    let sink = last_frame.clone();
    lock.on_complete(move |snapshot| {
        *sink.borrow_mut() = Some(snapshot.clone());
    });

    let mut patterns = Vec::new();
    for event in &trace.events {
        if let Some(pattern) = lock.handle_pointer_event(*event) {
            log::info!("pattern submitted: {}", pattern);
            patterns.push(pattern);
        }
    }
    if let Some(pattern) = lock.cancel() {
        log::warn!("trace ended mid-gesture, pattern {} discarded", pattern);
    }

    let last_frame = last_frame.borrow().clone();
    Ok(ReplayReport {
        patterns,
        last_frame,
        vibrations: vibrations.get(),
        canvas: lock.layout(),
    })
}
