//! PatternLock Core Library
//!
//! Platform-agnostic gesture tracking and hit-testing for a 3x3 unlock
//! pattern widget. Pointer input goes in, an ordered duplicate-free sequence
//! of dots and the geometry of the in-progress path come out.

pub mod capture;
pub mod config;
pub mod geometry;
pub mod haptics;
pub mod hit_test;
pub mod input;
pub mod lock;
pub mod path;
pub mod projector;
pub mod tracker;

pub use capture::{NoopCapture, PointerCapture};
pub use config::{ConfigError, PatternLockConfig};
pub use geometry::{DotIndex, GeometryError, LOGICAL_CANVAS_SIZE, dot_center};
pub use haptics::{Haptics, NoopHaptics};
pub use hit_test::{DotBoxSource, find_hit_dot};
pub use input::{PointerEvent, PointerId, WinitPointerAdapter};
pub use lock::PatternLock;
pub use path::{PathSegment, SegmentKind, path_segments, trailing_opacity};
pub use projector::{CanvasLayout, CoordinateProjector, ProjectionError};
pub use tracker::{GestureSnapshot, GestureTracker, Pattern};
