//! Renderer trait abstraction.

use kurbo::Size;
use patternlock_core::config::PatternLockConfig;
use patternlock_core::tracker::GestureSnapshot;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Colors and stroke widths of the widget.
#[derive(Debug, Clone, Copy)]
pub struct PatternStyle {
    /// Background behind the grid; `None` leaves it transparent.
    pub background: Option<Color>,
    /// Dot fill color.
    pub dot_color: Color,
    /// Visual dot radius in logical units.
    pub dot_radius: f64,
    /// Scale applied to a visited dot.
    pub touched_scale: f64,
    /// Path line color.
    pub line_color: Color,
    /// Path line width in logical units.
    pub line_width: f64,
}

impl Default for PatternStyle {
    fn default() -> Self {
        Self {
            background: None,
            dot_color: Color::from_rgba8(255, 255, 255, 255),
            dot_radius: 2.5,
            touched_scale: 2.0,
            line_color: Color::from_rgba8(255, 255, 255, 255),
            line_width: 1.4,
        }
    }
}

impl PatternStyle {
    /// Default style with the dot radius taken from `config`.
    pub fn from_config(config: &PatternLockConfig) -> Self {
        Self {
            dot_radius: config.dot_radius,
            ..Self::default()
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Gesture state to draw.
    pub snapshot: &'a GestureSnapshot,
    /// Visual style.
    pub style: PatternStyle,
    /// Distance at which the trailing line is fully opaque.
    pub fade_distance: f64,
    /// On-screen size of the canvas in device pixels.
    pub viewport_size: Size,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(snapshot: &'a GestureSnapshot, config: &PatternLockConfig) -> Self {
        Self {
            snapshot,
            style: PatternStyle::from_config(config),
            fade_distance: config.fade_distance,
            viewport_size: Size::new(config.canvas_width, config.canvas_width),
        }
    }

    /// Set the style.
    pub fn with_style(mut self, style: PatternStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the viewport size.
    pub fn with_viewport(mut self, size: Size) -> Self {
        self.viewport_size = size;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the output for one frame.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Option<Color> {
        ctx.style.background
    }
}
