//! PatternLock Render Library
//!
//! Turns gesture snapshots into drawable frames. The display list is
//! backend-independent; the SVG backend serializes it for the web and for
//! offline inspection.

mod renderer;
mod scene;
mod svg;

pub use renderer::{PatternStyle, RenderContext, RenderResult, Renderer, RendererError};
pub use scene::{DisplayItem, build_display_list};
pub use svg::SvgRenderer;
