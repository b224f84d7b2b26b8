//! PatternLock Application
//!
//! Command line host for the gesture engine: replays recorded pointer
//! traces and renders frames to SVG.

pub mod replay;

use patternlock_core::config::ConfigError;
use patternlock_core::geometry::GeometryError;
use patternlock_core::projector::ProjectionError;
use patternlock_render::RendererError;
use thiserror::Error;

pub use replay::{ReplayReport, Trace, TraceCanvas, replay};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Trace error: {0}")]
    Trace(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Layout error: {0}")]
    Layout(#[from] ProjectionError),
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] GeometryError),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
    #[error("Invalid pattern syntax: {0}")]
    Syntax(String),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
