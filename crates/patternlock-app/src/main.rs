//! Main application entry point.

use clap::{Parser, Subcommand};
use kurbo::Size;
use patternlock_app::{AppError, AppResult, Trace, replay};
use patternlock_core::config::PatternLockConfig;
use patternlock_core::geometry::DotIndex;
use patternlock_core::tracker::GestureSnapshot;
use patternlock_render::{RenderContext, SvgRenderer};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "patternlock", about = "Replay and render unlock-pattern gestures")]
struct Cli {
    /// JSON config file (missing fields take their defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a recorded pointer trace and print every submitted pattern
    Replay {
        trace: PathBuf,
        /// Write the final frame of the last submitted pattern as SVG
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Render a pattern such as `0-1-4` as an SVG frame
    Render {
        pattern: String,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = match &cli.config {
        Some(path) => PatternLockConfig::load(path)?,
        None => PatternLockConfig::default(),
    };

    match cli.command {
        Command::Replay { trace, svg } => {
            log::info!("Replaying {}", trace.display());
            let report = replay(&Trace::load(&trace)?, &config)?;
            for pattern in &report.patterns {
                println!(
                    "{}",
                    serde_json::json!({ "pattern": pattern, "display": pattern.to_string() })
                );
            }
            log::info!(
                "{} pattern(s), {} haptic pulse(s)",
                report.patterns.len(),
                report.vibrations
            );
            if let (Some(path), Some(frame)) = (svg, report.last_frame) {
                // Draw at the size the canvas had while recording
                let viewport = report.canvas.map(|canvas| canvas.bounds().size());
                write_frame(&frame, &config, viewport, Some(path.as_path()))?;
            }
        }
        Command::Render { pattern, out } => {
            let frame = GestureSnapshot {
                sequence: parse_pattern(&pattern)?,
                cursor: None,
                dragging: true,
            };
            write_frame(&frame, &config, None, out.as_deref())?;
        }
    }
    Ok(())
}

/// Parse `0-1-4` (or `0,1,4`) into distinct dots.
fn parse_pattern(text: &str) -> AppResult<Vec<DotIndex>> {
    let mut seen = HashSet::new();
    let mut dots = Vec::new();
    for part in text.split(['-', ',']).map(str::trim).filter(|p| !p.is_empty()) {
        let index: usize = part
            .parse()
            .map_err(|_| AppError::Syntax(format!("not a dot index: {:?}", part)))?;
        let dot = DotIndex::try_from(index)?;
        if !seen.insert(dot) {
            return Err(AppError::Syntax(format!("dot {} repeated", dot)));
        }
        dots.push(dot);
    }
    if dots.is_empty() {
        return Err(AppError::Syntax("empty pattern".to_string()));
    }
    Ok(dots)
}

fn write_frame(
    frame: &GestureSnapshot,
    config: &PatternLockConfig,
    viewport: Option<Size>,
    path: Option<&Path>,
) -> AppResult<()> {
    let mut ctx = RenderContext::new(frame, config);
    if let Some(size) = viewport {
        ctx = ctx.with_viewport(size);
    }
    let svg = SvgRenderer::render_to_string(&ctx)?;
    match path {
        Some(path) => {
            std::fs::write(path, svg)?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{}", svg),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern() {
        let dots = parse_pattern("0-1-4").unwrap();
        assert_eq!(dots.iter().map(|d| d.get()).collect::<Vec<_>>(), vec![0, 1, 4]);
        assert_eq!(parse_pattern(" 2, 5 ,1").unwrap().len(), 3);
    }

    #[test]
    fn test_parse_pattern_errors() {
        assert!(matches!(parse_pattern("0-9"), Err(AppError::Pattern(_))));
        assert!(matches!(parse_pattern("0-0"), Err(AppError::Syntax(_))));
        assert!(matches!(parse_pattern("a-1"), Err(AppError::Syntax(_))));
        assert!(matches!(parse_pattern(""), Err(AppError::Syntax(_))));
    }

    #[test]
    fn test_render_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.svg");
        run(Cli {
            config: None,
            command: Command::Render {
                pattern: "6-4-2".to_string(),
                out: Some(path.clone()),
            },
        })
        .unwrap();
        let svg = std::fs::read_to_string(path).unwrap();
        assert_eq!(svg.matches(r#"class="touched""#).count(), 3);
        assert_eq!(svg.matches(r#"class="fade""#).count(), 2);
    }

    #[test]
    fn test_replay_frame_uses_trace_canvas_size() {
        let dir = tempfile::tempdir().unwrap();
        let trace = dir.path().join("trace.json");
        let svg = dir.path().join("frame.svg");
        std::fs::write(
            &trace,
            r#"{"canvas": {"width": 240}, "events": [
                {"type": "down", "pointer": "mouse", "position": {"x": 40, "y": 40}},
                {"type": "up", "pointer": "mouse", "position": {"x": 40, "y": 40}}
            ]}"#,
        )
        .unwrap();
        run(Cli {
            config: None,
            command: Command::Replay {
                trace,
                svg: Some(svg.clone()),
            },
        })
        .unwrap();
        let svg = std::fs::read_to_string(svg).unwrap();
        assert!(svg.contains(r#"width="240" height="240""#));
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["patternlock", "replay", "trace.json", "--svg", "out.svg"]).unwrap();
        assert!(matches!(cli.command, Command::Replay { svg: Some(_), .. }));
    }
}
