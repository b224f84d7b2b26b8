//! SVG output backend.
//!
//! Produces a standalone document on the 120x120 logical viewBox. Visited
//! dots get the `touched` class (pop animation) and committed path segments
//! the `fade` class, matching the stylesheet embedded in the document.

use std::fmt::Write;

use patternlock_core::geometry::LOGICAL_CANVAS_SIZE;
use peniko::Color;

use crate::renderer::{RenderContext, RenderResult, Renderer};
use crate::scene::{DisplayItem, build_display_list};

/// Animation rules for visited dots and committed segments.
fn stylesheet(touched_scale: f64) -> String {
    format!(
        "circle.touched {{ animation: pop .05s ease alternate; animation-iteration-count: 2; }}\n\
         @keyframes pop {{ to {{ transform: scale({}); }} }}\n\
         line.fade {{ animation: fade .5s ease forwards; }}\n\
         @keyframes fade {{ to {{ opacity: 0; }} }}",
        num(touched_scale)
    )
}

/// Renders frames to SVG markup.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    output: String,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup of the last built frame.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Take the markup of the last built frame.
    pub fn into_output(self) -> String {
        self.output
    }

    /// Build one frame and return its markup.
    pub fn render_to_string(ctx: &RenderContext) -> RenderResult<String> {
        let mut renderer = Self::new();
        renderer.build_scene(ctx)?;
        Ok(renderer.into_output())
    }
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{w}" height="{h}">"#,
            size = num(LOGICAL_CANVAS_SIZE),
            w = num(ctx.viewport_size.width),
            h = num(ctx.viewport_size.height),
        )?;
        writeln!(out, "<style>\n{}\n</style>", stylesheet(ctx.style.touched_scale))?;

        if let Some(background) = self.background_color(ctx) {
            writeln!(
                out,
                r#"<rect width="100%" height="100%" {}/>"#,
                paint("fill", background)
            )?;
        }

        for item in build_display_list(ctx) {
            match item {
                DisplayItem::Dot {
                    circle,
                    color,
                    touched,
                    ..
                } => {
                    let class = if touched { r#" class="touched""# } else { "" };
                    writeln!(
                        out,
                        r#"<circle r="{r}" cx="{cx}" cy="{cy}" {fill}{class} style="transform-origin: {cx}px {cy}px"/>"#,
                        r = num(circle.radius),
                        cx = num(circle.center.x),
                        cy = num(circle.center.y),
                        fill = paint("fill", color),
                    )?;
                }
                DisplayItem::Line {
                    line,
                    color,
                    width,
                    opacity,
                    fading,
                } => {
                    let class = if fading { r#" class="fade""# } else { "" };
                    let style = if fading {
                        String::new()
                    } else {
                        format!(r#" style="opacity: {}""#, num(opacity))
                    };
                    writeln!(
                        out,
                        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-width="{}"{}{}/>"#,
                        num(line.p0.x),
                        num(line.p0.y),
                        num(line.p1.x),
                        num(line.p1.y),
                        paint("stroke", color),
                        num(width),
                        class,
                        style,
                    )?;
                }
            }
        }

        out.push_str("</svg>\n");
        self.output = out;
        Ok(())
    }
}

/// Format a number with at most three decimals and no trailing zeros.
fn num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// `fill="#rrggbb"` plus an opacity attribute when the color is translucent.
fn paint(attr: &str, color: Color) -> String {
    let rgba = color.to_rgba8();
    let mut s = format!(r##"{}="#{:02x}{:02x}{:02x}""##, attr, rgba.r, rgba.g, rgba.b);
    if rgba.a < 255 {
        s.push_str(&format!(r#" {}-opacity="{}""#, attr, num(f64::from(rgba.a) / 255.0)));
    }
    s
}
