// pathfinder/demo/svg-turtle/src/svg.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A canvas backend that builds an SVG document in memory.

use abstract_turtle::canvas::{Canvas, CanvasResult};
use std::sync::{Arc, Mutex, PoisonError};
use turtle_geometry::basic::point::Position;
use turtle_geometry::color::Color;

const HAIRLINE_STROKE_WIDTH: f64 = 0.0333;

#[derive(Debug)]
struct SvgDocument {
    width: u32,
    height: u32,
    background: Option<Color>,
    elements: Vec<String>,
}

/// Clones render into the same document, so a caller can hand one clone to
/// a turtle context and keep another to read the result.
#[derive(Clone, Debug)]
pub struct SvgCanvas {
    document: Arc<Mutex<SvgDocument>>,
}

impl SvgCanvas {
    pub fn new(width: u32, height: u32) -> SvgCanvas {
        SvgCanvas {
            document: Arc::new(Mutex::new(SvgDocument {
                width,
                height,
                background: None,
                elements: vec![],
            })),
        }
    }

    pub fn render(&self) -> String {
        let document = self.document.lock().unwrap_or_else(PoisonError::into_inner);
        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\">\n",
            w = document.width,
            h = document.height,
        ));
        if let Some(background) = document.background {
            svg.push_str(&format!(
                "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"{}/>\n",
                background.to_hex(),
                opacity("fill", background),
            ));
        }
        for element in &document.elements {
            svg.push_str(&format!("  {}\n", element));
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn with_document<F>(&mut self, f: F) -> CanvasResult
    where
        F: FnOnce(&mut SvgDocument),
    {
        f(&mut self.document.lock().unwrap_or_else(PoisonError::into_inner));
        Ok(())
    }
}

// Turtle space has its origin in the middle and y pointing up.
fn to_svg(document: &SvgDocument, position: Position) -> (f64, f64) {
    (
        position.x + f64::from(document.width) / 2.0,
        f64::from(document.height) / 2.0 - position.y,
    )
}

fn opacity(attribute: &str, color: Color) -> String {
    if color.is_opaque() {
        String::new()
    } else {
        format!(r#" {}-opacity="{:.3}""#, attribute, f64::from(color.a) / 255.0)
    }
}

fn stroke(color: Color, width: f64) -> String {
    format!(
        r#"stroke="{}"{} stroke-width="{}" stroke-linecap="round""#,
        color.to_hex(),
        opacity("stroke", color),
        f64::max(width, HAIRLINE_STROKE_WIDTH),
    )
}

impl Canvas for SvgCanvas {
    fn draw_line(
        &mut self,
        start: Position,
        end: Position,
        color: Color,
        width: f64,
    ) -> CanvasResult {
        self.with_document(|document| {
            let (x1, y1) = to_svg(document, start);
            let (x2, y2) = to_svg(document, end);
            document.elements.push(format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
                x1,
                y1,
                x2,
                y2,
                stroke(color, width),
            ));
        })
    }

    fn draw_circle(
        &mut self,
        center: Position,
        radius: f64,
        color: Color,
        width: f64,
        filled: bool,
    ) -> CanvasResult {
        self.with_document(|document| {
            let (cx, cy) = to_svg(document, center);
            let fill = if filled {
                format!(r#"fill="{}"{}"#, color.to_hex(), opacity("fill", color))
            } else {
                r#"fill="none""#.to_owned()
            };
            document.elements.push(format!(
                r#"<circle cx="{}" cy="{}" r="{}" {} {}/>"#,
                cx,
                cy,
                radius,
                fill,
                stroke(color, width),
            ));
        })
    }

    fn fill_polygon(&mut self, points: &[Position], color: Color) -> CanvasResult {
        self.with_document(|document| {
            let points: Vec<String> = points
                .iter()
                .map(|&point| {
                    let (x, y) = to_svg(document, point);
                    format!("{},{}", x, y)
                })
                .collect();
            document.elements.push(format!(
                r#"<polygon points="{}" fill="{}"{}/>"#,
                points.join(" "),
                color.to_hex(),
                opacity("fill", color),
            ));
        })
    }

    fn set_background(&mut self, color: Color) -> CanvasResult {
        self.with_document(|document| document.background = Some(color))
    }

    fn clear(&mut self) -> CanvasResult {
        self.with_document(|document| document.elements.clear())
    }
}

#[cfg(test)]
mod tests {
    use super::SvgCanvas;
    use abstract_turtle::canvas::Canvas;
    use turtle_geometry::basic::point::Position;
    use turtle_geometry::color::Color;

    #[test]
    fn renders_primitives_in_svg_space() {
        let mut canvas = SvgCanvas::new(100, 50);
        canvas.set_background(Color::WHITE).unwrap();
        canvas
            .draw_line(Position::ORIGIN, Position::new(10.0, 10.0), Color::rgb(255, 0, 0), 2.0)
            .unwrap();
        canvas.draw_circle(Position::ORIGIN, 5.0, Color::BLACK, 1.0, false).unwrap();

        let svg = canvas.render();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="100" height="50""#));
        assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#ffffff"/>"##));
        assert!(svg.contains(r##"<line x1="50" y1="25" x2="60" y2="15" stroke="#ff0000""##));
        assert!(svg.contains(r#"<circle cx="50" cy="25" r="5" fill="none""#));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.lines().count(), 5);
        assert!(svg.lines().skip(1).take(3).all(|line| line.starts_with("  <")));
    }

    #[test]
    fn clear_keeps_background() {
        let mut canvas = SvgCanvas::new(10, 10);
        canvas.set_background(Color::rgba(0, 0, 0, 128)).unwrap();
        canvas.fill_polygon(&[Position::ORIGIN], Color::BLACK).unwrap();
        assert!(canvas.render().contains("<polygon"));

        canvas.clear().unwrap();
        let svg = canvas.render();
        assert!(!svg.contains("<polygon"));
        assert!(svg.contains(r#"fill-opacity="0.502""#));
    }

    #[test]
    fn clones_share_a_document() {
        let canvas = SvgCanvas::new(10, 10);
        let mut other = canvas.clone();
        other.draw_line(Position::ORIGIN, Position::ORIGIN, Color::BLACK, 0.0).unwrap();
        assert!(canvas.render().contains(r#"stroke-width="0.0333""#));
    }
}
