// pathfinder/turtle/src/state.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The turtle state machine.
//!
//! [`BaseTurtle`] is the minimal command set; everything else a turtle can
//! do is written in terms of it in [`crate::ext`].

use crate::canvas::Canvas;
use crate::error::{AngleUnitError, BackendError, FillStateError, PenWidthError, TurtleError};
use std::f64::consts::{FRAC_PI_2, TAU};
use turtle_geometry::basic::point::Position;
use turtle_geometry::color::{Color, ColorFormatError, ColorSpec};

pub const DEFAULT_DEGREES: f64 = 360.0;

/// The primitive turtle commands.
///
/// Headings are in user units: `degrees_unit()` units per full turn,
/// increasing clockwise. Heading `h` points `90 - h` units counter-clockwise
/// from east, so in the default unit zero points north.
pub trait BaseTurtle {
    /// Moves to `(x, y)`, drawing a line if the pen is down and extending the
    /// fill polygon if one is active.
    fn goto(&mut self, x: f64, y: f64) -> Result<(), BackendError>;

    /// Moves `amount` along the current heading. Negative moves backwards.
    fn forward(&mut self, amount: f64) -> Result<(), BackendError>;

    fn setheading(&mut self, heading: f64);

    /// The current heading, in `[0, |degrees_unit()|)`.
    fn heading(&self) -> f64;

    /// A filled circle around the cursor. The cursor stays put.
    fn circle(&mut self, radius: f64) -> Result<(), BackendError>;

    /// An unfilled circle around the cursor, of radius `|size|` or, when
    /// omitted, `max(pensize + 4, pensize * 2)`.
    fn dot(&mut self, size: Option<f64>) -> Result<(), BackendError>;

    fn xcor(&self) -> f64;
    fn ycor(&self) -> f64;

    /// Sets how many units make up a full turn. The physical heading is kept.
    fn setdegrees(&mut self, amount: f64) -> Result<(), AngleUnitError>;
    fn degrees_unit(&self) -> f64;

    fn pendown(&mut self);
    fn penup(&mut self);
    fn isdown(&self) -> bool;

    /// Sets the pen width when `width` is given. Returns the width in effect.
    fn pensize(&mut self, width: Option<f64>) -> Result<f64, PenWidthError>;

    fn pencolor<S>(&mut self, spec: S) -> Result<(), ColorFormatError>
    where
        S: Into<ColorSpec>;
    fn fillcolor<S>(&mut self, spec: S) -> Result<(), ColorFormatError>
    where
        S: Into<ColorSpec>;
    fn pen_color(&self) -> Color;
    fn fill_color(&self) -> Color;

    fn bgcolor<S>(&mut self, spec: S) -> Result<(), TurtleError>
    where
        S: Into<ColorSpec>;

    fn filling(&self) -> bool;
    fn begin_fill(&mut self) -> Result<(), FillStateError>;
    /// Fills the polygon traced since `begin_fill` with the fill color.
    fn end_fill(&mut self) -> Result<(), TurtleError>;

    /// Erases the drawing. The turtle does not move.
    fn clear(&mut self) -> Result<(), BackendError>;

    #[inline]
    fn fd(&mut self, amount: f64) -> Result<(), BackendError> {
        self.forward(amount)
    }

    #[inline]
    fn setpos(&mut self, x: f64, y: f64) -> Result<(), BackendError> {
        self.goto(x, y)
    }

    #[inline]
    fn setposition(&mut self, x: f64, y: f64) -> Result<(), BackendError> {
        self.goto(x, y)
    }

    #[inline]
    fn seth(&mut self, heading: f64) {
        self.setheading(heading)
    }

    #[inline]
    fn pu(&mut self) {
        self.penup()
    }

    #[inline]
    fn up(&mut self) {
        self.penup()
    }

    #[inline]
    fn pd(&mut self) {
        self.pendown()
    }

    #[inline]
    fn down(&mut self) {
        self.pendown()
    }

    #[inline]
    fn width(&mut self, width: Option<f64>) -> Result<f64, PenWidthError> {
        self.pensize(width)
    }
}

/// Pen settings a turtle starts out with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurtleStyle {
    pub pen_width: f64,
    pub pen_color: Color,
    pub fill_color: Color,
    pub degrees: f64,
}

impl Default for TurtleStyle {
    fn default() -> TurtleStyle {
        TurtleStyle {
            pen_width: 1.0,
            pen_color: Color::BLACK,
            fill_color: Color::BLACK,
            degrees: DEFAULT_DEGREES,
        }
    }
}

#[derive(Debug)]
pub struct Turtle<C> {
    canvas: C,
    position: Position,
    // Radians, zero east, counter-clockwise.
    theta: f64,
    pen_width: f64,
    pen_color: Color,
    fill_color: Color,
    pen_down: bool,
    degrees: f64,
    polygon: Option<Vec<Position>>,
}

impl<C> Turtle<C>
where
    C: Canvas,
{
    pub fn new(canvas: C) -> Turtle<C> {
        Turtle::with_style(canvas, TurtleStyle::default())
    }

    pub fn with_style(canvas: C, style: TurtleStyle) -> Turtle<C> {
        Turtle {
            canvas,
            position: Position::ORIGIN,
            theta: FRAC_PI_2,
            pen_width: style.pen_width,
            pen_color: style.pen_color,
            fill_color: style.fill_color,
            pen_down: true,
            degrees: style.degrees,
            polygon: None,
        }
    }

    #[inline]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    // The 90 offset is in user units, not a quarter of the current unit.
    fn to_real_angle(&self, amount: f64) -> f64 {
        (90.0 - amount) * TAU / self.degrees
    }

    fn from_real_angle(&self, angle: f64) -> f64 {
        90.0 - angle * self.degrees / TAU
    }
}

impl<C> BaseTurtle for Turtle<C>
where
    C: Canvas,
{
    fn goto(&mut self, x: f64, y: f64) -> Result<(), BackendError> {
        let start = self.position;
        let end = Position::new(x, y);
        self.position = end;
        if let Some(polygon) = self.polygon.as_mut() {
            polygon.push(end);
        }
        if self.pen_down {
            self.canvas.draw_line(start, end, self.pen_color, self.pen_width)?;
        }
        Ok(())
    }

    fn forward(&mut self, amount: f64) -> Result<(), BackendError> {
        let (s, c) = self.theta.sin_cos();
        self.goto(self.position.x + amount * c, self.position.y + amount * s)
    }

    fn setheading(&mut self, heading: f64) {
        self.theta = self.to_real_angle(heading);
    }

    fn heading(&self) -> f64 {
        let full_turn = self.degrees.abs();
        let heading = self.from_real_angle(self.theta).rem_euclid(full_turn);
        // Rounding just below a full turn reads as zero.
        if full_turn - heading <= full_turn * 1e-12 {
            0.0
        } else {
            heading
        }
    }

    fn circle(&mut self, radius: f64) -> Result<(), BackendError> {
        if self.pen_down {
            let radius = radius.abs();
            self.canvas.draw_circle(self.position, radius, self.pen_color, self.pen_width, true)?;
        }
        Ok(())
    }

    fn dot(&mut self, size: Option<f64>) -> Result<(), BackendError> {
        let size = match size {
            Some(size) => size.abs(),
            None => f64::max(self.pen_width + 4.0, self.pen_width * 2.0),
        };
        if self.pen_down {
            self.canvas.draw_circle(self.position, size, self.pen_color, self.pen_width, false)?;
        }
        Ok(())
    }

    #[inline]
    fn xcor(&self) -> f64 {
        self.position.x
    }

    #[inline]
    fn ycor(&self) -> f64 {
        self.position.y
    }

    fn setdegrees(&mut self, amount: f64) -> Result<(), AngleUnitError> {
        if !amount.is_finite() || amount == 0.0 {
            return Err(AngleUnitError(amount));
        }
        self.degrees = amount;
        Ok(())
    }

    #[inline]
    fn degrees_unit(&self) -> f64 {
        self.degrees
    }

    #[inline]
    fn pendown(&mut self) {
        self.pen_down = true;
    }

    #[inline]
    fn penup(&mut self) {
        self.pen_down = false;
    }

    #[inline]
    fn isdown(&self) -> bool {
        self.pen_down
    }

    fn pensize(&mut self, width: Option<f64>) -> Result<f64, PenWidthError> {
        if let Some(width) = width {
            if !width.is_finite() || width < 0.0 {
                return Err(PenWidthError(width));
            }
            self.pen_width = width;
        }
        Ok(self.pen_width)
    }

    fn pencolor<S>(&mut self, spec: S) -> Result<(), ColorFormatError>
    where
        S: Into<ColorSpec>,
    {
        self.pen_color = Color::parse(spec)?;
        Ok(())
    }

    fn fillcolor<S>(&mut self, spec: S) -> Result<(), ColorFormatError>
    where
        S: Into<ColorSpec>,
    {
        self.fill_color = Color::parse(spec)?;
        Ok(())
    }

    #[inline]
    fn pen_color(&self) -> Color {
        self.pen_color
    }

    #[inline]
    fn fill_color(&self) -> Color {
        self.fill_color
    }

    fn bgcolor<S>(&mut self, spec: S) -> Result<(), TurtleError>
    where
        S: Into<ColorSpec>,
    {
        let color = Color::parse(spec)?;
        self.canvas.set_background(color)?;
        Ok(())
    }

    #[inline]
    fn filling(&self) -> bool {
        self.polygon.is_some()
    }

    fn begin_fill(&mut self) -> Result<(), FillStateError> {
        if self.filling() {
            return Err(FillStateError::AlreadyFilling);
        }
        self.polygon = Some(vec![self.position]);
        Ok(())
    }

    fn end_fill(&mut self) -> Result<(), TurtleError> {
        let polygon = self.polygon.take().ok_or(FillStateError::NotFilling)?;
        self.canvas.fill_polygon(&polygon, self.fill_color)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), BackendError> {
        self.canvas.clear()
    }
}
