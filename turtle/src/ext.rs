// pathfinder/turtle/src/ext.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Compound turtle commands, written only against [`BaseTurtle`].

use crate::error::{AngleUnitError, BackendError};
use crate::state::{BaseTurtle, DEFAULT_DEGREES};
use std::f64::consts::TAU;
use turtle_geometry::basic::point::Position;
use turtle_geometry::color::{ColorFormatError, ColorSpec};

pub trait TurtleExt: BaseTurtle {
    fn backward(&mut self, amount: f64) -> Result<(), BackendError> {
        self.forward(-amount)
    }

    #[inline]
    fn bk(&mut self, amount: f64) -> Result<(), BackendError> {
        self.backward(amount)
    }

    #[inline]
    fn back(&mut self, amount: f64) -> Result<(), BackendError> {
        self.backward(amount)
    }

    /// Turns clockwise.
    fn right(&mut self, amount: f64) {
        let heading = self.heading();
        self.setheading(heading + amount);
    }

    #[inline]
    fn rt(&mut self, amount: f64) {
        self.right(amount)
    }

    fn left(&mut self, amount: f64) {
        self.right(-amount)
    }

    #[inline]
    fn lt(&mut self, amount: f64) {
        self.left(amount)
    }

    fn setx(&mut self, x: f64) -> Result<(), BackendError> {
        let y = self.ycor();
        self.goto(x, y)
    }

    fn sety(&mut self, y: f64) -> Result<(), BackendError> {
        let x = self.xcor();
        self.goto(x, y)
    }

    /// Returns to the origin with heading 0.
    fn home(&mut self) -> Result<(), BackendError> {
        self.goto(0.0, 0.0)?;
        self.setheading(0.0);
        Ok(())
    }

    fn position(&self) -> Position {
        Position::new(self.xcor(), self.ycor())
    }

    #[inline]
    fn pos(&self) -> Position {
        self.position()
    }

    fn distance<P>(&self, other: P) -> f64
    where
        P: Into<Position>,
    {
        self.position().distance(other.into())
    }

    fn distance_to<T>(&self, other: &T) -> f64
    where
        T: TurtleExt,
    {
        self.distance(other.position())
    }

    fn radians(&mut self) -> Result<(), AngleUnitError> {
        self.setdegrees(TAU)
    }

    fn degrees(&mut self) -> Result<(), AngleUnitError> {
        self.setdegrees(DEFAULT_DEGREES)
    }

    /// Sets pen and fill color together. Neither changes on error.
    fn color<S>(&mut self, spec: S) -> Result<(), ColorFormatError>
    where
        S: Into<ColorSpec>,
    {
        let spec = spec.into();
        self.pencolor(spec.clone())?;
        self.fillcolor(spec)
    }

    fn reset(&mut self) -> Result<(), BackendError> {
        self.home()?;
        self.clear()
    }
}

impl<T> TurtleExt for T where T: BaseTurtle {}

#[cfg(test)]
mod tests {
    use super::TurtleExt;
    use crate::canvas::NullCanvas;
    use crate::recording::{CanvasCommand, RecordingCanvas};
    use crate::state::{BaseTurtle, Turtle};
    use std::f64::consts::TAU;
    use turtle_geometry::basic::point::Position;
    use turtle_geometry::color::Color;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn setx_and_sety_keep_the_other_axis() {
        let mut t = Turtle::new(NullCanvas);
        t.goto(1.0, 2.0).unwrap();
        t.setx(5.0).unwrap();
        assert_eq!(t.position(), Position::new(5.0, 2.0));
        t.sety(-3.0).unwrap();
        assert_eq!(t.pos(), Position::new(5.0, -3.0));
    }

    #[test]
    fn left_and_right_are_inverse() {
        let mut t = Turtle::new(NullCanvas);
        t.right(90.0);
        assert!((t.heading() - 90.0).abs() < EPSILON);
        t.lt(135.0);
        assert!((t.heading() - 315.0).abs() < EPSILON);
        t.rt(45.0);
        assert!(t.heading().abs() < EPSILON);
    }

    #[test]
    fn backward_moves_against_heading() {
        let mut t = Turtle::new(NullCanvas);
        t.setheading(90.0);
        t.backward(4.0).unwrap();
        assert!(t.position().approx_eq(Position::new(-4.0, 0.0), EPSILON));
        t.bk(1.0).unwrap();
        t.back(1.0).unwrap();
        assert!(t.position().approx_eq(Position::new(-6.0, 0.0), EPSILON));
    }

    #[test]
    fn home_and_reset() {
        let mut t = Turtle::new(RecordingCanvas::new(NullCanvas));
        t.penup();
        t.goto(3.0, 4.0).unwrap();
        t.setheading(123.0);
        t.pendown();
        t.reset().unwrap();
        assert_eq!(t.position(), Position::ORIGIN);
        assert!(t.heading().abs() < EPSILON);
        let history = t.canvas().history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1], CanvasCommand::Clear);
    }

    #[test]
    fn distance_to_points_and_turtles() {
        let mut a = Turtle::new(NullCanvas);
        let mut b = Turtle::new(NullCanvas);
        assert_eq!(a.distance((3.0, 4.0)), 5.0);
        b.goto(0.0, -2.0).unwrap();
        assert_eq!(a.distance_to(&b), 2.0);
        a.goto(6.0, 6.0).unwrap();
        assert_eq!(b.distance_to(&a), 10.0);
    }

    #[test]
    fn radians_and_degrees() {
        let mut t = Turtle::new(NullCanvas);
        t.radians().unwrap();
        assert_eq!(t.degrees_unit(), TAU);
        t.right(TAU / 2.0);
        t.degrees().unwrap();
        assert!((t.heading() - 180.0).abs() < EPSILON);
    }

    #[test]
    fn color_sets_both_or_neither() {
        let mut t = Turtle::new(NullCanvas);
        t.color("blue").unwrap();
        assert_eq!(t.pen_color(), Color::rgb(0, 0, 255));
        assert_eq!(t.fill_color(), Color::rgb(0, 0, 255));
        assert!(t.color("not-a-color").is_err());
        assert_eq!(t.pen_color(), Color::rgb(0, 0, 255));
        assert_eq!(t.fill_color(), Color::rgb(0, 0, 255));
    }
}
