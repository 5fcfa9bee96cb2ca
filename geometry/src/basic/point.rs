// pathfinder/geometry/src/basic/point.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A two-dimensional position in turtle space.

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Position {
        Position { x, y }
    }

    /// Euclidean length of the vector from the origin to this position.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        (other - self).length()
    }

    #[inline]
    pub fn approx_eq(self, other: Position, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Position {
    type Output = Position;
    #[inline]
    fn add(self, other: Position) -> Position {
        Position::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Position {
    type Output = Position;
    #[inline]
    fn sub(self, other: Position) -> Position {
        Position::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(f64, f64)> for Position {
    #[inline]
    fn from((x, y): (f64, f64)) -> Position {
        Position::new(x, y)
    }
}

impl From<Position> for (f64, f64) {
    #[inline]
    fn from(position: Position) -> (f64, f64) {
        (position.x, position.y)
    }
}

impl Display for Position {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}
