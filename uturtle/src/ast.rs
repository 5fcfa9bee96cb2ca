// pathfinder/uturtle/src/ast.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Vocabulary follows the Logo/Python turtle command set; aliases collapse to
// one variant at parse time.

use turtle_geometry::color::ColorSpec;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Forward(f64),
    Backward(f64),
    Left(f64),
    Right(f64),
    SetHeading(f64),
    Goto(f64, f64),
    SetX(f64),
    SetY(f64),
    Home,
    PenUp,
    PenDown,
    PenSize(f64),
    PenColor(ColorSpec),
    FillColor(ColorSpec),
    Color(ColorSpec), // Pen and fill together.
    BgColor(ColorSpec),
    BeginFill,
    EndFill,
    Circle(f64),
    Dot(Option<f64>),
    Degrees(f64),
    Radians,
    Clear,
    Reset,
    Repeat(u32, Program),
}

pub type Program = Vec<Command>;
