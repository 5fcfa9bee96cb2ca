// pathfinder/turtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turtle graphics over a pluggable, replayable canvas.
//!
//! A [`Turtle`](state::Turtle) turns relative motion into absolute drawing
//! primitives on a [`Canvas`](canvas::Canvas). A
//! [`TurtleContext`](context::TurtleContext) wires turtles to a
//! [`ForwardingCanvas`](forwarding::ForwardingCanvas), which records every
//! primitive so a rendering backend attached at any point sees the full
//! drawing.

#[macro_use]
extern crate bitflags;

pub mod canvas;
pub mod config;
pub mod context;
pub mod error;
pub mod ext;
pub mod forwarding;
pub mod recording;
pub mod script;
pub mod state;

pub use turtle_geometry::basic::point::Position;
pub use turtle_geometry::color::{Color, ColorFormatError, ColorSpec};

pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::ext::TurtleExt;
    pub use crate::state::BaseTurtle;
}
