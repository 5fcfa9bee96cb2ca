// pathfinder/turtle/src/script.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runs a parsed `uturtle` program against a turtle.

use crate::error::TurtleError;
use crate::ext::TurtleExt;
use std::fmt::{Display, Formatter, Result as FormatResult};
use tracing::warn;
use uturtle::ast::{Command, Program};

bitflags! {
    // NB: If you change this, make sure to update the `Display`
    // implementation as well.
    pub struct RunResultFlags: u16 {
        const ERR_COLOR_FORMAT = 0x0001;
        const ERR_FILL_STATE   = 0x0002;
        const ERR_ANGLE_UNIT   = 0x0004;
        const ERR_BACKEND      = 0x0008;
        const ERR_PEN_WIDTH    = 0x0010;
    }
}

impl RunResultFlags {
    pub fn from_error(err: &TurtleError) -> RunResultFlags {
        match *err {
            TurtleError::ColorFormat(_) => RunResultFlags::ERR_COLOR_FORMAT,
            TurtleError::FillState(_) => RunResultFlags::ERR_FILL_STATE,
            TurtleError::AngleUnit(_) => RunResultFlags::ERR_ANGLE_UNIT,
            TurtleError::Replay(_) | TurtleError::Backend(_) => RunResultFlags::ERR_BACKEND,
            TurtleError::PenWidth(_) => RunResultFlags::ERR_PEN_WIDTH,
        }
    }
}

impl Display for RunResultFlags {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        if self.is_empty() {
            return Ok(());
        }

        let mut first = true;
        for (bit, name) in NAMES.iter().enumerate() {
            if (self.bits() >> bit) & 1 == 0 {
                continue;
            }
            if !first {
                formatter.write_str(", ")?;
            } else {
                first = false;
            }
            formatter.write_str(name)?;
        }

        return Ok(());

        // Must match the order in `RunResultFlags`.
        static NAMES: &'static [&'static str] = &[
            "invalid color",
            "fill state mismatch",
            "invalid angle unit",
            "canvas backend failure",
            "invalid pen width",
        ];
    }
}

/// Runs every command in `program`.
///
/// A failing command is logged and skipped; the kinds of failure seen are
/// returned as flags.
pub fn run_program<T>(turtle: &mut T, program: &Program) -> RunResultFlags
where
    T: TurtleExt,
{
    let mut flags = RunResultFlags::empty();
    run_commands(turtle, program, &mut flags);
    flags
}

fn run_commands<T>(turtle: &mut T, program: &[Command], flags: &mut RunResultFlags)
where
    T: TurtleExt,
{
    for command in program {
        match *command {
            Command::Repeat(count, ref body) => {
                for _ in 0..count {
                    run_commands(turtle, body, flags);
                }
            }
            _ => {
                if let Err(err) = execute(turtle, command) {
                    warn!(%err, ?command, "turtle command failed");
                    *flags |= RunResultFlags::from_error(&err);
                }
            }
        }
    }
}

/// Executes one command. A `Repeat` stops at the first failing command.
pub fn execute<T>(turtle: &mut T, command: &Command) -> Result<(), TurtleError>
where
    T: TurtleExt,
{
    match *command {
        Command::Forward(amount) => turtle.forward(amount)?,
        Command::Backward(amount) => turtle.backward(amount)?,
        Command::Left(amount) => turtle.left(amount),
        Command::Right(amount) => turtle.right(amount),
        Command::SetHeading(heading) => turtle.setheading(heading),
        Command::Goto(x, y) => turtle.goto(x, y)?,
        Command::SetX(x) => turtle.setx(x)?,
        Command::SetY(y) => turtle.sety(y)?,
        Command::Home => turtle.home()?,
        Command::PenUp => turtle.penup(),
        Command::PenDown => turtle.pendown(),
        Command::PenSize(width) => {
            turtle.pensize(Some(width))?;
        }
        Command::PenColor(ref spec) => turtle.pencolor(spec.clone())?,
        Command::FillColor(ref spec) => turtle.fillcolor(spec.clone())?,
        Command::Color(ref spec) => turtle.color(spec.clone())?,
        Command::BgColor(ref spec) => turtle.bgcolor(spec.clone())?,
        Command::BeginFill => turtle.begin_fill()?,
        Command::EndFill => turtle.end_fill()?,
        Command::Circle(radius) => turtle.circle(radius)?,
        Command::Dot(size) => turtle.dot(size)?,
        Command::Degrees(amount) => turtle.setdegrees(amount)?,
        Command::Radians => turtle.radians()?,
        Command::Clear => turtle.clear()?,
        Command::Reset => turtle.reset()?,
        Command::Repeat(count, ref body) => {
            for _ in 0..count {
                for command in body {
                    execute(turtle, command)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{execute, run_program, RunResultFlags};
    use crate::canvas::NullCanvas;
    use crate::ext::TurtleExt;
    use crate::recording::{CanvasCommand, RecordingCanvas};
    use crate::state::{BaseTurtle, Turtle};
    use turtle_geometry::basic::point::Position;
    use uturtle::ast::Command;

    #[test]
    fn square_closes() {
        let program = uturtle::parse("repeat 4 [ fd 10 rt 90 ]").unwrap();
        let mut turtle = Turtle::new(RecordingCanvas::new(NullCanvas));
        let flags = run_program(&mut turtle, &program);
        assert!(flags.is_empty());
        assert_eq!(flags.to_string(), "");
        assert!(turtle.position().approx_eq(Position::ORIGIN, 1e-9));
        assert!(turtle.heading().abs() < 1e-9);
        assert_eq!(turtle.canvas().len(), 4);
    }

    #[test]
    fn failures_are_flagged_and_skipped() {
        let program =
            uturtle::parse("pencolor \"plaid\" end_fill fd 5 degrees 0 begin_fill fd 1 end_fill")
                .unwrap();
        let mut turtle = Turtle::new(RecordingCanvas::new(NullCanvas));
        let flags = run_program(&mut turtle, &program);
        assert_eq!(
            flags,
            RunResultFlags::ERR_COLOR_FORMAT
                | RunResultFlags::ERR_FILL_STATE
                | RunResultFlags::ERR_ANGLE_UNIT
        );
        assert_eq!(
            flags.to_string(),
            "invalid color, fill state mismatch, invalid angle unit"
        );
        assert!(turtle.position().approx_eq(Position::new(0.0, 6.0), 1e-9));
        match turtle.canvas().history().last() {
            Some(CanvasCommand::FillPolygon { points, .. }) => assert_eq!(points.len(), 2),
            other => panic!("expected a fill, got {:?}", other),
        }
    }

    #[test]
    fn negative_pen_width_is_flagged() {
        let program = uturtle::parse("pensize 3 pensize -2 fd 1").unwrap();
        let mut turtle = Turtle::new(RecordingCanvas::new(NullCanvas));
        let flags = run_program(&mut turtle, &program);
        assert_eq!(flags, RunResultFlags::ERR_PEN_WIDTH);
        assert_eq!(flags.to_string(), "invalid pen width");
        assert_eq!(turtle.pensize(None), Ok(3.0));
        assert_eq!(turtle.canvas().len(), 1);
    }

    #[test]
    fn nested_repeat_fails_fast_under_execute() {
        let body = vec![Command::EndFill, Command::Forward(1.0)];
        let mut turtle = Turtle::new(NullCanvas);
        assert!(execute(&mut turtle, &Command::Repeat(3, body)).is_err());
        assert_eq!(turtle.position(), Position::ORIGIN);
    }

    #[test]
    fn every_command_dispatches() {
        let program = uturtle::parse(
            "bgcolor \"white\" color 10, 20, 30 pensize 2 pu goto 5 5 pd setx 6 sety 7 \
             seth 90 lt 10 rt 10 bk 1 circle 3 dot dot 1 begin_fill fd 2 end_fill \
             fillcolor \"red\" radians degrees 360 home clear reset",
        )
        .unwrap();
        let mut turtle = Turtle::new(RecordingCanvas::new(NullCanvas));
        assert!(run_program(&mut turtle, &program).is_empty());
        assert_eq!(turtle.pensize(None), Ok(2.0));
        assert_eq!(turtle.position(), Position::ORIGIN);
        assert_eq!(turtle.canvas().history().last(), Some(&CanvasCommand::Clear));
    }
}
