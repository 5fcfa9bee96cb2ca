// pathfinder/turtle/src/recording.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A canvas decorator that keeps a replayable history of every primitive.

use crate::canvas::{Canvas, CanvasResult};
use crate::error::ReplayFailure;
use serde_derive::Deserialize;
use tracing::{debug, trace};
use turtle_geometry::basic::point::Position;
use turtle_geometry::color::Color;

/// One primitive call with the arguments it was issued with.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasCommand {
    DrawLine {
        start: Position,
        end: Position,
        color: Color,
        width: f64,
    },
    DrawCircle {
        center: Position,
        radius: f64,
        color: Color,
        width: f64,
        filled: bool,
    },
    FillPolygon {
        points: Vec<Position>,
        color: Color,
    },
    SetBackground(Color),
    Clear,
}

impl CanvasCommand {
    pub fn name(&self) -> &'static str {
        match *self {
            CanvasCommand::DrawLine { .. } => "draw_line",
            CanvasCommand::DrawCircle { .. } => "draw_circle",
            CanvasCommand::FillPolygon { .. } => "fill_polygon",
            CanvasCommand::SetBackground(_) => "set_background",
            CanvasCommand::Clear => "clear",
        }
    }

    /// Issues this command against `target`.
    pub fn apply<C>(&self, target: &mut C) -> CanvasResult
    where
        C: Canvas + ?Sized,
    {
        match *self {
            CanvasCommand::DrawLine { start, end, color, width } => {
                target.draw_line(start, end, color, width)
            }
            CanvasCommand::DrawCircle { center, radius, color, width, filled } => {
                target.draw_circle(center, radius, color, width, filled)
            }
            CanvasCommand::FillPolygon { ref points, color } => target.fill_polygon(points, color),
            CanvasCommand::SetBackground(color) => target.set_background(color),
            CanvasCommand::Clear => target.clear(),
        }
    }
}

/// How much history a [`RecordingCanvas`] keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogRetention {
    /// Keep every command for the lifetime of the canvas.
    Unbounded,
    /// On `clear`, forget the foreground commands it erases. Only the most
    /// recent background survives, so the replayed image is unchanged.
    CompactOnClear,
}

impl Default for LogRetention {
    fn default() -> LogRetention {
        LogRetention::Unbounded
    }
}

/// Logs every primitive it receives, then forwards it to `sink`.
#[derive(Debug)]
pub struct RecordingCanvas<C> {
    sink: C,
    log: Vec<CanvasCommand>,
    retention: LogRetention,
}

impl<C> RecordingCanvas<C>
where
    C: Canvas,
{
    pub fn new(sink: C) -> RecordingCanvas<C> {
        RecordingCanvas::with_retention(sink, LogRetention::default())
    }

    pub fn with_retention(sink: C, retention: LogRetention) -> RecordingCanvas<C> {
        RecordingCanvas { sink, log: Vec::new(), retention }
    }

    #[inline]
    pub fn history(&self) -> &[CanvasCommand] {
        &self.log
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    #[inline]
    pub fn retention(&self) -> LogRetention {
        self.retention
    }

    #[inline]
    pub fn sink(&self) -> &C {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut C {
        &mut self.sink
    }

    pub fn into_sink(self) -> C {
        self.sink
    }

    /// Re-issues the whole history, in order, against `target`.
    ///
    /// Stops at the first backend error. The history itself is not touched.
    pub fn replay<T>(&self, target: &mut T) -> Result<(), ReplayFailure>
    where
        T: Canvas + ?Sized,
    {
        for (index, command) in self.log.iter().enumerate() {
            command.apply(target).map_err(|source| ReplayFailure {
                index,
                command: command.name(),
                source,
            })?;
        }
        Ok(())
    }

    fn record(&mut self, command: CanvasCommand) -> CanvasResult {
        trace!(command = command.name(), "recording canvas command");
        let result = command.apply(&mut self.sink);
        self.push(command);
        result
    }

    fn push(&mut self, command: CanvasCommand) {
        let compacting = self.retention == LogRetention::CompactOnClear;
        if compacting && matches!(command, CanvasCommand::Clear) {
            let background = self.log.iter().rev().find_map(|command| match *command {
                CanvasCommand::SetBackground(color) => Some(color),
                _ => None,
            });
            let dropped = self.log.len();
            self.log.clear();
            self.log.extend(background.map(CanvasCommand::SetBackground));
            debug!(dropped, "compacted canvas history on clear");
        }
        self.log.push(command);
    }
}

impl<C> Canvas for RecordingCanvas<C>
where
    C: Canvas,
{
    fn draw_line(
        &mut self,
        start: Position,
        end: Position,
        color: Color,
        width: f64,
    ) -> CanvasResult {
        self.record(CanvasCommand::DrawLine { start, end, color, width })
    }

    fn draw_circle(
        &mut self,
        center: Position,
        radius: f64,
        color: Color,
        width: f64,
        filled: bool,
    ) -> CanvasResult {
        self.record(CanvasCommand::DrawCircle { center, radius, color, width, filled })
    }

    fn fill_polygon(&mut self, points: &[Position], color: Color) -> CanvasResult {
        self.record(CanvasCommand::FillPolygon { points: points.to_vec(), color })
    }

    fn set_background(&mut self, color: Color) -> CanvasResult {
        self.record(CanvasCommand::SetBackground(color))
    }

    fn clear(&mut self) -> CanvasResult {
        self.record(CanvasCommand::Clear)
    }
}
