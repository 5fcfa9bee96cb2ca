// pathfinder/turtle/src/forwarding.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A shared canvas handle whose backend can be replaced at any time.
//!
//! Every call is recorded before it reaches the attached backend, so a
//! backend attached later can be brought up to date by replaying the
//! history into it. Sessions can therefore start headless and gain a real
//! surface afterwards without losing anything that was drawn.

use crate::canvas::{BoxedCanvas, Canvas, CanvasResult, NullCanvas};
use crate::error::ReplayFailure;
use crate::recording::{CanvasCommand, LogRetention, RecordingCanvas};
use std::fmt::{Debug, Formatter, Result as FormatResult};
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};
use turtle_geometry::basic::point::Position;
use turtle_geometry::color::Color;

/// Cloning yields another handle to the same history and backend.
#[derive(Clone)]
pub struct ForwardingCanvas {
    inner: Arc<Mutex<RecordingCanvas<BoxedCanvas>>>,
}

impl ForwardingCanvas {
    /// A headless canvas: history is kept, nothing is rendered.
    pub fn new() -> ForwardingCanvas {
        ForwardingCanvas::with_retention(LogRetention::default())
    }

    pub fn with_retention(retention: LogRetention) -> ForwardingCanvas {
        let sink: BoxedCanvas = Box::new(NullCanvas);
        ForwardingCanvas {
            inner: Arc::new(Mutex::new(RecordingCanvas::with_retention(sink, retention))),
        }
    }

    /// Attaches `backend`, replaying the full history into it first.
    ///
    /// The lock is held across replay and swap, so concurrent draw calls
    /// wait and then land on the new backend. If replay fails, `backend` is
    /// dropped and the current backend stays attached. On success the
    /// previous backend is handed back.
    pub fn set_canvas<B>(&self, backend: B) -> Result<BoxedCanvas, ReplayFailure>
    where
        B: Canvas + Send + 'static,
    {
        let mut backend: BoxedCanvas = Box::new(backend);
        let mut recorder = self.lock();
        if let Err(err) = recorder.replay(&mut backend) {
            warn!(%err, "replay into new canvas backend failed; keeping the old one");
            return Err(err);
        }
        debug!(replayed = recorder.len(), "attached canvas backend");
        Ok(mem::replace(recorder.sink_mut(), backend))
    }

    /// Goes back to headless operation, returning the detached backend.
    pub fn detach(&self) -> BoxedCanvas {
        let mut recorder = self.lock();
        debug!("detached canvas backend");
        mem::replace(recorder.sink_mut(), Box::new(NullCanvas))
    }

    /// Replays the history into a canvas the caller keeps ownership of.
    pub fn replay_onto<T>(&self, target: &mut T) -> Result<(), ReplayFailure>
    where
        T: Canvas + ?Sized,
    {
        self.lock().replay(target)
    }

    pub fn history(&self) -> Vec<CanvasCommand> {
        self.lock().history().to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.lock().len()
    }

    pub fn retention(&self) -> LogRetention {
        self.lock().retention()
    }

    fn lock(&self) -> MutexGuard<'_, RecordingCanvas<BoxedCanvas>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ForwardingCanvas {
    fn default() -> ForwardingCanvas {
        ForwardingCanvas::new()
    }
}

impl Debug for ForwardingCanvas {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        formatter
            .debug_struct("ForwardingCanvas")
            .field("history_len", &self.history_len())
            .finish()
    }
}

impl Canvas for ForwardingCanvas {
    fn draw_line(
        &mut self,
        start: Position,
        end: Position,
        color: Color,
        width: f64,
    ) -> CanvasResult {
        self.lock().draw_line(start, end, color, width)
    }

    fn draw_circle(
        &mut self,
        center: Position,
        radius: f64,
        color: Color,
        width: f64,
        filled: bool,
    ) -> CanvasResult {
        self.lock().draw_circle(center, radius, color, width, filled)
    }

    fn fill_polygon(&mut self, points: &[Position], color: Color) -> CanvasResult {
        self.lock().fill_polygon(points, color)
    }

    fn set_background(&mut self, color: Color) -> CanvasResult {
        self.lock().set_background(color)
    }

    fn clear(&mut self) -> CanvasResult {
        self.lock().clear()
    }
}
