// pathfinder/turtle/src/context.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::canvas::{BoxedCanvas, Canvas};
use crate::config::TurtleConfig;
use crate::error::{ReplayFailure, TurtleError};
use crate::forwarding::ForwardingCanvas;
use crate::state::{Turtle, TurtleStyle};
use tracing::debug;

/// One drawing session: a shared canvas and the turtles that draw on it.
#[derive(Clone, Debug)]
pub struct TurtleContext {
    canvas: ForwardingCanvas,
    style: TurtleStyle,
    size: (u32, u32),
}

impl TurtleContext {
    pub fn new(config: &TurtleConfig) -> Result<TurtleContext, TurtleError> {
        let style = config.turtle_style()?;
        let mut canvas = ForwardingCanvas::with_retention(config.history.retention);
        if let Some(background) = config.background()? {
            canvas.set_background(background)?;
        }
        let size = (config.canvas.width, config.canvas.height);
        debug!(?size, retention = ?config.history.retention, "created turtle context");
        Ok(TurtleContext { canvas, style, size })
    }

    /// A fresh turtle at the origin drawing on this context's canvas.
    pub fn turtle(&self) -> Turtle<ForwardingCanvas> {
        Turtle::with_style(self.canvas.clone(), self.style)
    }

    #[inline]
    pub fn canvas(&self) -> &ForwardingCanvas {
        &self.canvas
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn set_canvas<B>(&self, backend: B) -> Result<BoxedCanvas, ReplayFailure>
    where
        B: Canvas + Send + 'static,
    {
        self.canvas.set_canvas(backend)
    }

    pub fn detach(&self) -> BoxedCanvas {
        self.canvas.detach()
    }

    pub fn replay_onto<T>(&self, target: &mut T) -> Result<(), ReplayFailure>
    where
        T: Canvas + ?Sized,
    {
        self.canvas.replay_onto(target)
    }

    pub fn history_len(&self) -> usize {
        self.canvas.history_len()
    }
}

impl Default for TurtleContext {
    fn default() -> TurtleContext {
        let config = TurtleConfig::default();
        TurtleContext {
            canvas: ForwardingCanvas::new(),
            style: TurtleStyle::default(),
            size: (config.canvas.width, config.canvas.height),
        }
    }
}
