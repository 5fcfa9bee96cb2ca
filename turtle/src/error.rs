// pathfinder/turtle/src/error.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error::Error as StdError;
use std::io;
use thiserror::Error;
use turtle_geometry::color::ColorFormatError;

/// A rendering backend failed to carry out a primitive.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(Box<dyn StdError + Send + Sync>),
}

impl BackendError {
    pub fn msg<M>(message: M) -> BackendError
    where
        M: Into<String>,
    {
        BackendError::Message(message.into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FillStateError {
    #[error("begin_fill called while a fill is already in progress")]
    AlreadyFilling,
    #[error("end_fill called without a matching begin_fill")]
    NotFilling,
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("angle unit must be finite and non-zero, got {0}")]
pub struct AngleUnitError(pub f64);

#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("pen width must be finite and non-negative, got {0}")]
pub struct PenWidthError(pub f64);

/// A backend rejected part of the history while it was being replayed.
#[derive(Debug, Error)]
#[error("replay aborted at history entry {index} ({command})")]
pub struct ReplayFailure {
    pub index: usize,
    pub command: &'static str,
    #[source]
    pub source: BackendError,
}

#[derive(Debug, Error)]
pub enum TurtleError {
    #[error(transparent)]
    ColorFormat(#[from] ColorFormatError),
    #[error(transparent)]
    FillState(#[from] FillStateError),
    #[error(transparent)]
    AngleUnit(#[from] AngleUnitError),
    #[error(transparent)]
    PenWidth(#[from] PenWidthError),
    #[error(transparent)]
    Replay(#[from] ReplayFailure),
    #[error("canvas backend failed: {0}")]
    Backend(#[from] BackendError),
}
