// pathfinder/turtle/src/canvas.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The drawing surface a turtle talks to.

use crate::error::BackendError;
use turtle_geometry::basic::point::Position;
use turtle_geometry::color::Color;

pub type CanvasResult = Result<(), BackendError>;

/// A rendering backend.
///
/// Implementations must accept degenerate geometry (zero-length lines, zero
/// radii, single-point polygons) and render it as nothing or as a minimal
/// mark. Errors are reserved for genuine backend failures such as I/O.
pub trait Canvas {
    fn draw_line(
        &mut self,
        start: Position,
        end: Position,
        color: Color,
        width: f64,
    ) -> CanvasResult;

    fn draw_circle(
        &mut self,
        center: Position,
        radius: f64,
        color: Color,
        width: f64,
        filled: bool,
    ) -> CanvasResult;

    /// `points` holds at least one vertex.
    fn fill_polygon(&mut self, points: &[Position], color: Color) -> CanvasResult;

    fn set_background(&mut self, color: Color) -> CanvasResult;

    /// Erases the foreground. The background is kept.
    fn clear(&mut self) -> CanvasResult;
}

pub type BoxedCanvas = Box<dyn Canvas + Send>;

/// Discards everything. The sink of a headless session.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    #[inline]
    fn draw_line(&mut self, _: Position, _: Position, _: Color, _: f64) -> CanvasResult {
        Ok(())
    }

    #[inline]
    fn draw_circle(&mut self, _: Position, _: f64, _: Color, _: f64, _: bool) -> CanvasResult {
        Ok(())
    }

    #[inline]
    fn fill_polygon(&mut self, _: &[Position], _: Color) -> CanvasResult {
        Ok(())
    }

    #[inline]
    fn set_background(&mut self, _: Color) -> CanvasResult {
        Ok(())
    }

    #[inline]
    fn clear(&mut self) -> CanvasResult {
        Ok(())
    }
}

impl<'a, C> Canvas for &'a mut C
where
    C: Canvas + ?Sized,
{
    #[inline]
    fn draw_line(
        &mut self,
        start: Position,
        end: Position,
        color: Color,
        width: f64,
    ) -> CanvasResult {
        (**self).draw_line(start, end, color, width)
    }

    #[inline]
    fn draw_circle(
        &mut self,
        center: Position,
        radius: f64,
        color: Color,
        width: f64,
        filled: bool,
    ) -> CanvasResult {
        (**self).draw_circle(center, radius, color, width, filled)
    }

    #[inline]
    fn fill_polygon(&mut self, points: &[Position], color: Color) -> CanvasResult {
        (**self).fill_polygon(points, color)
    }

    #[inline]
    fn set_background(&mut self, color: Color) -> CanvasResult {
        (**self).set_background(color)
    }

    #[inline]
    fn clear(&mut self) -> CanvasResult {
        (**self).clear()
    }
}

impl<C> Canvas for Box<C>
where
    C: Canvas + ?Sized,
{
    #[inline]
    fn draw_line(
        &mut self,
        start: Position,
        end: Position,
        color: Color,
        width: f64,
    ) -> CanvasResult {
        (**self).draw_line(start, end, color, width)
    }

    #[inline]
    fn draw_circle(
        &mut self,
        center: Position,
        radius: f64,
        color: Color,
        width: f64,
        filled: bool,
    ) -> CanvasResult {
        (**self).draw_circle(center, radius, color, width, filled)
    }

    #[inline]
    fn fill_polygon(&mut self, points: &[Position], color: Color) -> CanvasResult {
        (**self).fill_polygon(points, color)
    }

    #[inline]
    fn set_background(&mut self, color: Color) -> CanvasResult {
        (**self).set_background(color)
    }

    #[inline]
    fn clear(&mut self) -> CanvasResult {
        (**self).clear()
    }
}
