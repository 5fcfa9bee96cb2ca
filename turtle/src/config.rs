// pathfinder/turtle/src/config.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Session settings, read from a TOML file.
//!
//! ```toml
//! [canvas]
//! width = 1000
//! height = 1000
//! background = "white"
//!
//! [pen]
//! width = 1.0
//! color = "black"
//! fill_color = "black"
//!
//! [angles]
//! degrees = 360.0
//!
//! [history]
//! retention = "unbounded"   # or "compact-on-clear"
//! ```
//!
//! Every section and key is optional.

use crate::error::{AngleUnitError, PenWidthError, TurtleError};
use crate::recording::LogRetention;
use crate::state::{TurtleStyle, DEFAULT_DEGREES};
use serde_derive::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use turtle_geometry::color::Color;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TurtleConfig {
    pub canvas: CanvasConfig,
    pub pen: PenConfig,
    pub angles: AngleConfig,
    pub history: HistoryConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PenConfig {
    pub width: f64,
    pub color: String,
    pub fill_color: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AngleConfig {
    pub degrees: f64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
    pub retention: LogRetention,
}

impl Default for CanvasConfig {
    fn default() -> CanvasConfig {
        CanvasConfig { width: 1000, height: 1000, background: None }
    }
}

impl Default for PenConfig {
    fn default() -> PenConfig {
        PenConfig { width: 1.0, color: "black".to_owned(), fill_color: "black".to_owned() }
    }
}

impl Default for AngleConfig {
    fn default() -> AngleConfig {
        AngleConfig { degrees: DEFAULT_DEGREES }
    }
}

impl TurtleConfig {
    pub fn from_toml_str(source: &str) -> Result<TurtleConfig, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load<P>(path: P) -> Result<TurtleConfig, ConfigError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_owned(), source })?;
        TurtleConfig::from_toml_str(&source)
    }

    /// Validates the pen settings new turtles start with.
    pub fn turtle_style(&self) -> Result<TurtleStyle, TurtleError> {
        let degrees = self.angles.degrees;
        if !degrees.is_finite() || degrees == 0.0 {
            return Err(AngleUnitError(degrees).into());
        }
        let width = self.pen.width;
        if !width.is_finite() || width < 0.0 {
            return Err(PenWidthError(width).into());
        }
        Ok(TurtleStyle {
            pen_width: self.pen.width,
            pen_color: Color::parse(self.pen.color.as_str())?,
            fill_color: Color::parse(self.pen.fill_color.as_str())?,
            degrees,
        })
    }

    pub fn background(&self) -> Result<Option<Color>, TurtleError> {
        match self.canvas.background {
            Some(ref spec) => Ok(Some(Color::parse(spec.as_str())?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, TurtleConfig};
    use crate::error::TurtleError;
    use crate::recording::LogRetention;
    use turtle_geometry::color::Color;

    #[test]
    fn empty_config_uses_defaults() {
        let config = TurtleConfig::from_toml_str("").unwrap();
        assert_eq!((config.canvas.width, config.canvas.height), (1000, 1000));
        assert_eq!(config.history.retention, LogRetention::Unbounded);
        assert_eq!(config.background().unwrap(), None);

        let style = config.turtle_style().unwrap();
        assert_eq!(style.pen_width, 1.0);
        assert_eq!(style.pen_color, Color::BLACK);
        assert_eq!(style.degrees, 360.0);
    }

    #[test]
    fn full_config() {
        let config = TurtleConfig::from_toml_str(
            r##"
            [canvas]
            width = 640
            height = 480
            background = "#eeeeee"

            [pen]
            width = 2.0
            color = "navy"
            fill_color = "gold"

            [angles]
            degrees = 400.0

            [history]
            retention = "compact-on-clear"
            "##,
        )
        .unwrap();

        assert_eq!(config.canvas.width, 640);
        assert_eq!(config.background().unwrap(), Some(Color::rgb(0xee, 0xee, 0xee)));
        assert_eq!(config.history.retention, LogRetention::CompactOnClear);
        let style = config.turtle_style().unwrap();
        assert_eq!(style.pen_color, Color::rgb(0, 0, 128));
        assert_eq!(style.fill_color, Color::rgb(255, 215, 0));
        assert_eq!(style.degrees, 400.0);
    }

    #[test]
    fn bad_values_are_reported() {
        assert!(matches!(
            TurtleConfig::from_toml_str("[pen]\nwidht = 2.0"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            TurtleConfig::from_toml_str("[history]\nretention = \"forever\""),
            Err(ConfigError::Parse(_))
        ));

        let config = TurtleConfig::from_toml_str("[pen]\ncolor = \"plaid\"").unwrap();
        assert!(matches!(config.turtle_style(), Err(TurtleError::ColorFormat(_))));

        let config = TurtleConfig::from_toml_str("[angles]\ndegrees = 0.0").unwrap();
        assert!(matches!(config.turtle_style(), Err(TurtleError::AngleUnit(_))));

        let config = TurtleConfig::from_toml_str("[pen]\nwidth = -3.0").unwrap();
        assert!(matches!(config.turtle_style(), Err(TurtleError::PenWidth(_))));
    }

    #[test]
    fn missing_file() {
        let err = TurtleConfig::load("/nonexistent/turtle.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
