// pathfinder/geometry/src/color.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Colors and the closed set of ways to spell one.
//!
//! Every constructor normalizes to [`Color`], four 8-bit channels. Callers
//! that accept user input take a [`ColorSpec`] and parse it with
//! [`Color::parse`], which is the only fallible path.

use regex::Regex;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// One of the accepted color spellings, before validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorSpec {
    /// A color name such as `"red"` or `"light blue"`.
    Named(String),
    /// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    Hex(String),
    /// Channels in `0..=255`.
    Rgb(f64, f64, f64),
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ColorFormatError {
    #[error("unknown color name {0:?}")]
    UnknownName(String),
    #[error("malformed hex color {0:?}")]
    MalformedHex(String),
    #[error("color channel {channel} out of range 0..=255")]
    ChannelOutOfRange { channel: f64 },
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    pub fn parse<S>(spec: S) -> Result<Color, ColorFormatError>
    where
        S: Into<ColorSpec>,
    {
        match spec.into() {
            ColorSpec::Named(name) => Color::from_name(&name),
            ColorSpec::Hex(hex) => Color::from_hex(&hex),
            ColorSpec::Rgb(r, g, b) => Ok(Color::rgb(channel(r)?, channel(g)?, channel(b)?)),
        }
    }

    pub fn from_name(name: &str) -> Result<Color, ColorFormatError> {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|&(_, [r, g, b])| Color::rgb(r, g, b))
            .ok_or_else(|| ColorFormatError::UnknownName(name.to_owned()))
    }

    pub fn from_hex(hex: &str) -> Result<Color, ColorFormatError> {
        let malformed = || ColorFormatError::MalformedHex(hex.to_owned());
        let captures = hex_pattern().captures(hex.trim()).ok_or_else(malformed)?;
        let digits = captures.get(1).ok_or_else(malformed)?.as_str();

        let channels: Vec<u8> = match digits.len() {
            3 | 4 => digits
                .chars()
                .map(|c| c.to_digit(16).map(|v| (v * 17) as u8))
                .collect::<Option<_>>()
                .ok_or_else(malformed)?,
            _ => (0..digits.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
                .collect::<Option<_>>()
                .ok_or_else(malformed)?,
        };

        match channels[..] {
            [r, g, b] => Ok(Color::rgb(r, g, b)),
            [r, g, b, a] => Ok(Color::rgba(r, g, b, a)),
            _ => Err(malformed()),
        }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// `#rrggbb`, with an alpha byte appended when the color is translucent.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Color {
        Color::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Color, ColorFormatError> {
        Color::parse(s)
    }
}

impl Display for Color {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        formatter.write_str(&self.to_hex())
    }
}

impl From<&str> for ColorSpec {
    fn from(spec: &str) -> ColorSpec {
        ColorSpec::from(spec.to_owned())
    }
}

impl From<String> for ColorSpec {
    fn from(spec: String) -> ColorSpec {
        if spec.trim_start().starts_with('#') {
            ColorSpec::Hex(spec)
        } else {
            ColorSpec::Named(spec)
        }
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((r, g, b): (u8, u8, u8)) -> ColorSpec {
        ColorSpec::Rgb(r.into(), g.into(), b.into())
    }
}

impl From<(f64, f64, f64)> for ColorSpec {
    fn from((r, g, b): (f64, f64, f64)) -> ColorSpec {
        ColorSpec::Rgb(r, g, b)
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> ColorSpec {
        ColorSpec::Hex(color.to_hex())
    }
}

fn channel(value: f64) -> Result<u8, ColorFormatError> {
    if value.is_finite() && (0.0..=255.0).contains(&value) {
        Ok(value.round() as u8)
    } else {
        Err(ColorFormatError::ChannelOutOfRange { channel: value })
    }
}

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#((?:[0-9a-fA-F]{3}){1,2}|[0-9a-fA-F]{4}|[0-9a-fA-F]{8})$")
            .expect("hex color pattern is valid")
    })
}

// Lookup keys are lowercase with whitespace removed.
static NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("aqua", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("fuchsia", [255, 0, 255]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("violet", [238, 130, 238]),
    ("brown", [165, 42, 42]),
    ("pink", [255, 192, 203]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("darkgray", [169, 169, 169]),
    ("darkgrey", [169, 169, 169]),
    ("lightgray", [211, 211, 211]),
    ("lightgrey", [211, 211, 211]),
    ("navy", [0, 0, 128]),
    ("teal", [0, 128, 128]),
    ("olive", [128, 128, 0]),
    ("maroon", [128, 0, 0]),
    ("silver", [192, 192, 192]),
    ("gold", [255, 215, 0]),
    ("darkgreen", [0, 100, 0]),
    ("lightblue", [173, 216, 230]),
    ("skyblue", [135, 206, 235]),
    ("darkblue", [0, 0, 139]),
    ("darkred", [139, 0, 0]),
    ("indigo", [75, 0, 130]),
    ("turquoise", [64, 224, 208]),
    ("salmon", [250, 128, 114]),
    ("tan", [210, 180, 140]),
    ("beige", [245, 245, 220]),
];

#[cfg(test)]
mod tests {
    use super::{Color, ColorFormatError, ColorSpec};

    #[test]
    fn spellings_normalize_to_one_color() {
        let orange = Color::rgb(255, 165, 0);
        assert_eq!(Color::parse("orange"), Ok(orange));
        assert_eq!(Color::parse(" Orange "), Ok(orange));
        assert_eq!(Color::parse("#ffa500"), Ok(orange));
        assert_eq!(Color::parse("#FFA500"), Ok(orange));
        assert_eq!(Color::parse((255u8, 165u8, 0u8)), Ok(orange));
        assert_eq!(Color::parse((255.0f64, 164.6, 0.2)), Ok(orange));
        assert_eq!(Color::parse("Light Blue"), Color::parse("lightblue"));
    }

    #[test]
    fn short_and_alpha_hex() {
        assert_eq!(Color::from_hex("#f0a"), Ok(Color::rgb(255, 0, 170)));
        assert_eq!(Color::from_hex("#f0a8"), Ok(Color::rgba(255, 0, 170, 136)));
        assert_eq!(Color::from_hex("#01020380"), Ok(Color::rgba(1, 2, 3, 128)));
    }

    #[test]
    fn shape_dispatch() {
        assert_eq!(ColorSpec::from("#123"), ColorSpec::Hex("#123".to_owned()));
        assert_eq!(ColorSpec::from("red"), ColorSpec::Named("red".to_owned()));
    }

    #[test]
    fn invalid_specs_are_rejected() {
        assert_eq!(
            Color::parse("not-a-color"),
            Err(ColorFormatError::UnknownName("not-a-color".to_owned()))
        );
        assert!(matches!(Color::parse("#12"), Err(ColorFormatError::MalformedHex(_))));
        assert!(matches!(Color::parse("#12345"), Err(ColorFormatError::MalformedHex(_))));
        assert!(matches!(Color::parse("#gggggg"), Err(ColorFormatError::MalformedHex(_))));
        assert!(matches!(
            Color::parse((256.0f64, 0.0, 0.0)),
            Err(ColorFormatError::ChannelOutOfRange { .. })
        ));
        assert!(matches!(
            Color::parse((f64::NAN, 0.0, 0.0)),
            Err(ColorFormatError::ChannelOutOfRange { .. })
        ));
    }

    #[test]
    fn hex_rendering() {
        assert_eq!(Color::rgb(255, 0, 16).to_hex(), "#ff0010");
        assert_eq!(Color::rgba(255, 0, 16, 1).to_string(), "#ff001001");
        let roundtrip: Color = Color::rgba(9, 8, 7, 6).to_hex().parse().unwrap();
        assert_eq!(roundtrip, Color::rgba(9, 8, 7, 6));
    }
}
