// pathfinder/uturtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A tiny Logo dialect for driving a turtle from text.

#[macro_use]
extern crate lalrpop_util;

use thiserror::Error;

pub mod ast;

lalrpop_mod!(pub turtle); // synthesized by LALRPOP

pub use crate::ast::{Command, Program};

pub type Parser = turtle::TopLevelParser;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("parse error: {0}")]
    Parse(String),
}

pub fn parse(source: &str) -> Result<Program, ScriptError> {
    Parser::new()
        .parse(source)
        .map_err(|err| ScriptError::Parse(err.to_string()))
}

#[test]
fn turtle_command_parser() {
    assert!(turtle::CommandParser::new().parse("penup").is_ok());
    assert!(turtle::CommandParser::new().parse("pu").is_ok());
    assert!(turtle::CommandParser::new().parse("pendown").is_ok());
    assert!(turtle::CommandParser::new().parse("left 22.7").is_ok());
    assert!(turtle::CommandParser::new().parse("rt 12.3").is_ok());
    assert!(turtle::CommandParser::new().parse("fd -10").is_ok());
    assert!(turtle::CommandParser::new().parse("goto 1 3").is_ok());
    assert!(turtle::CommandParser::new().parse("setx 5.3").is_ok());
    assert!(turtle::CommandParser::new().parse("sety 44.2").is_ok());
    assert!(turtle::CommandParser::new().parse("pensize 2").is_ok());
    assert!(turtle::CommandParser::new().parse("dot").is_ok());
    assert!(turtle::CommandParser::new().parse("dot 4").is_ok());
    assert!(turtle::CommandParser::new().parse("begin_fill").is_ok());
    assert!(turtle::CommandParser::new()
        .parse("pencolor 255,128 ,    128")
        .is_ok());
    assert!(turtle::CommandParser::new()
        .parse("fillcolor \"#ff8800\"")
        .is_ok());

    assert!(turtle::CommandParser::new().parse("bleh").is_err());
    assert!(turtle::CommandParser::new().parse("penup pendown").is_err());
    assert!(turtle::CommandParser::new().parse("home 22").is_err());
    assert!(turtle::CommandParser::new()
        .parse("pencolor 255,128")
        .is_err());
    assert!(turtle::CommandParser::new().parse("goto 1").is_err());
}

#[test]
fn turtle_program_parser() {
    assert!(turtle::TopLevelParser::new()
        .parse("right right 12.3 left")
        .is_err());
    assert!(turtle::TopLevelParser::new()
        .parse("right 90 fd 12.3 left 45")
        .is_ok());
    assert_eq!(parse("").unwrap(), Vec::new());
}

#[test]
fn aliases_collapse_to_one_command() {
    use turtle_geometry::color::ColorSpec;

    let program = parse("fd 10 forward 10 bk 2 back 2 seth 90 setpos 1 2 width 3").unwrap();
    assert_eq!(
        program,
        vec![
            Command::Forward(10.0),
            Command::Forward(10.0),
            Command::Backward(2.0),
            Command::Backward(2.0),
            Command::SetHeading(90.0),
            Command::Goto(1.0, 2.0),
            Command::PenSize(3.0),
        ]
    );

    let program = parse("color \"red\" bgcolor \"#000\" pencolor 1, 2, 3 degrees").unwrap();
    assert_eq!(
        program,
        vec![
            Command::Color(ColorSpec::Named("red".to_owned())),
            Command::BgColor(ColorSpec::Hex("#000".to_owned())),
            Command::PenColor(ColorSpec::Rgb(1.0, 2.0, 3.0)),
            Command::Degrees(360.0),
        ]
    );
}

#[test]
fn repeat_and_comments() {
    let source = "; a square\nrepeat 4 [ fd 10 rt 90 ] ; done\npu";
    let program = parse(source).unwrap();
    assert_eq!(
        program,
        vec![
            Command::Repeat(4, vec![Command::Forward(10.0), Command::Right(90.0)]),
            Command::PenUp,
        ]
    );

    assert!(parse("repeat 2.5 [ fd 1 ]").is_err());
    assert!(parse("repeat -1 [ fd 1 ]").is_err());
    assert!(parse("repeat 3 [ fd 1").is_err());
}
