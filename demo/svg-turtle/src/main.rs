// pathfinder/demo/svg-turtle/src/main.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runs a turtle script headless, then attaches an SVG backend and writes
//! out what was drawn.

use abstract_turtle::config::TurtleConfig;
use abstract_turtle::context::TurtleContext;
use abstract_turtle::script::run_program;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod svg;

use crate::svg::SvgCanvas;

#[derive(Parser)]
#[command(name = "turtle-demo")]
#[command(about = "Renders a uturtle script to SVG")]
struct Cli {
    /// Script to run
    script: PathBuf,

    /// Where to write the SVG
    #[arg(long, short, default_value = "turtle.svg")]
    output: PathBuf,

    /// TOML file with canvas, pen and history settings
    #[arg(long, short)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => TurtleConfig::load(path)?,
        None => TurtleConfig::default(),
    };
    let context = TurtleContext::new(&config)?;

    let source = fs::read_to_string(&cli.script)
        .with_context(|| format!("failed to read script {}", cli.script.display()))?;
    let program = uturtle::parse(&source)?;

    let mut turtle = context.turtle();
    let flags = run_program(&mut turtle, &program);
    if !flags.is_empty() {
        warn!(%flags, "script finished with errors");
    }

    let (width, height) = context.size();
    let svg = SvgCanvas::new(width, height);
    context.set_canvas(svg.clone())?;

    fs::write(&cli.output, svg.render())
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!(
        output = %cli.output.display(),
        commands = context.history_len(),
        "wrote drawing"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::SvgCanvas;
    use abstract_turtle::config::TurtleConfig;
    use abstract_turtle::context::TurtleContext;
    use abstract_turtle::script::run_program;

    #[test]
    fn sample_script_renders_after_late_attach() {
        let config = TurtleConfig::from_toml_str(include_str!("../resources/turtle.toml")).unwrap();
        let context = TurtleContext::new(&config).unwrap();
        let program = uturtle::parse(include_str!("../resources/star.logo")).unwrap();

        let mut turtle = context.turtle();
        assert!(run_program(&mut turtle, &program).is_empty());

        let (width, height) = context.size();
        let svg = SvgCanvas::new(width, height);
        context.set_canvas(svg.clone()).unwrap();

        let rendered = svg.render();
        assert!(rendered.contains(r##"fill="#fdf6e3""##));
        assert_eq!(rendered.matches("<polygon").count(), 1);
        assert_eq!(rendered.matches("<circle").count(), 36);
    }
}
