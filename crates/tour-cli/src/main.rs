//! Tourplan CLI Application
//!
//! Interactive terminal front end for the tour-core itinerary editor.

mod args;
mod gazetteer;
mod renderer;
mod session;

use std::io;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use gazetteer::Gazetteer;
use jiff::civil::Date;
use log::info;
use renderer::TerminalRenderer;
use session::Session;
use tour_core::EditorBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        start_date,
        gazetteer,
        no_color,
    } = Args::parse();

    let mut builder = EditorBuilder::new();
    if let Some(raw) = start_date {
        let date: Date = raw
            .parse()
            .with_context(|| format!("Invalid start date '{raw}', expected YYYY-MM-DD"))?;
        builder = builder.with_start_date(date);
    }
    let editor = builder.build();

    let gazetteer = match gazetteer {
        Some(path) => Gazetteer::from_file(&path)?,
        None => Gazetteer::builtin(),
    };

    let renderer = TerminalRenderer::new(!no_color);

    info!("Tourplan session started");

    Session::new(editor, gazetteer, renderer).run(io::stdin().lock())
}
