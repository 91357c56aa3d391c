// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terminal host for a story-map tour.
//!
//! Loads a tour script, then either walks through every stop (`--walk`) or
//! reads navigation commands from stdin. Map commands are printed instead of
//! drawn. `--page` prints the setup of one of the fixed map pages instead.

mod cli;
mod render;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use storymap_script::{MATAAN_FLOOD, Script};
use storymap_view::preset::MapPreset;
use storymap_view::{TourDriver, overview_bounds};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{Args, Input};
use crate::render::{LogObserver, TextMap, fixed_page, page_summary, panel, preset_summary};

type Driver = TourDriver<TextMap, LogObserver>;

const HELP: &str = "commands: n(ext), p(rev), g <step>, r(estart), h(elp), q(uit)";

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if let Some(setup) = fixed_page(args.page).context("building page")? {
        println!("{}", page_summary(&setup));
        return Ok(());
    }

    let script = match &args.script {
        Some(path) => Script::from_path(path)
            .with_context(|| format!("loading tour script {}", path.display()))?,
        None => Script::from_json_str(MATAAN_FLOOD).context("parsing built-in tour script")?,
    };
    let title = script.title.clone();
    let tour = script.into_tour().context("building tour")?;

    let mut out = io::stdout().lock();
    if let Some(title) = title {
        writeln!(out, "# {title}")?;
    }
    writeln!(out, "{}", preset_summary(&MapPreset::story(tour.current())))?;
    let bounds = overview_bounds(&tour);
    writeln!(
        out,
        "overview: lon {:.3}..{:.3}, lat {:.3}..{:.3}",
        bounds.x0, bounds.x1, bounds.y0, bounds.y1
    )?;

    let mut driver = Driver::with_observer(tour, TextMap::new(args.lat_lon), LogObserver);
    driver.start();
    show(&mut out, &mut driver)?;

    if args.walk {
        while driver.next() {
            show(&mut out, &mut driver)?;
        }
        return Ok(());
    }

    writeln!(out, "{HELP}")?;
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let moved = match Input::parse(&line) {
            Some(Input::Next) => driver.next(),
            Some(Input::Previous) => driver.previous(),
            Some(Input::GoTo(index)) => driver.go_to(index),
            Some(Input::Restart) => driver.restart(),
            Some(Input::Quit) => break,
            Some(Input::Help) | None => {
                writeln!(out, "{HELP}")?;
                continue;
            }
        };
        if moved {
            show(&mut out, &mut driver)?;
        } else {
            writeln!(out, "(already there: {})", driver.tour().progress_label())?;
        }
    }
    Ok(())
}

fn show(out: &mut impl Write, driver: &mut Driver) -> io::Result<()> {
    writeln!(out)?;
    for line in driver.sink_mut().take_lines() {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", panel(driver.tour()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
