// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Walk through a story-map tour in the terminal.
///
/// The map widget is replaced by a text log of the commands it would receive.
#[derive(Debug, Parser)]
#[command(name = "storymap-tour", version)]
pub(crate) struct Args {
    /// Tour script to load. Defaults to the built-in Mataan River flood narrative.
    #[arg(long)]
    pub(crate) script: Option<PathBuf>,

    /// Step through every stop once and exit instead of reading commands from stdin.
    #[arg(long)]
    pub(crate) walk: bool,

    /// Print map centers latitude-first, as marker-based widgets expect.
    #[arg(long)]
    pub(crate) lat_lon: bool,

    /// Page to show. Every page except `story` is printed once, without a tour.
    #[arg(long, value_enum, default_value_t = Page::Story)]
    pub(crate) page: Page,
}

/// The map pages of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Page {
    /// Guided tour beside the narrative panel.
    Story,
    /// Base map of the Mataan River.
    Location,
    /// Whole-world globe.
    Globe,
    /// 3D buildings around Guangfu Township.
    Buildings,
    /// 3D buildings around Taipei City Hall.
    Taipei,
    /// Satellite imagery against the street map.
    Split,
}

/// One line of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Input {
    Next,
    Previous,
    GoTo(usize),
    Restart,
    Help,
    Quit,
}

impl Input {
    /// Parses a command line such as `n`, `prev` or `g 3` (one-based).
    pub(crate) fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let input = match words.next()? {
            "n" | "next" => Self::Next,
            "p" | "prev" | "previous" => Self::Previous,
            "r" | "restart" => Self::Restart,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            "g" | "go" => {
                let position: usize = words.next()?.parse().ok()?;
                Self::GoTo(position.checked_sub(1)?)
            }
            _ => return None,
        };
        words.next().is_none().then_some(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_words() {
        assert_eq!(Input::parse("n"), Some(Input::Next));
        assert_eq!(Input::parse("  prev "), Some(Input::Previous));
        assert_eq!(Input::parse("restart"), Some(Input::Restart));
        assert_eq!(Input::parse("q"), Some(Input::Quit));
    }

    #[test]
    fn go_to_is_one_based() {
        assert_eq!(Input::parse("g 3"), Some(Input::GoTo(2)));
        assert_eq!(Input::parse("g 0"), None);
        assert_eq!(Input::parse("g x"), None);
        assert_eq!(Input::parse("g"), None);
    }

    #[test]
    fn rejects_unknown_or_trailing_words() {
        assert_eq!(Input::parse(""), None);
        assert_eq!(Input::parse("jump"), None);
        assert_eq!(Input::parse("n now"), None);
    }

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from(["storymap-tour", "--walk", "--lat-lon"]).unwrap();
        assert!(args.walk);
        assert!(args.lat_lon);
        assert_eq!(args.script, None);
        assert_eq!(args.page, Page::Story);
    }

    #[test]
    fn page_names_parse() {
        for (name, page) in [
            ("story", Page::Story),
            ("location", Page::Location),
            ("globe", Page::Globe),
            ("buildings", Page::Buildings),
            ("taipei", Page::Taipei),
            ("split", Page::Split),
        ] {
            let args = Args::try_parse_from(["storymap-tour", "--page", name]).unwrap();
            assert_eq!(args.page, page);
        }
        assert!(Args::try_parse_from(["storymap-tour", "--page", "atlas"]).is_err());
    }
}
