//! CLI definitions using clap derive API

use clap::builder::{FalseyValueParser, Styles, styling::AnsiColor};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::frontmatter::{Override, Overrides};

/// skillpatch - SKILL.md frontmatter patcher
///
/// Set or replace top-level frontmatter fields of a SKILL.md document.
#[derive(Parser, Debug)]
#[command(
    name = "skillpatch",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Patch top-level YAML frontmatter fields in a SKILL.md document",
    long_about = "Reads a SKILL.md document with YAML frontmatter (delimited by '---' lines), \
                  replaces the given top-level keys in place, appends the keys that are missing, \
                  and writes the result to OUTPUT. Nested keys and the document body are left \
                  untouched. Values are written as-is, without quoting.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  skillpatch SKILL.md out/SKILL.md name=my-skill\n   \
                  skillpatch SKILL.md out/SKILL.md description='Does things' homepage=https://example.com\n"
)]
pub struct Cli {
    /// Source document to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination to write (overwritten if it exists)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Fields to set, as key=value (the value may contain '=')
    ///
    /// Once the overrides begin, every remaining argument is taken as an
    /// override, including ones starting with '-'.
    #[arg(
        value_name = "KEY=VALUE",
        required = true,
        num_args = 1..,
        allow_hyphen_values = true
    )]
    pub overrides: Vec<Override>,

    /// Enable verbose output (any value other than false/no/off/0 enables it)
    #[arg(
        long,
        short = 'v',
        env = "SKILLPATCH_VERBOSE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub verbose: bool,
}

impl Cli {
    /// Overrides in command-line order; a repeated key keeps its first
    /// position and takes its last value.
    pub fn overrides(&self) -> Overrides {
        self.overrides.iter().cloned().collect()
    }
}
