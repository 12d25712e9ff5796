//! skillpatch - SKILL.md frontmatter patcher
//!
//! A one-shot build-time tool that sets or replaces top-level YAML frontmatter
//! fields in a SKILL.md document and writes the result to a new location.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod frontmatter;

use cli::Cli;

/// Install the stderr log subscriber. The default level is `warn`, or `debug`
/// with verbose output; a level set in `RUST_LOG` takes precedence.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    // clap exits with status 2 on usage errors; every failure here is status 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    init_tracing(cli.verbose);

    let overrides = cli.overrides();
    if let Err(e) = commands::patch::run(&cli.input, &cli.output, &overrides) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
