//! x86fmt CLI - x86 instruction formatter

mod cli;
mod commands;
mod terminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    terminal::set_color(cli.color);

    let default_level = if cli.verbose { "x86fmt=debug" } else { "x86fmt=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.parse().unwrap()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    std::process::exit(commands::run_command(&cli));
}
