//! Command implementations.
//!
//! Each submodule handles one CLI command.

mod codes;
mod format;
mod number;

use crate::cli::{Cli, Commands};

/// Dispatch CLI command to the appropriate handler.
pub fn run_command(cli: &Cli) -> i32 {
    match &cli.command {
        Commands::Format { .. } => handle_format(cli),
        Commands::Codes { filter } => codes::cmd_codes(filter.as_deref()),
        Commands::Number { .. } => handle_number(cli),
    }
}

fn handle_format(cli: &Cli) -> i32 {
    let Commands::Format {
        input,
        instructions,
        jobs,
        line_numbers,
        style,
    } = &cli.command
    else {
        unreachable!("format command variant mismatch");
    };

    format::cmd_format(input, instructions, *jobs, *line_numbers, style)
}

fn handle_number(cli: &Cli) -> i32 {
    let Commands::Number {
        value,
        width,
        signed,
        style,
    } = &cli.command
    else {
        unreachable!("number command variant mismatch");
    };

    number::cmd_number(value, *width, *signed, style)
}
