//! Format command.

use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, error, info, warn};
use x86fmt::{FormatterFactory, InstructionParser, Syntax, format_lines};

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS, StyleArgs};
use crate::terminal;

/// Handle the `format` command.
pub fn cmd_format(input: &Path, instructions: &[String], jobs: usize, line_numbers: bool, style: &StyleArgs) -> i32 {
    let lines = if instructions.is_empty() {
        match read_lines(input) {
            Ok(lines) => lines,
            Err(e) => {
                error!(input = %input.display(), error = %e, "failed to read input");
                terminal::error(&format!("cannot read {}: {e}", input.display()));
                return EXIT_FAILURE;
            }
        }
    } else {
        instructions.to_vec()
    };

    let factory = match build_factory(style) {
        Ok(factory) => factory,
        Err(e) => {
            error!(error = %e, "invalid formatter options");
            terminal::error(&e.to_string());
            return EXIT_FAILURE;
        }
    };
    info!(syntax = %factory.syntax(), lines = lines.len(), "formatting");

    let pool = match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => pool,
        Err(e) => {
            error!(error = %e, "failed to start worker pool");
            return EXIT_FAILURE;
        }
    };
    let parser = InstructionParser::new();
    debug!(codes = parser.code_count(), threads = pool.current_num_threads(), "parser ready");
    let results = pool.install(|| format_lines(&factory, &parser, &lines));

    let mut failures = 0usize;
    for result in &results {
        match result {
            Ok(line) => terminal::print_line(line, line_numbers),
            Err(e) => {
                failures += 1;
                error!(error = %e, "format failed");
                terminal::error(&e.to_string());
            }
        }
    }

    if failures > 0 {
        warn!(failures, total = results.len(), "some lines failed");
        terminal::warning(&format!("{failures} of {} lines failed", results.len()));
        return EXIT_FAILURE;
    }
    if results.is_empty() {
        terminal::warning("no instructions in input");
    }
    EXIT_SUCCESS
}

fn build_factory(style: &StyleArgs) -> x86fmt::Result<FormatterFactory> {
    let factory = FormatterFactory::new(Syntax::from(style.syntax), style.to_options()?)?;
    Ok(match style.symbol_map()? {
        Some(symbols) => factory.with_symbols(symbols),
        None => factory,
    })
}

fn read_lines(input: &Path) -> io::Result<Vec<String>> {
    let text = if input.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        std::fs::read_to_string(input)?
    };
    Ok(text.lines().map(str::to_string).collect())
}
