use thiserror::Error;

use crate::parse::ParseError;

/// Errors from the facade and the CLI.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
    #[error("Rule table error: {0}")]
    Table(#[from] x86fmt_fmt::TableError),
    #[error("Formatter error: {0}")]
    Formatter(#[from] x86fmt_fmt::FormatterError),
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, Error>;
