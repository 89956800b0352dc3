//! Formatter and rule-table errors.

use thiserror::Error;

/// A malformed rule or string table. Always fatal: a formatter is never built
/// from a partially decoded table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("table truncated at offset {offset}")]
    Truncated { offset: usize },

    #[error("{remaining} unconsumed byte(s) after the last entry")]
    TrailingBytes { remaining: usize },

    #[error("unknown rule kind {kind} at offset {offset}")]
    UnknownKind { kind: u8, offset: usize },

    #[error("string index {index} out of range ({count} strings)")]
    StringIndex { index: u32, count: usize },

    #[error("invalid boolean byte {value} at offset {offset}")]
    InvalidBool { value: u8, offset: usize },

    #[error("back-reference entry at offset {offset} has no predecessor")]
    NoPrevious { offset: usize },

    #[error("invalid {what} value {value} at offset {offset}")]
    InvalidValue {
        what: &'static str,
        value: u32,
        offset: usize,
    },

    #[error("string {index} is not valid UTF-8")]
    InvalidUtf8 { index: usize },

    #[error("compressed integer at offset {offset} is longer than 5 bytes")]
    Overlong { offset: usize },
}

/// Errors reported by options setters and formatter entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatterError {
    #[error("condition code group `{group}` has {count} mnemonic(s), index {index} is out of range")]
    InvalidCcSelector {
        group: &'static str,
        index: u32,
        count: usize,
    },

    #[error("unknown condition code group `{0}`")]
    UnknownCcGroup(String),

    #[error("invalid number base {0}")]
    InvalidNumberBase(u32),

    #[error("invalid memory size option {0}")]
    InvalidMemorySizeOptions(u32),

    #[error("operand {operand} out of range (instruction has {count} formatted operand(s))")]
    InvalidOperand { operand: u32, count: u32 },

    #[error("instruction operand {operand} out of range (instruction has {count} operand(s))")]
    InvalidInstructionOperand { operand: u32, count: u32 },

    #[error("rule table error: {0}")]
    Table(#[from] TableError),
}
