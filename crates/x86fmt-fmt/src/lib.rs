//! NASM, MASM and GAS instruction formatters.
//!
//! Each dialect formatter pairs a [`FormatterOptions`] with a rule table
//! decoded once from embedded bytes. The table decides mnemonic spelling and
//! which operands are printed in what order; the formatter writes the text
//! through a [`FormatterOutput`], tagging every piece with a
//! [`FormatterTextKind`].
//!
//! [`FastFormatter`] skips all of that and appends MASM-like text to a
//! `String`.
//!
//! ```ignore
//! use x86fmt_fmt::{Formatter, NasmFormatter};
//!
//! let mut formatter = NasmFormatter::new()?;
//! let text = formatter.format_to_string(&instruction);
//! ```

mod error;
mod fast;
mod formatter;
mod gas;
mod helpers;
mod intel;
mod number;
mod op_info;
mod options;
mod output;
mod pseudo_ops;
mod rules;
mod symbol;
mod table;

#[cfg(test)]
mod test_util;

pub use error::{FormatterError, TableError};
pub use fast::{FastFormatter, FastFormatterOptions};
pub use formatter::{FormatMnemonicOptions, Formatter};
pub use gas::{GasFormatter, GasRuleTable};
pub use intel::{IntelRuleTable, MasmFormatter, MasmRuleTable, NasmFormatter};
pub use number::{NumberFormatter, NumberFormattingOptions};
pub use op_info::{InstrOpKind, OperandInfo};
pub use options::{CcGroup, FormatterOptions, MemorySizeOptions, NumberBase};
pub use output::{DecoratorKind, FormatterOutput, FormatterTextKind, NumberKind, PrefixKind};
pub use symbol::{SymbolFlags, SymbolMap, SymbolResolver, SymbolResult, TextPart};
