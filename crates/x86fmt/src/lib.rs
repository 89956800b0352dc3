//! x86fmt - NASM, MASM and GAS text for x86 instructions
//!
//! Re-exports the instruction model and the formatters, and adds the pieces
//! the CLI is built from: a textual instruction parser and a factory that
//! hands out formatters sharing one decoded rule table.
//!
//! # Example
//!
//! ```ignore
//! use x86fmt::{FormatterFactory, InstructionParser, Syntax};
//!
//! let factory = FormatterFactory::new(Syntax::Gas, Syntax::Gas.default_options())?;
//! let parser = InstructionParser::new();
//! let instr = parser.parse_line("Mov_r32_rm32 eax, [rbx+8]")?.unwrap();
//! assert_eq!(factory.build().format_to_string(&instr), "mov 8(%rbx),%eax");
//! ```

pub use x86fmt_fmt::{
    CcGroup, DecoratorKind, FastFormatter, FastFormatterOptions, FormatMnemonicOptions, Formatter, FormatterError,
    FormatterOptions, FormatterOutput, FormatterTextKind, GasFormatter, GasRuleTable, InstrOpKind, IntelRuleTable,
    MasmFormatter, MasmRuleTable, MemorySizeOptions, NasmFormatter, NumberBase, NumberFormatter,
    NumberFormattingOptions, NumberKind, OperandInfo, PrefixKind, SymbolFlags, SymbolMap, SymbolResolver,
    SymbolResult, TableError, TextPart,
};
pub use x86fmt_isa::{
    Code, CodeFlags, CodeSize, Instruction, IsaError, MemoryOperand, MemorySize, OpAccess, OpKind, OpTemplate,
    Operand, Register, RoundingControl,
};

mod error;
pub mod parse;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

pub use error::{Error, Result};
pub use parse::{InstructionParser, ParseError, parse_number};

// ============================================================================
// Syntax selection
// ============================================================================

/// Assembler dialect.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Syntax {
    #[default]
    Nasm,
    Masm,
    Gas,
}

impl Syntax {
    pub const ALL: [Self; 3] = [Self::Nasm, Self::Masm, Self::Gas];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nasm => "nasm",
            Self::Masm => "masm",
            Self::Gas => "gas",
        }
    }

    /// The dialect's own defaults (`0ABh` or `0xab` hex numbers).
    #[must_use]
    pub fn default_options(self) -> FormatterOptions {
        match self {
            Self::Nasm => FormatterOptions::with_nasm(),
            Self::Masm => FormatterOptions::with_masm(),
            Self::Gas => FormatterOptions::with_gas(),
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Syntax {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nasm" => Ok(Self::Nasm),
            "masm" | "intel" => Ok(Self::Masm),
            "gas" | "att" => Ok(Self::Gas),
            _ => Err(Error::InvalidOption(format!("unknown syntax `{s}`"))),
        }
    }
}

// ============================================================================
// Formatter factory
// ============================================================================

#[derive(Clone, Debug)]
enum Tables {
    Nasm(Arc<IntelRuleTable>),
    Masm(Arc<MasmRuleTable>),
    Gas(Arc<GasRuleTable>),
}

/// Builds formatters for one dialect and option set. The rule table is
/// decoded once and shared by every formatter built.
#[derive(Clone, Debug)]
pub struct FormatterFactory {
    syntax: Syntax,
    options: FormatterOptions,
    tables: Tables,
    symbols: Option<SymbolMap>,
}

impl FormatterFactory {
    /// # Errors
    ///
    /// Returns [`Error::Table`] if the built-in rule table is malformed.
    pub fn new(syntax: Syntax, options: FormatterOptions) -> Result<Self> {
        let tables = match syntax {
            Syntax::Nasm => Tables::Nasm(IntelRuleTable::shared()?),
            Syntax::Masm => Tables::Masm(MasmRuleTable::shared()?),
            Syntax::Gas => Tables::Gas(GasRuleTable::shared()?),
        };
        debug!(syntax = %syntax, "formatter factory ready");
        Ok(Self {
            syntax,
            options,
            tables,
            symbols: None,
        })
    }

    #[must_use]
    pub fn with_symbols(mut self, symbols: SymbolMap) -> Self {
        self.symbols = Some(symbols);
        self
    }

    #[must_use]
    pub const fn syntax(&self) -> Syntax {
        self.syntax
    }

    #[must_use]
    pub const fn options(&self) -> &FormatterOptions {
        &self.options
    }

    /// A new formatter. Cheap: only the options and symbol map handle are cloned.
    #[must_use]
    pub fn build(&self) -> Box<dyn Formatter + Send> {
        let options = self.options.clone();
        let resolver = || -> Option<Box<dyn SymbolResolver>> {
            self.symbols
                .clone()
                .map(|symbols| Box::new(symbols) as Box<dyn SymbolResolver>)
        };
        match &self.tables {
            Tables::Gas(table) => {
                let formatter = GasFormatter::with_table(Arc::clone(table), options);
                match resolver() {
                    Some(symbols) => Box::new(formatter.with_symbol_resolver(symbols)),
                    None => Box::new(formatter),
                }
            }
            Tables::Masm(table) => {
                let formatter = MasmFormatter::with_table(Arc::clone(table), options);
                match resolver() {
                    Some(symbols) => Box::new(formatter.with_symbol_resolver(symbols)),
                    None => Box::new(formatter),
                }
            }
            Tables::Nasm(table) => {
                let formatter = NasmFormatter::with_table(Arc::clone(table), options);
                match resolver() {
                    Some(symbols) => Box::new(formatter.with_symbol_resolver(symbols)),
                    None => Box::new(formatter),
                }
            }
        }
    }
}

// ============================================================================
// Batch formatting
// ============================================================================

/// One formatted input line, kept as tagged text pieces for styling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedLine {
    /// 1-based line number in the input.
    pub line: usize,
    pub parts: Vec<(String, FormatterTextKind)>,
}

impl FormattedLine {
    /// The plain text of the line.
    #[must_use]
    pub fn text(&self) -> String {
        self.parts.iter().map(|(text, _)| text.as_str()).collect()
    }
}

/// Parses and formats `lines` in parallel, one formatter per worker.
///
/// Blank and comment lines produce nothing; the rest keep their input order.
/// A line that fails to parse yields an [`Error::Parse`] in its place.
pub fn format_lines(factory: &FormatterFactory, parser: &InstructionParser, lines: &[String]) -> Vec<Result<FormattedLine>> {
    lines
        .par_iter()
        .enumerate()
        .map_init(
            || factory.build(),
            |formatter, (index, text)| -> Result<Option<FormattedLine>> {
                let line = index + 1;
                let instruction = parser
                    .parse_line(text)
                    .map_err(|source| Error::Parse { line, source })?;
                Ok(instruction.map(|instruction| {
                    let mut parts = Vec::new();
                    formatter.format(&instruction, &mut parts);
                    FormattedLine { line, parts }
                }))
            },
        )
        .filter_map(Result::transpose)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_from_str() {
        assert_eq!("NASM".parse::<Syntax>().unwrap(), Syntax::Nasm);
        assert_eq!("att".parse::<Syntax>().unwrap(), Syntax::Gas);
        assert!(matches!("tasm".parse::<Syntax>(), Err(Error::InvalidOption(_))));
    }

    #[test]
    fn test_factory_dialects() {
        let parser = InstructionParser::new();
        let instr = parser.parse_line("Mov_r32_rm32 eax, [rbx+8]").unwrap().unwrap();
        let expected = [
            (Syntax::Nasm, "mov eax,[rbx+8]"),
            (Syntax::Masm, "mov eax,[rbx+8]"),
            (Syntax::Gas, "mov 8(%rbx),%eax"),
        ];
        for (syntax, text) in expected {
            let factory = FormatterFactory::new(syntax, syntax.default_options()).unwrap();
            assert_eq!(factory.build().format_to_string(&instr), text, "{syntax}");
        }
    }

    #[test]
    fn test_format_lines_keeps_order() {
        let parser = InstructionParser::new();
        let factory = FormatterFactory::new(Syntax::Nasm, FormatterOptions::with_nasm()).unwrap();
        let lines: Vec<String> = (0..64)
            .map(|i| format!("Add_rm32_imm8 ecx, {}", i % 8))
            .chain(["".to_string(), "Bogus eax".to_string()])
            .collect();
        let results = format_lines(&factory, &parser, &lines);
        assert_eq!(results.len(), 65);
        for (i, result) in results[..64].iter().enumerate() {
            let line = result.as_ref().unwrap();
            assert_eq!(line.line, i + 1);
            assert_eq!(line.text(), format!("add ecx,{}", i % 8));
        }
        assert!(matches!(results[64], Err(Error::Parse { line: 66, .. })));
    }

    #[test]
    fn test_factory_shares_symbols() {
        let parser = InstructionParser::new();
        let instr = parser.parse_line("Call_rel32_64 0x401000").unwrap().unwrap();
        let symbols: SymbolMap = [(0x40_1000, "main".to_string())].into_iter().collect();
        let factory = FormatterFactory::new(Syntax::Gas, FormatterOptions::with_gas())
            .unwrap()
            .with_symbols(symbols);
        assert_eq!(factory.build().format_to_string(&instr), "call main");
        assert_eq!(factory.build().format_to_string(&instr), "call main");
    }

    #[test]
    fn test_masm_factory_uses_masm_rules() {
        let parser = InstructionParser::new();
        let instr = parser.parse_line("Stosb_m8_AL [edi], al").unwrap().unwrap();
        let masm = FormatterFactory::new(Syntax::Masm, Syntax::Masm.default_options()).unwrap();
        let nasm = FormatterFactory::new(Syntax::Nasm, Syntax::Nasm.default_options()).unwrap();
        assert_eq!(masm.build().format_to_string(&instr), "stos byte ptr [edi]");
        assert_eq!(nasm.build().format_to_string(&instr), "a32 stosb");
    }

    #[test]
    fn test_fast_formatter_reexport() {
        let parser = InstructionParser::new();
        let instr = parser.parse_line("Mov_r32_rm32 eax, [rbx+8]").unwrap().unwrap();
        assert_eq!(FastFormatter::new().format_to_string(&instr), "mov eax,[rbx+8h]");
    }
}
