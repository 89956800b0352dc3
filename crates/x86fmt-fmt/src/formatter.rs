//! The interface every dialect formatter implements.
//!
//! A formatter owns its [`FormatterOptions`], an optional [`SymbolResolver`]
//! and a shared rule table. Each call derives a fresh [`OperandInfo`] from the
//! table, so changing options between calls takes effect immediately.
//!
//! [`OperandInfo`]: crate::OperandInfo

use x86fmt_isa::{Instruction, OpAccess, Register};

use crate::helpers::OperandRef;
use crate::{FormatterError, FormatterOptions, FormatterOutput, NumberFormatter, NumberFormattingOptions, SymbolResolver, SymbolResult};

/// What [`Formatter::format_mnemonic_options`] leaves out.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct FormatMnemonicOptions(u32);

impl FormatMnemonicOptions {
    pub const NONE: Self = Self(0);
    pub const NO_PREFIXES: Self = Self(1 << 0);
    pub const NO_MNEMONIC: Self = Self(1 << 1);

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }
}

impl std::ops::BitOr for FormatMnemonicOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Formats instructions as assembly text.
///
/// Operand indices come in two flavours: *formatter* operands are the ones a
/// dialect prints (reordered, with pseudo-ops collapsed and decorators added),
/// *instruction* operands are the instruction's own. Use
/// [`get_instruction_operand`](Self::get_instruction_operand) and
/// [`get_formatter_operand`](Self::get_formatter_operand) to map between them.
pub trait Formatter {
    fn options(&self) -> &FormatterOptions;

    fn options_mut(&mut self) -> &mut FormatterOptions;

    /// Writes prefixes, mnemonic and operands.
    fn format(&mut self, instruction: &Instruction, output: &mut dyn FormatterOutput);

    /// Writes prefixes and the mnemonic.
    fn format_mnemonic(&mut self, instruction: &Instruction, output: &mut dyn FormatterOutput) {
        self.format_mnemonic_options(instruction, output, FormatMnemonicOptions::NONE);
    }

    fn format_mnemonic_options(
        &mut self,
        instruction: &Instruction,
        output: &mut dyn FormatterOutput,
        options: FormatMnemonicOptions,
    );

    /// Number of operands the dialect prints.
    fn operand_count(&self, instruction: &Instruction) -> u32;

    /// Access class of a formatter operand that has no instruction operand
    /// (`None` means "same as the instruction operand").
    ///
    /// # Errors
    ///
    /// [`FormatterError::InvalidOperand`] if `operand >= operand_count()`.
    fn op_access(&self, instruction: &Instruction, operand: u32) -> Result<Option<OpAccess>, FormatterError>;

    /// Instruction operand shown by formatter operand `operand`, `None` if
    /// the operand is synthetic.
    ///
    /// # Errors
    ///
    /// [`FormatterError::InvalidOperand`] if `operand >= operand_count()`.
    fn get_instruction_operand(&self, instruction: &Instruction, operand: u32) -> Result<Option<u32>, FormatterError>;

    /// Formatter operand showing `instruction_operand`, `None` if the dialect
    /// doesn't print it.
    ///
    /// # Errors
    ///
    /// [`FormatterError::InvalidInstructionOperand`] if `instruction_operand`
    /// is not an operand of the instruction.
    fn get_formatter_operand(
        &self,
        instruction: &Instruction,
        instruction_operand: u32,
    ) -> Result<Option<u32>, FormatterError>;

    /// # Errors
    ///
    /// [`FormatterError::InvalidOperand`] if `operand >= operand_count()`.
    fn format_operand(
        &mut self,
        instruction: &Instruction,
        output: &mut dyn FormatterOutput,
        operand: u32,
    ) -> Result<(), FormatterError>;

    fn format_operand_separator(&mut self, instruction: &Instruction, output: &mut dyn FormatterOutput);

    /// Writes all operands with separators, without the mnemonic.
    fn format_all_operands(&mut self, instruction: &Instruction, output: &mut dyn FormatterOutput);

    /// Register name as the dialect writes it.
    fn format_register(&mut self, register: Register) -> &str;

    fn format_i8(&mut self, value: i8) -> &str;
    fn format_i16(&mut self, value: i16) -> &str;
    fn format_i32(&mut self, value: i32) -> &str;
    fn format_i64(&mut self, value: i64) -> &str;
    fn format_u8(&mut self, value: u8) -> &str;
    fn format_u16(&mut self, value: u16) -> &str;
    fn format_u32(&mut self, value: u32) -> &str;
    fn format_u64(&mut self, value: u64) -> &str;

    fn format_i8_options(&mut self, value: i8, number_options: &NumberFormattingOptions<'_>) -> &str;
    fn format_i16_options(&mut self, value: i16, number_options: &NumberFormattingOptions<'_>) -> &str;
    fn format_i32_options(&mut self, value: i32, number_options: &NumberFormattingOptions<'_>) -> &str;
    fn format_i64_options(&mut self, value: i64, number_options: &NumberFormattingOptions<'_>) -> &str;
    fn format_u8_options(&mut self, value: u8, number_options: &NumberFormattingOptions<'_>) -> &str;
    fn format_u16_options(&mut self, value: u16, number_options: &NumberFormattingOptions<'_>) -> &str;
    fn format_u32_options(&mut self, value: u32, number_options: &NumberFormattingOptions<'_>) -> &str;
    fn format_u64_options(&mut self, value: u64, number_options: &NumberFormattingOptions<'_>) -> &str;

    /// Formats into a new string.
    fn format_to_string(&mut self, instruction: &Instruction) -> String {
        let mut text = String::new();
        self.format(instruction, &mut text);
        text
    }
}

// ============================================================================
// Shared state
// ============================================================================

/// Everything a formatter owns besides its rule table.
pub(crate) struct FormatterState {
    pub(crate) options: FormatterOptions,
    pub(crate) numbers: NumberFormatter,
    pub(crate) symbols: Option<Box<dyn SymbolResolver>>,
    /// Backing store for [`Formatter::format_register`].
    pub(crate) text: String,
}

impl FormatterState {
    pub(crate) fn new(options: FormatterOptions) -> Self {
        Self {
            options,
            numbers: NumberFormatter::new(),
            symbols: None,
            text: String::new(),
        }
    }

    pub(crate) fn symbol(&mut self, op: OperandRef<'_>, address: u64, address_size: u32) -> Option<SymbolResult> {
        self.symbols
            .as_mut()?
            .symbol(op.instruction, op.operand, op.instruction_operand, address, address_size)
    }
}

impl std::fmt::Debug for FormatterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterState")
            .field("options", &self.options)
            .field("symbols", &self.symbols.is_some())
            .finish_non_exhaustive()
    }
}

/// Implements [`Formatter`] for a dialect struct with `table` and `state`
/// fields and these associated functions:
///
/// - `write_line_start(state, instruction, output, info, options) -> MnemonicLine`
/// - `write_operand(state, instruction, output, info, operand)`
/// - `register_text(options, register) -> Cow<'static, str>`
macro_rules! impl_formatter {
    ($formatter:ty) => {
        impl $crate::Formatter for $formatter {
            fn options(&self) -> &$crate::FormatterOptions {
                &self.state.options
            }

            fn options_mut(&mut self) -> &mut $crate::FormatterOptions {
                &mut self.state.options
            }

            fn format(&mut self, instruction: &x86fmt_isa::Instruction, output: &mut dyn $crate::FormatterOutput) {
                let info = self.table.op_info(&self.state.options, instruction);
                let line = Self::write_line_start(
                    &mut self.state,
                    instruction,
                    output,
                    &info,
                    $crate::FormatMnemonicOptions::NONE,
                );
                if info.op_count() != 0 {
                    line.tabs(output, &self.state.options);
                    for operand in 0..info.op_count() {
                        if operand > 0 {
                            $crate::helpers::write_operand_separator(output, &self.state.options);
                        }
                        Self::write_operand(&mut self.state, instruction, output, &info, operand);
                    }
                }
            }

            fn format_mnemonic_options(
                &mut self,
                instruction: &x86fmt_isa::Instruction,
                output: &mut dyn $crate::FormatterOutput,
                options: $crate::FormatMnemonicOptions,
            ) {
                let info = self.table.op_info(&self.state.options, instruction);
                Self::write_line_start(&mut self.state, instruction, output, &info, options);
            }

            fn operand_count(&self, instruction: &x86fmt_isa::Instruction) -> u32 {
                self.table.op_info(&self.state.options, instruction).op_count()
            }

            fn op_access(
                &self,
                instruction: &x86fmt_isa::Instruction,
                operand: u32,
            ) -> Result<Option<x86fmt_isa::OpAccess>, $crate::FormatterError> {
                let info = self.table.op_info(&self.state.options, instruction);
                $crate::helpers::check_operand(&info, operand)?;
                Ok(info.op_access(operand))
            }

            fn get_instruction_operand(
                &self,
                instruction: &x86fmt_isa::Instruction,
                operand: u32,
            ) -> Result<Option<u32>, $crate::FormatterError> {
                let info = self.table.op_info(&self.state.options, instruction);
                $crate::helpers::check_operand(&info, operand)?;
                Ok(info.instruction_index(operand))
            }

            fn get_formatter_operand(
                &self,
                instruction: &x86fmt_isa::Instruction,
                instruction_operand: u32,
            ) -> Result<Option<u32>, $crate::FormatterError> {
                if instruction_operand >= instruction.op_count() {
                    return Err($crate::FormatterError::InvalidInstructionOperand {
                        operand: instruction_operand,
                        count: instruction.op_count(),
                    });
                }
                let info = self.table.op_info(&self.state.options, instruction);
                Ok(info.operand_index(instruction_operand))
            }

            fn format_operand(
                &mut self,
                instruction: &x86fmt_isa::Instruction,
                output: &mut dyn $crate::FormatterOutput,
                operand: u32,
            ) -> Result<(), $crate::FormatterError> {
                let info = self.table.op_info(&self.state.options, instruction);
                $crate::helpers::check_operand(&info, operand)?;
                Self::write_operand(&mut self.state, instruction, output, &info, operand);
                Ok(())
            }

            fn format_operand_separator(
                &mut self,
                _instruction: &x86fmt_isa::Instruction,
                output: &mut dyn $crate::FormatterOutput,
            ) {
                $crate::helpers::write_operand_separator(output, &self.state.options);
            }

            fn format_all_operands(
                &mut self,
                instruction: &x86fmt_isa::Instruction,
                output: &mut dyn $crate::FormatterOutput,
            ) {
                let info = self.table.op_info(&self.state.options, instruction);
                for operand in 0..info.op_count() {
                    if operand > 0 {
                        $crate::helpers::write_operand_separator(output, &self.state.options);
                    }
                    Self::write_operand(&mut self.state, instruction, output, &info, operand);
                }
            }

            fn format_register(&mut self, register: x86fmt_isa::Register) -> &str {
                let text = Self::register_text(&self.state.options, register);
                self.state.text.clear();
                self.state.text.push_str(&text);
                &self.state.text
            }

            fn format_i8(&mut self, value: i8) -> &str {
                let number_options = $crate::NumberFormattingOptions::with_immediate(&self.state.options);
                self.state.numbers.format_i8(&number_options, value)
            }

            fn format_i16(&mut self, value: i16) -> &str {
                let number_options = $crate::NumberFormattingOptions::with_immediate(&self.state.options);
                self.state.numbers.format_i16(&number_options, value)
            }

            fn format_i32(&mut self, value: i32) -> &str {
                let number_options = $crate::NumberFormattingOptions::with_immediate(&self.state.options);
                self.state.numbers.format_i32(&number_options, value)
            }

            fn format_i64(&mut self, value: i64) -> &str {
                let number_options = $crate::NumberFormattingOptions::with_immediate(&self.state.options);
                self.state.numbers.format_i64(&number_options, value)
            }

            fn format_u8(&mut self, value: u8) -> &str {
                let number_options = $crate::NumberFormattingOptions::with_immediate(&self.state.options);
                self.state.numbers.format_u8(&number_options, value)
            }

            fn format_u16(&mut self, value: u16) -> &str {
                let number_options = $crate::NumberFormattingOptions::with_immediate(&self.state.options);
                self.state.numbers.format_u16(&number_options, value)
            }

            fn format_u32(&mut self, value: u32) -> &str {
                let number_options = $crate::NumberFormattingOptions::with_immediate(&self.state.options);
                self.state.numbers.format_u32(&number_options, value)
            }

            fn format_u64(&mut self, value: u64) -> &str {
                let number_options = $crate::NumberFormattingOptions::with_immediate(&self.state.options);
                self.state.numbers.format_u64(&number_options, value)
            }

            fn format_i8_options(&mut self, value: i8, number_options: &$crate::NumberFormattingOptions<'_>) -> &str {
                self.state.numbers.format_i8(number_options, value)
            }

            fn format_i16_options(&mut self, value: i16, number_options: &$crate::NumberFormattingOptions<'_>) -> &str {
                self.state.numbers.format_i16(number_options, value)
            }

            fn format_i32_options(&mut self, value: i32, number_options: &$crate::NumberFormattingOptions<'_>) -> &str {
                self.state.numbers.format_i32(number_options, value)
            }

            fn format_i64_options(&mut self, value: i64, number_options: &$crate::NumberFormattingOptions<'_>) -> &str {
                self.state.numbers.format_i64(number_options, value)
            }

            fn format_u8_options(&mut self, value: u8, number_options: &$crate::NumberFormattingOptions<'_>) -> &str {
                self.state.numbers.format_u8(number_options, value)
            }

            fn format_u16_options(&mut self, value: u16, number_options: &$crate::NumberFormattingOptions<'_>) -> &str {
                self.state.numbers.format_u16(number_options, value)
            }

            fn format_u32_options(&mut self, value: u32, number_options: &$crate::NumberFormattingOptions<'_>) -> &str {
                self.state.numbers.format_u32(number_options, value)
            }

            fn format_u64_options(&mut self, value: u64, number_options: &$crate::NumberFormattingOptions<'_>) -> &str {
                self.state.numbers.format_u64(number_options, value)
            }
        }
    };
}

pub(crate) use impl_formatter;
