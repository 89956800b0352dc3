//! GNU assembler (AT&T) syntax: `movl $0x1,0x10(%rax)`.

use std::borrow::Cow;
use std::sync::Arc;

use x86fmt_isa::{Instruction, Register};

use super::GasRuleTable;
use crate::formatter::{FormatterState, impl_formatter};
use crate::helpers::{
    DisplacementSign, Immediate, MemoryParts, MnemonicLine, OperandRef, PrefixStrings, SymbolStyle, broadcast_text,
    cased, far_branch, near_branch, rounding_decorator, scale_text, show_memory_segment,
    show_mnemonic_segment_prefix, write_branch_target, write_displacement, write_keyword, write_op_mask,
    write_selector, write_symbol,
};
use crate::op_info::{InstrOpKind, OperandInfo, flags};
use crate::{
    DecoratorKind, FormatMnemonicOptions, FormatterOptions, FormatterOutput, FormatterTextKind, NumberFormattingOptions,
    NumberKind, PrefixKind, SymbolFlags, SymbolResolver, TableError,
};

const IMMEDIATE_PREFIX: &str = "$";
const REGISTER_PREFIX: &str = "%";

/// Formats instructions in AT&T syntax with sources before destinations.
#[derive(Debug)]
pub struct GasFormatter {
    table: Arc<GasRuleTable>,
    state: FormatterState,
}

impl GasFormatter {
    /// A formatter with [`FormatterOptions::with_gas`] and the built-in table.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the built-in table is malformed.
    pub fn new() -> Result<Self, TableError> {
        Ok(Self::with_table(GasRuleTable::shared()?, FormatterOptions::with_gas()))
    }

    #[must_use]
    pub fn with_table(table: Arc<GasRuleTable>, options: FormatterOptions) -> Self {
        Self {
            table,
            state: FormatterState::new(options),
        }
    }

    #[must_use]
    pub fn with_symbol_resolver(mut self, resolver: Box<dyn SymbolResolver>) -> Self {
        self.state.symbols = Some(resolver);
        self
    }

    fn register_text(options: &FormatterOptions, register: Register) -> Cow<'static, str> {
        let upper = options.uppercase_registers || options.uppercase_all;
        let name: Cow<'static, str> = if register.is_st() {
            Cow::Owned(format!("st({})", register.number()))
        } else {
            Cow::Borrowed(register.name())
        };
        let name = if upper { Cow::Owned(name.to_ascii_uppercase()) } else { name };
        if options.gas_naked_registers {
            name
        } else {
            Cow::Owned(format!("{REGISTER_PREFIX}{name}"))
        }
    }

    /// `%st`, or `%st(0)` when [`FormatterOptions::prefer_st0`] is set.
    fn stack_top_text(options: &FormatterOptions) -> Cow<'static, str> {
        if options.prefer_st0 {
            return Self::register_text(options, Register::ST0);
        }
        let name = cased("st", options.uppercase_registers || options.uppercase_all);
        if options.gas_naked_registers {
            Cow::Owned(name.to_string())
        } else {
            Cow::Owned(format!("{REGISTER_PREFIX}{name}"))
        }
    }

    fn write_line_start(
        state: &mut FormatterState,
        instruction: &Instruction,
        output: &mut dyn FormatterOutput,
        info: &OperandInfo<'_>,
        mnemonic_options: FormatMnemonicOptions,
    ) -> MnemonicLine {
        let options = &state.options;
        let info_flags = info.flags();
        let mut line = MnemonicLine::default();
        let directive = info_flags & flags::MNEMONIC_IS_DIRECTIVE != 0;
        if !mnemonic_options.contains(FormatMnemonicOptions::NO_PREFIXES) && !directive {
            let op_size_field = (info_flags >> flags::OP_SIZE_SHIFT) & flags::OP_SIZE_MASK;
            let op_size = if info_flags & flags::OP_SIZE_IS_BYTE_DIRECTIVE != 0 {
                match op_size_field {
                    1 | 2 => {
                        // There is no spelling for a bare 66h prefix
                        write_keyword(output, options, ".byte");
                        line.column += 5;
                        line.text(output, " ", FormatterTextKind::Text);
                        let number_options = NumberFormattingOptions::with_immediate(options);
                        let text = state.numbers.format_u8(&number_options, 0x66);
                        output.write_number(instruction, 0, None, text, 0x66, NumberKind::UInt8, FormatterTextKind::Number);
                        line.column += u32::try_from(text.len()).unwrap_or(0);
                        line.text(output, ";", FormatterTextKind::Punctuation);
                        line.text(output, " ", FormatterTextKind::Text);
                        ""
                    }
                    3 => "rex.w",
                    _ => "",
                }
            } else {
                match op_size_field {
                    1 => "data16",
                    2 => "data32",
                    3 => "rex.w",
                    _ => "",
                }
            };
            let addr_size = match (info_flags >> flags::ADDR_SIZE_SHIFT) & flags::ADDR_SIZE_MASK {
                1 => "addr16",
                2 => "addr32",
                3 => "addr64",
                _ => "",
            };
            // Hints replace the CS/DS override, written after the mnemonic
            let hint = info_flags & (flags::JCC_TAKEN | flags::JCC_NOT_TAKEN) != 0;
            let strings = PrefixStrings {
                op_size,
                addr_size,
                show_segment: !hint && show_mnemonic_segment_prefix(instruction, info, options),
            };
            line.prefixes(output, instruction, info, options, &strings);
        }
        if !mnemonic_options.contains(FormatMnemonicOptions::NO_MNEMONIC) {
            line.mnemonic(output, instruction, info, options);
            let hint = if info_flags & flags::JCC_NOT_TAKEN != 0 {
                Some(("pn", PrefixKind::HintNotTaken))
            } else if info_flags & flags::JCC_TAKEN != 0 {
                Some(("pt", PrefixKind::HintTaken))
            } else {
                None
            };
            if let Some((hint, kind)) = hint {
                line.text(output, ",", FormatterTextKind::Text);
                let text = cased(hint, options.uppercase_prefixes || options.uppercase_all);
                output.write_prefix(instruction, &text, kind);
                line.column += 2;
            }
        }
        line
    }

    fn write_operand(
        state: &mut FormatterState,
        instruction: &Instruction,
        output: &mut dyn FormatterOutput,
        info: &OperandInfo<'_>,
        operand: u32,
    ) {
        let op = OperandRef::new(instruction, info, operand);
        let kind = info.op_kind(operand);
        // Direct far branches are written as `$sel,$off` even under an indirect rule
        let far = matches!(kind, InstrOpKind::FarBranch16 | InstrOpKind::FarBranch32);
        if info.flags() & flags::INDIRECT_OPERAND != 0 && !far {
            output.write("*", FormatterTextKind::Operator);
        }
        match kind {
            InstrOpKind::Register => {
                let options = &state.options;
                let register = info.op_register(operand);
                let text = if info.is_stack_top(operand) {
                    Self::stack_top_text(options)
                } else {
                    Self::register_text(options, register)
                };
                op.register(output, &text, register);
            }
            InstrOpKind::NearBranch16 | InstrOpKind::NearBranch32 | InstrOpKind::NearBranch64 => {
                let Some((target, size)) = near_branch(instruction, kind) else {
                    return;
                };
                let symbol = state.symbol(op, target, size);
                let options = &state.options;
                let number_options = NumberFormattingOptions::with_branch(options);
                match symbol {
                    Some(symbol) => write_symbol(
                        output,
                        op,
                        &mut state.numbers,
                        &number_options,
                        target,
                        &symbol,
                        SymbolStyle::new(options),
                    ),
                    None => write_branch_target(output, op, &mut state.numbers, &number_options, target, size),
                }
            }
            InstrOpKind::FarBranch16 | InstrOpKind::FarBranch32 => {
                let Some((offset, size)) = far_branch(instruction, kind) else {
                    return;
                };
                let selector = u64::from(instruction.far_branch_selector());
                let symbol = state.symbol(op, offset, size);
                let selector_symbol = if symbol.is_some() { state.symbol(op, selector, 2) } else { None };
                let options = &state.options;
                let number_options = NumberFormattingOptions::with_branch(options);
                output.write(IMMEDIATE_PREFIX, FormatterTextKind::Operator);
                match &selector_symbol {
                    Some(sym) => write_symbol(
                        output,
                        op,
                        &mut state.numbers,
                        &number_options,
                        selector,
                        sym,
                        SymbolStyle::new(options),
                    ),
                    None => write_selector(output, op, &mut state.numbers, &number_options),
                }
                output.write(",", FormatterTextKind::Punctuation);
                if options.space_after_operand_separator {
                    output.write(" ", FormatterTextKind::Text);
                }
                output.write(IMMEDIATE_PREFIX, FormatterTextKind::Operator);
                match &symbol {
                    Some(sym) => write_symbol(
                        output,
                        op,
                        &mut state.numbers,
                        &number_options,
                        offset,
                        sym,
                        SymbolStyle::new(options),
                    ),
                    None => write_branch_target(output, op, &mut state.numbers, &number_options, offset, size),
                }
            }
            _ => {
                if let Some((text, decorator)) = rounding_decorator(kind) {
                    op.decorator(output, &state.options, text, decorator);
                } else if let Some(immediate) = Immediate::of(instruction, kind, operand) {
                    let symbol = state.symbol(op, immediate.value, immediate.size);
                    let options = &state.options;
                    if !is_declare_data(kind) {
                        output.write(IMMEDIATE_PREFIX, FormatterTextKind::Operator);
                    }
                    let number_options = NumberFormattingOptions::with_immediate(options);
                    match symbol {
                        Some(symbol) => write_symbol(
                            output,
                            op,
                            &mut state.numbers,
                            &number_options,
                            immediate.value,
                            &symbol,
                            SymbolStyle::new(options),
                        ),
                        None => immediate.write(output, op, &mut state.numbers, &number_options),
                    }
                } else if let Some(parts) = MemoryParts::of(instruction, kind) {
                    Self::write_memory(state, output, info, op, parts);
                }
            }
        }

        if operand + 1 == info.op_count() {
            let options = &state.options;
            write_op_mask(output, options, op, &Self::register_text(options, instruction.op_mask()));
        }
    }

    fn write_memory(
        state: &mut FormatterState,
        output: &mut dyn FormatterOutput,
        info: &OperandInfo<'_>,
        op: OperandRef<'_>,
        mut parts: MemoryParts,
    ) {
        let instruction = op.instruction;
        let symbol = state.symbol(op, parts.absolute_address(instruction), parts.addr_size);
        let options = &state.options;
        let show_segment = show_memory_segment(instruction, parts.base, options);
        if !options.rip_relative_addresses {
            parts.flatten_ip_relative(instruction);
        }

        if show_segment {
            op.register(output, &Self::register_text(options, parts.segment), parts.segment);
            output.write(":", FormatterTextKind::Punctuation);
        }

        let has_register = parts.has_register();
        let number_options = NumberFormattingOptions::with_displacement(options);
        if let Some(symbol) = &symbol {
            if symbol.flags.contains(SymbolFlags::SIGNED) {
                output.write("-", FormatterTextKind::Operator);
            }
            let style = SymbolStyle {
                write_minus_if_signed: false,
                ..SymbolStyle::new(options)
            };
            let address = parts.absolute_address(instruction);
            write_symbol(output, op, &mut state.numbers, &number_options, address, symbol, style);
        } else if !has_register || (parts.displ_size != 0 && (options.show_zero_displacements || parts.displ != 0)) {
            let sign = if has_register { DisplacementSign::MinusOnly } else { DisplacementSign::Leading };
            write_displacement(output, op, &mut state.numbers, &number_options, options, &parts, sign);
        }

        if has_register {
            output.write("(", FormatterTextKind::Punctuation);
            if options.space_after_memory_bracket {
                output.write(" ", FormatterTextKind::Text);
            }
            let use_scale = (parts.scale > 1 || options.always_show_scale) && parts.addr_size != 2;
            if parts.base != Register::None && parts.index == Register::None && !use_scale {
                op.register(output, &Self::register_text(options, parts.base), parts.base);
            } else {
                if parts.base != Register::None {
                    op.register(output, &Self::register_text(options, parts.base), parts.base);
                }
                write_comma(output, options);
                if parts.index != Register::None {
                    op.register(output, &Self::register_text(options, parts.index), parts.index);
                }
                if use_scale {
                    write_comma(output, options);
                    op.number(
                        output,
                        scale_text(parts.scale),
                        u64::from(parts.scale),
                        NumberKind::Int32,
                        FormatterTextKind::Number,
                    );
                }
            }
            if options.space_after_memory_bracket {
                output.write(" ", FormatterTextKind::Text);
            }
            output.write(")", FormatterTextKind::Punctuation);
        }

        if let Some(text) = broadcast_text(info.memory_size()) {
            op.decorator(output, options, &text, DecoratorKind::Broadcast);
        }
    }
}

impl_formatter!(GasFormatter);

fn write_comma(output: &mut dyn FormatterOutput, options: &FormatterOptions) {
    output.write(",", FormatterTextKind::Punctuation);
    if options.gas_space_after_memory_operand_comma {
        output.write(" ", FormatterTextKind::Text);
    }
}

const fn is_declare_data(kind: InstrOpKind) -> bool {
    matches!(
        kind,
        InstrOpKind::DeclareByte | InstrOpKind::DeclareWord | InstrOpKind::DeclareDword | InstrOpKind::DeclareQword
    )
}

#[cfg(test)]
mod tests {
    use x86fmt_isa::{Code, CodeSize, MemoryOperand, Operand};

    use super::*;
    use crate::{Formatter, SymbolMap};

    fn instr(code: Code, operands: &[Operand]) -> Instruction {
        let mut instruction = Instruction::with_operands(code, operands).unwrap();
        instruction.set_code_size(CodeSize::Code64);
        instruction
    }

    fn gas(instruction: &Instruction) -> String {
        GasFormatter::new().unwrap().format_to_string(instruction)
    }

    #[test]
    fn test_operands_are_reversed() {
        let load = instr(
            Code::Mov_r32_rm32,
            &[
                Operand::Register(Register::EAX),
                Operand::Memory(MemoryOperand::base(Register::RBX).with_index(Register::RCX, 4).with_displacement(0x10)),
            ],
        );
        assert_eq!(gas(&load), "mov 0x10(%rbx,%rcx,4),%eax");

        let negative = instr(
            Code::Mov_r64_rm64,
            &[
                Operand::Register(Register::RAX),
                Operand::Memory(MemoryOperand::base(Register::RBP).with_displacement(-8)),
            ],
        );
        assert_eq!(gas(&negative), "mov -8(%rbp),%rax");

        let index_only = instr(
            Code::Mov_r32_rm32,
            &[
                Operand::Register(Register::EAX),
                Operand::Memory(MemoryOperand::absolute(0x100, 4).with_index(Register::RCX, 8)),
            ],
        );
        assert_eq!(gas(&index_only), "mov 0x100(,%rcx,8),%eax");
    }

    #[test]
    fn test_register_options() {
        let add = instr(
            Code::Add_rm32_imm8,
            &[Operand::Register(Register::ECX), Operand::Immediate(5)],
        );
        let mut formatter = GasFormatter::new().unwrap();
        assert_eq!(formatter.format_to_string(&add), "add $5,%ecx");

        formatter.options_mut().gas_naked_registers = true;
        formatter.options_mut().uppercase_registers = true;
        assert_eq!(formatter.format_to_string(&add), "add $5,ECX");
        assert_eq!(formatter.format_register(Register::ST2), "ST(2)");
    }

    #[test]
    fn test_indirect_call_and_branches() {
        let call = instr(Code::Call_rm64, &[Operand::Register(Register::RAX)]);
        assert_eq!(gas(&call), "call *%rax");

        let jmp = instr(Code::Jmp_rel32_64, &[Operand::Branch(0x1000)]);
        let mut formatter = GasFormatter::new().unwrap();
        formatter.options_mut().branch_leading_zeros = false;
        assert_eq!(formatter.format_to_string(&jmp), "jmp 0x1000");

        let symbols: SymbolMap = [(0x1000, "exit".to_string())].into_iter().collect();
        let mut formatter = GasFormatter::new().unwrap().with_symbol_resolver(Box::new(symbols));
        assert_eq!(formatter.format_to_string(&jmp), "jmp exit");
    }

    #[test]
    fn test_direct_far_branch() {
        let mut call = Instruction::with_operands(
            Code::Call_ptr1616,
            &[Operand::FarBranch {
                selector: 0x10,
                offset: 0x20,
            }],
        )
        .unwrap();
        call.set_code_size(CodeSize::Code32);
        let mut formatter = GasFormatter::new().unwrap();
        formatter.options_mut().branch_leading_zeros = false;
        assert_eq!(formatter.format_to_string(&call), "lcallw $0x10,$0x20");
    }

    #[test]
    fn test_branch_hint_follows_mnemonic() {
        let mut jcc = instr(Code::Jae_rel32_64, &[Operand::Branch(0x1000)]);
        jcc.set_segment_prefix(Register::CS).unwrap();
        let mut formatter = GasFormatter::new().unwrap();
        formatter.options_mut().branch_leading_zeros = false;
        assert_eq!(formatter.format_to_string(&jcc), "jae,pn 0x1000");
        jcc.set_segment_prefix(Register::DS).unwrap();
        assert_eq!(formatter.format_to_string(&jcc), "jae,pt 0x1000");
    }

    #[test]
    fn test_stack_top() {
        let fadd = instr(
            Code::Fadd_st0_sti,
            &[Operand::Register(Register::ST0), Operand::Register(Register::ST3)],
        );
        let mut formatter = GasFormatter::new().unwrap();
        assert_eq!(formatter.format_to_string(&fadd), "fadd %st(3),%st");
        formatter.options_mut().prefer_st0 = true;
        assert_eq!(formatter.format_to_string(&fadd), "fadd %st(3),%st(0)");
    }

    #[test]
    fn test_op_mask_on_last_operand() {
        let mut add = instr(
            Code::EVEX_Vpaddd_zmm_k1z_zmm_zmmm512b32,
            &[
                Operand::Register(Register::ZMM1),
                Operand::Register(Register::ZMM2),
                Operand::Memory(MemoryOperand::base(Register::RAX)),
            ],
        );
        add.set_op_mask(Register::K1).unwrap();
        add.set_zeroing_masking(true);
        add.set_broadcast(true).unwrap();
        assert_eq!(gas(&add), "vpaddd (%rax){1to16},%zmm2,%zmm1{%k1}{z}");
    }

    #[test]
    fn test_declared_data_has_no_immediate_prefix() {
        let data = Instruction::with_declare_data(Code::DeclareByte, &[1, 0xFF]).unwrap();
        assert_eq!(gas(&data), ".byte 1,0xFF");
    }

    #[test]
    fn test_segment_override_in_memory() {
        let mut load = instr(
            Code::Mov_r32_rm32,
            &[Operand::Register(Register::EAX), Operand::Memory(MemoryOperand::base(Register::RBX))],
        );
        load.set_segment_prefix(Register::FS).unwrap();
        let mut formatter = GasFormatter::new().unwrap();
        assert_eq!(formatter.format_to_string(&load), "mov %fs:(%rbx),%eax");
        formatter.options_mut().space_after_memory_bracket = true;
        assert_eq!(formatter.format_to_string(&load), "mov %fs:( %rbx ),%eax");
    }

    #[test]
    fn test_monitor_address_size() {
        assert_eq!(gas(&instr(Code::Monitorq, &[])), "monitor");
        assert_eq!(gas(&instr(Code::Monitord, &[])), "addr32 monitor");
        assert_eq!(gas(&instr(Code::Mwaitx, &[])), "mwaitx");
    }
}
