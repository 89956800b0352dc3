//! NASM syntax: `mov dword [rax+10h],1`.

use std::borrow::Cow;
use std::sync::Arc;

use x86fmt_isa::{Instruction, MemorySize, Register};

use super::IntelRuleTable;
use crate::formatter::{FormatterState, impl_formatter};
use crate::helpers::{
    DisplacementSign, Immediate, MemoryParts, MnemonicLine, OperandRef, PrefixStrings, SymbolStyle, broadcast_text,
    cased, far_branch, near_branch, rounding_decorator, show_memory_segment, show_mnemonic_segment_prefix,
    wants_memory_size, write_add_operator, write_branch_target, write_displacement, write_keyword,
    write_keyword_space, write_op_mask, write_scaled_index, write_selector, write_symbol,
};
use crate::op_info::{
    BranchSizeInfo, FarMemorySizeInfo, InstrOpKind, MemorySizeInfo, OperandInfo, SignExtendInfo, flags,
};
use crate::{
    DecoratorKind, FormatMnemonicOptions, FormatterOptions, FormatterOutput, FormatterTextKind, NumberFormattingOptions,
    SymbolFlags, SymbolResolver, TableError,
};

/// Formats instructions in NASM syntax.
#[derive(Debug)]
pub struct NasmFormatter {
    table: Arc<IntelRuleTable>,
    state: FormatterState,
}

impl NasmFormatter {
    /// A formatter with [`FormatterOptions::with_nasm`] and the built-in table.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the built-in table is malformed.
    pub fn new() -> Result<Self, TableError> {
        Ok(Self::with_table(IntelRuleTable::shared()?, FormatterOptions::with_nasm()))
    }

    /// A formatter sharing an already decoded table.
    #[must_use]
    pub fn with_table(table: Arc<IntelRuleTable>, options: FormatterOptions) -> Self {
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
        cased(register.name(), options.uppercase_registers || options.uppercase_all)
    }

    fn write_line_start(
        state: &mut FormatterState,
        instruction: &Instruction,
        output: &mut dyn FormatterOutput,
        info: &OperandInfo<'_>,
        mnemonic_options: FormatMnemonicOptions,
    ) -> MnemonicLine {
        let options = &state.options;
        let mut line = MnemonicLine::default();
        if !mnemonic_options.contains(FormatMnemonicOptions::NO_PREFIXES) {
            let info_flags = info.flags();
            let op_size = match (info_flags >> flags::OP_SIZE_SHIFT) & flags::OP_SIZE_MASK {
                1 => "o16",
                2 => "o32",
                3 => "o64",
                _ => "",
            };
            let addr_size = match (info_flags >> flags::ADDR_SIZE_SHIFT) & flags::ADDR_SIZE_MASK {
                1 => "a16",
                2 => "a32",
                3 => "a64",
                _ => "",
            };
            // Branch hints are the CS/DS overrides in front of a jcc
            let hint = info_flags & (flags::JCC_TAKEN | flags::JCC_NOT_TAKEN) != 0;
            let strings = PrefixStrings {
                op_size,
                addr_size,
                show_segment: hint || show_mnemonic_segment_prefix(instruction, info, options),
            };
            line.prefixes(output, instruction, info, options, &strings);
        }
        if !mnemonic_options.contains(FormatMnemonicOptions::NO_MNEMONIC) {
            line.mnemonic(output, instruction, info, options);
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
        match kind {
            InstrOpKind::Register => {
                let options = &state.options;
                if operand == 0 && info.flags() & flags::REGISTER_TO != 0 {
                    write_keyword_space(output, options, "to");
                }
                let register = info.op_register(operand);
                op.register(output, &Self::register_text(options, register), register);
            }
            InstrOpKind::NearBranch16 | InstrOpKind::NearBranch32 | InstrOpKind::NearBranch64 => {
                let Some((target, size)) = near_branch(instruction, kind) else {
                    return;
                };
                let symbol = state.symbol(op, target, size);
                let options = &state.options;
                write_branch_size(output, options, info.flags());
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
                write_branch_size(output, options, info.flags());
                let number_options = NumberFormattingOptions::with_branch(options);
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
                output.write(":", FormatterTextKind::Punctuation);
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
                    if options.nasm_show_sign_extended_immediate_size {
                        write_sign_extend_size(output, options, info.flags());
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

        if operand == 0 {
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

        let mut info_flags = info.flags();
        let mut rel = false;
        if !options.rip_relative_addresses {
            let eip = parts.base == Register::EIP;
            if parts.flatten_ip_relative(instruction) {
                rel = true;
                info_flags &= !(flags::MEMORY_SIZE_INFO_MASK << flags::MEMORY_SIZE_INFO_SHIFT);
                if eip {
                    info_flags |= MemorySizeInfo::Dword.flags();
                }
            }
        }

        write_memory_size(output, options, info.memory_size(), info_flags);

        output.write("[", FormatterTextKind::Punctuation);
        if options.space_after_memory_bracket {
            output.write(" ", FormatterTextKind::Text);
        }
        match MemorySizeInfo::from_flags(info_flags) {
            MemorySizeInfo::None => {}
            MemorySizeInfo::Word => write_keyword_space(output, options, "word"),
            MemorySizeInfo::Dword => write_keyword_space(output, options, "dword"),
            MemorySizeInfo::Qword => write_keyword_space(output, options, "qword"),
        }
        if rel {
            write_keyword_space(output, options, "rel");
        }
        if show_segment {
            op.register(output, &Self::register_text(options, parts.segment), parts.segment);
            output.write(":", FormatterTextKind::Punctuation);
        }

        let mut need_plus = false;
        if parts.base != Register::None {
            op.register(output, &Self::register_text(options, parts.base), parts.base);
            need_plus = true;
        }
        if parts.index != Register::None {
            if need_plus {
                write_add_operator(output, options, false);
            }
            write_scaled_index(output, op, options, &Self::register_text(options, parts.index), &parts);
            need_plus = true;
        }

        let number_options = NumberFormattingOptions::with_displacement(options);
        if let Some(symbol) = &symbol {
            if need_plus {
                write_add_operator(output, options, symbol.flags.contains(SymbolFlags::SIGNED));
            } else if symbol.flags.contains(SymbolFlags::SIGNED) {
                output.write("-", FormatterTextKind::Operator);
            }
            let style = SymbolStyle {
                write_minus_if_signed: false,
                spaces_between_op: options.space_between_memory_add_operators,
                ..SymbolStyle::new(options)
            };
            let address = parts.absolute_address(instruction);
            write_symbol(output, op, &mut state.numbers, &number_options, address, symbol, style);
        } else if !need_plus || (parts.displ_size != 0 && (options.show_zero_displacements || parts.displ != 0)) {
            let sign = if need_plus { DisplacementSign::Operator } else { DisplacementSign::Leading };
            write_displacement(output, op, &mut state.numbers, &number_options, options, &parts, sign);
        }

        if options.space_after_memory_bracket {
            output.write(" ", FormatterTextKind::Text);
        }
        output.write("]", FormatterTextKind::Punctuation);

        if let Some(text) = broadcast_text(info.memory_size()) {
            op.decorator(output, options, &text, DecoratorKind::Broadcast);
        }
    }
}

impl_formatter!(NasmFormatter);

/// NASM size keyword for an operand of `memory_size`.
fn memory_keyword(memory_size: MemorySize) -> Option<&'static str> {
    if memory_size.is_far_pointer() {
        return Some("far");
    }
    let size = match memory_size {
        MemorySize::Fword6 | MemorySize::Fword10 | MemorySize::FpuEnv28 => return None,
        _ if memory_size.is_broadcast() => memory_size.element_size(),
        _ => memory_size.size(),
    };
    Some(match size {
        1 => "byte",
        2 => "word",
        4 => "dword",
        8 => "qword",
        10 => "tword",
        16 => "oword",
        32 => "yword",
        64 => "zword",
        _ => return None,
    })
}

fn write_memory_size(output: &mut dyn FormatterOutput, options: &FormatterOptions, memory_size: MemorySize, info_flags: u32) {
    if !wants_memory_size(options, info_flags, false) {
        return;
    }
    let Some(keyword) = memory_keyword(memory_size) else {
        return;
    };
    match FarMemorySizeInfo::from_flags(info_flags) {
        FarMemorySizeInfo::None => {}
        FarMemorySizeInfo::Word => write_keyword_space(output, options, "word"),
        FarMemorySizeInfo::Dword => write_keyword_space(output, options, "dword"),
    }
    write_keyword_space(output, options, keyword);
}

fn write_branch_size(output: &mut dyn FormatterOutput, options: &FormatterOptions, info_flags: u32) {
    if !options.show_branch_size {
        return;
    }
    let keywords: &[&str] = match BranchSizeInfo::from_flags(info_flags) {
        BranchSizeInfo::None => &[],
        BranchSizeInfo::Near => &["near"],
        BranchSizeInfo::NearWord => &["near", "word"],
        BranchSizeInfo::NearDword => &["near", "dword"],
        BranchSizeInfo::Word => &["word"],
        BranchSizeInfo::Dword => &["dword"],
        BranchSizeInfo::Short => &["short"],
    };
    for keyword in keywords {
        write_keyword(output, options, keyword);
        output.write(" ", FormatterTextKind::Text);
    }
}

fn write_sign_extend_size(output: &mut dyn FormatterOutput, options: &FormatterOptions, info_flags: u32) {
    let keyword = match SignExtendInfo::from_flags(info_flags) {
        SignExtendInfo::None => return,
        SignExtendInfo::Sex1to2 | SignExtendInfo::Sex1to4 | SignExtendInfo::Sex1to8 => "byte",
        SignExtendInfo::Sex2 => "word",
        SignExtendInfo::Sex4 => "dword",
        SignExtendInfo::Sex4to8 => "qword",
    };
    write_keyword_space(output, options, keyword);
}

#[cfg(test)]
mod tests {
    use x86fmt_isa::{Code, CodeSize, MemoryOperand, Operand};

    use super::*;
    use crate::{Formatter, FormatterError, MemorySizeOptions, SymbolMap, SymbolResult};

    fn instr(code: Code, operands: &[Operand]) -> Instruction {
        let mut instruction = Instruction::with_operands(code, operands).unwrap();
        instruction.set_code_size(CodeSize::Code64);
        instruction
    }

    /// Resolves every address to the same symbol.
    struct Fixed(SymbolResult);

    impl SymbolResolver for Fixed {
        fn symbol(
            &mut self,
            _instruction: &Instruction,
            _operand: u32,
            _instruction_operand: Option<u32>,
            _address: u64,
            _address_size: u32,
        ) -> Option<SymbolResult> {
            Some(self.0.clone())
        }
    }

    fn nasm(instruction: &Instruction) -> String {
        NasmFormatter::new().unwrap().format_to_string(instruction)
    }

    #[test]
    fn test_register_and_memory_operands() {
        let load = instr(
            Code::Mov_r32_rm32,
            &[
                Operand::Register(Register::EAX),
                Operand::Memory(MemoryOperand::base(Register::RBX).with_index(Register::RCX, 4).with_displacement(0x10)),
            ],
        );
        assert_eq!(nasm(&load), "mov eax,[rbx+rcx*4+10h]");

        let negative = instr(
            Code::Mov_r64_rm64,
            &[
                Operand::Register(Register::RAX),
                Operand::Memory(MemoryOperand::base(Register::RBP).with_displacement(-8)),
            ],
        );
        assert_eq!(nasm(&negative), "mov rax,[rbp-8]");
    }

    #[test]
    fn test_size_keyword_only_when_ambiguous() {
        let store = instr(
            Code::Mov_rm32_imm32,
            &[Operand::Memory(MemoryOperand::base(Register::RAX)), Operand::Immediate(0x1234)],
        );
        assert_eq!(nasm(&store), "mov dword [rax],1234h");

        let lea = instr(
            Code::Lea_r64_m,
            &[Operand::Register(Register::RAX), Operand::Memory(MemoryOperand::base(Register::RSP))],
        );
        let mut formatter = NasmFormatter::new().unwrap();
        formatter.options_mut().set_memory_size_options(MemorySizeOptions::Always);
        assert_eq!(formatter.format_to_string(&lea), "lea rax,[rsp]");
    }

    #[test]
    fn test_pseudo_op_collapses_immediate() {
        let cmp = instr(
            Code::Cmpps_xmm_xmmm128_imm8,
            &[Operand::Register(Register::XMM1), Operand::Register(Register::XMM2), Operand::Immediate(0)],
        );
        let mut formatter = NasmFormatter::new().unwrap();
        assert_eq!(formatter.format_to_string(&cmp), "cmpeqps xmm1,xmm2");
        assert_eq!(formatter.operand_count(&cmp), 2);
        assert_eq!(formatter.get_formatter_operand(&cmp, 2).unwrap(), None);

        formatter.options_mut().use_pseudo_ops = false;
        assert_eq!(formatter.format_to_string(&cmp), "cmpps xmm1,xmm2,0");
        assert_eq!(formatter.operand_count(&cmp), 3);
    }

    #[test]
    fn test_branch_targets() {
        let jcc = instr(Code::Jae_rel32_64, &[Operand::Branch(0x1000)]);
        let mut formatter = NasmFormatter::new().unwrap();
        assert_eq!(formatter.format_to_string(&jcc), "jae near 0000000000001000h");

        formatter.options_mut().set_cc(crate::CcGroup::Ae, 1).unwrap();
        formatter.options_mut().show_branch_size = false;
        formatter.options_mut().branch_leading_zeros = false;
        assert_eq!(formatter.format_to_string(&jcc), "jnb 1000h");
    }

    #[test]
    fn test_symbols_replace_numbers() {
        let call = instr(Code::Call_rel32_64, &[Operand::Branch(0x401010)]);
        let symbols: SymbolMap = [(0x401010, "memcpy".to_string())].into_iter().collect();
        let mut formatter = NasmFormatter::new().unwrap().with_symbol_resolver(Box::new(symbols));
        assert_eq!(formatter.format_to_string(&call), "call memcpy");

        let mut parts = Vec::new();
        formatter.format(&call, &mut parts);
        assert!(parts.contains(&("memcpy".to_string(), FormatterTextKind::Function)));

        let symbol = SymbolResult::new(0x401000, "table");
        let mut formatter = NasmFormatter::new().unwrap().with_symbol_resolver(Box::new(Fixed(symbol)));
        let load = instr(
            Code::Mov_r32_rm32,
            &[
                Operand::Register(Register::EAX),
                Operand::Memory(MemoryOperand::base(Register::RBX).with_displacement(0x401008)),
            ],
        );
        assert_eq!(formatter.format_to_string(&load), "mov eax,[rbx+table+8]");
    }

    #[test]
    fn test_op_mask_and_broadcast() {
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
        assert_eq!(nasm(&add), "vpaddd zmm1{k1}{z},zmm2,[rax]{1to16}");
    }

    #[test]
    fn test_invalid_operand_index() {
        let nop = instr(Code::Cpuid, &[]);
        let mut formatter = NasmFormatter::new().unwrap();
        let mut out = String::new();
        assert_eq!(
            formatter.format_operand(&nop, &mut out, 0),
            Err(FormatterError::InvalidOperand { operand: 0, count: 0 })
        );
    }

    #[test]
    fn test_monitor_address_size() {
        assert_eq!(nasm(&instr(Code::Monitorq, &[])), "monitor");
        assert_eq!(nasm(&instr(Code::Monitord, &[])), "a32 monitor");
        assert_eq!(nasm(&instr(Code::Mwaitx, &[])), "mwaitx");
    }
}
