//! MASM syntax: `mov dword ptr [rax+10h],1`.

use std::borrow::Cow;
use std::sync::Arc;

use x86fmt_isa::{CodeSize, Instruction, MemorySize, Register};

use super::MasmRuleTable;
use crate::formatter::{FormatterState, impl_formatter};
use crate::helpers::{
    DisplacementSign, Immediate, MemoryParts, MnemonicLine, OperandRef, PrefixStrings, SymbolStyle, cased,
    far_branch, near_branch, rounding_decorator, show_memory_segment, show_mnemonic_segment_prefix,
    wants_memory_size, write_add_operator, write_branch_target, write_displacement, write_keyword_space,
    write_op_mask, write_scaled_index, write_selector, write_symbol,
};
use crate::op_info::{BranchSizeInfo, InstrOpKind, OperandInfo, flags};
use crate::rules::{can_show_rounding_control, rounding_control_kind};
use crate::{
    FormatMnemonicOptions, FormatterOptions, FormatterOutput, FormatterTextKind, MemorySizeOptions, NumberFormatter,
    NumberFormattingOptions, SymbolFlags, SymbolResolver, SymbolResult, TableError,
};

/// Formats instructions in MASM syntax.
///
/// MASM has no operand or address size prefixes and no `{1toN}` decorator;
/// broadcasts show up as a `bcst` size keyword instead. `{sae}` and rounding
/// decorators follow the last register or memory operand.
#[derive(Debug)]
pub struct MasmFormatter {
    table: Arc<MasmRuleTable>,
    state: FormatterState,
}

impl MasmFormatter {
    /// A formatter with [`FormatterOptions::with_masm`] and the built-in table.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the built-in table is malformed.
    pub fn new() -> Result<Self, TableError> {
        Ok(Self::with_table(MasmRuleTable::shared()?, FormatterOptions::with_masm()))
    }

    #[must_use]
    pub fn with_table(table: Arc<MasmRuleTable>, options: FormatterOptions) -> Self {
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
        if register == Register::ST0 && !options.prefer_st0 {
            return cased("st", upper);
        }
        if register.is_st() {
            let text = format!("st({})", register.number());
            return if upper { Cow::Owned(text.to_ascii_uppercase()) } else { Cow::Owned(text) };
        }
        cased(register.name(), upper)
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
            let strings = PrefixStrings {
                op_size: "",
                addr_size: "",
                show_segment: show_mnemonic_segment_prefix(instruction, info, options),
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
            InstrOpKind::Register if info.is_stack_top(operand) => {
                let upper = state.options.uppercase_registers || state.options.uppercase_all;
                op.register(output, &cased("st", upper), Register::ST0);
            }
            InstrOpKind::Register => {
                let register = info.op_register(operand);
                op.register(output, &Self::register_text(&state.options, register), register);
            }
            InstrOpKind::NearBranch16 | InstrOpKind::NearBranch32 | InstrOpKind::NearBranch64 => {
                let Some((target, size)) = near_branch(instruction, kind) else {
                    return;
                };
                let symbol = state.symbol(op, target, size);
                let options = &state.options;
                if options.show_branch_size {
                    write_near_branch_keywords(output, options, instruction, info.flags());
                }
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
                if options.show_branch_size {
                    write_keyword_space(output, options, "far");
                    write_keyword_space(output, options, "ptr");
                }
                let number_options = NumberFormattingOptions::with_branch(options);
                let style = SymbolStyle::new(options);
                match &selector_symbol {
                    Some(sym) => write_symbol(output, op, &mut state.numbers, &number_options, selector, sym, style),
                    None => write_selector(output, op, &mut state.numbers, &number_options),
                }
                output.write(":", FormatterTextKind::Punctuation);
                match &symbol {
                    Some(sym) => write_symbol(output, op, &mut state.numbers, &number_options, offset, sym, style),
                    None => write_branch_target(output, op, &mut state.numbers, &number_options, offset, size),
                }
            }
            _ => {
                if let Some((text, decorator)) = rounding_decorator(kind) {
                    op.decorator(output, &state.options, text, decorator);
                } else if let Some(immediate) = Immediate::of(instruction, kind, operand) {
                    let symbol = state.symbol(op, immediate.value, immediate.size);
                    let options = &state.options;
                    let number_options = NumberFormattingOptions::with_immediate(options);
                    match symbol {
                        Some(symbol) => {
                            if !symbol.flags.contains(SymbolFlags::RELATIVE) {
                                write_keyword_space(output, options, "offset");
                            }
                            write_symbol(
                                output,
                                op,
                                &mut state.numbers,
                                &number_options,
                                immediate.value,
                                &symbol,
                                SymbolStyle::new(options),
                            );
                        }
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
        if let Some((host, kind)) = rounding_suffix(instruction, info, &state.options) {
            if host == operand {
                if let Some((text, decorator)) = rounding_decorator(kind) {
                    op.decorator(output, &state.options, text, decorator);
                }
            }
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
        let address = parts.absolute_address(instruction);
        let symbol = state.symbol(op, address, parts.addr_size);
        let options = &state.options;
        let show_segment_override = show_memory_segment(instruction, parts.base, options);
        if !options.rip_relative_addresses {
            parts.flatten_ip_relative(instruction);
        }

        let is1632 = matches!(instruction.code_size(), CodeSize::Code16 | CodeSize::Code32);
        let has_register = parts.has_register();
        let bare_number = !has_register && symbol.is_none();
        let mut displ_in_brackets = if symbol.is_some() {
            options.masm_symbol_displ_in_brackets
        } else {
            options.masm_displ_in_brackets
        };
        if bare_number
            && (!is1632 || (!options.masm_add_ds_prefix32 && instruction.segment_prefix() == Register::None))
        {
            displ_in_brackets = true;
        }
        let need_brackets = has_register || displ_in_brackets;

        write_memory_size(output, options, instruction.memory_size(), info.flags(), symbol.as_ref());

        if show_segment_override || (is1632 && bare_number && options.masm_add_ds_prefix32) {
            op.register(output, &Self::register_text(options, parts.segment), parts.segment);
            output.write(":", FormatterTextKind::Punctuation);
        }

        let number_options = NumberFormattingOptions::with_displacement(options);
        let mut term = DisplacementTerm {
            numbers: &mut state.numbers,
            options,
            number_options: &number_options,
            symbol: symbol.as_ref(),
            address,
            parts: &parts,
        };
        if !displ_in_brackets {
            term.write(output, op, false, !has_register);
        }
        if need_brackets {
            output.write("[", FormatterTextKind::Punctuation);
            if options.space_after_memory_bracket {
                output.write(" ", FormatterTextKind::Text);
            }
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

        if displ_in_brackets {
            term.write(output, op, need_plus, !need_plus);
        }
        if need_brackets {
            if options.space_after_memory_bracket {
                output.write(" ", FormatterTextKind::Text);
            }
            output.write("]", FormatterTextKind::Punctuation);
        }
    }
}

impl_formatter!(MasmFormatter);

/// Rounding or `{sae}` decorator and the operand it is written after.
fn rounding_suffix(
    instruction: &Instruction,
    info: &OperandInfo<'_>,
    options: &FormatterOptions,
) -> Option<(u32, InstrOpKind)> {
    let rounding = if can_show_rounding_control(instruction, options) {
        rounding_control_kind(instruction.rounding_control())
    } else {
        None
    };
    let kind = rounding.or_else(|| instruction.suppress_all_exceptions().then_some(InstrOpKind::Sae))?;
    let host = (0..info.op_count())
        .rev()
        .find(|&operand| Immediate::of(instruction, info.op_kind(operand), operand).is_none())?;
    Some((host, kind))
}

/// The symbol or displacement part of a memory operand, which MASM writes
/// either inside the brackets or in front of them.
struct DisplacementTerm<'a, 'o> {
    numbers: &'a mut NumberFormatter,
    options: &'o FormatterOptions,
    number_options: &'a NumberFormattingOptions<'o>,
    symbol: Option<&'a SymbolResult>,
    address: u64,
    parts: &'a MemoryParts,
}

impl DisplacementTerm<'_, '_> {
    fn write(&mut self, output: &mut dyn FormatterOutput, op: OperandRef<'_>, need_plus: bool, force: bool) {
        let options = self.options;
        if let Some(symbol) = self.symbol {
            let signed = symbol.flags.contains(SymbolFlags::SIGNED);
            if need_plus {
                write_add_operator(output, options, signed);
            } else if signed {
                output.write("-", FormatterTextKind::Operator);
            }
            let style = SymbolStyle {
                write_minus_if_signed: false,
                spaces_between_op: options.space_between_memory_add_operators,
                ..SymbolStyle::new(options)
            };
            write_symbol(output, op, self.numbers, self.number_options, self.address, symbol, style);
            return;
        }
        let parts = self.parts;
        if force || (parts.displ_size != 0 && (options.show_zero_displacements || parts.displ != 0)) {
            let sign = if need_plus { DisplacementSign::Operator } else { DisplacementSign::Leading };
            write_displacement(output, op, self.numbers, self.number_options, options, parts, sign);
        }
    }
}

/// MASM size keywords for an operand of `memory_size`.
pub(crate) fn memory_keywords(memory_size: MemorySize) -> Option<&'static [&'static str]> {
    let keywords: &'static [&'static str] = if memory_size.is_broadcast() {
        match memory_size.element_size() {
            4 => &["dword", "bcst"],
            8 => &["qword", "bcst"],
            _ => return None,
        }
    } else {
        match memory_size {
            MemorySize::Unknown | MemorySize::FpuEnv28 => return None,
            MemorySize::SegPtr16 => &["dword", "ptr"],
            MemorySize::Fword6 | MemorySize::SegPtr32 => &["fword", "ptr"],
            MemorySize::Float80 | MemorySize::Fword10 | MemorySize::SegPtr64 => &["tbyte", "ptr"],
            MemorySize::Packed64_UInt8 => &["mmword", "ptr"],
            MemorySize::UInt128 => &["oword", "ptr"],
            _ => match memory_size.size() {
                1 => &["byte", "ptr"],
                2 => &["word", "ptr"],
                4 => &["dword", "ptr"],
                8 => &["qword", "ptr"],
                16 => &["xmmword", "ptr"],
                32 => &["ymmword", "ptr"],
                64 => &["zmmword", "ptr"],
                _ => return None,
            },
        }
    };
    Some(keywords)
}

fn write_memory_size(
    output: &mut dyn FormatterOutput,
    options: &FormatterOptions,
    memory_size: MemorySize,
    info_flags: u32,
    symbol: Option<&SymbolResult>,
) {
    let mode = options.memory_size_options();
    if mode == MemorySizeOptions::Never || info_flags & flags::MEM_SIZE_NOTHING != 0 {
        return;
    }
    let Some(keywords) = memory_keywords(memory_size) else {
        return;
    };
    let broadcast = memory_size.is_broadcast();
    let symbol_size = symbol.and_then(|s| s.symbol_size);
    if mode != MemorySizeOptions::Always {
        // A symbol that already carries the same size makes the keyword redundant
        if let Some(size) = symbol_size {
            if !broadcast && memory_keywords(size) == Some(keywords) {
                return;
            }
        }
        let sized_symbol = mode == MemorySizeOptions::Default && symbol_size.is_some();
        if !sized_symbol && !wants_memory_size(options, info_flags, broadcast) {
            return;
        }
    }
    for keyword in keywords {
        write_keyword_space(output, options, keyword);
    }
}

fn write_near_branch_keywords(
    output: &mut dyn FormatterOutput,
    options: &FormatterOptions,
    instruction: &Instruction,
    info_flags: u32,
) {
    let code = instruction.code();
    if code.is_short_only_branch() {
        return;
    }
    if BranchSizeInfo::from_flags(info_flags) == BranchSizeInfo::Short {
        write_keyword_space(output, options, "short");
    } else if !code.is_call_near() {
        write_keyword_space(output, options, "near");
        write_keyword_space(output, options, "ptr");
    }
}

#[cfg(test)]
mod tests {
    use x86fmt_isa::{Code, MemoryOperand, Operand};

    use super::*;
    use crate::{Formatter, SymbolMap};

    fn instr(code: Code, code_size: CodeSize, operands: &[Operand]) -> Instruction {
        let mut instruction = Instruction::with_operands(code, operands).unwrap();
        instruction.set_code_size(code_size);
        instruction
    }

    fn masm(instruction: &Instruction) -> String {
        MasmFormatter::new().unwrap().format_to_string(instruction)
    }

    #[test]
    fn test_ptr_keywords() {
        let store = instr(
            Code::Mov_rm32_imm32,
            CodeSize::Code64,
            &[
                Operand::Memory(MemoryOperand::base(Register::RAX).with_displacement(0x10)),
                Operand::Immediate(0x1234),
            ],
        );
        assert_eq!(masm(&store), "mov dword ptr [rax+10h],1234h");

        let load = instr(
            Code::Movaps_xmm_xmmm128,
            CodeSize::Code64,
            &[Operand::Register(Register::XMM0), Operand::Memory(MemoryOperand::base(Register::RCX))],
        );
        let mut formatter = MasmFormatter::new().unwrap();
        formatter.options_mut().set_memory_size_options(MemorySizeOptions::Always);
        assert_eq!(formatter.format_to_string(&load), "movaps xmm0,xmmword ptr [rcx]");
    }

    #[test]
    fn test_broadcast_keyword() {
        let mut add = instr(
            Code::EVEX_Vpaddd_zmm_k1z_zmm_zmmm512b32,
            CodeSize::Code64,
            &[
                Operand::Register(Register::ZMM1),
                Operand::Register(Register::ZMM2),
                Operand::Memory(MemoryOperand::base(Register::RAX)),
            ],
        );
        add.set_broadcast(true).unwrap();
        assert_eq!(masm(&add), "vpaddd zmm1,zmm2,dword bcst [rax]");
    }

    #[test]
    fn test_absolute_address_in_32bit_code_gets_ds() {
        let load = instr(
            Code::Mov_r32_rm32,
            CodeSize::Code32,
            &[Operand::Register(Register::EAX), Operand::Memory(MemoryOperand::absolute(0x1234_5678, 4))],
        );
        let mut formatter = MasmFormatter::new().unwrap();
        assert_eq!(formatter.format_to_string(&load), "mov eax,ds:[12345678h]");

        formatter.options_mut().masm_add_ds_prefix32 = false;
        assert_eq!(formatter.format_to_string(&load), "mov eax,[12345678h]");
    }

    #[test]
    fn test_branch_keywords() {
        let mut formatter = MasmFormatter::new().unwrap();
        formatter.options_mut().branch_leading_zeros = false;
        let jmp = instr(Code::Jmp_rel32_64, CodeSize::Code64, &[Operand::Branch(0x1000)]);
        assert_eq!(formatter.format_to_string(&jmp), "jmp near ptr 1000h");
        let call = instr(Code::Call_rel32_64, CodeSize::Code64, &[Operand::Branch(0x1000)]);
        assert_eq!(formatter.format_to_string(&call), "call 1000h");
        let lp = instr(Code::Loop_rel8_64_RCX, CodeSize::Code64, &[Operand::Branch(0x1000)]);
        assert_eq!(formatter.format_to_string(&lp), "loop 1000h");
    }

    #[test]
    fn test_offset_before_immediate_symbol() {
        let mov = instr(
            Code::Mov_r32_imm32,
            CodeSize::Code64,
            &[Operand::Register(Register::EAX), Operand::Immediate(0x40_2000)],
        );
        let symbols: SymbolMap = [(0x40_2000, "message".to_string())].into_iter().collect();
        let mut formatter = MasmFormatter::new().unwrap().with_symbol_resolver(Box::new(symbols));
        assert_eq!(formatter.format_to_string(&mov), "mov eax,offset message");
    }

    #[test]
    fn test_fpu_stack_registers() {
        let options = FormatterOptions::with_masm();
        assert_eq!(MasmFormatter::register_text(&options, Register::ST0), "st");
        assert_eq!(MasmFormatter::register_text(&options, Register::ST3), "st(3)");
        let mut st0 = FormatterOptions::with_masm();
        st0.prefer_st0 = true;
        assert_eq!(MasmFormatter::register_text(&st0, Register::ST0), "st(0)");
    }

    #[test]
    fn test_string_operands_follow_address_size() {
        let stos = |base| {
            instr(
                Code::Stosb_m8_AL,
                CodeSize::Code64,
                &[Operand::Memory(MemoryOperand::base(base)), Operand::Register(Register::AL)],
            )
        };
        assert_eq!(masm(&stos(Register::RDI)), "stosb");
        assert_eq!(masm(&stos(Register::EDI)), "stos byte ptr [edi]");

        let lods = instr(
            Code::Lodsb_AL_m8,
            CodeSize::Code64,
            &[Operand::Register(Register::AL), Operand::Memory(MemoryOperand::base(Register::ESI))],
        );
        assert_eq!(masm(&lods), "lods byte ptr [esi]");
    }

    #[test]
    fn test_implicit_operands() {
        assert_eq!(masm(&instr(Code::Int3, CodeSize::Code64, &[])), "int 3");
        assert_eq!(masm(&instr(Code::Monitorq, CodeSize::Code64, &[])), "monitor rax,rcx,rdx");
        assert_eq!(masm(&instr(Code::Mwaitx, CodeSize::Code32, &[])), "mwaitx eax,ecx,ebx");

        let fadd = instr(
            Code::Fadd_st0_sti,
            CodeSize::Code64,
            &[Operand::Register(Register::ST0), Operand::Register(Register::ST1)],
        );
        let mut formatter = MasmFormatter::new().unwrap();
        assert_eq!(formatter.format_to_string(&fadd), "fadd st,st(1)");
        formatter.options_mut().prefer_st0 = true;
        assert_eq!(formatter.format_to_string(&fadd), "fadd st,st(1)");
    }

    #[test]
    fn test_rounding_decorator_follows_last_register() {
        let mut cmp = instr(
            Code::EVEX_Vcmpps_kr_k1_zmm_zmmm512b32_imm8_sae,
            CodeSize::Code64,
            &[
                Operand::Register(Register::K1),
                Operand::Register(Register::ZMM1),
                Operand::Register(Register::ZMM2),
                Operand::Immediate(0),
            ],
        );
        cmp.set_suppress_all_exceptions(true);
        let mut formatter = MasmFormatter::new().unwrap();
        formatter.options_mut().use_pseudo_ops = true;
        assert_eq!(formatter.format_to_string(&cmp), "vcmpeqps k1,zmm1,zmm2{sae}");
        assert_eq!(formatter.operand_count(&cmp), 3);

        let mut add = instr(
            Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er,
            CodeSize::Code64,
            &[
                Operand::Register(Register::ZMM1),
                Operand::Register(Register::ZMM2),
                Operand::Register(Register::ZMM3),
            ],
        );
        add.set_rounding_control(x86fmt_isa::RoundingControl::RoundUp);
        assert_eq!(masm(&add), "vaddps zmm1,zmm2,zmm3{ru-sae}");
    }
}
