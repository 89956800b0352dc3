//! A MASM-like formatter that reads the instruction directly.
//!
//! [`FastFormatter`] has no rule table and few options. Operands are written
//! in instruction order, mnemonics come from [`Code::mnemonic`] and numbers are
//! always hex. The text is meant for reading, not for an assembler.

use std::fmt::Write as _;

use x86fmt_isa::{Code, Instruction, OpKind, Register, RoundingControl};

use crate::helpers::{Immediate, MemoryParts, far_branch, has_notrack_prefix, near_branch};
use crate::intel::memory_keywords;
use crate::op_info::InstrOpKind;
use crate::pseudo_ops::PseudoOpsKind;
use crate::{SymbolFlags, SymbolResolver, SymbolResult};

/// Options of a [`FastFormatter`].
#[derive(Clone, PartialEq, Eq, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct FastFormatterOptions {
    /// `mov eax, ecx` instead of `mov eax,ecx`
    pub space_after_operand_separator: bool,
    /// `[rip+12345678h]` instead of the absolute `[7FF612345678h]`
    pub rip_relative_addresses: bool,
    /// `vcmpnltps` instead of `vcmpps ...,5`
    pub use_pseudo_ops: bool,
    /// `label (401000h)` after symbols
    pub show_symbol_address: bool,
    pub always_show_segment_register: bool,
    pub always_show_memory_size: bool,
    pub uppercase_hex: bool,
    /// `0x1f` instead of `1Fh`
    pub use_hex_prefix: bool,
}

impl Default for FastFormatterOptions {
    fn default() -> Self {
        Self {
            space_after_operand_separator: false,
            rip_relative_addresses: false,
            use_pseudo_ops: true,
            show_symbol_address: false,
            always_show_segment_register: false,
            always_show_memory_size: false,
            uppercase_hex: true,
            use_hex_prefix: false,
        }
    }
}

/// Formats instructions quickly in a MASM-like syntax.
///
/// Every prefix present on the instruction is written, redundant or not.
pub struct FastFormatter {
    options: FastFormatterOptions,
    symbols: Option<Box<dyn SymbolResolver>>,
}

impl std::fmt::Debug for FastFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastFormatter")
            .field("options", &self.options)
            .field("symbols", &self.symbols.is_some())
            .finish()
    }
}

impl Default for FastFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl FastFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(FastFormatterOptions::default())
    }

    #[must_use]
    pub const fn with_options(options: FastFormatterOptions) -> Self {
        Self { options, symbols: None }
    }

    #[must_use]
    pub fn with_symbol_resolver(mut self, resolver: Box<dyn SymbolResolver>) -> Self {
        self.symbols = Some(resolver);
        self
    }

    #[must_use]
    pub const fn options(&self) -> &FastFormatterOptions {
        &self.options
    }

    pub const fn options_mut(&mut self) -> &mut FastFormatterOptions {
        &mut self.options
    }

    #[must_use]
    pub fn format_to_string(&mut self, instruction: &Instruction) -> String {
        let mut output = String::new();
        self.format(instruction, &mut output);
        output
    }

    /// Appends prefixes, mnemonic and operands to `output`.
    pub fn format(&mut self, instruction: &Instruction, output: &mut String) {
        let code = instruction.code();
        let mut op_count = instruction.op_count();

        let pseudo_op = if self.options.use_pseudo_ops
            && op_count > 0
            && instruction.op_kind(op_count - 1) == OpKind::Immediate8
        {
            PseudoOpsKind::from_mnemonic(code.mnemonic()).and_then(|kind| kind.spelling(instruction.immediate8()))
        } else {
            None
        };
        if pseudo_op.is_some() {
            op_count -= 1;
        }

        write_prefixes(instruction, op_count, output);
        match pseudo_op {
            Some((prefix, predicate, suffix)) => {
                output.push_str(prefix);
                output.push_str(predicate);
                output.push_str(suffix);
            }
            None => output.push_str(code.mnemonic()),
        }

        let declare_kind = declare_data_kind(code);
        if declare_kind.is_some() {
            op_count = u32::try_from(instruction.declare_data_len()).unwrap_or(0);
        }
        if op_count == 0 {
            return;
        }
        output.push(' ');
        for operand in 0..op_count {
            if operand > 0 {
                output.push_str(if self.options.space_after_operand_separator { ", " } else { "," });
            }
            let kind = declare_kind.unwrap_or_else(|| instruction.op_kind(operand).into());
            self.write_operand(instruction, output, operand, kind);
            if operand == 0 {
                if instruction.has_op_mask() {
                    output.push('{');
                    output.push_str(register_name(instruction.op_mask()));
                    output.push('}');
                }
                if instruction.zeroing_masking() {
                    output.push_str("{z}");
                }
            }
        }
        if let Some(text) = rounding_text(instruction.rounding_control()) {
            output.push_str(text);
        } else if instruction.suppress_all_exceptions() {
            output.push_str("{sae}");
        }
    }

    fn write_operand(&mut self, instruction: &Instruction, output: &mut String, operand: u32, kind: InstrOpKind) {
        match kind {
            InstrOpKind::Register => output.push_str(register_name(instruction.op_register(operand))),
            InstrOpKind::NearBranch16 | InstrOpKind::NearBranch32 | InstrOpKind::NearBranch64 => {
                if let Some((target, size)) = near_branch(instruction, kind) {
                    self.write_address(instruction, output, operand, target, size);
                }
            }
            InstrOpKind::FarBranch16 | InstrOpKind::FarBranch32 => {
                let Some((offset, size)) = far_branch(instruction, kind) else {
                    return;
                };
                let selector = u64::from(instruction.far_branch_selector());
                match self.symbol(instruction, operand, offset, size) {
                    Some(symbol) => {
                        match self.symbol(instruction, operand + 1, selector, 2) {
                            Some(selector_symbol) => self.write_symbol(output, selector, &selector_symbol, true),
                            None => self.write_number(output, selector),
                        }
                        output.push(':');
                        self.write_symbol(output, offset, &symbol, true);
                    }
                    None => {
                        self.write_number(output, selector);
                        output.push(':');
                        self.write_number(output, offset);
                    }
                }
            }
            _ => {
                if let Some(immediate) = Immediate::of(instruction, kind, operand) {
                    match self.symbol(instruction, operand, immediate.value, immediate.size) {
                        Some(symbol) => {
                            if !symbol.flags.contains(SymbolFlags::RELATIVE) {
                                output.push_str("offset ");
                            }
                            self.write_symbol(output, immediate.value, &symbol, true);
                        }
                        None => self.write_number(output, immediate.value),
                    }
                } else if let Some(parts) = MemoryParts::of(instruction, kind) {
                    self.write_memory(instruction, output, operand, parts);
                }
            }
        }
    }

    fn write_address(&mut self, instruction: &Instruction, output: &mut String, operand: u32, address: u64, size: u32) {
        match self.symbol(instruction, operand, address, size) {
            Some(symbol) => self.write_symbol(output, address, &symbol, true),
            None => self.write_number(output, address),
        }
    }

    #[allow(clippy::cast_sign_loss)]
    fn write_memory(&mut self, instruction: &Instruction, output: &mut String, operand: u32, mut parts: MemoryParts) {
        let absolute = parts.absolute_address(instruction);
        if parts.is_ip_relative() && !self.options.rip_relative_addresses {
            parts.flatten_ip_relative(instruction);
        }
        let symbol = self.symbol(instruction, operand, absolute, parts.addr_size);

        if self.shows_memory_size(instruction) {
            if let Some(keywords) = memory_keywords(instruction.memory_size()) {
                for keyword in keywords {
                    output.push_str(keyword);
                    output.push(' ');
                }
            }
        }

        let segment = instruction.segment_prefix();
        if self.options.always_show_segment_register || (segment != Register::None && !has_notrack_prefix(instruction))
        {
            output.push_str(register_name(parts.segment));
            output.push(':');
        }
        output.push('[');

        let mut need_plus = false;
        if parts.base != Register::None {
            output.push_str(register_name(parts.base));
            need_plus = true;
        }
        if parts.index != Register::None {
            if need_plus {
                output.push('+');
            }
            need_plus = true;
            output.push_str(register_name(parts.index));
            let use_scale = (parts.scale > 1 || parts.base == Register::None) && parts.addr_size != 2;
            if use_scale {
                let _ = write!(output, "*{}", parts.scale.max(1));
            }
        }

        if let Some(symbol) = &symbol {
            let signed = symbol.flags.contains(SymbolFlags::SIGNED);
            if need_plus || signed {
                output.push(if signed { '-' } else { '+' });
            }
            self.write_symbol(output, absolute, symbol, false);
        } else if !need_plus || (parts.displ_size != 0 && parts.displ != 0) {
            let mut displ = parts.displ;
            if need_plus {
                displ = sign_extend(displ, parts.addr_size);
                output.push(if displ < 0 { '-' } else { '+' });
                displ = displ.wrapping_abs();
            }
            self.write_number(output, truncate(displ as u64, parts.addr_size));
        }
        output.push(']');
    }

    /// MASM keyword shown unless a register operand already implies the size.
    fn shows_memory_size(&self, instruction: &Instruction) -> bool {
        if self.options.always_show_memory_size || instruction.is_broadcast() {
            return true;
        }
        let size = instruction.memory_size().size();
        !(0..instruction.op_count())
            .any(|i| instruction.op_kind(i) == OpKind::Register && instruction.op_register(i).size() == size)
    }

    fn symbol(&mut self, instruction: &Instruction, operand: u32, address: u64, size: u32) -> Option<SymbolResult> {
        self.symbols
            .as_mut()?
            .symbol(instruction, operand, Some(operand), address, size)
    }

    #[allow(clippy::cast_possible_wrap)]
    fn write_symbol(&self, output: &mut String, address: u64, symbol: &SymbolResult, write_minus_if_signed: bool) {
        let mut displ = address.wrapping_sub(symbol.address) as i64;
        if symbol.flags.contains(SymbolFlags::SIGNED) {
            if write_minus_if_signed {
                output.push('-');
            }
            displ = displ.wrapping_neg();
        }
        for part in &symbol.parts {
            output.push_str(&part.text);
        }
        if displ != 0 {
            output.push(if displ < 0 { '-' } else { '+' });
            self.write_number(output, displ.unsigned_abs());
        }
        if self.options.show_symbol_address {
            output.push_str(" (");
            self.write_number(output, address);
            output.push(')');
        }
    }

    /// Hex with a `0x` prefix or an `h` suffix; a leading `0` keeps suffixed
    /// numbers from starting with a letter.
    fn write_number(&self, output: &mut String, value: u64) {
        let digits = if self.options.uppercase_hex {
            format!("{value:X}")
        } else {
            format!("{value:x}")
        };
        if self.options.use_hex_prefix {
            output.push_str("0x");
            output.push_str(&digits);
            return;
        }
        if digits.starts_with(|c: char| c.is_ascii_alphabetic()) {
            output.push('0');
        }
        output.push_str(&digits);
        output.push('h');
    }
}

/// Segment override, lock family, `notrack` and the `rep` family, all written
/// even when redundant. A segment override goes before the mnemonic only if
/// no operand can carry it.
fn write_prefixes(instruction: &Instruction, op_count: u32, output: &mut String) {
    let code = instruction.code();
    let segment = instruction.segment_prefix();
    let notrack = has_notrack_prefix(instruction);
    let operand_segment = (0..op_count).any(|i| takes_segment_override(instruction.op_kind(i)));
    if !notrack && segment != Register::None && !operand_segment {
        output.push_str(register_name(segment));
        output.push(' ');
    }

    let xacquire = instruction.has_xacquire_prefix();
    let xrelease = instruction.has_xrelease_prefix();
    if xacquire {
        output.push_str("xacquire ");
    }
    if xrelease {
        output.push_str("xrelease ");
    }
    if instruction.has_lock_prefix() {
        output.push_str("lock ");
    }
    if notrack {
        output.push_str("notrack ");
    }
    if xacquire || xrelease {
        return;
    }
    if instruction.has_repe_prefix() {
        output.push_str(if code.is_repe_or_repne_instruction() { "repe " } else { "rep " });
    }
    if instruction.has_repne_prefix() {
        output.push_str(if is_bnd_branch(code) { "bnd " } else { "repne " });
    }
}

fn register_name(register: Register) -> &'static str {
    const ST: [&str; 8] = ["st(0)", "st(1)", "st(2)", "st(3)", "st(4)", "st(5)", "st(6)", "st(7)"];
    if register.is_st() {
        return usize::try_from(register.number())
            .ok()
            .and_then(|n| ST.get(n))
            .copied()
            .unwrap_or("st");
    }
    register.name()
}

/// `es:[di]` operands ignore segment overrides.
const fn takes_segment_override(kind: OpKind) -> bool {
    matches!(
        kind,
        OpKind::Memory
            | OpKind::MemorySegSI
            | OpKind::MemorySegESI
            | OpKind::MemorySegRSI
            | OpKind::MemorySegDI
            | OpKind::MemorySegEDI
            | OpKind::MemorySegRDI
    )
}

/// Branches whose `repne` prefix is Intel MPX `bnd`.
fn is_bnd_branch(code: Code) -> bool {
    code.is_jcc() || code.is_call_near() || code.can_have_notrack() || matches!(code.mnemonic(), "jmp" | "ret")
}

const fn declare_data_kind(code: Code) -> Option<InstrOpKind> {
    if !code.is_declare_data() {
        return None;
    }
    Some(match code.declare_data_element_size() {
        1 => InstrOpKind::DeclareByte,
        2 => InstrOpKind::DeclareWord,
        4 => InstrOpKind::DeclareDword,
        _ => InstrOpKind::DeclareQword,
    })
}

const fn rounding_text(rc: RoundingControl) -> Option<&'static str> {
    match rc {
        RoundingControl::None => None,
        RoundingControl::RoundToNearest => Some("{rn-sae}"),
        RoundingControl::RoundDown => Some("{rd-sae}"),
        RoundingControl::RoundUp => Some("{ru-sae}"),
        RoundingControl::RoundTowardZero => Some("{rz-sae}"),
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn sign_extend(displ: i64, addr_size: u32) -> i64 {
    match addr_size {
        2 => displ as i16 as i64,
        4 => displ as i32 as i64,
        _ => displ,
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn truncate(value: u64, addr_size: u32) -> u64 {
    match addr_size {
        2 => value as u16 as u64,
        4 => value as u32 as u64,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use x86fmt_isa::{CodeSize, MemoryOperand, Operand};

    use super::*;
    use crate::SymbolMap;

    fn instr(code: Code, code_size: CodeSize, operands: &[Operand]) -> Instruction {
        let mut instruction = Instruction::with_operands(code, operands).unwrap();
        instruction.set_code_size(code_size);
        instruction
    }

    fn fast(instruction: &Instruction) -> String {
        FastFormatter::new().format_to_string(instruction)
    }

    #[test]
    fn test_register_and_memory_operands() {
        let add = instr(
            Code::Add_rm32_r32,
            CodeSize::Code64,
            &[
                Operand::Memory(MemoryOperand::base(Register::RAX).with_index(Register::RCX, 4).with_displacement(-8)),
                Operand::Register(Register::EDX),
            ],
        );
        assert_eq!(fast(&add), "add [rax+rcx*4-8h],edx");

        let store = instr(
            Code::Mov_rm32_imm32,
            CodeSize::Code64,
            &[Operand::Memory(MemoryOperand::base(Register::RAX)), Operand::Immediate(0xA5)],
        );
        assert_eq!(fast(&store), "mov dword ptr [rax],0A5h");
    }

    #[test]
    fn test_number_options() {
        let store = instr(
            Code::Mov_rm32_imm32,
            CodeSize::Code64,
            &[Operand::Register(Register::EAX), Operand::Immediate(0xA5)],
        );
        let mut formatter = FastFormatter::new();
        formatter.options_mut().uppercase_hex = false;
        assert_eq!(formatter.format_to_string(&store), "mov eax,0a5h");
        formatter.options_mut().use_hex_prefix = true;
        formatter.options_mut().space_after_operand_separator = true;
        assert_eq!(formatter.format_to_string(&store), "mov eax, 0xa5");
    }

    #[test]
    fn test_pseudo_ops_and_decorators() {
        let mut cmp = instr(
            Code::EVEX_Vcmpps_kr_k1_zmm_zmmm512b32_imm8_sae,
            CodeSize::Code64,
            &[
                Operand::Register(Register::K1),
                Operand::Register(Register::ZMM1),
                Operand::Register(Register::ZMM2),
                Operand::Immediate(1),
            ],
        );
        cmp.set_suppress_all_exceptions(true);
        let mut formatter = FastFormatter::new();
        assert_eq!(formatter.format_to_string(&cmp), "vcmpltps k1,zmm1,zmm2{sae}");
        formatter.options_mut().use_pseudo_ops = false;
        assert_eq!(formatter.format_to_string(&cmp), "vcmpps k1,zmm1,zmm2,1h{sae}");
    }

    #[test]
    fn test_prefixes() {
        let mut stos = instr(
            Code::Stosb_m8_AL,
            CodeSize::Code64,
            &[Operand::Memory(MemoryOperand::base(Register::RDI)), Operand::Register(Register::AL)],
        );
        stos.set_rep_prefix(true);
        assert_eq!(fast(&stos), "rep stosb [rdi],al");

        let mut jmp = instr(Code::Jmp_rel32_64, CodeSize::Code64, &[Operand::Branch(0x1000)]);
        jmp.set_repne_prefix(true);
        assert_eq!(fast(&jmp), "bnd jmp 1000h");
    }

    #[test]
    fn test_branch_symbols() {
        let call = instr(Code::Call_rel32_64, CodeSize::Code64, &[Operand::Branch(0x40_1008)]);
        let symbols: SymbolMap = [(0x40_1008, "main".to_string())].into_iter().collect();
        let mut formatter = FastFormatter::new().with_symbol_resolver(Box::new(symbols));
        assert_eq!(formatter.format_to_string(&call), "call main");
        formatter.options_mut().show_symbol_address = true;
        assert_eq!(formatter.format_to_string(&call), "call main (401008h)");
    }

    #[test]
    fn test_declare_data() {
        let data = Instruction::with_declare_data(Code::DeclareByte, &[0x01, 0xFF]).unwrap();
        assert_eq!(fast(&data), "db 1h,0FFh");
    }
}
