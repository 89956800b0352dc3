//! Rule helpers shared by the NASM, MASM and GAS tables.

use x86fmt_isa::{Instruction, OpKind, Register, RoundingControl};

use crate::FormatterOptions;
use crate::op_info::{InstrOpKind, OP_ACCESS_READ, OperandInfo, flags, op_size_flag};

pub(crate) fn cc_mnemonic<'a>(options: &FormatterOptions, cc: u32, mnemonics: &'a [String]) -> &'a str {
    let index = options.cc_by_index(cc);
    mnemonics
        .get(index)
        .or_else(|| mnemonics.first())
        .map_or("", String::as_str)
}

/// Address size flags of an implicit string operand.
pub(crate) const fn string_addr_flags(kind: OpKind) -> u32 {
    match kind.string_address_size() {
        16 => flags::ADDR_SIZE16,
        32 => flags::ADDR_SIZE32,
        64 => flags::ADDR_SIZE64,
        _ => 0,
    }
}

/// Operand size flag when an explicit code size disagrees with the form's.
pub(crate) const fn mismatch_op_size(instr_bitness: u32, bitness: u32) -> u32 {
    if instr_bitness != 0 && instr_bitness != bitness {
        op_size_flag(bitness)
    } else {
        0
    }
}

pub(crate) fn has_memory_op01(instruction: &Instruction) -> bool {
    OperandInfo::has_memory_operand(instruction, 2)
}

/// Whether a memory operand in a form of width `bitness` needs an explicit
/// operand size.
pub(crate) const fn mem_needs_op_size(instr_bitness: u32, bitness: u32) -> bool {
    !(instr_bitness == 0
        || (instr_bitness != 64 && instr_bitness == bitness)
        || (instr_bitness == 64 && bitness == 32))
}

pub(crate) fn can_show_rounding_control(instruction: &Instruction, options: &FormatterOptions) -> bool {
    !instruction.code().ignores_rounding_control() || options.show_useless_prefixes
}

pub(crate) const fn rounding_control_kind(rc: RoundingControl) -> Option<InstrOpKind> {
    match rc {
        RoundingControl::None => None,
        RoundingControl::RoundToNearest => Some(InstrOpKind::RnSae),
        RoundingControl::RoundDown => Some(InstrOpKind::RdSae),
        RoundingControl::RoundUp => Some(InstrOpKind::RuSae),
        RoundingControl::RoundTowardZero => Some(InstrOpKind::RzSae),
    }
}

/// Declare data: every element is an operand read by the directive.
pub(crate) fn declare_data_info<'a>(mnemonic: &'a str, instruction: &Instruction, flags: u32) -> OperandInfo<'a> {
    let kind = match instruction.code().declare_data_element_size() {
        1 => InstrOpKind::DeclareByte,
        2 => InstrOpKind::DeclareWord,
        4 => InstrOpKind::DeclareDword,
        _ => InstrOpKind::DeclareQword,
    };
    let mut info = OperandInfo::empty(mnemonic, flags | flags::MNEMONIC_IS_DIRECTIVE);
    info.op_count = u8::try_from(instruction.declare_data_len()).unwrap_or(0);
    for slot in 0..info.kinds.len() {
        info.set(slot, kind, Register::None, OP_ACCESS_READ);
    }
    info
}

/// Branch hint and `bnd` flags of a conditional jump.
pub(crate) fn branch_hint_flags(instruction: &Instruction) -> u32 {
    let mut flags = match instruction.segment_prefix() {
        Register::CS => flags::JCC_NOT_TAKEN,
        Register::DS => flags::JCC_TAKEN,
        _ => 0,
    };
    if instruction.has_repne_prefix() {
        flags |= flags::BND_PREFIX;
    }
    flags
}

#[cfg(test)]
mod tests {
    use x86fmt_isa::{Code, Operand};

    use super::*;

    #[test]
    fn test_operand_size_rules() {
        assert_eq!(mismatch_op_size(0, 16), 0);
        assert_eq!(mismatch_op_size(64, 64), 0);
        assert_eq!(mismatch_op_size(64, 16), flags::OP_SIZE16);
        assert!(!mem_needs_op_size(0, 16));
        assert!(!mem_needs_op_size(32, 32));
        assert!(!mem_needs_op_size(64, 32));
        assert!(mem_needs_op_size(64, 64));
        assert!(mem_needs_op_size(16, 32));
    }

    #[test]
    fn test_branch_hints() {
        let mut instr = Instruction::with_operands(Code::Je_rel8_64, &[Operand::Branch(0x10)]).unwrap();
        assert_eq!(branch_hint_flags(&instr), 0);
        instr.set_segment_prefix(Register::DS).unwrap();
        instr.set_repne_prefix(true);
        assert_eq!(branch_hint_flags(&instr), flags::JCC_TAKEN | flags::BND_PREFIX);
        instr.set_segment_prefix(Register::CS).unwrap();
        assert_eq!(branch_hint_flags(&instr) & flags::JCC_NOT_TAKEN, flags::JCC_NOT_TAKEN);
    }

    #[test]
    fn test_declare_data_operands() {
        let instr = Instruction::with_declare_data(Code::DeclareWord, &[1, 0, 2, 0, 3, 0]).unwrap();
        let info = declare_data_info("dw", &instr, 0);
        assert_eq!(info.op_count(), 3);
        assert_eq!(info.op_kind(2), InstrOpKind::DeclareWord);
        assert_eq!(info.flags() & flags::MNEMONIC_IS_DIRECTIVE, flags::MNEMONIC_IS_DIRECTIVE);
    }
}
