//! NASM rules. MASM has its own table in `masm_rules`.

use std::sync::Arc;

use x86fmt_isa::{CodeSize, Instruction, OpKind, Register};

use crate::FormatterOptions;
use crate::op_info::{
    BranchSizeInfo, FarMemorySizeInfo, InstrOpKind, MemorySizeInfo, OP_ACCESS_NONE, OP_ACCESS_READ,
    OP_ACCESS_READ_WRITE, OP_INVALID, OperandInfo, SignExtendInfo, addr_size_flag, flags, op_size_flag,
};
use crate::pseudo_ops::pclmulqdq_index;
use crate::rules::{
    branch_hint_flags, can_show_rounding_control, cc_mnemonic, declare_data_info, has_memory_op01,
    mem_needs_op_size, mismatch_op_size, rounding_control_kind, string_addr_flags,
};

/// How one opcode form is turned into an [`OperandInfo`] for Intel operand
/// order.
#[derive(Debug)]
pub(crate) enum IntelRule {
    Normal { mnemonic: String, flags: u32 },
    /// `aam`/`aad`; the default base 10 is not shown.
    AamAad { mnemonic: String },
    /// Address size prefix when the code size differs.
    AddrSize { mnemonic: String, bitness: u32 },
    /// String instructions; operands are implicit.
    String { mnemonic: String },
    Bcst { mnemonic: String, flags: u32 },
    Bnd { mnemonic: String, flags: u32 },
    DeclareData { mnemonic: String },
    /// Rounding control decorator inserted at `index`.
    Er { mnemonic: String, index: usize, flags: u32 },
    Far { mnemonic: String, bitness: u32 },
    FarMem { mnemonic: String, bitness: u32 },
    Invlpga { mnemonic: String, bitness: u32 },
    Maskmovq { mnemonic: String },
    Movabs { mnemonic: String, mem_op: u32 },
    /// `nop` forms that are really `xchg` in other code sizes.
    Nop { mnemonic: String, bitness: u32, register: Register },
    /// `mnemonics[0]` when the code size matches, else the sized spelling
    /// indexed by code size.
    OpSize { code_size: CodeSize, mnemonics: [String; 4] },
    OpSize2Bnd { mnemonics: [String; 4] },
    OpSize3 { bitness: u32, mnemonic: String, full: String },
    Os { mnemonic: String, bitness: u32, flags: u32 },
    OsCall { mnemonic: String, bitness: u32, can_bnd: bool },
    Cc { cc: u32, mnemonics: Vec<String> },
    OsJcc { cc: u32, mnemonics: Vec<String>, bitness: u32, flags: u32 },
    /// `cc` is `None` for plain `loop`/`jcxz`.
    OsLoop { cc: Option<u32>, mnemonics: Vec<String>, bitness: u32, register: Register },
    OsMem { mnemonic: String, bitness: u32 },
    OsMemReg16 { mnemonic: String, bitness: u32 },
    OsMem2 { mnemonic: String, bitness: u32, flags: u32 },
    Pblendvb { mnemonic: String },
    Pclmulqdq { mnemonic: String, pseudo_ops: Arc<[String]> },
    Pops { mnemonic: String, pseudo_ops: Arc<[String]> },
    Reg16 { mnemonic: String },
    Reg32 { mnemonic: String },
    Reverse { mnemonic: String },
    Sae { mnemonic: String, index: usize },
    PushImm8 { mnemonic: String, bitness: u32, sign_extend: SignExtendInfo },
    PushImm { mnemonic: String, bitness: u32, sign_extend: SignExtendInfo },
    SignExt { mnemonic: String, reg: SignExtendInfo, mem: SignExtendInfo, flags: u32 },
    Imul { mnemonic: String, sign_extend: SignExtendInfo },
    /// `fxxx st(i)` that drops `st(1)` when pseudo ops are on.
    Stig1 { mnemonic: String, pseudo_op: bool },
    Stig2 { mnemonic: String, pseudo_op: bool, flags: u32 },
    Xlat { mnemonic: String },
}

fn mnemonic_by_code_size(mnemonics: &[String; 4], code_size: CodeSize) -> &str {
    &mnemonics[code_size as usize]
}

impl IntelRule {
    #[allow(clippy::too_many_lines)]
    pub(crate) fn op_info<'a>(&'a self, options: &FormatterOptions, instruction: &Instruction) -> OperandInfo<'a> {
        let instr_bitness = instruction.code_size().bitness();
        match self {
            Self::Normal { mnemonic, flags } => OperandInfo::new(mnemonic, instruction, *flags),

            Self::AamAad { mnemonic } => {
                if instruction.immediate8() == 10 {
                    OperandInfo::empty(mnemonic, flags::NONE)
                } else {
                    OperandInfo::new(mnemonic, instruction, flags::NONE)
                }
            }

            Self::AddrSize { mnemonic, bitness } => {
                let flags = if instr_bitness != 0 && instr_bitness != *bitness {
                    addr_size_flag(*bitness)
                } else {
                    0
                };
                OperandInfo::new(mnemonic, instruction, flags)
            }

            Self::String { mnemonic } => {
                let kind = if instruction.op_kind(0) == OpKind::Register {
                    instruction.op_kind(1)
                } else {
                    instruction.op_kind(0)
                };
                let kind_flags = string_addr_flags(kind);
                let instr_flags = match instruction.code_size() {
                    CodeSize::Unknown => kind_flags,
                    size => addr_size_flag(size.bitness()),
                };
                let flags = if kind_flags == instr_flags { 0 } else { kind_flags };
                OperandInfo::empty(mnemonic, flags)
            }

            Self::Bcst { mnemonic, flags } => {
                let flags = if instruction.memory_size().is_broadcast() { 0 } else { *flags };
                OperandInfo::new(mnemonic, instruction, flags)
            }

            Self::Bnd { mnemonic, flags } => {
                let bnd = if instruction.has_repne_prefix() { flags::BND_PREFIX } else { 0 };
                OperandInfo::new(mnemonic, instruction, *flags | bnd)
            }

            Self::DeclareData { mnemonic } => declare_data_info(mnemonic, instruction, flags::NONE),

            Self::Er { mnemonic, index, flags } => {
                let mut info = OperandInfo::new(mnemonic, instruction, *flags);
                if can_show_rounding_control(instruction, options) {
                    if let Some(kind) = rounding_control_kind(instruction.rounding_control()) {
                        info.insert(*index, kind);
                    }
                }
                info
            }

            Self::Far { mnemonic, bitness } => {
                let mut flags = 0;
                if instr_bitness != 0 && instr_bitness != *bitness {
                    let info = if *bitness == 16 { BranchSizeInfo::Word } else { BranchSizeInfo::Dword };
                    flags |= info.flags();
                }
                OperandInfo::new(mnemonic, instruction, flags)
            }

            Self::FarMem { mnemonic, bitness } => {
                let mut flags = flags::SHOW_NO_MEM_SIZE_FORCE_SIZE;
                if instr_bitness != 0 && instr_bitness != *bitness {
                    let info = if *bitness == 16 { FarMemorySizeInfo::Word } else { FarMemorySizeInfo::Dword };
                    flags |= info.flags();
                }
                OperandInfo::new(mnemonic, instruction, flags)
            }

            Self::Invlpga { mnemonic, bitness } => {
                let mut info = OperandInfo::empty(mnemonic, flags::NONE);
                info.op_count = 2;
                let ax = match bitness {
                    16 => Register::AX,
                    32 => Register::EAX,
                    _ => Register::RAX,
                };
                info.set(0, InstrOpKind::Register, ax, OP_ACCESS_READ);
                info.set(1, InstrOpKind::Register, Register::ECX, OP_ACCESS_READ);
                info
            }

            Self::Maskmovq { mnemonic } => {
                let bitness = match instruction.op_kind(0) {
                    OpKind::MemorySegDI => 16,
                    OpKind::MemorySegEDI => 32,
                    OpKind::MemorySegRDI => 64,
                    _ => instr_bitness,
                };
                let mut flags = 0;
                if instr_bitness != 0 && instr_bitness != bitness {
                    flags |= addr_size_flag(bitness);
                }
                let full = OperandInfo::new(mnemonic, instruction, flags);
                let mut info = full;
                info.op_count = 2;
                info.copy_from(0, &full, 1);
                info.copy_from(1, &full, 2);
                info.set(2, InstrOpKind::Register, Register::None, OP_INVALID);
                info
            }

            Self::Movabs { mnemonic, mem_op } => {
                if instruction.op_kind(*mem_op) != OpKind::Memory {
                    return OperandInfo::new(mnemonic, instruction, flags::NONE);
                }
                let mem_size = match instruction.memory_displ_size() {
                    2 => 16,
                    4 => 32,
                    _ => 64,
                };
                let instr_bitness = if instr_bitness == 0 { mem_size } else { instr_bitness };
                let mut flags = 0;
                if instr_bitness == 64 {
                    if mem_size == 32 {
                        flags |= flags::ADDR_SIZE32;
                    } else {
                        flags |= MemorySizeInfo::Qword.flags();
                    }
                } else if instr_bitness != mem_size {
                    let info = if mem_size == 16 { MemorySizeInfo::Word } else { MemorySizeInfo::Dword };
                    flags |= info.flags();
                }
                OperandInfo::new(mnemonic, instruction, flags)
            }

            Self::Nop { mnemonic, bitness, register } => {
                if instr_bitness == 0 || instr_bitness & bitness != 0 {
                    OperandInfo::new(mnemonic, instruction, flags::NONE)
                } else {
                    let mut info = OperandInfo::empty("xchg", flags::NONE);
                    info.op_count = 2;
                    info.set(0, InstrOpKind::Register, *register, OP_ACCESS_NONE);
                    info.set(1, InstrOpKind::Register, *register, OP_ACCESS_NONE);
                    info
                }
            }

            Self::OpSize { code_size, mnemonics } => {
                let mnemonic = if instruction.code_size() == *code_size {
                    &mnemonics[0]
                } else {
                    mnemonic_by_code_size(mnemonics, *code_size)
                };
                OperandInfo::new(mnemonic, instruction, flags::NONE)
            }

            Self::OpSize2Bnd { mnemonics } => {
                let flags = if instruction.has_repne_prefix() { flags::BND_PREFIX } else { 0 };
                OperandInfo::new(mnemonic_by_code_size(mnemonics, instruction.code_size()), instruction, flags)
            }

            Self::OpSize3 { bitness, mnemonic, full } => {
                let mnemonic = if instr_bitness == 0 || instr_bitness & bitness != 0 {
                    mnemonic
                } else {
                    full
                };
                OperandInfo::new(mnemonic, instruction, flags::NONE)
            }

            Self::Os { mnemonic, bitness, flags } => {
                let flags = *flags | mismatch_op_size(instr_bitness, *bitness);
                OperandInfo::new(mnemonic, instruction, flags)
            }

            Self::OsCall { mnemonic, bitness, can_bnd } => {
                let mut flags = 0;
                if *can_bnd && instruction.has_repne_prefix() {
                    flags |= flags::BND_PREFIX;
                }
                if instr_bitness != 0 && instr_bitness != *bitness {
                    match bitness {
                        16 => flags |= BranchSizeInfo::Word.flags(),
                        32 => flags |= BranchSizeInfo::Dword.flags(),
                        _ => {}
                    }
                }
                OperandInfo::new(mnemonic, instruction, flags)
            }

            Self::Cc { cc, mnemonics } => {
                OperandInfo::new(cc_mnemonic(options, *cc, mnemonics), instruction, flags::NONE)
            }

            Self::OsJcc { cc, mnemonics, bitness, flags } => {
                let mut flags = *flags;
                if flags == flags::NONE {
                    let mut info = BranchSizeInfo::Near;
                    if instr_bitness != 0 && instr_bitness != *bitness {
                        match bitness {
                            16 => info = BranchSizeInfo::NearWord,
                            32 => info = BranchSizeInfo::NearDword,
                            _ => {}
                        }
                    }
                    flags |= info.flags();
                } else {
                    flags |= mismatch_op_size(instr_bitness, *bitness);
                }
                flags |= branch_hint_flags(instruction);
                OperandInfo::new(cc_mnemonic(options, *cc, mnemonics), instruction, flags)
            }

            Self::OsLoop { cc, mnemonics, bitness, register } => {
                let expected = match instr_bitness {
                    16 => Register::CX,
                    32 => Register::ECX,
                    64 => Register::RCX,
                    _ => *register,
                };
                let flags = mismatch_op_size(instr_bitness, *bitness);
                let mnemonic = match cc {
                    Some(cc) => cc_mnemonic(options, *cc, mnemonics),
                    None => mnemonics.first().map_or("", String::as_str),
                };
                let mut info = OperandInfo::new(mnemonic, instruction, flags);
                if expected != *register {
                    info.op_count = 2;
                    info.set(1, InstrOpKind::Register, *register, OP_ACCESS_READ_WRITE);
                }
                info
            }

            Self::OsMem { mnemonic, bitness } => {
                let mut flags = 0;
                if has_memory_op01(instruction) && mem_needs_op_size(instr_bitness, *bitness) {
                    flags |= op_size_flag(*bitness);
                }
                OperandInfo::new(mnemonic, instruction, flags)
            }

            Self::OsMemReg16 { mnemonic, bitness } => {
                let mut flags = 0;
                let op0 = instruction.op_kind(0);
                if op0 == OpKind::Memory && mem_needs_op_size(instr_bitness, *bitness) {
                    flags |= op_size_flag(*bitness);
                }
                let mut info = OperandInfo::new(mnemonic, instruction, flags);
                if op0 == OpKind::Register {
                    let register = info.registers[0];
                    let reg_size = if register.is_gpr16() {
                        16
                    } else if register.is_gpr32() {
                        32
                    } else if register.is_gpr64() {
                        64
                    } else {
                        0
                    };
                    if reg_size != 0 {
                        info.registers[0] = register.to_gpr16();
                        let matches = (instr_bitness != 64 && instr_bitness == reg_size)
                            || (instr_bitness == 64 && reg_size == 32);
                        if !matches {
                            info.flags |= op_size_flag(*bitness);
                        }
                    }
                }
                info
            }

            Self::OsMem2 { mnemonic, bitness, flags } => {
                let mut flags = *flags;
                if instr_bitness != 0 && instr_bitness & bitness == 0 {
                    flags |= if instr_bitness == 16 { flags::OP_SIZE32 } else { flags::OP_SIZE16 };
                }
                OperandInfo::new(mnemonic, instruction, flags)
            }

            Self::Pblendvb { mnemonic } => {
                let full = OperandInfo::new(mnemonic, instruction, flags::NONE);
                let mut info = OperandInfo::empty(mnemonic, flags::NONE);
                info.memory_size = instruction.memory_size();
                info.op_count = 3;
                info.copy_from(0, &full, 0);
                info.copy_from(1, &full, 1);
                info.set(2, InstrOpKind::Register, Register::XMM0, OP_ACCESS_READ);
                info
            }

            Self::Pclmulqdq { mnemonic, pseudo_ops } => {
                let mut info = OperandInfo::new(mnemonic, instruction, flags::NONE);
                let pseudo = pclmulqdq_index(instruction.immediate8()).and_then(|i| pseudo_ops.get(i));
                if let Some(pseudo) = pseudo.filter(|_| options.use_pseudo_ops) {
                    info.mnemonic = pseudo;
                    info.remove(usize::from(info.op_count).saturating_sub(1));
                }
                info
            }

            Self::Pops { mnemonic, pseudo_ops } => {
                let mut info = OperandInfo::new(mnemonic, instruction, flags::NONE);
                if instruction.suppress_all_exceptions() {
                    info.insert(usize::from(info.op_count).saturating_sub(1), InstrOpKind::Sae);
                }
                let pseudo = pseudo_ops.get(usize::from(instruction.immediate8()));
                if let Some(pseudo) = pseudo.filter(|_| options.use_pseudo_ops) {
                    info.mnemonic = pseudo;
                    info.remove(usize::from(info.op_count).saturating_sub(1));
                }
                info
            }

            Self::Reg16 { mnemonic } => {
                let mut info = OperandInfo::new(mnemonic, instruction, flags::NONE);
                for register in info.registers.iter_mut().take(3) {
                    if register.is_gpr32() {
                        *register = register.to_gpr16();
                    }
                }
                info
            }

            Self::Reg32 { mnemonic } => {
                let mut info = OperandInfo::new(mnemonic, instruction, flags::NONE);
                for register in info.registers.iter_mut().take(3) {
                    if register.is_gpr64() {
                        *register = register.to_gpr32();
                    }
                }
                info
            }

            Self::Reverse { mnemonic } => {
                let full = OperandInfo::new(mnemonic, instruction, flags::NONE);
                let mut info = full;
                info.copy_from(0, &full, 1);
                info.copy_from(1, &full, 0);
                info
            }

            Self::Sae { mnemonic, index } => {
                let mut info = OperandInfo::new(mnemonic, instruction, flags::NONE);
                if instruction.suppress_all_exceptions() {
                    info.insert(*index, InstrOpKind::Sae);
                }
                info
            }

            Self::PushImm8 { mnemonic, bitness, sign_extend } => {
                let mut flags = sign_extend.flags();
                if *bitness != 0 {
                    flags |= mismatch_op_size(instr_bitness, *bitness);
                }
                OperandInfo::new(mnemonic, instruction, flags)
            }

            Self::PushImm { mnemonic, bitness, sign_extend } => {
                let mut flags = 0;
                let mut show_sign_extend = true;
                if *bitness != 0 && instr_bitness != 0 && instr_bitness != *bitness {
                    if instr_bitness == 64 {
                        flags |= flags::OP_SIZE16;
                    }
                } else if *bitness == 16 && instr_bitness == 16 {
                    show_sign_extend = false;
                }
                if show_sign_extend {
                    flags |= sign_extend.flags();
                }
                OperandInfo::new(mnemonic, instruction, flags)
            }

            Self::SignExt { mnemonic, reg, mem, flags } => {
                let sign_extend = if has_memory_op01(instruction) { mem } else { reg };
                OperandInfo::new(mnemonic, instruction, *flags | sign_extend.flags())
            }

            Self::Imul { mnemonic, sign_extend } => {
                let mut info = OperandInfo::new(mnemonic, instruction, sign_extend.flags());
                if options.use_pseudo_ops
                    && instruction.op_count() == 3
                    && instruction.op_kind(0) == OpKind::Register
                    && instruction.op_kind(1) == OpKind::Register
                    && instruction.op_register(0) == instruction.op_register(1)
                {
                    let full = info;
                    info.op_count = 2;
                    info.links[0] = OP_ACCESS_READ_WRITE;
                    info.copy_from(1, &full, 2);
                    info.set(2, InstrOpKind::Register, Register::None, OP_INVALID);
                }
                info
            }

            Self::Stig1 { mnemonic, pseudo_op } => {
                let mut info = OperandInfo::empty(mnemonic, flags::NONE);
                let collapse = *pseudo_op && options.use_pseudo_ops && instruction.op_register(1) == Register::ST1;
                if !collapse {
                    info.op_count = 1;
                    info.set(0, InstrOpKind::Register, instruction.op_register(1), 1);
                }
                info
            }

            Self::Stig2 { mnemonic, pseudo_op, flags } => {
                let mut info = OperandInfo::empty(mnemonic, *flags);
                let collapse = *pseudo_op && options.use_pseudo_ops && instruction.op_register(0) == Register::ST1;
                if !collapse {
                    info.op_count = 1;
                    info.set(0, InstrOpKind::Register, instruction.op_register(0), 0);
                }
                info
            }

            Self::Xlat { mnemonic } => {
                let expected = match instruction.code_size() {
                    CodeSize::Unknown => instruction.memory_base(),
                    CodeSize::Code16 => Register::BX,
                    CodeSize::Code32 => Register::EBX,
                    CodeSize::Code64 => Register::RBX,
                };
                let base = instruction.memory_base();
                let flags = match base {
                    _ if base == expected => 0,
                    Register::BX => flags::ADDR_SIZE16,
                    Register::EBX => flags::ADDR_SIZE32,
                    Register::RBX => flags::ADDR_SIZE64,
                    _ => 0,
                };
                OperandInfo::empty(mnemonic, flags)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use x86fmt_isa::{Code, MemoryOperand, Operand, RoundingControl};

    use super::*;
    use crate::CcGroup;

    fn instr(code: Code, operands: &[Operand], code_size: CodeSize) -> Instruction {
        let mut instruction = Instruction::with_operands(code, operands).unwrap();
        instruction.set_code_size(code_size);
        instruction
    }

    #[test]
    fn test_os_adds_operand_size_on_mismatch() {
        let rule = IntelRule::Os {
            mnemonic: "pushf".to_string(),
            bitness: 16,
            flags: 0,
        };
        let options = FormatterOptions::default();
        let i64 = instr(Code::Pushfw, &[], CodeSize::Code64);
        assert_eq!(rule.op_info(&options, &i64).flags(), flags::OP_SIZE16);
        let i16 = instr(Code::Pushfw, &[], CodeSize::Code16);
        assert_eq!(rule.op_info(&options, &i16).flags(), 0);
        let unknown = instr(Code::Pushfw, &[], CodeSize::Unknown);
        assert_eq!(rule.op_info(&options, &unknown).flags(), 0);
    }

    #[test]
    fn test_cc_selects_configured_spelling() {
        let rule = IntelRule::Cc {
            cc: CcGroup::Ae as u32,
            mnemonics: vec!["setae".to_string(), "setnb".to_string(), "setnc".to_string()],
        };
        let mut options = FormatterOptions::default();
        let i = instr(Code::Setae_rm8, &[Operand::Register(Register::AL)], CodeSize::Code64);
        assert_eq!(rule.op_info(&options, &i).mnemonic(), "setae");
        options.set_cc(CcGroup::Ae, 2).unwrap();
        assert_eq!(rule.op_info(&options, &i).mnemonic(), "setnc");
    }

    #[test]
    fn test_imul_collapses_same_register() {
        let rule = IntelRule::Imul {
            mnemonic: "imul".to_string(),
            sign_extend: SignExtendInfo::Sex1to4,
        };
        let mut options = FormatterOptions::default();
        let i = instr(
            Code::Imul_r32_rm32_imm8,
            &[Operand::Register(Register::EAX), Operand::Register(Register::EAX), Operand::Immediate(5)],
            CodeSize::Code64,
        );
        let info = rule.op_info(&options, &i);
        assert_eq!(info.op_count(), 2);
        assert_eq!(info.op_kind(1), InstrOpKind::Immediate8to32);
        assert_eq!(info.instruction_index(1), Some(2));
        assert_eq!(info.op_access(0), Some(x86fmt_isa::OpAccess::ReadWrite));
        assert_eq!(SignExtendInfo::from_flags(info.flags()), SignExtendInfo::Sex1to4);

        options.use_pseudo_ops = false;
        assert_eq!(rule.op_info(&options, &i).op_count(), 3);
    }

    #[test]
    fn test_loop_adds_counter_register() {
        let rule = IntelRule::OsLoop {
            cc: None,
            mnemonics: vec!["loop".to_string()],
            bitness: 64,
            register: Register::ECX,
        };
        let options = FormatterOptions::default();
        let i = instr(Code::Loop_rel8_64_ECX, &[Operand::Branch(0x10)], CodeSize::Code64);
        let info = rule.op_info(&options, &i);
        assert_eq!(info.op_count(), 2);
        assert_eq!(info.op_register(1), Register::ECX);
        assert_eq!(info.instruction_index(1), None);
    }

    #[test]
    fn test_string_address_size() {
        let rule = IntelRule::String {
            mnemonic: "stosb".to_string(),
        };
        let options = FormatterOptions::default();
        let i = instr(
            Code::Stosb_m8_AL,
            &[
                Operand::Memory(MemoryOperand::base(Register::EDI)),
                Operand::Register(Register::AL),
            ],
            CodeSize::Code64,
        );
        let info = rule.op_info(&options, &i);
        assert_eq!(info.op_count(), 0);
        assert_eq!(info.flags(), flags::ADDR_SIZE32);
    }

    #[test]
    fn test_er_inserts_rounding_operand() {
        let rule = IntelRule::Er {
            mnemonic: "vaddps".to_string(),
            index: 3,
            flags: 0,
        };
        let options = FormatterOptions::default();
        let mut i = instr(
            Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er,
            &[
                Operand::Register(Register::ZMM1),
                Operand::Register(Register::ZMM2),
                Operand::Register(Register::ZMM3),
            ],
            CodeSize::Code64,
        );
        assert_eq!(rule.op_info(&options, &i).op_count(), 3);
        i.set_rounding_control(RoundingControl::RoundUp);
        let info = rule.op_info(&options, &i);
        assert_eq!(info.op_count(), 4);
        assert_eq!(info.op_kind(3), InstrOpKind::RuSae);
    }
}
