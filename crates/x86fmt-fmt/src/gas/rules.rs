//! AT&T operand order rules used by the GAS formatter.
//!
//! Most rules carry two spellings of the mnemonic: the plain one and the one
//! with an operand size suffix (`add`/`addl`). The suffixed spelling is used
//! when the `gas_show_mnemonic_size_suffix` option is set, when a memory
//! operand leaves the size ambiguous, or when the code size disagrees with
//! the form.

use std::sync::Arc;

use x86fmt_isa::{CodeSize, Instruction, OpKind, Register};

use crate::FormatterOptions;
use crate::op_info::{
    InstrOpKind, OP_ACCESS_NONE, OP_ACCESS_READ, OP_ACCESS_READ_WRITE, OP_INVALID, OperandInfo, addr_size_flag,
    flags, op_size_flag,
};
use crate::pseudo_ops::pclmulqdq_index;
use crate::rules::{
    branch_hint_flags, can_show_rounding_control, cc_mnemonic, declare_data_info, has_memory_op01,
    mem_needs_op_size, mismatch_op_size, rounding_control_kind,
};

#[derive(Debug)]
pub(crate) enum GasRule {
    Normal { mnemonic: String, suffixed: String, flags: u32 },
    AamAad { mnemonic: String },
    AddrSize { mnemonic: String, bitness: u32 },
    Bnd { mnemonic: String, suffixed: String, flags: u32 },
    DeclareData { mnemonic: String },
    Er { mnemonic: String, suffixed: String, index: usize, flags: u32 },
    /// `lcall`/`ljmp`; the operand is written with `*`.
    Far { mnemonic: String, suffixed: String, bitness: u32 },
    Imul { mnemonic: String, suffixed: String },
    Maskmovq { mnemonic: String },
    Movabs {
        mnemonic: String,
        suffixed: String,
        mnemonic64: String,
        suffixed64: String,
        mem_op: u32,
    },
    Nop { mnemonic: String, bitness: u32, register: Register },
    OpSize { code_size: CodeSize, mnemonics: [String; 4] },
    OpSize2Bnd { mnemonics: [String; 4] },
    OpSize3 { mnemonic: String, suffixed: String, bitness: u32 },
    Os { mnemonic: String, bitness: u32, can_bnd: bool, flags: u32 },
    Os2 { mnemonic: String, suffixed: String, bitness: u32, can_bnd: bool, flags: u32 },
    Cc { cc: u32, mnemonics: Vec<String>, suffixed: Vec<String> },
    OsJcc { cc: u32, mnemonics: Vec<String>, bitness: u32 },
    /// `loop`/`loopcc`. `reg_size` is the width of the counter register.
    OsLoop {
        cc: Option<u32>,
        mnemonics: Vec<String>,
        suffixed: Vec<String>,
        bitness: u32,
        reg_size: u32,
    },
    OsMem { mnemonic: String, suffixed: String, bitness: u32 },
    OsMem2 { mnemonic: String, suffixed: String, bitness: u32 },
    /// 16-bit memory or a wider register (`smsw`).
    Mem16 { mnemonic: String, reg_suffixed: String, mem_suffixed: String },
    Pblendvb { mnemonic: String },
    Pclmulqdq { mnemonic: String, pseudo_ops: Arc<[String]> },
    Pops { mnemonic: String, pseudo_ops: Arc<[String]>, can_sae: bool },
    Reg16 { mnemonic: String, suffixed: String },
    Reg32 { mnemonic: String },
    Sae { mnemonic: String, index: usize },
    /// `fxxx %st(i), %st`
    StSti { mnemonic: String },
    /// `fxxx %st, %st(i)`, collapsed to no operands for `st(1)` pseudo ops.
    StiSt { mnemonic: String, pseudo_op: bool },
    Stig1 { mnemonic: String, pseudo_op: bool },
}

/// Suffixed spelling when the size is ambiguous or always requested.
fn select<'a>(options: &FormatterOptions, instruction: &Instruction, mnemonic: &'a str, suffixed: &'a str, flags: u32) -> &'a str {
    if options.gas_show_mnemonic_size_suffix {
        return suffixed;
    }
    if flags & flags::MNEMONIC_SUFFIX_IF_MEM != 0
        && !instruction.memory_size().is_broadcast()
        && OperandInfo::has_memory_operand(instruction, 3)
    {
        return suffixed;
    }
    mnemonic
}

const fn bnd_flag(can_bnd: bool, instruction: &Instruction) -> u32 {
    if can_bnd && instruction.has_repne_prefix() { flags::BND_PREFIX } else { 0 }
}

impl GasRule {
    #[allow(clippy::too_many_lines)]
    pub(crate) fn op_info<'a>(&'a self, options: &FormatterOptions, instruction: &Instruction) -> OperandInfo<'a> {
        let instr_bitness = instruction.code_size().bitness();
        match self {
            Self::Normal { mnemonic, suffixed, flags } => {
                let mnemonic = select(options, instruction, mnemonic, suffixed, *flags);
                OperandInfo::new_reversed(mnemonic, instruction, *flags)
            }

            Self::AamAad { mnemonic } => {
                if instruction.immediate8() == 10 {
                    OperandInfo::empty(mnemonic, flags::NONE)
                } else {
                    OperandInfo::new_reversed(mnemonic, instruction, flags::NONE)
                }
            }

            Self::AddrSize { mnemonic, bitness } => {
                let flags = if instr_bitness != 0 && instr_bitness != *bitness {
                    addr_size_flag(*bitness)
                } else {
                    0
                };
                OperandInfo::new_reversed(mnemonic, instruction, flags)
            }

            Self::Bnd { mnemonic, suffixed, flags } => {
                let flags = *flags | bnd_flag(true, instruction);
                OperandInfo::new_reversed(select(options, instruction, mnemonic, suffixed, flags), instruction, flags)
            }

            Self::DeclareData { mnemonic } => declare_data_info(mnemonic, instruction, flags::KEEP_OPERAND_ORDER),

            Self::Er { mnemonic, suffixed, index, flags } => {
                let mnemonic = select(options, instruction, mnemonic, suffixed, *flags);
                let mut info = OperandInfo::new_reversed(mnemonic, instruction, *flags);
                if can_show_rounding_control(instruction, options) {
                    if let Some(kind) = rounding_control_kind(instruction.rounding_control()) {
                        info.insert(*index, kind);
                    }
                }
                info
            }

            Self::Far { mnemonic, suffixed, bitness } => {
                let mut flags = flags::INDIRECT_OPERAND;
                let instr_bitness = if instr_bitness == 0 { *bitness } else { instr_bitness };
                let mnemonic = if *bitness == 64 {
                    flags |= flags::OP_SIZE64;
                    mnemonic
                } else if *bitness != instr_bitness || options.gas_show_mnemonic_size_suffix {
                    suffixed
                } else {
                    mnemonic
                };
                OperandInfo::new_reversed(mnemonic, instruction, flags)
            }

            Self::Imul { mnemonic, suffixed } => {
                let mnemonic = select(options, instruction, mnemonic, suffixed, flags::NONE);
                let mut info = OperandInfo::new_reversed(mnemonic, instruction, flags::NONE);
                if options.use_pseudo_ops
                    && info.op_count == 3
                    && info.kinds[1] == InstrOpKind::Register
                    && info.kinds[2] == InstrOpKind::Register
                    && info.registers[1] == info.registers[2]
                {
                    info.op_count = 2;
                    info.links[1] = OP_ACCESS_READ_WRITE;
                    info.set(2, InstrOpKind::Register, Register::None, OP_INVALID);
                }
                info
            }

            Self::Maskmovq { mnemonic } => {
                let bitness = match instruction.op_kind(0) {
                    OpKind::MemorySegDI => 16,
                    OpKind::MemorySegEDI => 32,
                    OpKind::MemorySegRDI => 64,
                    _ => instr_bitness,
                };
                let flags = if instr_bitness != 0 && instr_bitness != bitness {
                    addr_size_flag(bitness)
                } else {
                    0
                };
                let mut info = OperandInfo::new_reversed(mnemonic, instruction, flags);
                info.remove(2);
                info
            }

            Self::Movabs {
                mnemonic,
                suffixed,
                mnemonic64,
                suffixed64,
                mem_op,
            } => {
                if instruction.op_kind(*mem_op) != OpKind::Memory {
                    return OperandInfo::new_reversed(mnemonic, instruction, flags::NONE);
                }
                let (mem_size, mnemonic, suffixed) = match instruction.memory_displ_size() {
                    2 => (16, mnemonic, suffixed),
                    4 => (32, mnemonic, suffixed),
                    _ => (64, mnemonic64, suffixed64),
                };
                let instr_bitness = if instr_bitness == 0 { mem_size } else { instr_bitness };
                let mut flags = 0;
                if instr_bitness == 64 {
                    if mem_size == 32 {
                        flags |= flags::ADDR_SIZE32;
                    }
                } else if instr_bitness != mem_size {
                    flags |= if mem_size == 16 { flags::ADDR_SIZE16 } else { flags::ADDR_SIZE32 };
                }
                OperandInfo::new_reversed(select(options, instruction, mnemonic, suffixed, flags), instruction, flags)
            }

            Self::Nop { mnemonic, bitness, register } => {
                if instr_bitness == 0 || instr_bitness & bitness != 0 {
                    return OperandInfo::new_reversed(mnemonic, instruction, flags::NONE);
                }
                let xchg = if options.gas_show_mnemonic_size_suffix {
                    match register.size() {
                        2 => "xchgw",
                        4 => "xchgl",
                        _ => "xchgq",
                    }
                } else {
                    "xchg"
                };
                let mut info = OperandInfo::empty(xchg, flags::NONE);
                info.op_count = 2;
                info.set(0, InstrOpKind::Register, *register, OP_ACCESS_NONE);
                info.set(1, InstrOpKind::Register, *register, OP_ACCESS_NONE);
                info
            }

            Self::OpSize { code_size, mnemonics } => {
                let mnemonic = if instruction.code_size() == *code_size && !options.gas_show_mnemonic_size_suffix {
                    &mnemonics[0]
                } else {
                    &mnemonics[*code_size as usize]
                };
                OperandInfo::new_reversed(mnemonic, instruction, flags::NONE)
            }

            Self::OpSize2Bnd { mnemonics } => {
                let flags = bnd_flag(true, instruction);
                let mnemonic = if options.gas_show_mnemonic_size_suffix {
                    &mnemonics[CodeSize::Code64 as usize]
                } else {
                    &mnemonics[instruction.code_size() as usize]
                };
                OperandInfo::new_reversed(mnemonic, instruction, flags)
            }

            Self::OpSize3 { mnemonic, suffixed, bitness } => {
                let plain = !options.gas_show_mnemonic_size_suffix && (instr_bitness == 0 || instr_bitness & bitness != 0);
                OperandInfo::new_reversed(if plain { mnemonic } else { suffixed }, instruction, flags::NONE)
            }

            Self::Os { mnemonic, bitness, can_bnd, flags } => {
                let flags = *flags | bnd_flag(*can_bnd, instruction) | mismatch_op_size(instr_bitness, *bitness);
                OperandInfo::new_reversed(select(options, instruction, mnemonic, mnemonic, flags), instruction, flags)
            }

            Self::Os2 {
                mnemonic,
                suffixed,
                bitness,
                can_bnd,
                flags,
            } => {
                let flags = *flags | bnd_flag(*can_bnd, instruction);
                let mnemonic = if instr_bitness != 0 && instr_bitness != *bitness {
                    suffixed
                } else {
                    select(options, instruction, mnemonic, suffixed, flags)
                };
                OperandInfo::new_reversed(mnemonic, instruction, flags)
            }

            Self::Cc { cc, mnemonics, suffixed } => {
                let mnemonic = cc_mnemonic(options, *cc, mnemonics);
                let suffixed = cc_mnemonic(options, *cc, suffixed);
                OperandInfo::new_reversed(select(options, instruction, mnemonic, suffixed, flags::NONE), instruction, flags::NONE)
            }

            Self::OsJcc { cc, mnemonics, bitness } => {
                let flags = mismatch_op_size(instr_bitness, *bitness) | branch_hint_flags(instruction);
                OperandInfo::new_reversed(cc_mnemonic(options, *cc, mnemonics), instruction, flags)
            }

            Self::OsLoop {
                cc,
                mnemonics,
                suffixed,
                bitness,
                reg_size,
            } => {
                let list = if (instr_bitness != 0 && instr_bitness != *reg_size) || options.gas_show_mnemonic_size_suffix {
                    suffixed
                } else {
                    mnemonics
                };
                let flags = if instr_bitness != 0 && instr_bitness != *bitness {
                    match bitness {
                        16 => flags::OP_SIZE16 | flags::OP_SIZE_IS_BYTE_DIRECTIVE,
                        32 => flags::OP_SIZE32 | flags::OP_SIZE_IS_BYTE_DIRECTIVE,
                        _ => flags::OP_SIZE64,
                    }
                } else {
                    0
                };
                let mnemonic = match cc {
                    Some(cc) => cc_mnemonic(options, *cc, list),
                    None => list.first().map_or("", String::as_str),
                };
                OperandInfo::new_reversed(mnemonic, instruction, flags)
            }

            Self::OsMem { mnemonic, suffixed, bitness } => {
                let has_mem = has_memory_op01(instruction);
                let flags = if has_mem && mem_needs_op_size(instr_bitness, *bitness) {
                    op_size_flag(*bitness)
                } else {
                    0
                };
                let mnemonic = if has_mem {
                    mnemonic
                } else {
                    select(options, instruction, mnemonic, suffixed, flags)
                };
                OperandInfo::new_reversed(mnemonic, instruction, flags)
            }

            Self::OsMem2 { mnemonic, suffixed, bitness } => {
                let mnemonic = if instr_bitness != 0 && instr_bitness & bitness == 0 {
                    suffixed
                } else {
                    select(options, instruction, mnemonic, suffixed, flags::NONE)
                };
                OperandInfo::new_reversed(mnemonic, instruction, flags::NONE)
            }

            Self::Mem16 {
                mnemonic,
                reg_suffixed,
                mem_suffixed,
            } => {
                let suffixed = if has_memory_op01(instruction) { mem_suffixed } else { reg_suffixed };
                OperandInfo::new_reversed(select(options, instruction, mnemonic, suffixed, flags::NONE), instruction, flags::NONE)
            }

            Self::Pblendvb { mnemonic } => {
                let full = OperandInfo::new_reversed(mnemonic, instruction, flags::NONE);
                let mut info = OperandInfo::empty(mnemonic, flags::NONE);
                info.memory_size = instruction.memory_size();
                info.op_count = 3;
                info.set(0, InstrOpKind::Register, Register::XMM0, OP_ACCESS_READ);
                info.copy_from(1, &full, 0);
                info.copy_from(2, &full, 1);
                info
            }

            Self::Pclmulqdq { mnemonic, pseudo_ops } => {
                let mut info = OperandInfo::new_reversed(mnemonic, instruction, flags::NONE);
                let pseudo = pclmulqdq_index(instruction.immediate8()).and_then(|i| pseudo_ops.get(i));
                if let Some(pseudo) = pseudo.filter(|_| options.use_pseudo_ops) {
                    info.mnemonic = pseudo;
                    info.remove(0);
                }
                info
            }

            Self::Pops {
                mnemonic,
                pseudo_ops,
                can_sae,
            } => {
                let mut info = OperandInfo::new_reversed(mnemonic, instruction, flags::NONE);
                if *can_sae && instruction.suppress_all_exceptions() {
                    info.insert(1, InstrOpKind::Sae);
                }
                let pseudo = pseudo_ops.get(usize::from(instruction.immediate8()));
                if let Some(pseudo) = pseudo.filter(|_| options.use_pseudo_ops) {
                    info.mnemonic = pseudo;
                    info.remove(0);
                }
                info
            }

            Self::Reg16 { mnemonic, suffixed } => {
                let mnemonic = select(options, instruction, mnemonic, suffixed, flags::NONE);
                let mut info = OperandInfo::new_reversed(mnemonic, instruction, flags::NONE);
                for register in info.registers.iter_mut().take(3) {
                    if register.is_gpr32() {
                        *register = register.to_gpr16();
                    }
                }
                info
            }

            Self::Reg32 { mnemonic } => {
                let mut info = OperandInfo::new_reversed(mnemonic, instruction, flags::NONE);
                for register in info.registers.iter_mut().take(3) {
                    if register.is_gpr64() {
                        *register = register.to_gpr32();
                    }
                }
                info
            }

            Self::Sae { mnemonic, index } => {
                let mut info = OperandInfo::new_reversed(mnemonic, instruction, flags::NONE);
                if instruction.suppress_all_exceptions() {
                    info.insert(*index, InstrOpKind::Sae);
                }
                info
            }

            Self::StSti { mnemonic } => {
                let mut info = OperandInfo::new_reversed(mnemonic, instruction, flags::NONE);
                info.stack_top |= 1 << 1;
                info
            }

            Self::StiSt { mnemonic, pseudo_op } => {
                let collapse = *pseudo_op
                    && options.use_pseudo_ops
                    && (instruction.op_register(0) == Register::ST1 || instruction.op_register(1) == Register::ST1);
                if collapse {
                    return OperandInfo::empty(mnemonic, flags::NONE);
                }
                let mut info = OperandInfo::new_reversed(mnemonic, instruction, flags::NONE);
                info.stack_top |= 1 << 0;
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
        }
    }
}

#[cfg(test)]
mod tests {
    use x86fmt_isa::{Code, MemoryOperand, Operand};

    use super::*;

    fn instr(code: Code, operands: &[Operand], code_size: CodeSize) -> Instruction {
        let mut instruction = Instruction::with_operands(code, operands).unwrap();
        instruction.set_code_size(code_size);
        instruction
    }

    fn rm32_imm(memory: bool) -> Instruction {
        let op0 = if memory {
            Operand::Memory(MemoryOperand::base(Register::RAX))
        } else {
            Operand::Register(Register::EAX)
        };
        instr(Code::Add_rm32_imm32, &[op0, Operand::Immediate(1)], CodeSize::Code64)
    }

    #[test]
    fn test_suffix_only_for_memory() {
        let rule = GasRule::Normal {
            mnemonic: "add".to_string(),
            suffixed: "addl".to_string(),
            flags: flags::MNEMONIC_SUFFIX_IF_MEM,
        };
        let mut options = FormatterOptions::with_gas();
        assert_eq!(rule.op_info(&options, &rm32_imm(false)).mnemonic(), "add");
        let info = rule.op_info(&options, &rm32_imm(true));
        assert_eq!(info.mnemonic(), "addl");
        assert_eq!(info.op_kind(0), InstrOpKind::Immediate32);
        assert_eq!(info.op_kind(1), InstrOpKind::Memory);

        options.gas_show_mnemonic_size_suffix = true;
        assert_eq!(rule.op_info(&options, &rm32_imm(false)).mnemonic(), "addl");
    }

    #[test]
    fn test_loop_byte_directive_size() {
        let rule = GasRule::OsLoop {
            cc: None,
            mnemonics: vec!["loop".to_string()],
            suffixed: vec!["loopl".to_string()],
            bitness: 32,
            reg_size: 32,
        };
        let options = FormatterOptions::with_gas();
        let i = instr(Code::Loop_rel8_32_ECX, &[Operand::Branch(0x10)], CodeSize::Code64);
        let info = rule.op_info(&options, &i);
        assert_eq!(info.mnemonic(), "loopl");
        assert_eq!(info.flags(), flags::OP_SIZE32 | flags::OP_SIZE_IS_BYTE_DIRECTIVE);
        let i = instr(Code::Loop_rel8_32_ECX, &[Operand::Branch(0x10)], CodeSize::Code32);
        assert_eq!(rule.op_info(&options, &i).mnemonic(), "loop");
    }

    #[test]
    fn test_pops_drops_leading_immediate() {
        let rule = GasRule::Pops {
            mnemonic: "cmpps".to_string(),
            pseudo_ops: crate::pseudo_ops::PseudoOps::new().get(crate::pseudo_ops::PseudoOpsKind::Cmpps),
            can_sae: false,
        };
        let mut options = FormatterOptions::with_gas();
        let i = instr(
            Code::Cmpps_xmm_xmmm128_imm8,
            &[
                Operand::Register(Register::XMM1),
                Operand::Register(Register::XMM2),
                Operand::Immediate(2),
            ],
            CodeSize::Code64,
        );
        let info = rule.op_info(&options, &i);
        assert_eq!(info.mnemonic(), "cmpleps");
        assert_eq!(info.op_count(), 2);
        assert_eq!(info.op_register(0), Register::XMM2);
        assert_eq!(info.op_register(1), Register::XMM1);

        options.use_pseudo_ops = false;
        let info = rule.op_info(&options, &i);
        assert_eq!(info.op_count(), 3);
        assert_eq!(info.op_kind(0), InstrOpKind::Immediate8);
    }

    #[test]
    fn test_stack_top_marker() {
        let options = FormatterOptions::with_gas();
        let i = instr(
            Code::Fadd_st0_sti,
            &[Operand::Register(Register::ST0), Operand::Register(Register::ST3)],
            CodeSize::Code64,
        );
        let rule = GasRule::StSti {
            mnemonic: "fadd".to_string(),
        };
        let info = rule.op_info(&options, &i);
        assert_eq!(info.op_register(0), Register::ST3);
        assert!(info.is_stack_top(1));
        assert!(!info.is_stack_top(0));

        let popped = GasRule::StiSt {
            mnemonic: "faddp".to_string(),
            pseudo_op: true,
        };
        let i = instr(
            Code::Faddp_sti_st0,
            &[Operand::Register(Register::ST1), Operand::Register(Register::ST0)],
            CodeSize::Code64,
        );
        assert_eq!(popped.op_info(&options, &i).op_count(), 0);
    }

    #[test]
    fn test_far_branch_suffix() {
        let rule = GasRule::Far {
            mnemonic: "lcall".to_string(),
            suffixed: "lcallw".to_string(),
            bitness: 16,
        };
        let options = FormatterOptions::with_gas();
        let i = instr(
            Code::Call_ptr1616,
            &[Operand::FarBranch {
                selector: 0x10,
                offset: 0x20,
            }],
            CodeSize::Code32,
        );
        let info = rule.op_info(&options, &i);
        assert_eq!(info.mnemonic(), "lcallw");
        assert_eq!(info.flags(), flags::INDIRECT_OPERAND);
    }

    #[test]
    fn test_imul_keeps_source_register() {
        let rule = GasRule::Imul {
            mnemonic: "imul".to_string(),
            suffixed: "imull".to_string(),
        };
        let options = FormatterOptions::with_gas();
        let i = instr(
            Code::Imul_r32_rm32_imm8,
            &[Operand::Register(Register::ECX), Operand::Register(Register::ECX), Operand::Immediate(3)],
            CodeSize::Code64,
        );
        let info = rule.op_info(&options, &i);
        assert_eq!(info.op_count(), 2);
        assert_eq!(info.op_kind(0), InstrOpKind::Immediate8to32);
        assert_eq!(info.op_register(1), Register::ECX);
        assert_eq!(info.op_access(1), Some(x86fmt_isa::OpAccess::ReadWrite));
    }
}
