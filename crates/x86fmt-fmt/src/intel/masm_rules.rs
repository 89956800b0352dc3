//! MASM rules.
//!
//! MASM has no operand or address size prefixes. Where NASM flags a size
//! mismatch for the renderer, MASM picks a different spelling instead: a sized
//! mnemonic (`loopd`, `lgdtw`), an explicit memory operand (`stos byte ptr
//! [edi]` instead of `stosb`) or a forced size keyword.

use std::sync::Arc;

use tracing::debug;
use x86fmt_isa::{Code, CodeSize, Instruction, OpKind, Register};

use super::masm_rules_data::MASM_RULES_DATA;
use crate::FormatterOptions;
use crate::error::TableError;
use crate::helpers::show_segment_prefix;
use crate::op_info::{
    InstrOpKind, OP_ACCESS_COND_READ, OP_ACCESS_NONE, OP_ACCESS_READ, OP_ACCESS_READ_WRITE, OP_INVALID,
    OperandInfo, flags,
};
use crate::pseudo_ops::{PseudoOps, pclmulqdq_index};
use crate::rules::{branch_hint_flags, cc_mnemonic, declare_data_info};
use crate::table::{DataReader, EntryHeader, STRINGS_DATA, Strings, read_cc, read_mnemonics, read_pseudo_ops, read_rules};

/// Implicit operand shape of a string instruction. The letters name the
/// operands: `Y` is `es:[di]`, `X` is `ds:[si]`, `A` the accumulator and `D`
/// the `dx` port.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum StringShape {
    /// `ins`
    Yd,
    /// `outs`
    Dx,
    /// `movs`
    Yx,
    /// `cmps`
    Xy,
    /// `stos`
    Ya,
    /// `lods`
    Ax,
    /// `scas`
    Ay,
}

impl StringShape {
    /// Operand whose address register decides between the two spellings.
    const fn checked_operand(self) -> u32 {
        match self {
            Self::Yd | Self::Yx | Self::Ya => 0,
            Self::Dx | Self::Xy | Self::Ax | Self::Ay => 1,
        }
    }

    /// Whether the checked operand is `es:[di]`.
    const fn checks_destination(self) -> bool {
        matches!(self, Self::Yd | Self::Yx | Self::Ya | Self::Xy | Self::Ay)
    }

    /// Whether a shown DS override also forces the explicit spelling.
    const fn checks_segment(self) -> bool {
        !matches!(self, Self::Yd | Self::Ya)
    }

    /// Instruction operands kept by the explicit spelling; `None` keeps all.
    const fn kept_operand(self) -> Option<usize> {
        match self {
            Self::Ya => Some(0),
            Self::Ax | Self::Ay => Some(1),
            Self::Yd | Self::Dx | Self::Yx | Self::Xy => None,
        }
    }

    fn expected_kind(self, instruction: &Instruction) -> OpKind {
        let destination = self.checks_destination();
        match instruction.code_size() {
            CodeSize::Unknown => instruction.op_kind(self.checked_operand()),
            CodeSize::Code16 if destination => OpKind::MemoryESDI,
            CodeSize::Code32 if destination => OpKind::MemoryESEDI,
            CodeSize::Code64 if destination => OpKind::MemoryESRDI,
            CodeSize::Code16 => OpKind::MemorySegSI,
            CodeSize::Code32 => OpKind::MemorySegESI,
            CodeSize::Code64 => OpKind::MemorySegRSI,
        }
    }
}

/// Whether no DS override would be written for a DS-default operand.
fn hides_ds_override(instruction: &Instruction, options: &FormatterOptions) -> bool {
    instruction.segment_prefix() == Register::None || !show_segment_prefix(Register::DS, instruction, options)
}

/// How one opcode form is turned into an [`OperandInfo`] for MASM.
#[derive(Debug)]
pub(crate) enum MasmRule {
    Normal { mnemonic: String, flags: u32 },
    AamAad { mnemonic: String },
    Bnd { mnemonic: String, flags: u32 },
    Cc { cc: u32, mnemonics: Vec<String> },
    DeclareData { mnemonic: String },
    /// `mnemonic` in the form's own code size, `other` elsewhere.
    Fword { code_size: CodeSize, force_no_mem_size: bool, mnemonic: String, other: String },
    Imul { mnemonic: String },
    /// `int 3`
    Int3 { mnemonic: String },
    Invlpga { mnemonic: String, bitness: u32 },
    Jcc { cc: u32, mnemonics: Vec<String>, flags: u32 },
    Maskmovq { mnemonic: String, flags: u32 },
    /// Size keyword forced when the code size differs from `bitness`.
    Memsize { mnemonic: String, bitness: u32 },
    /// `monitor rax,ecx,edx`
    Monitor { mnemonic: String, registers: [Register; 3] },
    Mwait { mnemonic: String },
    Mwaitx { mnemonic: String },
    Nop { mnemonic: String, bitness: u32, register: Register },
    OpSize { code_size: CodeSize, mnemonics: [String; 4] },
    /// `loopcc` with condition spellings for the form's own code size and
    /// sized spellings for any other.
    OpSizeCc { code_size: CodeSize, cc: u32, mnemonics: Vec<String>, other: Vec<String> },
    OpSize2 { mnemonics: [String; 4], can_bnd: bool },
    Pblendvb { mnemonic: String },
    Pclmulqdq { mnemonic: String, pseudo_ops: Arc<[String]> },
    Pops { mnemonic: String, pseudo_ops: Arc<[String]>, flags: u32 },
    Reg16 { mnemonic: String, flags: u32 },
    Reg32 { mnemonic: String, flags: u32 },
    Reverse { mnemonic: String },
    /// `fxxx st,st(i)`
    StSti { mnemonic: String },
    /// `fxxx st(i),st`, collapsed to no operands for `st(1)` pseudo ops.
    StiSt { mnemonic: String, pseudo_op: bool },
    Stig1 { mnemonic: String, pseudo_op: bool },
    /// String instruction: `with_operands` spelled out, or the sized
    /// `no_operands` mnemonic when the address size is the default one.
    String { shape: StringShape, with_operands: String, no_operands: String },
    Xlat { with_operands: String, no_operands: String },
}

impl MasmRule {
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

            Self::Bnd { mnemonic, flags } => {
                let bnd = if instruction.has_repne_prefix() { flags::BND_PREFIX } else { 0 };
                OperandInfo::new(mnemonic, instruction, *flags | bnd)
            }

            Self::Cc { cc, mnemonics } => {
                OperandInfo::new(cc_mnemonic(options, *cc, mnemonics), instruction, flags::NONE)
            }

            Self::DeclareData { mnemonic } => declare_data_info(mnemonic, instruction, flags::NONE),

            Self::Fword { code_size, force_no_mem_size, mnemonic, other } => {
                let code = instruction.code_size();
                let mnemonic = if code == *code_size || code == CodeSize::Unknown { mnemonic } else { other };
                let flags = if *force_no_mem_size { flags::NONE } else { flags::SHOW_NO_MEM_SIZE_FORCE_SIZE };
                OperandInfo::new(mnemonic, instruction, flags)
            }

            Self::Imul { mnemonic } => {
                let mut info = OperandInfo::new(mnemonic, instruction, flags::NONE);
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

            Self::Int3 { mnemonic } => {
                let mut info = OperandInfo::empty(mnemonic, flags::NONE);
                info.op_count = 1;
                info.set(0, InstrOpKind::ExtraImmediate8Value3, Register::None, OP_ACCESS_READ);
                info
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

            Self::Jcc { cc, mnemonics, flags } => {
                let flags = *flags | branch_hint_flags(instruction);
                OperandInfo::new(cc_mnemonic(options, *cc, mnemonics), instruction, flags)
            }

            Self::Maskmovq { mnemonic, flags } => {
                let expected = match instruction.code_size() {
                    CodeSize::Unknown => instruction.op_kind(0),
                    CodeSize::Code16 => OpKind::MemorySegDI,
                    CodeSize::Code32 => OpKind::MemorySegEDI,
                    CodeSize::Code64 => OpKind::MemorySegRDI,
                };
                let full = OperandInfo::new(mnemonic, instruction, *flags);
                if instruction.op_kind(0) != expected || !hides_ds_override(instruction, options) {
                    return full;
                }
                let mut info = full;
                info.op_count = 2;
                info.copy_from(0, &full, 1);
                info.copy_from(1, &full, 2);
                info.set(2, InstrOpKind::Register, Register::None, OP_INVALID);
                info
            }

            Self::Memsize { mnemonic, bitness } => {
                let flags = if instr_bitness == 0 || instr_bitness & bitness != 0 {
                    flags::MEM_SIZE_NOTHING
                } else {
                    flags::SHOW_NO_MEM_SIZE_FORCE_SIZE | flags::SHOW_MIN_MEM_SIZE_FORCE_SIZE
                };
                OperandInfo::new(mnemonic, instruction, flags)
            }

            Self::Monitor { mnemonic, registers } => {
                let [first, mut second, mut third] = *registers;
                if matches!(instruction.code_size(), CodeSize::Code64 | CodeSize::Unknown) && second.is_gpr32() {
                    second = second.to_gpr64();
                    third = third.to_gpr64();
                }
                let mut info = OperandInfo::empty(mnemonic, flags::NONE);
                info.op_count = 3;
                info.set(0, InstrOpKind::Register, first, OP_ACCESS_READ);
                info.set(1, InstrOpKind::Register, second, OP_ACCESS_READ);
                info.set(2, InstrOpKind::Register, third, OP_ACCESS_READ);
                info
            }

            Self::Mwait { mnemonic } => {
                let (ax, cx) = mwait_registers(instruction.code_size());
                let mut info = OperandInfo::empty(mnemonic, flags::NONE);
                info.op_count = 2;
                info.set(0, InstrOpKind::Register, ax, OP_ACCESS_READ);
                info.set(1, InstrOpKind::Register, cx, OP_ACCESS_READ);
                info
            }

            Self::Mwaitx { mnemonic } => {
                let (ax, cx) = mwait_registers(instruction.code_size());
                let bx = match instruction.code_size() {
                    CodeSize::Code16 | CodeSize::Code32 => Register::EBX,
                    CodeSize::Code64 | CodeSize::Unknown => Register::RBX,
                };
                let mut info = OperandInfo::empty(mnemonic, flags::NONE);
                info.op_count = 3;
                info.set(0, InstrOpKind::Register, ax, OP_ACCESS_READ);
                info.set(1, InstrOpKind::Register, cx, OP_ACCESS_READ);
                info.set(2, InstrOpKind::Register, bx, OP_ACCESS_COND_READ);
                info
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
                    &mnemonics[*code_size as usize]
                };
                OperandInfo::new(mnemonic, instruction, flags::NONE)
            }

            Self::OpSizeCc { code_size, cc, mnemonics, other } => {
                let spellings = if instruction.code_size() == *code_size { mnemonics } else { other };
                OperandInfo::new(cc_mnemonic(options, *cc, spellings), instruction, flags::NONE)
            }

            Self::OpSize2 { mnemonics, can_bnd } => {
                let flags = if *can_bnd && instruction.has_repne_prefix() { flags::BND_PREFIX } else { 0 };
                OperandInfo::new(&mnemonics[instruction.code_size() as usize], instruction, flags)
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

            Self::Pops { mnemonic, pseudo_ops, flags } => {
                let mut info = OperandInfo::new(mnemonic, instruction, *flags);
                let pseudo = pseudo_ops.get(usize::from(instruction.immediate8()));
                if let Some(pseudo) = pseudo.filter(|_| options.use_pseudo_ops) {
                    info.mnemonic = pseudo;
                    info.remove(usize::from(info.op_count).saturating_sub(1));
                }
                info
            }

            Self::Reg16 { mnemonic, flags } => {
                let mut info = OperandInfo::new(mnemonic, instruction, *flags);
                for register in info.registers.iter_mut().take(3) {
                    if register.is_gpr32() {
                        *register = register.to_gpr16();
                    }
                }
                info
            }

            Self::Reg32 { mnemonic, flags } => {
                let mut info = OperandInfo::new(mnemonic, instruction, *flags);
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

            Self::StSti { mnemonic } => {
                let mut info = OperandInfo::new(mnemonic, instruction, flags::NONE);
                info.stack_top |= 1 << 0;
                info
            }

            Self::StiSt { mnemonic, pseudo_op } => {
                let collapse = *pseudo_op
                    && options.use_pseudo_ops
                    && (instruction.op_register(0) == Register::ST1 || instruction.op_register(1) == Register::ST1);
                if collapse {
                    return OperandInfo::empty(mnemonic, flags::NONE);
                }
                let mut info = OperandInfo::new(mnemonic, instruction, flags::NONE);
                info.stack_top |= 1 << 1;
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

            Self::String { shape, with_operands, no_operands } => {
                let checked = shape.checked_operand();
                let default_address = instruction.op_kind(checked) == shape.expected_kind(instruction)
                    && (!shape.checks_segment() || hides_ds_override(instruction, options));
                let force = flags::SHOW_NO_MEM_SIZE_FORCE_SIZE | flags::SHOW_MIN_MEM_SIZE_FORCE_SIZE;
                if default_address {
                    return OperandInfo::empty(no_operands, force);
                }
                let full = OperandInfo::new(with_operands, instruction, force);
                match shape.kept_operand() {
                    None => full,
                    Some(kept) => {
                        let mut info = full;
                        info.op_count = 1;
                        info.copy_from(0, &full, kept);
                        for slot in 1..usize::from(full.op_count) {
                            info.set(slot, InstrOpKind::Register, Register::None, OP_INVALID);
                        }
                        info
                    }
                }
            }

            Self::Xlat { with_operands, no_operands } => {
                let expected = match instruction.code_size() {
                    CodeSize::Unknown => instruction.memory_base(),
                    CodeSize::Code16 => Register::BX,
                    CodeSize::Code32 => Register::EBX,
                    CodeSize::Code64 => Register::RBX,
                };
                if instruction.memory_base() == expected && hides_ds_override(instruction, options) {
                    OperandInfo::empty(no_operands, flags::NONE)
                } else {
                    OperandInfo::new(with_operands, instruction, flags::SHOW_NO_MEM_SIZE_FORCE_SIZE)
                }
            }
        }
    }
}

/// `mwait` implicit operands for a code size.
const fn mwait_registers(code_size: CodeSize) -> (Register, Register) {
    match code_size {
        CodeSize::Code16 => (Register::AX, Register::ECX),
        CodeSize::Code32 => (Register::EAX, Register::ECX),
        CodeSize::Code64 | CodeSize::Unknown => (Register::RAX, Register::RCX),
    }
}

// ============================================================================
// Rule table
// ============================================================================

/// MASM rules for every [`Code`], decoded from the built-in table.
#[derive(Debug)]
pub struct MasmRuleTable {
    rules: Vec<MasmRule>,
}

impl MasmRuleTable {
    /// Decodes the built-in table.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the embedded data is malformed.
    pub fn init() -> Result<Self, TableError> {
        Self::from_data(&STRINGS_DATA, &MASM_RULES_DATA)
    }

    /// # Errors
    ///
    /// Returns a [`TableError`] if the embedded data is malformed.
    pub fn shared() -> Result<Arc<Self>, TableError> {
        Self::init().map(Arc::new)
    }

    pub(crate) fn from_data(strings: &[u8], data: &[u8]) -> Result<Self, TableError> {
        let strings = Strings::read(strings)?;
        let pseudo_ops = PseudoOps::new();
        let rules = read_rules(data, &strings, |header, reader, strings| {
            read_rule(header, reader, strings, &pseudo_ops)
        })?;
        debug!(
            rules = rules.len(),
            strings = strings.len(),
            bytes = data.len(),
            "built MASM rule table"
        );
        Ok(Self { rules })
    }

    pub(crate) fn rule(&self, code: Code) -> &MasmRule {
        &self.rules[code as usize]
    }

    pub(crate) fn op_info<'a>(&'a self, options: &FormatterOptions, instruction: &Instruction) -> OperandInfo<'a> {
        self.rule(instruction.code()).op_info(options, instruction)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn sized_mnemonics(m: &str) -> [String; 4] {
    [m.to_string(), format!("{m}w"), format!("{m}d"), format!("{m}q")]
}

#[allow(clippy::too_many_lines)]
fn read_rule(
    header: &EntryHeader,
    reader: &mut DataReader<'_>,
    strings: &Strings,
    pseudo_ops: &PseudoOps,
) -> Result<MasmRule, TableError> {
    let m = header.mnemonic.clone();
    let string = |shape: StringShape, reader: &mut DataReader<'_>| -> Result<MasmRule, TableError> {
        Ok(MasmRule::String {
            shape,
            with_operands: header.mnemonic.clone(),
            no_operands: reader.read_string(strings)?,
        })
    };
    let rule = match header.kind {
        1 => MasmRule::Normal { mnemonic: m, flags: 0 },
        2 => MasmRule::Normal {
            mnemonic: m,
            flags: reader.read_compressed_u32()?,
        },
        3 => MasmRule::AamAad { mnemonic: m },
        4 => MasmRule::Bnd {
            mnemonic: m,
            flags: reader.read_compressed_u32()?,
        },
        kind @ 5..=7 => {
            let mnemonics = read_mnemonics(&m, usize::from(kind - 5), reader, strings)?;
            MasmRule::Cc {
                cc: read_cc(reader)?,
                mnemonics,
            }
        }
        8 => MasmRule::DeclareData { mnemonic: m },
        9 => MasmRule::Fword {
            code_size: reader.read_code_size()?,
            force_no_mem_size: reader.read_bool()?,
            mnemonic: m,
            other: reader.read_string(strings)?,
        },
        10 => MasmRule::Imul { mnemonic: m },
        11 => MasmRule::Int3 { mnemonic: m },
        12 => MasmRule::Invlpga {
            mnemonic: m,
            bitness: reader.read_bitness()?,
        },
        kind @ 13..=15 => {
            let mnemonics = read_mnemonics(&m, usize::from(kind - 13), reader, strings)?;
            MasmRule::Jcc {
                cc: read_cc(reader)?,
                mnemonics,
                flags: reader.read_compressed_u32()?,
            }
        }
        16 => MasmRule::Maskmovq {
            mnemonic: m,
            flags: reader.read_compressed_u32()?,
        },
        17 => MasmRule::Memsize {
            mnemonic: m,
            bitness: reader.read_bitness()?,
        },
        18 => MasmRule::Monitor {
            mnemonic: m,
            registers: [reader.read_register()?, reader.read_register()?, reader.read_register()?],
        },
        19 => MasmRule::Mwait { mnemonic: m },
        20 => MasmRule::Mwaitx { mnemonic: m },
        21 => MasmRule::Nop {
            mnemonic: m,
            bitness: reader.read_bitness()?,
            register: reader.read_register()?,
        },
        22 => MasmRule::OpSize {
            code_size: reader.read_code_size()?,
            mnemonics: sized_mnemonics(&m),
        },
        23 => {
            let code_size = reader.read_code_size()?;
            let cc = read_cc(reader)?;
            let mnemonics = read_mnemonics(&m, 1, reader, strings)?;
            let other = vec![reader.read_string(strings)?, reader.read_string(strings)?];
            MasmRule::OpSizeCc {
                code_size,
                cc,
                mnemonics,
                other,
            }
        }
        24 => {
            let m16 = reader.read_string(strings)?;
            let m32 = reader.read_string(strings)?;
            let m64 = reader.read_string(strings)?;
            MasmRule::OpSize2 {
                mnemonics: [m, m16, m32, m64],
                can_bnd: reader.read_bool()?,
            }
        }
        25 => MasmRule::Pblendvb { mnemonic: m },
        26 => MasmRule::Pclmulqdq {
            mnemonic: m,
            pseudo_ops: read_pseudo_ops(reader, pseudo_ops)?,
        },
        27 => MasmRule::Pops {
            mnemonic: m,
            pseudo_ops: read_pseudo_ops(reader, pseudo_ops)?,
            flags: reader.read_compressed_u32()?,
        },
        28 => MasmRule::Reg16 {
            mnemonic: m,
            flags: reader.read_compressed_u32()?,
        },
        29 => MasmRule::Reg32 {
            mnemonic: m,
            flags: reader.read_compressed_u32()?,
        },
        30 => MasmRule::Reverse { mnemonic: m },
        31 => MasmRule::StSti { mnemonic: m },
        32 => MasmRule::StiSt {
            mnemonic: m,
            pseudo_op: reader.read_bool()?,
        },
        33 => MasmRule::Stig1 {
            mnemonic: m,
            pseudo_op: reader.read_bool()?,
        },
        34 => string(StringShape::Yd, reader)?,
        35 => string(StringShape::Dx, reader)?,
        36 => string(StringShape::Yx, reader)?,
        37 => string(StringShape::Xy, reader)?,
        38 => string(StringShape::Ya, reader)?,
        39 => string(StringShape::Ax, reader)?,
        40 => string(StringShape::Ay, reader)?,
        41 => MasmRule::Xlat {
            with_operands: m,
            no_operands: reader.read_string(strings)?,
        },
        kind => {
            return Err(TableError::UnknownKind {
                kind,
                offset: header.offset,
            });
        }
    };
    Ok(rule)
}

#[cfg(test)]
mod tests {
    use x86fmt_isa::{MemoryOperand, OpAccess, Operand};

    use super::*;
    use crate::test_util::all_samples;

    fn instr(code: Code, operands: &[Operand], code_size: CodeSize) -> Instruction {
        let mut instruction = Instruction::with_operands(code, operands).unwrap();
        instruction.set_code_size(code_size);
        instruction
    }

    fn stosb(base: Register, code_size: CodeSize) -> Instruction {
        instr(
            Code::Stosb_m8_AL,
            &[Operand::Memory(MemoryOperand::base(base)), Operand::Register(Register::AL)],
            code_size,
        )
    }

    #[test]
    fn test_builtin_table_decodes() {
        let table = MasmRuleTable::init().unwrap();
        assert_eq!(table.len(), Code::COUNT);
        assert!(matches!(table.rule(Code::Int3), MasmRule::Int3 { .. }));
        assert!(matches!(
            table.rule(Code::Movsb_m8_m8),
            MasmRule::String { shape: StringShape::Yx, .. }
        ));
        assert!(matches!(table.rule(Code::Monitorq), MasmRule::Monitor { .. }));
    }

    #[test]
    fn test_string_spelling_follows_address_size() {
        let table = MasmRuleTable::init().unwrap();
        let options = FormatterOptions::with_masm();

        let default = stosb(Register::RDI, CodeSize::Code64);
        let info = table.op_info(&options, &default);
        assert_eq!((info.mnemonic(), info.op_count()), ("stosb", 0));

        let narrow = stosb(Register::EDI, CodeSize::Code64);
        let info = table.op_info(&options, &narrow);
        assert_eq!((info.mnemonic(), info.op_count()), ("stos", 1));
        assert_eq!(info.op_kind(0), InstrOpKind::MemoryESEDI);
        assert_eq!(info.instruction_index(0), Some(0));

        let unknown = stosb(Register::EDI, CodeSize::Unknown);
        assert_eq!(table.op_info(&options, &unknown).mnemonic(), "stosb");
    }

    #[test]
    fn test_lods_keeps_source_operand() {
        let table = MasmRuleTable::init().unwrap();
        let options = FormatterOptions::with_masm();
        let lods = instr(
            Code::Lodsb_AL_m8,
            &[Operand::Register(Register::AL), Operand::Memory(MemoryOperand::base(Register::SI))],
            CodeSize::Code32,
        );
        let info = table.op_info(&options, &lods);
        assert_eq!((info.mnemonic(), info.op_count()), ("lods", 1));
        assert_eq!(info.op_kind(0), InstrOpKind::MemorySegSI);
        assert_eq!(info.instruction_index(0), Some(1));
    }

    #[test]
    fn test_shown_ds_override_spells_out_movs() {
        let table = MasmRuleTable::init().unwrap();
        let options = FormatterOptions::with_masm();
        let mut movs = instr(
            Code::Movsb_m8_m8,
            &[
                Operand::Memory(MemoryOperand::base(Register::EDI)),
                Operand::Memory(MemoryOperand::base(Register::ESI)),
            ],
            CodeSize::Code32,
        );
        assert_eq!(table.op_info(&options, &movs).mnemonic(), "movsb");
        movs.set_segment_prefix(Register::FS).unwrap();
        let info = table.op_info(&options, &movs);
        assert_eq!((info.mnemonic(), info.op_count()), ("movs", 2));
    }

    #[test]
    fn test_pops_never_adds_sae() {
        let table = MasmRuleTable::init().unwrap();
        let mut options = FormatterOptions::with_masm();
        let mut cmp = instr(
            Code::EVEX_Vcmpps_kr_k1_zmm_zmmm512b32_imm8_sae,
            &[
                Operand::Register(Register::K1),
                Operand::Register(Register::ZMM1),
                Operand::Register(Register::ZMM2),
                Operand::Immediate(0x1F),
            ],
            CodeSize::Code64,
        );
        cmp.set_suppress_all_exceptions(true);
        options.use_pseudo_ops = false;
        let info = table.op_info(&options, &cmp);
        assert_eq!(info.op_count(), 4);
        assert!((0..4).all(|i| info.op_kind(i) != InstrOpKind::Sae));

        options.use_pseudo_ops = true;
        let info = table.op_info(&options, &cmp);
        assert_eq!((info.mnemonic(), info.op_count()), ("vcmptrue_usps", 3));
    }

    #[test]
    fn test_monitor_operands() {
        let table = MasmRuleTable::init().unwrap();
        let options = FormatterOptions::with_masm();
        let info = table.op_info(&options, &instr(Code::Monitord, &[], CodeSize::Code64));
        assert_eq!(info.op_count(), 3);
        assert_eq!(
            [info.op_register(0), info.op_register(1), info.op_register(2)],
            [Register::EAX, Register::RCX, Register::RDX]
        );
        assert_eq!(info.op_access(1), Some(OpAccess::Read));
        assert_eq!(info.instruction_index(0), None);

        let info = table.op_info(&options, &instr(Code::Monitorw, &[], CodeSize::Code16));
        assert_eq!(
            [info.op_register(0), info.op_register(1), info.op_register(2)],
            [Register::AX, Register::ECX, Register::EDX]
        );
    }

    #[test]
    fn test_mwaitx_counter_is_conditional() {
        let table = MasmRuleTable::init().unwrap();
        let options = FormatterOptions::with_masm();
        let info = table.op_info(&options, &instr(Code::Mwaitx, &[], CodeSize::Code32));
        assert_eq!(info.op_count(), 3);
        assert_eq!(info.op_register(0), Register::EAX);
        assert_eq!(info.op_register(2), Register::EBX);
        assert_eq!(info.op_access(0), Some(OpAccess::Read));
        assert_eq!(info.op_access(2), Some(OpAccess::CondRead));

        let info = table.op_info(&options, &instr(Code::Mwait, &[], CodeSize::Code64));
        assert_eq!([info.op_register(0), info.op_register(1)], [Register::RAX, Register::RCX]);
    }

    #[test]
    fn test_sized_spellings() {
        let table = MasmRuleTable::init().unwrap();
        let options = FormatterOptions::with_masm();
        let branch = [Operand::Branch(0x10)];
        let lp = instr(Code::Loop_rel8_64_ECX, &branch, CodeSize::Code64);
        assert_eq!(table.op_info(&options, &lp).mnemonic(), "loopd");
        let lp = instr(Code::Loop_rel8_64_RCX, &branch, CodeSize::Code64);
        assert_eq!(table.op_info(&options, &lp).mnemonic(), "loop");
        let lpe = instr(Code::Loope_rel8_32_ECX, &branch, CodeSize::Code64);
        assert_eq!(table.op_info(&options, &lpe).mnemonic(), "looped");

        let mem = [Operand::Memory(MemoryOperand::base(Register::RAX))];
        let lgdt = instr(Code::Lgdt_m1632_16, &mem, CodeSize::Code64);
        assert_eq!(table.op_info(&options, &lgdt).mnemonic(), "lgdtw");
        let lgdt = instr(Code::Lgdt_m1664, &mem, CodeSize::Code64);
        assert_eq!(table.op_info(&options, &lgdt).flags(), flags::MEM_SIZE_NOTHING);
        let lgdt = instr(Code::Lgdt_m1664, &mem, CodeSize::Code32);
        assert_ne!(table.op_info(&options, &lgdt).flags() & flags::SHOW_NO_MEM_SIZE_FORCE_SIZE, 0);
    }

    #[test]
    fn test_int3_has_explicit_operand() {
        let table = MasmRuleTable::init().unwrap();
        let options = FormatterOptions::with_masm();
        let info = table.op_info(&options, &instr(Code::Int3, &[], CodeSize::Code64));
        assert_eq!((info.mnemonic(), info.op_count()), ("int", 1));
        assert_eq!(info.op_kind(0), InstrOpKind::ExtraImmediate8Value3);
        assert_eq!(info.op_access(0), Some(OpAccess::Read));
    }

    #[test]
    fn test_stack_top_operand() {
        let table = MasmRuleTable::init().unwrap();
        let options = FormatterOptions::with_masm();
        let sts = [Operand::Register(Register::ST0), Operand::Register(Register::ST3)];
        let info = table.op_info(&options, &instr(Code::Fadd_st0_sti, &sts, CodeSize::Code64));
        assert!(info.is_stack_top(0));
        assert!(!info.is_stack_top(1));

        let popped = [Operand::Register(Register::ST1), Operand::Register(Register::ST0)];
        let info = table.op_info(&options, &instr(Code::Faddp_sti_st0, &popped, CodeSize::Code64));
        assert_eq!(info.op_count(), 0);
    }

    #[test]
    fn test_operand_count_invariant() {
        let table = MasmRuleTable::init().unwrap();
        let mut options = FormatterOptions::with_masm();
        for use_pseudo_ops in [true, false] {
            options.use_pseudo_ops = use_pseudo_ops;
            for instr in all_samples() {
                let info = table.op_info(&options, &instr);
                let limit = if instr.code().is_declare_data() { 16 } else { 5 };
                assert!(info.op_count() <= limit, "{:?}", instr.code());
            }
        }
    }

    #[test]
    fn test_malformed_tables_are_rejected() {
        assert!(MasmRuleTable::from_data(&STRINGS_DATA, &MASM_RULES_DATA[..MASM_RULES_DATA.len() - 1]).is_err());
        let mut bad = MASM_RULES_DATA.to_vec();
        bad[0] = 0x7F;
        assert!(matches!(
            MasmRuleTable::from_data(&STRINGS_DATA, &bad),
            Err(TableError::UnknownKind { kind: 0x7F, offset: 0 })
        ));
    }
}
