//! Per-call operand layout derived from an instruction by its rule.
//!
//! An [`OperandInfo`] is what a dialect actually prints: the selected
//! mnemonic, the formatter's operand list (possibly reordered, shortened by a
//! pseudo-op, or extended with synthetic operands) and flag bits telling the
//! printer which size keywords and prefixes to add.

use x86fmt_isa::{Instruction, MAX_OP_COUNT, MemorySize, OpAccess, OpKind, Register};

/// Kind of a formatter operand.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[allow(non_camel_case_types)]
pub enum InstrOpKind {
    #[default]
    Register,
    NearBranch16,
    NearBranch32,
    NearBranch64,
    FarBranch16,
    FarBranch32,
    Immediate8,
    Immediate8_2nd,
    Immediate16,
    Immediate32,
    Immediate64,
    Immediate8to16,
    Immediate8to32,
    Immediate8to64,
    Immediate32to64,
    MemorySegSI,
    MemorySegESI,
    MemorySegRSI,
    MemorySegDI,
    MemorySegEDI,
    MemorySegRDI,
    MemoryESDI,
    MemoryESEDI,
    MemoryESRDI,
    Memory,
    /// `{sae}`
    Sae,
    /// `{rn-sae}`
    RnSae,
    /// `{rd-sae}`
    RdSae,
    /// `{ru-sae}`
    RuSae,
    /// `{rz-sae}`
    RzSae,
    DeclareByte,
    DeclareWord,
    DeclareDword,
    DeclareQword,
    /// The `3` of MASM's `int 3`.
    ExtraImmediate8Value3,
}

impl From<OpKind> for InstrOpKind {
    fn from(kind: OpKind) -> Self {
        match kind {
            OpKind::Register => Self::Register,
            OpKind::NearBranch16 => Self::NearBranch16,
            OpKind::NearBranch32 => Self::NearBranch32,
            OpKind::NearBranch64 => Self::NearBranch64,
            OpKind::FarBranch16 => Self::FarBranch16,
            OpKind::FarBranch32 => Self::FarBranch32,
            OpKind::Immediate8 => Self::Immediate8,
            OpKind::Immediate8_2nd => Self::Immediate8_2nd,
            OpKind::Immediate16 => Self::Immediate16,
            OpKind::Immediate32 => Self::Immediate32,
            OpKind::Immediate64 => Self::Immediate64,
            OpKind::Immediate8to16 => Self::Immediate8to16,
            OpKind::Immediate8to32 => Self::Immediate8to32,
            OpKind::Immediate8to64 => Self::Immediate8to64,
            OpKind::Immediate32to64 => Self::Immediate32to64,
            OpKind::MemorySegSI => Self::MemorySegSI,
            OpKind::MemorySegESI => Self::MemorySegESI,
            OpKind::MemorySegRSI => Self::MemorySegRSI,
            OpKind::MemorySegDI => Self::MemorySegDI,
            OpKind::MemorySegEDI => Self::MemorySegEDI,
            OpKind::MemorySegRDI => Self::MemorySegRDI,
            OpKind::MemoryESDI => Self::MemoryESDI,
            OpKind::MemoryESEDI => Self::MemoryESEDI,
            OpKind::MemoryESRDI => Self::MemoryESRDI,
            OpKind::Memory => Self::Memory,
        }
    }
}

// ============================================================================
// Flags
// ============================================================================

/// Flag bits of [`OperandInfo::flags`].
pub(crate) mod flags {
    pub const NONE: u32 = 0;
    /// Memory size keyword shown with the `Default` memory size option.
    pub const SHOW_NO_MEM_SIZE_FORCE_SIZE: u32 = 1 << 0;
    /// Memory size keyword shown with the `Minimal` memory size option.
    pub const SHOW_MIN_MEM_SIZE_FORCE_SIZE: u32 = 1 << 1;
    pub const OP_SIZE_SHIFT: u32 = 2;
    pub const OP_SIZE_MASK: u32 = 3;
    pub const OP_SIZE16: u32 = 1 << OP_SIZE_SHIFT;
    pub const OP_SIZE32: u32 = 2 << OP_SIZE_SHIFT;
    pub const OP_SIZE64: u32 = 3 << OP_SIZE_SHIFT;
    pub const ADDR_SIZE_SHIFT: u32 = 4;
    pub const ADDR_SIZE_MASK: u32 = 3;
    pub const ADDR_SIZE16: u32 = 1 << ADDR_SIZE_SHIFT;
    pub const ADDR_SIZE32: u32 = 2 << ADDR_SIZE_SHIFT;
    pub const ADDR_SIZE64: u32 = 3 << ADDR_SIZE_SHIFT;
    pub const BND_PREFIX: u32 = 1 << 6;
    pub const JCC_TAKEN: u32 = 1 << 7;
    pub const JCC_NOT_TAKEN: u32 = 1 << 8;
    pub const MNEMONIC_IS_DIRECTIVE: u32 = 1 << 9;
    pub const KEEP_OPERAND_ORDER: u32 = 1 << 10;
    /// NASM writes `to` before the register operand (`fadd to st1`).
    pub const REGISTER_TO: u32 = 1 << 11;
    /// GAS uses the suffixed mnemonic when an operand is in memory.
    pub const MNEMONIC_SUFFIX_IF_MEM: u32 = 1 << 12;
    /// GAS writes `*` before the operand.
    pub const INDIRECT_OPERAND: u32 = 1 << 13;
    /// GAS writes the operand-size override as `.byte 0x66;`.
    pub const OP_SIZE_IS_BYTE_DIRECTIVE: u32 = 1 << 14;
    pub const MEM_SIZE_NOTHING: u32 = 1 << 15;
    pub const BRANCH_SIZE_INFO_SHIFT: u32 = 16;
    pub const BRANCH_SIZE_INFO_MASK: u32 = 7;
    pub const SIGN_EXTEND_INFO_SHIFT: u32 = 19;
    pub const SIGN_EXTEND_INFO_MASK: u32 = 7;
    pub const MEMORY_SIZE_INFO_SHIFT: u32 = 22;
    pub const MEMORY_SIZE_INFO_MASK: u32 = 3;
    pub const FAR_MEMORY_SIZE_INFO_SHIFT: u32 = 24;
    pub const FAR_MEMORY_SIZE_INFO_MASK: u32 = 3;
}

/// `OP_SIZE16/32/64` for a bitness; anything but 16 or 32 is 64.
pub(crate) const fn op_size_flag(bitness: u32) -> u32 {
    match bitness {
        16 => flags::OP_SIZE16,
        32 => flags::OP_SIZE32,
        _ => flags::OP_SIZE64,
    }
}

pub(crate) const fn addr_size_flag(bitness: u32) -> u32 {
    match bitness {
        16 => flags::ADDR_SIZE16,
        32 => flags::ADDR_SIZE32,
        _ => flags::ADDR_SIZE64,
    }
}

/// Size keywords before a near or far branch target.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub(crate) enum BranchSizeInfo {
    None = 0,
    Near = 1,
    NearWord = 2,
    NearDword = 3,
    Word = 4,
    Dword = 5,
    Short = 6,
}

impl BranchSizeInfo {
    pub(crate) const fn from_flags(value: u32) -> Self {
        match (value >> flags::BRANCH_SIZE_INFO_SHIFT) & flags::BRANCH_SIZE_INFO_MASK {
            1 => Self::Near,
            2 => Self::NearWord,
            3 => Self::NearDword,
            4 => Self::Word,
            5 => Self::Dword,
            6 => Self::Short,
            _ => Self::None,
        }
    }

    pub(crate) const fn flags(self) -> u32 {
        (self as u32) << flags::BRANCH_SIZE_INFO_SHIFT
    }
}

/// How an immediate was sign extended, shown by NASM as a size keyword.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub(crate) enum SignExtendInfo {
    None = 0,
    Sex1to2 = 1,
    Sex1to4 = 2,
    Sex1to8 = 3,
    Sex4to8 = 4,
    Sex2 = 5,
    Sex4 = 6,
}

impl SignExtendInfo {
    pub(crate) const fn from_flags(value: u32) -> Self {
        match (value >> flags::SIGN_EXTEND_INFO_SHIFT) & flags::SIGN_EXTEND_INFO_MASK {
            1 => Self::Sex1to2,
            2 => Self::Sex1to4,
            3 => Self::Sex1to8,
            4 => Self::Sex4to8,
            5 => Self::Sex2,
            6 => Self::Sex4,
            _ => Self::None,
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::None,
            1 => Self::Sex1to2,
            2 => Self::Sex1to4,
            3 => Self::Sex1to8,
            4 => Self::Sex4to8,
            5 => Self::Sex2,
            6 => Self::Sex4,
            _ => return None,
        })
    }

    pub(crate) const fn flags(self) -> u32 {
        (self as u32) << flags::SIGN_EXTEND_INFO_SHIFT
    }
}

/// Explicit size inside NASM memory brackets (`[word 1234h]`).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub(crate) enum MemorySizeInfo {
    None = 0,
    Word = 1,
    Dword = 2,
    Qword = 3,
}

impl MemorySizeInfo {
    pub(crate) const fn from_flags(value: u32) -> Self {
        match (value >> flags::MEMORY_SIZE_INFO_SHIFT) & flags::MEMORY_SIZE_INFO_MASK {
            1 => Self::Word,
            2 => Self::Dword,
            3 => Self::Qword,
            _ => Self::None,
        }
    }

    pub(crate) const fn flags(self) -> u32 {
        (self as u32) << flags::MEMORY_SIZE_INFO_SHIFT
    }
}

/// Far pointer width keyword before a far memory operand (`far word`).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub(crate) enum FarMemorySizeInfo {
    None = 0,
    Word = 1,
    Dword = 2,
}

impl FarMemorySizeInfo {
    pub(crate) const fn from_flags(value: u32) -> Self {
        match (value >> flags::FAR_MEMORY_SIZE_INFO_SHIFT) & flags::FAR_MEMORY_SIZE_INFO_MASK {
            1 => Self::Word,
            2 => Self::Dword,
            _ => Self::None,
        }
    }

    pub(crate) const fn flags(self) -> u32 {
        (self as u32) << flags::FAR_MEMORY_SIZE_INFO_SHIFT
    }
}

// ============================================================================
// Operand links
// ============================================================================

/// Operand has no instruction operand and no access class.
pub(crate) const OP_INVALID: i8 = -1;

/// Link value of a synthetic operand with a fixed access class.
pub(crate) const fn synthetic(access: OpAccess) -> i8 {
    -(access as i8) - 2
}

pub(crate) const OP_ACCESS_NONE: i8 = synthetic(OpAccess::None);
pub(crate) const OP_ACCESS_READ: i8 = synthetic(OpAccess::Read);
pub(crate) const OP_ACCESS_COND_READ: i8 = synthetic(OpAccess::CondRead);
pub(crate) const OP_ACCESS_READ_WRITE: i8 = synthetic(OpAccess::ReadWrite);

const fn access_from_link(link: i8) -> Option<OpAccess> {
    Some(match -(link as i32) - 2 {
        0 => OpAccess::None,
        1 => OpAccess::Read,
        2 => OpAccess::CondRead,
        3 => OpAccess::Write,
        4 => OpAccess::CondWrite,
        5 => OpAccess::ReadWrite,
        6 => OpAccess::ReadCondWrite,
        7 => OpAccess::NoMemAccess,
        _ => return None,
    })
}

// ============================================================================
// OperandInfo
// ============================================================================

/// Mnemonic and operand layout of one instruction as a dialect prints it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OperandInfo<'a> {
    pub(crate) mnemonic: &'a str,
    pub(crate) flags: u32,
    pub(crate) op_count: u8,
    pub(crate) kinds: [InstrOpKind; MAX_OP_COUNT],
    pub(crate) registers: [Register; MAX_OP_COUNT],
    pub(crate) links: [i8; MAX_OP_COUNT],
    /// Memory size used for NASM size keywords; `Unknown` when the operand list is synthetic.
    pub(crate) memory_size: MemorySize,
    /// Bit `i` set: register operand `i` is the x87 stack top written as `st`.
    pub(crate) stack_top: u8,
}

impl<'a> OperandInfo<'a> {
    /// No operands.
    pub(crate) const fn empty(mnemonic: &'a str, flags: u32) -> Self {
        Self {
            mnemonic,
            flags,
            op_count: 0,
            kinds: [InstrOpKind::Register; MAX_OP_COUNT],
            registers: [Register::None; MAX_OP_COUNT],
            links: [OP_INVALID; MAX_OP_COUNT],
            memory_size: MemorySize::Unknown,
            stack_top: 0,
        }
    }

    /// The instruction's operands in instruction order.
    pub(crate) fn new(mnemonic: &'a str, instruction: &Instruction, flags: u32) -> Self {
        let mut info = Self::empty(mnemonic, flags);
        info.memory_size = instruction.memory_size();
        let count = instruction.op_count();
        info.op_count = u8::try_from(count).unwrap_or(0);
        for (slot, operand) in (0..count).enumerate() {
            info.kinds[slot] = instruction.op_kind(operand).into();
            info.registers[slot] = instruction.op_register(operand);
            info.links[slot] = i8::try_from(operand).unwrap_or(OP_INVALID);
        }
        info
    }

    /// The instruction's operands reversed (source first), unless `flags`
    /// has `KEEP_OPERAND_ORDER`.
    pub(crate) fn new_reversed(mnemonic: &'a str, instruction: &Instruction, flags: u32) -> Self {
        if flags & flags::KEEP_OPERAND_ORDER != 0 {
            return Self::new(mnemonic, instruction, flags);
        }
        let mut info = Self::empty(mnemonic, flags);
        info.memory_size = instruction.memory_size();
        let count = instruction.op_count();
        info.op_count = u8::try_from(count).unwrap_or(0);
        for (slot, operand) in (0..count).rev().enumerate() {
            info.kinds[slot] = instruction.op_kind(operand).into();
            info.registers[slot] = instruction.op_register(operand);
            info.links[slot] = i8::try_from(operand).unwrap_or(OP_INVALID);
        }
        info
    }

    #[must_use]
    pub const fn mnemonic(&self) -> &'a str {
        self.mnemonic
    }

    #[must_use]
    pub const fn flags(&self) -> u32 {
        self.flags
    }

    #[must_use]
    pub const fn memory_size(&self) -> MemorySize {
        self.memory_size
    }

    /// Number of formatter operands. Declared data can have more than
    /// [`MAX_OP_COUNT`] operands, all of the same kind.
    #[must_use]
    pub const fn op_count(&self) -> u32 {
        self.op_count as u32
    }

    #[must_use]
    pub fn op_kind(&self, operand: u32) -> InstrOpKind {
        usize::try_from(operand)
            .ok()
            .and_then(|i| self.kinds.get(i))
            .copied()
            .unwrap_or(self.kinds[0])
    }

    #[must_use]
    pub fn op_register(&self, operand: u32) -> Register {
        usize::try_from(operand)
            .ok()
            .and_then(|i| self.registers.get(i))
            .copied()
            .unwrap_or(Register::None)
    }

    /// Whether register operand `operand` is the stack-top marker (`st`).
    #[must_use]
    pub fn is_stack_top(&self, operand: u32) -> bool {
        operand < 8 && self.stack_top & (1 << operand) != 0
    }

    fn link(&self, operand: u32) -> i8 {
        usize::try_from(operand)
            .ok()
            .and_then(|i| self.links.get(i))
            .copied()
            .unwrap_or_else(|| if self.is_declare_data() { self.links[0] } else { OP_INVALID })
    }

    fn is_declare_data(&self) -> bool {
        matches!(
            self.kinds[0],
            InstrOpKind::DeclareByte | InstrOpKind::DeclareWord | InstrOpKind::DeclareDword | InstrOpKind::DeclareQword
        )
    }

    /// Instruction operand a formatter operand came from, `None` if synthetic.
    #[must_use]
    pub fn instruction_index(&self, operand: u32) -> Option<u32> {
        if usize::try_from(operand).is_ok_and(|i| i >= MAX_OP_COUNT) {
            return None;
        }
        u32::try_from(self.link(operand)).ok()
    }

    /// Access class of a synthetic operand. `None` for operands that come from
    /// the instruction (their access is the instruction's).
    #[must_use]
    pub fn op_access(&self, operand: u32) -> Option<OpAccess> {
        let link = self.link(operand);
        if link < OP_INVALID { access_from_link(link) } else { None }
    }

    /// Formatter operand showing instruction operand `instruction_operand`.
    #[must_use]
    pub fn operand_index(&self, instruction_operand: u32) -> Option<u32> {
        let count = usize::from(self.op_count).min(MAX_OP_COUNT);
        self.links[..count]
            .iter()
            .position(|&link| u32::try_from(link).ok() == Some(instruction_operand))
            .and_then(|i| u32::try_from(i).ok())
    }

    // ------------------------------------------------------------------------
    // Rule helpers
    // ------------------------------------------------------------------------

    pub(crate) const fn set(&mut self, slot: usize, kind: InstrOpKind, register: Register, link: i8) {
        self.kinds[slot] = kind;
        self.registers[slot] = register;
        self.links[slot] = link;
    }

    /// Copies slot `from` of `source` into slot `to`.
    pub(crate) const fn copy_from(&mut self, to: usize, source: &Self, from: usize) {
        self.set(to, source.kinds[from], source.registers[from], source.links[from]);
    }

    /// Inserts a synthetic decorator operand at `slot`, shifting later operands up.
    pub(crate) fn insert(&mut self, slot: usize, kind: InstrOpKind) {
        let count = usize::from(self.op_count);
        debug_assert!(count < MAX_OP_COUNT, "operand overflow inserting {kind:?} into {count} operands");
        if slot > count || count >= MAX_OP_COUNT {
            return;
        }
        for i in (slot..count).rev() {
            self.kinds[i + 1] = self.kinds[i];
            self.registers[i + 1] = self.registers[i];
            self.links[i + 1] = self.links[i];
        }
        self.set(slot, kind, Register::None, OP_ACCESS_NONE);
        self.op_count += 1;
    }

    /// Removes the operand at `slot`, shifting later operands down.
    pub(crate) fn remove(&mut self, slot: usize) {
        let count = usize::from(self.op_count);
        if slot >= count || count > MAX_OP_COUNT {
            return;
        }
        for i in slot..count - 1 {
            self.kinds[i] = self.kinds[i + 1];
            self.registers[i] = self.registers[i + 1];
            self.links[i] = self.links[i + 1];
        }
        self.set(count - 1, InstrOpKind::Register, Register::None, OP_INVALID);
        self.op_count -= 1;
    }

    pub(crate) fn has_memory_operand(instruction: &Instruction, operands: u32) -> bool {
        (0..operands.min(instruction.op_count())).any(|i| instruction.op_kind(i) == OpKind::Memory)
    }
}

#[cfg(test)]
mod tests {
    use x86fmt_isa::{Code, MemoryOperand, Operand};

    use super::*;

    fn add_mem_reg() -> Instruction {
        Instruction::with_operands(
            Code::Add_rm32_r32,
            &[Operand::Memory(MemoryOperand::base(Register::RAX)), Operand::Register(Register::ECX)],
        )
        .unwrap()
    }

    #[test]
    fn test_new_keeps_order() {
        let instr = add_mem_reg();
        let info = OperandInfo::new("add", &instr, 0);
        assert_eq!(info.op_count(), 2);
        assert_eq!(info.op_kind(0), InstrOpKind::Memory);
        assert_eq!(info.op_register(1), Register::ECX);
        assert_eq!(info.instruction_index(0), Some(0));
        assert_eq!(info.operand_index(1), Some(1));
        assert_eq!(info.op_access(0), None);
    }

    #[test]
    fn test_new_reversed() {
        let instr = add_mem_reg();
        let info = OperandInfo::new_reversed("addl", &instr, 0);
        assert_eq!(info.op_kind(0), InstrOpKind::Register);
        assert_eq!(info.op_kind(1), InstrOpKind::Memory);
        assert_eq!(info.instruction_index(0), Some(1));
        assert_eq!(info.operand_index(0), Some(1));

        let kept = OperandInfo::new_reversed("addl", &instr, flags::KEEP_OPERAND_ORDER);
        assert_eq!(kept.op_kind(0), InstrOpKind::Memory);
    }

    #[test]
    fn test_insert_and_remove() {
        let instr = add_mem_reg();
        let mut info = OperandInfo::new("add", &instr, 0);
        info.insert(1, InstrOpKind::Sae);
        assert_eq!(info.op_count(), 3);
        assert_eq!(info.op_kind(1), InstrOpKind::Sae);
        assert_eq!(info.op_register(2), Register::ECX);
        assert_eq!(info.instruction_index(1), None);
        assert_eq!(info.op_access(1), Some(OpAccess::None));
        assert_eq!(info.operand_index(1), Some(2));

        info.remove(0);
        assert_eq!(info.op_count(), 2);
        assert_eq!(info.op_kind(0), InstrOpKind::Sae);
        assert_eq!(info.operand_index(0), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "operand overflow")]
    fn test_insert_into_full_operand_list() {
        let mut info = OperandInfo::empty("vfoo", 0);
        info.op_count = 5;
        info.insert(5, InstrOpKind::Sae);
    }

    #[test]
    fn test_synthetic_links() {
        assert_eq!(access_from_link(OP_ACCESS_READ), Some(OpAccess::Read));
        assert_eq!(access_from_link(OP_ACCESS_READ_WRITE), Some(OpAccess::ReadWrite));
        assert_eq!(access_from_link(OP_ACCESS_NONE), Some(OpAccess::None));
        let mut info = OperandInfo::empty("x", 0);
        info.op_count = 1;
        info.set(0, InstrOpKind::Register, Register::XMM0, OP_ACCESS_READ);
        assert_eq!(info.op_access(0), Some(OpAccess::Read));
        assert_eq!(info.instruction_index(0), None);
    }

    #[test]
    fn test_flag_fields() {
        let value = BranchSizeInfo::NearDword.flags() | SignExtendInfo::Sex4to8.flags() | MemorySizeInfo::Qword.flags();
        assert_eq!(BranchSizeInfo::from_flags(value), BranchSizeInfo::NearDword);
        assert_eq!(SignExtendInfo::from_flags(value), SignExtendInfo::Sex4to8);
        assert_eq!(MemorySizeInfo::from_flags(value), MemorySizeInfo::Qword);
        assert_eq!(FarMemorySizeInfo::from_flags(value), FarMemorySizeInfo::None);
        assert_eq!(BranchSizeInfo::Short.flags(), 6 << 16);
        assert_eq!(op_size_flag(32), flags::OP_SIZE32);
        assert_eq!(addr_size_flag(0), flags::ADDR_SIZE64);
    }
}
